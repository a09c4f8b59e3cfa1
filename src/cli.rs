//! Command-line argument parsing for the replay tool
//!
//! Supports:
//! - Replaying a YAML interaction script
//! - Overriding the config file
//! - Text or JSON output

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Replay bottom sheet interactions and print the resulting states
#[derive(Parser, Debug)]
#[command(name = "sheet-replay", version, about = "Replay bottom sheet interactions")]
pub struct CliArgs {
    /// YAML script of events to replay
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Config file to use instead of ~/.config/bottom-sheet/config.yaml
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Override the initial viewport height from the script
    #[arg(long, value_name = "PX")]
    pub viewport: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["sheet-replay", "script.yaml"]);
        assert_eq!(args.script, PathBuf::from("script.yaml"));
        assert_eq!(args.format, OutputFormat::Text);
        assert!(args.config.is_none());
        assert!(args.viewport.is_none());
    }

    #[test]
    fn test_json_and_config() {
        let args = CliArgs::parse_from([
            "sheet-replay",
            "s.yaml",
            "--format",
            "json",
            "-c",
            "custom.yaml",
            "--viewport",
            "640",
        ]);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.config, Some(PathBuf::from("custom.yaml")));
        assert_eq!(args.viewport, Some(640.0));
    }

    #[test]
    fn test_missing_script_is_error() {
        assert!(CliArgs::try_parse_from(["sheet-replay"]).is_err());
    }
}
