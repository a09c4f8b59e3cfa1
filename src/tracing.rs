//! Logging setup and state snapshots
//!
//! Console output goes to stderr so it never mixes with replay output on
//! stdout. Its filter comes from `SHEET_LOG`, then `RUST_LOG`, then
//! [`DEFAULT_CONSOLE_FILTER`]:
//! - `SHEET_LOG=sheet::gesture=debug` - every gesture decision
//! - `SHEET_LOG=sheet::drag=trace,sheet::layout=debug` - drag releases and layouts
//! - `SHEET_LOG=message=debug` - every message entering `update()`
//!
//! Gesture, layout and message events are also appended at debug level to
//! `logs/sheet.log` under the config directory, rotated daily.

use std::path::PathBuf;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::SheetModel;
use crate::sheet::PanelState;

/// Environment variable checked before `RUST_LOG`
pub const LOG_ENV: &str = "SHEET_LOG";

pub const DEFAULT_CONSOLE_FILTER: &str = "warn";

/// Targets recorded in the log file
const FILE_FILTER: &str = "warn,bottom_sheet=debug,sheet=debug,message=debug";

const LOG_FILE_PREFIX: &str = "sheet.log";

/// Pick the console filter directives from the two environment variables
pub fn console_directives(sheet_log: Option<&str>, rust_log: Option<&str>) -> String {
    [sheet_log, rust_log]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|directives| !directives.is_empty())
        .unwrap_or(DEFAULT_CONSOLE_FILTER)
        .to_string()
}

fn console_filter() -> EnvFilter {
    let sheet_log = std::env::var(LOG_ENV).ok();
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = console_directives(sheet_log.as_deref(), rust_log.as_deref());
    EnvFilter::try_new(&directives).unwrap_or_else(|e| {
        eprintln!("Ignoring log filter {:?}: {}", directives, e);
        EnvFilter::new(DEFAULT_CONSOLE_FILTER)
    })
}

/// Install the console and file subscribers
///
/// Returns the directory the log file is written to, or `None` when file
/// logging is unavailable. Does nothing if a subscriber is already installed.
pub fn init() -> Option<PathBuf> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(console_filter());

    let logs_dir = match crate::config_paths::ensure_logs_dir() {
        Ok(dir) => Some(dir),
        Err(e) => {
            eprintln!("File logging disabled: {:#}", e);
            None
        }
    };

    let file_layer = logs_dir.as_deref().map(|dir| {
        fmt::layer()
            .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
            .with_ansi(false)
            .with_target(true)
            .with_filter(EnvFilter::new(FILE_FILTER))
    });

    let installed = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .is_ok();

    logs_dir.filter(|_| installed)
}

/// Lightweight snapshot of sheet state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct SheetSnapshot {
    pub state: PanelState,
    pub height: f32,
    pub layout_seq: Option<u64>,
    pub dragging: bool,
}

impl SheetSnapshot {
    pub fn from_model(model: &SheetModel) -> Self {
        Self {
            state: model.state,
            height: model.height,
            layout_seq: model.layout_seq,
            dragging: model.drag.is_some(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SheetSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.state != other.state {
            changes.push(format!("state: {} → {}", self.state, other.state));
        }
        if self.height != other.height {
            changes.push(format!("height: {} → {}", self.height, other.height));
        }
        if self.layout_seq != other.layout_seq {
            changes.push(format!(
                "layout: {:?} → {:?}",
                self.layout_seq, other.layout_seq
            ));
        }
        if self.dragging != other.dragging {
            let status = if other.dragging { "started" } else { "ended" };
            changes.push(format!("drag {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
