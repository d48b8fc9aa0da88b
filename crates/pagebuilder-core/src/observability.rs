use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

static INIT: OnceCell<()> = OnceCell::new();

const DEFAULT_LOG_FILE: &str = "pagebuilder.logs.jsonl";

/// Parses the usual on/off spellings (`1`, `true`, `yes`, `on`, `enabled`, and their opposites).
pub fn parse_bool_env(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" | "enabled" => Some(true),
        "0" | "false" | "no" | "off" | "disabled" => Some(false),
        _ => None,
    }
}

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Compact lines on stderr. Stdout is left for command output.
    Stderr,
    /// One JSON object per line, appended to `dir/file_name`.
    JsonFile { dir: PathBuf, file_name: String },
}

/// Logging setup as read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub enabled: bool,
    /// `EnvFilter` directive; `None` falls back to `RUST_LOG`, then `info`.
    pub filter: Option<String>,
    pub sink: LogSink,
}

impl LogSettings {
    /// Reads:
    /// - `PAGEBUILDER_OBSERVABILITY_ENABLED` (or `PAGEBUILDER_OBSERVABILITY`), default on.
    ///   Unrecognized values count as on.
    /// - `PAGEBUILDER_LOG_LEVEL`, e.g. `debug` or `pagebuilder_blocks=debug`.
    /// - `PAGEBUILDER_JSON_LOG_PATH`, which switches to the JSONL sink.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let enabled = lookup("PAGEBUILDER_OBSERVABILITY_ENABLED")
            .or_else(|| lookup("PAGEBUILDER_OBSERVABILITY"))
            .map_or(true, |raw| parse_bool_env(&raw).unwrap_or(true));
        let filter = lookup("PAGEBUILDER_LOG_LEVEL").filter(|v| !v.trim().is_empty());
        let sink = match lookup("PAGEBUILDER_JSON_LOG_PATH") {
            Some(raw) if !raw.trim().is_empty() => json_sink(raw.trim()),
            _ => LogSink::Stderr,
        };
        Self {
            enabled,
            filter,
            sink,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        self.filter
            .as_deref()
            .and_then(|directive| EnvFilter::try_new(directive).ok())
            .or_else(|| EnvFilter::try_from_default_env().ok())
            .unwrap_or_else(|| EnvFilter::new("info"))
    }
}

fn json_sink(raw: &str) -> LogSink {
    let path = Path::new(raw);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(DEFAULT_LOG_FILE)
        .to_string();
    LogSink::JsonFile { dir, file_name }
}

/// Installs the global subscriber from `LogSettings::from_env`. Later calls,
/// and calls after another subscriber was installed, do nothing.
pub fn init_observability() {
    INIT.get_or_init(|| install(LogSettings::from_env()));
}

fn install(settings: LogSettings) {
    if !settings.enabled {
        return;
    }
    let filter = settings.env_filter();
    match settings.sink {
        LogSink::JsonFile { dir, file_name } => {
            if let Err(err) = std::fs::create_dir_all(&dir) {
                eprintln!("cannot create log directory {}: {err}", dir.display());
                return;
            }
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_target(false)
                .with_writer(tracing_appender::rolling::never(dir, file_name));
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init();
        }
        LogSink::Stderr => {
            let layer = tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr);
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> LogSettings {
        let env: HashMap<&str, &str> = pairs.iter().copied().collect();
        LogSettings::from_lookup(|key| env.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn parses_common_flag_spellings() {
        assert_eq!(parse_bool_env(" Yes "), Some(true));
        assert_eq!(parse_bool_env("off"), Some(false));
        assert_eq!(parse_bool_env("maybe"), None);
    }

    #[test]
    fn defaults_to_enabled_stderr() {
        assert_eq!(
            settings(&[]),
            LogSettings {
                enabled: true,
                filter: None,
                sink: LogSink::Stderr,
            }
        );
        assert!(settings(&[("PAGEBUILDER_OBSERVABILITY_ENABLED", "banana")]).enabled);
        assert!(!settings(&[("PAGEBUILDER_OBSERVABILITY", "off")]).enabled);
    }

    #[test]
    fn json_path_without_directory_lands_in_cwd() {
        let s = settings(&[
            ("PAGEBUILDER_JSON_LOG_PATH", "generate.jsonl"),
            ("PAGEBUILDER_LOG_LEVEL", "pagebuilder_blocks=debug"),
        ]);
        assert_eq!(
            s.sink,
            LogSink::JsonFile {
                dir: PathBuf::from("."),
                file_name: "generate.jsonl".into(),
            }
        );
        assert_eq!(s.filter.as_deref(), Some("pagebuilder_blocks=debug"));
    }

    #[test]
    fn json_path_keeps_its_directory() {
        assert_eq!(
            settings(&[("PAGEBUILDER_JSON_LOG_PATH", "logs/run/")]).sink,
            LogSink::JsonFile {
                dir: PathBuf::from("logs"),
                file_name: "run".into(),
            }
        );
    }
}
