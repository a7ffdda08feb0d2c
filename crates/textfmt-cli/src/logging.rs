//! Subscriber setup for the `textfmt` binary.
//!
//! Library crates only emit `tracing` events. What they emit, by level:
//!
//! - `info`: command progress (`price` batch sizes)
//! - `debug`: text mismatches and random seeds
//! - `trace`: the rule that classified every price input
//!
//! Nothing is printed below `warn` unless asked for. `RUST_LOG` wins over the
//! configured level unless the level came from an explicit flag.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Crates whose events are shown at the configured level.
const OWN_TARGETS: &[&str] = &[
    "textfmt",
    "textfmt_cli",
    "textfmt_price",
    "textfmt_random",
    "textfmt_text",
];

type FilteredRegistry = Layered<EnvFilter, Registry>;
type BoxedLayer = Box<dyn Layer<FilteredRegistry> + Send + Sync + 'static>;

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` replace the directives built from `level_filter`.
    pub use_env_filter: bool,
    pub with_timestamps: bool,
    /// Print the module path of each event.
    pub with_target: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Append to this file instead of writing to stderr.
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-field human output.
    #[default]
    Pretty,
    /// One line per event.
    Compact,
    /// One JSON object per event.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_timestamps: false,
            with_target: false,
            with_ansi: true,
            format: LogFormat::Pretty,
            log_file: None,
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn with_level_filter(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub fn with_timestamps(mut self, enable: bool) -> Self {
        self.with_timestamps = enable;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// `RUST_LOG` when allowed and parseable, otherwise our crates at
    /// `level_filter` and third-party crates at `warn`.
    pub fn env_filter(&self) -> EnvFilter {
        if self.use_env_filter
            && let Ok(filter) = EnvFilter::try_from_default_env()
        {
            return filter;
        }
        let level = self.level_filter.to_string().to_lowercase();
        let mut directives = vec!["warn".to_string()];
        directives.extend(OWN_TARGETS.iter().map(|target| format!("{target}={level}")));
        EnvFilter::new(directives.join(","))
    }

    fn fmt_layer<W>(&self, writer: W) -> BoxedLayer
    where
        W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
    {
        let layer = fmt::layer()
            .with_writer(writer)
            .with_target(self.with_target);
        match (self.format, self.with_timestamps) {
            (LogFormat::Json, _) => layer.json().boxed(),
            (LogFormat::Compact, true) => layer.compact().with_ansi(self.with_ansi).boxed(),
            (LogFormat::Compact, false) => layer
                .compact()
                .without_time()
                .with_ansi(self.with_ansi)
                .boxed(),
            (LogFormat::Pretty, true) => layer.with_ansi(self.with_ansi).boxed(),
            (LogFormat::Pretty, false) => layer.without_time().with_ansi(self.with_ansi).boxed(),
        }
    }
}

/// Install the global subscriber, writing to the log file or stderr.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            init_logging_with_writer(config, LogFile::new(file));
        }
        None => init_logging_with_writer(config, io::stderr),
    }
    Ok(())
}

/// Install the global subscriber with a caller-supplied writer.
///
/// Only the first call installs anything.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let installed = tracing_subscriber::registry()
        .with(config.env_filter())
        .with(config.fmt_layer(writer))
        .try_init();
    if installed.is_err() {
        tracing::debug!("subscriber already installed, keeping it");
    }
}

/// Log file shared by every event writer.
#[derive(Clone)]
struct LogFile(Arc<Mutex<File>>);

impl LogFile {
    fn new(file: File) -> Self {
        Self(Arc::new(Mutex::new(file)))
    }

    fn with_file<T>(&self, op: impl FnOnce(&mut File) -> io::Result<T>) -> io::Result<T> {
        let mut file = self
            .0
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        op(&mut file)
    }
}

impl Write for LogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.with_file(|file| file.write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.with_file(File::flush)
    }
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogFile;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_quiet() {
        let config = LogConfig::default();
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.use_env_filter);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_builder() {
        let config = LogConfig::default()
            .with_level_filter(LevelFilter::TRACE)
            .with_format(LogFormat::Json)
            .with_ansi(false)
            .with_timestamps(true)
            .with_log_file(Some(PathBuf::from("textfmt.log")));
        assert_eq!(config.level_filter, LevelFilter::TRACE);
        assert_eq!(config.format, LogFormat::Json);
        assert!(!config.with_ansi);
        assert!(config.with_timestamps);
        assert_eq!(config.log_file, Some(PathBuf::from("textfmt.log")));
    }

    #[test]
    fn test_explicit_level_covers_all_crates() {
        let config = LogConfig {
            use_env_filter: false,
            ..LogConfig::default()
        }
        .with_level_filter(LevelFilter::DEBUG);
        let rendered = config.env_filter().to_string();
        for target in OWN_TARGETS {
            assert!(rendered.contains(&format!("{target}=debug")), "{rendered}");
        }
    }
}
