//! tagmatch's own diagnostic logger: cache evictions, compile failures and
//! config problems are reported here instead of being swallowed.
//!
//! Uses `OnceLock` so the sink is installed exactly once, even if
//! multiple entry points (CLI, host application, tests) race to call `init`.
//! Nothing is reported until one of the `init*` functions runs, so a host that
//! never opts in sees no output at all.

use crate::config::Config;
use crate::level::Level;
use std::io::{self, IsTerminal, Write};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU8, Ordering};

static INTERNAL_LOGGER: OnceLock<Diagnostics> = OnceLock::new();

/// One diagnostic line, borrowed from the call site.
#[derive(Debug, Clone, Copy)]
pub struct DiagnosticRecord<'a> {
    pub level: Level,
    pub scope: &'a str,
    pub message: &'a str,
}

/// Hosts usually want diagnostics in their own log pipeline rather than on stderr.
///
/// `Send + Sync` because matching, and therefore reporting, happens on arbitrary threads.
pub trait Sink: Send + Sync {
    fn write(&self, record: &DiagnosticRecord<'_>);
}

/// Default sink: `[level] SCOPE  message` on stderr.
#[derive(Debug, Clone, Copy)]
pub struct StderrSink {
    colors: bool,
}

impl StderrSink {
    #[must_use]
    pub const fn new(colors: bool) -> Self {
        Self { colors }
    }
}

impl Default for StderrSink {
    fn default() -> Self {
        Self::new(io::stderr().is_terminal())
    }
}

impl Sink for StderrSink {
    fn write(&self, record: &DiagnosticRecord<'_>) {
        let mut stderr = io::stderr().lock();
        let _ = if self.colors {
            writeln!(
                stderr,
                "{}[{}]\x1b[0m {:<8} {}",
                record.level.ansi(),
                record.level,
                record.scope,
                record.message
            )
        } else {
            writeln!(
                stderr,
                "[{}] {:<8} {}",
                record.level, record.scope, record.message
            )
        };
    }
}

struct Diagnostics {
    /// Atomic so the threshold can follow a config loaded after the sink was installed.
    min_level: AtomicU8,
    sink: Box<dyn Sink>,
}

impl Diagnostics {
    fn min_level(&self) -> Level {
        Level::from_index(self.min_level.load(Ordering::Relaxed))
    }
}

/// Installs the stderr sink at `level`. Only the first sink installed is kept.
pub fn init(level: Level) {
    if init_with_sink(level, StderrSink::default()) {
        debug("INTERNAL", &format!("Diagnostics enabled at level {level}"));
    }
}

/// Applies the config's threshold, installing the stderr sink first if nothing is installed yet.
///
/// Callers that load config can `init` early, so warnings raised while loading are seen,
/// then call this to switch to the configured level.
pub fn init_with_config(config: &Config) {
    let level = config.parse_level();
    init(level);
    set_level(level);
}

/// Changes the threshold of the installed logger. Returns `false` before any `init*` call.
pub fn set_level(level: Level) -> bool {
    INTERNAL_LOGGER.get().is_some_and(|diagnostics| {
        diagnostics.min_level.store(level as u8, Ordering::Relaxed);
        true
    })
}

/// Routes diagnostics into a caller-supplied sink.
///
/// Returns `false` when a logger was already installed; the given sink is dropped in that case.
pub fn init_with_sink(level: Level, sink: impl Sink + 'static) -> bool {
    let mut installed = false;
    INTERNAL_LOGGER.get_or_init(|| {
        installed = true;
        Diagnostics {
            min_level: AtomicU8::new(level as u8),
            sink: Box::new(sink),
        }
    });
    installed
}

/// Lets hot paths skip building a message that would be discarded anyway.
#[must_use]
pub fn enabled(level: Level) -> bool {
    INTERNAL_LOGGER
        .get()
        .is_some_and(|diagnostics| level >= diagnostics.min_level())
}

/// Pre-init calls silently vanish rather than crashing.
fn log(level: Level, scope: &str, msg: &str) {
    if let Some(diagnostics) = INTERNAL_LOGGER.get()
        && level >= diagnostics.min_level()
    {
        diagnostics.sink.write(&DiagnosticRecord {
            level,
            scope,
            message: msg,
        });
    }
}

pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Non-fatal anomalies: invalid rule patterns, missing include files.
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
