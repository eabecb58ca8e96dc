//! Setup and console plumbing shared by every subcommand.

use super::{Host, ProgressReporter};
use crate::Result;
use crate::config::Config;
use crate::ssc::{Gateway, Repository};
use clap::{Args, ValueEnum};
use core::error::Error;
use core::fmt::Display;
use ohno::{AppError, app_err};
use owo_colors::OwoColorize;
use std::io::{IsTerminal, Write, stderr, stdout};
use std::path::Path;

/// Color mode configuration for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always use colors
    Always,

    /// Never use colors
    Never,

    /// Use colors if the output is a terminal, otherwise don't use colors
    Auto,
}

impl ColorMode {
    fn enabled(self, is_terminal: impl FnOnce() -> bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => is_terminal(),
        }
    }
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Options accepted by every subcommand
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// SSC URL (e.g., https://sast.example.com)
    #[arg(long, short = 'u', value_name = "URL", global = true)]
    pub url: Option<String>,

    /// SSC API token
    #[arg(long, short = 't', value_name = "TOKEN", global = true)]
    pub token: Option<String>,

    /// Accept TLS certificates that cannot be verified, such as self-signed ones
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", global = true)]
    pub log_level: LogLevel,
}

/// Console streams and the SSC repository, set up once per invocation.
pub struct Common<'a, H: Host> {
    pub repository: Repository,
    host: &'a mut H,
    color: ColorMode,
    log_level: LogLevel,
}

impl<H: Host> core::fmt::Debug for Common<'_, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Common")
            .field("repository", &self.repository)
            .field("host", &"<dyn Host>")
            .field("color", &self.color)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl<'a, H: Host> Common<'a, H> {
    /// Initialize logging, resolve the connection settings, and build the repository.
    ///
    /// A configuration failure is reported on the host's error stream before it is returned.
    pub fn new(host: &'a mut H, args: &GlobalArgs) -> Result<Self> {
        init_logging(args.log_level);

        let gateway = Config::load(Path::new("."), args.url.as_deref(), args.token.as_deref())
            .map_err(|e| error_chain(&e))
            .and_then(|config| {
                let config = Config {
                    accept_invalid_certs: args.insecure,
                    ..config
                };
                log::debug!(target: LOG_TARGET, "Using {config:?}");
                Gateway::new(&config).map_err(|e| format!("{e:#}"))
            });

        match gateway {
            Ok(gateway) => Ok(Self {
                repository: Repository::new(gateway),
                host,
                color: args.color,
                log_level: args.log_level,
            }),
            Err(detail) => Err(report_failure(host, args.color, "Error loading configuration", detail)),
        }
    }

    pub fn stdout_colors(&self) -> bool {
        self.color.enabled(|| stdout().is_terminal())
    }

    pub fn stderr_colors(&self) -> bool {
        self.color.enabled(|| stderr().is_terminal())
    }

    /// A progress bar on stderr, shown only when diagnostic logging is off.
    pub fn progress_reporter(&self) -> ProgressReporter {
        ProgressReporter::new(self.log_level == LogLevel::None, self.stderr_colors())
    }

    /// Write a plain line to standard output.
    pub fn say(&mut self, text: impl Display) {
        let _ = writeln!(self.host.output(), "{text}");
    }

    /// Write a coloured line to standard output, or to standard error when `to_stderr` is set.
    pub fn announce(&mut self, tone: Tone, text: impl Display, to_stderr: bool) {
        if to_stderr {
            let text = tone.paint(text, self.stderr_colors());
            let _ = writeln!(self.host.error(), "{text}");
        } else {
            let text = tone.paint(text, self.stdout_colors());
            let _ = writeln!(self.host.output(), "{text}");
        }
    }

    /// Write rendered report text to standard output as-is.
    pub fn emit(&mut self, rendered: &str) {
        let _ = write!(self.host.output(), "{rendered}");
    }

    /// Report a failed operation in red and terminate with status 1.
    pub fn fail(&mut self, context: &str, err: &(dyn Error + 'static)) -> AppError {
        report_failure(&mut *self.host, self.color, context, error_chain(err))
    }
}

const LOG_TARGET: &str = "  commands";

/// Foreground colour of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Notice,
    Hint,
    Failure,
}

impl Tone {
    fn paint(self, text: impl Display, use_colors: bool) -> String {
        if !use_colors {
            return text.to_string();
        }

        match self {
            Self::Success => text.green().to_string(),
            Self::Notice => text.yellow().to_string(),
            Self::Hint => text.cyan().to_string(),
            Self::Failure => text.red().to_string(),
        }
    }
}

fn report_failure<H: Host>(host: &mut H, color: ColorMode, context: &str, detail: String) -> AppError {
    let message = format!("{context}: {detail}");
    let text = Tone::Failure.paint(&message, color.enabled(|| stderr().is_terminal()));
    let _ = writeln!(host.error(), "{text}");
    host.exit(1);
    app_err!("{message}")
}

/// `err` followed by each of its sources, separated by `": "`.
pub fn error_chain(err: &(dyn Error + 'static)) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        text.push_str(": ");
        text.push_str(&inner.to_string());
        source = inner.source();
    }
    text
}

/// Initialize logger based on log level
fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // A second invocation in the same process keeps the first logger.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}
