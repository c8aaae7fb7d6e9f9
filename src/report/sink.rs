// ==========================================
// Dual-channel report sink
// ==========================================
// One emit call feeds two divergent representations: the console
// gets the visual form with ANSI decoration, the log file gets the
// logical form undecorated. The log is truncated at sink creation
// and is the permanent record of the run; log-write failures are
// swallowed (reporting stays best-effort).
// ==========================================

use crate::report::normalize::normalize;
use std::fs::File;
use std::io::{BufWriter, Stdout, Write};

const BOLD_YELLOW: &str = "\x1b[1;33m";
const BOLD_GREEN: &str = "\x1b[1;32m";
const BOLD_RED: &str = "\x1b[1;31m";
const RESET: &str = "\x1b[0m";

/// Report line severity, mapped onto the usual log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
}

/// Field emphasis on the console channel. The log channel never
/// carries decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Yellow,
    Green,
    Red,
}

impl Emphasis {
    fn ansi(self) -> &'static str {
        match self {
            Emphasis::Yellow => BOLD_YELLOW,
            Emphasis::Green => BOLD_GREEN,
            Emphasis::Red => BOLD_RED,
        }
    }
}

/// Options of one emit call.
#[derive(Debug, Clone, Copy)]
pub struct EmitOptions {
    pub level: Level,
    pub emphasis: Option<Emphasis>,
    /// Treat the text as mixed-direction: normalize once, send the
    /// visual form to the console and the logical form to the log.
    pub bidi: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            level: Level::Info,
            emphasis: None,
            bidi: false,
        }
    }
}

impl EmitOptions {
    pub fn info() -> Self {
        Self::default()
    }

    pub fn warning() -> Self {
        Self {
            level: Level::Warning,
            ..Self::default()
        }
    }

    pub fn error() -> Self {
        Self {
            level: Level::Error,
            ..Self::default()
        }
    }

    pub fn with_emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = Some(emphasis);
        self
    }

    pub fn bidi(mut self) -> Self {
        self.bidi = true;
        self
    }
}

/// One rendering unit: an undecorated prefix (field label), logical
/// text, optional visual variant, severity and emphasis. Consumed
/// immediately; only the rendered text persists.
#[derive(Debug, Clone)]
pub struct ReportLine {
    pub prefix: String,
    pub logical: String,
    pub visual: Option<String>,
    pub level: Level,
    pub emphasis: Option<Emphasis>,
}

/// Console destination of the sink.
pub enum Console {
    Stdout(Stdout),
    /// Captured buffer (tests)
    Buffer(Vec<u8>),
}

impl Write for Console {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            Console::Stdout(out) => out.write(buf),
            Console::Buffer(buf_out) => buf_out.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Console::Stdout(out) => out.flush(),
            Console::Buffer(_) => Ok(()),
        }
    }
}

// ==========================================
// ReportSink
// ==========================================

/// Dual-channel emitter: interactive console + append-once log file.
pub struct ReportSink {
    console: Console,
    log: Option<BufWriter<File>>,
    color: bool,
}

impl ReportSink {
    /// Create a sink writing to stdout and truncating the log file.
    ///
    /// A log that cannot be created degrades the sink to console-only
    /// with a diagnostic; the run itself continues.
    pub fn create(log_path: &str) -> Self {
        let log = match File::create(log_path) {
            Ok(file) => Some(BufWriter::new(file)),
            Err(e) => {
                tracing::warn!(path = log_path, error = %e, "report log unavailable, console only");
                None
            }
        };

        Self {
            console: Console::Stdout(std::io::stdout()),
            log,
            color: true,
        }
    }

    /// Sink over an in-memory console, optionally with a log file
    /// (tests).
    pub fn with_buffer(log_path: Option<&str>) -> Self {
        let log = log_path
            .and_then(|path| File::create(path).ok())
            .map(BufWriter::new);
        Self {
            console: Console::Buffer(Vec::new()),
            log,
            color: true,
        }
    }

    /// Disable ANSI decoration on the console channel.
    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }

    /// Emit one report line to both channels.
    pub fn emit(&mut self, text: &str, options: EmitOptions) {
        self.emit_field("", text, options);
    }

    /// Emit a labelled field line. The label stays undecorated and in
    /// place on both channels; normalization and emphasis apply to
    /// the value only.
    pub fn emit_field(&mut self, label: &str, value: &str, options: EmitOptions) {
        let line = if options.bidi {
            let form = normalize(value);
            ReportLine {
                prefix: label.to_string(),
                logical: form.logical,
                visual: Some(form.visual),
                level: options.level,
                emphasis: options.emphasis,
            }
        } else {
            ReportLine {
                prefix: label.to_string(),
                logical: value.to_string(),
                visual: None,
                level: options.level,
                emphasis: options.emphasis,
            }
        };

        self.write_console(&line);
        self.write_log(&line);
    }

    /// Info-level line without emphasis.
    pub fn info(&mut self, text: &str) {
        self.emit(text, EmitOptions::info());
    }

    /// Warning-level line without emphasis.
    pub fn warning(&mut self, text: &str) {
        self.emit(text, EmitOptions::warning());
    }

    /// Error-level line without emphasis.
    pub fn error(&mut self, text: &str) {
        self.emit(text, EmitOptions::error());
    }

    /// Flush both channels; log failures stay best-effort.
    pub fn flush(&mut self) {
        let _ = self.console.flush();
        if let Some(log) = self.log.as_mut() {
            if let Err(e) = log.flush() {
                tracing::debug!(error = %e, "report log flush failed");
            }
        }
    }

    /// Console text of the captured buffer (tests).
    pub fn console_text(&self) -> Option<String> {
        match &self.console {
            Console::Stdout(_) => None,
            Console::Buffer(buf) => Some(String::from_utf8_lossy(buf).into_owned()),
        }
    }

    fn write_console(&mut self, line: &ReportLine) {
        let text = line.visual.as_deref().unwrap_or(&line.logical);

        let decoration = if !self.color {
            None
        } else {
            line.emphasis.map(Emphasis::ansi).or(match line.level {
                Level::Error => Some(BOLD_RED),
                Level::Warning => Some(BOLD_YELLOW),
                Level::Debug | Level::Info => None,
            })
        };

        // Console writes are ephemeral; a closed pipe is ignored
        let prefix = &line.prefix;
        let _ = match decoration {
            Some(code) => writeln!(self.console, "{prefix}{code}{text}{RESET}"),
            None => writeln!(self.console, "{prefix}{text}"),
        };
    }

    fn write_log(&mut self, line: &ReportLine) {
        if let Some(log) = self.log.as_mut() {
            if let Err(e) = writeln!(log, "{}{}", line.prefix, line.logical) {
                tracing::debug!(error = %e, "report log write failed");
            }
        }
    }
}

impl Drop for ReportSink {
    fn drop(&mut self) {
        self.flush();
    }
}
