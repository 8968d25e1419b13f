//! Logging utilities with colored output and step status tags.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` / `debug_do!` for output only shown with `--verbose`
//! - `StatusReporter` for the `[Success]` / `[Fail]` / `[Warning]` tags
//!   appended after each step's description line
//!
//! # Example
//!
//! ```ignore
//! log!("scan"; "found {} files", count);
//!
//! let mut status = TerminalStatus::new();
//! status.step("Scanning workshop content");
//! status.finish(Status::Success);
//! ```

use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use std::{
    io::{Write, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Execute code only when --verbose is enabled
///
/// Use this to avoid computing debug data when not needed.
#[macro_export]
macro_rules! debug_do {
    ($($body:tt)*) => {{
        if $crate::logger::is_verbose() {
            $($body)*
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stdout = stdout().lock();
    execute!(stdout, Clear(ClearType::UntilNewLine)).ok();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "fastdl" => prefix.bright_blue().bold().to_string(),
        "workshop" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// Step Status
// ============================================================================

/// Outcome tag rendered after a step description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Fail,
    Warning,
}

impl Status {
    /// Tag text shown between the brackets.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Fail => "Fail",
            Self::Warning => "Warning",
        }
    }
}

/// Sink for step descriptions and their status tags.
///
/// The scan, scrape and write stages only talk to this trait, so they can be
/// driven by a terminal in the binary and by a recorder in tests.
pub trait StatusReporter {
    /// Begin a step: print its description, leaving the line open.
    fn step(&mut self, description: &str);

    /// Close the open step with a tag.
    fn finish(&mut self, status: Status);

    /// Print raw text (the last-resort echo of the generated script).
    fn echo(&mut self, text: &str);

    /// A standalone warning line.
    fn warn(&mut self, message: &str) {
        self.step(message);
        self.finish(Status::Warning);
    }
}

/// `StatusReporter` writing colored tags to stdout.
#[derive(Debug, Default)]
pub struct TerminalStatus {
    /// Whether a step description is waiting for its tag
    open: bool,
}

impl TerminalStatus {
    pub const fn new() -> Self {
        Self { open: false }
    }
}

impl StatusReporter for TerminalStatus {
    fn step(&mut self, description: &str) {
        let mut stdout = stdout().lock();
        if self.open {
            writeln!(stdout).ok();
        }
        write!(stdout, "{description}").ok();
        stdout.flush().ok();
        self.open = true;
    }

    fn finish(&mut self, status: Status) {
        let label = status.label();
        let tag = match status {
            Status::Success => label.green().bold().to_string(),
            Status::Fail => label.red().bold().to_string(),
            Status::Warning => label.yellow().bold().to_string(),
        };

        let mut stdout = stdout().lock();
        writeln!(
            stdout,
            " {}{}{}",
            "[".bright_white().bold(),
            tag,
            "]".bright_white().bold()
        )
        .ok();
        stdout.flush().ok();
        self.open = false;
    }

    fn echo(&mut self, text: &str) {
        let mut stdout = stdout().lock();
        if self.open {
            writeln!(stdout).ok();
            self.open = false;
        }
        writeln!(stdout, "{text}").ok();
        stdout.flush().ok();
    }
}

/// `StatusReporter` that records every step for assertions.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingStatus {
    /// Finished steps as `(description, status)`
    pub steps: Vec<(String, Status)>,
    /// Text passed to `echo`
    pub echoed: Vec<String>,
    pending: Option<String>,
}

#[cfg(test)]
impl RecordingStatus {
    /// Status recorded for the first step whose description contains `needle`.
    pub fn status_of(&self, needle: &str) -> Option<Status> {
        self.steps
            .iter()
            .find(|(description, _)| description.contains(needle))
            .map(|(_, status)| *status)
    }
}

#[cfg(test)]
impl StatusReporter for RecordingStatus {
    fn step(&mut self, description: &str) {
        self.pending = Some(description.to_string());
    }

    fn finish(&mut self, status: Status) {
        let description = self.pending.take().unwrap_or_default();
        self.steps.push((description, status));
    }

    fn echo(&mut self, text: &str) {
        self.echoed.push(text.to_string());
    }
}

// ============================================================================
// Tests
// ============================================================================
