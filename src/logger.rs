//! Logging utilities with colored output and progress display.
//!
//! This module provides:
//! - `log!` macro for formatted stderr output with colored prefixes
//! - `debug!` macro for output that only appears with `--verbose`
//! - `ProgressLine` for single-line progress display with multiple counters
//!
//! Everything here writes to stderr; stdout carries only command output.
//!
//! # Example
//!
//! ```ignore
//! log!("bundle"; "generated {} with {} files", name, count);
//!
//! let progress = ProgressLine::new(&[("read", 42)]);
//! progress.inc("read");
//! progress.finish();
//! ```

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Stream, Style};
use parking_lot::Mutex;
use std::{
    io::{Write, stderr},
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
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

/// Active progress line count (for log coordination)
static BAR_COUNT: AtomicUsize = AtomicUsize::new(0);

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
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
#[allow(clippy::cast_possible_truncation)] // Safe: bars count is always small
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);

    let mut stderr = stderr().lock();

    let bar_count = BAR_COUNT.load(Ordering::SeqCst);
    if bar_count > 0 {
        execute!(stderr, cursor::MoveToColumn(0)).ok();
        execute!(stderr, Clear(ClearType::CurrentLine)).ok();
    }

    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    let style = match module.to_ascii_lowercase().as_str() {
        "bundle" => Style::new().bright_green().bold(),
        "error" => Style::new().bright_red().bold(),
        "list" => Style::new().bright_blue().bold(),
        _ => Style::new().bright_yellow().bold(),
    };
    prefix
        .if_supports_color(Stream::Stderr, |p| p.style(style))
        .to_string()
}

// ============================================================================
// Progress Line (single-line counters)
// ============================================================================

/// Single-line progress display with multiple counters
///
/// Displays: `[bundle] read(42/69) write(3/70)`
///
/// All counters update in place on the same line. Uses `try_lock` to avoid
/// blocking worker threads - if display is busy, the update is skipped
pub struct ProgressLine {
    counters: Vec<Counter>,
    lock: Mutex<()>,
}

struct Counter {
    name: &'static str,
    total: usize,
    current: AtomicUsize,
}

impl ProgressLine {
    /// Create a new progress display.
    ///
    /// Only includes counters with total > 0.
    pub fn new(items: &[(&'static str, usize)]) -> Self {
        let counters: Vec<_> = items
            .iter()
            .filter(|(_, total)| *total > 0)
            .map(|&(name, total)| Counter {
                name,
                total,
                current: AtomicUsize::new(0),
            })
            .collect();

        BAR_COUNT.store(1, Ordering::SeqCst);

        let progress = Self {
            counters,
            lock: Mutex::new(()),
        };
        progress.display(false);
        progress
    }

    /// Increment the counter with the given name.
    ///
    /// Non-blocking: if display lock is held, skips refresh.
    #[inline]
    pub fn inc(&self, name: &str) {
        for counter in &self.counters {
            if counter.name == name {
                counter.current.fetch_add(1, Ordering::Relaxed);
                if self.lock.try_lock().is_some() {
                    self.display(false);
                }
                return;
            }
        }
    }

    fn render(&self) -> String {
        self.counters
            .iter()
            .map(|c| {
                let current = c.current.load(Ordering::Relaxed);
                format!("{}({}/{})", c.name, current, c.total)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Overwrite the current line; `newline` keeps it on screen.
    fn display(&self, newline: bool) {
        let line = self.render();
        let prefix = colorize_prefix("bundle");

        let mut stderr = stderr().lock();
        execute!(
            stderr,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine)
        )
        .ok();
        if newline {
            writeln!(stderr, "{prefix} {line}").ok();
        } else {
            write!(stderr, "{prefix} {line}").ok();
        }
        stderr.flush().ok();
    }

    /// Finish progress display, preserve line and move to next line.
    pub fn finish(self) {
        BAR_COUNT.store(0, Ordering::SeqCst);

        {
            let _guard = self.lock.lock(); // Wait for any pending display
            self.display(true);
        }

        std::mem::forget(self); // Prevent Drop from clearing
    }
}

impl Drop for ProgressLine {
    fn drop(&mut self) {
        BAR_COUNT.store(0, Ordering::SeqCst);

        // Clear the line on drop (if not finished properly)
        let mut stderr = stderr().lock();
        execute!(
            stderr,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine)
        )
        .ok();
        stderr.flush().ok();
    }
}

// ============================================================================
// Tests
// ============================================================================
