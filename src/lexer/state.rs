//! Mutable state threaded through one scan.
//!
//! A fresh [`ScanState`] is created per scan, so scanning the same input twice
//! always yields the same tokens and warnings.

/// Position of the scanner in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanCursor {
    /// Byte offset of the next unread lexeme.
    pub position: usize,
    /// 1-based line number.
    pub line: usize,
}

impl Default for ScanCursor {
    fn default() -> Self {
        Self {
            position: 0,
            line: 1,
        }
    }
}

impl ScanCursor {
    pub const fn advance(&mut self, len: usize) {
        self.position += len;
    }

    pub const fn next_line(&mut self) {
        self.line += 1;
    }
}

/// Per-line counters that only finalize at newline boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineState {
    /// Characters consumed on the current line, terminator included.
    pub length: usize,
    /// Block-depth delta reported by the most recent lexeme that had one.
    pub indentation_hint: i32,
    /// Block depth expected for the current line.
    pub current_indentation: usize,
    /// Consecutive lines without a significant token.
    pub blank_run: usize,
    pub line_is_blank: bool,
    /// Byte offset where the current line starts.
    pub line_start: usize,
}

impl Default for LineState {
    fn default() -> Self {
        Self {
            length: 0,
            indentation_hint: 0,
            current_indentation: 0,
            blank_run: 0,
            line_is_blank: true,
            line_start: 0,
        }
    }
}

impl LineState {
    /// Fold the finished line into the blank-run counter.
    pub const fn record_blank_run(&mut self) {
        if self.line_is_blank {
            self.blank_run += 1;
        } else {
            self.line_is_blank = true;
            self.blank_run = 0;
        }
    }

    pub const fn mark_non_blank(&mut self) {
        self.line_is_blank = false;
    }

    /// Reset the per-line counters for the line starting at `line_start`.
    pub const fn start_line(&mut self, line_start: usize) {
        self.length = 0;
        self.line_start = line_start;
    }
}

/// Style-check suppression set by in-source directives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuppressionState {
    pub suppressed_line: Option<usize>,
    /// One-way: nothing re-enables checks once set.
    pub file_suppressed: bool,
}

impl SuppressionState {
    #[must_use]
    pub fn is_active(&self, line: usize) -> bool {
        self.suppressed_line != Some(line) && !self.file_suppressed
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    pub cursor: ScanCursor,
    pub line: LineState,
    pub suppression: SuppressionState,
}

impl ScanState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether style checks run for the line under the cursor.
    #[must_use]
    pub fn styling_active(&self) -> bool {
        self.suppression.is_active(self.cursor.line)
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
