//! Source Spans
//!
//! Location anchors carried by declaration and attribute nodes so that
//! diagnostics can point back at the annotation site. The engine never
//! computes spans itself; the host parser supplies them.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub content: String,
    pub url: String,
}

impl SourceFile {
    pub fn new(content: String, url: String) -> Self {
        SourceFile { content, url }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

impl SourceLocation {
    pub fn new(offset: usize, line: usize, col: usize) -> Self {
        SourceLocation { offset, line, col }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Half-open range in the annotated source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpan {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl SourceSpan {
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        SourceSpan { start, end }
    }

    /// Span for nodes built in memory with no originating file.
    pub fn synthetic() -> Self {
        SourceSpan::default()
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
