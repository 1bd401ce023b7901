//! Source location primitives shared by tokens, comments and diagnostics.

use serde::Serialize;

/// Byte offset within the analyzed source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ByteOffset(u32);

impl ByteOffset {
    /// Creates a byte offset value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Creates an offset from `usize`, saturating at `u32::MAX`.
    pub fn from_usize(value: usize) -> Self {
        Self(u32::try_from(value).unwrap_or(u32::MAX))
    }

    /// Returns the raw offset value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Converts the offset to `usize`.
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// One-based physical line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LineNumber(u32);

impl LineNumber {
    /// The first line of any source.
    pub const FIRST: Self = Self(1);

    /// Creates a line number, clamping `0` to the first line.
    pub const fn new(value: u32) -> Self {
        if value == 0 { Self(1) } else { Self(value) }
    }

    /// Returns the raw line value.
    pub const fn value(self) -> u32 {
        self.0
    }

    pub(crate) fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for LineNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for LineNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Half-open byte range `[start, end)` in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: ByteOffset,
    /// Exclusive end byte offset.
    pub end: ByteOffset,
}

impl Span {
    /// Creates a span and normalizes offset ordering.
    pub fn new(start: ByteOffset, end: ByteOffset) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Returns the span length in bytes.
    pub fn len(self) -> u32 {
        self.end.value() - self.start.value()
    }

    /// Returns `true` when the span contains no bytes.
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns the covered source text, or `""` if the span is out of range.
    pub fn slice(self, input: &str) -> &str {
        input
            .get(self.start.as_usize()..self.end.as_usize())
            .unwrap_or("")
    }
}
