//! Core types for the HTML document logger.
//!
//! This module provides:
//! - [`OutputLevel`] — Severity levels for write requests
//! - [`Element`] — The structural element kinds a document is built from

use serde::{Deserialize, Serialize};

/// Output severity levels, ordered from most severe to most permissive.
///
/// A document renders a write request only when the request's level is at
/// least as severe as the document's configured threshold. `All` is the
/// catch-all sentinel: as an entry level it is the least severe tag, and as
/// a threshold it records everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputLevel {
    /// The program must stop.
    Error = 0,
    /// The program cannot continue operating normally.
    Critical = 1,
    /// Normal operation can no longer be guaranteed.
    Warning = 2,
    /// Status reporting, not an abnormality.
    Information = 3,
    /// The most permissive level.
    #[default]
    All = 4,
}

impl OutputLevel {
    /// Returns true if this level is at least as severe as the given level.
    ///
    /// Used as the filter predicate: an entry passes a threshold `t` iff
    /// `entry_level.is_at_least_as_severe(t)`.
    #[must_use]
    pub fn is_at_least_as_severe(self, other: Self) -> bool {
        self <= other
    }

    /// Returns the string representation of this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Information => "information",
            Self::All => "all",
        }
    }
}

/// The structural role of one write request, with its text payload where the
/// role carries one.
///
/// Elements are ephemeral: the writer builds one per accepted request, hands
/// it to the rendering sink, and never retains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element<'a> {
    /// A plain text segment, no trailing line break.
    Text(&'a str),
    /// A plain text segment followed by a line break.
    Line(&'a str),
    /// An emphasized text segment.
    StrongText(&'a str),
    /// An emphasized text segment followed by a line break.
    StrongLine(&'a str),
    /// A heading-styled element.
    Heading(&'a str),
    /// A horizontal separator.
    HorizontalRule,
    /// Opens a table region and its first cell.
    TableBegin,
    /// Closes the current cell, row, and table region.
    TableEnd,
    /// Advances the table cursor to the first cell of a new row.
    RowBreak,
    /// Advances the table cursor to the next cell in the current row.
    ColumnBreak,
}
