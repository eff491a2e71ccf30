//! Traits for document rendering backends.
//!
//! This module provides the [`RenderSink`] trait for abstracting over the
//! markup-rendering and persistence engine behind the document writer.

use crate::error::Result;
use crate::types::Element;

/// Trait for rendering/persistence engines.
///
/// A sink receives elements that have already passed the writer's severity
/// filter, serializes each into markup, and durably appends it. Sinks are
/// append-only and stateless from the writer's perspective; the writer owns
/// all document state (threshold, table cursor, validity).
pub trait RenderSink: Send {
    /// Serializes one element and appends it to the document.
    ///
    /// Implementations either flush on every append or guarantee a flush in
    /// [`finish`](Self::finish).
    ///
    /// # Errors
    ///
    /// Returns an error if the element cannot be persisted.
    fn append(&mut self, element: &Element<'_>) -> Result<()>;

    /// Emits the document footer and flushes.
    ///
    /// The writer calls this at most once, after which the sink receives no
    /// further elements.
    ///
    /// # Errors
    ///
    /// Returns an error if the footer cannot be persisted.
    fn finish(&mut self) -> Result<()>;
}
