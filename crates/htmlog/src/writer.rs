//! The leveled document writer.
//!
//! This module provides [`HtmlLog`], the single entry point for producing a
//! structured, leveled log document. The writer enforces the severity filter
//! and the table-cursor invariants, then delegates accepted elements to a
//! [`RenderSink`].

use std::path::Path;

use parking_lot::Mutex;

use crate::error::Result;
use crate::render::HtmlRenderer;
use crate::traits::RenderSink;
use crate::types::{Element, OutputLevel};

/// Mutable document state. All of it lives behind one lock so a write call's
/// filter check, cursor mutation, and delegated append are a single unit.
struct DocumentState {
    sink: Box<dyn RenderSink>,
    threshold: OutputLevel,
    table_open: bool,
    valid: bool,
    finished: bool,
}

impl DocumentState {
    /// True while the document can still accept writes.
    fn ready(&self) -> bool {
        self.valid && !self.finished
    }

    /// True when a request at `level` should be persisted right now.
    fn accepts(&self, level: OutputLevel) -> bool {
        self.ready() && level.is_at_least_as_severe(self.threshold)
    }

    /// Hands one element to the sink. A failed append permanently
    /// invalidates the document; it is never retried.
    fn forward(&mut self, element: &Element<'_>) -> bool {
        match self.sink.append(element) {
            Ok(()) => true,
            Err(err) => {
                self.valid = false;
                tracing::warn!(error = %err, "log document append failed; disabling further writes");
                false
            }
        }
    }

    fn close(&mut self) -> Result<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        if !self.valid {
            return Ok(());
        }

        let result = self.close_document();
        if result.is_err() {
            self.valid = false;
        }
        result
    }

    fn close_document(&mut self) -> Result<()> {
        if self.table_open {
            self.table_open = false;
            self.sink.append(&Element::TableEnd)?;
        }
        self.sink.finish()
    }
}

/// A leveled log document rendered as HTML.
///
/// Every write operation takes the entry's [`OutputLevel`]; entries less
/// severe than the configured threshold are silently dropped, cursor state
/// included. Write failures after construction never surface as errors:
/// they flip [`is_valid`](Self::is_valid) to `false` and all further writes
/// become no-ops, so a broken log cannot interrupt the host workload.
///
/// The writer is safe to share across threads; each operation is serialized
/// by an internal lock.
///
/// # Example
///
/// ```no_run
/// use htmlog::{HtmlLog, OutputLevel};
///
/// # fn main() -> htmlog::Result<()> {
/// let log = HtmlLog::open("session.html", "Session Log")?;
/// log.set_output_level(OutputLevel::Warning);
/// log.write_heading("Startup", OutputLevel::All); // dropped
/// log.write_line("device lost", OutputLevel::Error); // recorded
/// log.close()?;
/// # Ok(())
/// # }
/// ```
pub struct HtmlLog {
    inner: Mutex<DocumentState>,
}

impl HtmlLog {
    /// Opens a log document at `path` with the given title.
    ///
    /// On success the document is valid and its threshold is
    /// [`OutputLevel::All`], i.e. everything is recorded.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Open`](crate::LogError::Open) if the file cannot
    /// be created or the document header cannot be written.
    pub fn open(path: impl AsRef<Path>, title: &str) -> Result<Self> {
        let renderer = HtmlRenderer::create(path, title)?;
        Ok(Self::with_sink(Box::new(renderer)))
    }

    /// Wraps an already-constructed rendering engine.
    #[must_use]
    pub fn with_sink(sink: Box<dyn RenderSink>) -> Self {
        Self {
            inner: Mutex::new(DocumentState {
                sink,
                threshold: OutputLevel::default(),
                table_open: false,
                valid: true,
                finished: false,
            }),
        }
    }

    /// Writes a plain text segment.
    pub fn write(&self, text: &str, level: OutputLevel) {
        self.emit(level, Element::Text(text));
    }

    /// Writes a plain text segment followed by a line break.
    pub fn write_line(&self, text: &str, level: OutputLevel) {
        self.emit(level, Element::Line(text));
    }

    /// Writes an emphasized text segment.
    pub fn write_strongly(&self, text: &str, level: OutputLevel) {
        self.emit(level, Element::StrongText(text));
    }

    /// Writes an emphasized text segment followed by a line break.
    pub fn write_line_strongly(&self, text: &str, level: OutputLevel) {
        self.emit(level, Element::StrongLine(text));
    }

    /// Writes a heading-styled element.
    pub fn write_heading(&self, text: &str, level: OutputLevel) {
        self.emit(level, Element::Heading(text));
    }

    /// Writes a horizontal separator.
    pub fn write_horizontal_rule(&self, level: OutputLevel) {
        self.emit(level, Element::HorizontalRule);
    }

    /// Opens a table region.
    ///
    /// Tables do not nest: while a table is open this is a silent no-op.
    pub fn begin_table(&self, level: OutputLevel) {
        let mut state = self.inner.lock();
        if !state.accepts(level) || state.table_open {
            return;
        }
        if state.forward(&Element::TableBegin) {
            state.table_open = true;
        }
    }

    /// Closes the current table region. A silent no-op when no table is open.
    pub fn end_table(&self, level: OutputLevel) {
        let mut state = self.inner.lock();
        if !state.accepts(level) || !state.table_open {
            return;
        }
        if state.forward(&Element::TableEnd) {
            state.table_open = false;
        }
    }

    /// Advances the table cursor to a new row. A silent no-op when no table
    /// is open.
    pub fn change_row(&self, level: OutputLevel) {
        let mut state = self.inner.lock();
        if !state.accepts(level) || !state.table_open {
            return;
        }
        state.forward(&Element::RowBreak);
    }

    /// Advances the table cursor to the next column. A silent no-op when no
    /// table is open.
    pub fn change_column(&self, level: OutputLevel) {
        let mut state = self.inner.lock();
        if !state.accepts(level) || !state.table_open {
            return;
        }
        state.forward(&Element::ColumnBreak);
    }

    /// Sets the severity threshold. Affects only subsequent calls: entries
    /// at a level less severe than `level` are dropped from here on.
    pub fn set_output_level(&self, level: OutputLevel) {
        self.inner.lock().threshold = level;
    }

    /// Returns true iff the document is open, not yet closed, and no
    /// unrecoverable write failure has occurred.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.inner.lock().ready()
    }

    /// Closes the document: auto-closes an open table, emits the footer,
    /// and flushes. Idempotent; after the first call all writes are no-ops.
    ///
    /// # Errors
    ///
    /// Returns an error if the closing markup cannot be persisted. The
    /// document is marked invalid in that case.
    pub fn close(&self) -> Result<()> {
        self.inner.lock().close()
    }

    fn emit(&self, level: OutputLevel, element: Element<'_>) {
        let mut state = self.inner.lock();
        if !state.accepts(level) {
            return;
        }
        state.forward(&element);
    }
}

impl Drop for HtmlLog {
    fn drop(&mut self) {
        let mut state = self.inner.lock();
        if let Err(err) = state.close() {
            tracing::warn!(error = %err, "failed to finalize log document");
        }
    }
}
