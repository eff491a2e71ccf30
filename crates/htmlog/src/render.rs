//! File-backed HTML rendering engine.
//!
//! This module provides:
//! - [`HtmlRenderer`] — Serializes elements into HTML and persists them
//! - The document shell (head/body wrapper, title, stylesheet)
//! - Text escaping for all payloads

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::{LogError, Result};
use crate::traits::RenderSink;
use crate::types::Element;

const STYLESHEET: &str = "body{font-family:sans-serif;margin:24px;color:#1f2430}\
h1{font-size:20px;border-bottom:1px solid #ccd}\
h2{font-size:16px;margin:14px 0 6px 0}\
table{border-collapse:collapse;margin:8px 0}\
td{border:1px solid #99a;padding:4px 8px;vertical-align:top}\
.meta{color:#667;font-size:12px}";

/// File-backed [`RenderSink`] that appends HTML markup.
///
/// Owns the file handle and the document skeleton. Every append is flushed so
/// the document on disk stays current even if the host process dies.
pub struct HtmlRenderer {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl HtmlRenderer {
    /// Creates the output file and writes the document header.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Open`] if the file cannot be created or the header
    /// cannot be written.
    pub fn create(path: impl AsRef<Path>, title: &str) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| LogError::Open {
            path: path.clone(),
            source,
        })?;

        let mut renderer = Self {
            writer: BufWriter::new(file),
            path: path.clone(),
        };
        renderer
            .write_header(title)
            .map_err(|err| match err {
                LogError::Io(source) => LogError::Open { path, source },
                other => other,
            })?;
        Ok(renderer)
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_header(&mut self, title: &str) -> Result<()> {
        let title = escape(title);
        let generated = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        write!(
            self.writer,
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{title}</title>\n<style>{STYLESHEET}</style>\n</head>\n<body>\n\
             <h1>{title}</h1>\n<p class=\"meta\">generated {generated}</p>\n"
        )?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_fragment(&mut self, element: &Element<'_>) -> Result<()> {
        match element {
            Element::Text(text) => write!(self.writer, "{}", escape(text))?,
            Element::Line(text) => writeln!(self.writer, "{}<br>", escape(text))?,
            Element::StrongText(text) => {
                write!(self.writer, "<strong>{}</strong>", escape(text))?;
            }
            Element::StrongLine(text) => {
                writeln!(self.writer, "<strong>{}</strong><br>", escape(text))?;
            }
            Element::Heading(text) => writeln!(self.writer, "<h2>{}</h2>", escape(text))?,
            Element::HorizontalRule => writeln!(self.writer, "<hr>")?,
            Element::TableBegin => writeln!(self.writer, "<table><tr><td>")?,
            Element::TableEnd => writeln!(self.writer, "</td></tr></table>")?,
            Element::RowBreak => writeln!(self.writer, "</td></tr><tr><td>")?,
            Element::ColumnBreak => write!(self.writer, "</td><td>")?,
        }
        Ok(())
    }
}

impl RenderSink for HtmlRenderer {
    fn append(&mut self, element: &Element<'_>) -> Result<()> {
        self.write_fragment(element)?;
        self.writer.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        write!(self.writer, "</body>\n</html>\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Escapes text for inclusion in HTML element content or attributes.
#[must_use]
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).expect("read document")
    }

    #[test]
    fn escape_passes_plain_text_through() {
        assert_eq!(escape("plain text"), "plain text");
        assert!(matches!(escape("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn escape_replaces_markup_characters() {
        assert_eq!(escape("a < b & c > \"d\"'"), "a &lt; b &amp; c &gt; &quot;d&quot;&#39;");
    }

    #[test]
    fn create_writes_document_header() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("out.html");

        let renderer = HtmlRenderer::create(&path, "Session Log").expect("create renderer");
        assert_eq!(renderer.path(), path);

        let content = read(&path);
        assert!(content.starts_with("<!DOCTYPE html>"));
        assert!(content.contains("<title>Session Log</title>"));
        assert!(content.contains("<h1>Session Log</h1>"));
        assert!(content.contains("<body>"));
    }

    #[test]
    fn create_escapes_title() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("out.html");

        let _renderer = HtmlRenderer::create(&path, "a < b").expect("create renderer");
        let content = read(&path);
        assert!(content.contains("<title>a &lt; b</title>"));
        assert!(!content.contains("<title>a < b</title>"));
    }

    #[test]
    fn create_fails_on_missing_directory() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("missing").join("out.html");

        let result = HtmlRenderer::create(&path, "t");
        assert!(matches!(result, Err(LogError::Open { .. })));
    }

    #[test]
    fn append_renders_each_element_kind() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("out.html");
        let mut renderer = HtmlRenderer::create(&path, "t").expect("create renderer");

        renderer.append(&Element::Text("seg")).expect("append");
        renderer.append(&Element::Line("line")).expect("append");
        renderer.append(&Element::StrongText("st")).expect("append");
        renderer.append(&Element::StrongLine("sl")).expect("append");
        renderer.append(&Element::Heading("head")).expect("append");
        renderer.append(&Element::HorizontalRule).expect("append");

        let content = read(&path);
        assert!(content.contains("seg"));
        assert!(content.contains("line<br>"));
        assert!(content.contains("<strong>st</strong>"));
        assert!(content.contains("<strong>sl</strong><br>"));
        assert!(content.contains("<h2>head</h2>"));
        assert!(content.contains("<hr>"));
    }

    #[test]
    fn append_renders_table_markers() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("out.html");
        let mut renderer = HtmlRenderer::create(&path, "t").expect("create renderer");

        renderer.append(&Element::TableBegin).expect("append");
        renderer.append(&Element::ColumnBreak).expect("append");
        renderer.append(&Element::RowBreak).expect("append");
        renderer.append(&Element::TableEnd).expect("append");

        let content = read(&path);
        let open = content.find("<table><tr><td>").expect("table open");
        let col = content.find("</td><td>").expect("column break");
        let row = content.find("</td></tr><tr><td>").expect("row break");
        let close = content.find("</td></tr></table>").expect("table close");
        assert!(open < col && col < row && row < close);
    }

    #[test]
    fn append_escapes_payload_text() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("out.html");
        let mut renderer = HtmlRenderer::create(&path, "t").expect("create renderer");

        renderer
            .append(&Element::Line("<script>alert(1)</script>"))
            .expect("append");

        let content = read(&path);
        assert!(content.contains("&lt;script&gt;"));
        assert!(!content.contains("<script>"));
    }

    #[test]
    fn finish_closes_document_shell() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("out.html");
        let mut renderer = HtmlRenderer::create(&path, "t").expect("create renderer");

        renderer.finish().expect("finish");

        let content = read(&path);
        assert!(content.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn append_is_flushed_immediately() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("out.html");
        let mut renderer = HtmlRenderer::create(&path, "t").expect("create renderer");

        renderer.append(&Element::Line("durable")).expect("append");

        // Visible on disk without finish or drop.
        assert!(read(&path).contains("durable<br>"));
    }
}
