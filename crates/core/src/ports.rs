use crate::domain::Format;

pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Single trait exposing every rendering
///
/// Implementers must provide all three operations even when they only
/// support one, and report unsupported ones as errors.
pub trait Printable {
    fn print_as_html(&self) -> Result<String>;
    fn print_as_text(&self) -> Result<String>;
    fn print_as_json(&self) -> Result<String>;
}

pub trait HtmlPrintable {
    fn print_as_html(&self) -> String;
}

pub trait JsonPrintable {
    fn print_as_json(&self) -> String;
}

pub trait TextPrintable {
    fn print_as_text(&self) -> String;
}

/// Writable output owned by the caller
/// This is a port (interface) that defines how the core writes renderings out
pub trait OutputStream {
    /// Whether the stream can still be written to
    fn is_healthy(&self) -> bool;

    /// Writes `text` as-is. A failed write leaves the stream unhealthy.
    fn write_str(&mut self, text: &str) -> Result<()>;

    /// Human-readable destination, used in diagnostics
    fn target(&self) -> String;
}

/// Opens one output stream per format
pub trait StreamOpener {
    fn open(&self, format: Format) -> Result<Box<dyn OutputStream>>;
}
