use crate::domain::{Data, Format, TaggedData};
use crate::error::Error;
use crate::ports::{
    HtmlPrintable, JsonPrintable, OutputStream, Printable, Result, StreamOpener, TextPrintable,
};
use tracing::{debug, error};

// Health is checked right before writing; an unhealthy stream is reported
// and left untouched.
fn write_checked<S>(stream: &mut S, render: impl FnOnce() -> Result<String>) -> Result<()>
where
    S: OutputStream + ?Sized,
{
    if !stream.is_healthy() {
        let target = stream.target();
        error!(output = %target, "output stream is not writable, skipping write");
        return Err(Error::UnhealthyStream { target });
    }
    let rendered = render()?;
    debug!(output = %stream.target(), bytes = rendered.len(), "writing rendering");
    stream.write_str(&rendered)
}

/// Writes the HTML rendering of `printable` to `stream`
pub fn save_as_html<S, P>(stream: &mut S, printable: &P) -> Result<()>
where
    S: OutputStream + ?Sized,
    P: HtmlPrintable + ?Sized,
{
    write_checked(stream, || Ok(printable.print_as_html()))
}

/// Writes the JSON rendering of `printable` to `stream`
pub fn save_as_json<S, P>(stream: &mut S, printable: &P) -> Result<()>
where
    S: OutputStream + ?Sized,
    P: JsonPrintable + ?Sized,
{
    write_checked(stream, || Ok(printable.print_as_json()))
}

/// Writes the text rendering of `printable` to `stream`
pub fn save_as_text<S, P>(stream: &mut S, printable: &P) -> Result<()>
where
    S: OutputStream + ?Sized,
    P: TextPrintable + ?Sized,
{
    write_checked(stream, || Ok(printable.print_as_text()))
}

/// Writes the rendering selected by `format`
///
/// Fails with [`Error::InvalidFormat`] when `printable` cannot produce that
/// format; nothing is written in that case.
pub fn save_to<S, P>(stream: &mut S, printable: &P, format: Format) -> Result<()>
where
    S: OutputStream + ?Sized,
    P: Printable + ?Sized,
{
    write_checked(stream, || match format {
        Format::Text => printable.print_as_text(),
        Format::Json => printable.print_as_json(),
        Format::Html => printable.print_as_html(),
    })
}

pub fn save_to_as_html<S, P>(stream: &mut S, printable: &P) -> Result<()>
where
    S: OutputStream + ?Sized,
    P: Printable + ?Sized,
{
    save_to(stream, printable, Format::Html)
}

pub fn save_to_as_json<S, P>(stream: &mut S, printable: &P) -> Result<()>
where
    S: OutputStream + ?Sized,
    P: Printable + ?Sized,
{
    save_to(stream, printable, Format::Json)
}

pub fn save_to_as_text<S, P>(stream: &mut S, printable: &P) -> Result<()>
where
    S: OutputStream + ?Sized,
    P: Printable + ?Sized,
{
    save_to(stream, printable, Format::Text)
}

/// Result of saving one format
#[derive(Debug)]
pub struct ExportOutcome {
    pub format: Format,
    /// Destination of the stream, when it could be opened
    pub target: Option<String>,
    pub result: Result<()>,
}

/// Outcomes of one export run, in the order the formats were requested
#[derive(Debug, Default)]
pub struct ExportReport {
    pub outcomes: Vec<ExportOutcome>,
}

impl ExportReport {
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.result.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &ExportOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.result.is_err())
    }

    pub fn succeeded(&self) -> impl Iterator<Item = &ExportOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.result.is_ok())
    }
}

/// Application service for saving printable data in several formats
pub struct ExportServiceImpl {
    opener: Box<dyn StreamOpener>,
}

impl ExportServiceImpl {
    /// Creates a new ExportServiceImpl writing through the given opener
    pub fn new(opener: Box<dyn StreamOpener>) -> Self {
        Self { opener }
    }

    /// Saves `data` once per format, picking the save function for each capability
    pub fn export(&self, data: &Data, formats: &[Format]) -> ExportReport {
        self.run(formats, |stream, format| match format {
            Format::Html => save_as_html(stream, data),
            Format::Json => save_as_json(stream, data),
            Format::Text => save_as_text(stream, data),
        })
    }

    /// Saves `data` once per format through [`save_to`]
    ///
    /// Formats other than the one `data` is tagged with end up as failures.
    /// Their streams are still opened first, so an opener that creates files
    /// leaves them empty; no bytes are written for a mismatched format.
    pub fn export_tagged(&self, data: &TaggedData, formats: &[Format]) -> ExportReport {
        self.run(formats, |stream, format| save_to(stream, data, format))
    }

    // Each format gets its own stream, dropped before the next one is opened.
    // A failure is recorded and the remaining formats are still attempted.
    fn run<F>(&self, formats: &[Format], mut save: F) -> ExportReport
    where
        F: FnMut(&mut dyn OutputStream, Format) -> Result<()>,
    {
        let mut report = ExportReport::default();

        for &format in formats {
            let mut stream = match self.opener.open(format) {
                Ok(stream) => stream,
                Err(e) => {
                    error!(%format, error = %e, "failed to open output");
                    report.outcomes.push(ExportOutcome {
                        format,
                        target: None,
                        result: Err(e),
                    });
                    continue;
                }
            };

            let target = stream.target();
            let result = save(stream.as_mut(), format);
            match &result {
                Ok(()) => debug!(%format, output = %target, "saved"),
                Err(e) => error!(%format, output = %target, error = %e, "failed to save"),
            }

            report.outcomes.push(ExportOutcome {
                format,
                target: Some(target),
                result,
            });
        }

        report
    }
}
