use crate::error::Error;
use crate::ports::{HtmlPrintable, JsonPrintable, Printable, Result, TextPrintable};
use std::fmt;
use std::str::FromStr;

/// Textual representations a payload can be rendered as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Text,
    Html,
    Json,
}

impl Format {
    /// All formats, in the order the driver writes them
    pub const ALL: [Format; 3] = [Format::Html, Format::Json, Format::Text];

    /// File extension used for outputs of this format
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Text => "txt",
            Format::Html => "html",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Text => "text",
            Format::Html => "html",
            Format::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(Format::Text),
            "html" | "htm" => Ok(Format::Html),
            "json" => Ok(Format::Json),
            _ => Err(format!(
                "unknown format '{}'; expected: text, html, json",
                s
            )),
        }
    }
}

// Envelopes shared by both entities. The payload is embedded as-is: no HTML
// or JSON escaping, and the HTML closing tag is `<html/>`.
fn html_envelope(payload: &str) -> String {
    format!("<html>{}<html/>", payload)
}

fn json_envelope(payload: &str) -> String {
    format!("{{ \"data\": \"{}\" }}", payload)
}

/// Payload that can be rendered in every format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Data {
    payload: String,
}

impl Data {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// Text embedded in every rendering
    pub fn payload(&self) -> &str {
        &self.payload
    }
}

impl HtmlPrintable for Data {
    fn print_as_html(&self) -> String {
        html_envelope(&self.payload)
    }
}

impl JsonPrintable for Data {
    /// Quotes and backslashes in the payload are not escaped, so such
    /// payloads produce invalid JSON.
    fn print_as_json(&self) -> String {
        json_envelope(&self.payload)
    }
}

impl TextPrintable for Data {
    fn print_as_text(&self) -> String {
        self.payload.clone()
    }
}

/// Payload bound to a single declared format
///
/// Only the rendering matching `format` succeeds; the other two fail with
/// [`Error::InvalidFormat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedData {
    payload: String,
    format: Format,
}

impl TaggedData {
    pub fn new(payload: impl Into<String>, format: Format) -> Self {
        Self {
            payload: payload.into(),
            format,
        }
    }

    /// Text embedded in the rendering
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// The only format this payload can be rendered as
    pub fn format(&self) -> Format {
        self.format
    }

    fn require(&self, requested: Format) -> Result<()> {
        if self.format != requested {
            return Err(Error::InvalidFormat {
                requested,
                declared: self.format,
            });
        }
        Ok(())
    }
}

impl Printable for TaggedData {
    fn print_as_html(&self) -> Result<String> {
        self.require(Format::Html)?;
        Ok(html_envelope(&self.payload))
    }

    fn print_as_text(&self) -> Result<String> {
        self.require(Format::Text)?;
        Ok(self.payload.clone())
    }

    fn print_as_json(&self) -> Result<String> {
        self.require(Format::Json)?;
        Ok(json_envelope(&self.payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREETING: &str = "Hello, Alex Frol!";

    #[test]
    fn test_data_renders_greeting() {
        let data = Data::new(GREETING);
        assert_eq!(data.print_as_html(), "<html>Hello, Alex Frol!<html/>");
        assert_eq!(data.print_as_json(), "{ \"data\": \"Hello, Alex Frol!\" }");
        assert_eq!(data.print_as_text(), "Hello, Alex Frol!");
    }

    #[test]
    fn test_data_empty_payload_keeps_envelopes() {
        let data = Data::new("");
        assert_eq!(data.print_as_html(), "<html><html/>");
        assert_eq!(data.print_as_json(), "{ \"data\": \"\" }");
        assert_eq!(data.print_as_text(), "");
    }

    #[test]
    fn test_data_rendering_is_repeatable() {
        let data = Data::new("line one\nline two");
        assert_eq!(data.print_as_html(), data.print_as_html());
        assert_eq!(data.print_as_json(), data.print_as_json());
        assert_eq!(data.print_as_text(), data.print_as_text());
        assert_eq!(data.payload(), "line one\nline two");
    }

    #[test]
    fn test_data_json_does_not_escape_payload() {
        let data = Data::new(r#"say "hi" \o/"#);
        assert_eq!(data.print_as_json(), r#"{ "data": "say "hi" \o/" }"#);
    }

    #[test]
    fn test_data_payload_with_markup_is_not_escaped() {
        let data = Data::new("<b>bold</b> & more");
        assert_eq!(data.print_as_html(), "<html><b>bold</b> & more<html/>");
    }

    #[test]
    fn test_tagged_data_only_renders_declared_format() {
        let text = TaggedData::new(GREETING, Format::Text);
        assert_eq!(text.print_as_text().unwrap(), GREETING);
        assert!(text.print_as_html().is_err());
        assert!(text.print_as_json().is_err());

        let html = TaggedData::new(GREETING, Format::Html);
        assert_eq!(html.print_as_html().unwrap(), "<html>Hello, Alex Frol!<html/>");
        assert!(html.print_as_text().is_err());
        assert!(html.print_as_json().is_err());

        let json = TaggedData::new(GREETING, Format::Json);
        assert_eq!(
            json.print_as_json().unwrap(),
            "{ \"data\": \"Hello, Alex Frol!\" }"
        );
        assert!(json.print_as_text().is_err());
        assert!(json.print_as_html().is_err());
    }

    #[test]
    fn test_tagged_data_mismatch_reports_both_formats() {
        let html = TaggedData::new(GREETING, Format::Html);
        match html.print_as_json() {
            Err(Error::InvalidFormat {
                requested,
                declared,
            }) => {
                assert_eq!(requested, Format::Json);
                assert_eq!(declared, Format::Html);
            }
            other => panic!("expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_tagged_data_rendering_is_repeatable() {
        let html = TaggedData::new("line one\nline two", Format::Html);
        let first = html.print_as_html().unwrap();
        assert_eq!(html.print_as_html().unwrap(), first);
        assert!(html.print_as_json().is_err());
        assert_eq!(html.print_as_html().unwrap(), first);
        assert_eq!(html.format(), Format::Html);
    }

    #[test]
    fn test_tagged_data_empty_payload() {
        let json = TaggedData::new("", Format::Json);
        assert_eq!(json.print_as_json().unwrap(), "{ \"data\": \"\" }");
        assert_eq!(json.payload(), "");
        assert_eq!(json.format(), Format::Json);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("html".parse::<Format>(), Ok(Format::Html));
        assert_eq!("HTM".parse::<Format>(), Ok(Format::Html));
        assert_eq!("Json".parse::<Format>(), Ok(Format::Json));
        assert_eq!("txt".parse::<Format>(), Ok(Format::Text));
        assert_eq!(" text ".parse::<Format>(), Ok(Format::Text));
    }

    #[test]
    fn test_format_from_str_rejects_unknown() {
        let err = "yaml".parse::<Format>().unwrap_err();
        assert!(err.contains("yaml"));
        assert!(err.contains("expected"));
    }

    #[test]
    fn test_format_display_round_trips_through_from_str() {
        for format in Format::ALL {
            assert_eq!(format.to_string().parse::<Format>(), Ok(format));
        }
    }

    #[test]
    fn test_format_extensions() {
        assert_eq!(Format::Text.extension(), "txt");
        assert_eq!(Format::Html.extension(), "html");
        assert_eq!(Format::Json.extension(), "json");
    }
}
