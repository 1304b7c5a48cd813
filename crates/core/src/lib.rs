//! Printable data: renders a payload as text, HTML or JSON and saves the
//! rendering to an output stream.
//!
//! Two designs live side by side:
//!
//! - [`TaggedData`] implements the single [`Printable`] trait and only
//!   renders the format it was tagged with; [`application::save_to`] picks
//!   the rendering by matching on a [`Format`].
//! - [`Data`] implements the one-method [`HtmlPrintable`], [`JsonPrintable`]
//!   and [`TextPrintable`] traits; there is one save function per capability
//!   ([`application::save_as_html`] and friends).

pub mod application;
pub mod domain;
pub mod error;
pub mod ports;
pub mod utils;

pub use application::{ExportOutcome, ExportReport, ExportServiceImpl};
pub use domain::{Data, Format, TaggedData};
pub use error::Error;
pub use ports::{
    HtmlPrintable, JsonPrintable, OutputStream, Printable, Result, StreamOpener, TextPrintable,
};
