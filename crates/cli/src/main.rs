use clap::Parser;
use file_adapter::AppendFileOpener;
use printable_core::application::{ExportReport, ExportServiceImpl};
use printable_core::domain::{Data, Format, TaggedData};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// CLI tool to render a payload as text, HTML and JSON and append it to files
#[derive(Parser, Debug)]
#[command(name = "printable")]
#[command(about = "Renders a payload as text, HTML or JSON and appends each rendering to a file")]
struct Cli {
    /// Payload to render
    #[arg(short = 'd', long = "data", default_value = "Hello, Alex Frol!")]
    data: String,

    /// Folder the output files are written to
    #[arg(
        short = 'o',
        long = "output-dir",
        env = "PRINTABLE_OUTPUT_DIR",
        default_value = "."
    )]
    output_dir: PathBuf,

    /// File name stem shared by all outputs (output.html, output.json, ...)
    #[arg(short = 'n', long = "name", default_value = "output")]
    name: String,

    /// Comma-separated formats to write [html, json, text]
    #[arg(
        short = 'f',
        long = "format",
        value_delimiter = ',',
        default_values_t = Format::ALL
    )]
    formats: Vec<Format>,

    /// Render through a payload tagged with this single format; the other
    /// requested formats are reported as invalid
    #[arg(short = 't', long = "tag")]
    tag: Option<Format>,
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli) -> ExportReport {
    // Instantiate the concrete output adapter
    let opener = AppendFileOpener::new(cli.output_dir.clone(), cli.name.clone());

    // Instantiate the core service with dependency injection
    let service = ExportServiceImpl::new(Box::new(opener));

    info!(
        output_dir = %cli.output_dir.display(),
        formats = ?cli.formats,
        tag = ?cli.tag,
        "exporting payload"
    );

    match cli.tag {
        Some(tag) => service.export_tagged(&TaggedData::new(cli.data.clone(), tag), &cli.formats),
        None => service.export(&Data::new(cli.data.clone()), &cli.formats),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let report = run(&cli);

    for outcome in report.succeeded() {
        if let Some(target) = &outcome.target {
            println!("Saved {} to {}", outcome.format, target);
        }
    }

    for outcome in report.failures() {
        if let Err(e) = &outcome.result {
            eprintln!("Error saving {}: {}", outcome.format, e);
        }
    }

    if !report.is_success() {
        std::process::exit(1);
    }
}
