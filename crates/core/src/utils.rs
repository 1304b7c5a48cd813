use crate::domain::Format;

const DEFAULT_STEM: &str = "output";

/// Sanitizes a string for use in a filename
/// Replaces invalid filename characters with hyphens
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Builds `<stem>.<extension>` for a format, e.g. `output.html`
/// Falls back to `output` when the sanitized stem is empty
pub fn output_file_name(stem: &str, format: Format) -> String {
    let stem = sanitize_filename(stem);
    let stem = if stem.is_empty() { DEFAULT_STEM } else { stem.as_str() };
    format!("{}.{}", stem, format.extension())
}
