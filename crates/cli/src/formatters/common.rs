//! Common utilities for formatters.
//!
//! Responsibilities:
//! - CSV escaping and row building.
//! - Missing-value rendering.
//! - Atomic file writing.

use anyhow::{Context, Result};

/// Representation of a missing value in table and CSV output.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

pub fn format_missing(opt: Option<&str>) -> &str {
    opt.filter(|s| !s.is_empty()).unwrap_or(DEFAULT_MISSING_VALUE)
}

/// Escape a string value for CSV output according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    let needs_quoting = s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r');
    if !needs_quoting {
        return s.to_string();
    }
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub fn build_csv_header(fields: &[&str]) -> String {
    let escaped: Vec<String> = fields.iter().map(|f| escape_csv(f)).collect();
    format!("{}\n", escaped.join(","))
}

pub fn build_csv_row(values: &[String]) -> String {
    let escaped: Vec<String> = values.iter().map(|v| escape_csv(v)).collect();
    format!("{}\n", escaped.join(","))
}

/// Write formatted output to `output_file`, or stdout when `None`.
pub fn output_result(
    output: &str,
    format: crate::formatters::OutputFormat,
    output_file: Option<&std::path::PathBuf>,
) -> Result<()> {
    if let Some(path) = output_file {
        write_to_file(output, path)
            .with_context(|| format!("Failed to write output to {}", path.display()))?;
        eprintln!(
            "Results written to {} ({:?} format)",
            path.display(),
            format
        );
    } else {
        print!("{}", output);
        if !output.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

/// Write `content` to `path` via a temp file in the same directory and a rename.
///
/// Missing parent directories are created.
pub fn write_to_file(content: &str, path: &std::path::Path) -> Result<()> {
    use std::fs;
    use std::io::Write;
    use tempfile::NamedTempFile;

    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => std::path::Path::new("."),
    };

    if parent_dir != std::path::Path::new(".") {
        fs::create_dir_all(parent_dir)
            .with_context(|| format!("Failed to create directory: {}", parent_dir.display()))?;
    }

    let mut temp_file = NamedTempFile::new_in(parent_dir)
        .with_context(|| format!("Failed to create temp file in: {}", parent_dir.display()))?;
    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temp file")?;
    temp_file.flush().context("Failed to flush temp file")?;
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
