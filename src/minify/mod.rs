//! HTML inlining for the firmware build.
//!
//! # Data Flow
//! ```text
//! index.html
//!     → minify_html (strip newlines, collapse whitespace, escape quotes)
//!     → template.rs (wrap in the aWOT include + P(index) assignment)
//!     → index.cpp
//! ```
//!
//! # Design Decisions
//! - Pure text substitution; the input is never parsed as HTML
//! - Backslashes are left alone, so re-minifying output escapes quotes twice

pub mod template;

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::MinifyError;

pub use template::render_source;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Collapse an HTML document into a single line usable inside a C string
/// literal.
///
/// Applied in order: every `\n` is deleted, every whitespace run becomes one
/// space, every `"` gets a leading backslash.
pub fn minify_html(content: &str) -> String {
    let single_line = content.replace('\n', "");
    let collapsed = WHITESPACE_RUN.replace_all(&single_line, " ");
    collapsed.replace('"', "\\\"")
}

/// Read `source`, minify it and write the rendered C++ source to `target`,
/// overwriting whatever is there.
pub fn minify(source: &Path, target: &Path) -> Result<(), MinifyError> {
    let content = fs::read_to_string(source).map_err(|e| MinifyError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;

    let rendered = render_source(&minify_html(&content));

    fs::write(target, &rendered).map_err(|e| MinifyError::Write {
        path: target.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(
        source = %source.display(),
        target = %target.display(),
        input_bytes = content.len(),
        output_bytes = rendered.len(),
        "Minified page"
    );
    Ok(())
}
