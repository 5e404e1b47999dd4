//! C++ source template for the embedded page.
//!
//! The firmware serves the page through aWOT's `P()` macro, which places the
//! string literal in program memory under the identifier `index`.

/// Embed an already-escaped string into the C++ source template.
///
/// The result has no leading or trailing whitespace.
pub fn render_source(minified: &str) -> String {
    format!(
        r#"
#include <aWOT.h>

P(index) = "{minified}";
"#
    )
    .trim()
    .to_string()
}
