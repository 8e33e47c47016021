//! HTML escaping for externally sourced text.

/// Escape the five characters that can break out of markup or attribute
/// context: `& < > " '`. Every free-text field that reaches the renderer
/// goes through this, including values used inside href attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
