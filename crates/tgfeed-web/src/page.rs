//! Page template rendering

const TEMPLATE: &str = include_str!("../assets/index.html");

/// Marker inside the page script's string literal for the Gateway base URL
const BASE_URL_PLACEHOLDER: &str = "{{API_BASE_URL}}";

/// Escape a value for use inside a double-quoted script string
fn escape_script_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Render the page with the Gateway base URL injected
pub fn render_page(gateway_base_url: &str) -> String {
    TEMPLATE.replace(
        BASE_URL_PLACEHOLDER,
        &escape_script_string(gateway_base_url.trim_end_matches('/')),
    )
}
