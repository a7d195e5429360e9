/// Converts a character to a string for display, escaping whitespace and
/// other control characters
pub fn format_char(c: char) -> String {
    match c {
        '\\' | '\n' | '\r' | '\t' => c.escape_default().to_string(),
        c if c.is_control() => c.escape_unicode().to_string(),
        _ => c.to_string(),
    }
}
