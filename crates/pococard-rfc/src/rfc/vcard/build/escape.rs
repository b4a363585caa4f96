//! vCard 3.0 text escaping.

/// Escapes a text value for a vCard content line.
///
/// Escapes comma and semicolon, and turns each line break (`\n` or `\r\n`)
/// into the two characters `\n`. Backslashes already present are passed
/// through unchanged, so text that is already escaped must not be escaped
/// again.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\n' => result.push_str("\\n"),
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                result.push_str("\\n");
            }
            _ => result.push(c),
        }
    }

    result
}

/// Escapes each item and joins them into a comma-separated list value.
#[must_use]
pub fn escape_list<S: AsRef<str>>(items: &[S]) -> String {
    let mut result = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            result.push(',');
        }
        result.push_str(&escape_text(item.as_ref()));
    }
    result
}
