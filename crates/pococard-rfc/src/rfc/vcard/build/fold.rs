//! vCard line folding.

use pococard_core::constants::FOLD_WIDTH;

/// Continuation marker inserted between folded segments.
pub const CONTINUATION: &str = "\n ";

/// Folds a fully assembled content line.
///
/// After every complete run of 75 characters that is followed by more text,
/// a newline and a single space are inserted. Widths count characters of
/// the unfolded line; the continuation space is not counted.
#[must_use]
pub fn fold_line(line: &str) -> String {
    let mut chars = line.chars();
    let mut result = String::with_capacity(line.len() + line.len() / FOLD_WIDTH * 2);

    loop {
        result.extend(chars.by_ref().take(FOLD_WIDTH));

        if chars.as_str().is_empty() {
            return result;
        }
        result.push_str(CONTINUATION);
    }
}
