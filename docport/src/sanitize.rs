//! Text sanitization for WordprocessingML output
//!
//! Word rejects documents whose text carries the raw C0 control characters
//! outside of tab/newline/carriage-return, so every piece of text is passed
//! through [`sanitize`] before it reaches a run or a table cell.

/// Strip control characters that are invalid in WordprocessingML text.
///
/// Removes 0x00–0x08, 0x0B, 0x0C and 0x0E–0x1F. Tab (0x09), line feed
/// (0x0A) and carriage return (0x0D) are left alone. Idempotent:
/// `sanitize(sanitize(x)) == sanitize(x)`.
pub fn sanitize(raw: &str) -> String {
    // Vertical tab first; the generic pass removes it again, which is fine.
    let pass = raw.replace('\u{000B}', "");
    pass.chars().filter(|c| !is_disallowed(*c)).collect()
}

fn is_disallowed(c: char) -> bool {
    matches!(
        c,
        '\u{0000}'..='\u{0008}' | '\u{000B}' | '\u{000C}' | '\u{000E}'..='\u{001F}'
    )
}
