//! LaTeX text escaping

use crate::expression::LiteralExpression;
use crate::types::StyleContext;

/// LaTeX line break emitted for every newline
pub const LINE_BREAK: &str = r"\\";

/// Substitution for a single reserved character
#[inline]
fn substitute(ch: char) -> Option<&'static str> {
    match ch {
        '$' => Some(r"\$"),
        '^' => Some(r"\^"),
        '_' => Some(r"\_"),
        '\\' => Some(r"\textbackslash{}"),
        '%' => Some(r"\%"),
        '\n' => Some(LINE_BREAK),
        _ => None,
    }
}

/// Escape text for use inside a LaTeX table cell
///
/// Every character is translated once against a fixed table, so a backslash
/// produced by one substitution is never escaped again. Text containing a
/// newline is wrapped in `\makecell{...}` so the lines stack within the cell.
///
/// # Examples
///
/// ```
/// use celltex::encoder::encode;
///
/// assert_eq!(encode("100%"), r"100\%");
/// assert_eq!(encode("a\nb"), r"\makecell{a\\b}");
/// assert_eq!(encode(""), "");
/// ```
pub fn encode(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + text.len() / 4);
    let mut multiline = false;

    for ch in text.chars() {
        match substitute(ch) {
            Some(replacement) => {
                multiline |= ch == '\n';
                escaped.push_str(replacement);
            }
            None => escaped.push(ch),
        }
    }

    // Every substitution ends in a non-backslash, so `\\` only comes from a newline.
    if multiline {
        let mut wrapped = String::with_capacity(escaped.len() + 11);
        wrapped.push_str(r"\makecell{");
        wrapped.push_str(&escaped);
        wrapped.push('}');
        wrapped
    } else {
        escaped
    }
}

/// Literal expression producing the escaped text of the context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextEncoder;

impl LiteralExpression for TextEncoder {
    fn evaluate(&self, context: &StyleContext) -> String {
        encode(&context.text)
    }
}
