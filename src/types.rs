//! Type definitions for resolved cell styles

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGB font colour with 0-255 components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Default font colour; never emits a colour command
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(r, g, b)
    }

    pub fn is_black(&self) -> bool {
        *self == Self::BLACK
    }

    /// Decode a packed spreadsheet colour integer
    ///
    /// Excel stores font colours with red in the low byte, then green, then
    /// blue (`0x00BBGGRR`). Higher bits are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use celltex::types::Rgb;
    ///
    /// assert_eq!(Rgb::from_excel_color(255), Rgb(255, 0, 0));
    /// assert_eq!(Rgb::from_excel_color(0xFF0000), Rgb(0, 0, 255));
    /// ```
    pub fn from_excel_color(value: i64) -> Self {
        Rgb(
            (value & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            ((value >> 16) & 0xFF) as u8,
        )
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0, self.1, self.2)
    }
}

/// Spreadsheet underline styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnderlineStyle {
    /// No underline (xlUnderlineStyleNone)
    None,
    /// Single underline
    Single,
    /// Double underline
    Double,
    /// Single accounting underline
    SingleAccounting,
    /// Double accounting underline
    DoubleAccounting,
}

impl UnderlineStyle {
    /// Map a raw underline code. Unknown codes count as single underline.
    pub fn from_code(code: i64) -> Self {
        match code {
            -4142 => UnderlineStyle::None,
            -4119 => UnderlineStyle::Double,
            4 => UnderlineStyle::SingleAccounting,
            5 => UnderlineStyle::DoubleAccounting,
            _ => UnderlineStyle::Single,
        }
    }

    /// Get the raw code for this style
    pub fn code(&self) -> i64 {
        match self {
            UnderlineStyle::None => -4142,
            UnderlineStyle::Single => 2,
            UnderlineStyle::Double => -4119,
            UnderlineStyle::SingleAccounting => 4,
            UnderlineStyle::DoubleAccounting => 5,
        }
    }

    pub fn is_underlined(&self) -> bool {
        !matches!(self, UnderlineStyle::None)
    }
}

/// Raw font attributes as read from a spreadsheet cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellFont {
    /// Packed colour integer (`0x00BBGGRR`)
    pub color: i64,
    pub bold: bool,
    pub italic: bool,
    /// Raw underline code, see [`UnderlineStyle::from_code`]
    pub underline: i64,
}

impl Default for CellFont {
    fn default() -> Self {
        CellFont {
            color: 0,
            bold: false,
            italic: false,
            underline: UnderlineStyle::None.code(),
        }
    }
}

/// Resolved style and text of one cell
///
/// A context is a snapshot: expressions only ever read it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StyleContext {
    pub color: Rgb,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Displayed text; may contain newlines
    pub text: String,
}

impl StyleContext {
    /// Create a new context
    pub fn new(
        color: impl Into<Rgb>,
        bold: bool,
        italic: bool,
        underline: bool,
        text: impl Into<String>,
    ) -> Self {
        StyleContext {
            color: color.into(),
            bold,
            italic,
            underline,
            text: text.into(),
        }
    }

    /// Create an unstyled context (black, no bold/italic/underline)
    pub fn plain(text: impl Into<String>) -> Self {
        StyleContext {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Resolve raw font attributes and displayed text into a context
    ///
    /// Surrounding whitespace is trimmed; embedded newlines are kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use celltex::types::{CellFont, Rgb, StyleContext};
    ///
    /// let font = CellFont { color: 255, bold: true, ..Default::default() };
    /// let ctx = StyleContext::from_font(&font, "  a\nb \n");
    /// assert_eq!(ctx.color, Rgb(255, 0, 0));
    /// assert_eq!(ctx.text, "a\nb");
    /// assert!(!ctx.underline);
    /// ```
    pub fn from_font(font: &CellFont, text: &str) -> Self {
        StyleContext {
            color: Rgb::from_excel_color(font.color),
            bold: font.bold,
            italic: font.italic,
            underline: UnderlineStyle::from_code(font.underline).is_underlined(),
            text: text.trim().to_string(),
        }
    }

    pub fn with_color(mut self, color: impl Into<Rgb>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// True when no style command would fire for this context
    pub fn is_unstyled(&self) -> bool {
        self.color.is_black() && !self.bold && !self.italic && !self.underline
    }
}

impl fmt::Display for StyleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{color:({}),bold:{},italic:{},underline:{},text:{}}}",
            self.color, self.bold, self.italic, self.underline, self.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excel_color_decoding() {
        assert_eq!(Rgb::from_excel_color(0), Rgb::BLACK);
        assert_eq!(Rgb::from_excel_color(0x00FF00), Rgb(0, 255, 0));
        assert_eq!(Rgb::from_excel_color(0x123456), Rgb(0x56, 0x34, 0x12));
        assert_eq!(Rgb::from_excel_color(0xFFFFFF), Rgb(255, 255, 255));
    }

    #[test]
    fn test_underline_codes() {
        assert!(!UnderlineStyle::from_code(-4142).is_underlined());
        assert!(UnderlineStyle::from_code(2).is_underlined());
        assert_eq!(UnderlineStyle::from_code(-4119), UnderlineStyle::Double);
        assert_eq!(UnderlineStyle::from_code(99), UnderlineStyle::Single);
        assert_eq!(UnderlineStyle::from_code(UnderlineStyle::Double.code()), UnderlineStyle::Double);
    }

    #[test]
    fn test_context_from_font() {
        let font = CellFont {
            color: 0x0000FF,
            bold: false,
            italic: true,
            underline: UnderlineStyle::Double.code(),
        };
        let ctx = StyleContext::from_font(&font, "\t line one\nline two  ");
        assert_eq!(ctx, StyleContext::new((255, 0, 0), false, true, true, "line one\nline two"));

        let ctx = StyleContext::from_font(&CellFont::default(), " x ");
        assert!(ctx.is_unstyled());
        assert_eq!(ctx.text, "x");
    }

    #[test]
    fn test_context_display() {
        let ctx = StyleContext::plain("what?").with_color((1, 0, 0)).with_bold(true);
        assert_eq!(
            ctx.to_string(),
            "{color:(1,0,0),bold:true,italic:false,underline:false,text:what?}"
        );
        assert!(!ctx.is_unstyled());
    }
}
