//! Style commands and ordered command chains

use crate::error::{CellTexError, Result};
use crate::expression::{CommandExpression, Token};
use crate::types::{Rgb, StyleContext};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const BOLD_MACRO: &str = r"\textbf";
pub const ITALIC_MACRO: &str = r"\textit";
pub const UNDERLINE_MACRO: &str = r"\underline";
const COLOR_MACRO: &str = r"\textcolor[rgb]";

/// One style attribute that may turn into a LaTeX macro
///
/// Each variant inspects the context independently and emits at most one
/// token. The order in which they fire is decided by the [`CommandChain`]
/// holding them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StyleCommand {
    /// `\textcolor[rgb]{r,g,b}` unless the colour is black
    Color,
    /// `\textbf` when bold
    Bold,
    /// `\textit` when italic
    Italic,
    /// `\underline` when underlined
    Underline,
}

impl StyleCommand {
    /// All commands in the default nesting order
    pub const ALL: [StyleCommand; 4] = [
        StyleCommand::Color,
        StyleCommand::Bold,
        StyleCommand::Italic,
        StyleCommand::Underline,
    ];

    /// Lowercase name used in configuration strings
    pub fn name(&self) -> &'static str {
        match self {
            StyleCommand::Color => "color",
            StyleCommand::Bold => "bold",
            StyleCommand::Italic => "italic",
            StyleCommand::Underline => "underline",
        }
    }

    /// Token for this command, or `None` when the context does not need it
    pub fn token(&self, context: &StyleContext) -> Option<Token> {
        match self {
            StyleCommand::Color if !context.color.is_black() => {
                Some(Cow::Owned(color_token(context.color)))
            }
            StyleCommand::Color => None,
            StyleCommand::Bold => context.bold.then_some(Cow::Borrowed(BOLD_MACRO)),
            StyleCommand::Italic => context.italic.then_some(Cow::Borrowed(ITALIC_MACRO)),
            StyleCommand::Underline => {
                context.underline.then_some(Cow::Borrowed(UNDERLINE_MACRO))
            }
        }
    }
}

/// Build `\textcolor[rgb]{r,g,b}` with base-10 components and no spaces
fn color_token(color: Rgb) -> String {
    let mut buffer = itoa::Buffer::new();
    let mut token = String::with_capacity(COLOR_MACRO.len() + 13);
    token.push_str(COLOR_MACRO);
    token.push('{');
    token.push_str(buffer.format(color.0));
    token.push(',');
    token.push_str(buffer.format(color.1));
    token.push(',');
    token.push_str(buffer.format(color.2));
    token.push('}');
    token
}

impl CommandExpression for StyleCommand {
    fn evaluate_into(&self, context: &StyleContext, out: &mut Vec<Token>) {
        if let Some(token) = self.token(context) {
            out.push(token);
        }
    }
}

impl fmt::Display for StyleCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleCommand {
    type Err = CellTexError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "color" | "colour" => Ok(StyleCommand::Color),
            "bold" => Ok(StyleCommand::Bold),
            "italic" => Ok(StyleCommand::Italic),
            "underline" => Ok(StyleCommand::Underline),
            _ => Err(CellTexError::UnknownCommand(s.trim().to_string())),
        }
    }
}

/// Caller-ordered sequence of style commands
///
/// Evaluation keeps declaration order and drops commands that emit nothing.
/// An empty result means no styling is required.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CommandChain {
    commands: Vec<StyleCommand>,
}

impl CommandChain {
    /// Create a chain; order matters, the first command nests outermost
    pub fn new(commands: Vec<StyleCommand>) -> Self {
        CommandChain { commands }
    }

    /// Color, bold, italic, underline
    pub fn default_order() -> Self {
        CommandChain::new(StyleCommand::ALL.to_vec())
    }

    pub fn commands(&self) -> &[StyleCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl FromIterator<StyleCommand> for CommandChain {
    fn from_iter<I: IntoIterator<Item = StyleCommand>>(iter: I) -> Self {
        CommandChain::new(iter.into_iter().collect())
    }
}

impl CommandExpression for CommandChain {
    fn evaluate_into(&self, context: &StyleContext, out: &mut Vec<Token>) {
        out.reserve(self.commands.len());
        for command in &self.commands {
            command.evaluate_into(context, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_command() {
        let ctx = StyleContext::new((1, 0, 0), false, false, false, "what?");
        assert_eq!(StyleCommand::Color.evaluate(&ctx), vec![r"\textcolor[rgb]{1,0,0}"]);

        let ctx = ctx.with_color((255, 128, 7));
        assert_eq!(
            StyleCommand::Color.evaluate(&ctx),
            vec![r"\textcolor[rgb]{255,128,7}"]
        );

        let ctx = ctx.with_color(Rgb::BLACK);
        assert!(StyleCommand::Color.evaluate(&ctx).is_empty());
    }

    #[test]
    fn test_flag_commands() {
        let ctx = StyleContext::plain("x");
        assert!(StyleCommand::Bold.token(&ctx).is_none());
        assert!(StyleCommand::Italic.token(&ctx).is_none());
        assert!(StyleCommand::Underline.token(&ctx).is_none());

        let ctx = ctx.with_bold(true).with_italic(true).with_underline(true);
        assert_eq!(StyleCommand::Bold.token(&ctx).as_deref(), Some(r"\textbf"));
        assert_eq!(StyleCommand::Italic.token(&ctx).as_deref(), Some(r"\textit"));
        assert_eq!(
            StyleCommand::Underline.token(&ctx).as_deref(),
            Some(r"\underline")
        );
    }

    #[test]
    fn test_chain_drops_empty_results() {
        let chain = CommandChain::default_order();
        let ctx = StyleContext::new((1, 0, 0), true, true, true, "what?");
        assert_eq!(
            chain.evaluate(&ctx),
            vec![r"\textcolor[rgb]{1,0,0}", r"\textbf", r"\textit", r"\underline"]
        );

        let ctx = ctx.with_bold(false);
        assert_eq!(
            chain.evaluate(&ctx),
            vec![r"\textcolor[rgb]{1,0,0}", r"\textit", r"\underline"]
        );

        let ctx = ctx.with_italic(false);
        assert_eq!(chain.evaluate(&ctx), vec![r"\textcolor[rgb]{1,0,0}", r"\underline"]);

        let ctx = ctx.with_underline(false);
        assert_eq!(chain.evaluate(&ctx), vec![r"\textcolor[rgb]{1,0,0}"]);

        let ctx = ctx.with_color(Rgb::BLACK);
        assert!(chain.evaluate(&ctx).is_empty());
    }

    #[test]
    fn test_chain_keeps_declared_order() {
        let chain: CommandChain = [StyleCommand::Underline, StyleCommand::Bold]
            .into_iter()
            .collect();
        let ctx = StyleContext::new((0, 0, 0), true, true, true, "");
        assert_eq!(chain.evaluate(&ctx), vec![r"\underline", r"\textbf"]);
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_empty_chain() {
        let chain = CommandChain::default();
        assert!(chain.is_empty());
        let ctx = StyleContext::new((3, 3, 3), true, true, true, "x");
        assert!(chain.evaluate(&ctx).is_empty());
    }

    #[test]
    fn test_command_names() {
        for command in StyleCommand::ALL {
            assert_eq!(command.name().parse::<StyleCommand>(), Ok(command));
        }
        assert_eq!(" Colour ".parse::<StyleCommand>(), Ok(StyleCommand::Color));
        assert_eq!(
            "strike".parse::<StyleCommand>(),
            Err(CellTexError::UnknownCommand("strike".to_string()))
        );
    }
}
