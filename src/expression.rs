//! Expression capabilities and the macro-nesting wrapper
//!
//! Two capabilities, never interchangeable at a call site:
//!
//! - [`CommandExpression`] produces zero or more macro tokens from a context
//!   (style commands and chains of them).
//! - [`LiteralExpression`] produces exactly one string from a context
//!   (encoded text, constants, and fully wrapped output).
//!
//! [`ParameterWrapper`] joins one of each into the final markup.

use crate::command::CommandChain;
use crate::encoder::TextEncoder;
use crate::types::StyleContext;
use std::borrow::Cow;

/// A single LaTeX macro, possibly with an argument already baked in
/// (for example `\textbf` or `\textcolor[rgb]{1,0,0}`)
pub type Token = Cow<'static, str>;

/// Produces zero or more macro tokens for a context
pub trait CommandExpression {
    /// Append this expression's tokens to `out`, in emission order
    fn evaluate_into(&self, context: &StyleContext, out: &mut Vec<Token>);

    /// Collect this expression's tokens
    fn evaluate(&self, context: &StyleContext) -> Vec<Token> {
        let mut out = Vec::new();
        self.evaluate_into(context, &mut out);
        out
    }
}

/// Produces exactly one string for a context
pub trait LiteralExpression {
    fn evaluate(&self, context: &StyleContext) -> String;
}

impl<T: CommandExpression + ?Sized> CommandExpression for &T {
    fn evaluate_into(&self, context: &StyleContext, out: &mut Vec<Token>) {
        (**self).evaluate_into(context, out)
    }
}

impl<T: LiteralExpression + ?Sized> LiteralExpression for &T {
    fn evaluate(&self, context: &StyleContext) -> String {
        (**self).evaluate(context)
    }
}

impl<T: LiteralExpression + ?Sized> LiteralExpression for Box<T> {
    fn evaluate(&self, context: &StyleContext) -> String {
        (**self).evaluate(context)
    }
}

/// Fixed string, independent of the context
///
/// Useful for testing [`ParameterWrapper`] without text encoding, or for
/// injecting fragments that are already valid LaTeX.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConstantLiteral(String);

impl ConstantLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        ConstantLiteral(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl LiteralExpression for ConstantLiteral {
    fn evaluate(&self, _context: &StyleContext) -> String {
        self.0.clone()
    }
}

/// Nests the tokens of a command expression around a literal payload
///
/// For tokens `[c1, c2, ..., cn]` and payload `p` the output is
/// `c1{c2{...{cn{p}}...}}`: the first token is outermost. With no tokens the
/// payload is returned untouched, without braces.
///
/// # Examples
///
/// ```
/// use celltex::command::{CommandChain, StyleCommand};
/// use celltex::encoder::TextEncoder;
/// use celltex::expression::{LiteralExpression, ParameterWrapper};
/// use celltex::types::StyleContext;
///
/// let wrapper = ParameterWrapper::new(
///     CommandChain::new(vec![StyleCommand::Bold, StyleCommand::Italic]),
///     TextEncoder,
/// );
/// let ctx = StyleContext::plain("50%").with_bold(true).with_italic(true);
/// assert_eq!(wrapper.evaluate(&ctx), r"\textbf{\textit{50\%}}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterWrapper<C = CommandChain, L = TextEncoder> {
    commands: C,
    literal: L,
}

impl<C, L> ParameterWrapper<C, L>
where
    C: CommandExpression,
    L: LiteralExpression,
{
    pub fn new(commands: C, literal: L) -> Self {
        ParameterWrapper { commands, literal }
    }

    pub fn commands(&self) -> &C {
        &self.commands
    }

    pub fn literal(&self) -> &L {
        &self.literal
    }
}

impl<C, L> LiteralExpression for ParameterWrapper<C, L>
where
    C: CommandExpression,
    L: LiteralExpression,
{
    fn evaluate(&self, context: &StyleContext) -> String {
        let commands = self.commands.evaluate(context);
        let payload = self.literal.evaluate(context);

        if commands.is_empty() {
            return payload;
        }

        let capacity = commands.iter().map(|c| c.len() + 2).sum::<usize>() + payload.len();
        let mut result = String::with_capacity(capacity);
        for command in &commands {
            result.push_str(command);
            result.push('{');
        }
        result.push_str(&payload);
        result.extend(std::iter::repeat('}').take(commands.len()));
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::StyleCommand;

    fn full_chain() -> CommandChain {
        CommandChain::new(vec![
            StyleCommand::Color,
            StyleCommand::Bold,
            StyleCommand::Italic,
            StyleCommand::Underline,
        ])
    }

    #[test]
    fn test_constant_literal_ignores_context() {
        let literal = ConstantLiteral::new("x_1");
        let ctx = StyleContext::new((9, 9, 9), true, true, true, "ignored");
        assert_eq!(literal.evaluate(&ctx), "x_1");
        assert_eq!(literal.value(), "x_1");
    }

    #[test]
    fn test_wrapper_without_commands_returns_payload() {
        let wrapper = ParameterWrapper::new(full_chain(), ConstantLiteral::new("payload"));
        let ctx = StyleContext::plain("unused");
        assert_eq!(wrapper.evaluate(&ctx), "payload");

        let empty = ParameterWrapper::new(CommandChain::default(), ConstantLiteral::new("p"));
        let styled = StyleContext::new((1, 2, 3), true, true, true, "");
        assert_eq!(empty.evaluate(&styled), "p");
    }

    #[test]
    fn test_wrapper_nesting_order() {
        let wrapper = ParameterWrapper::new(full_chain(), ConstantLiteral::new("P"));
        let ctx = StyleContext::new((1, 0, 0), true, true, true, "");
        assert_eq!(
            wrapper.evaluate(&ctx),
            r"\textcolor[rgb]{1,0,0}{\textbf{\textit{\underline{P}}}}"
        );

        let ctx = ctx.with_bold(false);
        assert_eq!(
            wrapper.evaluate(&ctx),
            r"\textcolor[rgb]{1,0,0}{\textit{\underline{P}}}"
        );
    }

    #[test]
    fn test_wrapper_is_a_literal() {
        // A wrapper can itself be the payload of another wrapper.
        let inner = ParameterWrapper::new(
            CommandChain::new(vec![StyleCommand::Italic]),
            ConstantLiteral::new("x"),
        );
        let outer = ParameterWrapper::new(CommandChain::new(vec![StyleCommand::Bold]), &inner);
        let ctx = StyleContext::plain("").with_bold(true).with_italic(true);
        assert_eq!(outer.evaluate(&ctx), r"\textbf{\textit{x}}");
    }
}
