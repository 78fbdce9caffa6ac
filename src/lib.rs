//! # celltex
//!
//! Convert the text and font styling of spreadsheet cells into LaTeX markup.
//!
//! ## Features
//!
//! - **Minimal Markup**: Only the styles a cell actually uses become macros
//! - **Correct Nesting**: `\textcolor`, `\textbf`, `\textit` and `\underline`
//!   nest in a caller-chosen order
//! - **Safe Escaping**: `$ ^ _ \ %` are escaped in a single pass
//! - **Multi-line Cells**: Newlines become `\\` inside `\makecell{...}`
//! - **Thread Safe**: Every expression is immutable; regions can render in
//!   parallel with the `parallel` feature
//!
//! ## Quick Start
//!
//! ### Rendering One Cell
//!
//! ```rust
//! use celltex::{render, StyleContext};
//!
//! let cell = StyleContext::new((1, 0, 0), true, true, true, "what?");
//! assert_eq!(
//!     render(&cell),
//!     r"\textcolor[rgb]{1,0,0}{\textbf{\textit{\underline{what?}}}}"
//! );
//! ```
//!
//! ### Rendering a Region with a Custom Order
//!
//! ```rust
//! use celltex::command::StyleCommand;
//! use celltex::{RangeContext, RenderConfig, StyleContext};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let range = RangeContext::for_range(
//!     "A1:B1",
//!     vec![
//!         StyleContext::plain("Total").with_bold(true),
//!         StyleContext::plain("95%").with_italic(true),
//!     ],
//! )?;
//!
//! let renderer = RenderConfig::new(vec![StyleCommand::Italic, StyleCommand::Bold]).renderer();
//! let grid = range.render_with(&renderer);
//! assert_eq!(grid[0], vec![r"\textbf{Total}", r"\textit{95\%}"]);
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod config;
pub mod encoder;
pub mod error;
pub mod expression;
pub mod range;
pub mod types;

pub use command::{CommandChain, StyleCommand};
pub use config::RenderConfig;
pub use encoder::{encode, TextEncoder};
pub use error::{CellTexError, Result};
pub use expression::{CommandExpression, ConstantLiteral, LiteralExpression, ParameterWrapper};
pub use range::{CellRef, RangeContext};
pub use types::{CellFont, Rgb, StyleContext};

use std::sync::LazyLock;

/// Shared renderer with the default command order; read-only once built
static DEFAULT_RENDERER: LazyLock<ParameterWrapper> =
    LazyLock::new(|| RenderConfig::default().renderer());

/// Render one cell with the default order (color, bold, italic, underline)
pub fn render(context: &StyleContext) -> String {
    DEFAULT_RENDERER.evaluate(context)
}

/// Render every cell of a region with the default order
pub fn render_range(range: &RangeContext) -> Vec<Vec<String>> {
    range.render_with(&*DEFAULT_RENDERER)
}

/// The renderer used by [`render`]
pub fn default_renderer() -> &'static ParameterWrapper {
    &DEFAULT_RENDERER
}
