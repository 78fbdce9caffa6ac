//! Render configuration: the caller-chosen order of style commands

use crate::command::{CommandChain, StyleCommand};
use crate::encoder::TextEncoder;
use crate::error::Result;
use crate::expression::ParameterWrapper;
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Environment variable holding a comma-separated command order
pub const STYLE_ORDER_ENV: &str = "CELLTEX_STYLE_ORDER";

/// Which style commands fire, and in which nesting order
///
/// The first command is the outermost macro in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderConfig {
    pub order: Vec<StyleCommand>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            order: StyleCommand::ALL.to_vec(),
        }
    }
}

impl RenderConfig {
    pub fn new(order: Vec<StyleCommand>) -> Self {
        RenderConfig { order }
    }

    /// Parse an order such as `"color, bold,italic"`
    ///
    /// Names are case-insensitive; empty entries are skipped and duplicates
    /// kept as given. An empty string yields an empty order.
    ///
    /// # Examples
    ///
    /// ```
    /// use celltex::command::StyleCommand;
    /// use celltex::config::RenderConfig;
    ///
    /// let config = RenderConfig::from_order_str("Bold, color").unwrap();
    /// assert_eq!(config.order, vec![StyleCommand::Bold, StyleCommand::Color]);
    /// assert!(RenderConfig::from_order_str("bold,strike").is_err());
    /// ```
    pub fn from_order_str(s: &str) -> Result<Self> {
        let order = s
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::parse::<StyleCommand>)
            .collect::<Result<Vec<StyleCommand>>>()?;
        Ok(RenderConfig { order })
    }

    /// Read the order from `CELLTEX_STYLE_ORDER`, falling back to the default
    pub fn from_env() -> Self {
        match std::env::var(STYLE_ORDER_ENV) {
            Ok(value) => match Self::from_order_str(&value) {
                Ok(config) => {
                    debug!(order = %value, "loaded style order from environment");
                    config
                }
                Err(err) => {
                    warn!(%err, "ignoring {}; using default style order", STYLE_ORDER_ENV);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Build the command chain for this order
    pub fn chain(&self) -> CommandChain {
        CommandChain::new(self.order.clone())
    }

    /// Build a renderer: chain around escaped cell text
    pub fn renderer(&self) -> ParameterWrapper {
        ParameterWrapper::new(self.chain(), TextEncoder)
    }
}
