use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Largest buy-in for which two stacks still add up within `u32`.
pub const MAX_BUY_IN: u32 = u32::MAX / 2;

/// Table parameters for one heads-up session.
///
/// Missing fields fall back to the defaults, so a partial TOML document is
/// enough:
///
/// ```
/// use headsup_engine::config::TableConfig;
///
/// let cfg = TableConfig::from_toml_str("big_blind = 20\nsmall_blind = 10").unwrap();
/// assert_eq!(cfg.buy_in, 1000);
/// assert_eq!(cfg.big_blind, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Starting stack for both seats
    pub buy_in: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    /// Fixed RNG seed for reproducible deals; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            buy_in: 1000,
            small_blind: 5,
            big_blind: 10,
            seed: None,
        }
    }
}

impl TableConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: TableConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buy_in == 0 {
            return Err(ConfigError::Invalid("buy_in must be positive".into()));
        }
        // both stacks together must fit the chip ledger
        if self.buy_in > MAX_BUY_IN {
            return Err(ConfigError::Invalid(format!(
                "buy_in {} exceeds the maximum of {MAX_BUY_IN}",
                self.buy_in
            )));
        }
        if self.small_blind == 0 {
            return Err(ConfigError::Invalid("small_blind must be positive".into()));
        }
        if self.big_blind < self.small_blind {
            return Err(ConfigError::Invalid(format!(
                "big_blind {} is below small_blind {}",
                self.big_blind, self.small_blind
            )));
        }
        Ok(())
    }
}
