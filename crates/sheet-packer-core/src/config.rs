use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Placement strategies.
///
/// `ShelfOnly` is the plain row scanner; `CornerFitThenShelf` tries to nest
/// each sprite against the corner of an already-placed one before falling back
/// to the shelf. Both are kept so they can be compared on real sprite sets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    ShelfOnly,
    CornerFitThenShelf,
}

impl FromStr for Strategy {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shelf" | "shelf_only" => Ok(Self::ShelfOnly),
            "corner" | "corner_fit" | "corner_fit_then_shelf" => Ok(Self::CornerFitThenShelf),
            _ => Err(()),
        }
    }
}

/// How the width limit grows between layout attempts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GrowthPolicy {
    /// Double the limit on every rejected attempt.
    Double,
    /// Add a fixed number of pixels on every rejected attempt. Must be > 0.
    AddFixed(u32),
}

impl FromStr for GrowthPolicy {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_ascii_lowercase();
        if s == "double" {
            return Ok(Self::Double);
        }
        s.parse::<u32>().map(Self::AddFixed).map_err(|_| ())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackerConfig {
    /// Row width limit for the first layout attempt, in pixels.
    #[serde(default = "default_initial_width_limit")]
    pub initial_width_limit: u32,
    /// Limit growth between attempts.
    #[serde(default = "default_growth")]
    pub growth: GrowthPolicy,
    /// Placement strategy.
    #[serde(default = "default_strategy")]
    pub strategy: Strategy,
    /// Retry cap for the outer layout loop.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            initial_width_limit: default_initial_width_limit(),
            growth: default_growth(),
            strategy: default_strategy(),
            max_attempts: default_max_attempts(),
        }
    }
}

impl PackerConfig {
    /// Validates the configuration parameters.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::SheetPackerError;

        if self.initial_width_limit == 0 {
            return Err(SheetPackerError::InvalidConfig(
                "initial_width_limit must be > 0".into(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(SheetPackerError::InvalidConfig(
                "max_attempts must be > 0".into(),
            ));
        }
        if self.growth == GrowthPolicy::AddFixed(0) {
            return Err(SheetPackerError::InvalidConfig(
                "AddFixed(0) growth makes no forward progress".into(),
            ));
        }
        Ok(())
    }

    /// Create a fluent builder for `PackerConfig`.
    pub fn builder() -> PackerConfigBuilder {
        PackerConfigBuilder::new()
    }
}

fn default_initial_width_limit() -> u32 {
    128
}
fn default_growth() -> GrowthPolicy {
    GrowthPolicy::Double
}
fn default_strategy() -> Strategy {
    Strategy::CornerFitThenShelf
}
fn default_max_attempts() -> u32 {
    32
}

/// Builder for `PackerConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PackerConfigBuilder {
    cfg: PackerConfig,
}

impl PackerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PackerConfig::default(),
        }
    }
    pub fn initial_width_limit(mut self, v: u32) -> Self {
        self.cfg.initial_width_limit = v;
        self
    }
    pub fn growth(mut self, v: GrowthPolicy) -> Self {
        self.cfg.growth = v;
        self
    }
    pub fn strategy(mut self, v: Strategy) -> Self {
        self.cfg.strategy = v;
        self
    }
    pub fn max_attempts(mut self, v: u32) -> Self {
        self.cfg.max_attempts = v;
        self
    }
    pub fn build(self) -> PackerConfig {
        self.cfg
    }
}
