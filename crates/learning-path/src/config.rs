use path_layout::TieredLayout;
use serde::{Deserialize, Serialize};

/// How modules are assigned to tiers
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierStrategy {
    /// Trust the tier declared on each module, missing tiers count as 0
    #[default]
    Declared,
    /// One tier past the deepest prerequisite, ignoring declared tiers
    Depth,
}

/// Settings for resolving a learning map
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub tier_strategy: TierStrategy,
    pub layout: TieredLayout,
}

impl MapConfig {
    pub fn with_strategy(mut self, tier_strategy: TierStrategy) -> Self {
        self.tier_strategy = tier_strategy;
        self
    }

    /// Parse a configuration from RON, absent fields keep their defaults
    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use path_layout::Jitter;
    use test_log::test;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(MapConfig::from_ron("()").unwrap(), MapConfig::default());
    }

    #[test]
    fn partial_config_overrides() {
        let config = MapConfig::from_ron(
            "(tier_strategy: depth, layout: (x_jitter: (amplitude: 0.0, frequency: 1.0)))",
        )
        .unwrap();
        assert_eq!(config.tier_strategy, TierStrategy::Depth);
        assert_eq!(config.layout.x_jitter, Jitter::new(0.0, 1.0));
        assert_eq!(config.layout.y_jitter, TieredLayout::default().y_jitter);
    }
}
