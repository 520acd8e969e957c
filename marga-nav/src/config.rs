//! Configuration loading for instance-generation campaigns.

use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

/// Campaign configuration: one batch of instance files per obstacle count.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CampaignConfig {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub campaign: RunConfig,
}

/// Grid dimensions shared by every generated instance
#[derive(Clone, Debug, Deserialize)]
pub struct GridConfig {
    /// Cell rows (default: 20)
    #[serde(default = "default_rows")]
    pub rows: usize,

    /// Cell columns (default: 20)
    #[serde(default = "default_cols")]
    pub cols: usize,
}

/// Batch layout and reproducibility
#[derive(Clone, Debug, Deserialize)]
pub struct RunConfig {
    /// Obstacle counts, one batch per entry (default: 10..50 by 10)
    #[serde(default = "default_obstacle_counts")]
    pub obstacle_counts: Vec<usize>,

    /// Instance files per obstacle count (default: 10)
    #[serde(default = "default_instances_per_count")]
    pub instances_per_count: usize,

    /// RNG seed; omit for entropy seeding
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_rows() -> usize {
    20
}

fn default_cols() -> usize {
    20
}

fn default_obstacle_counts() -> Vec<usize> {
    vec![10, 20, 30, 40, 50]
}

fn default_instances_per_count() -> usize {
    10
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            obstacle_counts: default_obstacle_counts(),
            instances_per_count: default_instances_per_count(),
            seed: None,
        }
    }
}

impl CampaignConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = toml::from_str(&text)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_filled_with_defaults() {
        let config: CampaignConfig = toml::from_str(
            r#"
            [grid]
            rows = 12

            [campaign]
            obstacle_counts = [5, 15]
            seed = 99
            "#,
        )
        .unwrap();

        assert_eq!(config.grid.rows, 12);
        assert_eq!(config.grid.cols, 20);
        assert_eq!(config.campaign.obstacle_counts, vec![5, 15]);
        assert_eq!(config.campaign.instances_per_count, 10);
        assert_eq!(config.campaign.seed, Some(99));
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: CampaignConfig = toml::from_str("").unwrap();
        assert_eq!(config.grid.rows, 20);
        assert_eq!(config.campaign.obstacle_counts, vec![10, 20, 30, 40, 50]);
        assert_eq!(config.campaign.seed, None);
    }
}
