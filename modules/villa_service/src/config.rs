//! Configuration for villa service module

use crate::domain::validation::DEFAULT_MAX_NAME_LENGTH;
use crate::domain::ValidationRules;
use serde::{Deserialize, Serialize};

/// Villa service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum villa name length in characters
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,

    /// Insert the sample villas into an empty store at startup
    #[serde(default)]
    pub seed_sample_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_name_length: default_max_name_length(),
            seed_sample_data: false,
        }
    }
}

impl Config {
    pub fn validation_rules(&self) -> ValidationRules {
        ValidationRules {
            max_name_length: self.max_name_length,
        }
    }
}

fn default_max_name_length() -> usize {
    DEFAULT_MAX_NAME_LENGTH
}
