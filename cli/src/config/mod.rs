//! Configuration for schema-check
//!
//! Settings are stored in RON, like the schema engine's other tooling, and
//! control how strictly object fields are compared with interface fields.

pub mod loader;

use schema::MatchOptions;
use serde::{Deserialize, Serialize};

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub matcher: MatcherSettings,
}

/// Structural matcher settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct MatcherSettings {
    /// Extra field attributes that never affect conformance (e.g.
    /// "deprecation_reason"). Descriptions are always ignored.
    #[serde(default)]
    pub ignored_attributes: Vec<String>,
}

impl MatcherSettings {
    /// Validate the matcher settings
    pub fn validate(&self) -> Result<(), String> {
        match self.ignored_attributes.iter().find(|attr| attr.trim().is_empty()) {
            Some(_) => Err("ignored attribute names must not be empty".to_string()),
            None => Ok(()),
        }
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            ignored_attributes: self.ignored_attributes.clone(),
        }
    }
}
