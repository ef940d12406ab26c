//! TOML schema of a rule tailoring

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailoringConfig {
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub abbreviations: AbbreviationConfig,
    #[serde(default)]
    pub suppression: SuppressionConfig,
    #[serde(default)]
    pub line_breaks: LineBreakConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
    /// ICU script names (long or short form) the tailoring applies to; empty
    /// means every run
    #[serde(default)]
    pub scripts: Vec<String>,
    #[serde(default)]
    pub case_sensitive: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AbbreviationConfig {
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuppressionConfig {
    #[serde(default)]
    pub patterns: Vec<RegexPattern>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegexPattern {
    pub pattern: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineBreakConfig {
    #[serde(default)]
    pub no_break_before: Vec<char>,
    #[serde(default)]
    pub no_break_after: Vec<char>,
}
