//! Embedded tailorings

use super::rules::RuleTailoring;
use crate::error::{CoreError, Result};
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

static EMBEDDED: OnceLock<HashMap<String, Arc<RuleTailoring>>> = OnceLock::new();

macro_rules! embed_tailoring_config {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

fn load_embedded() -> HashMap<String, Arc<RuleTailoring>> {
    let mut tailorings = HashMap::new();

    let embedded = [
        embed_tailoring_config!("en", "../../configs/tailorings/english.toml"),
        embed_tailoring_config!("ja", "../../configs/tailorings/japanese.toml"),
    ];

    for (code, toml_content) in embedded {
        match RuleTailoring::from_toml_str(toml_content) {
            Ok(tailoring) if tailoring.code() == code => {
                debug!("loaded embedded tailoring '{code}'");
                tailorings.insert(code.to_string(), Arc::new(tailoring));
            }
            Ok(tailoring) => {
                warn!(
                    "embedded tailoring code mismatch: expected {code}, got {}",
                    tailoring.code()
                );
            }
            Err(e) => warn!("failed to load embedded tailoring '{code}': {e}"),
        }
    }

    tailorings
}

fn embedded() -> &'static HashMap<String, Arc<RuleTailoring>> {
    EMBEDDED.get_or_init(load_embedded)
}

/// Embedded tailoring by code (`"en"`) or name (`"English"`), case-insensitively.
pub fn get_tailoring(code: &str) -> Result<Arc<RuleTailoring>> {
    let key = code.trim().to_lowercase();
    let tailorings = embedded();

    tailorings
        .get(&key)
        .or_else(|| {
            tailorings
                .values()
                .find(|t| t.name().to_lowercase() == key)
        })
        .cloned()
        .ok_or_else(|| CoreError::UnsupportedTailoring(code.to_string()))
}

/// Codes of the embedded tailorings, sorted.
pub fn list_available_tailorings() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = embedded().keys().map(|s| s.as_str()).collect();
    codes.sort_unstable();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_tailoring_unsupported() {
        match get_tailoring("nonexistent") {
            Err(CoreError::UnsupportedTailoring(code)) => assert_eq!(code, "nonexistent"),
            _ => panic!("Expected UnsupportedTailoring error"),
        }
    }

    #[test]
    fn test_get_tailoring_english() {
        let tailoring = get_tailoring("en").expect("English tailoring should exist");
        assert_eq!(tailoring.code(), "en");
        assert_eq!(tailoring.name(), "English");
        assert!(tailoring.abbreviations().contains("Mr"));
    }

    #[test]
    fn test_get_tailoring_by_name() {
        let tailoring = get_tailoring("Japanese").unwrap();
        assert_eq!(tailoring.code(), "ja");
        assert!(get_tailoring(" EN ").is_ok());
    }

    #[test]
    fn test_list_available_tailorings() {
        assert_eq!(list_available_tailorings(), vec!["en", "ja"]);
    }

    #[test]
    fn test_registry_is_shared() {
        let first = get_tailoring("en").unwrap();
        let second = get_tailoring("en").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
