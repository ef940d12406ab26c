//! Configuration-driven tailoring

use super::abbreviation::AbbreviationTrie;
use super::config::TailoringConfig;
use super::Tailoring;
use crate::error::{CoreError, Result};
use crate::types::{CharAttributes, LineBreakType};
use crate::unicode::utf16::{decode_before, scalars};
use crate::unicode::{PropertyLookup, ScriptRun, SentenceClass, UnicodeProperties};
use icu_properties::props::Script;
use icu_properties::PropertyParser;
use log::debug;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

/// Tailoring built from a [`TailoringConfig`]
///
/// * Removes sentence boundaries that follow a full stop closing a known
///   abbreviation or a word matching one of the suppression patterns.
/// * Removes line-break opportunities before or after configured characters.
///   Forced breaks are never removed.
///
/// Only runs whose script is listed in the configuration are touched; an
/// empty script list accepts every run.
#[derive(Debug, Clone)]
pub struct RuleTailoring {
    code: String,
    name: String,
    scripts: Vec<Script>,
    abbreviations: AbbreviationTrie,
    patterns: Vec<Regex>,
    no_break_before: HashSet<char>,
    no_break_after: HashSet<char>,
}

impl RuleTailoring {
    pub fn from_config(config: &TailoringConfig) -> Result<Self> {
        if config.metadata.code.trim().is_empty() {
            return Err(CoreError::Configuration(
                "tailoring code must not be empty".to_string(),
            ));
        }

        let parser = PropertyParser::<Script>::new();
        let scripts = config
            .metadata
            .scripts
            .iter()
            .map(|name| {
                parser
                    .get_loose(name)
                    .ok_or_else(|| CoreError::UnknownScript(name.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        let patterns = config
            .suppression
            .patterns
            .iter()
            .map(|p| {
                Regex::new(&p.pattern).map_err(|source| CoreError::InvalidPattern {
                    pattern: p.pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let abbreviations = AbbreviationTrie::from_categories(
            &config.abbreviations.categories,
            config.metadata.case_sensitive,
        );

        debug!(
            "built tailoring '{}': {} scripts, {} abbreviations, {} patterns",
            config.metadata.code,
            scripts.len(),
            abbreviations.len(),
            patterns.len()
        );

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            scripts,
            abbreviations,
            patterns,
            no_break_before: config.line_breaks.no_break_before.iter().copied().collect(),
            no_break_after: config.line_breaks.no_break_after.iter().copied().collect(),
        })
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: TailoringConfig = toml::from_str(toml_str)?;
        Self::from_config(&config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scripts(&self) -> &[Script] {
        &self.scripts
    }

    pub fn abbreviations(&self) -> &AbbreviationTrie {
        &self.abbreviations
    }

    fn applies_to(&self, run: &ScriptRun) -> bool {
        self.scripts.is_empty() || self.scripts.contains(&run.script)
    }

    /// Whether a full stop after `word` should not end the sentence.
    fn suppresses(&self, word: &str) -> bool {
        !word.is_empty()
            && (self.abbreviations.contains(word) || self.patterns.iter().any(|re| re.is_match(word)))
    }

    fn tailor_sentences(&self, units: &[u16], run: &ScriptRun, attributes: &mut [CharAttributes]) {
        let lookup = UnicodeProperties::new();
        for i in run.range() {
            if i == 0 || !attributes[i].is_sentence_boundary {
                continue;
            }
            let Some(dot) = full_stop_before(units, &lookup, i) else {
                continue;
            };
            let word = word_before(units, dot);
            if self.suppresses(&word) {
                debug!("'{}': no sentence boundary after '{word}.'", self.code);
                attributes[i].is_sentence_boundary = false;
            }
        }
    }

    fn tailor_line_breaks(&self, units: &[u16], run: &ScriptRun, attributes: &mut [CharAttributes]) {
        if self.no_break_before.is_empty() && self.no_break_after.is_empty() {
            return;
        }
        for (offset, scalar, width) in scalars(&units[run.range()]) {
            let Some(ch) = scalar.as_char() else {
                continue;
            };
            let start = run.start + offset;
            if self.no_break_before.contains(&ch) {
                suppress_line_break(attributes, start);
            }
            if self.no_break_after.contains(&ch) && start + width < units.len() {
                suppress_line_break(attributes, start + width);
            }
        }
    }
}

impl Tailoring for RuleTailoring {
    fn tailor(&self, units: &[u16], runs: &[ScriptRun], attributes: &mut [CharAttributes]) {
        for run in runs.iter().filter(|run| self.applies_to(run)) {
            self.tailor_sentences(units, run, attributes);
            self.tailor_line_breaks(units, run, attributes);
        }
    }
}

fn suppress_line_break(attributes: &mut [CharAttributes], index: usize) {
    let attr = &mut attributes[index];
    if attr.line_break != LineBreakType::ForcedBreak {
        attr.line_break = LineBreakType::NoBreak;
    }
}

/// Index of the full stop that ends the sentence closing at `boundary`.
///
/// Walks back over spaces and closing punctuation; anything else (including a
/// separator, `?` or `!`) means the boundary was not made by a full stop.
fn full_stop_before<L: PropertyLookup>(units: &[u16], lookup: &L, boundary: usize) -> Option<usize> {
    let mut end = boundary;
    while end > 0 {
        let (scalar, start) = decode_before(units, end);
        match lookup.scalar_sentence_class(scalar) {
            SentenceClass::Sp | SentenceClass::Close => end = start,
            SentenceClass::ATerm => return Some(start),
            _ => return None,
        }
    }
    None
}

/// The word directly before `dot`: letters, digits and inner full stops
/// (`e.g`, `U.S`).
fn word_before(units: &[u16], dot: usize) -> String {
    let mut chars = Vec::new();
    let mut end = dot;
    while end > 0 {
        let (scalar, start) = decode_before(units, end);
        match scalar.as_char() {
            Some(ch) if ch.is_alphanumeric() || (ch == '.' && !chars.is_empty()) => {
                chars.push(ch);
                end = start;
            }
            _ => break,
        }
    }
    if chars.last() == Some(&'.') {
        chars.pop();
    }
    chars.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unicode::script_runs;

    const CONFIG: &str = r##"
        [metadata]
        code = "test"
        name = "Test"
        scripts = ["Latin"]

        [abbreviations]
        titles = ["Mr", "Dr"]
        latin = ["e.g"]

        [suppression]
        patterns = [{ pattern = "^[A-Z]$", description = "initial" }]

        [line_breaks]
        no_break_before = ["%"]
        no_break_after = ["#"]
    "##;

    fn utf16(text: &str) -> Vec<u16> {
        text.encode_utf16().collect()
    }

    #[test]
    fn test_from_toml_str() {
        let tailoring = RuleTailoring::from_toml_str(CONFIG).unwrap();
        assert_eq!(tailoring.code(), "test");
        assert_eq!(tailoring.name(), "Test");
        assert_eq!(tailoring.scripts(), &[Script::Latin]);
        assert_eq!(tailoring.abbreviations().len(), 3);
    }

    #[test]
    fn test_unknown_script() {
        let toml = "[metadata]\ncode = \"x\"\nname = \"X\"\nscripts = [\"Klingonish\"]";
        match RuleTailoring::from_toml_str(toml) {
            Err(CoreError::UnknownScript(name)) => assert_eq!(name, "Klingonish"),
            other => panic!("expected UnknownScript, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_pattern() {
        let toml = "[metadata]\ncode = \"x\"\nname = \"X\"\n[suppression]\npatterns = [{ pattern = \"(\" }]";
        assert!(matches!(
            RuleTailoring::from_toml_str(toml),
            Err(CoreError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_empty_code_rejected() {
        let toml = "[metadata]\ncode = \"\"\nname = \"X\"";
        assert!(matches!(
            RuleTailoring::from_toml_str(toml),
            Err(CoreError::Configuration(_))
        ));
    }

    #[test]
    fn test_word_before() {
        let units = utf16("see e.g. this");
        assert_eq!(word_before(&units, 7), "e.g");
        let units = utf16("Mr.");
        assert_eq!(word_before(&units, 2), "Mr");
        let units = utf16(" .");
        assert_eq!(word_before(&units, 1), "");
    }

    #[test]
    fn test_full_stop_before_skips_space_and_quotes() {
        let lookup = UnicodeProperties::new();
        let units = utf16("Hi.\" Next");
        assert_eq!(full_stop_before(&units, &lookup, 5), Some(2));
        let units = utf16("Hi! Next");
        assert_eq!(full_stop_before(&units, &lookup, 4), None);
    }

    #[test]
    fn test_sentence_suppression() {
        let tailoring = RuleTailoring::from_toml_str(CONFIG).unwrap();
        let units = utf16("Mr. Smith met J. Doe. Then left.");
        let mut attrs = CharAttributes::buffer(units.len());
        // Boundaries as the default algorithm reports them
        for i in [0, 4, 17, 22] {
            attrs[i].is_sentence_boundary = true;
        }
        tailoring.tailor(&units, &script_runs(&units), &mut attrs);
        let kept: Vec<usize> = (0..units.len())
            .filter(|&i| attrs[i].is_sentence_boundary)
            .collect();
        assert_eq!(kept, vec![0, 22]);
    }

    #[test]
    fn test_line_break_suppression() {
        let tailoring = RuleTailoring::from_toml_str(CONFIG).unwrap();
        let units = utf16("a %b# c");
        let mut attrs = CharAttributes::buffer(units.len());
        for attr in attrs.iter_mut().skip(1) {
            attr.line_break = LineBreakType::Break;
        }
        attrs[6].line_break = LineBreakType::ForcedBreak;
        tailoring.tailor(&units, &script_runs(&units), &mut attrs);
        assert_eq!(attrs[2].line_break, LineBreakType::NoBreak);
        assert_eq!(attrs[5].line_break, LineBreakType::NoBreak);
        assert_eq!(attrs[3].line_break, LineBreakType::Break);
        assert_eq!(attrs[6].line_break, LineBreakType::ForcedBreak);
    }

    #[test]
    fn test_other_scripts_untouched() {
        let tailoring = RuleTailoring::from_toml_str(CONFIG).unwrap();
        let units = utf16("Мр. Смит");
        let mut attrs = CharAttributes::buffer(units.len());
        attrs[4].is_sentence_boundary = true;
        tailoring.tailor(&units, &script_runs(&units), &mut attrs);
        assert!(attrs[4].is_sentence_boundary);
    }
}
