//! Orchestrator
//!
//! Runs the requested engines over one buffer in dependency order and hands
//! the result to the tailoring hook.

use crate::engine::{grapheme_line, sentence, whitespace, word};
use crate::options::AttributeOptions;
use crate::tailoring::Tailoring;
use crate::types::CharAttributes;
use crate::unicode::{script_runs, PropertyLookup, ScriptRun, UnicodeProperties};
use log::{debug, trace};
use std::fmt;
use std::sync::Arc;

/// Fill `attributes` for `units` with the default property lookup.
///
/// * Empty input is a no-op.
/// * Word and sentence analysis force grapheme analysis on.
/// * Unless [`AttributeOptions::DONT_CLEAR_ATTRIBUTES`] is set, the first
///   `units.len()` entries are reset first.
/// * `tailoring` runs last, and only when `runs` is not empty.
///
/// # Panics
///
/// Panics if `attributes` is shorter than `units`.
pub fn init_char_attributes(
    units: &[u16],
    options: AttributeOptions,
    runs: &[ScriptRun],
    tailoring: Option<&dyn Tailoring>,
    attributes: &mut [CharAttributes],
) {
    run_passes(
        units,
        options,
        &UnicodeProperties::new(),
        runs,
        tailoring,
        attributes,
    );
}

fn run_passes<L>(
    units: &[u16],
    options: AttributeOptions,
    lookup: &L,
    runs: &[ScriptRun],
    tailoring: Option<&dyn Tailoring>,
    attributes: &mut [CharAttributes],
) where
    L: PropertyLookup + ?Sized,
{
    assert!(
        attributes.len() >= units.len(),
        "attribute buffer holds {} entries but the text has {} code units",
        attributes.len(),
        units.len()
    );
    if units.is_empty() {
        return;
    }

    let requested = options;
    let options = options.resolved();
    if options != requested {
        debug!("grapheme analysis forced on for word/sentence analysis");
    }

    let attributes = &mut attributes[..units.len()];
    if !options.contains(AttributeOptions::DONT_CLEAR_ATTRIBUTES) {
        attributes.fill(CharAttributes::default());
    }

    if options.needs_grapheme_line() {
        grapheme_line::analyze(units, lookup, attributes);
    }
    if options.contains(AttributeOptions::WORD_BREAKS) {
        word::analyze(units, lookup, attributes);
    }
    if options.contains(AttributeOptions::SENTENCE_BREAKS) {
        sentence::analyze(units, lookup, attributes);
    }
    if options.contains(AttributeOptions::WHITE_SPACES) {
        whitespace::analyze(units, attributes);
    }

    match tailoring {
        Some(hook) if !runs.is_empty() => {
            trace!("running tailoring over {} script runs", runs.len());
            hook.tailor(units, runs, attributes);
        }
        Some(_) => trace!("tailoring skipped: no script runs"),
        None => {}
    }
}

/// Reusable analysis setup
///
/// Holds the property lookup, an optional tailoring and the
/// "default algorithm only" switch, which skips the tailoring for every call
/// made through this analyzer.
#[derive(Clone)]
pub struct Analyzer {
    lookup: Arc<dyn PropertyLookup>,
    tailoring: Option<Arc<dyn Tailoring>>,
    default_algorithm_only: bool,
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("has_tailoring", &self.tailoring.is_some())
            .field("default_algorithm_only", &self.default_algorithm_only)
            .finish()
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Analyzer {
    /// Analyzer with the Unicode property data and no tailoring.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    pub fn has_tailoring(&self) -> bool {
        self.tailoring.is_some()
    }

    pub fn default_algorithm_only(&self) -> bool {
        self.default_algorithm_only
    }

    /// Fill `attributes` for `units`; see [`init_char_attributes`].
    pub fn init_char_attributes(
        &self,
        units: &[u16],
        options: AttributeOptions,
        runs: &[ScriptRun],
        attributes: &mut [CharAttributes],
    ) {
        let tailoring = if self.default_algorithm_only {
            None
        } else {
            self.tailoring.as_deref()
        };
        run_passes(
            units,
            options,
            self.lookup.as_ref(),
            runs,
            tailoring,
            attributes,
        );
    }

    /// Allocate and fill an attribute buffer, itemizing scripts when a
    /// tailoring will run.
    pub fn analyze(&self, units: &[u16], options: AttributeOptions) -> Vec<CharAttributes> {
        let runs = if self.tailoring.is_some() && !self.default_algorithm_only {
            script_runs(units)
        } else {
            Vec::new()
        };
        let mut attributes = CharAttributes::buffer(units.len());
        self.init_char_attributes(units, options, &runs, &mut attributes);
        attributes
    }

    /// [`Analyzer::analyze`] for UTF-8 text.
    pub fn analyze_str(&self, text: &str, options: AttributeOptions) -> Vec<CharAttributes> {
        let units: Vec<u16> = text.encode_utf16().collect();
        self.analyze(&units, options)
    }
}

/// Builder for [`Analyzer`]
pub struct AnalyzerBuilder {
    lookup: Arc<dyn PropertyLookup>,
    tailoring: Option<Arc<dyn Tailoring>>,
    default_algorithm_only: bool,
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            lookup: Arc::new(UnicodeProperties::new()),
            tailoring: None,
            default_algorithm_only: false,
        }
    }

    /// Replace the property lookup
    pub fn lookup(mut self, lookup: Arc<dyn PropertyLookup>) -> Self {
        self.lookup = lookup;
        self
    }

    /// Set the tailoring hook
    pub fn tailoring(mut self, tailoring: Arc<dyn Tailoring>) -> Self {
        self.tailoring = Some(tailoring);
        self
    }

    /// Skip the tailoring hook even when one is set
    pub fn default_algorithm_only(mut self, enabled: bool) -> Self {
        self.default_algorithm_only = enabled;
        self
    }

    pub fn build(self) -> Analyzer {
        Analyzer {
            lookup: self.lookup,
            tailoring: self.tailoring,
            default_algorithm_only: self.default_algorithm_only,
        }
    }
}
