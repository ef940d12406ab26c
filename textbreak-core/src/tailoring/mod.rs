//! Script-aware refinement of the default results
//!
//! A [`Tailoring`] runs once, after every built-in pass, and may rewrite any
//! attribute. [`RuleTailoring`] is the configurable implementation; the
//! embedded ones are available through [`get_tailoring`].

pub mod abbreviation;
pub mod config;
pub mod loader;
pub mod rules;

use crate::types::CharAttributes;
use crate::unicode::ScriptRun;

pub use abbreviation::AbbreviationTrie;
pub use config::TailoringConfig;
pub use loader::{get_tailoring, list_available_tailorings};
pub use rules::RuleTailoring;

/// Hook invoked last by the orchestrator
pub trait Tailoring: Send + Sync {
    /// Refine `attributes` for `units`, which are split into `runs`.
    ///
    /// `attributes` has exactly `units.len()` entries.
    fn tailor(&self, units: &[u16], runs: &[ScriptRun], attributes: &mut [CharAttributes]);
}

impl<F> Tailoring for F
where
    F: Fn(&[u16], &[ScriptRun], &mut [CharAttributes]) + Send + Sync,
{
    fn tailor(&self, units: &[u16], runs: &[ScriptRun], attributes: &mut [CharAttributes]) {
        self(units, runs, attributes)
    }
}
