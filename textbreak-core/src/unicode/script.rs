//! Script itemization
//!
//! Tailorings receive the text as a list of [`ScriptRun`]s so that they can
//! restrict themselves to the scripts they understand.

use super::utf16::{scalars, Scalar};
use icu_properties::props::Script;
use icu_properties::CodePointMapData;
use std::ops::Range;

/// A maximal range of code units sharing one script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptRun {
    /// First code unit of the run
    pub start: usize,
    /// One past the last code unit of the run
    pub end: usize,
    /// Script of the run
    pub script: Script,
}

impl ScriptRun {
    pub fn new(start: usize, end: usize, script: Script) -> Self {
        Self { start, end, script }
    }

    /// A single run covering `len` code units.
    pub fn whole(len: usize, script: Script) -> Self {
        Self::new(0, len, script)
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }
}

/// Script of one scalar; lone surrogates are `Unknown`.
pub fn script_of(scalar: Scalar) -> Script {
    match scalar {
        Scalar::Char(ch) => CodePointMapData::<Script>::new().get(ch),
        Scalar::LoneSurrogate(_) => Script::Unknown,
    }
}

fn is_neutral(script: Script) -> bool {
    script == Script::Common || script == Script::Inherited
}

/// Split `units` into script runs.
///
/// Common and Inherited characters join the run they appear in; a text that
/// starts with them adopts the first real script that follows. A text made
/// only of neutral characters is a single Common run. The runs are contiguous
/// and cover every code unit.
pub fn script_runs(units: &[u16]) -> Vec<ScriptRun> {
    let mut runs: Vec<ScriptRun> = Vec::new();
    let mut current: Option<ScriptRun> = None;

    for (start, scalar, width) in scalars(units) {
        let script = script_of(scalar);
        let end = start + width;

        current = Some(match current {
            None => ScriptRun::new(start, end, script),
            Some(mut run) if is_neutral(script) || script == run.script => {
                run.end = end;
                run
            }
            Some(mut run) if is_neutral(run.script) => {
                // Leading neutral text takes the first real script
                run.end = end;
                run.script = script;
                run
            }
            Some(run) => {
                runs.push(run);
                ScriptRun::new(start, end, script)
            }
        });
    }

    if let Some(run) = current {
        runs.push(run);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16(text: &str) -> Vec<u16> {
        text.encode_utf16().collect()
    }

    #[test]
    fn test_empty_text_has_no_runs() {
        assert!(script_runs(&[]).is_empty());
    }

    #[test]
    fn test_single_script() {
        let units = utf16("Hello, world.");
        let runs = script_runs(&units);
        assert_eq!(runs, vec![ScriptRun::new(0, units.len(), Script::Latin)]);
    }

    #[test]
    fn test_mixed_scripts() {
        let units = utf16("abc 日本");
        let runs = script_runs(&units);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0], ScriptRun::new(0, 4, Script::Latin));
        assert_eq!(runs[1], ScriptRun::new(4, 6, Script::Han));
    }

    #[test]
    fn test_leading_neutral_adopts_script() {
        let units = utf16("  «Ελλάδα»");
        let runs = script_runs(&units);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].script, Script::Greek);
        assert_eq!(runs[0].len(), units.len());
    }

    #[test]
    fn test_all_neutral_is_common() {
        let units = utf16("123 !?");
        let runs = script_runs(&units);
        assert_eq!(runs, vec![ScriptRun::new(0, 6, Script::Common)]);
    }

    #[test]
    fn test_runs_cover_surrogate_pairs() {
        let units = utf16("a😀b");
        let runs = script_runs(&units);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].range(), 0..4);
    }

    #[test]
    fn test_run_helpers() {
        let run = ScriptRun::new(2, 5, Script::Latin);
        assert!(run.contains(2));
        assert!(run.contains(4));
        assert!(!run.contains(5));
        assert!(!run.is_empty());
        assert_eq!(ScriptRun::whole(3, Script::Han).range(), 0..3);
    }
}
