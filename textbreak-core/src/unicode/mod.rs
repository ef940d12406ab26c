//! Unicode plumbing: classification enums, property lookup, UTF-16 decoding
//! and script itemization.

pub mod classes;
pub mod properties;
pub mod script;
pub mod utf16;

pub use classes::{CharProperties, GraphemeClass, LineBreakClass, SentenceClass, WordClass};
pub use properties::{PropertyLookup, UnicodeProperties};
pub use script::{script_runs, ScriptRun};
pub use utf16::{decode_at, decode_before, Scalar};
