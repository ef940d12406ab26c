//! Constant dispatch tables
//!
//! Every table is indexed by `#[repr(u8)]` class discriminants; see
//! [`crate::unicode::classes`] for the ordering.

use crate::unicode::classes::{GraphemeClass, LineBreakClass, SentenceClass, WordClass};

/// Outcome of a line-break pair lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakTier {
    /// `^`: never break between the pair
    ProhibitedBreak,
    /// `_`: break between the pair
    DirectBreak,
    /// `%`: break only when spaces separate the pair
    IndirectBreak,
    /// `#`: combining mark; breaks only after spaces
    CombiningIndirectBreak,
    /// `@`: combining mark that never breaks
    CombiningProhibitedBreak,
}

use BreakTier::{
    CombiningIndirectBreak as CI, CombiningProhibitedBreak as CP, DirectBreak as DB,
    IndirectBreak as IB, ProhibitedBreak as PB,
};

const LB: usize = LineBreakClass::TABLE_SIZE;

/// UAX #14 pair table, rows are the class before, columns the class after.
///
/// Differs from the reference table in a handful of cells so that URLs,
/// currency amounts and similar runs stay together: EX/SY/AL/PR/PO/HY before
/// AL, OP, PR or PO are indirect instead of direct, and NU before EX is
/// indirect instead of prohibited.
#[rustfmt::skip]
pub const LINE_BREAK_TABLE: [[BreakTier; LB]; LB] = [
    //        OP  CL  QU  GL  NS  EX  SY  IS  PR  PO  NU  AL  ID  IN  HY  BA  BB  B2  ZW  CM  WJ  H2  H3  JL  JV  JT
    /* OP */ [PB, PB, PB, PB, PB, PB, PB, PB, PB, PB, PB, PB, PB, PB, PB, PB, PB, PB, PB, CP, PB, PB, PB, PB, PB, PB],
    /* CL */ [DB, PB, IB, IB, PB, PB, PB, PB, IB, IB, DB, DB, DB, DB, IB, IB, DB, DB, PB, CI, PB, DB, DB, DB, DB, DB],
    /* QU */ [PB, PB, IB, IB, IB, PB, PB, PB, IB, IB, IB, IB, IB, IB, IB, IB, IB, IB, PB, CI, PB, IB, IB, IB, IB, IB],
    /* GL */ [IB, PB, IB, IB, IB, PB, PB, PB, IB, IB, IB, IB, IB, IB, IB, IB, IB, IB, PB, CI, PB, IB, IB, IB, IB, IB],
    /* NS */ [DB, PB, IB, IB, IB, PB, PB, PB, DB, DB, DB, DB, DB, DB, IB, IB, DB, DB, PB, CI, PB, DB, DB, DB, DB, DB],
    /* EX */ [DB, PB, IB, IB, IB, PB, PB, PB, DB, IB, DB, IB, DB, DB, IB, IB, DB, DB, PB, CI, PB, DB, DB, DB, DB, DB],
    /* SY */ [IB, PB, IB, IB, IB, PB, PB, PB, IB, IB, IB, IB, DB, DB, IB, IB, DB, DB, PB, CI, PB, DB, DB, DB, DB, DB],
    /* IS */ [DB, PB, IB, IB, IB, PB, PB, PB, DB, DB, IB, IB, DB, DB, IB, IB, DB, DB, PB, CI, PB, DB, DB, DB, DB, DB],
    /* PR */ [IB, PB, IB, IB, IB, PB, PB, PB, IB, IB, IB, IB, IB, DB, IB, IB, DB, DB, PB, CI, PB, IB, IB, IB, IB, IB],
    /* PO */ [IB, PB, IB, IB, IB, PB, PB, PB, IB, IB, IB, IB, DB, DB, IB, IB, DB, DB, PB, CI, PB, DB, DB, DB, DB, DB],
    /* NU */ [DB, PB, IB, IB, IB, IB, PB, PB, IB, IB, IB, IB, DB, IB, IB, IB, DB, DB, PB, CI, PB, DB, DB, DB, DB, DB],
    /* AL */ [DB, PB, IB, IB, IB, PB, PB, PB, IB, IB, IB, IB, DB, IB, IB, IB, DB, DB, PB, CI, PB, DB, DB, DB, DB, DB],
    /* ID */ [DB, PB, IB, IB, IB, PB, PB, PB, DB, IB, DB, DB, DB, IB, IB, IB, DB, DB, PB, CI, PB, DB, DB, DB, DB, DB],
    /* IN */ [DB, PB, IB, IB, IB, PB, PB, PB, DB, DB, DB, DB, DB, IB, IB, IB, DB, DB, PB, CI, PB, DB, DB, DB, DB, DB],
    /* HY */ [IB, PB, IB, IB, IB, PB, PB, PB, IB, IB, IB, DB, DB, DB, IB, IB, DB, DB, PB, CI, PB, DB, DB, DB, DB, DB],
    /* BA */ [DB, PB, IB, IB, IB, PB, PB, PB, DB, DB, DB, DB, DB, DB, IB, IB, DB, DB, PB, CI, PB, DB, DB, DB, DB, DB],
    /* BB */ [IB, PB, IB, IB, IB, PB, PB, PB, IB, IB, IB, IB, IB, IB, IB, IB, IB, IB, PB, CI, PB, IB, IB, IB, IB, IB],
    /* B2 */ [DB, PB, IB, IB, IB, PB, PB, PB, DB, DB, DB, DB, DB, DB, IB, IB, DB, PB, PB, CI, PB, DB, DB, DB, DB, DB],
    /* ZW */ [DB, DB, DB, DB, DB, DB, DB, DB, DB, DB, DB, DB, DB, DB, DB, DB, DB, DB, PB, DB, DB, DB, DB, DB, DB, DB],
    /* CM */ [DB, PB, IB, IB, IB, PB, PB, PB, DB, DB, IB, IB, DB, IB, IB, IB, DB, DB, PB, CI, PB, DB, DB, DB, DB, DB],
    /* WJ */ [IB, PB, IB, IB, IB, PB, PB, PB, IB, IB, IB, IB, IB, IB, IB, IB, IB, IB, PB, CI, PB, IB, IB, IB, IB, IB],
    /* H2 */ [DB, PB, IB, IB, IB, PB, PB, PB, DB, IB, DB, DB, DB, IB, IB, IB, DB, DB, PB, CI, PB, DB, DB, DB, IB, IB],
    /* H3 */ [DB, PB, IB, IB, IB, PB, PB, PB, DB, IB, DB, DB, DB, IB, IB, IB, DB, DB, PB, CI, PB, DB, DB, DB, DB, IB],
    /* JL */ [DB, PB, IB, IB, IB, PB, PB, PB, DB, IB, DB, DB, DB, IB, IB, IB, DB, DB, PB, CI, PB, IB, IB, IB, IB, DB],
    /* JV */ [DB, PB, IB, IB, IB, PB, PB, PB, DB, IB, DB, DB, DB, IB, IB, IB, DB, DB, PB, CI, PB, DB, DB, DB, IB, IB],
    /* JT */ [DB, PB, IB, IB, IB, PB, PB, PB, DB, IB, DB, DB, DB, IB, IB, IB, DB, DB, PB, CI, PB, DB, DB, DB, DB, IB],
];

/// Tier for the pair `(before, after)`; both must be table classes.
#[inline]
pub fn line_break_tier(before: LineBreakClass, after: LineBreakClass) -> BreakTier {
    LINE_BREAK_TABLE[before as usize][after as usize]
}

const GB: usize = GraphemeClass::COUNT;

/// Grapheme boundary table, indexed `[current][previous]`.
///
/// `true` means a cluster starts at the current character.
#[rustfmt::skip]
pub const GRAPHEME_TABLE: [[bool; GB]; GB] = [
    //            Other  CR     LF     Contr  Exten  L      V      T      LV     LVT
    /* Other   */ [true,  true,  true,  true,  true,  true,  true,  true,  true,  true],
    /* CR      */ [true,  true,  true,  true,  true,  true,  true,  true,  true,  true],
    /* LF      */ [true,  false, true,  true,  true,  true,  true,  true,  true,  true],
    /* Control */ [true,  true,  true,  true,  true,  true,  true,  true,  true,  true],
    /* Extend  */ [false, true,  true,  true,  false, false, false, false, false, false],
    /* L       */ [true,  true,  true,  true,  true,  false, true,  true,  true,  true],
    /* V       */ [true,  true,  true,  true,  true,  false, false, true,  false, true],
    /* T       */ [true,  true,  true,  true,  true,  true,  false, false, false, false],
    /* LV      */ [true,  true,  true,  true,  true,  false, true,  true,  true,  true],
    /* LVT     */ [true,  true,  true,  true,  true,  false, true,  true,  true,  true],
];

/// Whether a grapheme cluster starts between `previous` and `current`.
#[inline]
pub fn is_grapheme_boundary(previous: GraphemeClass, current: GraphemeClass) -> bool {
    GRAPHEME_TABLE[current as usize][previous as usize]
}

/// Outcome of a word pair lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordRule {
    NoBreak,
    Break,
    /// Depends on what follows the middle character
    Middle,
}

const WB: usize = WordClass::COUNT;

/// Word boundary table, indexed `[previous][next]`.
#[rustfmt::skip]
pub const WORD_BREAK_TABLE: [[WordRule; WB]; WB] = {
    use WordRule::{Break as B, Middle as M, NoBreak as N};
    [
        //                  Other Format Kata ALet MidL MidN Num  ENL
        /* Other        */ [B,    B,     B,   B,   B,   B,   B,   B],
        /* Format       */ [B,    B,     B,   B,   B,   B,   B,   B],
        /* Katakana     */ [B,    B,     N,   B,   B,   B,   B,   N],
        /* ALetter      */ [B,    B,     B,   N,   M,   B,   N,   N],
        /* MidLetter    */ [B,    B,     B,   B,   B,   B,   B,   B],
        /* MidNum       */ [B,    B,     B,   B,   B,   B,   B,   B],
        /* Numeric      */ [B,    B,     B,   N,   B,   M,   N,   N],
        /* ExtendNumLet */ [B,    B,     N,   N,   B,   B,   N,   N],
    ]
};

#[inline]
pub fn word_rule(previous: WordClass, next: WordClass) -> WordRule {
    WORD_BREAK_TABLE[previous as usize][next as usize]
}

/// Sentence state machine states
///
/// The first ten are table rows; [`SentenceState::Break`] and
/// [`SentenceState::Lookup`] only appear as transition results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SentenceState {
    Initial,
    Upper,
    UpATerm,
    ATerm,
    ATermC,
    ACS,
    STerm,
    STermC,
    SCS,
    BAfter,
    Break,
    Lookup,
}

impl SentenceState {
    pub const ROWS: usize = SentenceState::BAfter as usize + 1;
}

const SB: usize = SentenceClass::COUNT;

/// Sentence transition table, indexed `[state][class]`.
#[rustfmt::skip]
pub const SENTENCE_BREAK_TABLE: [[SentenceState; SB]; SentenceState::ROWS] = {
    use SentenceState::{
        ACS, ATerm, ATermC, BAfter, Break as Brk, Initial as Ini, Lookup as Lk, SCS, STerm,
        STermC, UpATerm, Upper,
    };
    [
        //             Other  Sep     Format   Sp    Lower  Upper  OLetter Numeric ATerm    STerm  Close
        /* Initial */ [Ini,   BAfter, Ini,     Ini,  Ini,   Upper, Ini,    Ini,    ATerm,   STerm, Ini],
        /* Upper   */ [Ini,   BAfter, Upper,   Ini,  Ini,   Upper, Ini,    Ini,    UpATerm, STerm, Ini],
        /* UpATerm */ [Lk,    BAfter, UpATerm, ACS,  Ini,   Upper, Brk,    Ini,    ATerm,   STerm, ATermC],
        /* ATerm   */ [Lk,    BAfter, ATerm,   ACS,  Ini,   Brk,   Brk,    Ini,    ATerm,   STerm, ATermC],
        /* ATermC  */ [Lk,    BAfter, ATermC,  ACS,  Ini,   Brk,   Brk,    Lk,     ATerm,   STerm, ATermC],
        /* ACS     */ [Lk,    BAfter, ACS,     ACS,  Ini,   Brk,   Brk,    Lk,     ATerm,   STerm, Lk],
        /* STerm   */ [Brk,   BAfter, STerm,   SCS,  Brk,   Brk,   Brk,    Brk,    ATerm,   STerm, STermC],
        /* STermC  */ [Brk,   BAfter, STermC,  SCS,  Brk,   Brk,   Brk,    Brk,    ATerm,   STerm, STermC],
        /* SCS     */ [Brk,   BAfter, SCS,     SCS,  Brk,   Brk,   Brk,    Brk,    ATerm,   STerm, Brk],
        /* BAfter  */ [Brk,   Brk,    Brk,     Brk,  Brk,   Brk,   Brk,    Brk,    Brk,     Brk,   Brk],
    ]
};

/// Next state from a table row.
///
/// `state` must be a row state; `Break` and `Lookup` are resolved by the
/// engine before the next transition.
#[inline]
pub fn sentence_transition(state: SentenceState, class: SentenceClass) -> SentenceState {
    debug_assert!((state as usize) < SentenceState::ROWS);
    SENTENCE_BREAK_TABLE[state as usize][class as usize]
}
