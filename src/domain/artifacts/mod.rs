//! Generated sprint artifacts.
//!
//! Both generators are pure and total: they never fail and always emit a
//! complete structure, substituting explanatory placeholder text for any
//! missing input. The downstream documents are user-facing and must
//! always render something editable.

mod commitment_memo;
mod problem_brief;

pub use commitment_memo::{
    generate_commitment_memo, CommitmentMemo, FirstDomino, FirstDominoEdit, MemoEdit, MicroBet,
    MicroBetEdit, MAX_KEY_INSIGHTS,
};
pub use problem_brief::{generate_problem_brief, Complexity, ProblemBrief, Urgency};
