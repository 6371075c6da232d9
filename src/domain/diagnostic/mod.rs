//! Diagnostic interview data.
//!
//! Free-form key/value answers collected during the interview, plus the
//! typed registry of the fixed interview questions. The store itself
//! performs no validation; that is the interview surface's job.

mod answer;
mod registry;

pub use answer::{AnswerValue, DiagnosticResponses};
pub use registry::{keys, question, questions, AnswerKind, Question};
