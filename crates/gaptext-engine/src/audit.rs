use std::fmt;

use crate::model::Document;
use crate::scan;

/// A consistency finding from the strict decode path.
///
/// Anomalies are diagnostics, not errors: the lenient codec keeps the
/// offending data and round-trips it unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anomaly {
    /// A gap marker with no answer entry for its number.
    UnansweredGap { number: u32 },
    /// An answer entry whose number matches no marker in any block.
    OrphanAnswer { number: u32 },
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::UnansweredGap { number } => {
                write!(f, "gap ({number}) has no recorded answer")
            }
            Anomaly::OrphanAnswer { number } => {
                write!(f, "answer for ({number}) matches no gap marker")
            }
        }
    }
}

/// Cross-checks gap markers against answer entries.
///
/// Unanswered gaps come first, ascending; orphan answers follow in their
/// stored order.
pub fn check(doc: &Document) -> Vec<Anomaly> {
    let numbers = scan::unique_question_numbers(doc);
    let mut anomalies = Vec::new();

    for &number in &numbers {
        if doc.answer_for(number).is_none() {
            anomalies.push(Anomaly::UnansweredGap { number });
        }
    }
    for answer in &doc.answers {
        if !numbers.contains(&answer.question_number) {
            anomalies.push(Anomaly::OrphanAnswer {
                number: answer.question_number,
            });
        }
    }

    anomalies
}
