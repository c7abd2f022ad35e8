use serde::{Deserialize, Serialize};

/// A `(question number, correct answer)` pair keyed by the gap number.
///
/// An entry whose number matches no marker in any block is an orphan; the
/// codec keeps orphans and only [`crate::audit`] reports them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerEntry {
    pub question_number: u32,
    pub correct_answer: String,
}

impl AnswerEntry {
    pub fn new(question_number: u32, correct_answer: impl Into<String>) -> Self {
        Self {
            question_number,
            correct_answer: correct_answer.into(),
        }
    }
}

/// Upserts `entry` into `answers` by question number.
///
/// An existing entry keeps its position and gets the new answer text; a new
/// number appends. List order stays insertion order, numeric sorting is a
/// presentation concern.
pub fn merge_answer(answers: &mut Vec<AnswerEntry>, entry: AnswerEntry) {
    match answers
        .iter_mut()
        .find(|a| a.question_number == entry.question_number)
    {
        Some(existing) => existing.correct_answer = entry.correct_answer,
        None => answers.push(entry),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn merge_replaces_existing_number_in_place() {
        let mut answers = vec![AnswerEntry::new(1, "sun")];
        merge_answer(&mut answers, AnswerEntry::new(1, "moon"));
        assert_eq!(answers, vec![AnswerEntry::new(1, "moon")]);
    }

    #[test]
    fn merge_appends_new_number() {
        let mut answers = vec![AnswerEntry::new(1, "sun")];
        merge_answer(&mut answers, AnswerEntry::new(2, "mars"));
        assert_eq!(
            answers,
            vec![AnswerEntry::new(1, "sun"), AnswerEntry::new(2, "mars")]
        );
    }

    #[test]
    fn merge_preserves_insertion_order_not_numeric_order() {
        let mut answers = vec![AnswerEntry::new(5, "e"), AnswerEntry::new(2, "b")];
        merge_answer(&mut answers, AnswerEntry::new(4, "d"));
        merge_answer(&mut answers, AnswerEntry::new(5, "E"));
        assert_eq!(
            answers,
            vec![
                AnswerEntry::new(5, "E"),
                AnswerEntry::new(2, "b"),
                AnswerEntry::new(4, "d"),
            ]
        );
    }
}
