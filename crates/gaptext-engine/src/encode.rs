use crate::model::{ContentBlock, Document, DocumentKind};
use crate::parsing::classify::LineClassifier;

/// Joins block texts with the kind's separator: an arrow line between steps,
/// a blank line otherwise. No leading or trailing separator. Blocks with
/// whitespace-only text are skipped, so a fresh document joins to nothing
/// rather than a bare separator.
pub fn join_blocks(blocks: &[ContentBlock], kind: DocumentKind) -> String {
    let separator = if kind.uses_arrow_join() {
        format!("\n{}\n", LineClassifier::ARROW)
    } else {
        "\n\n".to_string()
    };
    blocks
        .iter()
        .map(|b| b.text.as_str())
        .filter(|t| !t.trim().is_empty())
        .collect::<Vec<_>>()
        .join(&separator)
}

/// Encodes a document into its single-field text representation.
///
/// Deterministic: the same document always yields byte-identical output, and
/// answers are emitted sorted ascending by question number regardless of
/// their stored order. Blank options are dropped. The result carries no
/// leading or trailing whitespace.
pub fn encode_document(doc: &Document) -> String {
    let mut out = String::new();

    if let Some(prefix) = doc.kind.heading_prefix()
        && let Some(heading) = doc.heading.as_deref().filter(|h| !h.is_empty())
    {
        out.push_str(prefix);
        out.push(' ');
        out.push_str(heading);
        out.push_str("\n\n");
    }

    out.push_str(&join_blocks(&doc.blocks, doc.kind));

    let options: Vec<&str> = doc
        .options
        .iter()
        .map(|o| o.trim())
        .filter(|o| !o.is_empty())
        .collect();
    if !options.is_empty() {
        out.push_str("\n\n");
        out.push_str(LineClassifier::OPTIONS_HEADER);
        for option in options {
            out.push('\n');
            out.push_str(option);
        }
    }

    if !doc.answers.is_empty() {
        let mut answers = doc.answers.clone();
        answers.sort_by_key(|a| a.question_number);

        out.push_str("\n\n");
        out.push_str(LineClassifier::ANSWERS_HEADER);
        for answer in &answers {
            out.push('\n');
            out.push_str(&format!(
                "{} {} {}",
                answer.question_number,
                LineClassifier::ANSWER_ARROW,
                answer.correct_answer
            ));
        }
    }

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Document, DocumentKind, Principle};
    use pretty_assertions::assert_eq;

    fn doc(kind: DocumentKind, blocks: &[&str]) -> Document {
        let mut doc = Document::new(kind, Principle::OneWord);
        doc.blocks.clear();
        for text in blocks {
            doc.add_block(*text);
        }
        doc
    }

    #[test]
    fn steps_join_with_arrow_lines() {
        let d = doc(DocumentKind::Steps, &["boil water", "add leaves"]);
        assert_eq!(encode_document(&d), "boil water\n⬇️\nadd leaves");
    }

    #[test]
    fn labels_join_with_blank_lines() {
        let d = doc(DocumentKind::Labels, &["the (1) hub", "the (2) blade"]);
        assert_eq!(encode_document(&d), "the (1) hub\n\nthe (2) blade");
    }

    #[test]
    fn heading_is_prefixed_for_the_kind() {
        let mut d = doc(DocumentKind::Steps, &["boil water"]);
        d.heading = Some("Tea making".to_string());
        assert_eq!(encode_document(&d), "Flow Chart: Tea making\n\nboil water");
    }

    #[test]
    fn heading_is_ignored_for_kinds_without_a_prefix() {
        let mut d = doc(DocumentKind::Sentences, &["a sentence"]);
        d.heading = Some("ignored".to_string());
        assert_eq!(encode_document(&d), "a sentence");
    }

    #[test]
    fn blank_options_are_dropped() {
        let mut d = doc(DocumentKind::Labels, &["the (1) hub"]);
        d.options = vec!["sun".into(), "   ".into(), "moon".into()];
        assert_eq!(
            encode_document(&d),
            "the (1) hub\n\nOptions:\nsun\nmoon"
        );
    }

    #[test]
    fn answers_are_emitted_sorted_ascending() {
        let mut d = doc(DocumentKind::Labels, &["(1) and (2)"]);
        d.set_answer(2, "moon");
        d.set_answer(1, "sun");
        assert_eq!(
            encode_document(&d),
            "(1) and (2)\n\n✅ Correct Answers:\n1 → sun\n2 → moon"
        );
    }

    #[test]
    fn encoding_twice_is_byte_identical() {
        let mut d = doc(DocumentKind::Steps, &["step (1)", "step (2)"]);
        d.heading = Some("Cycle".to_string());
        d.options = vec!["sun".into()];
        d.set_answer(2, "b");
        d.set_answer(1, "a");
        assert_eq!(encode_document(&d), encode_document(&d));
    }

    #[test]
    fn fresh_document_encodes_to_an_empty_body() {
        let d = Document::new(DocumentKind::Steps, Principle::OneWord);
        assert_eq!(encode_document(&d), "");
    }
}
