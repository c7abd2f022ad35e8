use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{AnswerEntry, BlockId, ContentBlock, Principle, merge_answer};

/// The authoring variant a document belongs to.
///
/// The kind decides how blocks are joined on encode (arrow line vs blank
/// line), which heading prefix the body may carry, and the fallback
/// instruction used when none was authored. It is always supplied by the
/// caller and never inferred from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Ordered flow-chart steps, joined by an arrow line.
    Steps,
    /// Diagram labels, joined by blank lines.
    Labels,
    /// Stand-alone sentences, joined by blank lines.
    Sentences,
    /// Summary paragraphs, joined by blank lines.
    Paragraphs,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::Steps,
        DocumentKind::Labels,
        DocumentKind::Sentences,
        DocumentKind::Paragraphs,
    ];

    /// Steps imply ordered progression and join with an arrow line; every
    /// other kind joins with a blank line.
    pub fn uses_arrow_join(&self) -> bool {
        matches!(self, DocumentKind::Steps)
    }

    /// Prefix of the optional in-body heading line, colon included.
    pub fn heading_prefix(&self) -> Option<&'static str> {
        match self {
            DocumentKind::Steps => Some("Flow Chart:"),
            DocumentKind::Labels => Some("Diagram:"),
            DocumentKind::Sentences | DocumentKind::Paragraphs => None,
        }
    }

    /// Instruction used on the outbound payload when none was authored.
    pub fn default_instruction(&self) -> &'static str {
        match self {
            DocumentKind::Steps => "Complete the flow chart below.",
            DocumentKind::Labels => "Label the diagram below.",
            DocumentKind::Sentences => "Complete the sentences below.",
            DocumentKind::Paragraphs => "Complete the summary below.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Steps => "steps",
            DocumentKind::Labels => "labels",
            DocumentKind::Sentences => "sentences",
            DocumentKind::Paragraphs => "paragraphs",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown document kind: {0} (expected steps, labels, sentences or paragraphs)")]
pub struct ParseDocumentKindError(String);

impl FromStr for DocumentKind {
    type Err = ParseDocumentKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ParseDocumentKindError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RemoveBlockError {
    #[error("no block with the given id")]
    NotFound,
    #[error("a document keeps at least one block")]
    LastBlock,
}

/// The full authoring state of one question.
///
/// Owned exclusively by the editing session; the encoded text form is a
/// transient projection and is recomputed from this, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub kind: DocumentKind,
    pub principle: Principle,
    /// Payload-level title, transported outside the body.
    pub instruction: Option<String>,
    /// In-body heading, e.g. the flow-chart or diagram title.
    pub heading: Option<String>,
    pub blocks: Vec<ContentBlock>,
    pub options: Vec<String>,
    pub answers: Vec<AnswerEntry>,
    /// Auxiliary image reference carried through the payload untouched.
    pub image: Option<String>,
}

impl Document {
    /// A fresh document as the editor presents it: two empty blocks, nothing
    /// else.
    pub fn new(kind: DocumentKind, principle: Principle) -> Self {
        Self {
            kind,
            principle,
            instruction: None,
            heading: None,
            blocks: vec![ContentBlock::empty(), ContentBlock::empty()],
            options: Vec::new(),
            answers: Vec::new(),
            image: None,
        }
    }

    pub fn add_block(&mut self, text: impl Into<String>) -> BlockId {
        let block = ContentBlock::new(text);
        let id = block.id;
        self.blocks.push(block);
        id
    }

    /// Removes a block. Refused for the last remaining block.
    pub fn remove_block(&mut self, id: BlockId) -> Result<(), RemoveBlockError> {
        let index = self
            .blocks
            .iter()
            .position(|b| b.id == id)
            .ok_or(RemoveBlockError::NotFound)?;
        if self.blocks.len() == 1 {
            return Err(RemoveBlockError::LastBlock);
        }
        self.blocks.remove(index);
        Ok(())
    }

    /// Replaces a block's text, keeping its id. Returns false for unknown ids.
    pub fn set_block_text(&mut self, id: BlockId, text: impl Into<String>) -> bool {
        match self.blocks.iter_mut().find(|b| b.id == id) {
            Some(block) => {
                block.text = text.into();
                true
            }
            None => false,
        }
    }

    /// Sets the answer for gap `question_number`, upserting by number.
    pub fn set_answer(&mut self, question_number: u32, correct_answer: impl Into<String>) {
        merge_answer(
            &mut self.answers,
            AnswerEntry::new(question_number, correct_answer),
        );
    }

    pub fn answer_for(&self, question_number: u32) -> Option<&str> {
        self.answers
            .iter()
            .find(|a| a.question_number == question_number)
            .map(|a| a.correct_answer.as_str())
    }

    /// Every distinct gap number visible across all blocks, ascending.
    pub fn question_numbers(&self) -> Vec<u32> {
        crate::scan::unique_question_numbers(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_document_has_two_empty_blocks() {
        let doc = Document::new(DocumentKind::Steps, Principle::OneWord);
        assert_eq!(doc.blocks.len(), 2);
        assert!(doc.blocks.iter().all(|b| b.text.is_empty()));
        assert!(doc.options.is_empty());
        assert!(doc.answers.is_empty());
    }

    #[test]
    fn remove_block_refuses_to_drop_the_last_one() {
        let mut doc = Document::new(DocumentKind::Labels, Principle::NmtTwo);
        let first = doc.blocks[0].id;
        let second = doc.blocks[1].id;

        assert_eq!(doc.remove_block(first), Ok(()));
        assert_eq!(doc.remove_block(second), Err(RemoveBlockError::LastBlock));
        assert_eq!(doc.blocks.len(), 1);
    }

    #[test]
    fn remove_block_reports_unknown_ids() {
        let mut doc = Document::new(DocumentKind::Labels, Principle::NmtTwo);
        assert_eq!(
            doc.remove_block(BlockId::new()),
            Err(RemoveBlockError::NotFound)
        );
    }

    #[test]
    fn set_answer_upserts_by_number() {
        let mut doc = Document::new(DocumentKind::Steps, Principle::OneWord);
        doc.set_answer(1, "sun");
        doc.set_answer(2, "mars");
        doc.set_answer(1, "moon");

        assert_eq!(doc.answers.len(), 2);
        assert_eq!(doc.answer_for(1), Some("moon"));
        assert_eq!(doc.answer_for(2), Some("mars"));
        assert_eq!(doc.answer_for(3), None);
    }

    #[test]
    fn kind_strings_round_trip() {
        for kind in DocumentKind::ALL {
            assert_eq!(kind.as_str().parse::<DocumentKind>().unwrap(), kind);
        }
        assert!("flowchart".parse::<DocumentKind>().is_err());
    }
}
