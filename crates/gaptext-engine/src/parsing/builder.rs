use crate::model::{AnswerEntry, ContentBlock, DocumentKind, merge_answer};

use super::classify::{LineClass, LineClassifier, SectionHeader};

/// Region the fold is currently routing lines into. Transitions are
/// forward-only; no backtracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Content,
    Options,
    Answers,
}

/// Everything one encoded body decodes into.
#[derive(Debug, Default)]
pub struct DecodedParts {
    pub heading: Option<String>,
    pub blocks: Vec<ContentBlock>,
    pub options: Vec<String>,
    pub answers: Vec<AnswerEntry>,
}

/// Phase 2 of decoding: folds classified lines into document parts.
///
/// Content lines accumulate into the current block, joined by single spaces;
/// a blank line, an arrow line, or a section header flushes the block. Runs
/// of blank lines are one boundary, and an empty accumulator never flushes,
/// so the fold cannot emit empty blocks.
pub struct DocumentBuilder {
    kind: DocumentKind,
    section: Section,
    current: String,
    heading: Option<String>,
    blocks: Vec<ContentBlock>,
    options: Vec<String>,
    answers: Vec<AnswerEntry>,
}

impl DocumentBuilder {
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            kind,
            section: Section::Content,
            current: String::new(),
            heading: None,
            blocks: Vec::new(),
            options: Vec::new(),
            answers: Vec::new(),
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if let Some(header) = c.header {
            self.flush_block();
            self.section = match header {
                SectionHeader::Options => Section::Options,
                SectionHeader::Answers => Section::Answers,
            };
            return;
        }

        match self.section {
            Section::Content => self.push_content(c),
            Section::Options => self.push_option(c),
            Section::Answers => self.push_answer(c),
        }
    }

    pub fn finish(mut self) -> DecodedParts {
        // EOF flush
        self.flush_block();
        DecodedParts {
            heading: self.heading,
            blocks: self.blocks,
            options: self.options,
            answers: self.answers,
        }
    }

    fn push_content(&mut self, c: &LineClass) {
        if c.is_blank || c.is_arrow {
            self.flush_block();
            return;
        }

        if self.heading.is_none()
            && let Some(prefix) = self.kind.heading_prefix()
            && let Some(rest) = c.text.strip_prefix(prefix)
        {
            self.heading = Some(rest.trim().to_string());
            return;
        }

        // Runs of whitespace inside a line collapse along with the line
        // joins, so a block normalizes to single-spaced text.
        for word in c.text.split_whitespace() {
            if !self.current.is_empty() {
                self.current.push(' ');
            }
            self.current.push_str(word);
        }
    }

    fn push_option(&mut self, c: &LineClass) {
        if c.is_blank || c.text.starts_with(LineClassifier::CHECK_GLYPH) {
            return;
        }
        self.options.push(c.text.clone());
    }

    fn push_answer(&mut self, c: &LineClass) {
        if let Some((number, text)) = &c.answer {
            merge_answer(&mut self.answers, AnswerEntry::new(*number, text.clone()));
        }
    }

    fn flush_block(&mut self) {
        let text = std::mem::take(&mut self.current);
        if !text.is_empty() {
            self.blocks.push(ContentBlock::new(text));
        }
    }
}
