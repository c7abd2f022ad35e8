use super::answers::parse_answer_line;

/// Section headers recognized in an encoded body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionHeader {
    Options,
    Answers,
}

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of decoding: each line is classified independently,
/// without reference to the section the fold is currently in. Whether an
/// answer-shaped line actually becomes an answer is the builder's call.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Line content with surrounding whitespace trimmed.
    pub text: String,
    /// Whitespace-only line.
    pub is_blank: bool,
    /// Exactly a step-separator arrow.
    pub is_arrow: bool,
    /// A section header line.
    pub header: Option<SectionHeader>,
    /// The `N → value` / `N: value` answer shape, if the line has it.
    pub answer: Option<(u32, String)>,
}

/// Classifies individual lines of an encoded question body.
pub struct LineClassifier;

impl LineClassifier {
    /// Step separator emitted between consecutive step blocks.
    pub const ARROW: &'static str = "⬇️";
    /// Plain-arrow variant accepted on decode.
    pub const ARROW_PLAIN: &'static str = "↓";
    /// Options header as emitted.
    pub const OPTIONS_HEADER: &'static str = "Options:";
    /// Bare options word accepted case-insensitively on decode.
    pub const OPTIONS_BARE: &'static str = "options";
    /// Answers header as emitted, glyph included.
    pub const ANSWERS_HEADER: &'static str = "✅ Correct Answers:";
    /// Glyph-prefixed answers header matched by prefix on decode.
    pub const ANSWERS_PREFIX: &'static str = "✅ Correct Answers";
    /// Glyph-less answers header accepted on decode.
    pub const ANSWERS_HEADER_BARE: &'static str = "Correct Answers:";
    /// Separator emitted inside answer lines.
    pub const ANSWER_ARROW: &'static str = "→";
    /// Lines starting with this inside the options region are skipped.
    pub const CHECK_GLYPH: &'static str = "✅";

    pub fn classify(&self, line: &str) -> LineClass {
        let text = line.trim();
        LineClass {
            is_blank: text.is_empty(),
            is_arrow: text == Self::ARROW || text == Self::ARROW_PLAIN,
            header: Self::header(text),
            answer: parse_answer_line(text),
            text: text.to_string(),
        }
    }

    fn header(text: &str) -> Option<SectionHeader> {
        if text == Self::OPTIONS_HEADER || text.eq_ignore_ascii_case(Self::OPTIONS_BARE) {
            Some(SectionHeader::Options)
        } else if text.starts_with(Self::ANSWERS_PREFIX) || text == Self::ANSWERS_HEADER_BARE {
            Some(SectionHeader::Answers)
        } else {
            None
        }
    }
}
