use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

use crate::model::Document;

fn marker_regex() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    // Digits only inside the parens: `(12a)` is not a marker.
    MARKER.get_or_init(|| Regex::new(r"\((\d+)\)").expect("invalid marker regex"))
}

/// Returns the gap number of every marker in `text`, left to right.
///
/// Duplicates are preserved; counting repeated references is the caller's
/// business. Numbers too large for `u32` are skipped like any other
/// non-marker text.
pub fn scan_markers(text: &str) -> Vec<u32> {
    marker_regex()
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse().ok())
        .collect()
}

/// Every distinct gap number across all of the document's blocks, ascending.
///
/// A number referenced from several blocks counts once.
pub fn unique_question_numbers(doc: &Document) -> Vec<u32> {
    let mut numbers = BTreeSet::new();
    for block in &doc.blocks {
        numbers.extend(scan_markers(&block.text));
    }
    numbers.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Document, DocumentKind, Principle};
    use rstest::rstest;

    #[rstest]
    #[case("The (1) blades attach to the (2) hub", &[1, 2])]
    #[case("no gaps here", &[])]
    #[case("(12)(3)", &[12, 3])]
    #[case("a (12a) is not a marker", &[])]
    #[case("( 5 ) has padding, (5) does not", &[5])]
    #[case("(7) appears (7) twice", &[7, 7])]
    #[case("", &[])]
    fn scans_markers_left_to_right(#[case] text: &str, #[case] expected: &[u32]) {
        assert_eq!(scan_markers(text), expected);
    }

    #[test]
    fn unique_numbers_deduplicate_across_blocks() {
        let mut doc = Document::new(DocumentKind::Labels, Principle::OneWord);
        doc.blocks.clear();
        doc.add_block("(1) a");
        doc.add_block("(1) b");
        doc.add_block("(2) c");

        assert_eq!(unique_question_numbers(&doc), vec![1, 2]);
    }

    #[test]
    fn unique_numbers_sort_ascending_regardless_of_block_order() {
        let mut doc = Document::new(DocumentKind::Labels, Principle::OneWord);
        doc.blocks.clear();
        doc.add_block("last gap (10)");
        doc.add_block("first gap (2)");

        assert_eq!(unique_question_numbers(&doc), vec![2, 10]);
    }
}
