//! Decoding of encoded question bodies.
//!
//! Decoding is two-phase: [`classify`] reduces each line to local facts,
//! then [`builder`] folds the classified lines into blocks, options and
//! answers. Content that merely looks like a section header therefore fails
//! in one visible place (the fold), not scattered through the parse.

pub mod answers;
pub mod builder;
pub mod classify;

use crate::audit::{self, Anomaly};
use crate::model::{ContentBlock, Document, DocumentKind, Principle};

use builder::DocumentBuilder;
use classify::LineClassifier;

/// Empty blocks synthesized when a body decodes to none, matching the
/// fresh-editor state.
const BLOCK_FLOOR: usize = 2;

fn fold_body(body: &str, kind: DocumentKind) -> builder::DecodedParts {
    let classifier = LineClassifier;
    let mut builder = DocumentBuilder::new(kind);
    for line in body.lines() {
        builder.push(&classifier.classify(line));
    }
    builder.finish()
}

fn apply_block_floor(blocks: Vec<ContentBlock>) -> Vec<ContentBlock> {
    if blocks.is_empty() {
        (0..BLOCK_FLOOR).map(|_| ContentBlock::empty()).collect()
    } else {
        blocks
    }
}

/// Splits an encoded body into its content blocks only.
///
/// The decode counterpart of [`crate::encode::join_blocks`]: segmentation
/// stops at the first section header, and a body with no content at all
/// yields the two-empty-block floor.
pub fn split_blocks(body: &str, kind: DocumentKind) -> Vec<ContentBlock> {
    apply_block_floor(fold_body(body, kind).blocks)
}

/// Decodes an encoded body back into a [`Document`].
///
/// Total and lenient: malformed input degrades to missing options, missing
/// answers, or the empty-block floor, never an error. `principle` and
/// `title` come from the caller (the payload fields); decode never infers
/// either from the text.
pub fn decode_document(
    body: &str,
    kind: DocumentKind,
    principle: Principle,
    title: Option<&str>,
) -> Document {
    let mut parts = fold_body(body, kind);
    parts.blocks = apply_block_floor(parts.blocks);

    Document {
        kind,
        principle,
        instruction: title.filter(|t| !t.is_empty()).map(str::to_string),
        heading: parts.heading.filter(|h| !h.is_empty()),
        blocks: parts.blocks,
        options: parts.options,
        answers: parts.answers,
        image: None,
    }
}

/// Decodes like [`decode_document`] and reports consistency findings.
///
/// The decoded document is identical to the lenient result; anomalies are
/// informational only.
pub fn decode_document_strict(
    body: &str,
    kind: DocumentKind,
    principle: Principle,
    title: Option<&str>,
) -> (Document, Vec<Anomaly>) {
    let doc = decode_document(body, kind, principle, title);
    let anomalies = audit::check(&doc);
    (doc, anomalies)
}
