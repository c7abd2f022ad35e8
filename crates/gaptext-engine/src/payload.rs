//! The backend wire boundary.
//!
//! Shape resolution happens here exactly once, on the way in and on the way
//! out; nothing downstream inspects dynamic shapes.

use serde::{Deserialize, Serialize};

use crate::encode::encode_document;
use crate::model::{Document, DocumentKind, Principle};
use crate::parsing::decode_document;

/// Auxiliary image reference attached to diagram-style questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramChart {
    pub image: String,
}

/// The backend wire shape for one gap-filling question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapFillingPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub principle: Principle,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagram_chart: Option<DiagramChart>,
}

impl GapFillingPayload {
    /// Projects a document onto the wire shape.
    ///
    /// The body is freshly encoded, `principle` passes through unchanged,
    /// and a missing instruction falls back to the kind's default.
    pub fn from_document(doc: &Document) -> Self {
        let title = doc
            .instruction
            .clone()
            .unwrap_or_else(|| doc.kind.default_instruction().to_string());
        Self {
            title: Some(title),
            principle: doc.principle,
            body: encode_document(doc),
            diagram_chart: doc.image.clone().map(|image| DiagramChart { image }),
        }
    }

    /// Rebuilds the document for editing.
    ///
    /// `kind` comes from the caller; the payload itself does not record it.
    pub fn into_document(self, kind: DocumentKind) -> Document {
        let mut doc = decode_document(&self.body, kind, self.principle, self.title.as_deref());
        doc.image = self.diagram_chart.map(|c| c.image);
        doc
    }
}
