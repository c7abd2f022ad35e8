pub mod answer;
pub mod block;
pub mod document;
pub mod principle;

pub use answer::{AnswerEntry, merge_answer};
pub use block::{BlockId, ContentBlock};
pub use document::{Document, DocumentKind, ParseDocumentKindError, RemoveBlockError};
pub use principle::{ParsePrincipleError, Principle};
