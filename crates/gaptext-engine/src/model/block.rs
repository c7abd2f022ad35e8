use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable, opaque identity of a content block.
///
/// Ids survive edits to the block's text; a decoded document gets fresh ids
/// since the encoded form carries none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(Uuid);

impl BlockId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

/// One unit of authored content: a step, label, sentence, or paragraph.
///
/// The text may contain any number of gap markers like `(3)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub id: BlockId,
    pub text: String,
}

impl ContentBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: BlockId::new(),
            text: text.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_per_block() {
        let a = ContentBlock::new("same text");
        let b = ContentBlock::new("same text");
        assert_ne!(a.id, b.id);
        assert_eq!(a.text, b.text);
    }
}
