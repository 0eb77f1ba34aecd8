use crate::foundation::error::{ClipError, ClipResult};

/// Caption text split into word groups of a fixed size.
///
/// Splitting is whitespace-driven: runs of whitespace separate words, empty
/// tokens are discarded, and consecutive words are grouped into chunks of
/// `words_per_chunk` (the last chunk may be shorter). Text with no words
/// yields an empty chunk list, which downstream scheduling treats as "no
/// captions".
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CaptionChunks {
    chunks: Vec<String>,
}

impl CaptionChunks {
    /// Splits `text` into chunks of at most `words_per_chunk` words.
    pub fn split(text: &str, words_per_chunk: usize) -> ClipResult<Self> {
        if words_per_chunk == 0 {
            return Err(ClipError::validation("words_per_chunk must be >= 1"));
        }

        let words: Vec<&str> = text.split_whitespace().collect();
        let chunks = words
            .chunks(words_per_chunk)
            .map(|group| group.join(" "))
            .collect();
        Ok(Self { chunks })
    }

    /// Number of chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// True when the source text contained no words.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Chunk text by index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.chunks.get(index).map(String::as_str)
    }

    /// All chunks in order.
    pub fn as_slice(&self) -> &[String] {
        &self.chunks
    }
}

#[cfg(test)]
#[path = "../../tests/unit/captions/chunker.rs"]
mod tests;
