use super::*;

#[test]
fn groups_words_with_short_tail() {
    let chunks = CaptionChunks::split("one two three four five six seven", 5).unwrap();
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks.get(0), Some("one two three four five"));
    assert_eq!(chunks.get(1), Some("six seven"));
}

#[test]
fn collapses_whitespace_runs() {
    let chunks = CaptionChunks::split("  a\t\tb \n c  ", 2).unwrap();
    assert_eq!(chunks.as_slice(), ["a b", "c"]);
}

#[test]
fn exact_multiple_has_no_short_tail() {
    let chunks = CaptionChunks::split("a b c d", 2).unwrap();
    assert_eq!(chunks.as_slice(), ["a b", "c d"]);
}

#[test]
fn empty_and_blank_text_yield_no_chunks() {
    assert!(CaptionChunks::split("", 5).unwrap().is_empty());
    assert!(CaptionChunks::split(" \t\n ", 5).unwrap().is_empty());
}

#[test]
fn joined_chunks_reproduce_normalized_text() {
    let text = "pack  my box\twith five\ndozen liquor jugs";
    let chunks = CaptionChunks::split(text, 3).unwrap();
    let joined = chunks.as_slice().join(" ");
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    assert_eq!(joined, normalized);
}

#[test]
fn zero_words_per_chunk_is_rejected() {
    assert!(CaptionChunks::split("a b", 0).is_err());
}

#[test]
fn chunk_size_one_gives_one_word_each() {
    let chunks = CaptionChunks::split("alpha beta", 1).unwrap();
    assert_eq!(chunks.as_slice(), ["alpha", "beta"]);
}
