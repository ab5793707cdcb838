//! Splitting outgoing text to fit chat message limits
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Skip blank chunks so journal listings never produce empty sends
//! - 1.0.0: Line-aware, UTF-8 safe chunking for Discord messages

/// Discord message content limit
pub const MESSAGE_LIMIT: usize = 2000;

/// Chunk text into pieces no longer than `max_size` bytes
///
/// Prefers splitting between lines; a single line longer than the limit is
/// split on character boundaries.
pub fn chunk_text(text: &str, max_size: usize) -> Vec<String> {
    if text.len() <= max_size {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        // +1 for the newline that joins it to the next line
        if !current.is_empty() && current.len() + line.len() + 1 > max_size {
            push_chunk(&mut chunks, &mut current);
        }

        if line.len() > max_size {
            push_chunk(&mut chunks, &mut current);
            chunks.extend(split_long_line(line, max_size));
            continue;
        }

        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(line);
    }
    push_chunk(&mut chunks, &mut current);

    chunks
}

fn push_chunk(chunks: &mut Vec<String>, current: &mut String) {
    let chunk = std::mem::take(current);
    if !chunk.trim().is_empty() {
        chunks.push(chunk.trim_end().to_string());
    }
}

fn split_long_line(line: &str, max_size: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();

    for ch in line.chars() {
        if current.len() + ch.len_utf8() > max_size && !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        pieces.push(current);
    }

    pieces
}

/// Chunk text for Discord message content (2000 byte limit)
pub fn chunk_for_message(text: &str) -> Vec<String> {
    chunk_text(text, MESSAGE_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_single_chunk() {
        assert_eq!(chunk_text("hello", 10), vec!["hello".to_string()]);
    }

    #[test]
    fn test_splits_between_lines() {
        let chunks = chunk_text("aaaa\nbbbb\ncccc", 9);
        assert_eq!(chunks, vec!["aaaa\nbbbb", "cccc"]);
    }

    #[test]
    fn test_long_line_split_on_char_boundaries() {
        // Each 'é' is two bytes
        let chunks = chunk_text("éééé", 3);
        assert_eq!(chunks, vec!["é", "é", "é", "é"]);
        assert!(chunks.iter().all(|c| c.len() <= 3));
    }

    #[test]
    fn test_every_chunk_within_limit() {
        let entry = "1) 2024-03-01 09:00\nfelt calm, drank water, walked outside";
        let text = vec![entry; 100].join("\n\n");

        let chunks = chunk_for_message(&text);
        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| c.len() <= MESSAGE_LIMIT));
        assert!(chunks.iter().all(|c| !c.trim().is_empty()));
    }
}
