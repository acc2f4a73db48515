pub mod blocks;
pub mod inline;

use blocks::{Block, block_to_block_type, markdown_to_blocks};

/// Splits and classifies a whole document.
pub fn parse_document(document: &str) -> Vec<Block> {
    markdown_to_blocks(document)
        .into_iter()
        .map(|text| {
            let kind = block_to_block_type(&text);
            log::debug!("classified block as {kind:?}: {:?}", preview(&text, 40));
            Block { kind, text }
        })
        .collect()
}

/// First `max_chars` characters of `s`, for log lines.
fn preview(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &s[..idx]),
        None => s.to_string(),
    }
}
