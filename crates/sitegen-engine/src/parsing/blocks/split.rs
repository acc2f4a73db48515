/// Splits a document into trimmed, non-empty blocks on blank lines.
///
/// Runs of more than two newlines act as a single separator. `\r\n`
/// line endings are normalised first.
pub fn markdown_to_blocks(document: &str) -> Vec<String> {
    let normalized = document.replace("\r\n", "\n");
    normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}
