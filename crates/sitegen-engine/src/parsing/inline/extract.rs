use super::{cursor::Cursor, kinds::Markup};

/// One `[label](dest)` or `![alt](dest)` occurrence in a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupMatch<'a> {
    /// Whether the markup was prefixed with `!`.
    pub is_image: bool,
    pub label: &'a str,
    pub dest: &'a str,
    /// Byte offset of the first markup character (`!` or `[`).
    pub start: usize,
    /// Byte offset just past the closing `)`.
    pub end: usize,
}

/// Finds all `![alt](dest)` markup in `text`, left to right.
///
/// Labels are one or more non-`]` bytes and destinations one or more
/// non-`)` bytes; scanning resumes after each match. Nested brackets
/// are unsupported and end at the first closing character.
pub fn scan_images(text: &str) -> Vec<MarkupMatch<'_>> {
    scan(text, true)
}

/// Finds all `[label](dest)` markup in `text` whose `[` is not preceded
/// by `!`, left to right.
///
/// Runs independently of [`scan_images`], so a link may begin inside an
/// image label and the other way round.
pub fn scan_links(text: &str) -> Vec<MarkupMatch<'_>> {
    scan(text, false)
}

/// Returns `(alt, src)` pairs for every `![alt](src)` in `text`.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    into_pairs(scan_images(text))
}

/// Returns `(label, href)` pairs for every `[label](href)` in `text`
/// that is not part of an image.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    into_pairs(scan_links(text))
}

fn into_pairs(found: Vec<MarkupMatch<'_>>) -> Vec<(String, String)> {
    found
        .into_iter()
        .map(|m| (m.label.to_string(), m.dest.to_string()))
        .collect()
}

fn scan(text: &str, images: bool) -> Vec<MarkupMatch<'_>> {
    let mut cur = Cursor::new(text);
    let mut out = vec![];

    while !cur.eof() {
        if at_markup_start(&cur, images)
            && let Some(m) = try_parse_markup(&mut cur, images)
        {
            out.push(m);
            continue;
        }
        cur.bump();
    }
    out
}

/// Images open at `![`; links open at a `[` not directly after `!`.
fn at_markup_start(cur: &Cursor<'_>, images: bool) -> bool {
    if images {
        return cur.starts_with(&[Markup::BANG, Markup::LABEL_OPEN]);
    }
    let after_bang = cur
        .pos()
        .checked_sub(1)
        .and_then(|prev| cur.s.as_bytes().get(prev))
        == Some(&Markup::BANG);
    cur.peek() == Some(Markup::LABEL_OPEN) && !after_bang
}

/// Attempts to parse link or image markup at the current position.
///
/// The caller has checked the opening bytes with [`at_markup_start`].
/// On failure the cursor position is restored.
fn try_parse_markup<'a>(cur: &mut Cursor<'a>, is_image: bool) -> Option<MarkupMatch<'a>> {
    let saved = cur.clone();
    let start = cur.pos();

    if is_image {
        cur.bump(); // !
    }
    cur.bump(); // [

    let label_start = cur.pos();
    let label_len = cur.bump_until(Markup::LABEL_CLOSE);
    if label_len == 0 || !cur.starts_with(&[Markup::LABEL_CLOSE, Markup::DEST_OPEN]) {
        *cur = saved;
        return None;
    }
    let label = cur.slice(label_start, cur.pos());
    cur.bump(); // ]
    cur.bump(); // (

    let dest_start = cur.pos();
    let dest_len = cur.bump_until(Markup::DEST_CLOSE);
    if dest_len == 0 || cur.peek() != Some(Markup::DEST_CLOSE) {
        *cur = saved;
        return None;
    }
    let dest = cur.slice(dest_start, cur.pos());
    cur.bump(); // )

    Some(MarkupMatch {
        is_image,
        label,
        dest,
        start,
        end: cur.pos(),
    })
}
