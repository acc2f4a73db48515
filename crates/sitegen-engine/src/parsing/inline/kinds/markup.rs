/// Link and image syntax: `[label](dest)` and `![alt](dest)`.
pub struct Markup;

impl Markup {
    /// Prefix that turns a link into an image.
    pub const BANG: u8 = b'!';
    pub const LABEL_OPEN: u8 = b'[';
    pub const LABEL_CLOSE: u8 = b']';
    pub const DEST_OPEN: u8 = b'(';
    pub const DEST_CLOSE: u8 = b')';
}
