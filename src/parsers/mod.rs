pub mod html;


/// A hyperlink as it appears in the page, before resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Trimmed visible text (may be empty)
    pub text: String,
    /// Raw `href` attribute value, possibly relative
    pub href: String,
}

impl Anchor {
    pub fn new(text: String, href: String) -> Self {
        Self { text, href }
    }

    /// Anchors without visible text are never exported
    ///
    /// An empty `href` still counts as a destination: it resolves to the page itself.
    pub fn is_usable(&self) -> bool {
        !self.text.is_empty()
    }
}
