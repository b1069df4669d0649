/// Case-insensitive keyword predicate used to select anchors by their text
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keywords: Vec<String>,
}

impl KeywordMatcher {
    /// Create a matcher from the configured keywords (blank keywords are ignored)
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    /// True if the lower-cased text contains any lower-cased keyword
    pub fn matches(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let text = text.to_lowercase();
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// One-off form of [`KeywordMatcher::matches`]
pub fn matches<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    KeywordMatcher::new(keywords).matches(text)
}
