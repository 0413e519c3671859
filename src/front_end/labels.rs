use itertools::Itertools;

/// The distinct label texts of a database, sorted.
///
/// A label value is the rank of its text, so comparing label values compares
/// texts. Vertex and edge labels share one dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelDictionary {
    texts: Vec<String>,
}

impl LabelDictionary {
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut texts: Vec<String> = texts.into_iter().map(Into::into).collect();
        texts.sort_unstable();
        texts.dedup();
        Self { texts }
    }

    pub fn label(&self, text: &str) -> Option<i64> {
        self.texts
            .binary_search_by(|t| t.as_str().cmp(text))
            .ok()
            .map(|rank| rank as i64)
    }

    pub fn text(&self, label: i64) -> Option<&str> {
        usize::try_from(label)
            .ok()
            .and_then(|rank| self.texts.get(rank))
            .map(String::as_str)
    }

    /// The text of `label`, or the number itself for unknown labels.
    pub fn render(&self, label: i64) -> String {
        match self.text(label) {
            Some("") => String::from("''"),
            Some(text) => String::from(text),
            None => label.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// Collapse inner whitespace and strip surrounding single quotes.
pub fn normalize_label(raw: &str) -> String {
    raw.split_whitespace()
        .join(" ")
        .trim_matches('\'')
        .to_string()
}
