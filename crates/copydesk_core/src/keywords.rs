/// Ordered set of trimmed, non-empty, unique keywords.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeywordSet {
    items: Vec<String>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `raw` after trimming. Returns false when the keyword is blank or
    /// already present; the set is unchanged in that case.
    pub fn add(&mut self, raw: &str) -> bool {
        let keyword = raw.trim();
        if keyword.is_empty() || self.contains(keyword) {
            return false;
        }
        self.items.push(keyword.to_string());
        true
    }

    pub fn remove(&mut self, keyword: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|existing| existing != keyword);
        self.items.len() != before
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.items.iter().any(|existing| existing == keyword)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.items.clone()
    }
}

impl<S: AsRef<str>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = KeywordSet::new();
        for keyword in iter {
            set.add(keyword.as_ref());
        }
        set
    }
}
