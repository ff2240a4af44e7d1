/// Names of stored rasters in listing order. The first entry is always the
/// empty "no selection" name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFractalCatalog {
    names: Vec<String>,
}

impl Default for SavedFractalCatalog {
    fn default() -> Self {
        Self {
            names: vec![String::new()],
        }
    }
}

impl SavedFractalCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `name` unless it is already listed. Returns whether it was added.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();

        if self.contains(&name) {
            return false;
        }

        self.names.push(name);
        true
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Stored names only, without the leading empty entry.
    pub fn saved(&self) -> impl Iterator<Item = &str> {
        self.names.iter().skip(1).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len() - 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: Into<String>> FromIterator<S> for SavedFractalCatalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut catalog = Self::new();

        for name in iter {
            catalog.insert(name);
        }

        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_empty_selection() {
        let catalog = SavedFractalCatalog::new();

        assert_eq!(catalog.names(), &[String::new()]);
        assert!(catalog.is_empty());
    }

    #[test]
    fn insert_skips_duplicates() {
        let mut catalog = SavedFractalCatalog::new();

        assert!(catalog.insert("spiral"));
        assert!(catalog.insert("dendrite"));
        assert!(!catalog.insert("spiral"));

        assert_eq!(catalog.saved().collect::<Vec<_>>(), vec!["spiral", "dendrite"]);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn empty_name_is_never_added_twice() {
        let mut catalog = SavedFractalCatalog::new();

        assert!(!catalog.insert(""));
        assert_eq!(catalog.names().len(), 1);
    }

    #[test]
    fn collects_from_iterator() {
        let catalog: SavedFractalCatalog = ["a", "b", "a"].into_iter().collect();

        assert_eq!(catalog.names(), &["", "a", "b"]);
    }
}
