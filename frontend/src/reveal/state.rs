/// Ordered map from element key to its "revealed" flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    flags: Vec<(&'static str, bool)>,
}

impl RevealState {
    /// All flags start hidden. Duplicate keys keep their first position.
    pub fn with_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        let mut flags: Vec<(&'static str, bool)> = Vec::new();
        for key in keys {
            if !flags.iter().any(|(k, _)| *k == key) {
                flags.push((key, false));
            }
        }
        Self { flags }
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.flags
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, on)| *on)
            .unwrap_or(false)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.flags.iter().any(|(k, _)| *k == key)
    }

    /// Returns false when the key is unknown; the write is dropped.
    pub fn reveal(&mut self, key: &str) -> bool {
        match self.flags.iter_mut().find(|(k, _)| *k == key) {
            Some((_, on)) => {
                *on = true;
                true
            }
            None => false,
        }
    }

    pub fn reveal_all(&mut self) {
        self.flags.iter_mut().for_each(|(_, on)| *on = true);
    }

    pub fn hide_all(&mut self) {
        self.flags.iter_mut().for_each(|(_, on)| *on = false);
    }

    pub fn all_revealed(&self) -> bool {
        self.flags.iter().all(|(_, on)| *on)
    }

    pub fn all_hidden(&self) -> bool {
        self.flags.iter().all(|(_, on)| !*on)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.flags.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_in_insertion_order() {
        let state = RevealState::with_keys(["title", "card1", "cta"]);
        assert_eq!(state.keys().collect::<Vec<_>>(), vec!["title", "card1", "cta"]);
        assert!(state.all_hidden());
    }

    #[test]
    fn duplicate_keys_collapse() {
        let state = RevealState::with_keys(["title", "cta", "title"]);
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut state = RevealState::with_keys(["title"]);
        assert!(!state.reveal("titel"));
        assert!(!state.is_revealed("titel"));
        assert!(state.all_hidden());
    }

    #[test]
    fn reveal_and_reset() {
        let mut state = RevealState::with_keys(["title", "cta"]);
        assert!(state.reveal("cta"));
        assert!(state.is_revealed("cta"));
        assert!(!state.is_revealed("title"));

        state.reveal_all();
        assert!(state.all_revealed());

        state.hide_all();
        assert!(state.all_hidden());
    }
}
