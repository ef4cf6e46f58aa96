use std::collections::BTreeSet;

/// Open/closed flags for a list of collapsible items, keyed by item id.
/// Each item toggles on its own; expand/collapse-all replace the whole set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Disclosure {
    open: BTreeSet<String>,
}

impl Disclosure {
    pub fn is_open(&self, id: &str) -> bool {
        self.open.contains(id)
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.open.remove(id) {
            self.open.insert(id.to_string());
        }
    }

    pub fn expand_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.open = ids.into_iter().map(str::to_string).collect();
    }

    pub fn collapse_all(&mut self) {
        self.open.clear();
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDS: [&str; 4] = ["1", "2", "3", "4"];

    #[test]
    fn test_toggle_flips_one_item() {
        let mut d = Disclosure::default();
        d.toggle("2");
        assert!(d.is_open("2"));
        assert!(!d.is_open("1"));
        d.toggle("2");
        assert!(!d.is_open("2"));
    }

    #[test]
    fn test_collapse_all_then_items_independent() {
        let mut d = Disclosure::default();
        d.expand_all(IDS);
        assert_eq!(d.open_count(), 4);

        d.collapse_all();
        assert!(IDS.iter().all(|id| !d.is_open(id)));

        d.toggle("3");
        for id in IDS {
            assert_eq!(d.is_open(id), id == "3");
        }
    }

    #[test]
    fn test_expand_all_replaces_previous_set() {
        let mut d = Disclosure::default();
        d.toggle("9");
        d.expand_all(["1", "2"]);
        assert!(!d.is_open("9"));
        assert_eq!(d.open_count(), 2);
    }
}
