use std::collections::HashSet;

/// Set of row ids whose inline detail panel is open.
///
/// Independent of filtering: a hidden row keeps its state and shows up
/// expanded again once the filter lets it through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionSet {
    open: HashSet<String>,
}

impl ExpansionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closes `id` if open, opens it otherwise. Returns the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.open.remove(id) {
            false
        } else {
            self.open.insert(id.to_string());
            true
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.open.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut set = ExpansionSet::new();
        set.toggle("INV-001");
        let before = set.clone();

        for id in ["INV-001", "INV-002"] {
            set.toggle(id);
            set.toggle(id);
            assert_eq!(set, before);
        }
    }

    #[test]
    fn test_toggle_reports_new_state() {
        let mut set = ExpansionSet::new();
        assert!(set.toggle("a"));
        assert!(set.is_expanded("a"));
        assert!(!set.toggle("a"));
        assert!(!set.is_expanded("a"));
    }
}
