//! Selection state for the two currency pickers.
//!
//! Holds the full currency list plus the selected base and target indices.
//! The target list is always the full list minus the selected base
//! currency, so a base change shifts target indices; the target selection
//! resets to the first item rather than chasing the old currency by
//! identity.

#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    currencies: Vec<String>,
    base_index: usize,
    target_index: usize,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    pub fn currencies(&self) -> &[String] {
        &self.currencies
    }

    pub fn base_index(&self) -> usize {
        self.base_index
    }

    pub fn target_index(&self) -> usize {
        self.target_index
    }

    /// Replaces the currency list wholesale and resets both selections to
    /// the first item. With an empty list the state is unusable until the
    /// next replacement; callers must check `is_empty` before lookups.
    pub fn replace_currency_list(&mut self, list: Vec<String>) {
        self.currencies = list;
        self.base_index = 0;
        self.target_index = 0;
    }

    /// Selects the base currency. Out-of-range indices are ignored and
    /// reported as `false`. The target selection always resets to 0.
    pub fn set_base_index(&mut self, index: usize) -> bool {
        if index >= self.currencies.len() {
            return false;
        }
        self.base_index = index;
        self.target_index = 0;
        true
    }

    /// Selects the target currency from the base-exclusive target list.
    pub fn set_target_index(&mut self, index: usize) -> bool {
        if index >= self.target_list().len() {
            return false;
        }
        self.target_index = index;
        true
    }

    /// The full list with the base currency removed, relative order
    /// preserved. Recomputed on demand; lists hold tens of items at most.
    pub fn target_list(&self) -> Vec<String> {
        self.currencies
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != self.base_index)
            .map(|(_, code)| code.clone())
            .collect()
    }

    pub fn current_base(&self) -> Option<&str> {
        self.currencies.get(self.base_index).map(String::as_str)
    }

    pub fn current_target(&self) -> Option<String> {
        self.target_list().get(self.target_index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_state() {
        let state = SelectionState::new();
        assert!(state.is_empty());
        assert!(state.current_base().is_none());
        assert!(state.current_target().is_none());
        assert!(state.target_list().is_empty());
    }

    #[test]
    fn test_replace_resets_selection() {
        let mut state = SelectionState::new();
        state.replace_currency_list(codes(&["EUR", "RUB", "USD"]));
        assert!(state.set_base_index(2));
        assert!(state.set_target_index(1));

        state.replace_currency_list(codes(&["CAD", "CHF"]));
        assert_eq!(state.base_index(), 0);
        assert_eq!(state.target_index(), 0);
        assert_eq!(state.current_base(), Some("CAD"));
        assert_eq!(state.current_target(), Some("CHF".to_string()));
    }

    #[test]
    fn test_target_list_excludes_base() {
        let list = ["EUR", "RUB", "USD"];
        let mut state = SelectionState::new();
        state.replace_currency_list(codes(&list));

        for base in 0..list.len() {
            assert!(state.set_base_index(base));
            let targets = state.target_list();
            assert_eq!(targets.len(), list.len() - 1);
            assert!(!targets.contains(&list[base].to_string()));
        }
    }

    #[test]
    fn test_base_change_resets_target() {
        let mut state = SelectionState::new();
        state.replace_currency_list(codes(&["EUR", "RUB", "USD"]));
        assert!(state.set_target_index(1));
        assert_eq!(state.target_index(), 1);

        assert!(state.set_base_index(2));
        assert_eq!(state.target_index(), 0);

        // Reset happens even when re-selecting the same base
        assert!(state.set_target_index(1));
        assert!(state.set_base_index(2));
        assert_eq!(state.target_index(), 0);
    }

    #[test]
    fn test_out_of_range_indices_ignored() {
        let mut state = SelectionState::new();
        state.replace_currency_list(codes(&["EUR", "USD"]));

        assert!(!state.set_base_index(2));
        assert_eq!(state.base_index(), 0);

        // Target list has a single entry, so index 1 is out of range
        assert!(!state.set_target_index(1));
        assert_eq!(state.target_index(), 0);
    }

    #[test]
    fn test_scenario_base_eur_target_usd() {
        let mut state = SelectionState::new();
        state.replace_currency_list(codes(&["EUR", "RUB", "USD"]));

        assert_eq!(state.current_base(), Some("EUR"));
        assert_eq!(state.target_list(), codes(&["RUB", "USD"]));

        assert!(state.set_target_index(1));
        assert_eq!(state.current_target(), Some("USD".to_string()));
    }
}
