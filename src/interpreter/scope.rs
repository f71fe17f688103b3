use std::collections::{BTreeMap, HashMap};

/// The single global variable scope of a session.
///
/// Maps identifier spellings to integer values. Reading a name that was never
/// assigned is an error for the evaluator, never an implicit zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableScope {
    values: HashMap<String, i64>,
}

impl VariableScope {
    /// Creates an empty scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    /// Binds `name` to `value`, overwriting any previous binding.
    ///
    /// ## Example
    /// ```
    /// use spi::interpreter::scope::VariableScope;
    ///
    /// let mut scope = VariableScope::new();
    /// scope.set("a", 1);
    /// scope.set("a", 2);
    ///
    /// assert_eq!(scope.get("a"), Some(2));
    /// assert_eq!(scope.len(), 1);
    /// ```
    pub fn set(&mut self, name: &str, value: i64) {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
        } else {
            self.values.insert(name.to_owned(), value);
        }
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// A sorted copy of every binding, for display.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, i64> {
        self.values
            .iter()
            .map(|(name, value)| (name.clone(), *value))
            .collect()
    }
}
