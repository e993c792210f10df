//! Action catalog for name lookup.
//!
//! The `ActionCatalog` stores every action a world defines. Characters
//! only hold action names and resolve them here at battle time.

use rustc_hash::FxHashMap;

use super::action::Action;
use crate::core::{QuestError, Result};

/// Registry of action definitions.
///
/// Keeps declaration order so random draws over the catalog are stable
/// for a given seed.
///
/// ## Example
///
/// ```
/// use auto_quest::actions::{Action, ActionCatalog};
/// use auto_quest::effects::Effect;
///
/// let mut catalog = ActionCatalog::new();
/// catalog.register(Action::new("tackle", [Effect::attack(40, 95)])).unwrap();
///
/// assert_eq!(catalog.get("tackle").unwrap().effects.len(), 1);
/// assert!(catalog.register(Action::new("tackle", [])).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ActionCatalog {
    actions: Vec<Action>,
    by_name: FxHashMap<String, usize>,
}

impl ActionCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from definitions, validating each one.
    pub fn from_actions(actions: impl IntoIterator<Item = Action>) -> Result<Self> {
        let mut catalog = Self::new();
        for action in actions {
            catalog.register(action)?;
        }
        Ok(catalog)
    }

    /// Register an action definition.
    ///
    /// Fails on a duplicate name or invalid effect parameters.
    pub fn register(&mut self, action: Action) -> Result<()> {
        if self.by_name.contains_key(&action.name) {
            return Err(QuestError::DuplicateAction(action.name));
        }
        action.validate()?;

        self.by_name.insert(action.name.clone(), self.actions.len());
        self.actions.push(action);
        Ok(())
    }

    /// Get an action by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Action> {
        self.by_name.get(name).map(|&idx| &self.actions[idx])
    }

    /// Get an action by name, failing with `UnknownAction`.
    pub fn resolve(&self, name: &str) -> Result<&Action> {
        self.get(name)
            .ok_or_else(|| QuestError::UnknownAction(name.to_string()))
    }

    /// Check if an action name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Get the number of registered actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterate over actions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    /// Action names in declaration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.actions.iter().map(|a| a.name.as_str()).collect()
    }
}
