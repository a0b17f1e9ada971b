//! Scenario state threaded through the handler chain.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// Open-ended key/value state owned by one scenario's step chain.
///
/// A fresh context is created per scenario, seeded with the feature and
/// scenario names. Each handler takes the context by value and returns the
/// context for the next step, so there is never more than one live owner.
///
/// # Examples
///
/// ```
/// use specdrive::Context;
///
/// let mut ctx = Context::new("Totals", "Adding");
/// ctx.insert("count", 2_i64);
/// assert_eq!(ctx.get::<i64>("count"), Some(&2));
/// assert_eq!(ctx.feature(), "Totals");
/// ```
#[derive(Default)]
pub struct Context {
    entries: HashMap<String, Box<dyn Any>>,
}

impl Context {
    /// Create a context seeded with the `feature` and `scenario` keys.
    #[must_use]
    pub fn new(feature: &str, scenario: &str) -> Self {
        let mut context = Self::default();
        context.insert("feature", feature.to_string());
        context.insert("scenario", scenario.to_string());
        context
    }

    /// Store a value under a key, replacing any previous value.
    pub fn insert<T: Any>(&mut self, key: impl Into<String>, value: T) {
        self.entries.insert(key.into(), Box::new(value));
    }

    /// Borrow a value by key and type.
    #[must_use]
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.entries.get(key)?.downcast_ref()
    }

    /// Mutably borrow a value by key and type.
    #[must_use]
    pub fn get_mut<T: Any>(&mut self, key: &str) -> Option<&mut T> {
        self.entries.get_mut(key)?.downcast_mut()
    }

    /// Remove and return a value by key and type. A value of a different
    /// type is left in place.
    #[must_use]
    pub fn take<T: Any>(&mut self, key: &str) -> Option<T> {
        match self.entries.remove(key)?.downcast::<T>() {
            Ok(value) => Some(*value),
            Err(original) => {
                self.entries.insert(key.to_string(), original);
                None
            }
        }
    }

    /// Whether a key is present, of any type.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The seeded feature name, or empty if a handler removed it.
    #[must_use]
    pub fn feature(&self) -> &str {
        self.get::<String>("feature").map_or("", String::as_str)
    }

    /// The seeded scenario name, or empty if a handler removed it.
    #[must_use]
    pub fn scenario(&self) -> &str {
        self.get::<String>("scenario").map_or("", String::as_str)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("Context").field("keys", &keys).finish()
    }
}
