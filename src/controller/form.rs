//! Named-field form state.

use std::collections::BTreeMap;
use std::sync::Arc;

/// Field name to current value.
pub type FormValues = BTreeMap<String, String>;

/// Tracks the values of a set of named form fields.
///
/// The snapshot captured by [`FormController::new`] is shared by every
/// controller derived from it, so [`FormController::reset`] always returns
/// to the creation-time values.
///
/// # Examples
///
/// ```
/// use todo_state::controller::FormController;
///
/// let form = FormController::new([("name", "Juan"), ("email", "juan@example.com")]);
/// let edited = form.on_change("name", "Joe");
///
/// assert_eq!(edited.value("name"), Some("Joe"));
/// assert_eq!(edited.value("email"), Some("juan@example.com"));
/// assert_eq!(edited.reset(), form);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormController {
    values: FormValues,
    initial: Arc<FormValues>,
}

impl FormController {
    /// Creates a controller whose fields start at `initial`.
    #[must_use]
    pub fn new<K, V>(initial: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let values: FormValues = initial
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        Self {
            initial: Arc::new(values.clone()),
            values,
        }
    }

    /// Returns every field value.
    #[must_use]
    pub const fn values(&self) -> &FormValues {
        &self.values
    }

    /// Returns the value of a single field.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns the values captured at creation.
    #[must_use]
    pub fn initial_values(&self) -> &FormValues {
        &self.initial
    }

    /// Returns `true` when any field differs from its creation-time value.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.values != *self.initial
    }

    /// Returns a controller with `name` set to `value`.
    ///
    /// Other fields keep their values. Names outside the initial set are
    /// recorded as new fields.
    #[must_use]
    pub fn on_change(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = self.values.clone();
        values.insert(name.into(), value.into());
        Self {
            values,
            initial: Arc::clone(&self.initial),
        }
    }

    /// Returns a controller holding the creation-time values.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self {
            values: (*self.initial).clone(),
            initial: Arc::clone(&self.initial),
        }
    }
}
