#![forbid(unsafe_code)]

//! Named groups of controls with aggregate validity.
//!
//! [`FormBuilder`] owns a fixed, ordered mapping of field name to
//! [`FormControl`]. Every aggregate view (`is_valid`, `errors`, `values`,
//! `control_errors`) is computed from the controls on each call; nothing is
//! cached, since controls may be mutated through shared handles at any time.
//!
//! Lookups by an unknown name never fail: `set` and `on_focus_change` do
//! nothing, `get` returns `None` and `get_value_or_empty` returns `""`.

use std::collections::HashMap;
use std::rc::Rc;

use crate::control::FormControl;

// ---------------------------------------------------------------------------
// FieldMap – ordered name → value views
// ---------------------------------------------------------------------------

/// An ordered name → value view over a form's fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMap<T> {
    entries: Vec<(String, T)>,
}

impl<T> FieldMap<T> {
    /// Get a value by field name.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl<T> Default for FieldMap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> FromIterator<(String, T)> for FieldMap<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for FieldMap<T> {
    type Item = (String, T);
    type IntoIter = std::vec::IntoIter<(String, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(feature = "schema")]
impl<T: serde::Serialize> serde::Serialize for FieldMap<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// FormBuilder
// ---------------------------------------------------------------------------

/// A fixed, ordered group of named controls.
///
/// # Example
///
/// ```rust
/// use formkit::{FormBuilder, FormControl};
/// use formkit::validation::ValidatorBuilder;
///
/// let form = FormBuilder::new([
///     ("email", FormControl::new("", ValidatorBuilder::new().required().email().build())),
///     ("password", FormControl::new("", ValidatorBuilder::new().required().min_length(8).build())),
/// ]);
///
/// assert!(form.is_valid());
/// form.set("email", "not-an-email");
/// assert!(form.is_invalid());
/// assert!(form.control_errors().contains("email"));
/// assert!(!form.control_errors().contains("password"));
/// ```
#[derive(Debug)]
pub struct FormBuilder {
    controls: Vec<(String, Rc<FormControl>)>,
    index: HashMap<String, usize>,
}

impl FormBuilder {
    /// Build a group that takes ownership of its controls.
    pub fn new<N: Into<String>>(controls: impl IntoIterator<Item = (N, FormControl)>) -> Self {
        Self::from_shared(
            controls
                .into_iter()
                .map(|(name, control)| (name, Rc::new(control))),
        )
    }

    /// Build a group from controls that may already be shared elsewhere.
    ///
    /// A repeated name replaces the earlier control but keeps its position.
    pub fn from_shared<N: Into<String>>(
        controls: impl IntoIterator<Item = (N, Rc<FormControl>)>,
    ) -> Self {
        let mut form = Self {
            controls: Vec::new(),
            index: HashMap::new(),
        };
        for (name, control) in controls {
            let name = name.into();
            if let Some(&slot) = form.index.get(&name) {
                tracing::warn!(field = %name, "duplicate field name, replacing earlier control");
                form.controls[slot].1 = control;
            } else {
                form.index.insert(name.clone(), form.controls.len());
                form.controls.push((name, control));
            }
        }
        form
    }

    fn lookup(&self, name: &str) -> Option<&Rc<FormControl>> {
        let found = self.index.get(name).map(|&slot| &self.controls[slot].1);
        if found.is_none() {
            tracing::debug!(field = %name, "no such field, ignoring");
        }
        found
    }

    // -------------------------------------------------------------------------
    // Routing
    // -------------------------------------------------------------------------

    /// Shared handle to a control, for binding it to a UI element.
    pub fn get(&self, name: &str) -> Option<Rc<FormControl>> {
        self.lookup(name).cloned()
    }

    /// Current value of a field, or `""` if there is no such field.
    pub fn get_value_or_empty(&self, name: &str) -> String {
        self.lookup(name).map(|c| c.value()).unwrap_or_default()
    }

    /// Forward an edit to the named field.
    pub fn set(&self, name: &str, value: impl Into<String>) {
        if let Some(control) = self.lookup(name) {
            control.set(value);
        }
    }

    /// Forward a focus change to the named field.
    pub fn on_focus_change(&self, name: &str, has_focus: bool) {
        if let Some(control) = self.lookup(name) {
            control.on_focus_change(has_focus);
        }
    }

    /// Reset every field.
    pub fn reset_all(&self) {
        for (_, control) in &self.controls {
            control.reset();
        }
    }

    /// Validate every field regardless of interaction history, as on submit.
    /// Returns the group's validity.
    pub fn validate(&self) -> bool {
        let span = tracing::debug_span!("form_validate", fields = self.controls.len());
        let _guard = span.enter();
        let mut valid = true;
        for (_, control) in &self.controls {
            valid &= control.validate();
        }
        tracing::debug!(valid, "form validated");
        valid
    }

    // -------------------------------------------------------------------------
    // Aggregate views
    // -------------------------------------------------------------------------

    pub fn is_valid(&self) -> bool {
        self.controls.iter().all(|(_, c)| c.is_valid())
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// All fields' errors concatenated in field order.
    pub fn errors(&self) -> Vec<String> {
        self.controls
            .iter()
            .flat_map(|(_, c)| c.errors())
            .collect()
    }

    /// Current value of every field.
    pub fn values(&self) -> FieldMap<String> {
        self.controls
            .iter()
            .map(|(name, c)| (name.clone(), c.value()))
            .collect()
    }

    /// Error lists of the fields that currently have at least one error.
    pub fn control_errors(&self) -> FieldMap<Vec<String>> {
        self.controls
            .iter()
            .filter_map(|(name, c)| {
                let errors = c.errors();
                (!errors.is_empty()).then(|| (name.clone(), errors))
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.controls.iter().map(|(n, _)| n.as_str())
    }

    pub fn controls(&self) -> impl Iterator<Item = (&str, &Rc<FormControl>)> {
        self.controls.iter().map(|(n, c)| (n.as_str(), c))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// True if any field is touched or dirty.
    pub fn is_interacted(&self) -> bool {
        self.controls.iter().any(|(_, c)| !c.is_pristine())
    }
}

// ---------------------------------------------------------------------------
// FormGroup – named forms by composition
// ---------------------------------------------------------------------------

/// A named form that owns a [`FormBuilder`].
///
/// Implement [`FormGroup::form`] and the whole group surface is available on
/// the named type.
///
/// ```rust
/// use formkit::{FormBuilder, FormControl, FormGroup};
/// use formkit::validation::ValidatorBuilder;
///
/// struct LoginForm {
///     form: FormBuilder,
/// }
///
/// impl LoginForm {
///     fn new() -> Self {
///         let form = FormBuilder::new([
///             ("username", FormControl::new("", ValidatorBuilder::new().required().build())),
///         ]);
///         Self { form }
///     }
/// }
///
/// impl FormGroup for LoginForm {
///     fn form(&self) -> &FormBuilder {
///         &self.form
///     }
/// }
///
/// let login = LoginForm::new();
/// assert!(!login.validate());
/// login.set("username", "alice");
/// assert!(login.is_valid());
/// ```
pub trait FormGroup {
    fn form(&self) -> &FormBuilder;

    fn get(&self, name: &str) -> Option<Rc<FormControl>> {
        self.form().get(name)
    }

    fn get_value_or_empty(&self, name: &str) -> String {
        self.form().get_value_or_empty(name)
    }

    fn set(&self, name: &str, value: impl Into<String>) {
        self.form().set(name, value);
    }

    fn on_focus_change(&self, name: &str, has_focus: bool) {
        self.form().on_focus_change(name, has_focus);
    }

    fn reset_all(&self) {
        self.form().reset_all();
    }

    fn validate(&self) -> bool {
        self.form().validate()
    }

    fn is_valid(&self) -> bool {
        self.form().is_valid()
    }

    fn is_invalid(&self) -> bool {
        self.form().is_invalid()
    }

    fn errors(&self) -> Vec<String> {
        self.form().errors()
    }

    fn values(&self) -> FieldMap<String> {
        self.form().values()
    }

    fn control_errors(&self) -> FieldMap<Vec<String>> {
        self.form().control_errors()
    }
}

impl FormGroup for FormBuilder {
    fn form(&self) -> &FormBuilder {
        self
    }
}
