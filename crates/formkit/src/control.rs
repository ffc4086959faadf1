#![forbid(unsafe_code)]

//! Per-field value, interaction and validation state.
//!
//! A [`FormControl`] owns one input's value together with its interaction
//! flags (`touched`, `dirty`, `has_focus`) and the outcome of its last
//! validation run.
//!
//! # Invariants
//!
//! 1. A pristine control (never touched, never dirty) reports no errors
//!    unless [`FormControl::validate`] was called explicitly.
//! 2. Once touched or dirty, every value change revalidates, so `errors`
//!    always describes the current value.
//! 3. `touched` and `dirty` only go back to `false` through
//!    [`FormControl::reset`].
//! 4. `errors` lists every failing validator's message in validator order;
//!    `error_kind` is the kind of the first of them.
//!
//! # Sharing and change notification
//!
//! All operations take `&self`, so a control can be shared as
//! `Rc<FormControl>` between a [`FormBuilder`](crate::FormBuilder) and a UI
//! binding. Callers either poll [`FormControl::revision`] or register a
//! callback with [`FormControl::subscribe`]. Callbacks run after the state
//! borrow is released and may read or mutate the control.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::validation::{ErrorKind, Validator};

/// Readable snapshot of a control's state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlState {
    /// Current value.
    pub value: String,
    /// Messages of all failing validators, in validator order.
    pub errors: Vec<String>,
    /// Kinds of all failing validators, parallel to `errors`.
    pub error_kinds: Vec<ErrorKind>,
    /// Has lost focus at least once.
    pub touched: bool,
    /// Value has changed at least once.
    pub dirty: bool,
    /// Currently focused.
    pub has_focus: bool,
}

impl ControlState {
    fn pristine(value: String) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.errors.last().map(String::as_str)
    }

    /// Kind of the first failing validator.
    #[must_use]
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error_kinds.first().copied()
    }

    /// Edited, not focused, and failing: the usual "show the error now" test.
    #[must_use]
    pub fn is_dirty_unfocused_error(&self) -> bool {
        self.dirty && !self.has_focus && !self.is_valid()
    }

    /// Neither touched nor dirty.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        !self.touched && !self.dirty
    }

    fn evaluate(&mut self, validators: &[Box<dyn Validator>]) {
        self.errors.clear();
        self.error_kinds.clear();
        for validator in validators {
            if !validator.is_valid(&self.value) {
                self.errors.push(validator.message().to_string());
                self.error_kinds.push(validator.kind());
            }
        }
    }
}

type Callback = dyn Fn(&ControlState);

/// RAII guard for a [`FormControl::subscribe`] callback.
///
/// Dropping it unsubscribes.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    _callback: Rc<Callback>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

/// A single form input: value, interaction flags and validation outcome.
///
/// # Example
///
/// ```rust
/// use formkit::FormControl;
/// use formkit::validation::ValidatorBuilder;
///
/// let password = FormControl::new("", ValidatorBuilder::new().required().min_length(8).build());
/// assert!(password.is_valid()); // pristine
///
/// password.on_focus_change(true);
/// password.on_focus_change(false);
/// assert!(password.touched());
/// assert_eq!(password.errors().len(), 2);
///
/// password.set("password1");
/// assert!(password.is_valid());
/// ```
pub struct FormControl {
    initial_value: String,
    validators: Vec<Box<dyn Validator>>,
    state: RefCell<ControlState>,
    revision: Cell<u64>,
    subscribers: RefCell<Vec<Weak<Callback>>>,
}

impl FormControl {
    /// Create a control with an initial value and an ordered validator list.
    pub fn new(initial_value: impl Into<String>, validators: Vec<Box<dyn Validator>>) -> Self {
        let initial_value = initial_value.into();
        Self {
            state: RefCell::new(ControlState::pristine(initial_value.clone())),
            initial_value,
            validators,
            revision: Cell::new(0),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Create a control with no validators.
    pub fn unvalidated(initial_value: impl Into<String>) -> Self {
        Self::new(initial_value, Vec::new())
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Apply a user edit.
    ///
    /// A differing value marks the control dirty and revalidates it. An
    /// identical value leaves everything as is: a touched or dirty control
    /// already holds the errors for that value.
    pub fn set(&self, value: impl Into<String>) {
        let value = value.into();
        self.update(|state, validators| {
            if state.value == value {
                return;
            }
            state.value = value;
            state.dirty = true;
            state.evaluate(validators);
            tracing::trace!(
                touched = state.touched,
                errors = state.errors.len(),
                "control value changed"
            );
        });
    }

    /// Record a focus or blur event. The first blur marks the control touched
    /// and validates it; later focus changes only update `has_focus`.
    pub fn on_focus_change(&self, has_focus: bool) {
        self.update(|state, validators| {
            state.has_focus = has_focus;
            if !has_focus && !state.touched {
                state.touched = true;
                state.evaluate(validators);
                tracing::trace!(
                    dirty = state.dirty,
                    errors = state.errors.len(),
                    "control touched"
                );
            }
        });
    }

    /// Run every validator against the current value, regardless of
    /// interaction history. Returns the resulting validity.
    pub fn validate(&self) -> bool {
        self.update(|state, validators| {
            state.evaluate(validators);
            tracing::trace!(errors = state.errors.len(), "control validated");
        });
        self.is_valid()
    }

    /// Restore the initial value and clear errors, `touched`, `dirty` and
    /// `has_focus`.
    pub fn reset(&self) {
        let changed = self.update(|state, _| {
            *state = ControlState::pristine(self.initial_value.clone());
        });
        if changed {
            tracing::trace!("control reset");
        }
    }

    /// Apply a transition; bumps the revision and notifies subscribers if
    /// the state changed. Returns whether it did.
    fn update(&self, apply: impl FnOnce(&mut ControlState, &[Box<dyn Validator>])) -> bool {
        {
            let mut state = self.state.borrow_mut();
            let before = state.clone();
            apply(&mut state, &self.validators);
            if *state == before {
                return false;
            }
        }
        self.revision.set(self.revision.get().wrapping_add(1));
        self.notify();
        true
    }

    // -------------------------------------------------------------------------
    // Change notification
    // -------------------------------------------------------------------------

    /// Register a callback run after every call that changes this control's
    /// state. Callbacks run in registration order.
    pub fn subscribe(&self, callback: impl Fn(&ControlState) + 'static) -> Subscription {
        let callback: Rc<Callback> = Rc::new(callback);
        self.subscribers.borrow_mut().push(Rc::downgrade(&callback));
        Subscription {
            _callback: callback,
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .borrow()
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }

    /// Increments once per state-changing call.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    /// Each callback sees the state as it is when it runs, so an earlier
    /// callback that mutates the control never leaves a later one stale.
    fn notify(&self) {
        let callbacks: Vec<Rc<Callback>> = {
            let mut subscribers = self.subscribers.borrow_mut();
            subscribers.retain(|w| w.strong_count() > 0);
            subscribers.iter().filter_map(Weak::upgrade).collect()
        };
        for callback in callbacks {
            callback(&self.state());
        }
    }

    // -------------------------------------------------------------------------
    // Readers
    // -------------------------------------------------------------------------

    /// Borrow the current state for the duration of `f`.
    pub fn with_state<R>(&self, f: impl FnOnce(&ControlState) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Clone the current state.
    #[must_use]
    pub fn state(&self) -> ControlState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn initial_value(&self) -> &str {
        &self.initial_value
    }

    #[must_use]
    pub fn validators(&self) -> &[Box<dyn Validator>] {
        &self.validators
    }

    #[must_use]
    pub fn value(&self) -> String {
        self.with_state(|s| s.value.clone())
    }

    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.with_state(|s| s.errors.clone())
    }

    #[must_use]
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.with_state(ControlState::error_kind)
    }

    #[must_use]
    pub fn error_kinds(&self) -> Vec<ErrorKind> {
        self.with_state(|s| s.error_kinds.clone())
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.with_state(ControlState::is_valid)
    }

    #[must_use]
    pub fn first_error(&self) -> Option<String> {
        self.with_state(|s| s.first_error().map(str::to_string))
    }

    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.with_state(|s| s.last_error().map(str::to_string))
    }

    #[must_use]
    pub fn touched(&self) -> bool {
        self.with_state(|s| s.touched)
    }

    #[must_use]
    pub fn dirty(&self) -> bool {
        self.with_state(|s| s.dirty)
    }

    #[must_use]
    pub fn has_focus(&self) -> bool {
        self.with_state(|s| s.has_focus)
    }

    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.with_state(ControlState::is_pristine)
    }

    #[must_use]
    pub fn is_dirty_unfocused_error(&self) -> bool {
        self.with_state(ControlState::is_dirty_unfocused_error)
    }
}

impl fmt::Debug for FormControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormControl")
            .field("initial_value", &self.initial_value)
            .field("validators", &self.validators)
            .field("state", &self.state.borrow())
            .field("revision", &self.revision.get())
            .finish_non_exhaustive()
    }
}
