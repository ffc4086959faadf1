//! Form state and validation.
//!
//! `formkit` tracks the value, interaction history and validation outcome of
//! individual inputs, and aggregates named inputs into a form with combined
//! validity and error reporting. Rendering is left to the caller: a UI layer
//! reads control state, forwards edits through `set` and focus events through
//! `on_focus_change`, and re-renders when a control's revision changes or its
//! subscription fires.
//!
//! # Key Components
//!
//! - [`validation`] - the [`Validator`](validation::Validator) capability and built-in rules
//! - [`FormControl`] - per-field state machine (value, touched, dirty, focus, errors)
//! - [`FormBuilder`] - fixed group of named controls with aggregate views
//! - [`FormGroup`] - composition trait for named forms wrapping a `FormBuilder`
//! - `schema` - JSON form definitions (feature `schema`)
//!
//! # Validation timing
//!
//! A control validates when it is first blurred, whenever its value changes
//! after that or after its first edit, and whenever [`FormControl::validate`]
//! or [`FormBuilder::validate`] is called. A control nobody has interacted
//! with shows no errors.
//!
//! # Logging
//!
//! Transitions are reported through `tracing` (`trace` for control
//! transitions, `debug` for ignored unknown field names and submit
//! validation). Install any subscriber to see them.

#![forbid(unsafe_code)]

pub mod builder;
pub mod control;
pub mod error;
#[cfg(feature = "schema")]
pub mod schema;
pub mod validation;

pub use builder::{FieldMap, FormBuilder, FormGroup};
pub use control::{ControlState, FormControl, Subscription};
pub use error::{FormError, FormResult};
#[cfg(feature = "schema")]
pub use schema::{FieldSchema, FormSchema, RuleSchema};
