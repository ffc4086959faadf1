#![forbid(unsafe_code)]

//! Declarative form configuration.
//!
//! A [`FormSchema`] lists fields with their initial values and ordered rules,
//! and builds a ready [`FormBuilder`]. Schemas are plain serde types, so they
//! can be loaded from JSON shipped alongside an application.
//!
//! ```json
//! {
//!   "fields": [
//!     { "name": "email", "validators": [{ "rule": "required" }, { "rule": "email" }] },
//!     { "name": "password", "validators": [
//!         { "rule": "required" },
//!         { "rule": "min_length", "min": 8, "message": "At least {min} characters" }
//!     ] }
//!   ]
//! }
//! ```
//!
//! Feature-gated under `schema`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::builder::FormBuilder;
use crate::control::FormControl;
use crate::error::{FormError, FormResult};
use crate::validation::{
    Alpha, Alphanumeric, ContainsDigit, ContainsLowercase, ContainsUppercase, Date, Email,
    MaxLength, MinLength, NoWhiteSpaces, Number, Phone, Required, SpecialChar, Url, Validator,
};

/// An ordered list of field definitions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormSchema {
    pub fields: Vec<FieldSchema>,
}

/// One field: its name, initial value and rules in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    #[serde(default)]
    pub initial: String,
    #[serde(default)]
    pub validators: Vec<RuleSchema>,
}

fn one() -> usize {
    1
}

/// A serialized rule. `message` overrides the default message and may use
/// the same `{param}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleSchema {
    Required {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    MinLength {
        min: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    MaxLength {
        max: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Email {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Phone {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Alpha {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Alphanumeric {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Url {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Date {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    ContainsUppercase {
        #[serde(default = "one")]
        min: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    ContainsLowercase {
        #[serde(default = "one")]
        min: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    ContainsDigit {
        #[serde(default = "one")]
        min: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    SpecialChar {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    NoWhiteSpaces {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

macro_rules! boxed {
    ($validator:expr, $message:expr) => {{
        let validator = $validator;
        match $message {
            Some(message) => Box::new(validator.with_message(message.as_str())) as Box<dyn Validator>,
            None => Box::new(validator) as Box<dyn Validator>,
        }
    }};
}

impl RuleSchema {
    /// Instantiate the rule.
    pub fn to_validator(&self) -> FormResult<Box<dyn Validator>> {
        let validator = match self {
            Self::Required { message } => boxed!(Required::new(), message),
            Self::MinLength { min, message } => boxed!(MinLength::new(*min), message),
            Self::MaxLength { max, message } => boxed!(MaxLength::new(*max), message),
            Self::Email { message } => boxed!(Email::new(), message),
            Self::Phone { message } => boxed!(Phone::new(), message),
            Self::Number { message } => boxed!(Number::new(), message),
            Self::Alpha { message } => boxed!(Alpha::new(), message),
            Self::Alphanumeric { message } => boxed!(Alphanumeric::new(), message),
            Self::Url { message } => boxed!(Url::new(), message),
            Self::Date { format, message } => {
                let date = match format {
                    Some(format) => Date::with_format(format.as_str())?,
                    None => Date::new()?,
                };
                boxed!(date, message)
            }
            Self::ContainsUppercase { min, message } => {
                boxed!(ContainsUppercase::new(*min), message)
            }
            Self::ContainsLowercase { min, message } => {
                boxed!(ContainsLowercase::new(*min), message)
            }
            Self::ContainsDigit { min, message } => boxed!(ContainsDigit::new(*min), message),
            Self::SpecialChar { message } => boxed!(SpecialChar::new(), message),
            Self::NoWhiteSpaces { message } => boxed!(NoWhiteSpaces::new(), message),
        };
        Ok(validator)
    }
}

impl FieldSchema {
    /// Build the control for this field.
    pub fn to_control(&self) -> FormResult<FormControl> {
        let validators = self
            .validators
            .iter()
            .map(RuleSchema::to_validator)
            .collect::<FormResult<Vec<_>>>()?;
        Ok(FormControl::new(self.initial.clone(), validators))
    }
}

impl FormSchema {
    /// Decode a schema from JSON.
    pub fn from_json(json: &str) -> FormResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode this schema as pretty-printed JSON.
    pub fn to_json(&self) -> FormResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the form. Fails on a repeated field name or a malformed date
    /// format.
    pub fn build(&self) -> FormResult<FormBuilder> {
        let mut seen = HashSet::new();
        let mut controls = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(FormError::DuplicateField(field.name.clone()));
            }
            controls.push((field.name.clone(), field.to_control()?));
        }
        tracing::debug!(fields = controls.len(), "built form from schema");
        Ok(FormBuilder::new(controls))
    }
}
