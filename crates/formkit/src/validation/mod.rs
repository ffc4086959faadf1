#![forbid(unsafe_code)]

//! Validation rules for form fields.
//!
//! This module provides:
//! - A core [`Validator`] trait judging a string value
//! - Fifteen built-in rules (required, lengths, email, phone, number, alpha,
//!   alphanumeric, URL, date, character-class counts, special char, no whitespace)
//! - [`Custom`] for closure-backed rules and [`ValidatorBuilder`] for ordered lists
//! - [`ErrorKind`], a closed tag identifying which rule failed
//!
//! # Example
//!
//! ```rust
//! use formkit::validation::{ErrorKind, MinLength, Required, Validator};
//!
//! let required = Required::new();
//! assert!(required.is_valid("hello"));
//! assert!(!required.is_valid("   "));
//!
//! let min = MinLength::new(8);
//! assert_eq!(min.message(), "Minimum 8 characters required");
//! assert_eq!(min.kind(), ErrorKind::MinLength);
//! ```

mod validators;

pub use validators::{
    // Built-in validators
    Alpha,
    Alphanumeric,
    ContainsDigit,
    ContainsLowercase,
    ContainsUppercase,
    Custom,
    Date,
    Email,
    // Core types
    ErrorKind,
    MaxLength,
    MinLength,
    NoWhiteSpaces,
    Number,
    Phone,
    Required,
    SpecialChar,
    Url,
    ValidationError,
    ValidationResult,
    Validator,
    // Builder
    ValidatorBuilder,
};
