#![forbid(unsafe_code)]

//! Core validation types and built-in validators.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use time::format_description::OwnedFormatItem;

use crate::error::{FormError, FormResult};

// ---------------------------------------------------------------------------
// ErrorKind
// ---------------------------------------------------------------------------

/// Identifies which rule rejected a value, independent of its message.
///
/// The built-in variants form a closed set. Caller-supplied rules report
/// themselves as [`ErrorKind::Custom`] with their own stable code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Required,
    MinLength,
    MaxLength,
    Email,
    Phone,
    Number,
    Alpha,
    Alphanumeric,
    Url,
    Date,
    ContainsUppercase,
    ContainsLowercase,
    ContainsDigit,
    SpecialChar,
    NoWhitespace,
    /// A rule defined outside this crate.
    Custom(&'static str),
}

impl ErrorKind {
    /// Stable code for programmatic handling and i18n lookup.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength => "min_length",
            Self::MaxLength => "max_length",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Number => "number",
            Self::Alpha => "alpha",
            Self::Alphanumeric => "alphanumeric",
            Self::Url => "url",
            Self::Date => "date",
            Self::ContainsUppercase => "contains_uppercase",
            Self::ContainsLowercase => "contains_lowercase",
            Self::ContainsDigit => "contains_digit",
            Self::SpecialChar => "special_char",
            Self::NoWhitespace => "no_whitespace",
            Self::Custom(code) => code,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// A single rule failure: which rule failed and what to tell the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Kind of the failing rule.
    pub kind: ErrorKind,
    /// Human-readable message, already interpolated.
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// ValidationResult
// ---------------------------------------------------------------------------

/// The result of a validation operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationResult {
    /// The value is valid.
    #[default]
    Valid,
    /// The value is invalid with an error.
    Invalid(ValidationError),
}

impl ValidationResult {
    /// Returns `true` if the result is `Valid`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns `true` if the result is `Invalid`.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Returns the error if the result is `Invalid`, otherwise `None`.
    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Validator Trait
// ---------------------------------------------------------------------------

/// A stateless rule that judges a string value.
///
/// Implementations must be total: any input, however malformed, yields
/// `true` or `false` and never panics.
///
/// # Implementing a Custom Validator
///
/// ```rust
/// use formkit::validation::{ErrorKind, Validator};
///
/// struct NoDigits;
///
/// impl Validator for NoDigits {
///     fn is_valid(&self, value: &str) -> bool {
///         !value.chars().any(|c| c.is_ascii_digit())
///     }
///
///     fn message(&self) -> &str {
///         "Must not contain digits"
///     }
///
///     fn kind(&self) -> ErrorKind {
///         ErrorKind::Custom("no_digits")
///     }
/// }
///
/// assert!(NoDigits.validate("abc").is_valid());
/// assert!(NoDigits.validate("abc1").is_invalid());
/// ```
pub trait Validator: Send + Sync {
    /// Returns `true` if `value` satisfies this rule.
    fn is_valid(&self, value: &str) -> bool;

    /// Message reported when the rule fails.
    fn message(&self) -> &str;

    /// Kind reported when the rule fails.
    fn kind(&self) -> ErrorKind;

    /// Validate the given value.
    fn validate(&self, value: &str) -> ValidationResult {
        if self.is_valid(value) {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(ValidationError::new(self.kind(), self.message()))
        }
    }
}

impl fmt::Debug for dyn Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("kind", &self.kind())
            .field("message", &self.message())
            .finish()
    }
}

/// Replace `{key}` in `template` with `value`.
fn interpolate(template: &str, key: &str, value: impl fmt::Display) -> String {
    template.replace(&format!("{{{key}}}"), &value.to_string())
}

// ---------------------------------------------------------------------------
// Built-in Validators
// ---------------------------------------------------------------------------

/// Validates that a string is not empty.
///
/// Whitespace-only strings are considered empty.
#[derive(Debug, Clone)]
pub struct Required {
    message: String,
}

impl Required {
    pub const DEFAULT_MESSAGE: &'static str = "This field is required";

    /// Create a new `Required` validator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            message: Self::DEFAULT_MESSAGE.to_string(),
        }
    }

    /// Set a custom error message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl Default for Required {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for Required {
    fn is_valid(&self, value: &str) -> bool {
        !value.trim().is_empty()
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Required
    }
}

/// Validates that a string has at least `min` characters.
#[derive(Debug, Clone)]
pub struct MinLength {
    /// Minimum number of characters required.
    pub min: usize,
    message: String,
}

impl MinLength {
    pub const DEFAULT_MESSAGE: &'static str = "Minimum {min} characters required";

    /// Create a new `MinLength` validator.
    #[must_use]
    pub fn new(min: usize) -> Self {
        Self {
            min,
            message: interpolate(Self::DEFAULT_MESSAGE, "min", min),
        }
    }

    /// Set a custom error message. `{min}` is substituted.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = interpolate(&message.into(), "min", self.min);
        self
    }
}

impl Validator for MinLength {
    fn is_valid(&self, value: &str) -> bool {
        value.chars().count() >= self.min
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::MinLength
    }
}

/// Validates that a string has at most `max` characters.
#[derive(Debug, Clone)]
pub struct MaxLength {
    /// Maximum number of characters allowed.
    pub max: usize,
    message: String,
}

impl MaxLength {
    pub const DEFAULT_MESSAGE: &'static str = "Maximum {max} characters allowed";

    /// Create a new `MaxLength` validator.
    #[must_use]
    pub fn new(max: usize) -> Self {
        Self {
            max,
            message: interpolate(Self::DEFAULT_MESSAGE, "max", max),
        }
    }

    /// Set a custom error message. `{max}` is substituted.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = interpolate(&message.into(), "max", self.max);
        self
    }
}

impl Validator for MaxLength {
    fn is_valid(&self, value: &str) -> bool {
        value.chars().count() <= self.max
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::MaxLength
    }
}

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9+._%\-]{1,256}@[A-Za-z0-9][A-Za-z0-9\-]{0,64}(\.[A-Za-z0-9][A-Za-z0-9\-]{0,25})+$",
    )
    .unwrap_or_else(|e| unreachable!("email pattern is a valid literal: {e}"))
});

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[0-9]{10,15}$")
        .unwrap_or_else(|e| unreachable!("phone pattern is a valid literal: {e}"))
});

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:https?|ftp)://)?(?:[A-Za-z0-9](?:[A-Za-z0-9\-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}(?::[0-9]{1,5})?(?:[/?#][^\s]*)?$",
    )
    .unwrap_or_else(|e| unreachable!("url pattern is a valid literal: {e}"))
});

/// Declares a parameterless rule backed by a predicate.
macro_rules! simple_rule {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:expr, $default:literal, |$value:ident| $check:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            message: String,
        }

        impl $name {
            pub const DEFAULT_MESSAGE: &'static str = $default;

            #[doc = concat!("Create a new `", stringify!($name), "` validator.")]
            #[must_use]
            pub fn new() -> Self {
                Self {
                    message: Self::DEFAULT_MESSAGE.to_string(),
                }
            }

            /// Set a custom error message.
            #[must_use]
            pub fn with_message(mut self, message: impl Into<String>) -> Self {
                self.message = message.into();
                self
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Validator for $name {
            fn is_valid(&self, $value: &str) -> bool {
                $check
            }

            fn message(&self) -> &str {
                &self.message
            }

            fn kind(&self) -> ErrorKind {
                $kind
            }
        }
    };
}

simple_rule! {
    /// Validates that a string is an email address (`local@domain.tld`).
    Email, ErrorKind::Email, "Invalid email address",
    |value| EMAIL_REGEX.is_match(value)
}

simple_rule! {
    /// Validates a phone number: an optional leading `+` and 10 to 15 digits.
    Phone, ErrorKind::Phone, "Invalid phone number",
    |value| PHONE_REGEX.is_match(value)
}

simple_rule! {
    /// Validates that a string parses as a floating-point number.
    ///
    /// Surrounding whitespace is ignored.
    Number, ErrorKind::Number, "Must be a valid number",
    |value| value.trim().parse::<f64>().is_ok()
}

simple_rule! {
    /// Validates that a string is one or more alphabetic characters.
    Alpha, ErrorKind::Alpha, "Only alphabetic characters are allowed",
    |value| !value.is_empty() && value.chars().all(char::is_alphabetic)
}

simple_rule! {
    /// Validates that a string is one or more letters or digits.
    Alphanumeric, ErrorKind::Alphanumeric, "Only letters and digits are allowed",
    |value| !value.is_empty() && value.chars().all(char::is_alphanumeric)
}

simple_rule! {
    /// Validates that a string is a web URL.
    ///
    /// The scheme is optional; when present it must be `http`, `https` or `ftp`.
    Url, ErrorKind::Url, "Invalid URL",
    |value| URL_REGEX.is_match(value)
}

simple_rule! {
    /// Validates that a string contains at least one character that is
    /// neither a letter nor a digit.
    SpecialChar, ErrorKind::SpecialChar, "Must contain at least one special character",
    |value| value.chars().any(|c| !c.is_alphanumeric())
}

simple_rule! {
    /// Validates that a string contains no whitespace.
    NoWhiteSpaces, ErrorKind::NoWhitespace, "Must not contain whitespace",
    |value| !value.chars().any(char::is_whitespace)
}

/// Validates that a string is a date in a fixed format.
///
/// The format uses the `time` crate's format-description syntax, e.g.
/// `[day]/[month]/[year]` (the default).
#[derive(Debug, Clone)]
pub struct Date {
    format: String,
    description: OwnedFormatItem,
    message: String,
}

impl Date {
    pub const DEFAULT_FORMAT: &'static str = "[day]/[month]/[year]";
    pub const DEFAULT_MESSAGE: &'static str = "Invalid date, expected {format}";

    /// Create a `Date` validator using [`Date::DEFAULT_FORMAT`].
    pub fn new() -> FormResult<Self> {
        Self::with_format(Self::DEFAULT_FORMAT)
    }

    /// Create a `Date` validator for a custom format description.
    pub fn with_format(format: impl Into<String>) -> FormResult<Self> {
        let format = format.into();
        let description = time::format_description::parse_owned::<2>(&format).map_err(|e| {
            FormError::InvalidDateFormat {
                format: format.clone(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            message: interpolate(Self::DEFAULT_MESSAGE, "format", &format),
            format,
            description,
        })
    }

    /// Set a custom error message. `{format}` is substituted.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = interpolate(&message.into(), "format", &self.format);
        self
    }

    /// The format description this validator parses with.
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }
}

impl Validator for Date {
    fn is_valid(&self, value: &str) -> bool {
        time::Date::parse(value, &self.description).is_ok()
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Date
    }
}

/// Declares a rule requiring at least `min` characters of a class.
macro_rules! count_rule {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:expr, $default:literal, $class:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            /// Minimum number of matching characters (at least 1).
            pub min: usize,
            message: String,
        }

        impl $name {
            pub const DEFAULT_MESSAGE: &'static str = $default;

            #[doc = concat!("Create a new `", stringify!($name), "` validator. A `min` of 0 is raised to 1.")]
            #[must_use]
            pub fn new(min: usize) -> Self {
                let min = min.max(1);
                Self {
                    min,
                    message: interpolate(Self::DEFAULT_MESSAGE, "min", min),
                }
            }

            /// Set a custom error message. `{min}` is substituted.
            #[must_use]
            pub fn with_message(mut self, message: impl Into<String>) -> Self {
                self.message = interpolate(&message.into(), "min", self.min);
                self
            }
        }

        impl Validator for $name {
            fn is_valid(&self, value: &str) -> bool {
                let class: fn(char) -> bool = $class;
                value.chars().filter(|&c| class(c)).count() >= self.min
            }

            fn message(&self) -> &str {
                &self.message
            }

            fn kind(&self) -> ErrorKind {
                $kind
            }
        }
    };
}

count_rule! {
    /// Validates that a string contains at least `min` uppercase characters.
    ContainsUppercase, ErrorKind::ContainsUppercase,
    "Must contain at least {min} uppercase character(s)", char::is_uppercase
}

count_rule! {
    /// Validates that a string contains at least `min` lowercase characters.
    ContainsLowercase, ErrorKind::ContainsLowercase,
    "Must contain at least {min} lowercase character(s)", char::is_lowercase
}

count_rule! {
    /// Validates that a string contains at least `min` digits.
    ContainsDigit, ErrorKind::ContainsDigit,
    "Must contain at least {min} digit(s)", char::is_numeric
}

/// A caller-defined rule backed by a closure.
pub struct Custom {
    code: &'static str,
    message: String,
    check: Box<dyn Fn(&str) -> bool + Send + Sync>,
}

impl Custom {
    /// Create a custom rule reported as [`ErrorKind::Custom`]`(code)`.
    pub fn new(
        code: &'static str,
        message: impl Into<String>,
        check: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            check: Box::new(check),
        }
    }
}

impl Validator for Custom {
    fn is_valid(&self, value: &str) -> bool {
        (self.check)(value)
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::Custom(self.code)
    }
}

impl fmt::Debug for Custom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom")
            .field("code", &self.code)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// ValidatorBuilder
// ---------------------------------------------------------------------------

/// A builder for an ordered validator list.
///
/// Order matters: a field reports failures in the order its validators were
/// added, and its single error kind comes from the first failure.
///
/// # Example
///
/// ```rust
/// use formkit::validation::ValidatorBuilder;
///
/// let validators = ValidatorBuilder::new()
///     .required()
///     .min_length(3)
///     .max_length(20)
///     .build();
///
/// assert_eq!(validators.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct ValidatorBuilder {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidatorBuilder {
    /// Create a new empty validator builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add any validator.
    #[must_use]
    pub fn custom(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Finish, yielding the validators in insertion order.
    #[must_use]
    pub fn build(self) -> Vec<Box<dyn Validator>> {
        self.validators
    }

    #[must_use]
    pub fn required(self) -> Self {
        self.custom(Required::new())
    }

    #[must_use]
    pub fn min_length(self, min: usize) -> Self {
        self.custom(MinLength::new(min))
    }

    #[must_use]
    pub fn max_length(self, max: usize) -> Self {
        self.custom(MaxLength::new(max))
    }

    #[must_use]
    pub fn email(self) -> Self {
        self.custom(Email::new())
    }

    #[must_use]
    pub fn phone(self) -> Self {
        self.custom(Phone::new())
    }

    #[must_use]
    pub fn number(self) -> Self {
        self.custom(Number::new())
    }

    #[must_use]
    pub fn alpha(self) -> Self {
        self.custom(Alpha::new())
    }

    #[must_use]
    pub fn alphanumeric(self) -> Self {
        self.custom(Alphanumeric::new())
    }

    #[must_use]
    pub fn url(self) -> Self {
        self.custom(Url::new())
    }

    /// Add a `Date` validator with the default format.
    pub fn date(self) -> FormResult<Self> {
        Ok(self.custom(Date::new()?))
    }

    /// Add a `Date` validator with a custom format description.
    pub fn date_with_format(self, format: impl Into<String>) -> FormResult<Self> {
        Ok(self.custom(Date::with_format(format)?))
    }

    #[must_use]
    pub fn contains_uppercase(self, min: usize) -> Self {
        self.custom(ContainsUppercase::new(min))
    }

    #[must_use]
    pub fn contains_lowercase(self, min: usize) -> Self {
        self.custom(ContainsLowercase::new(min))
    }

    #[must_use]
    pub fn contains_digit(self, min: usize) -> Self {
        self.custom(ContainsDigit::new(min))
    }

    #[must_use]
    pub fn special_char(self) -> Self {
        self.custom(SpecialChar::new())
    }

    #[must_use]
    pub fn no_white_spaces(self) -> Self {
        self.custom(NoWhiteSpaces::new())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ErrorKind tests --

    #[test]
    fn error_kind_codes_are_stable() {
        assert_eq!(ErrorKind::Required.code(), "required");
        assert_eq!(ErrorKind::MinLength.code(), "min_length");
        assert_eq!(ErrorKind::NoWhitespace.code(), "no_whitespace");
        assert_eq!(ErrorKind::Custom("zip").code(), "zip");
        assert_eq!(ErrorKind::ContainsDigit.to_string(), "contains_digit");
    }

    // -- ValidationResult tests --

    #[test]
    fn validation_result_accessors() {
        let valid = ValidationResult::Valid;
        assert!(valid.is_valid());
        assert!(valid.error().is_none());

        let invalid = ValidationResult::Invalid(ValidationError::new(ErrorKind::Email, "bad"));
        assert!(invalid.is_invalid());
        assert_eq!(invalid.error().unwrap().kind, ErrorKind::Email);
        assert_eq!(invalid.error().unwrap().to_string(), "bad");
    }

    #[test]
    fn validate_packages_kind_and_message() {
        let result = MinLength::new(8).validate("abc");
        assert_eq!(
            result,
            ValidationResult::Invalid(ValidationError::new(
                ErrorKind::MinLength,
                "Minimum 8 characters required"
            ))
        );
    }

    // -- Required tests --

    #[test]
    fn required_empty_fails() {
        assert!(!Required::new().is_valid(""));
    }

    #[test]
    fn required_whitespace_only_fails() {
        let v = Required::new();
        assert!(!v.is_valid("   "));
        assert!(!v.is_valid("\t\n"));
    }

    #[test]
    fn required_non_empty_passes() {
        let v = Required::new();
        assert!(v.is_valid("hello"));
        assert!(v.is_valid("  hello  "));
    }

    #[test]
    fn required_custom_message() {
        let v = Required::new().with_message("Name please");
        assert_eq!(v.message(), "Name please");
    }

    // -- Length tests --

    #[test]
    fn min_length_boundary() {
        let v = MinLength::new(3);
        assert!(!v.is_valid("ab"));
        assert!(v.is_valid("abc"));
        assert!(v.is_valid("abcd"));
    }

    #[test]
    fn min_length_unicode() {
        let v = MinLength::new(4);
        assert!(v.is_valid("café"));
        assert!(!v.is_valid("caf"));
        assert!(MinLength::new(1).is_valid("🎉"));
    }

    #[test]
    fn min_length_message_interpolates() {
        assert_eq!(MinLength::new(8).message(), "Minimum 8 characters required");
        let v = MinLength::new(5).with_message("Need {min}+ chars");
        assert_eq!(v.message(), "Need 5+ chars");
    }

    #[test]
    fn custom_messages_accept_owned_strings() {
        let owned = |s: &str| s.to_string();
        assert_eq!(Required::new().with_message(owned("r")).message(), "r");
        assert_eq!(Email::new().with_message(owned("e")).message(), "e");
        assert_eq!(
            MaxLength::new(2).with_message(owned("max {max}")).message(),
            "max 2"
        );
        assert_eq!(
            ContainsDigit::new(3).with_message(owned("{min} digits")).message(),
            "3 digits"
        );
        let date = Date::new().unwrap().with_message(owned("use {format}"));
        assert_eq!(date.message(), "use [day]/[month]/[year]");
    }

    #[test]
    fn max_length_boundary() {
        let v = MaxLength::new(3);
        assert!(v.is_valid("ab"));
        assert!(v.is_valid("abc"));
        assert!(!v.is_valid("abcd"));
        assert_eq!(v.message(), "Maximum 3 characters allowed");
    }

    #[test]
    fn zero_max_length() {
        let v = MaxLength::new(0);
        assert!(v.is_valid(""));
        assert!(!v.is_valid("a"));
    }

    // -- Email tests --

    #[test]
    fn email_valid() {
        let v = Email::new();
        assert!(v.is_valid("user@example.com"));
        assert!(v.is_valid("user.name@example.co.uk"));
        assert!(v.is_valid("user+tag@example.org"));
    }

    #[test]
    fn email_invalid() {
        let v = Email::new();
        assert!(!v.is_valid(""));
        assert!(!v.is_valid("not-an-email"));
        assert!(!v.is_valid("@example.com"));
        assert!(!v.is_valid("user@"));
        assert!(!v.is_valid("user@example"));
        assert!(!v.is_valid("user@.com"));
        assert!(!v.is_valid("us er@example.com"));
    }

    // -- Phone tests --

    #[test]
    fn phone_digit_bounds() {
        let v = Phone::new();
        assert!(v.is_valid("0123456789"));
        assert!(v.is_valid("+441234567890"));
        assert!(v.is_valid("123456789012345"));
        assert!(!v.is_valid("123456789"));
        assert!(!v.is_valid("1234567890123456"));
    }

    #[test]
    fn phone_rejects_non_digits() {
        let v = Phone::new();
        assert!(!v.is_valid("555-123-4567"));
        assert!(!v.is_valid("++1234567890"));
        assert!(!v.is_valid("12345abcde"));
    }

    // -- Number tests --

    #[test]
    fn number_parses_floats() {
        let v = Number::new();
        assert!(v.is_valid("42"));
        assert!(v.is_valid("-3.5"));
        assert!(v.is_valid("1e10"));
        assert!(v.is_valid(" 7 "));
        assert!(!v.is_valid(""));
        assert!(!v.is_valid("12abc"));
        assert!(!v.is_valid("1.2.3"));
    }

    // -- Character class tests --

    #[test]
    fn alpha_requires_letters_only() {
        let v = Alpha::new();
        assert!(v.is_valid("abc"));
        assert!(v.is_valid("Zoë"));
        assert!(!v.is_valid(""));
        assert!(!v.is_valid("abc1"));
        assert!(!v.is_valid("ab c"));
    }

    #[test]
    fn alphanumeric_requires_letters_or_digits() {
        let v = Alphanumeric::new();
        assert!(v.is_valid("abc123"));
        assert!(!v.is_valid(""));
        assert!(!v.is_valid("abc_123"));
    }

    #[test]
    fn contains_counts() {
        assert!(ContainsUppercase::new(2).is_valid("ABc"));
        assert!(!ContainsUppercase::new(2).is_valid("Abc"));
        assert!(ContainsLowercase::new(1).is_valid("ABc"));
        assert!(!ContainsLowercase::new(1).is_valid("ABC"));
        assert!(ContainsDigit::new(3).is_valid("a1b2c3"));
        assert!(!ContainsDigit::new(3).is_valid("a1b2"));
    }

    #[test]
    fn contains_min_is_at_least_one() {
        let v = ContainsDigit::new(0);
        assert_eq!(v.min, 1);
        assert!(!v.is_valid("abc"));
        assert_eq!(v.message(), "Must contain at least 1 digit(s)");
    }

    #[test]
    fn special_char_and_whitespace() {
        let special = SpecialChar::new();
        assert!(special.is_valid("pass!"));
        assert!(special.is_valid("pass word"));
        assert!(!special.is_valid("password1"));

        let no_ws = NoWhiteSpaces::new();
        assert!(no_ws.is_valid("nospace"));
        assert!(no_ws.is_valid(""));
        assert!(!no_ws.is_valid("has space"));
        assert!(!no_ws.is_valid("tab\there"));
    }

    // -- Url tests --

    #[test]
    fn url_valid() {
        let v = Url::new();
        assert!(v.is_valid("http://example.com"));
        assert!(v.is_valid("https://example.com/path?query=1"));
        assert!(v.is_valid("example.org"));
        assert!(v.is_valid("https://sub.example.co.uk:8080/a#frag"));
    }

    #[test]
    fn url_invalid() {
        let v = Url::new();
        assert!(!v.is_valid(""));
        assert!(!v.is_valid("not a url"));
        assert!(!v.is_valid("http://"));
        assert!(!v.is_valid("mailto://example.com"));
    }

    // -- Date tests --

    #[test]
    fn date_default_format() {
        let v = Date::new().unwrap();
        assert!(v.is_valid("31/12/2024"));
        assert!(v.is_valid("29/02/2024"));
        assert!(!v.is_valid("29/02/2023"));
        assert!(!v.is_valid("2024-12-31"));
        assert!(!v.is_valid(""));
        assert_eq!(v.message(), "Invalid date, expected [day]/[month]/[year]");
    }

    #[test]
    fn date_custom_format() {
        let v = Date::with_format("[year]-[month]-[day]").unwrap();
        assert!(v.is_valid("2024-12-31"));
        assert!(!v.is_valid("31/12/2024"));
    }

    #[test]
    fn date_malformed_format_is_an_error() {
        let err = Date::with_format("[nonsense]").unwrap_err();
        assert!(matches!(err, FormError::InvalidDateFormat { .. }));
    }

    // -- Custom tests --

    #[test]
    fn custom_rule_reports_its_code() {
        let v = Custom::new("even_length", "Length must be even", |s| {
            s.chars().count() % 2 == 0
        });
        assert!(v.is_valid("ab"));
        let result = v.validate("abc");
        assert_eq!(result.error().unwrap().kind, ErrorKind::Custom("even_length"));
    }

    // -- ValidatorBuilder tests --

    #[test]
    fn builder_keeps_insertion_order() {
        let validators = ValidatorBuilder::new()
            .required()
            .min_length(8)
            .contains_digit(1)
            .build();
        let kinds: Vec<ErrorKind> = validators.iter().map(|v| v.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ErrorKind::Required,
                ErrorKind::MinLength,
                ErrorKind::ContainsDigit
            ]
        );
    }

    #[test]
    fn builder_date_propagates_format_error() {
        assert!(ValidatorBuilder::new().date().is_ok());
        assert!(ValidatorBuilder::new().date_with_format("[bogus").is_err());
    }
}
