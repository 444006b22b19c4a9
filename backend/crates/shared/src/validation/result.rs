//! Validation Result - ordered field-level failures
//!
//! [`ValidationResult`] is the uniform currency passed between validators,
//! domain types and the error layer: an ordered list of
//! [`ValidationErrorDetails`], valid exactly when the list is empty.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// One segment of the path identifying a failing field.
///
/// Serializes untagged, so a path such as `("address", "to_addresses", 0)`
/// renders as `["address", "to_addresses", 0]` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum LocSegment {
    /// A named field.
    Field(Cow<'static, str>),
    /// An index into a sequence field.
    Index(usize),
}

impl From<&'static str> for LocSegment {
    fn from(name: &'static str) -> Self {
        LocSegment::Field(Cow::Borrowed(name))
    }
}

impl From<String> for LocSegment {
    fn from(name: String) -> Self {
        LocSegment::Field(Cow::Owned(name))
    }
}

impl From<usize> for LocSegment {
    fn from(index: usize) -> Self {
        LocSegment::Index(index)
    }
}

impl fmt::Display for LocSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocSegment::Field(name) => f.write_str(name),
            LocSegment::Index(index) => write!(f, "{}", index),
        }
    }
}

/// A single field-level validation failure: where it happened and why.
///
/// Equality is by value; outer layers map one instance onto one entry of a
/// field-error list, using `loc` as the field path and `msg` as the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrorDetails {
    loc: Vec<LocSegment>,
    msg: String,
}

impl ValidationErrorDetails {
    /// Build a failure from a full field path.
    pub fn new<L, S>(loc: L, msg: impl Into<String>) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<LocSegment>,
    {
        Self {
            loc: loc.into_iter().map(Into::into).collect(),
            msg: msg.into(),
        }
    }

    /// Build a failure for a single named field.
    pub fn field(name: &'static str, msg: impl Into<String>) -> Self {
        Self {
            loc: vec![LocSegment::from(name)],
            msg: msg.into(),
        }
    }

    /// The path of the failing field, outermost segment first.
    pub fn loc(&self) -> &[LocSegment] {
        &self.loc
    }

    /// Human-readable failure message.
    pub fn msg(&self) -> &str {
        &self.msg
    }

    /// The path rendered as a dotted string, e.g. `address.to_addresses.0`.
    pub fn path(&self) -> String {
        self.loc
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// Outcome of validating one candidate.
///
/// Errors keep insertion order (evaluation order) and merging preserves
/// duplicates across sub-results. The result is valid exactly when the
/// error list is empty, so an "invalid but empty" result is unrepresentable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<ValidationErrorDetails>,
}

impl ValidationResult {
    /// A passing result with no errors.
    pub fn valid() -> Self {
        Self { errors: Vec::new() }
    }

    /// A failing result carrying the given errors.
    pub fn invalid(errors: Vec<ValidationErrorDetails>) -> Self {
        Self { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The collected failures, in evaluation order.
    pub fn errors(&self) -> &[ValidationErrorDetails] {
        &self.errors
    }

    /// Append one failure.
    pub fn push(&mut self, error: ValidationErrorDetails) {
        self.errors.push(error);
    }

    /// Append the rule outcome of a single field check.
    pub fn check(&mut self, outcome: Option<ValidationErrorDetails>) {
        if let Some(error) = outcome {
            self.errors.push(error);
        }
    }

    /// Concatenate two results: `self`'s errors first, then `other`'s.
    ///
    /// Merge is associative and [`ValidationResult::valid`] is its identity.
    #[must_use]
    pub fn merge(mut self, other: ValidationResult) -> Self {
        self.errors.extend(other.errors);
        self
    }

    pub fn into_errors(self) -> Vec<ValidationErrorDetails> {
        self.errors
    }
}
