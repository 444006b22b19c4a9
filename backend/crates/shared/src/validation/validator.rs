//! Validator contract
//!
//! A validator evaluates a fixed rule set against a candidate and reports
//! every rule violation as one entry of the returned result. Rule failures
//! never panic and never come back as an `Err`: the result itself is the
//! report. Validators are stateless and may be constructed fresh per call.

use crate::validation::result::ValidationResult;

/// Capability for judging a candidate against a fixed rule set.
pub trait Validator {
    /// The type this validator knows how to judge.
    type Candidate: ?Sized;

    /// Evaluate every rule and collect the failures in evaluation order.
    fn validate(&self, candidate: &Self::Candidate) -> ValidationResult;
}
