//! Phone number validation and directory query.
//!
//! Expected failures (malformed input, unknown segment) are values, not
//! errors: callers receive a [`LookupOutcome`] and decide how to render
//! it. The query itself is a pure read against the immutable directory.

use std::fmt;

use serde::Serialize;

use crate::directory::{PhoneDirectory, PhoneNumberInfo};

/// Length of the segment prefix used as the directory key.
const SEGMENT_LEN: usize = 7;

/// Length of a well-formed phone number.
const PHONE_NUMBER_LEN: usize = 11;

/// Outcome of a phone number lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The number validated and its segment is in the directory.
    Found(PhoneNumberInfo),
    /// The number failed validation, or its segment is unknown.
    Rejected(LookupRejection),
}

/// Expected, user-facing reasons a lookup does not produce a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupRejection {
    /// Input was empty or whitespace-only.
    Empty,
    /// Input was not exactly 11 characters.
    WrongLength,
    /// Input did not start with '1'.
    WrongLeadingDigit,
    /// Input contained a non-digit character.
    NonDigit,
    /// Input was well-formed but its segment is not in the directory.
    UnknownSegment,
}

impl LookupRejection {
    /// Stable label for metrics and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::WrongLength => "wrong_length",
            Self::WrongLeadingDigit => "wrong_leading_digit",
            Self::NonDigit => "non_digit",
            Self::UnknownSegment => "unknown_segment",
        }
    }
}

impl fmt::Display for LookupRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::Empty => "phone number must not be empty",
            Self::WrongLength => "phone number must be 11 digits",
            Self::WrongLeadingDigit => "phone number must start with 1",
            Self::NonDigit => "phone number must contain only digits",
            Self::UnknownSegment => "no carrier information found for this phone number",
        };
        f.write_str(message)
    }
}

/// Resolve a phone number to its carrier/geography record.
///
/// Validation checks run in a fixed order and short-circuit on the
/// first violation: emptiness, length, leading digit, digits-only.
/// Input is taken literally; no trimming or separator stripping is
/// performed beyond the whitespace-emptiness check.
pub fn lookup_phone_number(directory: &PhoneDirectory, input: &str) -> LookupOutcome {
    if input.trim().is_empty() {
        return LookupOutcome::Rejected(LookupRejection::Empty);
    }

    if input.chars().count() != PHONE_NUMBER_LEN {
        return LookupOutcome::Rejected(LookupRejection::WrongLength);
    }

    if !input.starts_with('1') {
        return LookupOutcome::Rejected(LookupRejection::WrongLeadingDigit);
    }

    if !input.chars().all(|c| c.is_ascii_digit()) {
        return LookupOutcome::Rejected(LookupRejection::NonDigit);
    }

    // All characters are ASCII digits, so byte slicing is safe here.
    let segment = &input[..SEGMENT_LEN];

    match directory.get(segment) {
        Some(info) => LookupOutcome::Found(info.clone()),
        None => LookupOutcome::Rejected(LookupRejection::UnknownSegment),
    }
}
