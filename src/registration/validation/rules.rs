//! Individual registration rule implementations.
//!
//! Each rule is a pure function over one field. Rules return `Ok(())` on
//! success or the [`FieldError`] whose message belongs in that field's error
//! slot.

use crate::registration::{error::FieldError, ports::validator::RegistrationPolicy};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

// Digits are ASCII-only; `\d` in `regex` would also accept other scripts.
#[expect(clippy::expect_used, reason = "pattern is a compile-time literal")]
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+358\s?[0-9]{2,3}\s?[0-9]{4,5}$").expect("valid phone pattern")
});

const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates that the name has enough parts of sufficient length.
///
/// The trimmed name is split on single spaces, so consecutive spaces yield
/// an empty part that fails the length check. Part length is measured in
/// UTF-16 code units, the unit browser form values are counted in.
///
/// # Errors
///
/// Returns [`FieldError::InvalidFullName`] if the name is empty, has too few
/// parts, or any part is too short.
///
/// # Examples
///
/// ```
/// use registration_form::registration::{
///     ports::validator::RegistrationPolicy, validation::rules::validate_full_name,
/// };
///
/// let policy = RegistrationPolicy::default();
/// assert!(validate_full_name("Ada Lovelace", &policy).is_ok());
/// assert!(validate_full_name("Ada", &policy).is_err());
/// ```
pub fn validate_full_name(full_name: &str, policy: &RegistrationPolicy) -> Result<(), FieldError> {
    let trimmed = full_name.trim();
    if trimmed.is_empty() {
        return Err(FieldError::InvalidFullName);
    }

    let parts: Vec<&str> = trimmed.split(' ').collect();
    let too_short = parts
        .iter()
        .any(|part| part.encode_utf16().count() < policy.min_name_part_chars);

    if parts.len() < policy.min_name_parts || too_short {
        return Err(FieldError::InvalidFullName);
    }
    Ok(())
}

/// Validates that the email is shaped like `local@domain.tld`.
///
/// # Errors
///
/// Returns [`FieldError::InvalidEmail`] if the trimmed value contains
/// whitespace, lacks exactly one `@` between non-empty parts, or has no `.`
/// after the `@`.
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if EMAIL_PATTERN.is_match(email.trim()) {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

/// Validates a Finnish phone number: `+358`, an optional space, two or three
/// digits, an optional space, then four or five digits.
///
/// # Errors
///
/// Returns [`FieldError::InvalidPhone`] if the trimmed value does not match.
pub fn validate_phone(phone: &str) -> Result<(), FieldError> {
    if PHONE_PATTERN.is_match(phone.trim()) {
        Ok(())
    } else {
        Err(FieldError::InvalidPhone)
    }
}

/// Validates that the birth date is present, not in the future, and old
/// enough as of `today`.
///
/// # Errors
///
/// Returns [`FieldError::MissingBirthDate`] when the value is empty or not a
/// `YYYY-MM-DD` date, [`FieldError::BirthDateInFuture`] when it lies after
/// `today`, or [`FieldError::Underage`] when the age is below
/// [`RegistrationPolicy::minimum_age`].
pub fn validate_birth_date(
    birth_date: &str,
    today: NaiveDate,
    policy: &RegistrationPolicy,
) -> Result<(), FieldError> {
    let birth = parse_birth_date(birth_date).ok_or(FieldError::MissingBirthDate)?;

    if birth > today {
        return Err(FieldError::BirthDateInFuture);
    }

    if age_on(birth, today) < i64::from(policy.minimum_age) {
        return Err(FieldError::Underage {
            minimum_age: policy.minimum_age,
        });
    }
    Ok(())
}

/// Validates that the terms checkbox is ticked.
///
/// # Errors
///
/// Returns [`FieldError::TermsNotAccepted`] when `accepted` is `false`.
pub const fn validate_terms(accepted: bool) -> Result<(), FieldError> {
    if accepted {
        Ok(())
    } else {
        Err(FieldError::TermsNotAccepted)
    }
}

/// Returns the age in whole years on `today` of someone born on `birth`.
///
/// The year difference is reduced by one while today's month and day precede
/// the birth month and day. Someone born on 29 February therefore turns a
/// year older on 1 March in non-leap years.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use registration_form::registration::validation::rules::age_on;
///
/// let birth = NaiveDate::from_ymd_opt(2000, 6, 15).expect("valid date");
/// let day_before = NaiveDate::from_ymd_opt(2016, 6, 14).expect("valid date");
/// let birthday = NaiveDate::from_ymd_opt(2016, 6, 15).expect("valid date");
/// assert_eq!(age_on(birth, day_before), 15);
/// assert_eq!(age_on(birth, birthday), 16);
/// ```
#[must_use]
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i64 {
    let years = i64::from(today.year()) - i64::from(birth.year());
    let before_birthday = (today.month(), today.day()) < (birth.month(), birth.day());
    if before_birthday { years - 1 } else { years }
}

fn parse_birth_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, BIRTH_DATE_FORMAT).ok()
}
