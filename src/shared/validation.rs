//! Sign-up payload validation
//!
//! Turns an untyped JSON body into a [`NewMemberInput`] or the complete list of
//! violated rules. Validation is fail-slow: every field is checked and every
//! violation is reported together. Nothing here touches the store.
//!
//! | field | rule |
//! |---|---|
//! | `firstName`, `lastName` | required, 2 to 100 characters |
//! | `email` | required, email address syntax, at most 254 characters |
//! | `phone` | optional, `+` then 1 to 16 digits, first digit non-zero |
//! | `password` | required, at least 8 characters |
//! | `dateOfBirth` | optional, calendar date |
//! | `gender` | optional, `male`, `female` or `other` |
//! | `address` | optional, at most 500 characters |
//! | `churchRole` | optional, at most 50 characters, defaults to `member` |
//!
//! No text field may contain a NUL character; PostgreSQL cannot store it.

use chrono::{DateTime, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::shared::error::FieldError;
use crate::shared::member::{Gender, NewMemberInput, DEFAULT_CHURCH_ROLE};

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 100;
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const ADDRESS_MAX_LENGTH: usize = 500;
pub const ROLE_MAX_LENGTH: usize = 50;
/// Longest address a mail path can carry (RFC 5321)
pub const EMAIL_MAX_LENGTH: usize = 254;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .unwrap()
});

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").unwrap());

/// Validate and normalize a sign-up payload.
///
/// Surrounding whitespace is trimmed from every text field except `password`.
/// `null` and blank optional fields are treated as absent. Unknown fields are
/// ignored.
pub fn validate_signup(payload: &Value) -> Result<NewMemberInput, Vec<FieldError>> {
    let Some(body) = payload.as_object() else {
        return Err(vec![FieldError::new(
            "body",
            "request body must be a JSON object",
        )]);
    };

    let mut errors = Vec::new();

    let first_name = required(body, "firstName", &mut errors).map(str::trim);
    if let Some(name) = first_name {
        check_length("firstName", name, NAME_MIN_LENGTH, NAME_MAX_LENGTH, &mut errors);
    }

    let last_name = required(body, "lastName", &mut errors).map(str::trim);
    if let Some(name) = last_name {
        check_length("lastName", name, NAME_MIN_LENGTH, NAME_MAX_LENGTH, &mut errors);
    }

    let email = required(body, "email", &mut errors).map(str::trim);
    if let Some(email) = email {
        if email.chars().count() > EMAIL_MAX_LENGTH {
            check_length("email", email, 0, EMAIL_MAX_LENGTH, &mut errors);
        } else if !is_valid_email(email) {
            errors.push(FieldError::new("email", "email must be a valid email address"));
        }
    }

    let phone = optional(body, "phone", &mut errors);
    if let Some(phone) = phone {
        if !PHONE_PATTERN.is_match(phone) {
            errors.push(FieldError::new(
                "phone",
                "phone must be a valid international phone number",
            ));
        }
    }

    let password = required(body, "password", &mut errors);
    if let Some(password) = password {
        if password.chars().count() < PASSWORD_MIN_LENGTH {
            errors.push(FieldError::new(
                "password",
                format!("password must be at least {} characters long", PASSWORD_MIN_LENGTH),
            ));
        }
    }

    let date_of_birth = optional(body, "dateOfBirth", &mut errors).and_then(|raw| {
        let parsed = parse_date(raw);
        if parsed.is_none() {
            errors.push(FieldError::new(
                "dateOfBirth",
                "dateOfBirth must be a valid date (YYYY-MM-DD)",
            ));
        }
        parsed
    });

    let gender = optional(body, "gender", &mut errors).and_then(|raw| {
        let parsed = raw.parse::<Gender>().ok();
        if parsed.is_none() {
            let labels: Vec<&str> = Gender::ALL.iter().map(Gender::as_str).collect();
            errors.push(FieldError::new(
                "gender",
                format!("gender must be one of: {}", labels.join(", ")),
            ));
        }
        parsed
    });

    let address = optional(body, "address", &mut errors);
    if let Some(address) = address {
        check_length("address", address, 0, ADDRESS_MAX_LENGTH, &mut errors);
    }

    let church_role = optional(body, "churchRole", &mut errors);
    if let Some(role) = church_role {
        check_length("churchRole", role, 0, ROLE_MAX_LENGTH, &mut errors);
    }

    match (first_name, last_name, email, password) {
        (Some(first_name), Some(last_name), Some(email), Some(password)) if errors.is_empty() => {
            Ok(NewMemberInput {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: email.to_string(),
                phone: phone.map(str::to_string),
                password: password.to_string(),
                date_of_birth,
                gender,
                address: address.map(str::to_string),
                church_role: church_role.unwrap_or(DEFAULT_CHURCH_ROLE).to_string(),
            })
        }
        _ => Err(errors),
    }
}

/// Email address syntax check shared with other callers.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Raw string value of a field. `Err` means the field had the wrong JSON type
/// and the error is already recorded.
fn text<'a>(
    body: &'a Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Result<Option<&'a str>, ()> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.contains('\0') => {
            errors.push(FieldError::new(
                field,
                format!("{} must not contain null characters", field),
            ));
            Err(())
        }
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => {
            errors.push(FieldError::new(field, format!("{} must be a string", field)));
            Err(())
        }
    }
}

fn required<'a>(
    body: &'a Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a str> {
    match text(body, field, errors) {
        Ok(Some(value)) if !value.trim().is_empty() => Some(value),
        Ok(_) => {
            errors.push(FieldError::new(field, format!("{} is required", field)));
            None
        }
        Err(()) => None,
    }
}

fn optional<'a>(
    body: &'a Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a str> {
    text(body, field, errors)
        .ok()
        .flatten()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn check_length(field: &str, value: &str, min: usize, max: usize, errors: &mut Vec<FieldError>) {
    let length = value.chars().count();
    if length < min || length > max {
        let message = if min == 0 {
            format!("{} must be at most {} characters long", field, max)
        } else {
            format!("{} must be between {} and {} characters long", field, min, max)
        };
        errors.push(FieldError::new(field, message));
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}
