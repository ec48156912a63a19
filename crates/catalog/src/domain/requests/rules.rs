use rust_decimal::Decimal;
use shared::errors::FieldErrors;
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

/// Monetary amounts: non-negative with at most two fractional digits.
/// Trailing zeros do not count, so `1.50` passes and `1.505` does not.
pub fn validate_money(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::new("negative"));
    }
    if value.normalize().scale() > 2 {
        return Err(ValidationError::new("decimal_places"));
    }
    Ok(())
}

/// Reported under the `required` code so a blank value reads like a missing one.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

pub fn validate_exchange_rate(value: &Decimal) -> Result<(), ValidationError> {
    if *value <= Decimal::ZERO {
        return Err(ValidationError::new("not_positive"));
    }
    if value.normalize().scale() > 6 {
        return Err(ValidationError::new("decimal_places_rate"));
    }
    Ok(())
}

/// Flattens validator output into the `errors` map of a 422 response.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut map = FieldErrors::new();

    for (field, field_errors) in errors.field_errors() {
        let messages = field_errors
            .iter()
            .map(|e| match &e.message {
                Some(message) => message.to_string(),
                None => default_message(&field, e.code.as_ref()),
            })
            .collect();
        map.insert(field.to_string(), messages);
    }

    map
}

fn default_message(field: &Cow<'static, str>, code: &str) -> String {
    match code {
        "required" => format!("The {field} field is required."),
        "length" => format!("The {field} has an invalid length."),
        "range" => format!("The {field} is out of range."),
        "negative" => format!("The {field} must not be negative."),
        "decimal_places" => format!("The {field} must have at most 2 decimal places."),
        "decimal_places_rate" => format!("The {field} must have at most 6 decimal places."),
        "not_positive" => format!("The {field} must be greater than zero."),
        "sort_column" => format!("The selected {field} is invalid."),
        "sort_order" => format!("The {field} must be either asc or desc."),
        _ => format!("Invalid {field}"),
    }
}
