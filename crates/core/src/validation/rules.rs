//! Reusable value rules shared by the entity records.

use rust_decimal::Decimal;
use validator::{Validate, ValidationErrors};

use crate::error::CoreError;
use crate::types::Money;

/// Largest amount a `NUMERIC(10, 2)` column holds.
pub const MAX_AMOUNT: Money = Decimal::from_parts(0x540B_E3FF, 2, 0, false, 2);

/// Run the `validator` derive rules (column widths) and report the first
/// failing field, in field-name order so the message is stable.
pub fn check_fields<T: Validate>(value: &T) -> Result<(), CoreError> {
    value.validate().map_err(first_invalid)
}

fn first_invalid(errors: ValidationErrors) -> CoreError {
    let mut fields: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, errs)| {
            errs.first().map(|err| {
                let reason = match (err.code.as_ref(), err.params.get("max")) {
                    ("length", Some(max)) => format!("must be at most {max} characters"),
                    (code, _) => format!("failed the `{code}` rule"),
                };
                (field.to_string(), reason)
            })
        })
        .collect();
    fields.sort();

    match fields.into_iter().next() {
        Some((field, reason)) => CoreError::InvalidValue { field, reason },
        None => CoreError::Validation("invalid payload".to_string()),
    }
}

/// Reject amounts with sub-cent digits; the money columns keep two decimals.
pub fn require_cents(field: &str, amount: Money) -> Result<(), CoreError> {
    if amount.normalize().scale() > 2 {
        return Err(CoreError::InvalidValue {
            field: field.to_string(),
            reason: format!("must have at most 2 decimal places, got {amount}"),
        });
    }
    Ok(())
}

/// Reject amounts that are zero or negative.
pub fn require_positive(field: &str, amount: Money) -> Result<(), CoreError> {
    if amount <= Decimal::ZERO {
        return Err(CoreError::InvalidValue {
            field: field.to_string(),
            reason: format!("must be greater than 0, got {amount}"),
        });
    }
    Ok(())
}

/// Reject amounts that do not fit the money column.
pub fn require_storable(field: &str, amount: Money) -> Result<(), CoreError> {
    if amount.abs() > MAX_AMOUNT {
        return Err(CoreError::InvalidValue {
            field: field.to_string(),
            reason: format!("must not exceed {MAX_AMOUNT}, got {amount}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Named {
        #[validate(length(max = 5))]
        name: String,
        #[validate(length(max = 3))]
        alias: Option<String>,
    }

    #[test]
    fn max_amount_is_ten_digits_with_two_decimals() {
        assert_eq!(MAX_AMOUNT.to_string(), "99999999.99");
    }

    #[test]
    fn positive_amounts_pass() {
        assert!(require_positive("price", Decimal::new(1, 2)).is_ok());
    }

    #[test]
    fn zero_and_negative_amounts_fail() {
        assert_matches!(
            require_positive("price", Decimal::ZERO),
            Err(CoreError::InvalidValue { field, .. }) if field == "price"
        );
        assert!(require_positive("price", Decimal::new(-500, 2)).is_err());
    }

    #[test]
    fn sub_cent_amounts_fail() {
        assert_matches!(
            require_cents("price", Decimal::new(1, 3)),
            Err(CoreError::InvalidValue { field, .. }) if field == "price"
        );
        assert!(require_cents("price", Decimal::new(10005, 3)).is_err());
        // Trailing zeros are not extra precision.
        assert!(require_cents("price", Decimal::new(10500, 3)).is_ok());
        assert!(require_cents("price", Decimal::new(12, 0)).is_ok());
    }

    #[test]
    fn oversized_amount_is_not_storable() {
        assert!(require_storable("total", MAX_AMOUNT).is_ok());
        assert!(require_storable("total", MAX_AMOUNT + Decimal::new(1, 2)).is_err());
    }

    #[test]
    fn length_violation_names_the_field() {
        let value = Named {
            name: "abcdef".into(),
            alias: None,
        };
        let err = check_fields(&value).unwrap_err();
        assert_matches!(
            err,
            CoreError::InvalidValue { ref field, ref reason }
                if field == "name" && reason == "must be at most 5 characters"
        );
    }

    #[test]
    fn first_field_in_name_order_is_reported() {
        let value = Named {
            name: "abcdef".into(),
            alias: Some("long".into()),
        };
        assert_matches!(
            check_fields(&value),
            Err(CoreError::InvalidValue { field, .. }) if field == "alias"
        );
    }
}
