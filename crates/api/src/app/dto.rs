use rust_decimal::Decimal;
use serde::Deserialize;

use sweetshop_auth::User;
use sweetshop_catalog::{NewSweet, Sweet, SweetPatch};
use sweetshop_core::{DomainError, DomainResult, Price};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Create / full-update payload. `quantity` defaults to 0 like the stored
/// model's default.
#[derive(Debug, Deserialize)]
pub struct SweetRequest {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    #[serde(default)]
    pub quantity: i64,
}

#[derive(Debug, Deserialize, Default)]
pub struct SweetPatchRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<i64>,
}

/// Restock payload. `quantity` is kept as raw JSON and run through
/// [`parse_restock_amount`]: the coercion rules (and their exact error
/// message) are part of the contract, so no serde magic here.
#[derive(Debug, Deserialize)]
pub struct RestockRequest {
    #[serde(default)]
    pub quantity: serde_json::Value,
}

// -------------------------
// DTO -> domain conversion
// -------------------------

pub fn to_new_sweet(req: SweetRequest) -> DomainResult<NewSweet> {
    Ok(NewSweet {
        name: req.name,
        category: req.category,
        price: Price::new(req.price)?,
        quantity: req.quantity,
    })
}

pub fn to_sweet_patch(req: SweetPatchRequest) -> DomainResult<SweetPatch> {
    Ok(SweetPatch {
        name: req.name,
        category: req.category,
        price: req.price.map(Price::new).transpose()?,
        quantity: req.quantity,
    })
}

/// Explicit coercion of the restock amount from arbitrary JSON.
///
/// Integers pass; strings and floats that denote an integer pass; a
/// missing/null quantity coerces to 0 (which then fails the positive-number
/// rule downstream). Everything else is a validation error with the exact
/// caller-visible message.
pub fn parse_restock_amount(value: &serde_json::Value) -> DomainResult<i64> {
    const INVALID: &str = "Invalid quantity. Must be an integer.";

    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else {
                match n.as_f64() {
                    Some(f)
                        if f.fract() == 0.0
                            && f >= i64::MIN as f64
                            && f <= i64::MAX as f64 =>
                    {
                        Ok(f as i64)
                    }
                    _ => Err(DomainError::validation(INVALID)),
                }
            }
        }
        serde_json::Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| DomainError::validation(INVALID)),
        _ => Err(DomainError::validation(INVALID)),
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

/// Fixed field list for the public item shape.
pub fn sweet_to_json(sweet: &Sweet) -> serde_json::Value {
    serde_json::json!({
        "id": sweet.id.to_string(),
        "name": sweet.name,
        "category": sweet.category,
        "price": sweet.price,
        "quantity": sweet.quantity,
    })
}

/// Registration response: the password (hash) is never echoed.
pub fn user_to_json(user: &User) -> serde_json::Value {
    serde_json::json!({
        "username": user.username,
        "email": user.email.clone().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn restock_amount_accepts_integers() {
        assert_eq!(parse_restock_amount(&json!(25)).unwrap(), 25);
        assert_eq!(parse_restock_amount(&json!(-1)).unwrap(), -1);
    }

    #[test]
    fn restock_amount_accepts_integer_strings_and_floats() {
        assert_eq!(parse_restock_amount(&json!("25")).unwrap(), 25);
        assert_eq!(parse_restock_amount(&json!(" 7 ")).unwrap(), 7);
        assert_eq!(parse_restock_amount(&json!(25.0)).unwrap(), 25);
    }

    #[test]
    fn restock_amount_rejects_non_integers() {
        for value in [json!(25.7), json!("abc"), json!(true), json!([1]), json!({})] {
            let err = parse_restock_amount(&value).unwrap_err();
            assert_eq!(
                err,
                DomainError::validation("Invalid quantity. Must be an integer.")
            );
        }
    }

    #[test]
    fn missing_restock_amount_coerces_to_zero() {
        assert_eq!(parse_restock_amount(&serde_json::Value::Null).unwrap(), 0);
    }

    #[test]
    fn sweet_json_has_the_fixed_field_list() {
        let sweet = Sweet {
            id: sweetshop_core::SweetId::new(),
            name: "Ladoo".to_string(),
            category: "Indian".to_string(),
            price: "10.5".parse().unwrap(),
            quantity: 5,
        };

        let value = sweet_to_json(&sweet);
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["category", "id", "name", "price", "quantity"]);
        assert_eq!(value["price"], "10.50");
    }

    #[test]
    fn user_json_never_contains_password_material() {
        let user = User {
            id: sweetshop_core::UserId::new(),
            username: "alice".to_string(),
            password_hash: "$argon2id$test".to_string(),
            email: None,
            role: sweetshop_auth::Role::Regular,
        };

        let value = user_to_json(&user);
        assert_eq!(value, json!({ "username": "alice", "email": "" }));
    }
}
