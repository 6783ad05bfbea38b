use crate::utils::error::{Result, ShopError};
use serde_json::Value;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ShopError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ShopError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ShopError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ShopError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Type step of order id validation: the id must be a JSON integer.
pub fn order_id_as_integer(order_id: &Value) -> Result<i128> {
    match order_id {
        Value::Number(number) => number
            .as_i64()
            .map(i128::from)
            .or_else(|| number.as_u64().map(i128::from))
            .ok_or_else(|| ShopError::type_mismatch("Order id must be integer")),
        _ => Err(ShopError::type_mismatch("Order id must be integer")),
    }
}

/// Value step of order id validation: the id must be a non-negative `i64`.
pub fn check_order_id_range(order_id: i128) -> Result<i64> {
    if order_id < 0 {
        return Err(ShopError::invalid_value(
            "Order id must be greater or equal 0",
        ));
    }
    i64::try_from(order_id)
        .map_err(|_| ShopError::invalid_value(format!("Order id {} is out of range", order_id)))
}

pub fn validate_order_id(order_id: &Value) -> Result<i64> {
    check_order_id_range(order_id_as_integer(order_id)?)
}
