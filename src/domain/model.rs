use crate::utils::error::{Result, ShopError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub const ITEM_DOES_NOT_EXIST: &str = "Item does not exist";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub name: String,
    pub value: f64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A purchase record linking a client to its line items.
///
/// The model does no validation of its own. The repository compares orders
/// by `order_id` only; the derived `PartialEq` is structural.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderModel {
    #[serde(default)]
    order_id: Option<i64>,
    #[serde(default)]
    client_id: Option<i64>,
    #[serde(default)]
    items: Vec<LineItem>,
}

impl OrderModel {
    pub fn new(order_id: i64, client_id: i64, items: Vec<LineItem>) -> Self {
        Self {
            order_id: Some(order_id),
            client_id: Some(client_id),
            items,
        }
    }

    /// An order whose id the caller has not assigned yet.
    pub fn unassigned(client_id: i64, items: Vec<LineItem>) -> Self {
        Self {
            order_id: None,
            client_id: Some(client_id),
            items,
        }
    }

    pub fn order_id(&self) -> Option<i64> {
        self.order_id
    }

    pub fn set_order_id(&mut self, order_id: Option<i64>) {
        self.order_id = order_id;
    }

    pub fn client_id(&self) -> Option<i64> {
        self.client_id
    }

    pub fn set_client_id(&mut self, client_id: Option<i64>) {
        self.client_id = client_id;
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn set_items(&mut self, items: Vec<LineItem>) {
        self.items = items;
    }
}

/// An order argument as it arrives at the service boundary: either a model
/// or an untyped value that still has to prove it is one. A raw object needs
/// non-null `client_id` and `items`; `order_id` may be left out.
#[derive(Debug, Clone)]
pub enum OrderInput {
    Model(OrderModel),
    Raw(Value),
}

impl OrderInput {
    pub fn into_model(self) -> Result<OrderModel> {
        match self {
            Self::Model(model) => Ok(model),
            Self::Raw(Value::Object(fields)) => {
                for key in ["client_id", "items"] {
                    if fields.get(key).map_or(true, Value::is_null) {
                        return Err(ShopError::type_mismatch(format!(
                            "Order must be an order model: missing {}",
                            key
                        )));
                    }
                }
                serde_json::from_value(Value::Object(fields)).map_err(|e| {
                    ShopError::type_mismatch(format!("Order must be an order model: {}", e))
                })
            }
            Self::Raw(_) => Err(ShopError::type_mismatch("Order must be an order model")),
        }
    }
}

impl From<OrderModel> for OrderInput {
    fn from(model: OrderModel) -> Self {
        Self::Model(model)
    }
}

impl From<&OrderModel> for OrderInput {
    fn from(model: &OrderModel) -> Self {
        Self::Model(model.clone())
    }
}

impl From<Value> for OrderInput {
    fn from(value: Value) -> Self {
        Self::Raw(value)
    }
}

impl From<&str> for OrderInput {
    fn from(value: &str) -> Self {
        Self::Raw(Value::from(value))
    }
}

impl From<String> for OrderInput {
    fn from(value: String) -> Self {
        Self::Raw(Value::from(value))
    }
}

/// Result of `get_order`: the order, or the "Item does not exist" sentinel.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderLookup {
    Found(OrderModel),
    NotFound,
}

impl OrderLookup {
    pub fn as_order(&self) -> Option<&OrderModel> {
        match self {
            Self::Found(order) => Some(order),
            Self::NotFound => None,
        }
    }

    pub fn into_order(self) -> Option<OrderModel> {
        match self {
            Self::Found(order) => Some(order),
            Self::NotFound => None,
        }
    }

    /// The sentinel text for a missing order, `None` for a found one.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Self::Found(_) => None,
            Self::NotFound => Some(ITEM_DOES_NOT_EXIST),
        }
    }
}

impl fmt::Display for OrderLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(order) => match serde_json::to_string(order) {
                Ok(json) => f.write_str(&json),
                Err(_) => write!(f, "{:?}", order),
            },
            Self::NotFound => f.write_str(ITEM_DOES_NOT_EXIST),
        }
    }
}

/// Wire shape of "get client orders": `{orders: [{order: [{name, value}]}]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientOrders {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub orders: Vec<ClientOrder>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientOrder {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub order: Vec<LineItem>,
}

impl ClientOrders {
    pub fn from_models<'a>(models: impl IntoIterator<Item = &'a OrderModel>) -> Self {
        Self {
            orders: models
                .into_iter()
                .map(|model| ClientOrder {
                    order: model.items().to_vec(),
                })
                .collect(),
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
