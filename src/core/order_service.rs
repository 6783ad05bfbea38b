use crate::domain::model::{OrderInput, OrderLookup};
use crate::domain::ports::OrderRepository;
use crate::utils::error::Result;
use crate::utils::validation::{check_order_id_range, order_id_as_integer, validate_order_id};
use serde_json::Value;

/// Validates order arguments and delegates to the injected repository.
///
/// Malformed input is an error (`TypeMismatch` / `InvalidValue`); a missing
/// order is not: `get_order` returns `OrderLookup::NotFound` and the
/// mutating calls return `false`.
pub struct OrderService<R> {
    repository: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn get_order(&self, order_id: impl Into<Value>) -> Result<OrderLookup> {
        let order_id = validate_order_id(&order_id.into())?;
        tracing::debug!("Looking up order {}", order_id);

        // branch on one lookup, return the result of a second
        if self.repository.find_by_id(order_id).is_none() {
            return Ok(OrderLookup::NotFound);
        }
        Ok(match self.repository.find_by_id(order_id) {
            Some(order) => OrderLookup::Found(order.clone()),
            None => OrderLookup::NotFound,
        })
    }

    pub fn add_order(&mut self, order: impl Into<OrderInput>) -> Result<bool> {
        let order = order.into().into_model()?;
        Ok(self.repository.add(order))
    }

    pub fn update_order(
        &mut self,
        order_id: impl Into<Value>,
        new_order: impl Into<OrderInput>,
    ) -> Result<bool> {
        // type errors win over value errors
        let order_id = order_id_as_integer(&order_id.into())?;
        let new_order = new_order.into().into_model()?;
        let order_id = check_order_id_range(order_id)?;

        tracing::debug!("Updating order {}", order_id);
        Ok(self.repository.update(order_id, new_order))
    }

    pub fn delete_order(&mut self, order_id: impl Into<Value>) -> Result<bool> {
        let order_id = validate_order_id(&order_id.into())?;

        if self.repository.find_by_id(order_id).is_none() {
            return Ok(false);
        }
        let Some(found) = self.repository.find_by_id(order_id).cloned() else {
            return Ok(false);
        };
        tracing::debug!("Deleting order {}", order_id);
        self.repository.delete(&found)?;
        Ok(true)
    }
}
