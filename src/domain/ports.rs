use crate::domain::model::{ClientOrders, OrderModel};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Storage for orders, keyed by `order_id`.
///
/// No two stored orders share an `order_id`; `add` is the only way in and
/// enforces that.
pub trait OrderRepository {
    /// First stored order with this id, if any.
    fn find_by_id(&self, order_id: i64) -> Option<&OrderModel>;

    /// Appends `order` unless its id is already taken. Returns whether it was stored.
    fn add(&mut self, order: OrderModel) -> bool;

    /// Removes a previously added order. Errors if it is not stored.
    fn delete(&mut self, order: &OrderModel) -> Result<()>;

    /// Replaces the order stored under `order_id` with `new_order`, which may
    /// carry a different id. Returns `false` without mutating when `order_id`
    /// is not stored.
    fn update(&mut self, order_id: i64, new_order: OrderModel) -> bool;

    /// Stored orders in insertion order.
    fn data_source(&self) -> &[OrderModel];
}

impl<R: OrderRepository + ?Sized> OrderRepository for &mut R {
    fn find_by_id(&self, order_id: i64) -> Option<&OrderModel> {
        (**self).find_by_id(order_id)
    }

    fn add(&mut self, order: OrderModel) -> bool {
        (**self).add(order)
    }

    fn delete(&mut self, order: &OrderModel) -> Result<()> {
        (**self).delete(order)
    }

    fn update(&mut self, order_id: i64, new_order: OrderModel) -> bool {
        (**self).update(order_id, new_order)
    }

    fn data_source(&self) -> &[OrderModel] {
        (**self).data_source()
    }
}

#[async_trait]
pub trait ClientOrdersSource: Send + Sync {
    async fn client_orders(&self, client_id: i64) -> Result<ClientOrders>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}
