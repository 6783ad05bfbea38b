pub mod order_service;
pub mod payments;

pub use crate::domain::model::{ClientOrders, LineItem, OrderInput, OrderLookup, OrderModel};
pub use crate::domain::ports::{ClientOrdersSource, ConfigProvider, OrderRepository};
pub use crate::utils::error::Result;
