pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{http::HttpShopClient, memory::InMemoryOrderRepository};
pub use crate::config::ShopConfig;
pub use crate::core::{order_service::OrderService, payments::PaymentAggregator};
pub use crate::domain::model::{
    ClientOrder, ClientOrders, LineItem, OrderInput, OrderLookup, OrderModel, ITEM_DOES_NOT_EXIST,
};
pub use crate::domain::ports::{ClientOrdersSource, ConfigProvider, OrderRepository};
pub use crate::utils::error::{Result, ShopError};
