use crate::domain::model::{ClientOrders, OrderModel};
use crate::domain::ports::{ClientOrdersSource, OrderRepository};
use crate::utils::error::{Result, ShopError};
use async_trait::async_trait;

/// Orders kept in a `Vec`, in insertion order. Lookups are linear scans.
///
/// Not synchronized: callers sharing one repository across threads must
/// serialize access themselves.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    data_source: Vec<OrderModel>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the repository from `orders`. Each order goes through `add`, so
    /// later duplicates of an id are dropped.
    pub fn with_data_source(orders: impl IntoIterator<Item = OrderModel>) -> Self {
        let mut repository = Self::new();
        for order in orders {
            let order_id = order.order_id();
            if !repository.add(order) {
                tracing::warn!("Dropping seeded order with duplicate id {:?}", order_id);
            }
        }
        repository
    }

    pub fn len(&self) -> usize {
        self.data_source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data_source.is_empty()
    }

    fn position(&self, order_id: Option<i64>) -> Option<usize> {
        self.data_source
            .iter()
            .position(|stored| stored.order_id() == order_id)
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn find_by_id(&self, order_id: i64) -> Option<&OrderModel> {
        self.position(Some(order_id)).map(|index| &self.data_source[index])
    }

    fn add(&mut self, order: OrderModel) -> bool {
        if self.position(order.order_id()).is_some() {
            tracing::debug!("Order {:?} already stored, not adding", order.order_id());
            return false;
        }
        tracing::debug!("Adding order {:?}", order.order_id());
        self.data_source.push(order);
        true
    }

    fn delete(&mut self, order: &OrderModel) -> Result<()> {
        let index = self
            .position(order.order_id())
            .ok_or(ShopError::OrderNotPresent {
                order_id: order.order_id(),
            })?;
        tracing::debug!("Deleting order {:?}", order.order_id());
        self.data_source.remove(index);
        Ok(())
    }

    fn update(&mut self, order_id: i64, new_order: OrderModel) -> bool {
        let Some(index) = self.position(Some(order_id)) else {
            return false;
        };
        self.data_source.remove(index);

        let new_id = new_order.order_id();
        if !self.add(new_order) {
            tracing::warn!(
                "Order {} removed but replacement {:?} collides with a stored order",
                order_id,
                new_id
            );
        }
        true
    }

    fn data_source(&self) -> &[OrderModel] {
        &self.data_source
    }
}

#[async_trait]
impl ClientOrdersSource for InMemoryOrderRepository {
    async fn client_orders(&self, client_id: i64) -> Result<ClientOrders> {
        Ok(ClientOrders::from_models(
            self.data_source
                .iter()
                .filter(|order| order.client_id() == Some(client_id)),
        ))
    }
}
