use crate::domain::model::ClientOrders;
use crate::domain::ports::ClientOrdersSource;
use crate::utils::error::Result;

/// Sum of `value` over every item of every order. Empty input sums to zero.
pub fn sum_item_values(client_orders: &ClientOrders) -> f64 {
    client_orders
        .orders
        .iter()
        .flat_map(|entry| entry.order.iter())
        .map(|item| item.value)
        .sum()
}

/// Totals what a client paid across its orders. Nothing is cached; every
/// call fetches the orders again.
pub struct PaymentAggregator<S: ClientOrdersSource> {
    source: S,
}

impl<S: ClientOrdersSource> PaymentAggregator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn total_payments(&self, client_id: i64) -> Result<f64> {
        let client_orders = self.source.client_orders(client_id).await?;
        let total = sum_item_values(&client_orders);
        tracing::debug!(
            "💰 Client {}: {} orders, total {}",
            client_id,
            client_orders.orders.len(),
            total
        );
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ShopError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedSource {
        body: serde_json::Value,
        fetches: AtomicUsize,
    }

    impl FixedSource {
        fn new(body: serde_json::Value) -> Self {
            Self {
                body,
                fetches: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ClientOrdersSource for FixedSource {
        async fn client_orders(&self, _client_id: i64) -> Result<ClientOrders> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(serde_json::from_value(self.body.clone())?)
        }
    }

    #[test]
    fn test_sum_item_values_across_orders() {
        let orders: ClientOrders = serde_json::from_value(json!({
            "orders": [
                {"order": [{"value": 10}, {"value": 20}]},
                {"order": [{"value": 5}]}
            ]
        }))
        .unwrap();
        assert_eq!(sum_item_values(&orders), 35.0);
    }

    #[test]
    fn test_sum_item_values_empty_is_zero() {
        assert_eq!(sum_item_values(&ClientOrders::default()), 0.0);
    }

    #[test]
    fn test_total_payments_recomputes_every_call() {
        let aggregator = PaymentAggregator::new(FixedSource::new(json!({
            "orders": [{"order": [{"name": "a", "value": 2.5}]}]
        })));

        assert_eq!(tokio_test::block_on(aggregator.total_payments(1)).unwrap(), 2.5);
        assert_eq!(tokio_test::block_on(aggregator.total_payments(1)).unwrap(), 2.5);
        assert_eq!(aggregator.source.fetches.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_total_payments_without_orders_is_zero() {
        let aggregator = PaymentAggregator::new(FixedSource::new(json!({})));
        assert_eq!(tokio_test::block_on(aggregator.total_payments(3)).unwrap(), 0.0);
    }

    #[test]
    fn test_total_payments_malformed_item_errors() {
        let aggregator = PaymentAggregator::new(FixedSource::new(json!({
            "orders": [{"order": [{"name": "missing value"}]}]
        })));
        let result = tokio_test::block_on(aggregator.total_payments(1));
        assert!(matches!(result, Err(ShopError::SerializationError(_))));
    }
}
