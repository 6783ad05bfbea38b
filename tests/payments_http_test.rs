use anyhow::Result;
use httpmock::prelude::*;
use shop_access::{HttpShopClient, PaymentAggregator, ShopConfig, ShopError};

fn config_for(server: &MockServer) -> ShopConfig {
    let mut config = ShopConfig::default();
    config.api.base_url = server.url("/api");
    config.api.timeout_seconds = 5;
    config
}

#[tokio::test]
async fn test_total_payments_sums_every_item() -> Result<()> {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/1/orders");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "orders": [
                        {"order": [{"name": "a", "value": 10}, {"name": "b", "value": 20}]},
                        {"order": [{"name": "c", "value": 5}]}
                    ]
                }));
        })
        .await;

    let aggregator = PaymentAggregator::new(HttpShopClient::new(&config_for(&server))?);
    let total = aggregator.total_payments(1).await?;

    assert_eq!(total, 35.0);
    api_mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_total_payments_is_not_cached() -> Result<()> {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/2/orders");
            then.status(200)
                .json_body(serde_json::json!({"orders": [{"order": [{"value": 1.5}]}]}));
        })
        .await;

    let aggregator = PaymentAggregator::new(HttpShopClient::new(&config_for(&server))?);
    aggregator.total_payments(2).await?;
    aggregator.total_payments(2).await?;

    api_mock.assert_hits_async(2).await;
    Ok(())
}

#[tokio::test]
async fn test_client_without_orders_totals_zero() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/3/orders");
            then.status(200).json_body(serde_json::json!({}));
        })
        .await;

    let aggregator = PaymentAggregator::new(HttpShopClient::new(&config_for(&server))?);
    assert_eq!(aggregator.total_payments(3).await?, 0.0);
    Ok(())
}

#[tokio::test]
async fn test_unknown_client_is_not_found() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/404/orders");
            then.status(404);
        })
        .await;

    let aggregator = PaymentAggregator::new(HttpShopClient::new(&config_for(&server))?);
    let result = aggregator.total_payments(404).await;

    assert!(matches!(
        result,
        Err(ShopError::ClientNotFound { client_id: 404 })
    ));
    Ok(())
}

#[tokio::test]
async fn test_server_error_is_unexpected_status() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/5/orders");
            then.status(500);
        })
        .await;

    let aggregator = PaymentAggregator::new(HttpShopClient::new(&config_for(&server))?);
    let result = aggregator.total_payments(5).await;

    assert!(matches!(
        result,
        Err(ShopError::UnexpectedStatus { status: 500, .. })
    ));
    Ok(())
}

#[tokio::test]
async fn test_item_without_value_fails_to_decode() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/6/orders");
            then.status(200)
                .json_body(serde_json::json!({"orders": [{"order": [{"name": "a"}]}]}));
        })
        .await;

    let aggregator = PaymentAggregator::new(HttpShopClient::new(&config_for(&server))?);
    let result = aggregator.total_payments(6).await;

    assert!(matches!(result, Err(ShopError::SerializationError(_))));
    Ok(())
}
