#![cfg(feature = "cli")]

use anyhow::Result;
use httpmock::prelude::*;
use shop_access::app::run;
use shop_access::config::{Command, OrderAction};
use shop_access::{ShopConfig, ShopError};

fn seeded_config() -> Result<ShopConfig> {
    Ok(ShopConfig::from_toml_str(
        r#"
[[orders]]
order_id = 1
client_id = 1
items = [{ name = "a", value = 10.0 }, { name = "b", value = 20.0 }]

[[orders]]
order_id = 2
client_id = 1
items = [{ name = "c", value = 5.0 }]

[[orders]]
order_id = 3
client_id = 2
items = [{ name = "d", value = 100.0 }]
"#,
    )?)
}

fn order(action: OrderAction) -> Command {
    Command::Order { action }
}

#[tokio::test]
async fn test_get_existing_and_missing_order() -> Result<()> {
    let config = seeded_config()?;

    let found = run(&order(OrderAction::Get { id: "2".into() }), &config).await?;
    assert!(found.contains("\"order_id\":2"));

    let missing = run(&order(OrderAction::Get { id: "9".into() }), &config).await?;
    assert_eq!(missing, "Item does not exist");
    Ok(())
}

#[tokio::test]
async fn test_non_integer_id_is_type_mismatch() -> Result<()> {
    let config = seeded_config()?;
    let result = run(&order(OrderAction::Delete { id: "x".into() }), &config).await;
    assert!(matches!(result, Err(ShopError::TypeMismatch { .. })));
    Ok(())
}

#[tokio::test]
async fn test_add_reports_outcome_and_orders() -> Result<()> {
    let config = seeded_config()?;

    let added = run(
        &order(OrderAction::Add {
            order: r#"{"order_id": 4, "client_id": 3, "items": []}"#.into(),
        }),
        &config,
    )
    .await?;
    assert!(added.starts_with("true\n"));
    assert!(added.contains("\"order_id\":4"));

    let duplicate = run(
        &order(OrderAction::Add {
            order: r#"{"order_id": 1, "client_id": 9, "items": []}"#.into(),
        }),
        &config,
    )
    .await?;
    assert!(duplicate.starts_with("false\n"));
    Ok(())
}

#[tokio::test]
async fn test_add_empty_object_is_type_mismatch() -> Result<()> {
    let config = seeded_config()?;
    let result = run(&order(OrderAction::Add { order: "{}".into() }), &config).await;
    assert!(matches!(result, Err(ShopError::TypeMismatch { .. })));
    Ok(())
}

#[tokio::test]
async fn test_local_payments_use_seeded_orders() -> Result<()> {
    let config = seeded_config()?;
    let total = run(
        &Command::Payments {
            client_id: 1,
            local: true,
        },
        &config,
    )
    .await?;
    assert_eq!(total, "35");
    Ok(())
}

#[tokio::test]
async fn test_remote_payments_call_the_api() -> Result<()> {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/7/orders");
            then.status(200)
                .json_body(serde_json::json!({"orders": [{"order": [{"name": "x", "value": 12.5}]}]}));
        })
        .await;

    let mut config = ShopConfig::default();
    config.api.base_url = server.base_url();

    let total = run(
        &Command::Payments {
            client_id: 7,
            local: false,
        },
        &config,
    )
    .await?;

    assert_eq!(total, "12.5");
    api_mock.assert_async().await;
    Ok(())
}
