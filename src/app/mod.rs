use crate::adapters::http::HttpShopClient;
use crate::adapters::memory::InMemoryOrderRepository;
use crate::config::cli::{parse_cli_value, Command, OrderAction};
use crate::config::ShopConfig;
use crate::core::order_service::OrderService;
use crate::core::payments::PaymentAggregator;
use crate::core::OrderRepository;
use crate::utils::error::Result;

/// Runs one CLI command and returns what should be printed.
pub async fn run(command: &Command, config: &ShopConfig) -> Result<String> {
    match command {
        Command::Payments { client_id, local } => {
            // --local skips the network and totals the seeded orders
            let total = if *local {
                tracing::info!("💰 Totalling client {} from seeded orders", client_id);
                let repository = InMemoryOrderRepository::with_data_source(config.orders.clone());
                PaymentAggregator::new(repository)
                    .total_payments(*client_id)
                    .await?
            } else {
                tracing::info!("💰 Totalling client {} from {}", client_id, config.api.base_url);
                PaymentAggregator::new(HttpShopClient::new(config)?)
                    .total_payments(*client_id)
                    .await?
            };
            Ok(total.to_string())
        }
        Command::Order { action } => run_order_action(action, config),
    }
}

fn run_order_action(action: &OrderAction, config: &ShopConfig) -> Result<String> {
    // Each invocation starts from the seed; changes live only for this command
    let mut service =
        OrderService::new(InMemoryOrderRepository::with_data_source(config.orders.clone()));

    // ids and orders go in untyped so bad input surfaces as TypeMismatch
    let outcome = match action {
        OrderAction::Get { id } => return Ok(service.get_order(parse_cli_value(id))?.to_string()),
        OrderAction::Add { order } => service.add_order(parse_cli_value(order))?,
        OrderAction::Update { id, order } => {
            service.update_order(parse_cli_value(id), parse_cli_value(order))?
        }
        OrderAction::Delete { id } => service.delete_order(parse_cli_value(id))?,
    };

    // Mutations print their outcome followed by the resulting orders
    let orders = serde_json::to_string(service.repository().data_source())?;
    Ok(format!("{}\n{}", outcome, orders))
}
