//! Demo driver: Juan orders a pizza and a soda, waits, is served, asks for the bill
//! and pays.

use restaurant_sim::lifecycle::{setup_tracing, Restaurant, RestaurantConfig};
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn, Instrument};

/// Extra wait on top of the preparation delay before serving.
const SERVE_MARGIN: Duration = Duration::from_millis(500);
/// Wait between asking for the bill and paying.
const PAY_AFTER: Duration = Duration::from_millis(500);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = RestaurantConfig::from_env()?;
    debug!(config = %serde_json::to_string(&config)?, "Loaded configuration");
    let serve_after = config.preparation_delay + SERVE_MARGIN;

    let restaurant = Restaurant::with_config(config);

    let mut events = restaurant.subscribe();
    let narrator = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => match event.to_json() {
                    Ok(json) => debug!(%json, "event"),
                    Err(e) => warn!(error = %e, "Could not encode event"),
                },
                Err(RecvError::Lagged(missed)) => warn!(missed, "Narrator fell behind"),
                Err(RecvError::Closed) => break,
            }
        }
    });

    let juan = restaurant.new_customer("Juan");

    let span = tracing::info_span!("dinner", customer = juan.name());
    async {
        let order = juan
            .place_order(restaurant.waiter(), ["Pizza", "Refresco"])
            .await?;

        tokio::time::sleep(serve_after).await;
        restaurant.waiter().serve_order(&order).await?;
        juan.request_bill(restaurant.waiter(), &order).await?;

        tokio::time::sleep(PAY_AFTER).await;
        juan.pay(restaurant.cashier(), &order).await?;

        let finished = order.snapshot().await?;
        info!(order_id = %finished.id, status = %finished.status, total = finished.total, "Dinner over");
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    restaurant.shutdown().await?;
    narrator.await?;

    info!("Simulation completed successfully");
    Ok(())
}
