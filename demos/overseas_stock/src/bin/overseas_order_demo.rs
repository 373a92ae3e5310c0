use kis_overseas_client::prelude::*;
use kis_overseas_client::utils::config::get_env_flag;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    // Also loads .env, which may hold the flag
    let config = Config::new();
    if !get_env_flag("KIS_DEMO_PLACE_ORDERS") {
        warn!("Orders are only sent with KIS_DEMO_PLACE_ORDERS=1, exiting");
        return Ok(());
    }

    if config.mode == TradingMode::Live {
        warn!("Placing orders against the LIVE environment");
    }
    let client = Client::connect(config).await?;

    // Deep limit so the order stays working
    let order = OrderRequest::limit(Side::Buy, Exchange::Nasd, "AAPL", 1, 1.0);
    let receipt = client.order(&order).await?;
    println!("{receipt}");

    let receipts: Vec<OrderReceipt> = receipt.records()?;
    let Some(placed) = receipts.first() else {
        error!("Order accepted without a receipt");
        return Ok(());
    };
    info!("Order number {}", placed.order_no);

    let revise = ReviseCancelRequest::revise(Exchange::Nasd, "AAPL", &placed.order_no, 1, 1.5);
    match client.order_revise_cancel(&revise).await {
        Ok(table) => println!("{table}"),
        Err(e) => error!("Revise failed: {}", e),
    }

    let unfilled = client.inquire_unfilled(Exchange::Nasd).await?;
    let orders: Vec<UnfilledOrder> = unfilled.records()?;
    info!("{} unfilled orders on NASD", orders.len());

    let cancelled = client
        .cancel_all_unfilled(Exchange::Nasd, Some("AAPL"))
        .await?;
    info!("{} orders cancelled", cancelled.len());
    println!("{cancelled}");

    Ok(())
}
