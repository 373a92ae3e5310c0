use kis_overseas_client::prelude::*;
use kis_overseas_client::utils::dates::today_yyyymmdd;
use std::error::Error;

fn show(title: &str, result: Result<ResultTable, AppError>) {
    match result {
        Ok(table) => {
            info!("{} ({} rows)", title, table.len());
            println!("{table}");
        }
        Err(e) => error!("{} failed: {}", title, e),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    let config = Config::new();
    info!("Running against {} ({})", config.base_url(), config.mode);
    let client = Client::connect(config).await?;

    // Account
    show(
        "Balance summary",
        client.inquire_balance(Exchange::Nasd, "USD").await,
    );
    show(
        "Balance list",
        client.inquire_balance_list(Exchange::Nasd, "USD").await,
    );
    show(
        "Executions",
        client.inquire_executions(&ExecutionQuery::default()).await,
    );
    show(
        "Present balance",
        client
            .inquire_present_balance(OutputSection::Output1, &PresentBalanceQuery::default())
            .await,
    );
    show(
        "Buying power",
        client
            .inquire_purchasable_amount(Exchange::Nasd, 150.0, "AAPL")
            .await,
    );
    show(
        "Period profit",
        client.inquire_period_profit(&ProfitQuery::default()).await,
    );
    show("Foreign margin", client.foreign_margin().await);

    // Quotes
    show("Price", client.price("NAS", "AAPL").await);
    show(
        "Daily price",
        client.daily_price(&DailyPriceQuery::daily("NAS", "AAPL")).await,
    );
    let condition = SearchCondition {
        exchange: "NAS".to_string(),
        price: Range::new("100", "200"),
        ..Default::default()
    };
    show(
        "Condition search",
        client.condition_search(&condition, OutputSection::Output2).await,
    );
    show(
        "Holidays",
        client.countries_holiday(&today_yyyymmdd()).await,
    );
    show(
        "Asking price",
        client
            .asking_price("NAS", "AAPL", OutputSection::Output2)
            .await,
    );

    match client.daily_price(&DailyPriceQuery::daily("NAS", "AAPL")).await {
        Ok(table) => {
            let bars: Vec<DailyPrice> = table.records()?;
            if let Some(last) = bars.first() {
                info!("Last bar: {}", last);
            }
        }
        Err(e) => error!("Daily price failed: {}", e),
    }

    Ok(())
}
