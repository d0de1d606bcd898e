use clap::{Args, Subcommand};
use tabled::{Table, Tabled};

use mercado::{ids::OrderId, orders, pricing};
use mercado_client::{
    config::ApiSettings,
    domain::orders::{HttpOrdersService, OrdersService},
    rest::RestClient,
};

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// Show the purchased lines of a finished order
    Show(ShowArgs),
}

#[derive(Debug, Args)]
struct ShowArgs {
    /// Id of the order
    #[arg(long)]
    order_id: i64,

    #[command(flatten)]
    api: ApiSettings,
}

#[derive(Tabled)]
struct OrderRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Quantity")]
    quantity: u32,
    #[tabled(rename = "Unit Price")]
    unit_price: String,
    #[tabled(rename = "Total")]
    total: String,
}

pub(crate) async fn run(command: OrdersCommand) -> Result<(), String> {
    match command.command {
        OrdersSubcommand::Show(args) => show(args).await,
    }
}

async fn show(args: ShowArgs) -> Result<(), String> {
    let service = HttpOrdersService::new(RestClient::new(args.api.into()));

    let items = service
        .list_order_items(OrderId::from_i64(args.order_id))
        .await
        .map_err(|error| format!("failed to fetch order items: {error}"))?;

    let mut rows = Vec::with_capacity(items.len());

    for item in &items {
        let line = &item.cart_item;
        let money = line
            .line_money()
            .map_err(|error| format!("inconsistent order line: {error}"))?;

        rows.push(OrderRow {
            name: line.product_name.clone(),
            quantity: line.quantity,
            unit_price: pricing::cents_to_money(line.product_price_in_cents).to_string(),
            total: money.to_string(),
        });
    }

    println!("{}", Table::new(rows));
    println!("Items: {}", orders::total_quantity(&items));

    Ok(())
}
