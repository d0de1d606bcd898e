use clap::{Args, Subcommand};
use tabled::{Table, Tabled};

use mercado::{ids::CartId, pricing};
use mercado_client::{
    config::ApiSettings,
    domain::carts::{CartSync, HttpCartSync},
    rest::RestClient,
};

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show a remote cart with its items and summary
    Show(ShowArgs),
}

#[derive(Debug, Args)]
struct ShowArgs {
    /// Id of the remote cart
    #[arg(long)]
    cart_id: i64,

    #[command(flatten)]
    api: ApiSettings,
}

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Unit Price")]
    unit_price: String,
    #[tabled(rename = "Quantity")]
    quantity: u32,
    #[tabled(rename = "Line Total")]
    line_total: String,
}

pub(crate) async fn run(command: CartCommand) -> Result<(), String> {
    match command.command {
        CartSubcommand::Show(args) => show(args).await,
    }
}

async fn show(args: ShowArgs) -> Result<(), String> {
    let sync = HttpCartSync::new(RestClient::new(args.api.into()));

    let cart = sync
        .fetch_cart(CartId::from_i64(args.cart_id))
        .await
        .map_err(|error| format!("failed to fetch cart: {error}"))?;

    let mut rows = Vec::with_capacity(cart.len());

    for item in cart.items() {
        let line_total = item
            .line_total()
            .map_err(|error| format!("inconsistent cart: {error}"))?;

        rows.push(ItemRow {
            name: item.product_name.clone(),
            unit_price: pricing::cents_to_money(item.product_price_in_cents).to_string(),
            quantity: item.quantity,
            line_total: pricing::cents_to_money(line_total).to_string(),
        });
    }

    println!("{}", Table::new(rows));
    println!("Total Price: {}", cart.total());
    println!("Total Price In Cents: {}", cart.price_in_cents());
    println!("Items: {}", cart.total_items());

    Ok(())
}
