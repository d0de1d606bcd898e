use clap::{Args, Subcommand};
use tabled::{Table, Tabled};

use mercado::pricing;
use mercado_client::{
    config::ApiSettings,
    domain::products::{HttpProductsService, ProductsService},
    rest::RestClient,
};

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List the products available for purchase
    List(ListArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    #[command(flatten)]
    api: ApiSettings,
}

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "Id")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Marketplace")]
    market_place: String,
}

pub(crate) async fn run(command: ProductsCommand) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::List(args) => list(args).await,
    }
}

async fn list(args: ListArgs) -> Result<(), String> {
    let service = HttpProductsService::new(RestClient::new(args.api.into()));

    let products = service
        .list_products()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    let rows: Vec<ProductRow> = products
        .into_iter()
        .map(|product| ProductRow {
            id: product.id.into_i64(),
            name: product.name,
            price: pricing::cents_to_money(product.price_in_cents).to_string(),
            market_place: product.market_place_name.unwrap_or_default(),
        })
        .collect();

    println!("{}", Table::new(rows));

    Ok(())
}
