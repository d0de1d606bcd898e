use clap::{Parser, Subcommand};

mod cart;
mod orders;
mod products;

#[derive(Debug, Parser)]
#[command(name = "mercado", about = "Mercado marketplace CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Products(products::ProductsCommand),
    Cart(cart::CartCommand),
    Orders(orders::OrdersCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Products(command) => products::run(command).await,
            Commands::Cart(command) => cart::run(command).await,
            Commands::Orders(command) => orders::run(command).await,
        }
    }
}
