//! ShopKit CLI - print catalog listings and priced carts.
//!
//! Commands:
//! - `shopkit catalog` - List every category's products
//! - `shopkit cart` - Fill a cart by product name and price it
//! - `shopkit demo` - Catalog listing followed by a sample cart
//! - `shopkit init` - Write a starter shopkit.toml

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, CatalogArgs, DemoArgs, InitArgs};

/// ShopKit - in-memory catalog and shopping cart tool
#[derive(Parser)]
#[command(name = "shopkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path (TOML or JSON)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all products by category
    Catalog(CatalogArgs),

    /// Add products to a user's cart and print the total
    Cart(CartArgs),

    /// Print the catalog and a sample cart
    Demo(DemoArgs),

    /// Write a starter config file
    Init(InitArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Demo(args) => commands::demo::run(args, &ctx),
        Commands::Init(args) => commands::init::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
