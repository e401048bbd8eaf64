//! Pineapple CLI - storefront client and database tools.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! pineapple products
//! pineapple products --category laptop
//! pineapple product <id>
//! pineapple featured
//!
//! # Load demo products (adds another set on every run)
//! pineapple seed
//!
//! # Cart kept in local storage
//! pineapple cart add <id> -q 2
//! pineapple cart show
//!
//! # Run database migrations
//! pineapple migrate
//! ```
//!
//! # Environment Variables
//!
//! - `PINEAPPLE_API_URL` - Catalog API base (default: `http://127.0.0.1:3000/api`)
//! - `PINEAPPLE_STORAGE_PATH` - Local storage file (default: `.pineapple/local_storage.json`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use pineapple_cli::{CatalogClient, DEFAULT_API_URL, DEFAULT_STORAGE_PATH, LocalStorage};

mod commands;

#[derive(Parser)]
#[command(name = "pineapple")]
#[command(author, version, about = "Pineapple storefront client")]
struct Cli {
    /// Catalog API base URL
    #[arg(long, env = "PINEAPPLE_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    /// Local storage file holding the cart
    #[arg(long, env = "PINEAPPLE_STORAGE_PATH", default_value = DEFAULT_STORAGE_PATH, global = true)]
    storage: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Products {
        /// Category tag to filter by (`all` lists everything)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one product
    Product {
        /// Product ID
        id: String,
    },
    /// Show the featured product
    Featured,
    /// List the category filters
    Categories,
    /// Append the demo catalog
    Seed,
    /// Manage the local cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Run database migrations
    Migrate,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines and subtotal
    Show,
    /// Add a product
    Add {
        /// Product ID
        id: String,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set a product's quantity (0 removes it)
    Set {
        /// Product ID
        id: String,

        /// New quantity
        quantity: u32,
    },
    /// Remove a product
    Remove {
        /// Product ID
        id: String,
    },
    /// Empty the cart
    Clear,
}

#[tokio::main]
async fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Products { category } => {
            let client = CatalogClient::new(&cli.api_url)?;
            commands::products::list(&client, category.as_deref()).await;
        }
        Commands::Product { id } => {
            let client = CatalogClient::new(&cli.api_url)?;
            commands::products::show(&client, &id).await?;
        }
        Commands::Featured => {
            let client = CatalogClient::new(&cli.api_url)?;
            commands::products::featured(&client).await;
        }
        Commands::Categories => commands::products::categories(),
        Commands::Seed => {
            let client = CatalogClient::new(&cli.api_url)?;
            commands::seed::run(&client).await?;
        }
        Commands::Cart { action } => {
            let mut storage = LocalStorage::open(&cli.storage)?;
            match action {
                CartAction::Show => {
                    let client = CatalogClient::new(&cli.api_url)?;
                    commands::cart::show(&client, &storage).await;
                }
                CartAction::Add { id, quantity } => {
                    commands::cart::add(&mut storage, &id, quantity)?;
                }
                CartAction::Set { id, quantity } => {
                    commands::cart::set(&mut storage, &id, quantity)?;
                }
                CartAction::Remove { id } => commands::cart::remove(&mut storage, &id)?,
                CartAction::Clear => commands::cart::clear(&mut storage)?,
            }
        }
        Commands::Migrate => commands::migrate::run().await?,
    }
    Ok(())
}
