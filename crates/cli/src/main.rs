//! Headless WooCommerce CLI - connectivity diagnostics and catalog inspection.
//!
//! # Usage
//!
//! ```bash
//! # Check WordPress, store info and catalog access
//! woo-cli diagnose
//!
//! # List products (JSON)
//! woo-cli products --per-page 5 --on-sale
//!
//! # Look up a single product
//! woo-cli product --slug linen-shirt
//!
//! # Featured products, with the source that answered
//! woo-cli featured --limit 4
//! ```
//!
//! Reads the same environment variables as the storefront server
//! (`WORDPRESS_URL`, `WC_CONSUMER_KEY`, `WC_CONSUMER_SECRET`, ...).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use headless_woo_storefront::config::StorefrontConfig;
use headless_woo_storefront::state::AppState;

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "woo-cli")]
#[command(author, version, about = "Headless WooCommerce CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the connectivity checks (exit code 1 on any failure)
    Diagnose,
    /// List products
    Products {
        /// Page size
        #[arg(long)]
        per_page: Option<u32>,

        /// Page number (1-based)
        #[arg(long)]
        page: Option<u32>,

        /// Free-text search
        #[arg(short, long)]
        search: Option<String>,

        /// Category ID
        #[arg(short, long)]
        category: Option<u64>,

        /// Only featured products
        #[arg(long)]
        featured: bool,

        /// Only products on sale
        #[arg(long)]
        on_sale: bool,
    },
    /// Show a single product
    Product {
        /// Product ID
        #[arg(long, conflicts_with = "slug", required_unless_present = "slug")]
        id: Option<u64>,

        /// Product slug
        #[arg(long)]
        slug: Option<String>,
    },
    /// List product categories
    Categories {
        /// Page size
        #[arg(long)]
        per_page: Option<u32>,

        /// Skip categories without products
        #[arg(long)]
        hide_empty: bool,
    },
    /// List featured products
    Featured {
        /// Maximum number of products
        #[arg(short, long, default_value_t = headless_woo_storefront::woocommerce::DEFAULT_FEATURED_LIMIT)]
        limit: u32,
    },
    /// Show store metadata
    StoreInfo,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "headless_woo_storefront=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = StorefrontConfig::from_env()?;
    let state = AppState::new(config)?;

    match cli.command {
        Commands::Diagnose => commands::diagnose::run(&state).await?,
        Commands::Products {
            per_page,
            page,
            search,
            category,
            featured,
            on_sale,
        } => {
            let filter = commands::catalog::ProductFilter {
                per_page,
                page,
                search,
                category,
                featured,
                on_sale,
            };
            commands::catalog::products(&state, filter).await?;
        }
        Commands::Product { id, slug } => {
            commands::catalog::product(&state, id, slug.as_deref()).await?;
        }
        Commands::Categories {
            per_page,
            hide_empty,
        } => commands::catalog::categories(&state, per_page, hide_empty).await?,
        Commands::Featured { limit } => commands::catalog::featured(&state, limit).await?,
        Commands::StoreInfo => commands::catalog::store_info(&state).await?,
    }
    Ok(())
}
