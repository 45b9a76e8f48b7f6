//! CLI command implementations.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod config;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List categories.
    Categories,
    /// List featured products, or one category's products.
    Products {
        /// Category slug.
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Search products by name.
    Search {
        /// Search text.
        query: String,
    },
    /// Show a product with its related products.
    Product {
        /// Product slug.
        slug: String,
    },
    /// List home screen banners.
    Banners {
        /// Cycle through banners until interrupted.
        #[arg(long)]
        play: bool,
    },
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart (default).
    Show,
    /// Add a product by slug.
    Add {
        /// Product slug.
        slug: String,

        /// Quantity to add.
        #[arg(short, long, default_value = "1")]
        qty: String,
    },
    /// Remove a line.
    Remove {
        /// Product id.
        id: i64,
    },
    /// Add one unit to a line.
    Inc {
        /// Product id.
        id: i64,
    },
    /// Take one unit off a line.
    Dec {
        /// Product id.
        id: i64,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// Place an order for the cart contents.
    Order {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the account command.
#[derive(Args)]
pub struct AccountArgs {
    #[command(subcommand)]
    pub command: AccountCommand,
}

#[derive(Subcommand)]
pub enum AccountCommand {
    /// Log in. Prompts for the password when not given.
    Login {
        /// Username.
        username: String,

        /// Password.
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Create an account. Missing fields are prompted for.
    Register {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
        /// 1 for male, 2 for female.
        #[arg(long)]
        gender: Option<String>,
    },
    /// End the session, dropping its cart.
    Logout {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
