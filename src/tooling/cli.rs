//! CLI Tooling
//!
//! Console front end over the product facade. The record store lives only for
//! the duration of the process, so the binary runs as an interactive session
//! rather than one-shot subcommands: one session, one catalog.

use crate::config::{PantryConfig, DEFAULT_CONFIG_FILE};
use crate::error::CatalogError;
use crate::facade::ProductFacade;
use crate::types::{Product, ProductId};
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use owo_colors::OwoColorize;
use std::path::PathBuf;

/// Pantry - product catalog with a filesystem image store
#[derive(Parser)]
#[command(name = "pantry")]
#[command(about = "Product catalog with a filesystem-backed image store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory relative image source paths resolve against
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Directory stored images are written to
    #[arg(long)]
    pub image_root: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default pantry.toml in the working directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Resolved configuration plus the facade the session drives.
pub struct CliContext {
    pub config: PantryConfig,
}

impl CliContext {
    /// Load configuration and fold in CLI overrides.
    pub fn new(cli: &Cli) -> Result<Self, CatalogError> {
        let mut config = match &cli.config {
            Some(path) => PantryConfig::load_from_file(path),
            None => PantryConfig::load(),
        }
        .map_err(|e| CatalogError::Config(e.to_string()))?;

        if let Some(root) = &cli.source_root {
            config.source_root = root.clone();
        }
        if let Some(root) = &cli.image_root {
            config.image_root = root.clone();
        }
        if let Some(level) = &cli.log_level {
            config.logging.level = level.clone();
        }

        Ok(Self { config })
    }

    pub fn execute(&self, command: &Commands) -> Result<String, CatalogError> {
        match command {
            Commands::Init { force } => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() && !force {
                    return Err(CatalogError::Config(format!(
                        "{} already exists (use --force to overwrite)",
                        path.display()
                    )));
                }
                PantryConfig::default().write_to(&path)?;
                Ok(format!("Wrote {}", path.display()))
            }
        }
    }
}

const MENU: &[&str] = &[
    "List products",
    "Show product",
    "Add product",
    "Update product",
    "Remove product",
    "Quit",
];

/// Run the interactive catalog session until the user quits.
pub fn run_session(facade: &mut ProductFacade) -> Result<(), CatalogError> {
    let theme = ColorfulTheme::default();
    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("pantry")
            .items(MENU)
            .default(0)
            .interact()
            .map_err(|e| CatalogError::Config(format!("Prompt failed: {}", e)))?;

        let outcome = match choice {
            0 => cmd_list(facade),
            1 => cmd_show(facade, &theme),
            2 => cmd_add(facade, &theme),
            3 => cmd_update(facade, &theme),
            4 => cmd_remove(facade, &theme),
            _ => return Ok(()),
        };

        // Catalog failures are user-level outcomes here, not session aborts.
        match outcome {
            Ok(message) => println!("{}", message),
            Err(e) => eprintln!("{} {}", "Error:".red(), e),
        }
    }
}

fn cmd_list(facade: &ProductFacade) -> Result<String, CatalogError> {
    let products = facade.get_all();
    if products.is_empty() {
        return Ok("No products in the catalog.".to_string());
    }
    Ok(render_table(products, facade))
}

fn cmd_show(facade: &ProductFacade, theme: &ColorfulTheme) -> Result<String, CatalogError> {
    let id = prompt_id(theme)?;
    let product = facade.get_by_id(id)?;
    let mut out = serde_json::to_string_pretty(product)
        .map_err(|e| CatalogError::Config(format!("Failed to render product: {}", e)))?;
    match facade.image_path(id) {
        Ok(path) => out.push_str(&format!("\nstored image: {}", path.display())),
        Err(CatalogError::ImageNotFound(_)) => out.push_str("\nstored image: none"),
        Err(e) => return Err(e),
    }
    Ok(out)
}

fn cmd_add(facade: &mut ProductFacade, theme: &ColorfulTheme) -> Result<String, CatalogError> {
    let product = prompt_product(theme, None)?;
    let id = product.id;
    let stored = facade.append(product)?;
    if stored {
        Ok(format!("{} product {} added, image stored", "Ok:".green(), id))
    } else {
        Ok(format!(
            "{} product {} added without a stored image (source unreadable)",
            "Warning:".yellow(),
            id
        ))
    }
}

fn cmd_update(facade: &mut ProductFacade, theme: &ColorfulTheme) -> Result<String, CatalogError> {
    let id = prompt_id(theme)?;
    let product = prompt_product(theme, Some(id))?;
    let stored = facade.update(id, product)?;
    if stored {
        Ok(format!("{} product {} updated", "Ok:".green(), id))
    } else {
        Ok(format!(
            "{} product {} updated without a stored image (source unreadable)",
            "Warning:".yellow(),
            id
        ))
    }
}

fn cmd_remove(facade: &mut ProductFacade, theme: &ColorfulTheme) -> Result<String, CatalogError> {
    let id = prompt_id(theme)?;
    let confirmed = Confirm::with_theme(theme)
        .with_prompt(format!("Remove product {} and its stored image?", id))
        .default(false)
        .interact()
        .map_err(|e| CatalogError::Config(format!("Prompt failed: {}", e)))?;
    if !confirmed {
        return Ok("Cancelled.".to_string());
    }
    facade.remove(id)?;
    Ok(format!("{} product {} removed", "Ok:".green(), id))
}

fn prompt_id(theme: &ColorfulTheme) -> Result<ProductId, CatalogError> {
    Input::with_theme(theme)
        .with_prompt("Product id")
        .interact_text()
        .map_err(|e| CatalogError::Config(format!("Prompt failed: {}", e)))
}

fn prompt_product(
    theme: &ColorfulTheme,
    fixed_id: Option<ProductId>,
) -> Result<Product, CatalogError> {
    let id = match fixed_id {
        Some(id) => id,
        None => prompt_id(theme)?,
    };
    let description: String = Input::with_theme(theme)
        .with_prompt("Description")
        .interact_text()
        .map_err(|e| CatalogError::Config(format!("Prompt failed: {}", e)))?;
    let price: f64 = Input::with_theme(theme)
        .with_prompt("Price")
        .validate_with(|value: &f64| {
            if *value >= 0.0 {
                Ok(())
            } else {
                Err("price must be non-negative")
            }
        })
        .interact_text()
        .map_err(|e| CatalogError::Config(format!("Prompt failed: {}", e)))?;
    let image: String = Input::with_theme(theme)
        .with_prompt("Image source path (empty for none)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| CatalogError::Config(format!("Prompt failed: {}", e)))?;

    Ok(Product::new(id, description, price, image))
}

fn render_table(products: &[Product], facade: &ProductFacade) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Id", "Description", "Price", "Stored image"]);

    for product in products {
        let stored = match facade.image_path(product.id) {
            Ok(path) => path.display().to_string(),
            Err(_) => "-".to_string(),
        };
        table.add_row(vec![
            Cell::new(product.id),
            Cell::new(&product.description),
            Cell::new(format!("{:.2}", product.price)),
            Cell::new(stored),
        ]);
    }

    table.to_string()
}
