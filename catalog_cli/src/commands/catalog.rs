//! Catalog subcommands

use anyhow::{Context, Result};
use catalog_client_core::api::{CatalogSpec, ProductSearchApi};
use catalog_client_core::ProductSearchClient;
use clap::Subcommand;

use crate::config::AppConfig;
use crate::output;

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// Create an empty catalog
    ///
    /// The catalog will not appear in listings until a reference image is
    /// added, so keep the name printed here.
    Create,

    /// Delete a catalog by resource name
    Delete {
        /// Catalog resource name (productSearch/catalogs/{id})
        catalog_name: String,
    },

    /// Bulk-import reference images from a CSV manifest in remote storage
    Import {
        /// Storage URI of the CSV manifest (e.g. gs://bucket/manifest.csv)
        csv_file_uri: String,
    },
}

pub async fn execute(config: AppConfig, command: CatalogCommand) -> Result<()> {
    let use_color = config.output.color_enabled;
    let client = ProductSearchClient::new(config.client_config())
        .context("Failed to create product search client")?;

    match command {
        CatalogCommand::Create => {
            let catalog = client.create_catalog(CatalogSpec::default()).await?;
            output::print_catalog_created(&catalog, use_color);
        }
        CatalogCommand::Delete { catalog_name } => {
            client.delete_catalog(&catalog_name).await?;
            log::info!("Deleted catalog {catalog_name}");
        }
        CatalogCommand::Import { csv_file_uri } => {
            let operation = client.import_catalogs(&csv_file_uri).await?;
            output::print_operation(&operation, use_color);
        }
    }

    Ok(())
}
