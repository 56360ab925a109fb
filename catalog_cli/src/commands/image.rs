//! Reference image subcommands

use anyhow::{Context, Result};
use catalog_client_core::api::{ProductSearchApi, ReferenceImageList};
use catalog_client_core::ProductSearchClient;
use clap::Subcommand;

use crate::config::AppConfig;
use crate::output;

#[derive(Subcommand)]
pub enum ImageCommand {
    /// Create a reference image under a catalog
    Create {
        /// Catalog resource name (productSearch/catalogs/{id})
        #[arg(long = "catalog", value_name = "CATALOG_NAME")]
        catalog_name: String,

        /// Storage URI of the image content
        #[arg(long)]
        image_uri: String,

        /// Product identifier to associate the image with
        #[arg(long)]
        product_id: String,
    },

    /// List reference images in a catalog
    List {
        /// Catalog resource name (productSearch/catalogs/{id})
        #[arg(long = "catalog", value_name = "CATALOG_NAME")]
        catalog_name: String,

        /// Only list images for this product (all products when omitted)
        #[arg(long)]
        product_id: Option<String>,
    },

    /// Fetch one reference image by resource name
    Get {
        /// Reference image resource name
        reference_image_name: String,
    },

    /// Delete one reference image by resource name
    Delete {
        /// Reference image resource name
        reference_image_name: String,
    },

    /// Delete every reference image for a product within a catalog
    Purge {
        /// Catalog resource name (productSearch/catalogs/{id})
        #[arg(long = "catalog", value_name = "CATALOG_NAME")]
        catalog_name: String,

        /// Product whose reference images are removed
        #[arg(long)]
        product_id: String,
    },
}

pub async fn execute(config: AppConfig, command: ImageCommand) -> Result<()> {
    let use_color = config.output.color_enabled;
    let client = ProductSearchClient::new(config.client_config())
        .context("Failed to create product search client")?;

    match command {
        ImageCommand::Create {
            catalog_name,
            image_uri,
            product_id,
        } => {
            let image = client
                .create_reference_image(&catalog_name, &image_uri, &product_id)
                .await?;
            output::print_reference_image_created(&image, use_color);
        }
        ImageCommand::List {
            catalog_name,
            product_id,
        } => {
            let mut list =
                ReferenceImageList::new(&client, &catalog_name, product_id.as_deref());
            while let Some(image) = list.next().await? {
                output::print_reference_image(&image, use_color);
            }
        }
        ImageCommand::Get {
            reference_image_name,
        } => {
            let image = client.get_reference_image(&reference_image_name).await?;
            output::print_reference_image(&image, use_color);
        }
        ImageCommand::Delete {
            reference_image_name,
        } => {
            client.delete_reference_image(&reference_image_name).await?;
            log::info!("Deleted reference image {reference_image_name}");
        }
        ImageCommand::Purge {
            catalog_name,
            product_id,
        } => {
            client
                .delete_reference_images(&catalog_name, &product_id)
                .await?;
            log::info!("Deleted reference images for product {product_id} in {catalog_name}");
        }
    }

    Ok(())
}
