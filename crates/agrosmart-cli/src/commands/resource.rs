//! CRUD subcommands shared by every farm resource.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use agrosmart_core::api::{ListShape, Paginated, Simple};
use agrosmart_core::models::{Page, PageRequest, DEFAULT_PAGE_SIZE};
use agrosmart_core::{ApiClient, Resource};

use crate::output;

#[derive(Args, Debug)]
pub struct ResourceCommand {
    #[command(subcommand)]
    pub action: ResourceAction,
}

#[derive(Subcommand, Debug)]
pub enum ResourceAction {
    /// List the collection
    List {
        /// Zero-based page (paginated resources only)
        #[arg(long)]
        page: Option<u32>,

        /// Page size (paginated resources only)
        #[arg(long)]
        size: Option<u32>,
    },

    /// Fetch one item
    Get { id: i64 },

    /// Create an item from a JSON file ("-" reads stdin)
    Create {
        #[arg(long)]
        file: PathBuf,
    },

    /// Update an item from a JSON file ("-" reads stdin)
    Update {
        id: i64,

        #[arg(long)]
        file: PathBuf,
    },

    /// Delete an item
    Delete { id: i64 },
}

/// How the CLI builds list parameters and prints list results for a shape.
pub trait CliShape: ListShape {
    fn params(page: Option<u32>, size: Option<u32>) -> Self::Params;

    fn render<R>(list: &Self::Output<R>, pretty: bool) -> Result<()>
    where
        R: DeserializeOwned + Serialize;
}

impl CliShape for Paginated {
    fn params(page: Option<u32>, size: Option<u32>) -> PageRequest {
        PageRequest::new(page.unwrap_or(0), size.unwrap_or(DEFAULT_PAGE_SIZE))
    }

    fn render<R>(list: &Page<R>, pretty: bool) -> Result<()>
    where
        R: DeserializeOwned + Serialize,
    {
        output::json_lines(&list.items, pretty)?;
        output::hint(&list.pagination_info.describe());
        if list.has_next() {
            output::hint(&format!(
                "More items available: --page {}",
                list.pagination_info.current_page + 1
            ));
        }
        Ok(())
    }
}

impl CliShape for Simple {
    fn params(page: Option<u32>, size: Option<u32>) {
        if page.is_some() || size.is_some() {
            warn!("--page and --size are ignored for unpaginated resources");
        }
    }

    fn render<R>(list: &Vec<R>, pretty: bool) -> Result<()>
    where
        R: DeserializeOwned + Serialize,
    {
        if list.is_empty() {
            output::hint("No items found.");
            return Ok(());
        }
        output::json_lines(list, pretty)
    }
}

/// Read a JSON request body from `path`, or from stdin when it is `-`.
fn read_body<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read request body from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };
    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid request body in {}", path.display()))
}

pub async fn run<R>(
    client: &ApiClient,
    farm_id: i64,
    action: ResourceAction,
    pretty: bool,
) -> Result<()>
where
    R: Resource + Serialize,
    R::Shape: CliShape,
    R::Draft: DeserializeOwned,
    R::Update: DeserializeOwned,
{
    let api = client.resource::<R>();

    match action {
        ResourceAction::List { page, size } => {
            let params = <R::Shape as CliShape>::params(page, size);
            let items = api
                .list(farm_id, &params)
                .await
                .with_context(|| format!("Failed to list {}", R::PATH))?;
            <R::Shape as CliShape>::render::<R>(&items, pretty)
        }
        ResourceAction::Get { id } => {
            let item = api
                .get(farm_id, id)
                .await
                .with_context(|| format!("Failed to fetch {} {}", R::PATH, id))?;
            output::json(&item, pretty)
        }
        ResourceAction::Create { file } => {
            let draft: R::Draft = read_body(&file)?;
            let created = api
                .create(farm_id, &draft)
                .await
                .with_context(|| format!("Failed to create in {}", R::PATH))?;
            output::json(&created, pretty)?;
            output::success("Created");
            Ok(())
        }
        ResourceAction::Update { id, file } => {
            let update: R::Update = read_body(&file)?;
            let updated = api
                .update(farm_id, id, &update)
                .await
                .with_context(|| format!("Failed to update {} {}", R::PATH, id))?;
            output::json(&updated, pretty)?;
            output::success("Updated");
            Ok(())
        }
        ResourceAction::Delete { id } => {
            api.delete(farm_id, id)
                .await
                .with_context(|| format!("Failed to delete {} {}", R::PATH, id))?;
            output::success(&format!("Deleted {} {}", R::PATH, id));
            Ok(())
        }
    }
}
