use anyhow::{Context, Result};

use agrosmart_core::ApiClient;

use crate::output;

pub async fn run(client: &ApiClient, farm_id: i64, pretty: bool) -> Result<()> {
    let summary = client
        .dashboard(farm_id)
        .await
        .context("Failed to load dashboard")?;

    if pretty {
        return output::json(&summary, true);
    }

    output::field("Farm", &summary.farm_id.to_string());
    output::field("Animals", &summary.animals.to_string());
    output::field("Breeds", &summary.breeds.to_string());
    output::field("Lots", &summary.lots.to_string());
    output::field("Paddocks", &summary.paddocks.to_string());
    output::field("Milkings", &summary.milkings.to_string());
    Ok(())
}
