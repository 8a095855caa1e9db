use serde::Serialize;
use tracing::instrument;

use super::client::{ApiClient, Result};
use crate::models::{Animal, Breed, Lot, Milking, PageRequest, Paddock};

/// Item counts per resource for one farm.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FarmSummary {
    pub farm_id: i64,
    pub animals: u64,
    pub breeds: u64,
    pub lots: u64,
    pub paddocks: u64,
    pub milkings: u64,
}

impl ApiClient {
    /// Fetch all five collections concurrently and count them.
    ///
    /// Paginated resources are asked for a single item; their count comes
    /// from `totalItems`.
    #[instrument(skip(self))]
    pub async fn dashboard(&self, farm_id: i64) -> Result<FarmSummary> {
        let single = PageRequest::new(0, 1);
        let animals = self.resource::<Animal>();
        let milkings = self.resource::<Milking>();
        let breeds = self.resource::<Breed>();
        let lots = self.resource::<Lot>();
        let paddocks = self.resource::<Paddock>();

        let (animals, milkings, breeds, lots, paddocks) = futures::try_join!(
            animals.list(farm_id, &single),
            milkings.list(farm_id, &single),
            breeds.list(farm_id, &()),
            lots.list(farm_id, &single),
            paddocks.list(farm_id, &single),
        )?;

        Ok(FarmSummary {
            farm_id,
            animals: animals.total_items(),
            breeds: breeds.len() as u64,
            lots: lots.total_items(),
            paddocks: paddocks.total_items(),
            milkings: milkings.total_items(),
        })
    }
}
