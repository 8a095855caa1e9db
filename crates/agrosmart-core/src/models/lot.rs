use serde::{Deserialize, Serialize};

use crate::api::{Paginated, Resource};
use crate::validation::{self, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    pub id: i64,
    pub farm_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Resource for Lot {
    const PATH: &'static str = "lots";
    type Shape = Paginated;
    type Draft = LotDraft;
    type Update = LotDraft;

    fn validate_draft(draft: &LotDraft) -> Result<()> {
        validation::not_blank("Name", &draft.name)
    }

    fn validate_update(update: &LotDraft) -> Result<()> {
        validation::not_blank("Name", &update.name)
    }
}
