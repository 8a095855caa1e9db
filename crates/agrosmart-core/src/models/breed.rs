use serde::{Deserialize, Serialize};

use crate::api::{Resource, Simple};
use crate::validation::{self, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breed {
    pub id: i64,
    pub farm_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreedDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Resource for Breed {
    const PATH: &'static str = "breeds";
    type Shape = Simple;
    type Draft = BreedDraft;
    type Update = BreedDraft;

    fn validate_draft(draft: &BreedDraft) -> Result<()> {
        validation::not_blank("Name", &draft.name)
    }

    fn validate_update(update: &BreedDraft) -> Result<()> {
        validation::not_blank("Name", &update.name)
    }
}
