use serde::{Deserialize, Serialize};

use crate::api::{Paginated, Resource};
use crate::validation::{self, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaddockType {
    #[default]
    Pasture,
    Corral,
    Stable,
    Other,
}

impl PaddockType {
    pub fn label(&self) -> &'static str {
        match self {
            PaddockType::Pasture => "Pasture",
            PaddockType::Corral => "Corral",
            PaddockType::Stable => "Stable",
            PaddockType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paddock {
    pub id: i64,
    pub farm_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    /// Area in hectares
    pub surface: Option<f64>,
    #[serde(rename = "type", default)]
    pub kind: PaddockType,
    pub location: Option<String>,
    pub status: Option<String>,
}

impl Paddock {
    pub fn display_surface(&self) -> String {
        match self.surface {
            Some(surface) => format!("{} ha", surface),
            None => "-".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaddockDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<f64>,
    #[serde(rename = "type", default)]
    pub kind: PaddockType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl PaddockDraft {
    pub fn validate(&self) -> Result<()> {
        validation::not_blank("Name", &self.name)?;
        if let Some(surface) = self.surface {
            validation::non_negative("Surface", surface)?;
        }
        Ok(())
    }
}

impl Resource for Paddock {
    const PATH: &'static str = "paddocks";
    type Shape = Paginated;
    type Draft = PaddockDraft;
    type Update = PaddockDraft;

    fn validate_draft(draft: &PaddockDraft) -> Result<()> {
        draft.validate()
    }

    fn validate_update(update: &PaddockDraft) -> Result<()> {
        update.validate()
    }
}
