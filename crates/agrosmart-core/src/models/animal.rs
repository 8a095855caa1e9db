use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::{Paginated, Resource};
use crate::validation::{self, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnimalStatus {
    #[default]
    Active,
    Sold,
    Deceased,
    Transferred,
}

impl AnimalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AnimalStatus::Active => "Active",
            AnimalStatus::Sold => "Sold",
            AnimalStatus::Deceased => "Deceased",
            AnimalStatus::Transferred => "Transferred",
        }
    }

    /// Whether the animal still counts towards the herd.
    pub fn is_in_herd(&self) -> bool {
        matches!(self, AnimalStatus::Active)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: i64,
    pub farm_id: Option<i64>,
    pub name: String,
    pub earring: String,
    pub code: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub sex: Sex,
    pub lot_id: Option<i64>,
    pub breed_id: Option<i64>,
    pub paddock_id: Option<i64>,
    pub entry: Option<String>,
    pub acquisition: Option<String>,
    pub origin: Option<String>,
    #[serde(default)]
    pub status: AnimalStatus,
    pub weight: Option<f64>,
    pub color: Option<String>,
    pub observations: Option<String>,
}

impl Animal {
    /// Name with the ear tag, as shown in pickers: "Lola (A-102)"
    pub fn display_name(&self) -> String {
        match self.code.as_deref().filter(|c| !c.is_empty()) {
            Some(code) => format!("{} ({})", self.name, code),
            None => format!("{} ({})", self.name, self.earring),
        }
    }

    /// Age in whole years at `today`, if the birth date is known.
    pub fn age_years(&self, today: NaiveDate) -> Option<u32> {
        self.birth_date.and_then(|born| today.years_since(born))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalDraft {
    pub name: String,
    pub earring: String,
    pub birth_date: NaiveDate,
    pub sex: Sex,
    pub lot_id: i64,
    pub breed_id: i64,
    pub paddock_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquisition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default)]
    pub status: AnimalStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
}

impl AnimalDraft {
    pub fn validate(&self) -> Result<()> {
        validation::not_blank("Name", &self.name)?;
        validation::not_blank("Earring", &self.earring)?;
        validation::positive_id("Lot", self.lot_id)?;
        validation::positive_id("Breed", self.breed_id)?;
        validation::positive_id("Paddock", self.paddock_id)?;
        if let Some(weight) = self.weight {
            validation::non_negative("Weight", weight)?;
        }
        Ok(())
    }
}

impl Resource for Animal {
    const PATH: &'static str = "animals";
    type Shape = Paginated;
    type Draft = AnimalDraft;
    type Update = AnimalDraft;

    fn validate_draft(draft: &AnimalDraft) -> Result<()> {
        draft.validate()
    }

    fn validate_update(update: &AnimalDraft) -> Result<()> {
        update.validate()
    }
}
