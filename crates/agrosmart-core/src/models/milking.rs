use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::{Paginated, Resource};
use crate::validation::{self, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Shift {
    Morning,
    Afternoon,
    Night,
}

impl Shift {
    pub fn label(&self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Afternoon => "Afternoon",
            Shift::Night => "Night",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milking {
    pub id: i64,
    pub farm_id: Option<i64>,
    pub date: NaiveDate,
    pub shift: Shift,
    /// Litres collected
    pub quantity: f64,
    pub observations: Option<String>,
    pub animal_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilkingDraft {
    pub date: NaiveDate,
    pub shift: Shift,
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    pub animal_id: i64,
}

impl MilkingDraft {
    pub fn validate(&self) -> Result<()> {
        validation::non_negative("Quantity", self.quantity)?;
        validation::positive_id("Animal", self.animal_id)
    }
}

impl Resource for Milking {
    const PATH: &'static str = "milkings";
    type Shape = Paginated;
    type Draft = MilkingDraft;
    type Update = MilkingDraft;

    fn validate_draft(draft: &MilkingDraft) -> Result<()> {
        draft.validate()
    }

    fn validate_update(update: &MilkingDraft) -> Result<()> {
        update.validate()
    }
}
