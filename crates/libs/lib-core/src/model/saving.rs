use shared::dto::{SavingDto, SavingRequest};

use super::budget::clamp_fraction;
use super::codes::{CodeEnum, FillingPlan};

/// A savings goal. `progress` is a server-computed percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct Saving {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub filling_plan: FillingPlan,
    pub progress: f64,
    pub user_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<SavingDto> for Saving {
    fn from(dto: SavingDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            target_amount: dto.target_amount,
            current_amount: dto.current_amount,
            filling_plan: FillingPlan::from_code(&dto.filling_plan),
            progress: dto.progress,
            user_id: dto.user_id,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

impl Saving {
    pub fn progress_fraction(&self) -> f64 {
        clamp_fraction(self.progress / 100.0)
    }

    pub fn is_reached(&self) -> bool {
        self.current_amount >= self.target_amount
    }
}

/// Draft for creating or editing a savings goal.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSaving {
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub filling_plan: FillingPlan,
}

impl From<&NewSaving> for SavingRequest {
    fn from(draft: &NewSaving) -> Self {
        Self {
            name: draft.name.trim().to_string(),
            target_amount: draft.target_amount,
            current_amount: draft.current_amount,
            filling_plan: draft.filling_plan.code().to_string(),
        }
    }
}
