use shared::dto::{BudgetDto, BudgetQuery, BudgetRequest};

use super::category::Category;
use super::codes::{BudgetType, CodeEnum};
use super::transaction::non_blank;

/// Usage level shown on a budget card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetSeverity {
    Normal,
    Warning,
    Danger,
}

impl BudgetSeverity {
    pub const WARNING_THRESHOLD: f64 = 70.0;
    pub const DANGER_THRESHOLD: f64 = 90.0;

    /// `>= 90` is danger, `>= 70` is warning. NaN counts as normal.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= Self::DANGER_THRESHOLD {
            BudgetSeverity::Danger
        } else if percentage >= Self::WARNING_THRESHOLD {
            BudgetSeverity::Warning
        } else {
            BudgetSeverity::Normal
        }
    }
}

/// A spending cap for one category and period. `spent`, `remaining` and
/// `percentage` are computed by the server and taken as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Budget {
    pub id: String,
    pub amount: f64,
    pub budget_type: BudgetType,
    pub month: u32,
    pub year: i32,
    pub notes: Option<String>,
    pub category_id: String,
    pub user_id: String,
    pub category: Option<Category>,
    pub spent: f64,
    pub remaining: f64,
    pub percentage: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<BudgetDto> for Budget {
    fn from(dto: BudgetDto) -> Self {
        Self {
            id: dto.id,
            amount: dto.amount,
            budget_type: BudgetType::from_code(&dto.budget_type),
            month: dto.month,
            year: dto.year,
            notes: dto.notes,
            category_id: dto.category_id,
            user_id: dto.user_id,
            category: dto.category.map(Category::from),
            spent: dto.spent,
            remaining: dto.remaining,
            percentage: dto.percentage,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

impl Budget {
    pub fn severity(&self) -> BudgetSeverity {
        BudgetSeverity::from_percentage(self.percentage)
    }

    /// Progress bar fill in `0.0..=1.0`.
    pub fn progress_fraction(&self) -> f64 {
        clamp_fraction(self.percentage / 100.0)
    }

    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(|c| c.name.as_str()).unwrap_or("-")
    }
}

/// Draft for creating or editing a budget.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    pub amount: f64,
    pub budget_type: BudgetType,
    pub month: u32,
    pub year: i32,
    pub notes: Option<String>,
    pub category_id: String,
}

impl From<&NewBudget> for BudgetRequest {
    fn from(draft: &NewBudget) -> Self {
        Self {
            amount: draft.amount,
            budget_type: draft.budget_type.code().to_string(),
            month: draft.month,
            year: draft.year,
            notes: non_blank(draft.notes.as_deref()),
            category_id: draft.category_id.clone(),
        }
    }
}

/// Filters for `GET /budgets`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetFilter {
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub category_id: Option<String>,
}

impl BudgetFilter {
    pub fn period(month: u32, year: i32) -> Self {
        Self {
            month: Some(month),
            year: Some(year),
            category_id: None,
        }
    }
}

impl From<&BudgetFilter> for BudgetQuery {
    fn from(filter: &BudgetFilter) -> Self {
        Self {
            month: filter.month,
            year: filter.year,
            category_id: filter.category_id.clone(),
        }
    }
}

pub(crate) fn clamp_fraction(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
