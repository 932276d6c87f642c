use shared::dto::{TransactionDto, TransactionQuery, TransactionRequest, TransactionSummaryDto};

use super::category::Category;
use super::codes::{CodeEnum, TransactionType};

/// A recorded income or expense.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub category_id: String,
    pub kind: TransactionType,
    pub nominal: f64,
    pub description: Option<String>,
    pub date: String,
    pub created_at: String,
    pub updated_at: String,
    pub category: Option<Category>,
}

impl From<TransactionDto> for Transaction {
    fn from(dto: TransactionDto) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            category_id: dto.category_id,
            kind: TransactionType::from_code(&dto.kind),
            nominal: dto.nominal,
            description: dto.description,
            date: dto.date,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
            category: dto.category.map(Category::from),
        }
    }
}

impl Transaction {
    /// Amount with the sign implied by the transaction type.
    pub fn signed_nominal(&self) -> f64 {
        if self.kind.is_income() {
            self.nominal
        } else {
            -self.nominal
        }
    }
}

/// Totals for the home screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransactionSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub transaction_count: u32,
}

impl From<TransactionSummaryDto> for TransactionSummary {
    fn from(dto: TransactionSummaryDto) -> Self {
        Self {
            total_income: dto.total_income,
            total_expense: dto.total_expense,
            balance: dto.balance,
            transaction_count: dto.transaction_count,
        }
    }
}

/// Draft for creating or editing a transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub category_id: String,
    pub kind: TransactionType,
    pub nominal: f64,
    /// `YYYY-MM-DD`
    pub date: String,
    pub description: Option<String>,
}

impl From<&NewTransaction> for TransactionRequest {
    fn from(draft: &NewTransaction) -> Self {
        Self {
            category_id: draft.category_id.clone(),
            kind: draft.kind.code().to_string(),
            nominal: draft.nominal,
            date: draft.date.clone(),
            description: non_blank(draft.description.as_deref()),
        }
    }
}

/// Filters for `GET /transactions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionFilter {
    pub page: u32,
    pub limit: u32,
    pub kind: Option<TransactionType>,
    pub category_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl Default for TransactionFilter {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            kind: None,
            category_id: None,
            start_date: None,
            end_date: None,
        }
    }
}

impl TransactionFilter {
    pub fn first_page(limit: u32) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: Option<TransactionType>) -> Self {
        self.kind = kind;
        self
    }
}

impl From<&TransactionFilter> for TransactionQuery {
    fn from(filter: &TransactionFilter) -> Self {
        Self {
            page: filter.page,
            limit: filter.limit,
            kind: filter.kind.map(|kind| kind.code().to_string()),
            category_id: filter.category_id.clone(),
            start_date: filter.start_date.clone(),
            end_date: filter.end_date.clone(),
        }
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::CategoryDto;

    fn dto(kind: &str) -> TransactionDto {
        TransactionDto {
            id: "t-1".to_string(),
            user_id: "u-1".to_string(),
            category_id: "c-1".to_string(),
            kind: kind.to_string(),
            nominal: 125_000.5,
            description: Some("Makan siang".to_string()),
            date: "2026-10-19".to_string(),
            created_at: "2026-10-19T08:00:00Z".to_string(),
            updated_at: "2026-10-19T08:05:00Z".to_string(),
            category: Some(CategoryDto {
                id: "c-1".to_string(),
                user_id: None,
                name: "Makanan".to_string(),
                kind: "MYSTERY".to_string(),
                created_at: None,
                updated_at: None,
            }),
        }
    }

    #[test]
    fn test_mapping_copies_every_field() {
        let source = dto("INCOME");
        let mapped = Transaction::from(source.clone());
        assert_eq!(mapped.id, source.id);
        assert_eq!(mapped.user_id, source.user_id);
        assert_eq!(mapped.category_id, source.category_id);
        assert_eq!(mapped.kind, TransactionType::Income);
        assert_eq!(mapped.nominal, source.nominal);
        assert_eq!(mapped.description, source.description);
        assert_eq!(mapped.date, source.date);
        assert_eq!(mapped.created_at, source.created_at);
        assert_eq!(mapped.updated_at, source.updated_at);
        assert_eq!(mapped.category.as_ref().map(|c| c.name.as_str()), Some("Makanan"));
    }

    #[test]
    fn test_unknown_types_fall_back_to_expense() {
        let mapped = Transaction::from(dto("REFUND"));
        assert_eq!(mapped.kind, TransactionType::Expense);
        assert_eq!(mapped.category.map(|c| c.kind), Some(TransactionType::Expense));
        assert_eq!(Transaction::from(dto("REFUND")).signed_nominal(), -125_000.5);
    }

    #[test]
    fn test_draft_drops_blank_description() {
        let draft = NewTransaction {
            category_id: "c-1".to_string(),
            kind: TransactionType::Expense,
            nominal: 10_000.0,
            date: "2026-10-19".to_string(),
            description: Some("   ".to_string()),
        };
        let request = TransactionRequest::from(&draft);
        assert_eq!(request.kind, "EXPENSE");
        assert!(request.description.is_none());
    }
}
