use shared::dto::{CategoryDto, CategoryRequest};

use super::codes::{CodeEnum, TransactionType};

/// Income or expense category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub kind: TransactionType,
}

impl From<CategoryDto> for Category {
    fn from(dto: CategoryDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            kind: TransactionType::from_code(&dto.kind),
        }
    }
}

/// Draft for creating or renaming a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub kind: TransactionType,
}

impl From<&NewCategory> for CategoryRequest {
    fn from(draft: &NewCategory) -> Self {
        Self {
            name: draft.name.trim().to_string(),
            kind: draft.kind.code().to_string(),
        }
    }
}
