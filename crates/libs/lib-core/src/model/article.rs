use shared::dto::ArticleDto;

/// A financial-education article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub content: String,
    pub published_date: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ArticleDto> for Article {
    fn from(dto: ArticleDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            content: dto.content,
            published_date: dto.published_date,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

impl Article {
    /// First `max_chars` characters of the content, with `...` when cut.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let mut chars = self.content.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{}...", head.trim_end())
        } else {
            head
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt() {
        let article = Article {
            id: "a-1".to_string(),
            title: "Menabung".to_string(),
            content: "Sisihkan sebagian gaji".to_string(),
            published_date: "2026-10-01".to_string(),
            created_at: String::new(),
            updated_at: String::new(),
        };
        assert_eq!(article.excerpt(8), "Sisihkan...");
        assert_eq!(article.excerpt(100), "Sisihkan sebagian gaji");
    }
}
