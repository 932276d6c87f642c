use shared::dto::{UpdateProfileRequest, UserDto};

use super::transaction::non_blank;

/// The signed-in user's profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub bio: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<UserDto> for UserProfile {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.id,
            username: dto.username,
            email: dto.email,
            first_name: dto.first_name,
            last_name: dto.last_name,
            phone_number: dto.phone_number,
            bio: dto.bio,
            created_at: dto.created_at.unwrap_or_default(),
            updated_at: dto.updated_at.unwrap_or_default(),
        }
    }
}

impl UserProfile {
    /// `first last` when either is set, otherwise the username.
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if full.is_empty() {
            self.username.clone()
        } else {
            full
        }
    }
}

/// Editable profile fields. `None` leaves a field untouched on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub bio: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.phone_number.is_none() && self.bio.is_none()
    }
}

impl From<&ProfileUpdate> for UpdateProfileRequest {
    fn from(update: &ProfileUpdate) -> Self {
        Self {
            first_name: non_blank(update.first_name.as_deref()),
            last_name: non_blank(update.last_name.as_deref()),
            phone_number: non_blank(update.phone_number.as_deref()),
            bio: non_blank(update.bio.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> UserDto {
        UserDto {
            id: "1".to_string(),
            username: "budi".to_string(),
            email: "budi@example.com".to_string(),
            first_name: None,
            last_name: None,
            phone_number: None,
            bio: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_missing_timestamps_become_empty() {
        let profile = UserProfile::from(dto());
        assert_eq!(profile.created_at, "");
        assert_eq!(profile.display_name(), "budi");
    }

    #[test]
    fn test_display_name_joins_names() {
        let profile = UserProfile::from(UserDto {
            first_name: Some("Budi".to_string()),
            last_name: Some("Santoso".to_string()),
            ..dto()
        });
        assert_eq!(profile.display_name(), "Budi Santoso");
    }
}
