use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::AppError, models::Clan};

pub const NAME_MAX_LEN: usize = 255;
pub const REGION_MAX_LEN: usize = 10;
pub const SEARCH_MIN_LEN: usize = 3;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateClan {
    pub name: String,
    pub region: String,
}

impl CreateClan {
    /// Trims both fields and checks their lengths, in characters.
    pub fn validate(self) -> Result<Self, AppError> {
        let name = self.name.trim().to_string();
        let region = self.region.trim().to_string();

        check_len("name", &name, NAME_MAX_LEN)?;
        check_len("region", &region, REGION_MAX_LEN)?;

        Ok(Self { name, region })
    }
}

fn check_len(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len == 0 || len > max {
        return Err(AppError::Validation(format!(
            "{field} must be between 1 and {max} characters"
        )));
    }

    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct SearchClans {
    pub name: String,
}

impl SearchClans {
    pub fn validate(self) -> Result<Self, AppError> {
        if self.name.chars().count() < SEARCH_MIN_LEN {
            return Err(AppError::Validation(format!(
                "name must be at least {SEARCH_MIN_LEN} characters"
            )));
        }

        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClanResponse {
    pub id: Uuid,
    pub name: String,
    pub region: String,
    pub created_at: DateTime<Utc>,
}

impl From<Clan> for ClanResponse {
    fn from(clan: Clan) -> Self {
        Self {
            id: clan.id,
            name: clan.name,
            region: clan.region,
            created_at: clan.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, region: &str) -> CreateClan {
        CreateClan {
            name: name.into(),
            region: region.into(),
        }
    }

    #[test]
    fn create_trims_fields() {
        let input = create("  Iron Wolves ", " EU ").validate().unwrap();

        assert_eq!(input.name, "Iron Wolves");
        assert_eq!(input.region, "EU");
    }

    #[test]
    fn create_rejects_blank_and_oversized_fields() {
        assert!(create("   ", "EU").validate().is_err());
        assert!(create("Clan", "").validate().is_err());
        assert!(create(&"x".repeat(256), "EU").validate().is_err());
        assert!(create("Clan", "ELEVENCHARS").validate().is_err());

        assert!(create(&"x".repeat(255), "0123456789").validate().is_ok());
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // ten two-byte characters
        assert!(create("Clan", "ééééééééé é").validate().is_err());
        assert!(create("Clan", "éééééééééé").validate().is_ok());
    }

    #[test]
    fn search_needs_three_characters() {
        assert!(SearchClans { name: "cl".into() }.validate().is_err());
        assert!(SearchClans { name: "cla".into() }.validate().is_ok());
    }

    #[test]
    fn response_renders_canonical_id_and_iso_timestamp() {
        let clan = Clan {
            id: Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap(),
            name: "Iron Wolves".into(),
            region: "EU".into(),
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        };

        let json = serde_json::to_value(ClanResponse::from(clan)).unwrap();

        assert_eq!(json["id"], "67e55044-10b1-426f-9247-bb680e5fe0c8");
        assert_eq!(json["created_at"], "2023-11-14T22:13:20Z");
    }
}
