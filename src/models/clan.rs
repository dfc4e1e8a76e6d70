use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Row, sqlite::SqliteRow};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clan {
    pub id: Uuid,
    pub name: String,
    pub region: String,
    pub created_at: DateTime<Utc>,
}

impl Clan {
    /// Fresh record with a new v4 id, stamped with the current time.
    pub fn new(name: impl Into<String>, region: impl Into<String>) -> Self {
        Self::with_created_at(name, region, Utc::now())
    }

    pub fn with_created_at(
        name: impl Into<String>,
        region: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            region: region.into(),
            created_at,
        }
    }
}

// ids live in a char(36) column, so decode them from text
impl FromRow<'_, SqliteRow> for Clan {
    fn from_row(row: &SqliteRow) -> sqlx::Result<Self> {
        let id: String = row.try_get("id")?;
        let id = Uuid::parse_str(&id).map_err(|e| sqlx::Error::ColumnDecode {
            index: "id".into(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id,
            name: row.try_get("name")?,
            region: row.try_get("region")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
