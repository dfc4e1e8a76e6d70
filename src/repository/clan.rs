use anyhow::Result;
use sqlx::SqliteExecutor;
use uuid::Uuid;

use crate::models::Clan;

pub async fn insert<'e, E>(db: E, clan: &Clan) -> Result<()>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query(
        "insert into clans (id, name, name_folded, region, created_at) values (?, ?, ?, ?, ?)",
    )
    .bind(clan.id.to_string())
    .bind(&clan.name)
    .bind(clan.name.to_lowercase())
    .bind(&clan.region)
    .bind(clan.created_at)
    .execute(db)
    .await?;

    Ok(())
}

pub async fn fetch_all<'e, E>(db: E) -> Result<Vec<Clan>>
where
    E: SqliteExecutor<'e>,
{
    let clans = sqlx::query_as::<_, Clan>("select id, name, region, created_at from clans")
        .fetch_all(db)
        .await?;

    Ok(clans)
}

/// Case-insensitive "contains" match on the clan name. Both sides are
/// lowercased in rust, since sqlite's `like` only folds ascii. `like`
/// wildcards in `name` are escaped so they match literally.
pub async fn search_by_name<'e, E>(db: E, name: &str) -> Result<Vec<Clan>>
where
    E: SqliteExecutor<'e>,
{
    let pattern = format!("%{}%", escape_like(&name.to_lowercase()));

    let clans = sqlx::query_as::<_, Clan>(
        "select id, name, region, created_at from clans where name_folded like ? escape '\\'",
    )
    .bind(pattern)
    .fetch_all(db)
    .await?;

    Ok(clans)
}

pub async fn fetch_by_id<'e, E>(db: E, clan_id: Uuid) -> Result<Option<Clan>>
where
    E: SqliteExecutor<'e>,
{
    let clan = sqlx::query_as::<_, Clan>(
        "select id, name, region, created_at from clans where id = ?",
    )
    .bind(clan_id.to_string())
    .fetch_optional(db)
    .await?;

    Ok(clan)
}

/// Returns whether a row was removed.
pub async fn delete<'e, E>(db: E, clan_id: Uuid) -> Result<bool>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("delete from clans where id = ?")
        .bind(clan_id.to_string())
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
pub async fn count<'e, E>(db: E) -> Result<i64>
where
    E: SqliteExecutor<'e>,
{
    let (count,): (i64,) = sqlx::query_as("select count(*) from clans")
        .fetch_one(db)
        .await?;

    Ok(count)
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::create_memory_pool;

    #[test]
    fn escapes_like_wildcards() {
        assert_eq!(escape_like("100%_a\\b"), "100\\%\\_a\\\\b");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[tokio::test]
    async fn insert_and_fetch_by_id() {
        let db = create_memory_pool().await.unwrap();
        let clan = Clan::new("Iron Wolves", "EU");

        insert(db.as_ref(), &clan).await.unwrap();

        let fetched = fetch_by_id(db.as_ref(), clan.id).await.unwrap();
        assert_eq!(fetched, Some(clan));
    }

    #[tokio::test]
    async fn search_treats_wildcards_literally() {
        let db = create_memory_pool().await.unwrap();
        insert(db.as_ref(), &Clan::new("100% Pure", "EU")).await.unwrap();
        insert(db.as_ref(), &Clan::new("1000 Pure", "EU")).await.unwrap();

        let found = search_by_name(db.as_ref(), "0% P").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "100% Pure");
    }

    #[tokio::test]
    async fn search_folds_non_ascii_case() {
        let db = create_memory_pool().await.unwrap();
        insert(db.as_ref(), &Clan::new("Éclair Guild", "EU")).await.unwrap();
        insert(db.as_ref(), &Clan::new("ÜBER clan", "EU")).await.unwrap();

        let found = search_by_name(db.as_ref(), "éclair").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Éclair Guild");

        let found = search_by_name(db.as_ref(), "über").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "ÜBER clan");
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_went_away() {
        let db = create_memory_pool().await.unwrap();
        let clan = Clan::new("Gone Soon", "NA");
        insert(db.as_ref(), &clan).await.unwrap();

        assert!(delete(db.as_ref(), clan.id).await.unwrap());
        assert!(!delete(db.as_ref(), clan.id).await.unwrap());
        assert_eq!(count(db.as_ref()).await.unwrap(), 0);
    }
}
