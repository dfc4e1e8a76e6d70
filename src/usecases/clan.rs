use anyhow::Result;
use uuid::Uuid;

use crate::{
    dto::clan::CreateClan, infrastructure::database::DbPoolManager, models::Clan, repository,
};

// every call checks out its own connection; it goes back to the pool on drop,
// whichever way the function returns

pub async fn create(db: &DbPoolManager, input: &CreateClan) -> Result<Clan> {
    let mut conn = db.acquire().await?;

    let clan = Clan::new(input.name.as_str(), input.region.as_str());
    repository::clan::insert(&mut *conn, &clan).await?;

    tracing::info!("created clan {} ({})", clan.name, clan.id);

    Ok(clan)
}

pub async fn list_all(db: &DbPoolManager) -> Result<Vec<Clan>> {
    let mut conn = db.acquire().await?;

    repository::clan::fetch_all(&mut *conn).await
}

/// The caller is responsible for enforcing a minimum query length.
pub async fn search_by_name(db: &DbPoolManager, name: &str) -> Result<Vec<Clan>> {
    let mut conn = db.acquire().await?;

    repository::clan::search_by_name(&mut *conn, name).await
}

pub async fn get_by_id(db: &DbPoolManager, clan_id: Uuid) -> Result<Option<Clan>> {
    let mut conn = db.acquire().await?;

    repository::clan::fetch_by_id(&mut *conn, clan_id).await
}

/// `false` when no clan had that id.
pub async fn delete(db: &DbPoolManager, clan_id: Uuid) -> Result<bool> {
    let mut conn = db.acquire().await?;

    let deleted = repository::clan::delete(&mut *conn, clan_id).await?;
    if deleted {
        tracing::info!("deleted clan {clan_id}");
    }

    Ok(deleted)
}
