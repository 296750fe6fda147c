use models::song::{self, Entity as SongEntity};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::errors::ServiceError;

/// List all songs, any order; empty vec when the table is empty.
pub async fn list_songs(db: &DatabaseConnection) -> Result<Vec<song::Model>, ServiceError> {
    let rows = SongEntity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Get a song by id; absence is `None`, never an error.
pub async fn get_song(db: &DatabaseConnection, id: i32) -> Result<Option<song::Model>, ServiceError> {
    let found = SongEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}

/// Create a song after validation; the id is assigned by the backend.
pub async fn create_song(
    db: &DatabaseConnection,
    title: &str,
    artist: &str,
    release_date: DateTimeWithTimeZone,
) -> Result<song::Model, ServiceError> {
    // validations are in models::song
    let created = song::create(db, title, artist, release_date).await?;
    Ok(created)
}

/// Full replace of title/artist/release_date on the record matching `id`.
/// Returns `Ok(false)` when no such record exists.
pub async fn update_song(
    db: &DatabaseConnection,
    id: i32,
    input: &song::Model,
) -> Result<bool, ServiceError> {
    if input.id != id {
        return Err(ServiceError::Validation("ID mismatch".into()));
    }
    song::validate_fields(&input.title, &input.artist)?;

    let current = SongEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let Some(existing) = current else { return Ok(false) };

    // explicit field-by-field overwrite; mutation intent stays visible
    let mut am: song::ActiveModel = existing.into();
    am.title = Set(input.title.clone());
    am.artist = Set(input.artist.clone());
    am.release_date = Set(input.release_date);

    match am.update(db).await {
        Ok(_) => Ok(true),
        Err(e) => {
            // Write conflict: re-check existence once. A concurrently deleted
            // record is a not-found, anything else is fatal.
            if !song::exists(db, id).await? {
                Ok(false)
            } else {
                Err(ServiceError::Db(e.to_string()))
            }
        }
    }
}

/// Delete a song; returns true if a record was removed.
pub async fn delete_song(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = SongEntity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
