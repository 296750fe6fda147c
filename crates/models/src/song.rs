use sea_orm::{entity::prelude::*, ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "song")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub artist: String,
    pub release_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Title and artist must be non-empty after trimming.
pub fn validate_fields(title: &str, artist: &str) -> Result<(), ModelError> {
    if title.trim().is_empty() || artist.trim().is_empty() {
        return Err(ModelError::Validation("Title and Artist are required".into()));
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    title: &str,
    artist: &str,
    release_date: DateTimeWithTimeZone,
) -> Result<Model, ModelError> {
    validate_fields(title, artist)?;

    // id is backend-assigned on insert
    let am = ActiveModel {
        id: NotSet,
        title: Set(title.to_string()),
        artist: Set(artist.to_string()),
        release_date: Set(release_date),
    };
    am.insert(db).await.map_err(|e| ModelError::Db(e.to_string()))
}

pub async fn exists(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
    let found = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ModelError::Db(e.to_string()))?;
    Ok(found.is_some())
}
