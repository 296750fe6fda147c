use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

#[async_trait]
pub trait SongRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<models::song::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<models::song::Model>, ServiceError>;
    async fn create(
        &self,
        title: &str,
        artist: &str,
        release_date: DateTimeWithTimeZone,
    ) -> Result<models::song::Model, ServiceError>;
    async fn update(&self, id: i32, input: &models::song::Model) -> Result<bool, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmSongRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl SongRepository for SeaOrmSongRepository {
    async fn list(&self) -> Result<Vec<models::song::Model>, ServiceError> {
        crate::db::song_service::list_songs(&self.db).await
    }

    async fn get(&self, id: i32) -> Result<Option<models::song::Model>, ServiceError> {
        crate::db::song_service::get_song(&self.db, id).await
    }

    async fn create(
        &self,
        title: &str,
        artist: &str,
        release_date: DateTimeWithTimeZone,
    ) -> Result<models::song::Model, ServiceError> {
        crate::db::song_service::create_song(&self.db, title, artist, release_date).await
    }

    async fn update(&self, id: i32, input: &models::song::Model) -> Result<bool, ServiceError> {
        crate::db::song_service::update_song(&self.db, id, input).await
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        crate::db::song_service::delete_song(&self.db, id).await
    }
}
