use std::sync::Arc;

use sea_orm::prelude::DateTimeWithTimeZone;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::song::repository::SongRepository;

/// Application service encapsulating song library business rules.
/// Validation lives in the models/repository path; this layer adds logging
/// and gives the HTTP handlers a storage-agnostic seam.
pub struct SongService<R: SongRepository> {
    repo: Arc<R>,
}

impl<R: SongRepository> SongService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<models::song::Model>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i32) -> Result<Option<models::song::Model>, ServiceError> {
        self.repo.get(id).await
    }

    #[instrument(skip(self, release_date))]
    pub async fn create(
        &self,
        title: &str,
        artist: &str,
        release_date: DateTimeWithTimeZone,
    ) -> Result<models::song::Model, ServiceError> {
        let created = self.repo.create(title, artist, release_date).await?;
        info!(id = created.id, "created song");
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: &models::song::Model) -> Result<bool, ServiceError> {
        let updated = self.repo.update(id, input).await?;
        if updated {
            info!(id, "updated song");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            info!(id, "deleted song");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::song::repository::SeaOrmSongRepository;
    use crate::test_support::get_db;
    use chrono::{TimeZone, Utc};

    async fn make_service() -> Result<SongService<SeaOrmSongRepository>, anyhow::Error> {
        let db = get_db().await?;
        Ok(SongService::new(Arc::new(SeaOrmSongRepository { db })))
    }

    #[tokio::test]
    async fn create_then_get_round_trip() -> Result<(), anyhow::Error> {
        let svc = make_service().await?;
        let date = Utc.with_ymd_and_hms(1989, 3, 14, 0, 0, 0).unwrap().into();

        let created = svc.create("Me Myself and I", "De La Soul", date).await?;
        assert!(created.id > 0);

        let found = svc.get(created.id).await?.expect("round trip");
        assert_eq!(found, created);

        let missing = svc.get(created.id + 1).await?;
        assert!(missing.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn validation_error_propagates_through_service() -> Result<(), anyhow::Error> {
        let svc = make_service().await?;
        let date = Utc.with_ymd_and_hms(2011, 6, 6, 0, 0, 0).unwrap().into();
        let err = svc.create(" ", "TimeFlies", date).await.expect_err("blank title");
        assert!(matches!(
            err,
            ServiceError::Model(models::errors::ModelError::Validation(_))
        ));
        assert!(svc.list().await?.is_empty());
        Ok(())
    }
}
