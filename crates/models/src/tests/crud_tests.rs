use anyhow::Result;
use chrono::{TimeZone, Utc};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

use super::setup_test_db;
use crate::errors::ModelError;
use crate::song;

fn release(y: i32, m: u32, d: u32) -> sea_orm::prelude::DateTimeWithTimeZone {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap().into()
}

#[tokio::test]
async fn test_song_crud() -> Result<()> {
    let db = setup_test_db().await?;

    // Create
    let created = song::create(&db, "Weir", "Killing Heidi", release(2000, 3, 20)).await?;
    assert!(created.id > 0);
    assert_eq!(created.title, "Weir");
    assert_eq!(created.artist, "Killing Heidi");

    // Read
    let found = song::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.as_ref(), Some(&created));

    // Update
    let mut am: song::ActiveModel = found.expect("just created").into();
    am.title = Set("Mascara".to_string());
    let updated = am.update(&db).await?;
    assert_eq!(updated.title, "Mascara");
    assert_eq!(updated.id, created.id);

    // Delete
    let res = song::Entity::delete_by_id(created.id).exec(&db).await?;
    assert_eq!(res.rows_affected, 1);
    let gone = song::Entity::find_by_id(created.id).one(&db).await?;
    assert!(gone.is_none());

    Ok(())
}

#[tokio::test]
async fn test_create_rejects_blank_fields() -> Result<()> {
    let db = setup_test_db().await?;

    for (title, artist) in [("", "De La Soul"), ("   ", "De La Soul"), ("Buddy", ""), ("Buddy", "\t ")] {
        let err = song::create(&db, title, artist, release(1989, 3, 14))
            .await
            .expect_err("blank field must be rejected");
        assert!(matches!(err, ModelError::Validation(_)), "got {err:?}");
    }

    // nothing persisted
    let count = song::Entity::find().count(&db).await?;
    assert_eq!(count, 0);
    Ok(())
}

#[tokio::test]
async fn test_ids_are_unique_and_backend_assigned() -> Result<()> {
    let db = setup_test_db().await?;

    let a = song::create(&db, "I Choose You", "TimeFlies", release(2011, 6, 6)).await?;
    let b = song::create(&db, "Turn Back Time", "TimeFlies", release(2011, 6, 6)).await?;
    assert!(a.id > 0 && b.id > 0);
    assert_ne!(a.id, b.id);

    assert!(song::exists(&db, a.id).await?);
    assert!(!song::exists(&db, a.id.max(b.id) + 1).await?);
    Ok(())
}

#[tokio::test]
async fn test_release_date_round_trips() -> Result<()> {
    let db = setup_test_db().await?;

    let date = release(1989, 3, 14);
    let created = song::create(&db, "Me Myself and I", "De La Soul", date).await?;
    let found = song::Entity::find_by_id(created.id)
        .one(&db)
        .await?
        .expect("created song");
    assert_eq!(found.release_date, date);
    Ok(())
}
