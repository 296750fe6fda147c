use chrono::{TimeZone, Utc};
use models::song;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use tracing::info;

use crate::errors::ServiceError;

fn midnight_utc(y: i32, m: u32, d: u32) -> DateTimeWithTimeZone {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap().into()
}

/// Sample library: three artists, three tracks each.
pub fn seed_songs() -> Vec<(&'static str, &'static str, DateTimeWithTimeZone)> {
    vec![
        ("Me Myself and I", "De La Soul", midnight_utc(1989, 3, 14)),
        ("The Magic Number", "De La Soul", midnight_utc(1989, 3, 14)),
        ("Buddy", "De La Soul", midnight_utc(1989, 3, 14)),
        ("I Choose You", "TimeFlies", midnight_utc(2011, 6, 6)),
        ("Just a Little Bit", "TimeFlies", midnight_utc(2011, 6, 6)),
        ("Turn Back Time", "TimeFlies", midnight_utc(2011, 6, 6)),
        ("Weir", "Killing Heidi", midnight_utc(2000, 3, 20)),
        ("Mascara", "Killing Heidi", midnight_utc(2000, 3, 20)),
        ("Superman", "Killing Heidi", midnight_utc(2000, 3, 20)),
    ]
}

/// Insert the sample library on first initialization only.
/// Returns the number of inserted rows (0 when the table already has data).
pub async fn seed_if_empty(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    let count = song::Entity::find()
        .count(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if count > 0 {
        return Ok(0);
    }

    let rows: Vec<song::ActiveModel> = seed_songs()
        .into_iter()
        .map(|(title, artist, release_date)| song::ActiveModel {
            id: NotSet,
            title: Set(title.to_string()),
            artist: Set(artist.to_string()),
            release_date: Set(release_date),
        })
        .collect();
    let inserted = rows.len() as u64;

    song::Entity::insert_many(rows)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(count = inserted, "seeded song library with sample data");
    Ok(inserted)
}
