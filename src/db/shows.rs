use sqlx::PgPool;

use crate::models::{NewShow, Show, ShowListing};

pub async fn list(pool: &PgPool) -> sqlx::Result<Vec<ShowListing>> {
    sqlx::query_as::<_, ShowListing>(
        "SELECT s.venue_id, v.name AS venue_name, s.artist_id, a.name AS artist_name,
                a.image_link AS artist_image_link, s.start_time
         FROM shows s
         JOIN venues v ON v.id = s.venue_id
         JOIN artists a ON a.id = s.artist_id
         ORDER BY s.start_time, s.id",
    )
    .fetch_all(pool)
    .await
}

/// Fails with a foreign-key violation when either id is dangling.
pub async fn create(pool: &PgPool, show: &NewShow) -> sqlx::Result<Show> {
    let mut tx = pool.begin().await?;

    let created = sqlx::query_as::<_, Show>(
        "INSERT INTO shows (artist_id, venue_id, start_time)
         VALUES ($1, $2, $3)
         RETURNING id, artist_id, venue_id, start_time",
    )
    .bind(show.artist_id)
    .bind(show.venue_id)
    .bind(show.start_time)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    tracing::info!(
        show_id = created.id,
        artist_id = created.artist_id,
        venue_id = created.venue_id,
        "Show listed"
    );
    Ok(created)
}
