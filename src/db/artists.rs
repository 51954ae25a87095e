use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::contains_pattern;
use crate::models::{Artist, ArtistShow, ArtistSummary, NamedRef, NewArtist};

macro_rules! artist_columns {
    () => {
        "id, name, city, state, phone, genres, facebook_link, image_link, website_link, \
         seeking_venue, seeking_description"
    };
}

pub async fn list(pool: &PgPool) -> sqlx::Result<Vec<NamedRef>> {
    sqlx::query_as::<_, NamedRef>("SELECT id, name FROM artists ORDER BY name, id")
        .fetch_all(pool)
        .await
}

pub async fn search(
    pool: &PgPool,
    term: &str,
    now: DateTime<Utc>,
) -> sqlx::Result<Vec<ArtistSummary>> {
    sqlx::query_as::<_, ArtistSummary>(
        "SELECT a.id, a.name,
                COUNT(s.id) FILTER (WHERE s.start_time >= $2) AS num_upcoming_shows
         FROM artists a
         LEFT JOIN shows s ON s.artist_id = a.id
         WHERE a.name ILIKE $1
         GROUP BY a.id
         ORDER BY a.name",
    )
    .bind(contains_pattern(term))
    .bind(now)
    .fetch_all(pool)
    .await
}

pub async fn recent(pool: &PgPool, limit: i64) -> sqlx::Result<Vec<NamedRef>> {
    sqlx::query_as::<_, NamedRef>("SELECT id, name FROM artists ORDER BY id DESC LIMIT $1")
        .bind(limit)
        .fetch_all(pool)
        .await
}

pub async fn find(pool: &PgPool, id: i32) -> sqlx::Result<Option<Artist>> {
    sqlx::query_as::<_, Artist>(concat!(
        "SELECT ",
        artist_columns!(),
        " FROM artists WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Shows an artist is booked for, joined with the hosting venue.
pub async fn shows(pool: &PgPool, artist_id: i32) -> sqlx::Result<Vec<ArtistShow>> {
    sqlx::query_as::<_, ArtistShow>(
        "SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
                s.start_time
         FROM shows s
         JOIN venues v ON v.id = s.venue_id
         WHERE s.artist_id = $1
         ORDER BY s.start_time",
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await
}

pub async fn create(pool: &PgPool, artist: &NewArtist) -> sqlx::Result<Artist> {
    let mut tx = pool.begin().await?;

    let created = sqlx::query_as::<_, Artist>(concat!(
        "INSERT INTO artists (name, city, state, phone, genres, facebook_link, image_link, \
         website_link, seeking_venue, seeking_description)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
         RETURNING ",
        artist_columns!()
    ))
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.genres)
    .bind(&artist.facebook_link)
    .bind(&artist.image_link)
    .bind(&artist.website_link)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    tracing::info!(artist_id = created.id, name = %created.name, "Artist listed");
    Ok(created)
}

pub async fn update(pool: &PgPool, id: i32, artist: &NewArtist) -> sqlx::Result<Option<Artist>> {
    let mut tx = pool.begin().await?;

    let updated = sqlx::query_as::<_, Artist>(concat!(
        "UPDATE artists
         SET name = $2, city = $3, state = $4, phone = $5, genres = $6, facebook_link = $7,
             image_link = $8, website_link = $9, seeking_venue = $10,
             seeking_description = $11
         WHERE id = $1
         RETURNING ",
        artist_columns!()
    ))
    .bind(id)
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.genres)
    .bind(&artist.facebook_link)
    .bind(&artist.image_link)
    .bind(&artist.website_link)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .fetch_optional(&mut *tx)
    .await?;

    if updated.is_some() {
        tx.commit().await?;
        tracing::info!(artist_id = id, "Artist updated");
    }
    Ok(updated)
}
