use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::contains_pattern;
use crate::models::{NamedRef, NewVenue, Venue, VenueListing, VenueShow, VenueSummary};

macro_rules! venue_columns {
    () => {
        "id, name, city, state, address, phone, genres, facebook_link, image_link, \
         website_link, seeking_talent, seeking_description"
    };
}

/// Every venue with its location and count of shows at or after `now`,
/// ordered by state, city, then name.
pub async fn list(pool: &PgPool, now: DateTime<Utc>) -> sqlx::Result<Vec<VenueListing>> {
    sqlx::query_as::<_, VenueListing>(
        "SELECT v.id, v.name, v.city, v.state,
                COUNT(s.id) FILTER (WHERE s.start_time >= $1) AS num_upcoming_shows
         FROM venues v
         LEFT JOIN shows s ON s.venue_id = v.id
         GROUP BY v.id
         ORDER BY v.state, v.city, v.name",
    )
    .bind(now)
    .fetch_all(pool)
    .await
}

pub async fn search(
    pool: &PgPool,
    term: &str,
    now: DateTime<Utc>,
) -> sqlx::Result<Vec<VenueSummary>> {
    sqlx::query_as::<_, VenueSummary>(
        "SELECT v.id, v.name,
                COUNT(s.id) FILTER (WHERE s.start_time >= $2) AS num_upcoming_shows
         FROM venues v
         LEFT JOIN shows s ON s.venue_id = v.id
         WHERE v.name ILIKE $1
         GROUP BY v.id
         ORDER BY v.name",
    )
    .bind(contains_pattern(term))
    .bind(now)
    .fetch_all(pool)
    .await
}

pub async fn recent(pool: &PgPool, limit: i64) -> sqlx::Result<Vec<NamedRef>> {
    sqlx::query_as::<_, NamedRef>("SELECT id, name FROM venues ORDER BY id DESC LIMIT $1")
        .bind(limit)
        .fetch_all(pool)
        .await
}

pub async fn find(pool: &PgPool, id: i32) -> sqlx::Result<Option<Venue>> {
    sqlx::query_as::<_, Venue>(concat!(
        "SELECT ",
        venue_columns!(),
        " FROM venues WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Shows booked at a venue, joined with the performing artist.
pub async fn shows(pool: &PgPool, venue_id: i32) -> sqlx::Result<Vec<VenueShow>> {
    sqlx::query_as::<_, VenueShow>(
        "SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                s.start_time
         FROM shows s
         JOIN artists a ON a.id = s.artist_id
         WHERE s.venue_id = $1
         ORDER BY s.start_time",
    )
    .bind(venue_id)
    .fetch_all(pool)
    .await
}

pub async fn create(pool: &PgPool, venue: &NewVenue) -> sqlx::Result<Venue> {
    let mut tx = pool.begin().await?;

    let created = sqlx::query_as::<_, Venue>(concat!(
        "INSERT INTO venues (name, city, state, address, phone, genres, facebook_link, \
         image_link, website_link, seeking_talent, seeking_description)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
         RETURNING ",
        venue_columns!()
    ))
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.genres)
    .bind(&venue.facebook_link)
    .bind(&venue.image_link)
    .bind(&venue.website_link)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    tracing::info!(venue_id = created.id, name = %created.name, "Venue listed");
    Ok(created)
}

/// Overwrites every editable column. `None` when no venue has `id`.
pub async fn update(pool: &PgPool, id: i32, venue: &NewVenue) -> sqlx::Result<Option<Venue>> {
    let mut tx = pool.begin().await?;

    let updated = sqlx::query_as::<_, Venue>(concat!(
        "UPDATE venues
         SET name = $2, city = $3, state = $4, address = $5, phone = $6, genres = $7,
             facebook_link = $8, image_link = $9, website_link = $10,
             seeking_talent = $11, seeking_description = $12
         WHERE id = $1
         RETURNING ",
        venue_columns!()
    ))
    .bind(id)
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.genres)
    .bind(&venue.facebook_link)
    .bind(&venue.image_link)
    .bind(&venue.website_link)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .fetch_optional(&mut *tx)
    .await?;

    if updated.is_some() {
        tx.commit().await?;
        tracing::info!(venue_id = id, "Venue updated");
    }
    Ok(updated)
}

/// Removes a venue and, through the foreign key, its shows.
pub async fn delete(pool: &PgPool, id: i32) -> sqlx::Result<Option<NamedRef>> {
    let mut tx = pool.begin().await?;

    let deleted =
        sqlx::query_as::<_, NamedRef>("DELETE FROM venues WHERE id = $1 RETURNING id, name")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

    if deleted.is_some() {
        tx.commit().await?;
        tracing::info!(venue_id = id, "Venue deleted");
    }
    Ok(deleted)
}
