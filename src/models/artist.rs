use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::show::{partition_shows, ArtistShow, ShowEntry};
use crate::filters::parse_genres;
use crate::forms::rules::{not_blank, valid_genres, valid_phone, valid_state};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: String,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewArtist {
    #[validate(
        custom(function = "not_blank"),
        length(max = 120, message = "Must be at most 120 characters.")
    )]
    pub name: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = 120, message = "Must be at most 120 characters.")
    )]
    pub city: String,
    #[validate(custom(function = "valid_state"))]
    pub state: String,
    #[validate(
        length(max = 120, message = "Must be at most 120 characters."),
        custom(function = "valid_phone")
    )]
    pub phone: Option<String>,
    #[validate(
        custom(function = "valid_genres"),
        length(max = 120, message = "Must be at most 120 characters.")
    )]
    pub genres: String,
    #[validate(
        url(message = "Invalid URL."),
        length(max = 120, message = "Must be at most 120 characters.")
    )]
    pub facebook_link: Option<String>,
    #[validate(
        url(message = "Invalid URL."),
        length(max = 500, message = "Must be at most 500 characters.")
    )]
    pub image_link: Option<String>,
    #[validate(
        url(message = "Invalid URL."),
        length(max = 120, message = "Must be at most 120 characters.")
    )]
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct ArtistSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub past_shows: Vec<ShowEntry<ArtistShow>>,
    pub upcoming_shows: Vec<ShowEntry<ArtistShow>>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ArtistDetail {
    pub fn new(artist: Artist, shows: Vec<ArtistShow>, now: DateTime<Utc>) -> Self {
        let shows = partition_shows(shows, now);
        Self {
            id: artist.id,
            genres: parse_genres(&artist.genres),
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            facebook_link: artist.facebook_link,
            image_link: artist.image_link,
            website_link: artist.website_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            past_shows_count: shows.past.len(),
            upcoming_shows_count: shows.upcoming.len(),
            past_shows: shows.past,
            upcoming_shows: shows.upcoming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_detail_without_shows() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let artist = Artist {
            id: 5,
            name: "Matt Quevedo".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            phone: None,
            genres: "Jazz".to_string(),
            facebook_link: None,
            image_link: None,
            website_link: None,
            seeking_venue: false,
            seeking_description: None,
        };

        let detail = ArtistDetail::new(artist, Vec::new(), now);
        assert_eq!(detail.genres, vec!["Jazz"]);
        assert_eq!(detail.past_shows_count, 0);
        assert_eq!(detail.upcoming_shows_count, 0);

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["upcoming_shows"], serde_json::json!([]));
        assert_eq!(json["seeking_venue"], false);
    }

    #[test]
    fn test_detail_counts_match_lists() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let artist = Artist {
            id: 6,
            name: "The Wild Sax Band".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: Some("432-325-5432".to_string()),
            genres: "Jazz,Classical".to_string(),
            facebook_link: None,
            image_link: None,
            website_link: None,
            seeking_venue: false,
            seeking_description: None,
        };
        let show = |days: i64| ArtistShow {
            venue_id: 3,
            venue_name: "Park Square Live Music & Coffee".to_string(),
            venue_image_link: None,
            start_time: now + Duration::days(days),
        };

        let detail = ArtistDetail::new(artist, vec![show(7), show(14), show(21)], now);
        assert_eq!(detail.upcoming_shows_count, 3);
        assert_eq!(detail.upcoming_shows.len(), 3);
        assert_eq!(detail.past_shows_count, 0);
    }
}
