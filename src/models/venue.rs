use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::show::{partition_shows, ShowEntry, VenueShow};
use crate::filters::parse_genres;
use crate::forms::rules::{not_blank, valid_genres, valid_phone, valid_state};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: String,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Submitted venue fields, used for both inserts and edits.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewVenue {
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
        custom(function = "not_blank"),
        length(max = 120, message = "Must be at most 120 characters.")
    )]
    pub address: String,
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
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Listing row: a venue, where it is, and how many shows it has ahead.
#[derive(Debug, Clone, FromRow)]
pub struct VenueListing {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub num_upcoming_shows: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: i64,
}

impl From<VenueListing> for VenueSummary {
    fn from(row: VenueListing) -> Self {
        Self {
            id: row.id,
            name: row.name,
            num_upcoming_shows: row.num_upcoming_shows,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Groups venues by (city, state). Areas come out ordered by state then
/// city; venues keep their input order inside an area.
pub fn group_by_area(rows: Vec<VenueListing>) -> Vec<Area> {
    let mut areas: BTreeMap<(String, String), Vec<VenueSummary>> = BTreeMap::new();
    for row in rows {
        areas
            .entry((row.state.clone(), row.city.clone()))
            .or_default()
            .push(row.into());
    }

    areas
        .into_iter()
        .map(|((state, city), venues)| Area {
            city,
            state,
            venues,
        })
        .collect()
}

/// Everything the venue page shows.
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub past_shows: Vec<ShowEntry<VenueShow>>,
    pub upcoming_shows: Vec<ShowEntry<VenueShow>>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl VenueDetail {
    pub fn new(venue: Venue, shows: Vec<VenueShow>, now: DateTime<Utc>) -> Self {
        let shows = partition_shows(shows, now);
        Self {
            id: venue.id,
            genres: parse_genres(&venue.genres),
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            facebook_link: venue.facebook_link,
            image_link: venue.image_link,
            website_link: venue.website_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
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

    fn listing(id: i32, name: &str, city: &str, state: &str) -> VenueListing {
        VenueListing {
            id,
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            num_upcoming_shows: 0,
        }
    }

    #[test]
    fn test_group_by_area() {
        let areas = group_by_area(vec![
            listing(1, "The Musical Hop", "San Francisco", "CA"),
            listing(2, "The Dueling Pianos Bar", "New York", "NY"),
            listing(3, "Park Square Live Music & Coffee", "San Francisco", "CA"),
        ]);

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].city, "San Francisco");
        assert_eq!(areas[0].state, "CA");
        let ids: Vec<i32> = areas[0].venues.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(areas[1].city, "New York");
        assert_eq!(areas[1].venues[0].name, "The Dueling Pianos Bar");
    }

    #[test]
    fn test_same_city_in_different_states_is_split() {
        let areas = group_by_area(vec![
            listing(1, "A", "Portland", "OR"),
            listing(2, "B", "Portland", "ME"),
        ]);
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].state, "ME");
        assert_eq!(areas[1].state, "OR");
    }

    #[test]
    fn test_group_by_area_empty() {
        assert!(group_by_area(Vec::new()).is_empty());
    }

    #[test]
    fn test_detail_partitions_shows() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let venue = Venue {
            id: 1,
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: Some("123-123-1234".to_string()),
            genres: "{Jazz,Reggae,Swing}".to_string(),
            facebook_link: None,
            image_link: None,
            website_link: None,
            seeking_talent: true,
            seeking_description: None,
        };
        let show = |artist_id, start_time| VenueShow {
            artist_id,
            artist_name: "Guns N Petals".to_string(),
            artist_image_link: None,
            start_time,
        };

        let detail = VenueDetail::new(
            venue,
            vec![
                show(4, now - Duration::days(30)),
                show(5, now + Duration::days(30)),
                show(6, now + Duration::days(60)),
            ],
            now,
        );

        assert_eq!(detail.genres, vec!["Jazz", "Reggae", "Swing"]);
        assert_eq!(detail.past_shows_count, 1);
        assert_eq!(detail.upcoming_shows_count, 2);
        assert_eq!(detail.past_shows[0].show.artist_id, 4);
    }
}
