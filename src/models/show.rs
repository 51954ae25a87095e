use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::filters::{format_datetime, DateFormat};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Show {
    pub id: i32,
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewShow {
    #[validate(range(min = 1, message = "Must be a positive whole number."))]
    pub artist_id: i32,
    #[validate(range(min = 1, message = "Must be a positive whole number."))]
    pub venue_id: i32,
    pub start_time: DateTime<Utc>,
}

/// Row of the `/shows` page.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// A show as seen from its venue's page.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VenueShow {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// A show as seen from its artist's page.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ArtistShow {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

pub trait Scheduled {
    fn start_time(&self) -> DateTime<Utc>;
}

impl Scheduled for ShowListing {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

impl Scheduled for VenueShow {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

impl Scheduled for ArtistShow {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }
}

/// A show together with its human-readable start time.
#[derive(Debug, Clone, Serialize)]
pub struct ShowEntry<T> {
    #[serde(flatten)]
    pub show: T,
    pub start_time_display: String,
}

impl<T: Scheduled> From<T> for ShowEntry<T> {
    fn from(show: T) -> Self {
        let start_time_display = format_datetime(&show.start_time(), DateFormat::Full);
        Self {
            show,
            start_time_display,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Shows<T> {
    pub past: Vec<ShowEntry<T>>,
    pub upcoming: Vec<ShowEntry<T>>,
}

/// Splits shows on `now`: a show starting exactly at `now` is upcoming.
pub fn partition_shows<T: Scheduled>(shows: Vec<T>, now: DateTime<Utc>) -> Shows<T> {
    let (upcoming, past): (Vec<T>, Vec<T>) = shows
        .into_iter()
        .partition(|show| show.start_time() >= now);

    Shows {
        past: past.into_iter().map(ShowEntry::from).collect(),
        upcoming: upcoming.into_iter().map(ShowEntry::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at_venue(artist_id: i32, start_time: DateTime<Utc>) -> VenueShow {
        VenueShow {
            artist_id,
            artist_name: format!("Artist {}", artist_id),
            artist_image_link: None,
            start_time,
        }
    }

    #[test]
    fn test_future_show_is_upcoming() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let shows = partition_shows(
            vec![
                at_venue(1, now + Duration::days(3)),
                at_venue(2, now - Duration::days(3)),
            ],
            now,
        );
        assert_eq!(shows.upcoming.len(), 1);
        assert_eq!(shows.upcoming[0].show.artist_id, 1);
        assert_eq!(shows.past.len(), 1);
        assert_eq!(shows.past[0].show.artist_id, 2);
    }

    #[test]
    fn test_show_starting_now_is_upcoming() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let shows = partition_shows(vec![at_venue(1, now)], now);
        assert_eq!(shows.upcoming.len(), 1);
        assert!(shows.past.is_empty());
    }

    #[test]
    fn test_partition_keeps_order() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let shows = partition_shows(
            vec![
                at_venue(1, now - Duration::days(2)),
                at_venue(2, now + Duration::days(1)),
                at_venue(3, now - Duration::days(1)),
                at_venue(4, now + Duration::days(2)),
            ],
            now,
        );
        let past: Vec<i32> = shows.past.iter().map(|s| s.show.artist_id).collect();
        let upcoming: Vec<i32> = shows.upcoming.iter().map(|s| s.show.artist_id).collect();
        assert_eq!(past, vec![1, 3]);
        assert_eq!(upcoming, vec![2, 4]);
    }

    #[test]
    fn test_entry_serializes_flat() {
        let start = Utc.with_ymd_and_hms(2019, 5, 21, 21, 30, 0).unwrap();
        let entry = ShowEntry::from(ArtistShow {
            venue_id: 1,
            venue_name: "The Musical Hop".to_string(),
            venue_image_link: None,
            start_time: start,
        });
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["venue_name"], "The Musical Hop");
        assert_eq!(json["start_time"], "2019-05-21T21:30:00Z");
        assert_eq!(json["start_time_display"], "Tuesday May, 21, 2019 at 9:30PM");
    }
}
