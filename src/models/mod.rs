pub mod artist;
pub mod show;
pub mod venue;

pub use artist::{Artist, ArtistDetail, ArtistSummary, NewArtist};
pub use show::{
    partition_shows, ArtistShow, NewShow, Scheduled, Show, ShowEntry, ShowListing, Shows,
    VenueShow,
};
pub use venue::{group_by_area, Area, NewVenue, Venue, VenueDetail, VenueListing, VenueSummary};

use serde::Serialize;
use sqlx::FromRow;

/// Bare reference to a listed record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct NamedRef {
    pub id: i32,
    pub name: String,
}

/// Result of a name search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
    pub search_term: String,
}

impl<T> SearchResults<T> {
    pub fn new(data: Vec<T>, search_term: impl Into<String>) -> Self {
        Self {
            count: data.len(),
            data,
            search_term: search_term.into(),
        }
    }
}
