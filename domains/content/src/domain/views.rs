//! Read views derived from stored content

use std::cmp::Reverse;

use folio_store::{Artwork, Exhibition, ExhibitionStatus};
use serde::Serialize;

use super::patches::parse_date;

/// Artworks flagged for the home-page slideshow, in stored order
pub fn featured_artworks(artworks: Vec<Artwork>) -> Vec<Artwork> {
    artworks.into_iter().filter(|a| a.featured).collect()
}

/// Exhibitions bucketed by their author-set status
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupedExhibitions {
    pub current: Vec<Exhibition>,
    pub upcoming: Vec<Exhibition>,
    pub past: Vec<Exhibition>,
}

/// Group by status, then order each bucket by start date, newest first.
///
/// Entries whose start date does not parse keep their stored order after
/// the dated ones.
pub fn group_exhibitions(exhibitions: Vec<Exhibition>) -> GroupedExhibitions {
    let mut grouped = GroupedExhibitions::default();
    for exhibition in exhibitions {
        match exhibition.status {
            ExhibitionStatus::Current => grouped.current.push(exhibition),
            ExhibitionStatus::Upcoming => grouped.upcoming.push(exhibition),
            ExhibitionStatus::Past => grouped.past.push(exhibition),
        }
    }

    for bucket in [
        &mut grouped.current,
        &mut grouped.upcoming,
        &mut grouped.past,
    ] {
        bucket.sort_by_key(|e| Reverse(parse_date(&e.start_date)));
    }

    grouped
}
