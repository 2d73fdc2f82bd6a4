//! Content domain: artworks, exhibitions, about page, theme

pub mod api;
pub mod domain;
pub mod repository;

pub use domain::patches::{
    AboutPatch, ArtworkPatch, ColorsPatch, ExhibitionPatch, NewArtwork, NewExhibition, ThemeUpdate,
};
pub use domain::views::{featured_artworks, group_exhibitions, GroupedExhibitions};
pub use repository::ContentRepository;

// Re-export API types
pub use api::routes;
pub use api::ContentState;
