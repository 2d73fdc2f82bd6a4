//! HTTP handlers for the Content domain

pub mod about;
pub mod artworks;
pub mod content;
pub mod exhibitions;
pub mod theme;
