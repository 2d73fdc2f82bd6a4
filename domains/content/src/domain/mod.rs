//! Domain logic for site content

pub mod ids;
pub mod patches;
pub mod views;
