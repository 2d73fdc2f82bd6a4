//! Admin domain: login flow, full reset, contact relay, NFT import

pub mod api;

// Re-export API types
pub use api::routes;
pub use api::AdminState;
