//! In-memory video catalog
//!
//! The mock data source behind the feed: a fixed list of seeded video records
//! served in pages, with artificial latency emulating a network round trip.

pub mod catalog;
pub mod models;

pub use catalog::{seed_videos, VideoCatalog, PAGE_SIZE};
pub use models::Video;
