//! Artworks collection API client and types.
//!
//! This module provides the interface for fetching pages from the
//! Art Institute of Chicago REST API.

mod client;
pub mod error;
pub mod types;

pub use client::ArticClient;
pub use error::{ApiError, FetchError};
pub use types::{Artwork, ArtworkPage, RecordId};
