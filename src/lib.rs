//! artable - a terminal table for the Art Institute of Chicago collection
//!
//! Pages through the artworks API, keeps a selection that survives
//! pagination, and can select the first N artworks of the whole collection.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod selection;
pub mod tasks;
pub mod ui;
