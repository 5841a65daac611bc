//! HTTP request handlers for the featlist API
//!
//! These handlers use the ListStore trait and are storage-agnostic.

pub mod features;
pub mod import;
pub mod lists;
