//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod destination;
pub mod catalog_filter;
pub mod catalog_view;
pub mod favorites;
