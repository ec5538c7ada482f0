//! adsbdb API integration
//!
//! Resolves ICAO hex addresses to registration and airframe type data via
//! the free adsbdb aircraft database.
//!
//! API docs: https://www.adsbdb.com/

pub mod dto;
mod adapter;
mod client;

pub use adapter::to_aircraft_info;
pub use client::AdsbDbClient;
