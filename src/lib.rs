//! Trip Accord - Group Travel Planning Backend
//!
//! This crate aggregates the travel preferences of a trip's members,
//! detects disagreements between them, and walks the group through a
//! linear resolution workflow before handing off to itinerary generation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
