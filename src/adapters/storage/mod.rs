//! Storage adapters implementing the trip repository port.

mod in_memory_trip_repository;
mod json_file_trip_repository;

pub use in_memory_trip_repository::InMemoryTripRepository;
pub use json_file_trip_repository::JsonFileTripRepository;
