//! Lead capture adapters.

mod http_relay;
mod in_memory;
mod postgres_repository;

pub use http_relay::HttpLeadRelay;
pub use in_memory::{InMemoryLeadRepository, MockLeadRelay};
pub use postgres_repository::PostgresLeadRepository;
