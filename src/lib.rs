pub mod adapters;
pub mod bridge;
pub mod params;
pub mod server;
