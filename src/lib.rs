// Compliance accounting engine for fuel-intensity regulation of shipping
// routes: CB calculation, surplus banking with FIFO consumption, pool
// formation, and baseline route comparison.
pub mod banking;
pub mod cli;
pub mod clock;
pub mod compliance;
pub mod config;
pub mod error;
pub mod facade;
pub mod ids;
pub mod logging;
pub mod pooling;
pub mod routes;
pub mod types;
