pub mod config;
pub mod geo;
pub mod map;
pub mod reconcile;
