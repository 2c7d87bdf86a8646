pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod planner;
pub mod protocol;
pub mod session;
pub mod simulate;
pub mod snapshots;
pub mod table;
// cmd and reports are binary modules (see main.rs).
