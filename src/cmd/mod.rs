pub mod analyze;
pub mod plan;
pub mod play;
pub mod simulate;
