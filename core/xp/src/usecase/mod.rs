pub mod farm;
pub mod pacing;
