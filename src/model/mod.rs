pub mod prediction;
pub mod station;
