pub mod chunker;
pub mod schedule;
