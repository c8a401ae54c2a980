pub mod add;
pub mod stats;
