pub mod duration;
pub mod stats;
pub mod timer;
