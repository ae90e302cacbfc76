pub mod greedy;
pub mod optimal;
pub mod traits;
