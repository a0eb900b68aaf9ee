pub mod capacity;
pub mod progress;
pub mod rank;
pub mod reorder;
pub mod score;
