pub mod achievements;
pub mod config;
pub mod player;
pub mod stats_aggregator;
pub mod story_missions;
pub mod streaks;
pub mod submission;
pub mod tiles;
pub mod year_ranges;

// Re-export main components
pub use achievements::*;
pub use config::*;
pub use player::*;
pub use stats_aggregator::*;
pub use story_missions::*;
pub use submission::*;
pub use year_ranges::*;
