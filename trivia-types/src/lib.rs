pub mod round;
pub mod stats;
pub mod user;

// Re-export all types
pub use round::*;
pub use stats::*;
pub use user::*;
