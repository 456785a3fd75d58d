pub mod round_repository;
pub mod user_repository;

pub use round_repository::RoundRepository;
pub use user_repository::UserRepository;
