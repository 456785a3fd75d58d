pub use super::rounds::Entity as Rounds;
pub use super::users::Entity as Users;
