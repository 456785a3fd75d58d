pub mod prelude;

pub mod rounds;
pub mod users;
