pub mod friends;
pub mod migrate;
pub mod types;
pub mod users;

pub use sqlx::postgres::PgPool;
pub use types::*;
