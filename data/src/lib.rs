pub use self::catalog::Catalog;
pub use self::config::Config;

pub mod card;
pub mod catalog;
pub mod config;
pub mod environment;
