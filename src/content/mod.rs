mod csv;
mod library;
mod resolver;

pub use csv::parse_verses;
pub use library::{faith_library, override_days, wisdom_library};
pub use resolver::{resolve, resolve_for_day};
