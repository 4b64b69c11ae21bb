pub mod entry;
pub mod loader;

pub use entry::{ZoneCatalog, ZoneEntry};
pub use loader::RoleFilter;
