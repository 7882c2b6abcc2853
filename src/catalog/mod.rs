pub mod filter;
pub mod loader;
pub mod record;

pub use filter::filter;
pub use loader::{FileLoader, LoadError, Loader};
pub use record::Record;
