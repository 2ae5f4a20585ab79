//! Concrete resource file kinds.

pub mod factory;
pub mod id_generating;
pub mod single;
pub mod values;

pub use factory::{create_kind, resource_name};
pub use id_generating::IdGeneratingFile;
pub use single::SingleResourceFile;
pub use values::ValuesFile;
