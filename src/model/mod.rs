//! Structs describing the parts of the PokéAPI data model this crate reads.

pub mod lang;
pub mod pokemon;
pub mod resource;
pub mod species;
pub mod stat;
pub mod ty;
pub mod version;

pub use lang::Translation;
pub use pokemon::Pokemon;
pub use resource::Resource;
pub use species::Species;
pub use stat::StatName;
pub use ty::Type;
pub use ty::TypeName;
pub use version::Generation;
