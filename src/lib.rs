//! Public API surface for the conjure library.
//!
//! Conjure synthesizes fully populated instances of composite types with
//! pseudo-random field values, for use as disposable test fixtures.
//!
//! ```
//! use conjure::{Blueprint, Config, Constructor, Generate, TypeDescriptor};
//!
//! #[derive(Debug)]
//! struct Group {
//!     name: String,
//! }
//!
//! impl Generate for Group {
//!     fn blueprint() -> Blueprint<Self> {
//!         Blueprint::Composite(TypeDescriptor::new("Group").constructor(
//!             Constructor::new(|args| Ok(Group { name: args.take("name")? }))
//!                 .param::<String>("name"),
//!         ))
//!     }
//! }
//!
//! let group: Group = conjure::create(&Config::default()).expect("group");
//! assert_eq!(group.name.chars().count(), 20);
//! ```

pub use conjure_core::{
    Config, ConfigBuilder, ConfigError, CreatorRequest, CustomCreators, Settings,
};
pub use conjure_generate::{
    Arguments, Blueprint, Constructor, Engine, EnumDescriptor, Generate, GenerationError,
    Generator, Parameter, ROOT_PROPERTY, Resolver, TypeDescriptor, Visibility,
};

/// Create one `T` with a fresh engine built from `config`.
///
/// The random source follows `config.seed()`; use [`Engine::with_rng`] to
/// inject any other source, or keep an [`Engine`] around to share one.
pub fn create<T: Generate>(config: &Config) -> Result<T, GenerationError> {
    Engine::new(config.clone()).create()
}
