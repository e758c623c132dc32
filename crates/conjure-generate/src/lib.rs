//! Recursive instantiation engine for Conjure.
//!
//! Types describe themselves through [`Generate`]: built-in scalars,
//! containers and wrappers are covered here, enums and composites hand the
//! engine an [`EnumDescriptor`] or [`TypeDescriptor`]. The [`Engine`] walks
//! those descriptors, detects cyclic type graphs and assembles fully
//! populated instances.

pub mod descriptor;
pub mod engine;
pub mod errors;
pub mod generators;
mod path;

pub use conjure_core::{Config, ConfigBuilder, ConfigError, CreatorRequest, Settings};
pub use descriptor::{
    Arguments, Blueprint, Constructor, EnumDescriptor, Parameter, TypeDescriptor, Visibility,
};
pub use engine::{Engine, ROOT_PROPERTY};
pub use errors::GenerationError;
pub use generators::{Generate, Generator, Resolver};
