use thiserror::Error;

use conjure_core::ConfigError;

/// Errors emitted by the instantiation engine.
///
/// Every error aborts the whole top-level creation; no partial instance is
/// ever returned.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("recursion detected when trying to set property `{property}` with type `{type_name}`")]
    Recursion {
        property: String,
        type_name: &'static str,
    },
    #[error("no public constructor found for type `{type_name}`")]
    NoPublicConstructor { type_name: &'static str },
    #[error(
        "type `{type_name}` has {candidates} public constructors and none is marked primary"
    )]
    AmbiguousConstructor {
        type_name: &'static str,
        candidates: usize,
    },
    #[error("enum `{type_name}` declares no members")]
    EmptyEnum { type_name: &'static str },
    /// The constructor asked for an argument its descriptor never declared,
    /// or asked for it twice.
    #[error("constructor of `{type_name}` has no argument `{parameter}`")]
    MissingArgument {
        type_name: &'static str,
        parameter: String,
    },
    #[error("argument `{parameter}` of `{type_name}` is not a `{expected}`")]
    ArgumentType {
        type_name: &'static str,
        parameter: String,
        expected: &'static str,
    },
    #[error("no custom creator registered for `{type_name}`")]
    MissingCreator { type_name: &'static str },
    #[error("custom creator for `{type_name}` returned a value of another type")]
    CreatorType { type_name: &'static str },
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
