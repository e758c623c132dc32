use std::any::TypeId;
use std::rc::Rc;
use std::sync::Arc;

use rand::RngCore;

use conjure_core::{Config, CreatorRequest};

use crate::descriptor::Blueprint;
use crate::errors::GenerationError;
use crate::path::Path;

pub mod collections;
pub mod enums;
pub mod primitives;

/// Built-in value producer for one property.
pub type Resolver<T> = fn(&mut Generator<'_>, &str) -> Result<T, GenerationError>;

/// Capability of being synthesized by the engine.
///
/// Scalars, containers and wrappers are implemented here. Enums and
/// composites implement it by returning an [`EnumDescriptor`] or a
/// [`TypeDescriptor`] blueprint.
///
/// [`EnumDescriptor`]: crate::descriptor::EnumDescriptor
/// [`TypeDescriptor`]: crate::descriptor::TypeDescriptor
pub trait Generate: Sized + 'static {
    /// Whether the type has a null value that minimal mode assigns.
    const NULLABLE: bool = false;

    fn blueprint() -> Blueprint<Self>;

    fn null() -> Option<Self> {
        None
    }
}

/// Per-call generation state: configuration, random source, and the path
/// of composites currently under construction.
pub struct Generator<'g> {
    config: &'g Config,
    rng: &'g mut dyn RngCore,
    path: Path<'g>,
}

impl<'g> Generator<'g> {
    pub(crate) fn new(config: &'g Config, rng: &'g mut dyn RngCore) -> Self {
        Self {
            config,
            rng,
            path: Path::Root,
        }
    }

    pub fn config(&self) -> &'g Config {
        self.config
    }

    pub fn is_minimal(&self) -> bool {
        self.config.is_minimal()
    }

    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut *self.rng
    }

    /// Number of composites under construction above this point.
    pub fn depth(&self) -> usize {
        self.path.depth()
    }

    /// Produce a value for `property`.
    ///
    /// A custom creator registered for exactly `T` wins over every other
    /// rule; otherwise the type's blueprint decides.
    pub fn value<T: Generate>(&mut self, property: &str) -> Result<T, GenerationError> {
        if let Some(value) = self.from_creator::<T>(property) {
            return value;
        }

        match T::blueprint() {
            Blueprint::Scalar(resolve)
            | Blueprint::Container(resolve)
            | Blueprint::Wrapper(resolve) => resolve(self, property),
            Blueprint::Enum(descriptor) => enums::select(descriptor, self),
            Blueprint::Composite(descriptor) => self.instantiate(descriptor, property),
        }
    }

    /// Produce a value for a type that only a custom creator knows.
    pub fn custom<T: 'static>(&mut self, property: &str) -> Result<T, GenerationError> {
        self.from_creator::<T>(property).unwrap_or_else(|| {
            Err(GenerationError::MissingCreator {
                type_name: std::any::type_name::<T>(),
            })
        })
    }

    fn from_creator<T: 'static>(&mut self, property: &str) -> Option<Result<T, GenerationError>> {
        let create = self.config.creators().get(TypeId::of::<T>())?;
        let type_name = std::any::type_name::<T>();
        let mut request = CreatorRequest {
            type_name,
            property,
            rng: &mut *self.rng,
        };
        let value = create(&mut request)
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| GenerationError::CreatorType { type_name });
        Some(value)
    }

    pub(crate) fn is_under_construction(&self, type_id: TypeId) -> bool {
        self.path.contains(type_id)
    }

    /// Generator for the parameters of a composite entered at this point.
    pub(crate) fn descend(&mut self, type_id: TypeId, type_name: &'static str) -> Generator<'_> {
        Generator {
            config: self.config,
            rng: &mut *self.rng,
            path: Path::Frame {
                type_id,
                type_name,
                parent: &self.path,
            },
        }
    }

    pub(crate) fn path(&self) -> &Path<'g> {
        &self.path
    }
}

impl<T: Generate> Generate for Option<T> {
    const NULLABLE: bool = true;

    fn blueprint() -> Blueprint<Self> {
        Blueprint::Wrapper(some::<T>)
    }

    fn null() -> Option<Self> {
        Some(None)
    }
}

impl<T: Generate> Generate for Box<T> {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Wrapper(wrapped::<T, Self>)
    }
}

impl<T: Generate> Generate for Rc<T> {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Wrapper(wrapped::<T, Self>)
    }
}

impl<T: Generate> Generate for Arc<T> {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Wrapper(wrapped::<T, Self>)
    }
}

fn some<T: Generate>(
    generator: &mut Generator<'_>,
    property: &str,
) -> Result<Option<T>, GenerationError> {
    generator.value(property).map(Some)
}

fn wrapped<T: Generate, W: From<T>>(
    generator: &mut Generator<'_>,
    property: &str,
) -> Result<W, GenerationError> {
    generator.value::<T>(property).map(W::from)
}
