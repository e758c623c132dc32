use std::any::TypeId;
use std::fmt;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use conjure_core::{Config, ConfigBuilder, Settings};

use crate::descriptor::{Arguments, Parameter, Slot, TypeDescriptor};
use crate::errors::GenerationError;
use crate::generators::{Generate, Generator};

/// Property name reported for the top-level value.
pub const ROOT_PROPERTY: &str = "root";

/// Entry point for synthesizing fixtures.
///
/// Owns one immutable [`Config`] and one random source. Each call to
/// [`Engine::create`] is independent: the recursion guard is rebuilt per
/// call, only the random source carries state across calls.
pub struct Engine {
    config: Config,
    rng: Box<dyn RngCore + Send>,
}

impl Engine {
    /// Engine seeded from `config.seed()`, or from the thread-local RNG when
    /// no seed is configured.
    pub fn new(config: Config) -> Self {
        let rng = match config.seed() {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        Self::with_rng(config, rng)
    }

    /// Engine drawing from a caller-supplied random source.
    pub fn with_rng(config: Config, rng: impl RngCore + Send + 'static) -> Self {
        Self {
            config,
            rng: Box::new(rng),
        }
    }

    pub fn from_settings(settings: Settings) -> Result<Self, GenerationError> {
        let config = ConfigBuilder::from_settings(settings).build()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn create<T: Generate>(&mut self) -> Result<T, GenerationError> {
        self.create_named(ROOT_PROPERTY)
    }

    /// Create a `T` as if it were assigned to `property`.
    pub fn create_named<T: Generate>(&mut self, property: &str) -> Result<T, GenerationError> {
        let type_name = std::any::type_name::<T>();
        debug!(
            type_name,
            property,
            minimal = self.config.is_minimal(),
            "creation started"
        );

        let mut generator = Generator::new(&self.config, &mut *self.rng);
        let value = generator.value::<T>(property)?;

        debug!(type_name, property, "creation finished");
        Ok(value)
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Generator<'_> {
    /// Build a composite from its descriptor.
    ///
    /// Fails with [`GenerationError::Recursion`] when `T` is already under
    /// construction on the current path. Parameters are resolved in
    /// declaration order with `T` on the path; the frame is gone again
    /// before the constructor runs.
    pub fn instantiate<T: 'static>(
        &mut self,
        descriptor: TypeDescriptor<T>,
        property: &str,
    ) -> Result<T, GenerationError> {
        let type_id = TypeId::of::<T>();
        let type_name = descriptor.name();
        if self.is_under_construction(type_id) {
            return Err(GenerationError::Recursion {
                property: property.to_string(),
                type_name,
            });
        }

        let constructor = descriptor.select_constructor()?;
        let parameters = constructor.parameters();
        let slots = {
            let mut nested = self.descend(type_id, type_name);
            trace!(
                type_name,
                property,
                depth = nested.depth(),
                path = ?nested.path().type_names(),
                parameters = parameters.len(),
                "instantiating composite"
            );
            parameters
                .iter()
                .map(|parameter| nested.resolve_parameter(parameter))
                .collect::<Result<Vec<_>, _>>()?
        };

        let mut arguments = Arguments::new(type_name, parameters, slots);
        constructor.invoke(&mut arguments)
    }

    fn resolve_parameter(&mut self, parameter: &Parameter) -> Result<Slot, GenerationError> {
        if self.is_minimal() && parameter.is_nullable() {
            return Ok(Slot::Null);
        }
        if self.is_minimal() && parameter.has_default() {
            return Ok(Slot::Default);
        }
        parameter.resolve(self).map(Slot::Value)
    }
}
