use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use rand::RngCore;

/// Input handed to a custom creator for one value.
pub struct CreatorRequest<'r> {
    /// Full type name of the value being created.
    pub type_name: &'static str,
    /// Name of the property the value is assigned to.
    pub property: &'r str,
    /// Random source of the running engine.
    pub rng: &'r mut dyn RngCore,
}

/// Type-erased creator stored in the registry.
pub type CreatorFn = dyn Fn(&mut CreatorRequest<'_>) -> Box<dyn Any> + Send + Sync;

#[derive(Clone)]
struct CreatorEntry {
    type_name: &'static str,
    create: Arc<CreatorFn>,
}

/// Caller-supplied value creators keyed by exact type identity.
///
/// A registered creator takes precedence over every built-in rule for its
/// type, including scalars, containers and wrappers.
#[derive(Clone, Default)]
pub struct CustomCreators {
    entries: HashMap<TypeId, CreatorEntry>,
}

impl CustomCreators {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `creator` for `T`, replacing any earlier creator for `T`.
    pub fn register<T, F>(&mut self, creator: F)
    where
        T: Any,
        F: Fn(&mut CreatorRequest<'_>) -> T + Send + Sync + 'static,
    {
        let create: Arc<CreatorFn> = Arc::new(move |request: &mut CreatorRequest<'_>| {
            Box::new(creator(request)) as Box<dyn Any>
        });
        self.entries.insert(
            TypeId::of::<T>(),
            CreatorEntry {
                type_name: std::any::type_name::<T>(),
                create,
            },
        );
    }

    pub fn get(&self, type_id: TypeId) -> Option<&CreatorFn> {
        self.entries.get(&type_id).map(|entry| entry.create.as_ref())
    }

    pub fn contains(&self, type_id: TypeId) -> bool {
        self.entries.contains_key(&type_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Type names with a registered creator, sorted.
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.values().map(|entry| entry.type_name).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for CustomCreators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.type_names()).finish()
    }
}
