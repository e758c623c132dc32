//! Collection populator for sequences, sets and mappings.
//!
//! Minimal mode yields empty containers. Otherwise a size is drawn from
//! `[1, max_collection_size]` and that many independent values are
//! generated. Sets and mappings keep whatever survives collisions, so their
//! final size may be below the drawn one.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::Hash;

use rand::Rng;
use tracing::trace;

use crate::descriptor::Blueprint;
use crate::errors::GenerationError;
use crate::generators::{Generate, Generator};

/// Number of elements to generate for one container.
pub fn populate_size(generator: &mut Generator<'_>) -> usize {
    if generator.is_minimal() {
        return 0;
    }
    let max = generator.config().max_collection_size();
    generator.rng().random_range(1..=max)
}

/// Ordered sequence; every generated element is kept in generation order.
pub fn sequence<T, C>(generator: &mut Generator<'_>, property: &str) -> Result<C, GenerationError>
where
    T: Generate,
    C: FromIterator<T>,
{
    let size = populate_size(generator);
    trace!(kind = "sequence", property, size, "populating container");
    (0..size).map(|_| generator.value::<T>(property)).collect()
}

/// Set; duplicate elements collapse without a retry.
pub fn set<T, C>(generator: &mut Generator<'_>, property: &str) -> Result<C, GenerationError>
where
    T: Generate,
    C: FromIterator<T>,
{
    let size = populate_size(generator);
    trace!(kind = "set", property, size, "populating container");
    (0..size).map(|_| generator.value::<T>(property)).collect()
}

/// Mapping; a later pair overwrites an earlier pair with the same key.
pub fn mapping<K, V, C>(generator: &mut Generator<'_>, property: &str) -> Result<C, GenerationError>
where
    K: Generate,
    V: Generate,
    C: FromIterator<(K, V)>,
{
    let size = populate_size(generator);
    trace!(kind = "mapping", property, size, "populating container");
    (0..size)
        .map(|_| {
            let key = generator.value::<K>(property)?;
            let value = generator.value::<V>(property)?;
            Ok::<_, GenerationError>((key, value))
        })
        .collect()
}

impl<T: Generate> Generate for Vec<T> {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Container(sequence::<T, Self>)
    }
}

impl<T: Generate> Generate for VecDeque<T> {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Container(sequence::<T, Self>)
    }
}

impl<T: Generate> Generate for LinkedList<T> {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Container(sequence::<T, Self>)
    }
}

impl<T: Generate + Eq + Hash> Generate for HashSet<T> {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Container(set::<T, Self>)
    }
}

impl<T: Generate + Ord> Generate for BTreeSet<T> {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Container(set::<T, Self>)
    }
}

impl<K: Generate + Eq + Hash, V: Generate> Generate for HashMap<K, V> {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Container(mapping::<K, V, Self>)
    }
}

impl<K: Generate + Ord, V: Generate> Generate for BTreeMap<K, V> {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Container(mapping::<K, V, Self>)
    }
}
