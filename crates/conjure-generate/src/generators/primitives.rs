//! Built-in scalar kinds.
//!
//! Integers draw uniformly over their full range, floats uniformly from
//! `[0, 1)`. Every call draws independently.

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use rand::seq::IndexedRandom;

use crate::descriptor::Blueprint;
use crate::errors::GenerationError;
use crate::generators::{Generate, Generator};

macro_rules! uniform_kinds {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Generate for $ty {
                fn blueprint() -> Blueprint<Self> {
                    Blueprint::Scalar(uniform::<$ty>)
                }
            }
        )*
    };
}

uniform_kinds!(
    i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64,
);

// Pointer-sized integers are drawn at 64 bits and truncated on narrower targets.
impl Generate for isize {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Scalar(|generator, _| Ok(generator.rng().random::<i64>() as isize))
    }
}

impl Generate for usize {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Scalar(|generator, _| Ok(generator.rng().random::<u64>() as usize))
    }
}

impl Generate for bool {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Scalar(boolean)
    }
}

impl Generate for char {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Scalar(character)
    }
}

impl Generate for String {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Scalar(string)
    }
}

pub fn uniform<T>(generator: &mut Generator<'_>, _property: &str) -> Result<T, GenerationError>
where
    StandardUniform: Distribution<T>,
{
    Ok(generator.rng().random())
}

pub fn boolean(generator: &mut Generator<'_>, _property: &str) -> Result<bool, GenerationError> {
    Ok(generator.rng().random_bool(0.5))
}

/// One character from the configured set, in both modes.
pub fn character(generator: &mut Generator<'_>, _property: &str) -> Result<char, GenerationError> {
    Ok(draw_character(generator))
}

/// Empty in minimal mode, otherwise exactly `string_length` characters.
pub fn string(generator: &mut Generator<'_>, _property: &str) -> Result<String, GenerationError> {
    if generator.is_minimal() {
        return Ok(String::new());
    }

    let length = generator.config().string_length();
    Ok((0..length).map(|_| draw_character(generator)).collect())
}

fn draw_character(generator: &mut Generator<'_>) -> char {
    // Config guarantees a non-empty set.
    let characters = generator.config().string_characters();
    characters.choose(generator.rng()).copied().unwrap_or(' ')
}
