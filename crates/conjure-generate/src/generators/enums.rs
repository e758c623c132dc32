use rand::Rng;

use crate::descriptor::EnumDescriptor;
use crate::errors::GenerationError;
use crate::generators::Generator;

/// Pick one declared member uniformly at random.
pub fn select<T>(
    descriptor: EnumDescriptor<T>,
    generator: &mut Generator<'_>,
) -> Result<T, GenerationError> {
    let type_name = descriptor.name();
    let mut members = descriptor.into_members();
    if members.is_empty() {
        return Err(GenerationError::EmptyEnum { type_name });
    }

    let index = generator.rng().random_range(0..members.len());
    Ok(members.swap_remove(index))
}
