use std::any::{Any, type_name};
use std::fmt;

use crate::errors::GenerationError;
use crate::generators::{Generate, Generator, Resolver};

/// How a type is produced, consumed uniformly by the engine.
pub enum Blueprint<T> {
    /// Built-in scalar kind (integers, floats, `bool`, `char`, `String`).
    Scalar(Resolver<T>),
    /// Sequence, set or mapping filled by the collection populator.
    Container(Resolver<T>),
    /// Transparent indirection such as `Option<T>` or `Box<T>`.
    Wrapper(Resolver<T>),
    Enum(EnumDescriptor<T>),
    Composite(TypeDescriptor<T>),
}

impl<T> Blueprint<T> {
    pub fn kind(&self) -> &'static str {
        match self {
            Blueprint::Scalar(_) => "scalar",
            Blueprint::Container(_) => "container",
            Blueprint::Wrapper(_) => "wrapper",
            Blueprint::Enum(_) => "enum",
            Blueprint::Composite(_) => "composite",
        }
    }
}

/// Declared members of an enumerated type.
pub struct EnumDescriptor<T> {
    name: &'static str,
    members: Vec<T>,
}

impl<T> EnumDescriptor<T> {
    pub fn new(name: &'static str, members: impl IntoIterator<Item = T>) -> Self {
        Self {
            name,
            members: members.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn members(&self) -> &[T] {
        &self.members
    }

    pub fn into_members(self) -> Vec<T> {
        self.members
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
}

type ErasedResolver = fn(&mut Generator<'_>, &str) -> Result<Box<dyn Any>, GenerationError>;
type ErasedNull = fn() -> Option<Box<dyn Any>>;
type ErasedDefault = Box<dyn Fn() -> Box<dyn Any>>;
type Build<T> = Box<dyn Fn(&mut Arguments<'_>) -> Result<T, GenerationError>>;

/// One constructor parameter: name, declared type, nullability and an
/// optional declared default.
pub struct Parameter {
    name: &'static str,
    type_name: &'static str,
    nullable: bool,
    default: Option<ErasedDefault>,
    resolve: ErasedResolver,
    null: ErasedNull,
}

impl Parameter {
    fn new<P: Generate>(name: &'static str, default: Option<ErasedDefault>) -> Self {
        Self {
            name,
            type_name: type_name::<P>(),
            nullable: P::NULLABLE,
            default,
            resolve: resolve_erased::<P>,
            null: null_erased::<P>,
        }
    }

    fn custom<P: 'static>(name: &'static str) -> Self {
        Self {
            name,
            type_name: type_name::<P>(),
            nullable: false,
            default: None,
            resolve: resolve_custom::<P>,
            null: || None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    pub(crate) fn resolve(
        &self,
        generator: &mut Generator<'_>,
    ) -> Result<Box<dyn Any>, GenerationError> {
        (self.resolve)(generator, self.name)
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("name", &self.name)
            .field("type_name", &self.type_name)
            .field("nullable", &self.nullable)
            .field("has_default", &self.has_default())
            .finish()
    }
}

fn resolve_erased<P: Generate>(
    generator: &mut Generator<'_>,
    property: &str,
) -> Result<Box<dyn Any>, GenerationError> {
    let value: P = generator.value(property)?;
    Ok(Box::new(value))
}

fn resolve_custom<P: 'static>(
    generator: &mut Generator<'_>,
    property: &str,
) -> Result<Box<dyn Any>, GenerationError> {
    let value: P = generator.custom(property)?;
    Ok(Box::new(value))
}

fn null_erased<P: Generate>() -> Option<Box<dyn Any>> {
    P::null().map(|value| Box::new(value) as Box<dyn Any>)
}

/// A way to construct `T` from named, typed arguments.
///
/// New constructors are public and primary; the engine only ever invokes
/// public ones.
pub struct Constructor<T> {
    visibility: Visibility,
    primary: bool,
    parameters: Vec<Parameter>,
    build: Build<T>,
}

impl<T> Constructor<T> {
    pub fn new<F>(build: F) -> Self
    where
        F: Fn(&mut Arguments<'_>) -> Result<T, GenerationError> + 'static,
    {
        Self {
            visibility: Visibility::Public,
            primary: true,
            parameters: Vec::new(),
            build: Box::new(build),
        }
    }

    pub fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    pub fn secondary(mut self) -> Self {
        self.primary = false;
        self
    }

    /// Declare the next parameter. Nullability follows `P::NULLABLE`.
    pub fn param<P: Generate>(mut self, name: &'static str) -> Self {
        self.parameters.push(Parameter::new::<P>(name, None));
        self
    }

    /// Declare the next parameter with a default that minimal mode keeps.
    pub fn param_with_default<P, D>(mut self, name: &'static str, default: D) -> Self
    where
        P: Generate,
        D: Fn() -> P + 'static,
    {
        let default: ErasedDefault = Box::new(move || Box::new(default()) as Box<dyn Any>);
        self.parameters.push(Parameter::new::<P>(name, Some(default)));
        self
    }

    /// Declare the next parameter as a type only a custom creator can
    /// produce, such as a foreign type without a blueprint.
    pub fn param_custom<P: 'static>(mut self, name: &'static str) -> Self {
        self.parameters.push(Parameter::custom::<P>(name));
        self
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub fn is_primary(&self) -> bool {
        self.primary
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub(crate) fn invoke(&self, arguments: &mut Arguments<'_>) -> Result<T, GenerationError> {
        (self.build)(arguments)
    }
}

/// Introspected shape of a composite type: its name and constructors.
pub struct TypeDescriptor<T> {
    name: &'static str,
    constructors: Vec<Constructor<T>>,
}

impl<T> TypeDescriptor<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            constructors: Vec::new(),
        }
    }

    pub fn constructor(mut self, constructor: Constructor<T>) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn constructors(&self) -> &[Constructor<T>] {
        &self.constructors
    }

    /// Pick the constructor the engine invokes.
    ///
    /// A single public constructor wins outright. With several public ones
    /// the unique primary among them wins; anything else is ambiguous.
    pub fn select_constructor(&self) -> Result<&Constructor<T>, GenerationError> {
        let public: Vec<&Constructor<T>> = self
            .constructors
            .iter()
            .filter(|constructor| constructor.is_public())
            .collect();

        match public.as_slice() {
            [] => Err(GenerationError::NoPublicConstructor {
                type_name: self.name,
            }),
            [only] => Ok(*only),
            candidates => {
                let mut primary = candidates.iter().filter(|constructor| constructor.is_primary());
                match (primary.next(), primary.next()) {
                    (Some(constructor), None) => Ok(*constructor),
                    _ => Err(GenerationError::AmbiguousConstructor {
                        type_name: self.name,
                        candidates: candidates.len(),
                    }),
                }
            }
        }
    }
}

/// Resolution outcome for one parameter.
pub(crate) enum Slot {
    Value(Box<dyn Any>),
    /// Minimal mode, nullable parameter.
    Null,
    /// Minimal mode, parameter omitted so its declared default applies.
    Default,
    Taken,
}

/// Resolved arguments handed to a constructor.
pub struct Arguments<'c> {
    type_name: &'static str,
    parameters: &'c [Parameter],
    slots: Vec<Slot>,
}

impl<'c> Arguments<'c> {
    pub(crate) fn new(
        type_name: &'static str,
        parameters: &'c [Parameter],
        slots: Vec<Slot>,
    ) -> Self {
        Self {
            type_name,
            parameters,
            slots,
        }
    }

    /// Move the argument for `name` out, applying its default when it was
    /// omitted and the null value when it was nulled.
    pub fn take<P: 'static>(&mut self, name: &str) -> Result<P, GenerationError> {
        let Some(index) = self.position(name) else {
            return Err(self.missing(name));
        };
        let parameter = &self.parameters[index];
        let slot = std::mem::replace(&mut self.slots[index], Slot::Taken);

        let value = match slot {
            Slot::Value(value) => value,
            Slot::Null => (parameter.null)().ok_or_else(|| self.mismatch::<P>(name))?,
            Slot::Default => match &parameter.default {
                Some(default) => default(),
                None => return Err(self.missing(name)),
            },
            Slot::Taken => return Err(self.missing(name)),
        };

        value
            .downcast::<P>()
            .map(|value| *value)
            .map_err(|_| self.mismatch::<P>(name))
    }

    /// Whether `name` was left out so that its declared default applies.
    pub fn is_defaulted(&self, name: &str) -> bool {
        self.position(name)
            .is_some_and(|index| matches!(self.slots[index], Slot::Default))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.parameters
            .iter()
            .position(|parameter| parameter.name == name)
    }

    fn missing(&self, name: &str) -> GenerationError {
        GenerationError::MissingArgument {
            type_name: self.type_name,
            parameter: name.to_string(),
        }
    }

    fn mismatch<P>(&self, name: &str) -> GenerationError {
        GenerationError::ArgumentType {
            type_name: self.type_name,
            parameter: name.to_string(),
            expected: type_name::<P>(),
        }
    }
}
