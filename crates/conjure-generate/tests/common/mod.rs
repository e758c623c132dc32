#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::time::Instant;

use conjure_generate::{Blueprint, Constructor, EnumDescriptor, Generate, TypeDescriptor};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BeanType {
    Robusta,
    Arabica,
}

impl Generate for BeanType {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Enum(EnumDescriptor::new(
            "BeanType",
            [BeanType::Robusta, BeanType::Arabica],
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ManyValues {
    Blah1,
    Blah2,
    Blah3,
    Blah4,
    Blah5,
    Blah6,
    Blah7,
}

impl Generate for ManyValues {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Enum(EnumDescriptor::new(
            "ManyValues",
            [
                ManyValues::Blah1,
                ManyValues::Blah2,
                ManyValues::Blah3,
                ManyValues::Blah4,
                ManyValues::Blah5,
                ManyValues::Blah6,
                ManyValues::Blah7,
            ],
        ))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringDc {
    pub string_property: String,
}

impl Generate for StringDc {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Composite(
            TypeDescriptor::new("StringDc").constructor(
                Constructor::new(|args| {
                    Ok(StringDc {
                        string_property: args.take("string_property")?,
                    })
                })
                .param::<String>("string_property"),
            ),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Group {
    pub name: String,
}

impl Generate for Group {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Composite(
            TypeDescriptor::new("Group").constructor(
                Constructor::new(|args| Ok(Group { name: args.take("name")? }))
                    .param::<String>("name"),
            ),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub first_name: String,
    pub name: String,
    pub age: i32,
    pub lat: f64,
    pub lon: f64,
    pub is_boss: bool,
    pub team_size: i16,
    pub flags: i8,
    pub short_name: char,
    pub efficiency: f32,
    pub favorite_coffee: BeanType,
    pub groups: Vec<Group>,
}

impl Generate for User {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Composite(
            TypeDescriptor::new("User").constructor(
                Constructor::new(|args| {
                    Ok(User {
                        first_name: args.take("first_name")?,
                        name: args.take("name")?,
                        age: args.take("age")?,
                        lat: args.take("lat")?,
                        lon: args.take("lon")?,
                        is_boss: args.take("is_boss")?,
                        team_size: args.take("team_size")?,
                        flags: args.take("flags")?,
                        short_name: args.take("short_name")?,
                        efficiency: args.take("efficiency")?,
                        favorite_coffee: args.take("favorite_coffee")?,
                        groups: args.take("groups")?,
                    })
                })
                .param::<String>("first_name")
                .param::<String>("name")
                .param::<i32>("age")
                .param::<f64>("lat")
                .param::<f64>("lon")
                .param::<bool>("is_boss")
                .param::<i16>("team_size")
                .param::<i8>("flags")
                .param::<char>("short_name")
                .param::<f32>("efficiency")
                .param::<BeanType>("favorite_coffee")
                .param::<Vec<Group>>("groups"),
            ),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NullableFields {
    pub string: Option<String>,
    pub int: Option<i32>,
    pub long: Option<i64>,
    pub double: Option<f64>,
    pub enumeration: Option<ManyValues>,
    pub byte: Option<i8>,
    pub float: Option<f32>,
    pub short: Option<i16>,
    pub boolean: Option<bool>,
    pub character: Option<char>,
}

impl Generate for NullableFields {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Composite(
            TypeDescriptor::new("NullableFields").constructor(
                Constructor::new(|args| {
                    Ok(NullableFields {
                        string: args.take("string")?,
                        int: args.take("int")?,
                        long: args.take("long")?,
                        double: args.take("double")?,
                        enumeration: args.take("enumeration")?,
                        byte: args.take("byte")?,
                        float: args.take("float")?,
                        short: args.take("short")?,
                        boolean: args.take("boolean")?,
                        character: args.take("character")?,
                    })
                })
                .param::<Option<String>>("string")
                .param::<Option<i32>>("int")
                .param::<Option<i64>>("long")
                .param::<Option<f64>>("double")
                .param::<Option<ManyValues>>("enumeration")
                .param::<Option<i8>>("byte")
                .param::<Option<f32>>("float")
                .param::<Option<i16>>("short")
                .param::<Option<bool>>("boolean")
                .param::<Option<char>>("character"),
            ),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListDc {
    pub strings: Vec<String>,
    pub ints: Vec<i32>,
    pub longs: Vec<i64>,
    pub doubles: Vec<f64>,
    pub enums: Vec<BeanType>,
}

impl ListDc {
    pub fn sizes(&self) -> [usize; 5] {
        [
            self.strings.len(),
            self.ints.len(),
            self.longs.len(),
            self.doubles.len(),
            self.enums.len(),
        ]
    }
}

impl Generate for ListDc {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Composite(
            TypeDescriptor::new("ListDc").constructor(
                Constructor::new(|args| {
                    Ok(ListDc {
                        strings: args.take("strings")?,
                        ints: args.take("ints")?,
                        longs: args.take("longs")?,
                        doubles: args.take("doubles")?,
                        enums: args.take("enums")?,
                    })
                })
                .param::<Vec<String>>("strings")
                .param::<Vec<i32>>("ints")
                .param::<Vec<i64>>("longs")
                .param::<Vec<f64>>("doubles")
                .param::<Vec<BeanType>>("enums"),
            ),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetDc {
    pub strings: HashSet<String>,
    pub ints: BTreeSet<i32>,
    pub longs: HashSet<i64>,
    pub enums: BTreeSet<ManyValues>,
}

impl SetDc {
    pub fn sizes(&self) -> [usize; 4] {
        [
            self.strings.len(),
            self.ints.len(),
            self.longs.len(),
            self.enums.len(),
        ]
    }
}

impl Generate for SetDc {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Composite(
            TypeDescriptor::new("SetDc").constructor(
                Constructor::new(|args| {
                    Ok(SetDc {
                        strings: args.take("strings")?,
                        ints: args.take("ints")?,
                        longs: args.take("longs")?,
                        enums: args.take("enums")?,
                    })
                })
                .param::<HashSet<String>>("strings")
                .param::<BTreeSet<i32>>("ints")
                .param::<HashSet<i64>>("longs")
                .param::<BTreeSet<ManyValues>>("enums"),
            ),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionDc {
    pub strings: VecDeque<String>,
    pub ints: LinkedList<i32>,
    pub enums: VecDeque<BeanType>,
}

impl Generate for CollectionDc {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Composite(
            TypeDescriptor::new("CollectionDc").constructor(
                Constructor::new(|args| {
                    Ok(CollectionDc {
                        strings: args.take("strings")?,
                        ints: args.take("ints")?,
                        enums: args.take("enums")?,
                    })
                })
                .param::<VecDeque<String>>("strings")
                .param::<LinkedList<i32>>("ints")
                .param::<VecDeque<BeanType>>("enums"),
            ),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapDc {
    pub int_to_string: HashMap<i32, String>,
    pub ordered: BTreeMap<String, Group>,
}

impl Generate for MapDc {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Composite(
            TypeDescriptor::new("MapDc").constructor(
                Constructor::new(|args| {
                    Ok(MapDc {
                        int_to_string: args.take("int_to_string")?,
                        ordered: args.take("ordered")?,
                    })
                })
                .param::<HashMap<i32, String>>("int_to_string")
                .param::<BTreeMap<String, Group>>("ordered"),
            ),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WithDefaults {
    pub string: String,
    pub int: i32,
    pub plain: u64,
}

impl Generate for WithDefaults {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Composite(
            TypeDescriptor::new("WithDefaults").constructor(
                Constructor::new(|args| {
                    Ok(WithDefaults {
                        string: args.take("string")?,
                        int: args.take("int")?,
                        plain: args.take("plain")?,
                    })
                })
                .param_with_default::<String, _>("string", || "string theory".to_string())
                .param_with_default::<i32, _>("int", || 42)
                .param::<u64>("plain"),
            ),
        )
    }
}

/// Nullable and defaulted at once; minimal mode nulls it.
#[derive(Debug, Clone, PartialEq)]
pub struct NullableWithDefault {
    pub nickname: Option<String>,
}

impl Generate for NullableWithDefault {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Composite(
            TypeDescriptor::new("NullableWithDefault").constructor(
                Constructor::new(|args| {
                    Ok(NullableWithDefault {
                        nickname: args.take("nickname")?,
                    })
                })
                .param_with_default::<Option<String>, _>("nickname", || Some("nick".to_string())),
            ),
        )
    }
}

#[derive(Debug)]
pub struct SelfReferencing {
    pub recursive_field: Box<SelfReferencing>,
}

impl Generate for SelfReferencing {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Composite(
            TypeDescriptor::new("SelfReferencing").constructor(
                Constructor::new(|args| {
                    Ok(SelfReferencing {
                        recursive_field: args.take("recursive_field")?,
                    })
                })
                .param::<Box<SelfReferencing>>("recursive_field"),
            ),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub value: u8,
    pub next: Option<Box<Node>>,
}

impl Generate for Node {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Composite(
            TypeDescriptor::new("Node").constructor(
                Constructor::new(|args| {
                    Ok(Node {
                        value: args.take("value")?,
                        next: args.take("next")?,
                    })
                })
                .param::<u8>("value")
                .param::<Option<Box<Node>>>("next"),
            ),
        )
    }
}

#[derive(Debug)]
pub struct Chicken {
    pub egg: Egg,
}

#[derive(Debug)]
pub struct Egg {
    pub chicken: Box<Chicken>,
}

impl Generate for Chicken {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Composite(
            TypeDescriptor::new("Chicken").constructor(
                Constructor::new(|args| Ok(Chicken { egg: args.take("egg")? }))
                    .param::<Egg>("egg"),
            ),
        )
    }
}

impl Generate for Egg {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Composite(
            TypeDescriptor::new("Egg").constructor(
                Constructor::new(|args| {
                    Ok(Egg {
                        chicken: args.take("chicken")?,
                    })
                })
                .param::<Box<Chicken>>("chicken"),
            ),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shared {
    pub id: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Left {
    pub shared: Shared,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Right {
    pub shared: Shared,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diamond {
    pub left: Left,
    pub right: Right,
    pub shared: Shared,
    pub many: Vec<Shared>,
}

impl Generate for Shared {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Composite(
            TypeDescriptor::new("Shared").constructor(
                Constructor::new(|args| Ok(Shared { id: args.take("id")? })).param::<u32>("id"),
            ),
        )
    }
}

impl Generate for Left {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Composite(
            TypeDescriptor::new("Left").constructor(
                Constructor::new(|args| {
                    Ok(Left {
                        shared: args.take("shared")?,
                    })
                })
                .param::<Shared>("shared"),
            ),
        )
    }
}

impl Generate for Right {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Composite(
            TypeDescriptor::new("Right").constructor(
                Constructor::new(|args| {
                    Ok(Right {
                        shared: args.take("shared")?,
                    })
                })
                .param::<Shared>("shared"),
            ),
        )
    }
}

impl Generate for Diamond {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Composite(
            TypeDescriptor::new("Diamond").constructor(
                Constructor::new(|args| {
                    Ok(Diamond {
                        left: args.take("left")?,
                        right: args.take("right")?,
                        shared: args.take("shared")?,
                        many: args.take("many")?,
                    })
                })
                .param::<Left>("left")
                .param::<Right>("right")
                .param::<Shared>("shared")
                .param::<Vec<Shared>>("many"),
            ),
        )
    }
}

/// Private primary constructor next to a public secondary one.
#[derive(Debug, Clone, PartialEq)]
pub struct PrivatePrimary {
    pub string: String,
}

impl Generate for PrivatePrimary {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Composite(
            TypeDescriptor::new("PrivatePrimary")
                .constructor(
                    Constructor::new(|args| {
                        Ok(PrivatePrimary {
                            string: args.take("string")?,
                        })
                    })
                    .private()
                    .param::<String>("string"),
                )
                .constructor(
                    Constructor::new(|args| {
                        let int: i32 = args.take("int")?;
                        Ok(PrivatePrimary {
                            string: int.to_string(),
                        })
                    })
                    .secondary()
                    .param::<i32>("int"),
                ),
        )
    }
}

#[derive(Debug)]
pub struct WithPrivateConstructor;

impl Generate for WithPrivateConstructor {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Composite(
            TypeDescriptor::new("WithPrivateConstructor")
                .constructor(Constructor::new(|_| Ok(WithPrivateConstructor)).private()),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WithInstant {
    pub instant: Instant,
}

impl Generate for WithInstant {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Composite(
            TypeDescriptor::new("WithInstant").constructor(
                Constructor::new(|args| {
                    Ok(WithInstant {
                        instant: args.take("instant")?,
                    })
                })
                .param_custom::<Instant>("instant"),
            ),
        )
    }
}
