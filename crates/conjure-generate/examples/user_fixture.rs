//! Prints a random `User` fixture.
//!
//! Run with `RUST_LOG=conjure_generate=trace` to follow the engine.

use conjure_generate::{
    Blueprint, Config, Constructor, Engine, EnumDescriptor, GenerationError, Generate,
    TypeDescriptor,
};

#[derive(Debug, Clone, Copy)]
enum BeanType {
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

#[derive(Debug)]
struct Group {
    name: String,
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

#[derive(Debug)]
struct User {
    name: String,
    age: i32,
    nickname: Option<String>,
    favorite_coffee: BeanType,
    groups: Vec<Group>,
}

impl Generate for User {
    fn blueprint() -> Blueprint<Self> {
        Blueprint::Composite(
            TypeDescriptor::new("User").constructor(
                Constructor::new(|args| {
                    Ok(User {
                        name: args.take("name")?,
                        age: args.take("age")?,
                        nickname: args.take("nickname")?,
                        favorite_coffee: args.take("favorite_coffee")?,
                        groups: args.take("groups")?,
                    })
                })
                .param::<String>("name")
                .param::<i32>("age")
                .param_with_default::<Option<String>, _>("nickname", || None)
                .param::<BeanType>("favorite_coffee")
                .param::<Vec<Group>>("groups"),
            ),
        )
    }
}

fn main() -> Result<(), GenerationError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let user: User = Engine::new(Config::default()).create()?;
    println!("{user:#?}");

    let config = Config::builder().minimal(true).build()?;
    let minimal: User = Engine::new(config).create()?;
    println!("{minimal:#?}");
    Ok(())
}
