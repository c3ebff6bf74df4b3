//! Walkthrough: one spec, one closure, a whole collection.
//!
//! Run with `cargo run --example people`.

use std::cmp::Ordering;

use bindery::{
    call, filter, get, set, BindError, Bindable, Fetched, FilterSpec, Invocations, Result,
    SetSpec, Value,
};

#[derive(Debug, Clone)]
struct Person {
    name: String,
    age: i64,
    gender: String,
}

impl Person {
    fn new(name: &str, age: i64, gender: &str) -> Self {
        Person {
            name: name.to_string(),
            age,
            gender: gender.to_string(),
        }
    }
}

impl Bindable for Person {
    fn read_attr(&self, name: &str, args: &[Value]) -> Result<Value> {
        match name {
            "name" | "age" | "gender" if !args.is_empty() => {
                Err(BindError::arity(name, 0, args.len()))
            }
            "name" => Ok(Value::from(self.name.clone())),
            "age" => Ok(Value::from(self.age)),
            "gender" => Ok(Value::from(self.gender.clone())),
            // one-argument accessor
            "greet" => {
                if args.len() != 1 {
                    return Err(BindError::arity(name, 1, args.len()));
                }
                match &args[0] {
                    Value::Str(who) => Ok(Value::from(format!("{}: Hello, {}!", self.name, who))),
                    other => Err(BindError::type_mismatch("string", other.kind())),
                }
            }
            _ => Err(BindError::attribute_not_found::<Person>(name)),
        }
    }

    fn write_attr(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "name" => {
                self.name = String::try_from(value)?;
                Ok(())
            }
            "age" => {
                self.age = i64::try_from(value)?;
                Ok(())
            }
            "gender" => {
                self.gender = String::try_from(value)?;
                Ok(())
            }
            _ => Err(BindError::not_writable::<Person>(name)),
        }
    }
}

fn main() -> Result<()> {
    let mut people = vec![
        Person::new("John", 30, "male"),
        Person::new("Jane", 23, "female"),
        Person::new("Jake", 48, "male"),
        Person::new("Judith", 16, "female"),
    ];

    // filter: select by attribute values
    let young_women = filter(FilterSpec::new().attr("gender", "female").attr("age", 18..30));
    for person in people.iter().filter(|p| young_women(*p).unwrap_or(false)) {
        println!("matched: {:?}", person);
    }

    // get: bulk read, which makes compound sort keys cheap
    let by_gender_and_age = get(Invocations::new().method("gender").method("age"));
    let mut sorted = people.clone();
    sorted.sort_by(|a, b| match (by_gender_and_age(a), by_gender_and_age(b)) {
        (Ok(ka), Ok(kb)) => ka.partial_cmp(&kb).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    });
    println!("by gender, then age:");
    for person in &sorted {
        println!("  {:?}", person);
    }

    // call: invoke with arguments, every entry against the original receiver
    let greet = call(Invocations::new().method_with("greet", ["Ellis"]));
    for person in people.iter_mut() {
        if let Fetched::One(line) = greet(person)? {
            println!("{}", String::try_from(line)?);
        }
    }

    // set: bulk in-place mutation
    let come_of_age = set(SetSpec::new().attr("age", 21));
    for person in people.iter_mut() {
        come_of_age(person)?;
    }
    println!("after set: {:?}", people);

    Ok(())
}
