//! [`Bindable`] for `String`.
//!
//! Strings expose a small read vocabulary plus one in-place mutator, enough
//! to drive the builders over plain text collections. There is no writer
//! capability: strings have no named attributes to assign.
//!
//! | Name | Args | Result |
//! |------|------|--------|
//! | `length` | - | character count |
//! | `is_empty` | - | bool |
//! | `upcase` | - | uppercased copy |
//! | `downcase` | - | lowercased copy |
//! | `trim` | - | trimmed copy |
//! | `itself` | - | the string itself |
//! | `sub` | from, to | copy with the first occurrence replaced |
//! | `index` | needle | byte offset of the first occurrence, or unit |
//! | `starts_with` | prefix | bool |
//! | `sub_mut` | from, to | in-place first-occurrence replace, returns the new contents |

use crate::error::{BindError, Result};
use crate::traits::Bindable;
use crate::value::Value;

fn expect_arity(name: &str, args: &[Value], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(BindError::arity(name, expected, args.len()));
    }
    Ok(())
}

fn str_arg(args: &[Value], index: usize) -> Result<&str> {
    match args.get(index) {
        Some(Value::Str(s)) => Ok(s.as_str()),
        Some(other) => Err(BindError::type_mismatch("string", other.kind())),
        None => Err(BindError::TypeMismatch {
            expected: "string",
            actual: "missing argument",
        }),
    }
}

impl Bindable for String {
    fn read_attr(&self, name: &str, args: &[Value]) -> Result<Value> {
        match name {
            "length" => {
                expect_arity(name, args, 0)?;
                Ok(Value::from(self.chars().count()))
            }
            "is_empty" => {
                expect_arity(name, args, 0)?;
                Ok(Value::from(self.is_empty()))
            }
            "upcase" => {
                expect_arity(name, args, 0)?;
                Ok(Value::from(self.to_uppercase()))
            }
            "downcase" => {
                expect_arity(name, args, 0)?;
                Ok(Value::from(self.to_lowercase()))
            }
            "trim" => {
                expect_arity(name, args, 0)?;
                Ok(Value::from(self.trim()))
            }
            "itself" => {
                expect_arity(name, args, 0)?;
                Ok(Value::from(self.clone()))
            }
            "sub" => {
                expect_arity(name, args, 2)?;
                let from = str_arg(args, 0)?;
                let to = str_arg(args, 1)?;
                Ok(Value::from(self.replacen(from, to, 1)))
            }
            "index" => {
                expect_arity(name, args, 1)?;
                let needle = str_arg(args, 0)?;
                Ok(match self.find(needle) {
                    Some(position) => Value::from(position),
                    None => Value::Unit,
                })
            }
            "starts_with" => {
                expect_arity(name, args, 1)?;
                let prefix = str_arg(args, 0)?;
                Ok(Value::from(self.starts_with(prefix)))
            }
            _ => Err(BindError::attribute_not_found::<String>(name)),
        }
    }

    fn invoke(&mut self, name: &str, args: &[Value]) -> Result<Value> {
        match name {
            "sub_mut" => {
                expect_arity(name, args, 2)?;
                let replaced = {
                    let from = str_arg(args, 0)?;
                    let to = str_arg(args, 1)?;
                    self.replacen(from, to, 1)
                };
                *self = replaced;
                Ok(Value::from(self.clone()))
            }
            _ => self.read_attr(name, args),
        }
    }
}
