//! Herodex library entry points.
//!
//! This crate exposes the superhero roster domain: the record types, the
//! declarative creation schema with its validation gate, and the in-memory
//! roster that owns the collection. Higher-level consumers (the HTTP
//! service) should only depend on the types exported here instead of
//! reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod hero;
pub mod roster;
pub mod schema;

pub use error::{Error, Result};
pub use hero::{NewSuperhero, Superhero};
pub use roster::Roster;
pub use schema::{creation_schema, Field, FieldRule, Schema};
