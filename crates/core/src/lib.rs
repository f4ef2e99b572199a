//! Core crate for resolving `lv_conf.h`-style configuration profiles.
//!
//! Profiles are loaded into ordered assignments, merged so that later sources
//! win, validated against the option [`Registry`], and resolved into a
//! canonical [`Configuration`] that can be emitted again as a header. The
//! root module re-exports the types needed to drive that chain, and
//! [`Pipeline`] runs all of it in one call.

pub mod emit;
mod key;
pub mod loader;
pub mod merge;
pub mod pipeline;
pub mod registry;
pub mod resolve;
pub mod validate;
mod value;

pub use crate::emit::emit_header;
pub use crate::key::OptionKey;
pub use crate::loader::{Action, Assignment, LoadError, LoadedSource, Source, load, load_source};
pub use crate::merge::{MergedEntry, MergedOptions, merge};
pub use crate::pipeline::{Pipeline, PipelineError, Resolution};
pub use crate::registry::{
	FontFootprint, Literal, OptionGroup, OptionSpec, Registry, RegistryError, ValueType,
};
pub use crate::resolve::{
	ConfigEntry, Configuration, Derived, Origin, UnresolvedReference, resolve,
};
pub use crate::validate::{
	ValidatedOptions, ValidatedValue, ValidationMode, Violation, ViolationKind, validate,
};
pub use crate::value::{Provenance, RawValue, Value};
