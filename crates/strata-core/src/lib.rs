//! # strata-core
//!
//! Core types and traits for the Strata configuration binder. This crate
//! defines the shared vocabulary used by the source adapters and the
//! binding engine: the coercible [`Value`], the immutable [`ValueTable`]
//! snapshot, the [`Source`] trait, and the unified error type.

pub mod error;
pub mod source;
pub mod table;
pub mod value;

pub use error::{Result, StrataError};
pub use source::{Source, SourceMap};
pub use table::{LookupMode, ValueTable};
pub use value::Value;
