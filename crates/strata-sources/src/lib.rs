//! # strata-sources
//!
//! Built-in [`Source`](strata_core::Source) implementations: process
//! environment, line-delimited key/value files, literal in-memory pairs,
//! mounted volume directories, remote HTTP endpoints, and parsed CLI flags.
//!
//! Every source produces a flat [`SourceMap`](strata_core::SourceMap);
//! precedence between sources is decided by registration order in the
//! aggregator, not here.

pub mod args;
pub mod env;
pub mod file;
pub mod http;
pub mod kv;
pub mod literal;
pub mod volume;

pub use args::ArgsSource;
pub use env::EnvSource;
pub use file::FileSource;
pub use http::HttpSource;
pub use literal::LiteralSource;
pub use volume::VolumeSource;
