//! # strata
//!
//! Layered configuration aggregation with typed binding and hot reload.
//!
//! A [`Config`] pulls flat key/value maps from registered
//! [`Source`]s, merges them into one immutable [`ValueTable`] (later
//! sources win on key collision), and binds the table onto caller-owned
//! structures implementing [`Bindable`]. Watched paths trigger a full
//! reload: the table is rebuilt and every registered target is re-bound in
//! registration order, with change notifications for targets whose
//! observable state moved.
//!
//! ```no_run
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use strata::{Bindable, ConfigBuilder, Field, Slot};
//!
//! #[derive(Default)]
//! struct Server {
//!     host: String,
//!     port: i64,
//! }
//!
//! impl Bindable for Server {
//!     fn fields(&mut self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::new("host", Slot::Str(&mut self.host)),
//!             Field::new("port", Slot::Int(&mut self.port)),
//!         ]
//!     }
//! }
//!
//! let config = ConfigBuilder::new()
//!     .with_env("APP_")
//!     .with_file("/etc/app/app.conf", "=")
//!     .build();
//!
//! let server = Arc::new(Mutex::new(Server::default()));
//! config.bind(&server);
//! ```

mod aggregate;
pub mod bind;
pub mod builder;
pub mod config;
mod watch;

pub use bind::{Bindable, Field, Slot, Target, SKIP};
pub use builder::ConfigBuilder;
pub use config::Config;

pub use strata_core::{LookupMode, Result, Source, SourceMap, StrataError, Value, ValueTable};
