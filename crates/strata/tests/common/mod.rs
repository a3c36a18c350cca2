//! Shared fixtures for the integration suites.
#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;

use strata::{Bindable, Field, Result, Slot, Source, SourceMap, Value};

/// A bindable server-shaped target covering every slot kind.
#[derive(Default)]
pub struct ServerTarget {
    pub host: String,
    pub port: i64,
    pub ratio: f64,
    pub debug: bool,
    pub tags: Vec<String>,
    pub notified: usize,
}

impl Bindable for ServerTarget {
    fn fields(&mut self) -> Vec<Field<'_>> {
        vec![
            Field::new("host", Slot::Str(&mut self.host)),
            Field::new("port", Slot::Int(&mut self.port)),
            Field::new("ratio", Slot::Float64(&mut self.ratio)),
            Field::new("debug", Slot::Bool(&mut self.debug)),
            Field::new("tags", Slot::Strings(&mut self.tags)),
        ]
    }

    fn notify(&mut self) {
        self.notified += 1;
    }
}

/// A source whose single value can be flipped between loads.
#[derive(Clone)]
pub struct SwitchSource {
    key: &'static str,
    value: Arc<Mutex<String>>,
}

impl SwitchSource {
    pub fn new(key: &'static str, initial: &str) -> Self {
        Self {
            key,
            value: Arc::new(Mutex::new(initial.to_string())),
        }
    }

    pub fn set(&self, value: &str) {
        *self.value.lock() = value.to_string();
    }
}

impl Source for SwitchSource {
    fn name(&self) -> &str {
        "switch"
    }

    fn load(&self) -> Result<SourceMap> {
        let mut map = SourceMap::new();
        map.insert(self.key.to_string(), Value::from(self.value.lock().clone()));
        Ok(map)
    }
}

/// A source that always fails to load.
pub struct FailingSource;

impl Source for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    fn load(&self) -> Result<SourceMap> {
        Err(std::io::Error::other("backing store offline").into())
    }
}
