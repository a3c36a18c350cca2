//! The binding engine — field descriptors and the per-target bind pass.

use std::sync::Arc;

use parking_lot::Mutex;

use strata_core::ValueTable;

/// Sentinel key marking a descriptor as skipped.
pub const SKIP: &str = "-";

/// A typed mutable slot for one bindable field.
pub enum Slot<'a> {
    Str(&'a mut String),
    Int(&'a mut i64),
    Float32(&'a mut f32),
    Float64(&'a mut f64),
    Bool(&'a mut bool),
    Strings(&'a mut Vec<String>),
}

/// One field descriptor: the lookup key and the slot it populates.
///
/// The field's kind is carried by the slot itself; the key is the only
/// annotation a caller supplies. An empty key or the [`SKIP`] sentinel
/// leaves the field untouched.
pub struct Field<'a> {
    key: &'static str,
    slot: Slot<'a>,
}

impl<'a> Field<'a> {
    pub fn new(key: &'static str, slot: Slot<'a>) -> Self {
        Self { key, slot }
    }
}

/// A structure whose tagged fields receive configuration values.
///
/// `fields` enumerates one descriptor per bindable field. `notify` is the
/// optional changed hook: it runs synchronously, exactly once per bind
/// pass that changed at least one field, after all assignments for the
/// target are complete. The default body does nothing, which is
/// behaviorally the same as not having the hook.
///
/// TODO: a derive macro generating `fields()` from field attributes.
pub trait Bindable: Send {
    fn fields(&mut self) -> Vec<Field<'_>>;

    fn notify(&mut self) {}
}

/// A registered binding target, shared between the caller and the reload
/// coordinator. The caller keeps its own clone and sees every rebind.
pub type Target = Arc<Mutex<dyn Bindable>>;

/// Run one bind pass of `table` over `target`; returns whether any field
/// observably changed.
///
/// A found value always overwrites the field. The change flag is only
/// raised when the previous value was non-zero and differs from the new
/// one: a zero current value is treated as "not yet set", so the first
/// population of a field is not a change. A missing key or a value that
/// will not coerce leaves the field alone and raises nothing.
pub(crate) fn apply_table(table: &ValueTable, target: &mut dyn Bindable) -> bool {
    let mut changed = false;

    for field in target.fields() {
        if field.key.is_empty() || field.key == SKIP {
            continue;
        }
        match field.slot {
            Slot::Str(slot) => {
                if let Some(value) = table.get(field.key) {
                    changed |= !slot.is_empty() && *slot != value;
                    *slot = value;
                }
            }
            Slot::Int(slot) => {
                if let Some(value) = table.get_int(field.key) {
                    changed |= *slot != 0 && *slot != value;
                    *slot = value;
                }
            }
            Slot::Float32(slot) => {
                if let Some(value) = table.get_float(field.key) {
                    let value = value as f32;
                    changed |= *slot != 0.0 && *slot != value;
                    *slot = value;
                }
            }
            Slot::Float64(slot) => {
                if let Some(value) = table.get_float(field.key) {
                    changed |= *slot != 0.0 && *slot != value;
                    *slot = value;
                }
            }
            Slot::Bool(slot) => {
                if let Some(value) = table.get_bool(field.key) {
                    changed |= *slot && *slot != value;
                    *slot = value;
                }
            }
            Slot::Strings(slot) => {
                if let Some(value) = table.get_strings(field.key) {
                    changed |= !slot.is_empty() && *slot != value;
                    *slot = value;
                }
            }
        }
    }

    if changed {
        target.notify();
    }
    changed
}
