//! Layered merging of YAML configuration values.
//!
//! # Merge Rules
//!
//! - Mappings are merged key by key, recursively
//! - Sequences and scalars in the overlay replace the base value
//! - A null in the overlay removes the key from the base

use serde_yaml::Value;

/// Merge `overlay` into `base` in place.
pub fn merge_into(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                if value.is_null() {
                    base_map.remove(&key);
                    continue;
                }
                match base_map.get_mut(&key) {
                    Some(existing) => merge_into(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Merge layers in order; later layers take precedence.
pub fn merge_layers(layers: impl IntoIterator<Item = Value>) -> Value {
    layers
        .into_iter()
        .fold(Value::Mapping(Default::default()), |mut merged, layer| {
            merge_into(&mut merged, layer);
            merged
        })
}
