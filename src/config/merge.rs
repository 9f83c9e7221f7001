//! TOML value merging for `extends` chains.

/// Merge `child` over `base`.
///
/// Tables merge recursively, arrays are appended (base first), and any other
/// child value replaces the base value.
#[must_use]
pub fn merge_toml_values(base: toml::Value, child: toml::Value) -> toml::Value {
    match (base, child) {
        (toml::Value::Table(mut base_table), toml::Value::Table(child_table)) => {
            for (key, child_val) in child_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml_values(base_val, child_val),
                    None => child_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (toml::Value::Array(mut base_arr), toml::Value::Array(child_arr)) => {
            base_arr.extend(child_arr);
            toml::Value::Array(base_arr)
        }
        (_, child) => child,
    }
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
