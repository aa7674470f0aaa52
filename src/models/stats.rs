//! Derived statistics containers.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::calculate::ratio3;
use crate::models::Table;

/// One extractor's output: stat name → value.
///
/// Values are heterogeneous (counters, ratios, formatted strings, nested
/// structures), so they live as JSON values under deterministic key order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Stats(pub BTreeMap<String, Value>);

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value under `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Insert any serializable structure under `key`.
    pub fn set_struct<T: Serialize>(&mut self, key: impl Into<String>, value: &T) {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.0.insert(key.into(), value);
    }

    /// Insert a table under `key`.
    pub fn set_table(&mut self, key: impl Into<String>, table: Table) {
        self.set_struct(key, &table);
    }

    /// Numeric read of an already-collected stat; absent or non-numeric
    /// reads as 0.
    pub fn num(&self, key: &str) -> f64 {
        self.0.get(key).and_then(Value::as_f64).unwrap_or(0.0)
    }

    /// Integer read of an already-collected stat; absent reads as 0.
    pub fn int(&self, key: &str) -> i64 {
        self.0
            .get(key)
            .and_then(Value::as_f64)
            .map(|v| v as i64)
            .unwrap_or(0)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Compute a batch of ratios from already-collected stats.
    ///
    /// Each entry is `(output key, numerator key, denominator key)`;
    /// missing operands default to 0 and the zero-denominator fallback of
    /// [`ratio3`](crate::calculate::ratio3) applies.
    pub fn add_ratios(&mut self, specs: &[(&str, &str, &str)]) {
        for &(out, numerator, denominator) in specs {
            let value = ratio3(self.num(numerator), self.num(denominator));
            self.set(out, value);
        }
    }
}

/// The assembled derived-stats document for one player.
#[derive(Debug, Clone, Serialize)]
pub struct DerivedStats(pub Value);

impl DerivedStats {
    /// Look up a nested section by dotted path, e.g.
    /// `"modes.classic.arena"`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut current = &self.0;
        for part in path.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }
}
