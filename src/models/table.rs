//! Tabular breakdown schema.
//!
//! Every extractor that emits a per-sub-mode breakdown does so through
//! [`Table`]: an ordered header, rows of heterogeneous cells, and rendering
//! hints (bold rows/columns, numeric formatting, highlight thresholds,
//! column button groupings). Row tuples must always match the header arity.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// A named subset of columns the UI can toggle between.
#[derive(Debug, Clone, Serialize)]
pub struct ButtonGroup {
    pub label: String,
    pub cols: Vec<usize>,
}

/// A display table with rendering hints.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: String,
    pub head: Vec<String>,
    pub rows: Vec<Vec<Value>>,

    /// 1-based indices of rows rendered bold.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bold_rows: Vec<usize>,

    /// Indices of columns rendered bold.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bold_cols: Vec<usize>,

    /// Columns holding percentages.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub percent: Vec<usize>,

    /// Columns holding fixed-point decimals.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub decimal: Vec<usize>,

    /// Columns holding second-denominated durations.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub duration: Vec<usize>,

    /// Column index → threshold at which a value is highlighted green.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub green: BTreeMap<usize, f64>,

    /// Column button groupings, in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<ButtonGroup>,

    /// Row index → sub-heading label inserted above that row.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub divider: BTreeMap<usize, String>,

    /// Fixed render width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

impl Table {
    pub fn new(id: &str, head: &[&str]) -> Self {
        Table {
            id: id.to_string(),
            head: head.iter().map(|h| h.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn rows(mut self, rows: Vec<Vec<Value>>) -> Self {
        self.rows = rows;
        self
    }

    pub fn bold_rows(mut self, rows: &[usize]) -> Self {
        self.bold_rows = rows.to_vec();
        self
    }

    pub fn bold_cols(mut self, cols: &[usize]) -> Self {
        self.bold_cols = cols.to_vec();
        self
    }

    pub fn percent(mut self, cols: &[usize]) -> Self {
        self.percent = cols.to_vec();
        self
    }

    pub fn decimal(mut self, cols: &[usize]) -> Self {
        self.decimal = cols.to_vec();
        self
    }

    pub fn duration(mut self, cols: &[usize]) -> Self {
        self.duration = cols.to_vec();
        self
    }

    pub fn green(mut self, thresholds: &[(usize, f64)]) -> Self {
        self.green = thresholds.iter().cloned().collect();
        self
    }

    pub fn buttons(mut self, groups: &[(&str, &[usize])]) -> Self {
        self.buttons = groups
            .iter()
            .map(|(label, cols)| ButtonGroup {
                label: label.to_string(),
                cols: cols.to_vec(),
            })
            .collect();
        self
    }

    pub fn divider(mut self, row: usize, label: &str) -> Self {
        self.divider.insert(row, label.to_string());
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Verify the table invariants: every row matches the header arity and
    /// every hint index addresses a real column.
    pub fn check(&self) -> Result<(), String> {
        let cols = self.head.len();
        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != cols {
                return Err(format!(
                    "table {}: row {} has {} cells, head has {}",
                    self.id,
                    i,
                    row.len(),
                    cols
                ));
            }
        }

        let hint_cols = self
            .bold_cols
            .iter()
            .chain(self.percent.iter())
            .chain(self.decimal.iter())
            .chain(self.duration.iter())
            .chain(self.green.keys())
            .chain(self.buttons.iter().flat_map(|b| b.cols.iter()));
        for &col in hint_cols {
            if col >= cols {
                return Err(format!(
                    "table {}: hint column {} out of range ({} columns)",
                    self.id, col, cols
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Table {
        Table::new("tableSample", &["Mode", "Wins", "Losses", "W/L"])
            .rows(vec![
                vec![json!("Overall"), json!(10), json!(5), json!(2.0)],
                vec![json!("Solo"), json!(4), json!(1), json!(4.0)],
            ])
            .bold_rows(&[1])
            .percent(&[3])
            .green(&[(3, 10.0)])
            .buttons(&[("W/L", &[0, 1, 2, 3])])
    }

    #[test]
    fn test_check_ok() {
        assert!(sample().check().is_ok());
    }

    #[test]
    fn test_check_row_arity() {
        let mut table = sample();
        table.rows.push(vec![json!("Short")]);
        assert!(table.check().is_err());
    }

    #[test]
    fn test_check_hint_out_of_range() {
        let table = sample().decimal(&[7]);
        assert!(table.check().is_err());
    }

    #[test]
    fn test_serialization_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("boldRows").is_some());
        assert!(value.get("green").is_some());
        // Empty hint lists are omitted.
        assert!(value.get("boldCols").is_none());
        assert!(value.get("width").is_none());
    }
}
