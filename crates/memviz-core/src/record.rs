//! Records and datasets.

use serde::Serialize;
use tracing::warn;

/// Colour family of a record. Frontends map tags to concrete colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Gray,
}

/// One labeled numeric entry of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Display name, e.g. "L1 Cache".
    pub label: String,
    /// Authored magnitude, always `>= 0`.
    pub value: f64,
    /// Unit appended to the value in tooltips, e.g. "cycles".
    pub unit: String,
    /// One-line explanation shown in the tooltip.
    pub description: String,
    /// Colour family.
    pub color: ColorTag,
}

impl Record {
    /// Create a record.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
        description: impl Into<String>,
        color: ColorTag,
    ) -> Self {
        Self {
            label: label.into(),
            value,
            unit: unit.into(),
            description: description.into(),
            color,
        }
    }

    /// Authored value followed by its unit ("200 cycles", "8% of address space").
    #[must_use]
    pub fn value_text(&self) -> String {
        if self.unit.is_empty() {
            format!("{}", self.value)
        } else if self.unit.starts_with('%') {
            format!("{}{}", self.value, self.unit)
        } else {
            format!("{} {}", self.value, self.unit)
        }
    }
}

/// Fixed, ordered sequence of records. Order is display order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Build a dataset, replacing negative or non-finite values with zero.
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        let records = records
            .into_iter()
            .map(|mut record| {
                if !record.value.is_finite() || record.value < 0.0 {
                    warn!(label = %record.label, value = record.value, "record value out of range, using 0");
                    record.value = 0.0;
                }
                record
            })
            .collect();
        Self { records }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// All records in display order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate records in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Authored values in display order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.value).collect()
    }

    /// Largest authored value, 0 for an empty dataset.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.records.iter().map(|r| r.value).fold(0.0, f64::max)
    }

    /// Sum of authored values.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.records.iter().map(|r| r.value).sum()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(label: &str, value: f64) -> Record {
        Record::new(label, value, "cycles", "", ColorTag::Blue)
    }

    #[test]
    fn max_and_sum() {
        let ds = Dataset::new(vec![rec("a", 1.0), rec("b", 4.0), rec("c", 2.0)]);
        assert!((ds.max() - 4.0).abs() < f64::EPSILON);
        assert!((ds.sum() - 7.0).abs() < f64::EPSILON);
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn empty_dataset_has_zero_max_and_sum() {
        let ds = Dataset::new(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.max().abs() < f64::EPSILON);
        assert!(ds.sum().abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_range_values_become_zero() {
        let ds = Dataset::new(vec![rec("neg", -3.0), rec("nan", f64::NAN), rec("inf", f64::INFINITY)]);
        assert!(ds.values().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn order_is_preserved() {
        let ds = Dataset::new(vec![rec("z", 1.0), rec("a", 2.0)]);
        let labels: Vec<&str> = ds.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["z", "a"]);
    }

    #[test]
    fn value_text_formats() {
        assert_eq!(rec("ram", 200.0).value_text(), "200 cycles");
        let pct = Record::new("Stack", 8.0, "% of address space", "", ColorTag::Red);
        assert_eq!(pct.value_text(), "8% of address space");
        let bare = Record::new("x", 1.5, "", "", ColorTag::Gray);
        assert_eq!(bare.value_text(), "1.5");
    }
}
