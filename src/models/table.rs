use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::sample::LocalSample;

// ---------------------------------------------------------------------------
// AnnualTable -- Rows produced by one aggregation run
// ---------------------------------------------------------------------------

/// One row per (sampled date, city), in the order they were produced:
/// by ascending date, and within a date by city insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnualTable {
    rows: Vec<LocalSample>,
}

impl AnnualTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            rows: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, sample: LocalSample) {
        self.rows.push(sample);
    }

    pub fn rows(&self) -> &[LocalSample] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LocalSample> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct city tags in order of first appearance.
    pub fn cities(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for city in self.rows.iter().filter_map(|r| r.city.as_deref()) {
            if !seen.contains(&city) {
                seen.push(city);
            }
        }
        seen
    }

    /// Rows tagged with `city`, in table order.
    pub fn for_city<'a>(&'a self, city: &'a str) -> impl Iterator<Item = &'a LocalSample> + 'a {
        self.rows
            .iter()
            .filter(move |r| r.city.as_deref() == Some(city))
    }

    /// Write every row as one JSON object per line.
    pub fn write_ndjson<W: Write>(&self, mut out: W) -> Result<()> {
        for row in &self.rows {
            serde_json::to_writer(&mut out, row)?;
            out.write_all(b"\n")?;
        }
        out.flush()?;
        Ok(())
    }
}

impl FromIterator<LocalSample> for AnnualTable {
    fn from_iter<I: IntoIterator<Item = LocalSample>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AnnualTable {
    type Item = &'a LocalSample;
    type IntoIter = std::slice::Iter<'a, LocalSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
