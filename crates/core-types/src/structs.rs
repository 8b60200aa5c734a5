use crate::error::CoreError;
use chrono::NaiveDate;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// A single field of a result row.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Number(f64),
    Date(NaiveDate),
    Text(String),
}

impl Cell {
    /// Returns the numeric content of the cell, if it holds a finite number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) if value.is_finite() => Some(*value),
            _ => None,
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Cell::Null => 0,
            Cell::Number(_) => 1,
            Cell::Date(_) => 2,
            Cell::Text(_) => 3,
        }
    }

    /// Total order used to sort labels: dates chronologically, numbers numerically,
    /// text lexicographically. Cells of different kinds order by kind.
    pub fn label_cmp(&self, other: &Cell) -> Ordering {
        match (self, other) {
            (Cell::Number(a), Cell::Number(b)) => a.total_cmp(b),
            (Cell::Date(a), Cell::Date(b)) => a.cmp(b),
            (Cell::Text(a), Cell::Text(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Number(value) if value.fract() == 0.0 && value.abs() < 1e15 => {
                write!(f, "{}", *value as i64)
            }
            Cell::Number(value) => write!(f, "{}", value),
            Cell::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Cell::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(value as f64)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<NaiveDate> for Cell {
    fn from(value: NaiveDate) -> Self {
        Cell::Date(value)
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Null => serializer.serialize_none(),
            Cell::Number(value) => serializer.serialize_f64(*value),
            Cell::Date(date) => serializer.collect_str(&date.format("%Y-%m-%d")),
            Cell::Text(text) => serializer.serialize_str(text),
        }
    }
}

struct CellVisitor;

impl<'de> Visitor<'de> for CellVisitor {
    type Value = Cell;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, a string, or null")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Cell, E> {
        Ok(Cell::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Cell, E> {
        Ok(Cell::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Cell, D::Error> {
        deserializer.deserialize_any(CellVisitor)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<Cell, E> {
        Ok(Cell::Text(value.to_string()))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Cell, E> {
        Ok(Cell::Number(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Cell, E> {
        Ok(Cell::Number(value as f64))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Cell, E> {
        Ok(Cell::Number(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Cell, E> {
        // Query layers hand dates over as ISO strings.
        match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            Ok(date) => Ok(Cell::Date(date)),
            Err(_) => Ok(Cell::Text(value.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CellVisitor)
    }
}

/// One row of a tabular result, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: BTreeMap<String, Cell>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, builder style.
    pub fn with(mut self, column: impl Into<String>, cell: impl Into<Cell>) -> Self {
        self.fields.insert(column.into(), cell.into());
        self
    }

    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.fields.get(column)
    }
}

/// An ordered, immutable tabular result handed over by the query layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Builds a two-column dataset from `(label, value)` pairs.
    pub fn from_pairs<L, I>(label_column: &str, value_column: &str, pairs: I) -> Self
    where
        L: Into<Cell>,
        I: IntoIterator<Item = (L, f64)>,
    {
        let rows = pairs
            .into_iter()
            .map(|(label, value)| {
                Row::new()
                    .with(label_column, label)
                    .with(value_column, Cell::Number(value))
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Extracts the `(label, value)` observations for the requested columns, in row order.
    ///
    /// This is where the engine's preconditions are enforced: the dataset must be
    /// non-empty, every row must carry both columns, and every value must be a
    /// finite number.
    pub fn observations(
        &self,
        label_column: &str,
        value_column: &str,
    ) -> Result<Vec<Observation>, CoreError> {
        if self.rows.is_empty() {
            return Err(CoreError::EmptyDataset);
        }

        self.rows
            .iter()
            .enumerate()
            .map(|(index, row)| -> Result<Observation, CoreError> {
                let label = row.get(label_column).ok_or_else(|| CoreError::MissingColumn {
                    row: index,
                    column: label_column.to_string(),
                })?;
                let value = row
                    .get(value_column)
                    .ok_or_else(|| CoreError::MissingColumn {
                        row: index,
                        column: value_column.to_string(),
                    })?
                    .as_number()
                    .ok_or_else(|| CoreError::NonNumericValue {
                        row: index,
                        column: value_column.to_string(),
                    })?;

                Ok(Observation {
                    label: label.clone(),
                    value,
                })
            })
            .collect()
    }
}

/// A label/value pair extracted from one row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub label: Cell,
    pub value: f64,
}

impl Observation {
    pub fn new(label: impl Into<Cell>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
