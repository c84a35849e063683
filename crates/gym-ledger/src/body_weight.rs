// body_weight.rs - Append-only body-weight measurements.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use gym_store::{Record, SaveMode, Table};

use crate::error::LedgerError;

/// One body-weight measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyWeight {
    #[serde(rename = "Fecha")]
    pub date: NaiveDate,

    /// Kilograms.
    #[serde(rename = "Peso (kg)")]
    pub weight: f64,
}

impl Record for BodyWeight {
    const COLUMNS: &'static [&'static str] = &["Fecha", "Peso (kg)"];
}

/// Append-only log of body-weight measurements.
pub struct BodyWeightLog {
    table: Table<BodyWeight>,
}

impl BodyWeightLog {
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            table: Table::new(path),
        }
    }

    /// Append one measurement.
    pub fn record(&self, date: NaiveDate, weight: f64) -> Result<BodyWeight, LedgerError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(LedgerError::invalid(format!(
                "body weight must be a non-negative number, got {}",
                weight
            )));
        }
        let measurement = BodyWeight { date, weight };
        self.table
            .save(std::slice::from_ref(&measurement), SaveMode::Append)?;
        tracing::info!(%date, weight, "recorded body weight");
        Ok(measurement)
    }

    /// Every measurement, in insertion order.
    pub fn all(&self) -> Vec<BodyWeight> {
        self.table.load()
    }
}
