//! # gym-store
//!
//! Persistence primitives shared by the gym tracker crates.
//!
//! Every persisted collection (workouts, goals, body weight) is a delimited
//! table with a header row, one logical table per file. A [`Table`] is typed
//! by the [`Record`] it stores: the record's column list fixes the header and
//! column order, and serde maps fields to columns by header name on load.
//!
//! ## Key components
//!
//! - [`Table`]: fail-soft `load`, `save` with [`SaveMode::Overwrite`] or
//!   [`SaveMode::Append`] (header written only when the table is new)
//! - [`Record`]: trait binding a serde type to its column schema
//! - [`DateInput`]: `YYYY-MM-DD` parsing with an observable "defaulted to
//!   today" outcome instead of a silent substitution

pub mod date;
pub mod error;
pub mod table;

pub use date::{parse_date_input, today, DateInput, DateOrigin, DATE_FORMAT};
pub use error::StoreError;
pub use table::{Record, SaveMode, Table};
