// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core data and rules with ZERO external dependencies.
//!
//! This module contains the pandemic records, the fixed dataset and the pure
//! derivations the browser renders from. It has no dependencies on external
//! crates (except `std`) so every rule can be tested without a UI.
//!
//! # Modules
//!
//! - [`pandemic`]: Record types ([`PandemicRecord`](pandemic::PandemicRecord),
//!   [`RecordId`](pandemic::RecordId), [`Severity`](pandemic::Severity))
//! - [`century`]: Century grouping ([`compute_century`](century::compute_century),
//!   [`CenturyFilter`](century::CenturyFilter))
//! - [`catalog`]: Derived views ([`visible_records`](catalog::visible_records),
//!   [`distinct_centuries`](catalog::distinct_centuries),
//!   [`SeverityCounts`](catalog::SeverityCounts))
//! - [`dataset`]: The chronicle itself ([`PANDEMICS`](dataset::PANDEMICS))

pub mod catalog;
pub mod century;
pub mod dataset;
pub mod pandemic;

pub use catalog::{distinct_centuries, visible_records, SeverityCounts};
pub use century::{compute_century, CenturyFilter};
pub use dataset::PANDEMICS;
pub use pandemic::{severity_label, PandemicRecord, RecordId, Severity};
