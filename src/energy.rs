// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Static energy usage samples and summaries.

use serde::{Deserialize, Serialize};

/// One point of an energy usage series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageSample {
    /// Time-of-day or day-of-week label.
    pub label: String,
    /// Energy used, in kWh.
    pub kwh: f64,
}

impl UsageSample {
    /// Creates a sample.
    #[must_use]
    pub fn new(label: impl Into<String>, kwh: f64) -> Self {
        Self {
            label: label.into(),
            kwh,
        }
    }
}

/// Headline figures shown above the usage charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergySummary {
    /// Current draw in kW.
    pub current_kw: f64,
    /// Change versus yesterday, in percent (negative is a reduction).
    pub change_from_yesterday_pct: i32,
    /// Cost so far this month.
    pub month_cost: u32,
    /// Amount saved this month.
    pub month_saved: u32,
    /// Efficiency score in percent.
    pub efficiency_pct: u8,
    /// Change in efficiency, in percent points.
    pub efficiency_change_pct: i32,
}

/// Sum of all samples, in kWh.
#[must_use]
pub fn total(samples: &[UsageSample]) -> f64 {
    samples.iter().map(|s| s.kwh).sum()
}

/// The first sample with the highest usage.
#[must_use]
pub fn peak(samples: &[UsageSample]) -> Option<&UsageSample> {
    samples
        .iter()
        .fold(None, |best: Option<&UsageSample>, s| match best {
            Some(b) if b.kwh >= s.kwh => Some(b),
            _ => Some(s),
        })
}

/// Mean usage, or 0.0 for an empty series.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average(samples: &[UsageSample]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    total(samples) / samples.len() as f64
}
