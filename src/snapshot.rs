//! Report history
//!
//! Snapshots pair an input with a trimmed copy of its report. The store keeps
//! the most recent ones (newest first) and persists them as a JSON file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::Result;
use crate::household::RaioXInput;
use crate::report::RaioXSummary;

/// Default number of snapshots kept
pub const MAX_SNAPSHOTS: usize = 50;

/// Summary fields worth keeping in history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotSummary {
    pub score: u8,
    pub monthly_free_cash_flow: f64,
    pub savings_rate: f64,
    pub debt_to_income_ratio: f64,
    pub emergency_fund_months: f64,
    pub fire_progress: f64,
    pub projected_net_worth: f64,
    pub projected_net_worth_after_tax: f64,
    pub projected_net_worth_real: f64,
    pub years_to_fire: Option<f64>,
}

impl From<&RaioXSummary> for SnapshotSummary {
    fn from(summary: &RaioXSummary) -> Self {
        Self {
            score: summary.score,
            monthly_free_cash_flow: summary.cash_flow.monthly_free_cash_flow,
            savings_rate: summary.cash_flow.savings_rate,
            debt_to_income_ratio: summary.cash_flow.debt_to_income_ratio,
            emergency_fund_months: summary.cash_flow.emergency_fund_months,
            fire_progress: summary.fire.fire_progress,
            projected_net_worth: summary.projections.nominal,
            projected_net_worth_after_tax: summary.projections.after_tax,
            projected_net_worth_real: summary.projections.real,
            years_to_fire: summary.years_to_fire,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaioXSnapshot {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub input: RaioXInput,
    pub summary: SnapshotSummary,
}

/// Capped, newest-first snapshot history
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    snapshots: Vec<RaioXSnapshot>,
    capacity: usize,
    /// Sequence number for the next id; never reused
    next_seq: u64,
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::with_capacity(MAX_SNAPSHOTS)
    }
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            snapshots: Vec::new(),
            capacity: capacity.max(1),
            next_seq: 0,
        }
    }

    /// Load from a JSON file; a missing file is an empty store
    pub fn load(path: &Path) -> Result<Self> {
        let mut store = Self::new();
        if !path.exists() {
            return Ok(store);
        }
        let file = File::open(path)?;
        store.snapshots = serde_json::from_reader(BufReader::new(file))?;
        store.snapshots.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        store.next_seq = store
            .snapshots
            .iter()
            .filter_map(|s| id_sequence(&s.id))
            .max()
            .map_or(0, |seq| seq + 1);
        store.trim();
        Ok(store)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.snapshots)?;
        Ok(())
    }

    /// Record a report taken now
    pub fn record(&mut self, input: &RaioXInput, summary: &RaioXSummary) -> &RaioXSnapshot {
        self.record_at(Utc::now(), input, summary)
    }

    /// Record a report with an explicit timestamp
    pub fn record_at(
        &mut self,
        created_at: DateTime<Utc>,
        input: &RaioXInput,
        summary: &RaioXSummary,
    ) -> &RaioXSnapshot {
        let id = format!("rx-{}-{}", created_at.timestamp_millis(), self.next_seq);
        self.next_seq += 1;
        self.snapshots.insert(
            0,
            RaioXSnapshot {
                id,
                created_at,
                input: input.clone(),
                summary: SnapshotSummary::from(summary),
            },
        );
        self.trim();
        &self.snapshots[0]
    }

    /// Newest first
    pub fn snapshots(&self) -> &[RaioXSnapshot] {
        &self.snapshots
    }

    pub fn latest(&self) -> Option<&RaioXSnapshot> {
        self.snapshots.first()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    fn trim(&mut self) {
        if self.snapshots.len() > self.capacity {
            log::warn!(
                "Snapshot history over capacity, dropping {} oldest",
                self.snapshots.len() - self.capacity
            );
            self.snapshots.truncate(self.capacity);
        }
    }
}

/// Trailing sequence number of an `rx-{millis}-{seq}` id
fn id_sequence(id: &str) -> Option<u64> {
    id.rsplit('-').next()?.parse().ok()
}
