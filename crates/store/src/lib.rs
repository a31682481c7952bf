//! In-memory log of accepted calculations.
//!
//! The store lives for the life of the embedding process; nothing is written
//! to disk and nothing is ever updated or deleted. Identifiers start at 1 and
//! are never reused.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use launcher_contraction::{AngleSetting, CalculationResult, TargetType};
use serde::{Deserialize, Serialize};

/// Fields of a calculation as submitted for saving. The caller supplies the
/// timestamp; the store never reads the clock. Wire names follow the original
/// camelCase contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCalculation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle_setting: Option<AngleSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<TargetType>,
    /// Straight-line distance to the target (m).
    pub target_distance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_y: Option<f64>,
    /// Recommended spring contraction (cm).
    pub contraction_distance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_angle: Option<f64>,
    /// Epoch milliseconds at the moment the result was accepted.
    pub timestamp: f64,
}

impl NewCalculation {
    /// Build a record from a calculator result and a caller-supplied timestamp.
    pub fn from_result(
        result: &CalculationResult,
        launch_angle: Option<f64>,
        timestamp_ms: f64,
    ) -> Self {
        Self {
            angle_setting: result.angle_setting,
            target_type: result.target_type,
            target_distance: result.target_distance_m,
            target_x: result.target_x_cm,
            target_y: result.target_y_cm,
            contraction_distance: result.contraction_cm,
            launch_angle,
            timestamp: timestamp_ms,
        }
    }
}

/// A stored calculation with its assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub id: u64,
    #[serde(flatten)]
    pub record: NewCalculation,
}

#[derive(Debug)]
struct Inner {
    records: BTreeMap<u64, Calculation>,
    next_id: u64,
}

/// Append-only in-memory store. Identifier assignment and insertion happen
/// under one mutex scope so identifiers stay unique even if the embedding
/// runtime handles requests in parallel.
#[derive(Debug)]
pub struct CalculationStore {
    inner: Mutex<Inner>,
}

impl Default for CalculationStore {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Inner {
                records: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl CalculationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record verbatim and return it with its assigned identifier.
    /// Never fails: there is no capacity bound and no uniqueness constraint
    /// beyond the identifier itself.
    pub fn save(&self, record: NewCalculation) -> Calculation {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        let calculation = Calculation { id, record };
        inner.records.insert(id, calculation.clone());
        calculation
    }

    /// All stored records, most recent timestamp first. Ties keep insertion
    /// order: BTreeMap iteration is id order and the sort is stable.
    pub fn list(&self) -> Vec<Calculation> {
        let inner = self.lock();
        let mut records: Vec<Calculation> = inner.records.values().cloned().collect();
        records.sort_by(|a, b| b.record.timestamp.total_cmp(&a.record.timestamp));
        records
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock means another caller panicked mid-operation; the map
        // itself stays coherent because save never partially inserts.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
