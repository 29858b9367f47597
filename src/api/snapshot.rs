use serde::{Deserialize, Serialize};

use crate::core::{
    GapCount, Grouping, IntervalBin, Observation, Quartiles, ScatterPoint, SortOrder,
    ThresholdSplit,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::ThresholdLine;

use super::ChartConfig;

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub config: ChartConfig,
    pub inner_width: f64,
    pub chart_height: f64,
    pub order: SortOrder,
    pub observations: Vec<Observation>,
    pub scatter: Vec<ScatterPoint>,
    pub interval_width: f64,
    pub interval_bins: Vec<IntervalBin>,
    pub ticks: Vec<f64>,
    pub threshold_position: f64,
    pub threshold_value: f64,
    pub threshold_split: ThresholdSplit,
    pub range_low_px: f64,
    pub range_high_px: f64,
    pub range_values: (f64, f64),
    pub range_count: usize,
    pub threshold_lines: Vec<ThresholdLine>,
    pub gap_counts: Vec<GapCount>,
    pub grouping: Grouping,
    pub quartiles: Quartiles,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl EngineSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts both a bare snapshot and a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<EngineSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: EngineSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != ENGINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
