mod config;
mod engine;
mod frame_builder;
mod snapshot;

pub use config::{ChartConfig, ChartGeometry, Margins, ToolVisibility};
pub use engine::DotPlotEngine;
pub use snapshot::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot, EngineSnapshotJsonContractV1};
