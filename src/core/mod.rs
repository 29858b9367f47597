pub mod binning;
pub mod counting;
pub mod dataset;
pub mod generate;
pub mod presets;
pub mod primitives;
pub mod scale;
pub mod scatter;
pub mod stats;
pub mod ticks;
pub mod types;

pub use binning::{IntervalBin, bin_dataset, compute_interval_bins, value_extent};
pub use counting::{
    GapCount, ThresholdSplit, count_in_pixel_range, count_in_range, gap_counts,
    split_at_threshold,
};
pub use dataset::{Dataset, SortOrder};
pub use generate::{
    BatterySpec, UniformSpec, generate_battery_data, generate_cholesterol_data,
    generate_speed_trap_data,
};
pub use scale::LinearScale;
pub use scatter::{ScatterPoint, compute_scatter, max_level, stack_points};
pub use stats::{Grouping, Quartiles, combined_extent, domain_guides, grouping_separators, quartiles};
pub use types::{Observation, observation_values};
