//! Analysis of group preferences: aggregation and conflict detection.

pub mod conflict_detector;
pub mod preference_aggregator;

pub use conflict_detector::{ConflictDetector, DetectionThresholds};
pub use preference_aggregator::{
    ActivityCount, AggregatedPreferences, CrowdDistribution, PreferenceAggregator, SeasonCount,
    DEFAULT_TOP_ACTIVITIES,
};
