pub mod baseline;
pub mod engine;
pub mod projection;

pub use baseline::{BaselineState, YearTemperature};
pub use engine::{
    EfficiencyEntry, ImpactResult, PolicyEngine, PolicyLine, TreemapSlice,
    BANKRUPTCY_THRESHOLD_BILLIONS,
};
pub use projection::TrendPoint;
