// Domain bounds for the ideal rocket relations
pub const GAMMA_MIN: f64 = 1.0; // exclusive
pub const GAS_CONSTANT_MIN: f64 = 0.0; // J/(kg⋅K), exclusive
pub const STAGNATION_TEMPERATURE_MIN: f64 = 0.0; // K, exclusive

// Pressure ratios p/p0 live in [PRESSURE_RATIO_MIN, PRESSURE_RATIO_MAX)
pub const PRESSURE_RATIO_MIN: f64 = 0.0;
pub const PRESSURE_RATIO_MAX: f64 = 1.0;

pub const AREA_RATIO_MIN: f64 = 1.0; // inclusive
