//! Length and numeric bound predicates

/// Value fits within a maximum character count
pub fn within_max_length(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

/// Value meets a minimum character count
pub fn within_min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Numeric value meets a lower bound
pub fn at_least(value: f64, min: f64) -> bool {
    value >= min
}

/// Numeric value fits under an upper bound
pub fn at_most(value: f64, max: f64) -> bool {
    value <= max
}
