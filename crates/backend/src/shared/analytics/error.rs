use thiserror::Error;

/// Errors for computations that are mathematically undefined on the input.
///
/// Statistical insufficiency elsewhere (anomalies, velocity) degrades to
/// empty or zero results instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    #[error("not enough data for prediction: need at least {required} distinct days, got {found}")]
    InsufficientData { required: usize, found: usize },
}
