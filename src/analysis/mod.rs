/// Analysis layer: pure computations over the loaded dataset.
///
/// * `aggregate` – per-goal means and the goal correlation matrix over a
///   filtered view
/// * `predict`   – least-squares trend fit and extrapolation per country

pub mod aggregate;
pub mod predict;
