//! Diverging colour palette for temperature variance.

/// The 9-class RdYlBu scheme in its published order (red first).
pub const RD_YL_BU_9: [&str; 9] = [
    "#d73027", "#f46d43", "#fdae61", "#fee090", "#ffffbf", "#e0f3f8", "#abd9e9", "#74add1",
    "#4575b4",
];

/// RdYlBu ordered cold to hot, the range of the variance colour scale.
pub fn cold_to_hot() -> Vec<&'static str> {
    RD_YL_BU_9.iter().rev().copied().collect()
}
