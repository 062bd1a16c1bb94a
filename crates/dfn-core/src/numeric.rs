use crate::DfnError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, DfnError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(DfnError::NonFinite { what, value: v })
    }
}

/// Indices of entries that are not finite and strictly positive.
pub fn non_positive_indices(values: &[Real]) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| !(v.is_finite() && **v > 0.0))
        .map(|(i, _)| i)
        .collect()
}

/// Relative squared error `sum((a-b)^2) / sum(b^2)`; zero when both are empty.
pub fn relative_sq_error(a: &[Real], b: &[Real]) -> Real {
    let num: Real = a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum();
    let den: Real = b.iter().map(|y| y * y).sum();
    if den == 0.0 { num } else { num / den }
}
