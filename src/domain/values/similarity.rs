use crate::domain::error::DomainError;

/// Cosine of the angle between `a` and `b`: `dot / (|a| * |b|)`.
///
/// Fails with `DimensionMismatch` on unequal lengths and with `ZeroVector`
/// when either magnitude is zero. Each side is divided by its largest
/// absolute component before accumulating, so sums of squares neither
/// overflow for huge components nor underflow for tiny ones. The result is
/// clamped to [-1, 1].
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64, DomainError> {
    if a.len() != b.len() {
        return Err(DomainError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    let scale_a = max_abs(a);
    let scale_b = max_abs(b);
    if scale_a == 0.0 || scale_b == 0.0 {
        return Err(DomainError::ZeroVector);
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let x = x / scale_a;
        let y = y / scale_b;
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let score = dot / (norm_a.sqrt() * norm_b.sqrt());
    if !score.is_finite() {
        return Err(DomainError::NonFinite);
    }
    Ok(score.clamp(-1.0, 1.0))
}

fn max_abs(v: &[f64]) -> f64 {
    v.iter().fold(0.0_f64, |m, x| m.max(x.abs()))
}
