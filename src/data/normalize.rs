/// Scales every feature column by its largest absolute value so each feature
/// ends up in [-1, 1]. Columns that are all zero are left as they are.
pub fn normalize_max_abs(inputs: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n_features = inputs.iter().map(Vec::len).max().unwrap_or(0);
    let mut max_abs = vec![0.0_f64; n_features];
    for row in inputs {
        for (m, v) in max_abs.iter_mut().zip(row) {
            *m = m.max(v.abs());
        }
    }

    inputs
        .iter()
        .map(|row| {
            row.iter()
                .zip(&max_abs)
                .map(|(&v, &m)| if m == 0.0 { v } else { v / m })
                .collect()
        })
        .collect()
}
