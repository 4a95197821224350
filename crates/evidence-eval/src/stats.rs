use serde::{Deserialize, Serialize};

/// Descriptive statistics of a numeric column.
///
/// Fields other than `count` are `None` when undefined: every statistic on an
/// empty column, and `std` on a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: u64,
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1 denominator).
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub p25: Option<f64>,
    pub p50: Option<f64>,
    pub p75: Option<f64>,
    pub max: Option<f64>,
}

impl Summary {
    /// Label/value rows in display order.
    pub fn rows(&self) -> [(&'static str, Option<f64>); 8] {
        [
            ("count", Some(self.count as f64)),
            ("mean", self.mean),
            ("std", self.std),
            ("min", self.min),
            ("25%", self.p25),
            ("50%", self.p50),
            ("75%", self.p75),
            ("max", self.max),
        ]
    }
}

pub fn describe(values: &[f64]) -> Summary {
    let mut sorted = values
        .iter()
        .copied()
        .filter(|value| value.is_finite())
        .collect::<Vec<_>>();
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    if count == 0 {
        return Summary {
            count: 0,
            mean: None,
            std: None,
            min: None,
            p25: None,
            p50: None,
            p75: None,
            max: None,
        };
    }

    let mean = sorted.iter().sum::<f64>() / count as f64;
    let std = (count > 1).then(|| {
        let squares = sorted.iter().map(|value| (value - mean).powi(2)).sum::<f64>();
        (squares / (count - 1) as f64).sqrt()
    });

    Summary {
        count: count as u64,
        mean: Some(mean),
        std,
        min: sorted.first().copied(),
        p25: Some(quantile(&sorted, 0.25)),
        p50: Some(quantile(&sorted, 0.5)),
        p75: Some(quantile(&sorted, 0.75)),
        max: sorted.last().copied(),
    }
}

/// Linear interpolation between closest ranks; `sorted` must be non-empty.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < 1e-9)
    }

    #[test]
    fn describes_small_sample() {
        let summary = describe(&[4.0, 1.0, 3.0, 2.0]);
        assert_eq!(summary.count, 4);
        assert!(close(summary.mean, 2.5));
        assert!(close(summary.std, 1.2909944487358056));
        assert!(close(summary.min, 1.0));
        assert!(close(summary.p25, 1.75));
        assert!(close(summary.p50, 2.5));
        assert!(close(summary.p75, 3.25));
        assert!(close(summary.max, 4.0));
    }

    #[test]
    fn single_value_has_no_std() {
        let summary = describe(&[0.7]);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.std, None);
        assert!(close(summary.p75, 0.7));
    }

    #[test]
    fn empty_input_is_all_none() {
        let summary = describe(&[]);
        assert_eq!(summary.count, 0);
        assert!(summary.rows().iter().skip(1).all(|(_, value)| value.is_none()));
    }

    #[test]
    fn ignores_non_finite_values() {
        let summary = describe(&[1.0, f64::NAN, 3.0]);
        assert_eq!(summary.count, 2);
        assert!(close(summary.mean, 2.0));
    }
}
