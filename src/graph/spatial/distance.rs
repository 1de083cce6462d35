use std::fmt;
use std::str::FromStr;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Zip};

use crate::error::{GraphError, Result};

/// Distance metrics accepted by [`pdist`], named as in scipy's `pdist`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Euclidean,
    SqEuclidean,
    Cityblock,
    Chebyshev,
    Minkowski { p: f64 },
    Cosine,
    Correlation,
    BrayCurtis,
    Canberra,
    Hamming,
    Jaccard,
}

impl FromStr for Metric {
    type Err = GraphError;

    fn from_str(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "euclidean" => Ok(Self::Euclidean),
            "sqeuclidean" => Ok(Self::SqEuclidean),
            "cityblock" | "manhattan" => Ok(Self::Cityblock),
            "chebyshev" => Ok(Self::Chebyshev),
            "minkowski" => Ok(Self::Minkowski { p: 2.0 }),
            "cosine" => Ok(Self::Cosine),
            "correlation" => Ok(Self::Correlation),
            "braycurtis" => Ok(Self::BrayCurtis),
            "canberra" => Ok(Self::Canberra),
            "hamming" => Ok(Self::Hamming),
            "jaccard" => Ok(Self::Jaccard),
            _ => Err(GraphError::UnsupportedMetric(name.to_string())),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::Euclidean => "euclidean",
            Metric::SqEuclidean => "sqeuclidean",
            Metric::Cityblock => "cityblock",
            Metric::Chebyshev => "chebyshev",
            Metric::Minkowski { .. } => "minkowski",
            Metric::Cosine => "cosine",
            Metric::Correlation => "correlation",
            Metric::BrayCurtis => "braycurtis",
            Metric::Canberra => "canberra",
            Metric::Hamming => "hamming",
            Metric::Jaccard => "jaccard",
        };
        write!(f, "{name}")
    }
}

impl Metric {
    fn validate(&self) -> Result<()> {
        match self {
            Metric::Minkowski { p } if !(*p >= 1.0) => Err(GraphError::InvalidArgument(format!(
                "minkowski p must be >= 1, got {p}"
            ))),
            _ => Ok(()),
        }
    }

    /// Distance between two feature vectors of equal length
    pub fn distance(&self, u: ArrayView1<f64>, v: ArrayView1<f64>) -> f64 {
        let abs_diffs = || u.iter().zip(v.iter()).map(|(a, b)| (a - b).abs());

        match *self {
            Metric::Euclidean => abs_diffs().map(|d| d * d).sum::<f64>().sqrt(),
            Metric::SqEuclidean => abs_diffs().map(|d| d * d).sum(),
            Metric::Cityblock => abs_diffs().sum(),
            Metric::Chebyshev => abs_diffs().fold(0.0, f64::max),
            Metric::Minkowski { p } if p.is_infinite() => abs_diffs().fold(0.0, f64::max),
            Metric::Minkowski { p } => abs_diffs().map(|d| d.powf(p)).sum::<f64>().powf(1.0 / p),
            Metric::Cosine => cosine_distance(u, v),
            Metric::Correlation => {
                let u_centered = &u - u.mean().unwrap_or(0.0);
                let v_centered = &v - v.mean().unwrap_or(0.0);
                cosine_distance(u_centered.view(), v_centered.view())
            }
            Metric::BrayCurtis => {
                let denom: f64 = u.iter().zip(v.iter()).map(|(a, b)| (a + b).abs()).sum();
                abs_diffs().sum::<f64>() / denom
            }
            Metric::Canberra => u
                .iter()
                .zip(v.iter())
                .filter_map(|(a, b)| {
                    let denom = a.abs() + b.abs();
                    (denom != 0.0).then(|| (a - b).abs() / denom)
                })
                .sum(),
            Metric::Hamming => {
                if u.is_empty() {
                    return 0.0;
                }
                let unequal = u.iter().zip(v.iter()).filter(|(a, b)| a != b).count();
                unequal as f64 / u.len() as f64
            }
            Metric::Jaccard => {
                let (unequal, nonzero) =
                    u.iter()
                        .zip(v.iter())
                        .fold((0usize, 0usize), |(unequal, nonzero), (a, b)| {
                            if *a != 0.0 || *b != 0.0 {
                                (unequal + usize::from(a != b), nonzero + 1)
                            } else {
                                (unequal, nonzero)
                            }
                        });
                if nonzero == 0 {
                    0.0
                } else {
                    unequal as f64 / nonzero as f64
                }
            }
        }
    }
}

fn cosine_distance(u: ArrayView1<f64>, v: ArrayView1<f64>) -> f64 {
    let dot = u.dot(&v);
    let norms = u.dot(&u).sqrt() * v.dot(&v).sqrt();
    1.0 - dot / norms
}

/// Condensed pairwise distances between the rows of `z`.
///
/// Pairs are ordered `(0,1), (0,2), ..., (0,n-1), (1,2), ...`, giving
/// `n * (n - 1) / 2` entries.
pub fn pdist(z: ArrayView2<f64>, metric: Metric) -> Result<Array1<f64>> {
    metric.validate()?;

    let n = z.nrows();
    let mut condensed = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            condensed.push(metric.distance(z.row(i), z.row(j)));
        }
    }

    Ok(Array1::from(condensed))
}

/// Expand a condensed distance vector into the full `n x n` matrix.
pub fn squareform(condensed: ArrayView1<f64>, n: usize) -> Result<Array2<f64>> {
    let expected = n * n.saturating_sub(1) / 2;
    if condensed.len() != expected {
        return Err(GraphError::DimensionMismatch {
            expected: format!("{expected} condensed distances for {n} points"),
            actual: condensed.len().to_string(),
        });
    }

    let mut square = Array2::zeros((n, n));
    let mut idx = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            square[[i, j]] = condensed[idx];
            square[[j, i]] = condensed[idx];
            idx += 1;
        }
    }

    Ok(square)
}

/// Full symmetric distance matrix with zero diagonal
pub fn cdist_square(z: ArrayView2<f64>, metric: Metric) -> Result<Array2<f64>> {
    let condensed = pdist(z, metric)?;
    squareform(condensed.view(), z.nrows())
}

pub(crate) fn is_symmetric(m: &Array2<f64>) -> bool {
    if !m.is_square() {
        return false;
    }
    // NaN entries count as equal to their mirrored NaN
    Zip::from(m)
        .and(m.t())
        .all(|a, b| a == b || (a.is_nan() && b.is_nan()))
}
