use rand::prelude::*;

use super::config::KMeansConfig;

/// Result of clustering scalar values.
#[derive(Clone, Debug, PartialEq)]
pub struct Clustering1d {
    /// Cluster centers, ascending.
    pub centers: Vec<f64>,
    /// Sum of squared distances from each value to its center.
    pub inertia: f64,
}

/// Cluster `values` into `k` groups with k-means++ seeding and restarts.
///
/// The RNG is seeded from `config.seed` on every call, so identical input
/// yields identical centers. Among restarts the lowest inertia wins; on a tie
/// the earlier restart is kept. Returns `None` when `k == 0` or there are
/// fewer values than clusters.
pub fn kmeans_1d(values: &[f64], k: usize, config: &KMeansConfig) -> Option<Clustering1d> {
    if k == 0 || values.len() < k {
        return None;
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut best: Option<Clustering1d> = None;

    for _ in 0..config.attempts.max(1) {
        let mut centers = seed_centers(values, k, &mut rng);
        let mut labels = vec![0usize; values.len()];

        for _ in 0..config.max_iterations.max(1) {
            assign(values, &centers, &mut labels);
            let shift = update_centers(values, &labels, &mut centers);
            if shift <= config.epsilon {
                break;
            }
        }
        assign(values, &centers, &mut labels);

        let inertia: f64 = values
            .iter()
            .zip(&labels)
            .map(|(&v, &l)| (v - centers[l]).powi(2))
            .sum();

        if best.as_ref().map_or(true, |b| inertia < b.inertia) {
            best = Some(Clustering1d { centers, inertia });
        }
    }

    best.map(|mut b| {
        b.centers.sort_by(|a, c| a.total_cmp(c));
        b
    })
}

/// k-means++: each new center is drawn with probability proportional to the
/// squared distance to the nearest existing center.
fn seed_centers(values: &[f64], k: usize, rng: &mut StdRng) -> Vec<f64> {
    let n = values.len();
    let mut centers = Vec::with_capacity(k);
    centers.push(values[rng.gen_range(0..n)]);

    let mut nearest_sq: Vec<f64> = values.iter().map(|&v| (v - centers[0]).powi(2)).collect();

    while centers.len() < k {
        let total: f64 = nearest_sq.iter().sum();
        let next = if total <= 0.0 {
            values[rng.gen_range(0..n)]
        } else {
            let mut target = rng.gen::<f64>() * total;
            let mut chosen = n - 1;
            for (i, &d) in nearest_sq.iter().enumerate() {
                if target < d {
                    chosen = i;
                    break;
                }
                target -= d;
            }
            values[chosen]
        };
        centers.push(next);
        for (d, &v) in nearest_sq.iter_mut().zip(values) {
            *d = d.min((v - next).powi(2));
        }
    }

    centers
}

/// Label each value with its nearest center (lowest index on ties).
fn assign(values: &[f64], centers: &[f64], labels: &mut [usize]) {
    for (label, &v) in labels.iter_mut().zip(values) {
        let mut best = 0usize;
        let mut best_d = f64::INFINITY;
        for (i, &c) in centers.iter().enumerate() {
            let d = (v - c).abs();
            if d < best_d {
                best_d = d;
                best = i;
            }
        }
        *label = best;
    }
}

/// Move each center to the mean of its members; empty clusters stay put.
/// Returns the largest center shift.
fn update_centers(values: &[f64], labels: &[usize], centers: &mut [f64]) -> f64 {
    let k = centers.len();
    let mut sums = vec![0.0f64; k];
    let mut counts = vec![0usize; k];
    for (&v, &l) in values.iter().zip(labels) {
        sums[l] += v;
        counts[l] += 1;
    }

    let mut max_shift = 0.0f64;
    for i in 0..k {
        if counts[i] == 0 {
            continue;
        }
        let updated = sums[i] / counts[i] as f64;
        max_shift = max_shift.max((updated - centers[i]).abs());
        centers[i] = updated;
    }
    max_shift
}
