//! Candidate-to-cell assignment.
//!
//! Button grids are axis-aligned, so the grid is recovered as two independent
//! 1-D clustering problems (x into columns, y into rows) rather than one 2-D
//! problem: a missing well in one row does not disturb the column centers.
//! Cells are then filled greedily in row-major order with the nearest unused
//! candidate. The candidate pool starts at the `expected` largest candidates
//! and grows until a complete, collision-free assignment is found.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::consts::SLOT_COORD_SCALE;
use crate::detection::Candidate;
use crate::error::{Result, WellgridError};

use super::config::{ResolverConfig, RowBandConfig};
use super::kmeans::kmeans_1d;
use super::types::{GridSpec, Slot};

/// A complete assignment of candidates to grid cells.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedGrid {
    /// One slot per cell, sorted by `(row, col)`.
    pub slots: Vec<Slot>,
    /// Number of top-ranked candidates the accepted assignment drew from.
    pub pool_size: usize,
    /// Column centers, left to right.
    pub column_centers: Vec<f64>,
    /// Row centers, top to bottom.
    pub row_centers: Vec<f64>,
}

/// Assign exactly one candidate to each of the `cols x rows` cells.
///
/// Fails with `InsufficientCandidates` when there are fewer candidates than
/// cells, and with `GridNotResolvable` when no pool size up to
/// `expected * pool_growth_factor` yields a complete assignment.
pub fn resolve(candidates: &[Candidate], spec: GridSpec, config: &ResolverConfig) -> Result<ResolvedGrid> {
    let expected = spec.expected();
    if candidates.len() < expected {
        return Err(WellgridError::InsufficientCandidates {
            cols: spec.cols(),
            rows: spec.rows(),
            found: candidates.len(),
            required: expected,
        });
    }

    let ranked = rank_candidates(candidates);
    let max_pool = ranked
        .len()
        .min(expected.saturating_mul(config.pool_growth_factor.max(1)));

    for pool_size in expected..=max_pool {
        match try_pool(&ranked[..pool_size], spec, config) {
            Some((slots, column_centers, row_centers)) => {
                info!(
                    grid = %spec,
                    pool_size,
                    candidates = candidates.len(),
                    "Grid resolved"
                );
                return Ok(ResolvedGrid {
                    slots,
                    pool_size,
                    column_centers,
                    row_centers,
                });
            }
            None => debug!(grid = %spec, pool_size, "Pool rejected"),
        }
    }

    Err(WellgridError::GridNotResolvable {
        cols: spec.cols(),
        rows: spec.rows(),
        candidates: candidates.len(),
        min_pool: expected,
        max_pool,
    })
}

/// Largest radius first, then highest confidence. Stable for equal keys.
pub fn rank_candidates(candidates: &[Candidate]) -> Vec<Candidate> {
    let mut ranked = candidates.to_vec();
    ranked.sort_by(|a, b| {
        b.radius
            .total_cmp(&a.radius)
            .then(b.confidence.total_cmp(&a.confidence))
    });
    ranked
}

type PoolAssignment = (Vec<Slot>, Vec<f64>, Vec<f64>);

fn try_pool(pool: &[Candidate], spec: GridSpec, config: &ResolverConfig) -> Option<PoolAssignment> {
    let xs: Vec<f64> = pool.iter().map(|c| c.x).collect();
    let ys: Vec<f64> = pool.iter().map(|c| c.y).collect();
    let columns = kmeans_1d(&xs, spec.cols(), &config.kmeans)?;
    let rows = kmeans_1d(&ys, spec.rows(), &config.kmeans)?;

    let band = if config.row_band.enabled {
        row_band_half_width(&rows.centers, &config.row_band)
    } else {
        None
    };

    let mut used = vec![false; pool.len()];
    let mut slots = Vec::with_capacity(spec.expected());

    for (row, &yc) in rows.centers.iter().enumerate() {
        for (col, &xc) in columns.centers.iter().enumerate() {
            let (index, candidate) = pool
                .iter()
                .enumerate()
                .filter(|(i, c)| !used[*i] && band.map_or(true, |b| (c.y - yc).abs() < b))
                .min_by(|(_, a), (_, b)| a.distance_sq(xc, yc).total_cmp(&b.distance_sq(xc, yc)))?;

            used[index] = true;
            slots.push(Slot {
                row,
                col,
                x: candidate.x,
                y: candidate.y,
                radius: candidate.radius,
            });
        }
    }

    if !all_distinct(&slots) {
        return None;
    }

    slots.sort_by_key(|s| (s.row, s.col));
    Some((slots, columns.centers, rows.centers))
}

/// Half-width of the row band, or `None` for a single row (no neighbour to
/// leak into).
fn row_band_half_width(row_centers: &[f64], band: &RowBandConfig) -> Option<f64> {
    let spacing = row_centers
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .min_by(|a, b| a.total_cmp(b))?;
    Some(band.min_px.max(spacing * band.spacing_fraction))
}

fn all_distinct(slots: &[Slot]) -> bool {
    let mut seen = HashSet::with_capacity(slots.len());
    slots.iter().all(|s| {
        seen.insert((
            (s.x * SLOT_COORD_SCALE).round() as i64,
            (s.y * SLOT_COORD_SCALE).round() as i64,
        ))
    })
}
