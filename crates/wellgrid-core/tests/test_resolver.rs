mod common;

use wellgrid_core::detection::Candidate;
use wellgrid_core::error::WellgridError;
use wellgrid_core::grid::kmeans::kmeans_1d;
use wellgrid_core::grid::{resolve, GridSpec, KMeansConfig, ResolverConfig};

use common::lattice;

fn spec(cols: usize, rows: usize) -> GridSpec {
    GridSpec::new(cols, rows).unwrap()
}

// ---------------------------------------------------------------------------
// Perfect grid
// ---------------------------------------------------------------------------

#[test]
fn test_perfect_3x2_grid_row_major() {
    let candidates = lattice(3, 2, (100.0, 100.0), (200.0, 200.0), 30.0);
    let grid = resolve(&candidates, spec(3, 2), &ResolverConfig::default()).unwrap();

    let expected = [
        (0, 0, 100.0, 100.0),
        (0, 1, 300.0, 100.0),
        (0, 2, 500.0, 100.0),
        (1, 0, 100.0, 300.0),
        (1, 1, 300.0, 300.0),
        (1, 2, 500.0, 300.0),
    ];
    assert_eq!(grid.slots.len(), 6);
    for (slot, &(row, col, x, y)) in grid.slots.iter().zip(&expected) {
        assert_eq!((slot.row, slot.col), (row, col));
        assert_eq!((slot.x, slot.y), (x, y));
        assert_eq!(slot.radius, 30.0);
    }
    assert_eq!(grid.pool_size, 6);
    assert_eq!(grid.column_centers, vec![100.0, 300.0, 500.0]);
    assert_eq!(grid.row_centers, vec![100.0, 300.0]);
}

#[test]
fn test_input_order_does_not_matter() {
    let mut candidates = lattice(3, 2, (100.0, 100.0), (200.0, 200.0), 30.0);
    candidates.reverse();
    let grid = resolve(&candidates, spec(3, 2), &ResolverConfig::default()).unwrap();
    assert_eq!((grid.slots[0].x, grid.slots[0].y), (100.0, 100.0));
    assert_eq!((grid.slots[5].x, grid.slots[5].y), (500.0, 300.0));
}

#[test]
fn test_single_cell_grid() {
    let candidates = vec![Candidate::new(42.0, 17.0, 12.0)];
    let grid = resolve(&candidates, spec(1, 1), &ResolverConfig::default()).unwrap();
    assert_eq!(grid.slots.len(), 1);
    assert_eq!((grid.slots[0].x, grid.slots[0].y), (42.0, 17.0));
}

// ---------------------------------------------------------------------------
// Completeness and ordering
// ---------------------------------------------------------------------------

#[test]
fn test_completeness_and_ordering_on_jittered_grid() {
    let mut candidates = lattice(5, 3, (80.0, 60.0), (110.0, 95.0), 26.0);
    for (i, c) in candidates.iter_mut().enumerate() {
        c.x += ((i * 7) % 5) as f64 - 2.0;
        c.y += ((i * 3) % 5) as f64 - 2.0;
        c.radius += (i % 3) as f64;
    }

    let grid = resolve(&candidates, spec(5, 3), &ResolverConfig::default()).unwrap();
    assert_eq!(grid.slots.len(), 15);

    let cells: Vec<(usize, usize)> = grid.slots.iter().map(|s| (s.row, s.col)).collect();
    let expected: Vec<(usize, usize)> = spec(5, 3).cells().collect();
    assert_eq!(cells, expected);

    for pair in grid.slots.windows(2) {
        if pair[0].row == pair[1].row {
            assert!(pair[0].x < pair[1].x);
        } else {
            assert!(pair[0].y < pair[1].y);
        }
    }
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn test_resolution_is_deterministic() {
    let mut candidates = lattice(4, 2, (90.0, 120.0), (140.0, 160.0), 28.0);
    candidates.push(Candidate::new(230.0, 200.0, 18.0));
    candidates.push(Candidate::new(410.0, 60.0, 15.0));
    candidates.push(Candidate::new(95.0, 285.0, 12.0));

    let config = ResolverConfig::default();
    let first = resolve(&candidates, spec(4, 2), &config).unwrap();
    for _ in 0..5 {
        assert_eq!(resolve(&candidates, spec(4, 2), &config).unwrap(), first);
    }
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn test_insufficient_candidates() {
    let candidates = lattice(5, 1, (100.0, 100.0), (200.0, 0.0), 30.0);
    let err = resolve(&candidates, spec(3, 2), &ResolverConfig::default()).unwrap_err();
    match err {
        WellgridError::InsufficientCandidates { found, required, .. } => {
            assert_eq!(found, 5);
            assert_eq!(required, 6);
        }
        other => panic!("expected InsufficientCandidates, got {other:?}"),
    }
}

#[test]
fn test_colliding_candidates_are_not_resolvable() {
    let candidates = vec![Candidate::new(100.0, 100.0, 30.0); 3];
    let err = resolve(&candidates, spec(1, 2), &ResolverConfig::default()).unwrap_err();
    match err {
        WellgridError::GridNotResolvable {
            candidates,
            min_pool,
            max_pool,
            ..
        } => {
            assert_eq!(candidates, 3);
            assert_eq!(min_pool, 2);
            assert_eq!(max_pool, 3);
        }
        other => panic!("expected GridNotResolvable, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Pool growth
// ---------------------------------------------------------------------------

#[test]
fn test_pool_grows_past_colliding_candidates() {
    let candidates = vec![
        Candidate::new(100.0, 100.0, 40.0),
        Candidate::new(100.0, 100.0, 39.0),
        Candidate::new(300.0, 100.0, 30.0),
    ];
    let grid = resolve(&candidates, spec(2, 1), &ResolverConfig::default()).unwrap();
    assert_eq!(grid.pool_size, 3);
    assert_eq!((grid.slots[0].x, grid.slots[0].radius), (100.0, 40.0));
    assert_eq!(grid.slots[1].x, 300.0);
}

#[test]
fn test_row_band_rejects_stray_and_pool_grows() {
    let candidates = vec![
        Candidate::new(100.0, 100.0, 30.0),
        Candidate::new(300.0, 100.0, 30.0),
        Candidate::new(100.0, 300.0, 30.0),
        // Between the rows, larger than the last real well.
        Candidate::new(300.0, 180.0, 29.0),
        Candidate::new(300.0, 300.0, 25.0),
    ];
    let grid = resolve(&candidates, spec(2, 2), &ResolverConfig::default()).unwrap();
    assert_eq!(grid.pool_size, 5);

    let coords: Vec<(f64, f64)> = grid.slots.iter().map(|s| (s.x, s.y)).collect();
    assert_eq!(
        coords,
        vec![(100.0, 100.0), (300.0, 100.0), (100.0, 300.0), (300.0, 300.0)]
    );
}

#[test]
fn test_spurious_small_candidates_are_ignored() {
    let mut candidates = lattice(3, 2, (100.0, 100.0), (200.0, 200.0), 30.0);
    candidates.push(Candidate::new(200.0, 200.0, 8.0));
    candidates.push(Candidate::new(20.0, 380.0, 6.0));

    let grid = resolve(&candidates, spec(3, 2), &ResolverConfig::default()).unwrap();
    assert_eq!(grid.pool_size, 6);
    assert!(grid.slots.iter().all(|s| s.radius == 30.0));
}

// ---------------------------------------------------------------------------
// kmeans_1d
// ---------------------------------------------------------------------------

#[test]
fn test_kmeans_separated_clusters() {
    let values = [10.0, 11.0, 12.0, 200.0, 201.0, 99.0, 101.0, 100.0, 202.0];
    let clusters = kmeans_1d(&values, 3, &KMeansConfig::default()).unwrap();
    assert_eq!(clusters.centers, vec![11.0, 100.0, 201.0]);
    assert!((clusters.inertia - 6.0).abs() < 1e-9);
}

#[test]
fn test_kmeans_rejects_bad_k() {
    let values = [1.0, 2.0];
    assert!(kmeans_1d(&values, 0, &KMeansConfig::default()).is_none());
    assert!(kmeans_1d(&values, 3, &KMeansConfig::default()).is_none());
}

#[test]
fn test_kmeans_single_cluster_is_mean() {
    let values = [2.0, 4.0, 9.0];
    let clusters = kmeans_1d(&values, 1, &KMeansConfig::default()).unwrap();
    assert_eq!(clusters.centers, vec![5.0]);
}
