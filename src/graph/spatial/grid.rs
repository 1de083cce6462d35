use itertools::iproduct;
use ndarray::Array2;
use petgraph::graphmap::UnGraphMap;
use tracing::debug;

use crate::error::{GraphError, Result};

pub const DEFAULT_WRAP_RADIUS: i64 = 1;
pub const DEFAULT_WRAP_DEPTH: i64 = 2;

/// Lattice coordinate `(x, y, z)` of a node in a wrapped 3D grid.
pub type LatticeNode = (i64, i64, i64);

/// Unweighted undirected graph over lattice coordinates.
pub type LatticeGraph = UnGraphMap<LatticeNode, ()>;

/// Coordinates `(x, y)` of every cell of an `n x n` grid.
///
/// Cells are listed y-major then x: `(0, 0), (1, 0), ..., (n - 1, 0), (0, 1), ...`.
pub fn grid_coordinates(n: i64) -> Result<Vec<(i64, i64)>> {
    if n < 0 {
        return Err(GraphError::InvalidArgument(
            "grid size n must be non-negative".to_string(),
        ));
    }

    Ok(iproduct!(0..n, 0..n).map(|(y, x)| (x, y)).collect())
}

/// Dense adjacency of an `n x n` grid whose borders wrap around, linking every
/// cell to all cells within `k` steps along both axes.
///
/// Cell `(x, y)` has index `x * n + y`. Every link has weight 1. Runs in
/// `O(n^2 (2k + 1)^2)`, not optimized.
pub fn kwraps(n: i64, k: i64) -> Result<Array2<f64>> {
    // Validate inputs
    validate_positive("n", n)?;
    validate_radius(k)?;

    debug!(n, k, "building wrapped 2D grid adjacency");

    let size = (n * n) as usize;
    let mut adj = Array2::<f64>::zeros((size, size));
    let flat = |x: i64, y: i64| (x * n + y) as usize;

    for (x, y) in iproduct!(0..n, 0..n) {
        let src = flat(x, y);
        for (dx, dy) in iproduct!(-k..=k, -k..=k) {
            if dx == 0 && dy == 0 {
                continue;
            }
            let dst = flat((x + dx).rem_euclid(n), (y + dy).rem_euclid(n));
            adj[[src, dst]] = 1.0;
            adj[[dst, src]] = 1.0;
        }
    }

    Ok(adj)
}

/// Graph of an `n x n x d` lattice whose borders wrap around on all three
/// axes, linking every node to all nodes within `k` steps along each axis.
///
/// Offsets that wrap back onto the node itself leave a self-loop. Runs in
/// `O(n^2 d (2k + 1)^3)`, not optimized.
pub fn kwraps3d(n: i64, k: i64, d: i64) -> Result<LatticeGraph> {
    validate_positive("n", n)?;
    validate_positive("d", d)?;
    validate_radius(k)?;

    debug!(n, k, d, "building wrapped 3D lattice graph");

    let mut graph = LatticeGraph::new();
    for (x, y, z) in iproduct!(0..n, 0..n, 0..d) {
        for (dx, dy, dz) in iproduct!(-k..=k, -k..=k, -k..=k) {
            if dx == 0 && dy == 0 && dz == 0 {
                continue;
            }
            let neighbor = (
                (x + dx).rem_euclid(n),
                (y + dy).rem_euclid(n),
                (z + dz).rem_euclid(d),
            );
            graph.add_edge((x, y, z), neighbor, ());
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "wrapped 3D lattice graph built"
    );
    Ok(graph)
}

fn validate_positive(name: &str, value: i64) -> Result<()> {
    if value <= 0 {
        return Err(GraphError::InvalidArgument(format!(
            "{name} must be positive, got {value}"
        )));
    }
    Ok(())
}

fn validate_radius(k: i64) -> Result<()> {
    if k < 0 {
        return Err(GraphError::InvalidArgument(format!(
            "k must be non-negative, got {k}"
        )));
    }
    Ok(())
}
