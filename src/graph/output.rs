use std::collections::HashMap;

use ndarray::{Array1, Array2, ArrayView2};

use super::spatial::grid::{LatticeGraph, LatticeNode};

/// Edge list form of a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphOutput {
    pub edge_index: Array2<i64>,  // Shape: (2, E)
    pub edge_weight: Array1<f64>, // Shape: (E,)
}

impl GraphOutput {
    fn from_edges(edges: Vec<(i64, i64)>, weights: Vec<f64>) -> Self {
        let edge_index = Array2::from_shape_fn((2, edges.len()), |(side, e)| match side {
            0 => edges[e].0,
            _ => edges[e].1,
        });

        Self {
            edge_index,
            edge_weight: Array1::from(weights),
        }
    }

    /// One edge per nonzero entry of `adj`, in row-major order
    pub fn from_dense(adj: ArrayView2<f64>) -> Self {
        let (edges, weights): (Vec<_>, Vec<_>) = adj
            .indexed_iter()
            .filter(|&(_, &w)| w != 0.0)
            .map(|((i, j), &w)| ((i as i64, j as i64), w))
            .unzip();

        Self::from_edges(edges, weights)
    }

    /// Node table and edge list of a lattice graph.
    ///
    /// Row `i` of the returned `(V, 3)` array holds the coordinates of node
    /// `i`. Each undirected edge appears in both directions, self-loops once.
    pub fn from_lattice(graph: &LatticeGraph) -> (Array2<i64>, Self) {
        let nodes: Vec<LatticeNode> = graph.nodes().collect();
        let index: HashMap<LatticeNode, i64> = nodes
            .iter()
            .enumerate()
            .map(|(i, &node)| (node, i as i64))
            .collect();

        let mut edges = Vec::with_capacity(graph.edge_count() * 2);
        for (a, b, _) in graph.all_edges() {
            let (src, dst) = (index[&a], index[&b]);
            edges.push((src, dst));
            if src != dst {
                edges.push((dst, src));
            }
        }
        let weights = vec![1.0; edges.len()];

        let node_table = Array2::from_shape_fn((nodes.len(), 3), |(i, axis)| {
            let (x, y, z) = nodes[i];
            [x, y, z][axis]
        });

        (node_table, Self::from_edges(edges, weights))
    }

    pub fn num_edges(&self) -> usize {
        self.edge_weight.len()
    }
}
