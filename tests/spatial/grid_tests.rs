mod grid_tests {
    use std::collections::HashSet;

    use gcnn_graph_rs::graph::spatial::{
        DEFAULT_WRAP_DEPTH, DEFAULT_WRAP_RADIUS, grid_coordinates, kwraps, kwraps3d,
    };
    use proptest::prelude::*;

    #[test]
    fn test_kwraps_3x3_is_complete() {
        let adj = kwraps(3, 1).unwrap();
        assert_eq!(adj.dim(), (9, 9));
        for ((i, j), &w) in adj.indexed_iter() {
            if i == j {
                assert_eq!(w, 0.0, "diagonal ({i}, {j}) should be empty");
            } else {
                assert_eq!(w, 1.0, "cells {i} and {j} should be linked");
            }
        }
    }

    #[test]
    fn test_kwraps_is_symmetric_for_larger_radius() {
        let adj = kwraps(5, 2).unwrap();
        assert_eq!(adj, adj.t());
        // radius 2 on a 5x5 torus reaches every other cell
        for row in adj.rows() {
            assert_eq!(row.sum(), 24.0);
        }
    }

    #[test]
    fn test_kwraps_uses_row_major_index() {
        let n = 5;
        let adj = kwraps(n, 1).unwrap();
        let idx = |x: i64, y: i64| (x * n + y) as usize;

        // (2, 2) links to (3, 2) and (2, 3) but not to (4, 2)
        assert_eq!(adj[[idx(2, 2), idx(3, 2)]], 1.0);
        assert_eq!(adj[[idx(2, 2), idx(2, 3)]], 1.0);
        assert_eq!(adj[[idx(2, 2), idx(4, 2)]], 0.0);
        // (0, 2) links across the border to (4, 2)
        assert_eq!(adj[[idx(0, 2), idx(4, 2)]], 1.0);
    }

    #[test]
    fn test_kwraps3d_2x2x1() {
        let graph = kwraps3d(2, 1, 1).unwrap();
        assert_eq!(graph.node_count(), 4);

        for node in graph.nodes() {
            let others: HashSet<_> = graph.neighbors(node).filter(|&m| m != node).collect();
            assert_eq!(others.len(), 3, "node {node:?} should touch 3 others");
            // depth 1 folds the z offsets back onto the node
            assert!(graph.contains_edge(node, node));
        }
    }

    #[test]
    fn test_kwraps3d_defaults() {
        let graph = kwraps3d(4, DEFAULT_WRAP_RADIUS, DEFAULT_WRAP_DEPTH).unwrap();
        assert_eq!(graph.node_count(), 4 * 4 * 2);
        for node in graph.nodes() {
            // 3 x 3 in-plane cells on both layers, minus the node itself
            let others = graph.neighbors(node).filter(|&m| m != node).count();
            assert_eq!(others, 17);
        }
    }

    #[test]
    fn test_kwraps3d_nodes_inside_lattice() {
        let (n, d) = (3, 4);
        let graph = kwraps3d(n, 1, d).unwrap();
        for (x, y, z) in graph.nodes() {
            assert!((0..n).contains(&x));
            assert!((0..n).contains(&y));
            assert!((0..d).contains(&z));
        }
    }

    proptest! {
        #[test]
        fn grid_coordinates_cover_the_grid(n in 0i64..24) {
            let coords = grid_coordinates(n).unwrap();
            prop_assert_eq!(coords.len() as i64, n * n);

            let unique: HashSet<_> = coords.iter().copied().collect();
            prop_assert_eq!(unique.len(), coords.len());
            prop_assert!(coords.iter().all(|&(x, y)| (0..n).contains(&x) && (0..n).contains(&y)));
        }

        #[test]
        fn kwraps_is_always_symmetric(n in 1i64..7, k in 0i64..3) {
            let adj = kwraps(n, k).unwrap();
            prop_assert_eq!(adj.view(), adj.t());
        }
    }
}
