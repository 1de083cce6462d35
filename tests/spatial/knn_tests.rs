mod knn_tests {
    use approx::assert_relative_eq;
    use gcnn_graph_rs::GraphError;
    use gcnn_graph_rs::graph::spatial::{DEFAULT_KNN_K, DEFAULT_METRIC, Metric, knn, knn_with_metric};
    use ndarray::{Array2, array};
    use proptest::prelude::*;

    fn nonzero_per_row(w: &Array2<f64>) -> Vec<usize> {
        w.rows()
            .into_iter()
            .map(|row| row.iter().filter(|&&x| x != 0.0).count())
            .collect()
    }

    fn features_within(bound: f64) -> impl Strategy<Value = Array2<f64>> {
        (2usize..12, 1usize..4).prop_flat_map(move |(n, d)| {
            prop::collection::vec(-bound..bound, n * d)
                .prop_map(move |v| Array2::from_shape_vec((n, d), v).unwrap())
        })
    }

    fn features() -> impl Strategy<Value = Array2<f64>> {
        features_within(20.0)
    }

    #[test]
    fn test_three_point_scenario() {
        let z = array![[0.0], [1.0], [10.0]];
        let w = knn(z.view(), 1, "euclidean").unwrap();

        // closest pair keeps a mutual edge
        assert!(w[[0, 1]] > 0.0);
        assert_eq!(w[[0, 1]], w[[1, 0]]);
        // node 2 keeps its nearest neighbor
        assert!(w[[2, 1]] > 0.0);
        // 0 and 2 are too far apart for either to keep the other
        assert_eq!(w[[0, 2]], 0.0);
    }

    #[test]
    fn test_gaussian_weights() {
        let z = array![[0.0, 0.0], [3.0, 4.0]];
        let w = knn(z.view(), DEFAULT_KNN_K, DEFAULT_METRIC).unwrap();
        assert_relative_eq!(w[[0, 1]], (-12.5f64).exp());
        assert_relative_eq!(w[[0, 0]], 1.0);
    }

    #[test]
    fn test_metric_changes_neighbors() {
        // under cityblock node 0 is closer to 1, under chebyshev closer to 2
        let z = array![[0.0, 0.0], [1.5, 0.0], [1.0, 1.0], [30.0, 30.0]];
        let city = knn(z.view(), 1, "cityblock").unwrap();
        let cheb = knn_with_metric(z.view(), 1, Metric::Chebyshev).unwrap();

        assert_relative_eq!(city[[0, 1]], (-1.125f64).exp());
        assert_relative_eq!(cheb[[0, 2]], (-0.5f64).exp());
    }

    #[test]
    fn test_unsupported_metric() {
        let z = array![[0.0], [1.0]];
        let err = knn(z.view(), 1, "wasserstein").unwrap_err();
        assert_eq!(err, GraphError::UnsupportedMetric("wasserstein".into()));
    }

    #[test]
    fn test_empty_features() {
        let z = Array2::<f64>::zeros((0, 3));
        let w = knn(z.view(), 2, "euclidean").unwrap();
        assert_eq!(w.dim(), (0, 0));
    }

    proptest! {
        #[test]
        fn knn_is_exactly_symmetric(z in features(), k in 1usize..6) {
            let w = knn(z.view(), k, "euclidean").unwrap();
            prop_assert_eq!(w.view(), w.t());
        }

        #[test]
        fn knn_keeps_at_least_k_neighbors(z in features_within(3.0), k in 1usize..6) {
            // small coordinates keep every gaussian weight above zero
            let n = z.nrows();
            let w = knn(z.view(), k, "euclidean").unwrap();
            for count in nonzero_per_row(&w) {
                prop_assert!(count >= k.min(n - 1) + 1);
            }
        }

        #[test]
        fn larger_k_never_drops_edges(z in features(), k in 1usize..6) {
            let smaller = nonzero_per_row(&knn(z.view(), k, "euclidean").unwrap());
            let larger = nonzero_per_row(&knn(z.view(), k + 1, "euclidean").unwrap());
            for (a, b) in smaller.iter().zip(larger.iter()) {
                prop_assert!(b >= a);
            }
        }
    }
}
