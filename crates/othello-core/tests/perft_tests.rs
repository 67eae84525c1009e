use othello_core::perft::perft_root;

#[test]
fn test_perft() {
    let expected: [(u32, u64); 7] = [
        (1, 4),
        (2, 12),
        (3, 56),
        (4, 244),
        (5, 1_396),
        (6, 8_200),
        (7, 55_092),
    ];
    for (depth, nodes) in expected {
        assert_eq!(perft_root(depth), nodes, "perft mismatch at depth {depth}");
    }
}
