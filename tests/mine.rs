use gaston::{
    data::LabeledGraph,
    fragment::FragmentKind,
    pattern::{canonical_embedding, Signature},
    search::mine,
};
use std::collections::{BTreeMap, HashMap};

fn create_graph(id: i64, vertices: &[(i64, i64)], edges: &[(i64, i64, i64)]) -> LabeledGraph {
    let mut g = LabeledGraph::new(id);
    for &(vid, vlabel) in vertices {
        g.add_vertex(vid, vlabel);
    }
    for &(u1, u2, elabel) in edges {
        g.add_edge(u1, u2, elabel);
    }
    g
}

fn expected(entries: &[(&[i64], usize)]) -> BTreeMap<Signature, usize> {
    entries
        .iter()
        .map(|&(labels, frequency)| (Signature::new(labels.to_vec()), frequency))
        .collect()
}

fn create_triangle() -> LabeledGraph {
    create_graph(
        0,
        &[(1, 0), (2, 0), (3, 3)],
        &[(1, 2, 0), (1, 3, 13), (2, 3, 23)],
    )
}

#[test]
fn test_single_edge() {
    let g = create_graph(0, &[(1, 0), (2, 0)], &[(1, 2, 0)]);
    let result = mine(&[g], 0, true, true);
    assert_eq!(
        result.frequencies(),
        expected(&[(&[0], 2), (&[0, 0, 0], 1)])
    );
}

#[test]
fn test_triangle() {
    let result = mine(&[create_triangle()], 0, true, true);
    assert_eq!(
        result.frequencies(),
        expected(&[
            (&[0], 2),
            (&[0, 0, 0], 1),
            (&[0, 0, 0, 13, 3], 1),
            (&[0, 0, 0, 23, 3], 1),
            (&[0, 0, 0, 23, 3, 13, 0], 1),
            (&[0, 13, 3], 1),
            (&[0, 13, 3, 23, 0], 1),
            (&[0, 23, 3], 1),
            (&[3], 1),
        ])
    );
    let cycle = result
        .get(&Signature::new(vec![0, 0, 0, 23, 3, 13, 0]))
        .unwrap();
    assert_eq!(cycle.kind(), FragmentKind::Cycle);
    assert_eq!(cycle.subgraph().num_edges(), 3);
}

#[test]
fn test_signatures_match_their_subgraphs() {
    let result = mine(&[create_triangle()], 1, true, true);
    for (signature, frequent) in &result {
        let subgraph = frequent.subgraph();
        assert_eq!(signature.num_edges(), subgraph.num_edges());
        assert!(subgraph
            .vertices()
            .any(|(v, _)| &canonical_embedding(subgraph, v) == signature));
    }
}

#[test]
fn test_deterministic() {
    let graphs = vec![
        create_triangle(),
        create_graph(
            1,
            &[(1, 0), (2, 3), (3, 0), (4, 3), (5, 1)],
            &[(1, 2, 13), (2, 3, 23), (3, 4, 13), (4, 1, 23), (4, 5, 7)],
        ),
    ];
    let first = mine(&graphs, 1, true, true);
    let second = mine(&graphs, 1, true, true);
    assert_eq!(first, second);
    assert_eq!(first.frequencies(), second.frequencies());
}

#[test]
fn test_feature_toggles() {
    let g = create_graph(
        0,
        &[(1, 0), (2, 0), (3, 3), (4, 4)],
        &[(1, 2, 0), (1, 3, 13), (2, 3, 23), (3, 4, 34)],
    );
    let result = mine(&[g], 1, false, false);
    assert!(result
        .iter()
        .all(|(_, f)| matches!(f.kind(), FragmentKind::Node | FragmentKind::Path)));
    assert!(result.kind_counts().get(&FragmentKind::Path).is_some());
}

#[test]
fn test_min_frequency_over_several_graphs() {
    let graphs = vec![
        create_graph(0, &[(1, 0), (2, 1)], &[(1, 2, 5)]),
        create_graph(1, &[(1, 0), (2, 1), (3, 2)], &[(1, 2, 5), (2, 3, 6)]),
        create_graph(2, &[(1, 1), (2, 0)], &[(1, 2, 5)]),
    ];
    let result = mine(&graphs, 3, true, true);
    assert_eq!(
        result.frequencies(),
        expected(&[(&[0], 3), (&[0, 5, 1], 3), (&[1], 3)])
    );
    assert!(mine(&graphs, 4, true, true).is_empty());
}

/// Graphs whose patterns are reachable through several growth orders.
fn create_tangled() -> Vec<LabeledGraph> {
    vec![
        create_graph(0, &[(0, 0), (1, 0), (2, 0)], &[(0, 1, 1), (1, 2, 0)]),
        create_graph(1, &[(0, 1), (1, 1), (2, 1)], &[(0, 1, 0), (1, 2, 1)]),
        create_graph(
            2,
            &[(1, 0), (2, 0), (3, 0), (4, 1)],
            &[(1, 2, 0), (2, 3, 0), (3, 1, 0), (3, 4, 1)],
        ),
        create_graph(
            3,
            &[(1, 0), (2, 0), (3, 0), (4, 0)],
            &[(1, 2, 0), (2, 3, 0), (3, 4, 0), (4, 1, 0), (1, 3, 1)],
        ),
        create_graph(
            4,
            &[(1, 0), (2, 0), (3, 0), (4, 0)],
            &[(1, 2, 0), (1, 3, 0), (1, 4, 0), (2, 3, 0), (2, 4, 0), (3, 4, 0)],
        ),
        create_graph(
            5,
            &[(1, 0), (2, 1), (3, 1), (4, 1), (5, 2), (6, 2)],
            &[(1, 2, 0), (1, 3, 0), (1, 4, 0), (3, 5, 0), (4, 6, 0)],
        ),
        create_triangle(),
    ]
}

/// Number of connected edge subsets plus the number of vertices.
fn count_connected_subgraphs(g: &LabeledGraph) -> usize {
    let edges: Vec<_> = g.edges().collect();
    let mut count = g.num_vertices();
    for mask in 1usize..(1 << edges.len()) {
        let chosen: Vec<_> = (0..edges.len())
            .filter(|&i| mask & (1 << i) != 0)
            .map(|i| edges[i])
            .collect();
        let mut reached = vec![chosen[0].0];
        let mut grown = true;
        while grown {
            grown = false;
            for &(u1, u2, _) in &chosen {
                match (reached.contains(&u1), reached.contains(&u2)) {
                    (true, false) => reached.push(u2),
                    (false, true) => reached.push(u1),
                    _ => continue,
                }
                grown = true;
            }
        }
        if chosen
            .iter()
            .all(|(u1, u2, _)| reached.contains(u1) && reached.contains(u2))
        {
            count += 1;
        }
    }
    count
}

fn renumbered(g: &LabeledGraph) -> LabeledGraph {
    let ids: HashMap<_, _> = g.vertices().map(|(v, _)| (v, 1000 - 7 * v)).collect();
    let vertices: Vec<_> = g.vertices().map(|(v, l)| (ids[&v], l)).collect();
    let edges: Vec<_> = g
        .edges()
        .map(|(u1, u2, e)| (ids[&u2], ids[&u1], e))
        .collect();
    create_graph(g.id(), &vertices, &edges)
}

#[test]
fn test_two_edge_path_between_equal_labels() {
    let g = create_graph(0, &[(0, 0), (1, 0), (2, 0)], &[(0, 1, 1), (1, 2, 0)]);
    assert_eq!(
        mine(&[g], 1, true, true).frequencies(),
        expected(&[(&[0], 3), (&[0, 0, 0], 1), (&[0, 0, 0, 1, 0], 1), (&[0, 1, 0], 1)])
    );
}

#[test]
fn test_every_connected_subgraph_is_counted() {
    for g in create_tangled() {
        let total: usize = mine(&[g.clone()], 1, true, true)
            .frequencies()
            .values()
            .sum();
        assert_eq!(total, count_connected_subgraphs(&g), "graph {}", g.id());
    }
}

#[test]
fn test_renumbering_keeps_signatures() {
    for g in create_tangled() {
        assert_eq!(
            mine(&[g.clone()], 1, true, true).frequencies(),
            mine(&[renumbered(&g)], 1, true, true).frequencies(),
            "graph {}",
            g.id()
        );
    }
    let graphs = create_tangled();
    let copies: Vec<_> = graphs.iter().map(renumbered).collect();
    assert_eq!(
        mine(&graphs, 2, true, true).frequencies(),
        mine(&copies, 2, true, true).frequencies()
    );
}
