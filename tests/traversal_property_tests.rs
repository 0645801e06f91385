use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use sealed_dag::prelude::*;

/// Orient every generated pair low→high so the graph is acyclic by
/// construction.
fn dag_edges(raw: Vec<(u8, u8)>) -> Vec<(u8, u8)> {
    raw.into_iter()
        .filter(|(a, b)| a != b)
        .map(|(a, b)| (a.min(b), a.max(b)))
        .collect()
}

fn edge_strategy() -> impl Strategy<Value = Vec<(u8, u8)>> {
    proptest::collection::vec((0u8..40, 0u8..40), 0..150).prop_map(dag_edges)
}

proptest! {
    #[test]
    fn order_is_complete_and_respects_edges(edges in edge_strategy()) {
        let g = DirectedGraph::from_edges(edges.iter().copied());
        let dag = SealedDag::seal(&g).unwrap();

        let order: Vec<_> = dag.top_order().collect();
        let distinct: HashSet<_> = order.iter().copied().collect();
        prop_assert_eq!(distinct.len(), order.len());
        prop_assert_eq!(distinct, dag.vertex_set().into_iter().collect::<HashSet<_>>());

        let pos: HashMap<u8, usize> =
            order.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        for &(u, v) in &edges {
            prop_assert!(pos[&u] < pos[&v], "edge {}->{} out of order", u, v);
        }

        let rev: Vec<_> = dag.reverse_top_order().collect();
        let rpos: HashMap<u8, usize> =
            rev.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        for &(u, v) in &edges {
            prop_assert!(rpos[&v] < rpos[&u], "edge {}->{} out of reverse order", u, v);
        }
    }

    #[test]
    fn levels_satisfy_the_longest_path_recurrence(edges in edge_strategy()) {
        let g = DirectedGraph::from_edges(edges.iter().copied());
        let dag = SealedDag::seal(&g).unwrap();

        let levels: Vec<Vec<u8>> = dag.top_levels().collect();
        let flat: Vec<_> = levels.iter().flatten().copied().collect();
        prop_assert_eq!(flat.len(), dag.vertex_count());

        let mut rank = HashMap::new();
        for (i, level) in levels.iter().enumerate() {
            for &v in level {
                rank.insert(v, i);
            }
        }
        for &v in &flat {
            let expected = dag
                .parents(v)
                .iter()
                .map(|p| rank[p] + 1)
                .max()
                .unwrap_or(0);
            prop_assert_eq!(rank[&v], expected, "level of {} not maximal", v);
        }
    }

    #[test]
    fn reverse_levels_match_the_edge_reversed_graph(edges in edge_strategy()) {
        let g = DirectedGraph::from_edges(edges.iter().copied());
        let dag = SealedDag::seal(&g).unwrap();

        let mut flipped = DirectedGraph::from_edges(edges.iter().map(|&(u, v)| (v, u)));
        // isolated vertices are not carried by the edge list
        for v in g.vertex_set() {
            flipped.add_vertex(v);
        }
        let flipped_dag = SealedDag::seal(&flipped).unwrap();

        prop_assert_eq!(
            dag.reverse_top_levels().collect::<Vec<_>>(),
            flipped_dag.top_levels().collect::<Vec<_>>()
        );
    }

    #[test]
    fn adding_a_back_edge_makes_seal_fail(edges in edge_strategy()) {
        prop_assume!(!edges.is_empty());
        let mut g = DirectedGraph::from_edges(edges.iter().copied());
        let (u, v) = edges[0];
        g.add_edge(v, u);
        prop_assert_eq!(SealedDag::seal(&g).err(), Some(DagError::CyclicGraph));
    }
}
