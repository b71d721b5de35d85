use proptest::prelude::*;
use std::collections::BTreeSet;

use crate::debug_invariants::DebugInvariants;
use crate::graph::DirectedGraph;

#[derive(Clone, Debug)]
enum Op {
    Insert(u8),
    Erase(u8),
    EraseAt(usize),
    InsertEdge(u8, u8),
    EraseEdge(u8, u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u8..10).prop_map(Op::Insert),
        1 => (0u8..10).prop_map(Op::Erase),
        1 => (0usize..12).prop_map(Op::EraseAt),
        4 => (0u8..10, 0u8..10).prop_map(|(a, b)| Op::InsertEdge(a, b)),
        1 => (0u8..10, 0u8..10).prop_map(|(a, b)| Op::EraseEdge(a, b)),
    ]
}

/// Value-level model: node order plus edges as value pairs.
#[derive(Default)]
struct Model {
    order: Vec<u8>,
    edges: BTreeSet<(u8, u8)>,
}

impl Model {
    fn drop_value(&mut self, v: u8) {
        self.order.retain(|&x| x != v);
        self.edges.retain(|&(a, b)| a != v && b != v);
    }

    fn apply(&mut self, op: &Op) -> bool {
        match *op {
            Op::Insert(v) => {
                if self.order.contains(&v) {
                    false
                } else {
                    self.order.push(v);
                    true
                }
            }
            Op::Erase(v) => {
                let present = self.order.contains(&v);
                self.drop_value(v);
                present
            }
            Op::EraseAt(i) => match self.order.get(i).copied() {
                Some(v) => {
                    self.drop_value(v);
                    true
                }
                None => false,
            },
            Op::InsertEdge(a, b) => {
                self.order.contains(&a) && self.order.contains(&b) && self.edges.insert((a, b))
            }
            Op::EraseEdge(a, b) => self.edges.remove(&(a, b)),
        }
    }

    fn targets(&self, v: u8) -> Vec<u8> {
        self.edges
            .iter()
            .filter(|&&(a, _)| a == v)
            .map(|&(_, b)| b)
            .collect()
    }
}

fn apply(g: &mut DirectedGraph<u8>, op: &Op) -> bool {
    match *op {
        Op::Insert(v) => g.insert(v).1,
        Op::Erase(v) => g.erase(&v),
        Op::EraseAt(i) => {
            let before = g.len();
            let pos = g.begin();
            let pos = (0..i).fold(pos, |p, _| p.next());
            g.erase_at(pos);
            g.len() != before
        }
        Op::InsertEdge(a, b) => g.insert_edge(&a, &b),
        Op::EraseEdge(a, b) => g.erase_edge(&a, &b),
    }
}

proptest! {
    #[test]
    fn graph_tracks_value_model(ops in prop::collection::vec(op(), 0..60)) {
        let mut g = DirectedGraph::new();
        let mut model = Model::default();
        for op in &ops {
            let edges_before = g.edge_count();
            let got = apply(&mut g, op);
            let want = model.apply(op);
            prop_assert_eq!(got, want, "op {:?}", op);
            if !got {
                if let Op::EraseEdge(..) | Op::InsertEdge(..) = op {
                    prop_assert_eq!(g.edge_count(), edges_before);
                }
            }

            let values: Vec<u8> = g.iter().copied().collect();
            prop_assert_eq!(&values, &model.order);
            for &v in &model.order {
                let adj: Vec<u8> = g.adjacent_values(&v).into_iter().copied().collect();
                prop_assert_eq!(adj, model.targets(v));
            }
            for node in g.nodes() {
                for &t in node.adjacency() {
                    prop_assert!(t < g.len());
                }
            }
            prop_assert!(g.validate_invariants().is_ok());
        }
    }

    #[test]
    fn reinserting_never_grows(values in prop::collection::vec(0u8..16, 1..40)) {
        let mut g = DirectedGraph::new();
        for &v in &values {
            g.insert(v);
        }
        let len = g.len();
        for &v in &values {
            let (pos, fresh) = g.insert(v);
            prop_assert!(!fresh);
            prop_assert_eq!(g.get_at(pos), Some(&v));
        }
        prop_assert_eq!(g.len(), len);
        let distinct: BTreeSet<u8> = values.iter().copied().collect();
        prop_assert_eq!(len, distinct.len());
    }

    #[test]
    fn equality_ignores_insertion_order(
        values in prop::collection::btree_set(0u8..12, 0..10),
        raw_edges in prop::collection::vec((0usize..10, 0usize..10), 0..30),
    ) {
        let values: Vec<u8> = values.into_iter().collect();
        let edges: Vec<(u8, u8)> = raw_edges
            .iter()
            .filter_map(|&(a, b)| Some((*values.get(a)?, *values.get(b)?)))
            .collect();

        let mut forward = DirectedGraph::new();
        values.iter().for_each(|&v| { forward.insert(v); });
        edges.iter().for_each(|(a, b)| { forward.insert_edge(a, b); });

        let mut backward = DirectedGraph::new();
        values.iter().rev().for_each(|&v| { backward.insert(v); });
        edges.iter().rev().for_each(|(a, b)| { backward.insert_edge(a, b); });

        prop_assert!(forward == backward);

        if let Some(&(a, b)) = edges.first() {
            backward.erase_edge(&a, &b);
            prop_assert!(forward != backward);
        }
    }

    #[test]
    fn erase_keeps_remaining_edges_by_value(
        n in 1u8..10,
        raw_edges in prop::collection::vec((0u8..10, 0u8..10), 0..40),
        victim in 0u8..10,
    ) {
        let mut g: DirectedGraph<u8> = (0..n).collect();
        for &(a, b) in &raw_edges {
            g.insert_edge(&a, &b);
        }
        let before: Vec<(u8, Vec<u8>)> = g
            .iter()
            .map(|&v| (v, g.adjacent_values(&v).into_iter().copied().collect()))
            .collect();

        let present = g.contains(&victim);
        prop_assert_eq!(g.erase(&victim), present);

        for (v, targets) in before {
            if v == victim {
                prop_assert!(!g.contains(&v));
                continue;
            }
            let want: Vec<u8> = targets.into_iter().filter(|&t| t != victim).collect();
            let got: Vec<u8> = g.adjacent_values(&v).into_iter().copied().collect();
            prop_assert_eq!(got, want);
        }
    }
}
