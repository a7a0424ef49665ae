use crate::cell::FoodId;
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};

/// Undirected graph over food ids recording which food sources the mould has
/// connected.
///
/// Edges are only ever added. Adding an edge between ids that are not nodes
/// yet creates those nodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FoodGraph {
    adjacency: BTreeMap<FoodId, BTreeSet<FoodId>>,
}

impl FoodGraph {
    pub fn new() -> FoodGraph {
        FoodGraph::default()
    }

    pub fn add_node(&mut self, id: FoodId) {
        self.adjacency.entry(id).or_default();
    }

    pub fn add_nodes_from(&mut self, ids: impl IntoIterator<Item = FoodId>) {
        for id in ids {
            self.add_node(id);
        }
    }

    /// Connects `source` and `target`. Idempotent.
    pub fn add_edge(&mut self, source: FoodId, target: FoodId) {
        self.adjacency.entry(source).or_default().insert(target);
        self.adjacency.entry(target).or_default().insert(source);
    }

    pub fn has_node(&self, id: FoodId) -> bool {
        self.adjacency.contains_key(&id)
    }

    pub fn has_edge(&self, source: FoodId, target: FoodId) -> bool {
        self.adjacency
            .get(&source)
            .is_some_and(|neighbours| neighbours.contains(&target))
    }

    pub fn nodes(&self) -> Vec<FoodId> {
        self.adjacency.keys().copied().collect()
    }

    pub fn neighbours(&self, id: FoodId) -> Vec<FoodId> {
        self.adjacency
            .get(&id)
            .map(|neighbours| neighbours.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Every edge once, as `(smaller id, larger id)`, sorted.
    pub fn edges(&self) -> Vec<(FoodId, FoodId)> {
        self.adjacency
            .iter()
            .flat_map(|(&source, neighbours)| {
                neighbours
                    .iter()
                    .filter(move |&&target| source <= target)
                    .map(move |&target| (source, target))
            })
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Breadth-first shortest path from `source` to `target`, both ends
    /// included. `None` when the two are not connected.
    pub fn shortest_path(&self, source: FoodId, target: FoodId) -> Option<Vec<FoodId>> {
        if !self.has_node(source) || !self.has_node(target) {
            return None;
        }

        let mut previous: HashMap<FoodId, FoodId> = HashMap::new();
        let mut visited: BTreeSet<FoodId> = BTreeSet::from([source]);
        let mut queue = VecDeque::from([source]);

        while let Some(current) = queue.pop_front() {
            if current == target {
                let mut path = vec![target];
                let mut node = target;
                while let Some(&prev) = previous.get(&node) {
                    path.push(prev);
                    node = prev;
                }
                path.reverse();
                return Some(path);
            }

            for &next in &self.adjacency[&current] {
                if visited.insert(next) {
                    previous.insert(next, current);
                    queue.push_back(next);
                }
            }
        }

        None
    }
}
