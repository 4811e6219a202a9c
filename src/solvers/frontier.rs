//! The best-first frontier of the branch-and-bound search.

use binary_heap_plus::BinaryHeap;
use compare::Compare;
use std::cmp::Ordering;
use std::rc::Rc;

/// Density positions of the items included along a search path. Siblings
/// share the prefix they have in common.
#[derive(Debug)]
pub enum Path {
    Root,
    Take { parent: Rc<Path>, position: usize },
}

impl Path {
    pub fn positions(&self) -> Vec<usize> {
        let mut positions = vec![];
        let mut current = self;
        while let Path::Take { parent, position } = current {
            positions.push(*position);
            current = parent;
        }
        positions
    }
}

/// A partial include/exclude assignment of the first `depth` items (in
/// density order).
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub depth: usize,
    pub value: u64,
    pub weight: u64,
    pub bound: f64,
    // only maintained when the search recovers the selection
    pub path: Option<Rc<Path>>,
}

/// Orders nodes by their bound and nothing else.
#[derive(Debug, Default, Copy, Clone)]
pub struct MaxBound;
impl Compare<SearchNode> for MaxBound {
    fn compare(&self, a: &SearchNode, b: &SearchNode) -> Ordering {
        a.bound.total_cmp(&b.bound)
    }
}

/// Max-heap of search nodes, always pops the node with the largest bound.
pub struct Frontier {
    heap: BinaryHeap<SearchNode, MaxBound>,
}

impl Default for Frontier {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::from_vec_cmp(vec![], MaxBound),
        }
    }
}

impl Frontier {
    pub fn push(&mut self, node: SearchNode) {
        self.heap.push(node)
    }

    pub fn pop(&mut self) -> Option<SearchNode> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
