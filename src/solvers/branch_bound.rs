use super::{
    frontier::{Frontier, Path, SearchNode},
    utils::{relaxation_bound, selection_in_input_order},
    Item, Problem, Solution, SolverTrait,
};
use log::debug;
use std::rc::Rc;

/// Best-first branch and bound over the include/exclude tree, items in
/// density order, pruned with the fractional relaxation bound.
#[derive(Debug, Clone, Default)]
pub struct BranchAndBoundSolver {
    // carry the included positions in every node to recover the selection
    pub track_selection: bool,
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct SearchStats {
    pub explored: usize,
    pub pushed: usize,
    pub pruned: usize,
    // include children over capacity, dropped without a bound
    pub overweight: usize,
    pub peak_frontier: usize,
}

/// Mutable state of one run: the incumbent value (and its path) only ever
/// grows, every pruning decision reads it first.
struct Search<'a> {
    items: &'a [Item],
    capacity: u32,
    best_value: u64,
    best_path: Option<Rc<Path>>,
    frontier: Frontier,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    fn new(items: &'a [Item], capacity: u32, track_selection: bool) -> Self {
        Search {
            items,
            capacity,
            best_value: 0,
            best_path: if track_selection {
                Some(Rc::new(Path::Root))
            } else {
                None
            },
            frontier: Frontier::default(),
            stats: SearchStats::default(),
        }
    }

    fn node(&self, depth: usize, value: u64, weight: u64, path: Option<Rc<Path>>) -> SearchNode {
        SearchNode {
            depth,
            value,
            weight,
            bound: relaxation_bound(self.items, self.capacity, depth, value, weight),
            path,
        }
    }

    fn offer(&mut self, node: SearchNode) {
        if node.bound > self.best_value as f64 {
            self.frontier.push(node);
            self.stats.pushed += 1;
            self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
        } else {
            self.stats.pruned += 1;
        }
    }

    fn expand(&mut self, v: SearchNode) {
        let position = v.depth;
        let item = match self.items.get(position) {
            Some(item) => *item,
            None => return,
        };

        let weight = v.weight + item.weight as u64;
        // an overweight child is infeasible, its subtree is never explored
        if weight <= self.capacity as u64 {
            let value = v.value + item.value as u64;
            let path = v.path.as_ref().map(|parent| {
                Rc::new(Path::Take {
                    parent: Rc::clone(parent),
                    position,
                })
            });
            if value > self.best_value {
                self.best_value = value;
                self.best_path = path.clone();
            }
            let with_item = self.node(position + 1, value, weight, path);
            self.offer(with_item);
        } else {
            self.stats.overweight += 1;
        }

        let without_item = self.node(position + 1, v.value, v.weight, v.path);
        self.offer(without_item);
    }

    fn run(&mut self) {
        let root = self.node(0, 0, 0, self.best_path.clone());
        self.frontier.push(root);
        self.stats.pushed += 1;
        self.stats.peak_frontier = 1;

        while let Some(v) = self.frontier.pop() {
            if v.bound > self.best_value as f64 {
                self.stats.explored += 1;
                self.expand(v);
            } else {
                self.stats.pruned += 1;
            }
        }
    }
}

impl BranchAndBoundSolver {
    /// Runs the search, also returning how much work it took.
    pub fn solve(&self, problem: &Problem) -> (Solution, SearchStats) {
        let items = problem.density_order();
        if items.len() < problem.len() {
            debug!(
                "{} item(s) heavier than capacity {} left out of the search",
                problem.len() - items.len(),
                problem.capacity()
            );
        }

        let mut search = Search::new(&items, problem.capacity(), self.track_selection);
        search.run();
        debug!("branch and bound finished: {:?}", search.stats);

        let solution = match search.best_path {
            Some(path) => Solution {
                value: search.best_value,
                items: Some(selection_in_input_order(
                    &items,
                    path.positions(),
                    problem.len(),
                )),
            },
            None => Solution::value_only(search.best_value),
        };
        (solution, search.stats)
    }
}

impl SolverTrait for BranchAndBoundSolver {
    fn construction(&self, problem: &Problem) -> Solution {
        self.solve(problem).0
    }
}
