use super::{Problem, Solution, SolverTrait};
use gcd::Gcd;
use log::debug;

/// Exact solver filling the whole (capacity x item prefix) table.
#[derive(Debug, Clone, Default)]
pub struct DynamicProgrammingSolver();

/// `O[k][j]`: best value using the first `j` items (input order) with
/// capacity `k`. Only the rows for multiples of the gcd of the weights are
/// stored, any other capacity has the value of the multiple just below it.
#[derive(Debug, Clone)]
pub struct DpTable {
    table: Vec<u64>,
    // weights divided by `scale`
    weights: Vec<u32>,
    scale: u32,
    // input capacity K
    max_capacity: u32,
    // stored rows are 0..=capacity, i.e. K / scale
    capacity: usize,
    // columns are item prefixes 0..=items
    items: usize,
}

impl DpTable {
    pub fn build(problem: &Problem) -> DpTable {
        let scale = problem
            .items()
            .iter()
            .fold(0u32, |acc, item| acc.gcd(item.weight))
            .max(1);
        let weights = problem
            .items()
            .iter()
            .map(|item| item.weight / scale)
            .collect::<Vec<_>>();
        let values = problem
            .items()
            .iter()
            .map(|item| item.value as u64)
            .collect::<Vec<_>>();
        let capacity = (problem.capacity() / scale) as usize;
        let n = weights.len();
        let width = n + 1;
        debug!(
            "dynamic programming table {}x{} (weights scaled down by {})",
            capacity + 1,
            width,
            scale
        );

        // row 0 and column 0 stay zero
        let mut table = vec![0u64; (capacity + 1) * width];
        for k in 1..=capacity {
            for j in 1..=n {
                let w = weights[j - 1] as usize;
                let without_item = table[k * width + j - 1];
                table[k * width + j] = if w <= k {
                    without_item.max(values[j - 1] + table[(k - w) * width + j - 1])
                } else {
                    without_item
                };
            }
        }

        DpTable {
            table,
            weights,
            scale,
            max_capacity: problem.capacity(),
            capacity,
            items: n,
        }
    }

    fn cell(&self, row: usize, prefix: usize) -> u64 {
        self.table[row * (self.items + 1) + prefix]
    }

    /// `O[capacity][prefix]`, `None` outside `0..=K` x `0..=N`.
    pub fn get(&self, capacity: u32, prefix: usize) -> Option<u64> {
        if capacity > self.max_capacity || prefix > self.items {
            return None;
        }
        Some(self.cell((capacity / self.scale) as usize, prefix))
    }

    pub fn optimum(&self) -> u64 {
        self.cell(self.capacity, self.items)
    }

    /// Walks back from `O[K][N]`: whenever adding item `i - 1` changed the
    /// value it was taken.
    pub fn backtrack(&self) -> Vec<bool> {
        let mut taken = vec![false; self.items];
        let mut k = self.capacity;
        for i in (1..=self.items).rev() {
            if self.cell(k, i) != self.cell(k, i - 1) {
                taken[i - 1] = true;
                k -= self.weights[i - 1] as usize;
            }
        }
        taken
    }
}

impl SolverTrait for DynamicProgrammingSolver {
    fn construction(&self, problem: &Problem) -> Solution {
        let table = DpTable::build(problem);
        Solution {
            value: table.optimum(),
            items: Some(table.backtrack()),
        }
    }
}
