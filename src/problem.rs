use super::Error;
use num_rational::Ratio;

#[allow(non_camel_case_types)]
pub type ratio = Ratio<u64>;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Item {
    // position in the input, survives any reordering
    pub index: usize,
    pub value: u32,
    pub weight: u32,
}

impl Item {
    /// Value per unit of weight, exact. Only valid for validated items.
    pub fn density(&self) -> ratio {
        ratio::new(self.value as u64, self.weight as u64)
    }
}

/// A validated 0/1 knapsack instance. Items are kept in input order, the
/// density ordered view is always a separate copy.
#[derive(Debug, Clone)]
pub struct Problem {
    capacity: u32,
    items: Vec<Item>,
}

impl Problem {
    pub fn new(values: &[u32], weights: &[u32], capacity: u32) -> Result<Problem, Error> {
        if values.len() != weights.len() {
            return Err(Error::LengthMismatch {
                values: values.len(),
                weights: weights.len(),
            });
        }
        Problem::from_items(
            capacity,
            values.iter().cloned().zip(weights.iter().cloned()),
        )
    }

    /// Builds the instance from `(value, weight)` pairs.
    pub fn from_items<I>(capacity: u32, pairs: I) -> Result<Problem, Error>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let items = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (value, weight))| {
                if weight == 0 {
                    Err(Error::ZeroWeight { index })
                } else {
                    Ok(Item {
                        index,
                        value,
                        weight,
                    })
                }
            })
            .collect::<Result<Vec<_>, Error>>()?;
        Ok(Problem { capacity, items })
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_value(&self) -> u64 {
        self.items.iter().map(|item| item.value as u64).sum()
    }

    pub fn total_weight(&self) -> u64 {
        self.items.iter().map(|item| item.weight as u64).sum()
    }

    /// Items sorted by descending value density (ties: lighter first, then
    /// input order). Items which can't fit even into an empty knapsack are
    /// left out.
    pub fn density_order(&self) -> Vec<Item> {
        let mut items = self
            .items
            .iter()
            .filter(|item| item.weight <= self.capacity)
            .cloned()
            .collect::<Vec<_>>();
        items.sort_unstable_by(|a, b| {
            b.density()
                .cmp(&a.density())
                .then(a.weight.cmp(&b.weight))
                .then(a.index.cmp(&b.index))
        });
        items
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Solution {
    pub value: u64,
    // inclusion vector in input order, when the solver recovers it
    pub items: Option<Vec<bool>>,
}

impl Solution {
    pub fn empty(size: usize) -> Solution {
        Solution {
            value: 0,
            items: Some(vec![false; size]),
        }
    }

    pub fn value_only(value: u64) -> Solution {
        Solution { value, items: None }
    }

    /// Sums `(value, weight)` of the selected items, `None` when there is no
    /// selection or it does not match the problem size.
    pub fn totals(&self, problem: &Problem) -> Option<(u64, u64)> {
        let items = self.items.as_ref()?;
        if items.len() != problem.len() {
            return None;
        }
        Some(
            items
                .iter()
                .zip(problem.items())
                .filter(|(&in_pack, _)| in_pack)
                .fold((0, 0), |(value, weight), (_, item)| {
                    (value + item.value as u64, weight + item.weight as u64)
                }),
        )
    }

    /// Selection respects the capacity and adds up to the reported value.
    pub fn is_consistent(&self, problem: &Problem) -> bool {
        match self.totals(problem) {
            Some((value, weight)) => value == self.value && weight <= problem.capacity() as u64,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_lengths_are_rejected() {
        assert_eq!(
            Problem::new(&[1, 2, 3], &[1, 2], 10).unwrap_err(),
            Error::LengthMismatch {
                values: 3,
                weights: 2
            }
        );
    }

    #[test]
    fn zero_weight_is_rejected() {
        assert_eq!(
            Problem::new(&[1, 2, 3], &[1, 0, 2], 10).unwrap_err(),
            Error::ZeroWeight { index: 1 }
        );
    }

    #[test]
    fn zero_values_are_fine() {
        let problem = Problem::new(&[0, 0], &[1, 2], 3).unwrap();
        assert_eq!(problem.len(), 2);
        assert_eq!(problem.total_value(), 0);
        assert_eq!(problem.total_weight(), 3);
    }

    #[test]
    fn items_remember_their_input_position() {
        let problem = Problem::new(&[5, 6, 7], &[1, 2, 3], 10).unwrap();
        let indices = problem.items().iter().map(|i| i.index).collect::<Vec<_>>();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn density_order_is_descending_and_keeps_original_view() {
        let problem = Problem::new(&[60, 100, 120, 10], &[10, 20, 30, 1], 50).unwrap();
        let sorted = problem.density_order();
        let indices = sorted.iter().map(|i| i.index).collect::<Vec<_>>();
        assert_eq!(indices, vec![3, 0, 1, 2]);
        assert!(sorted
            .windows(2)
            .all(|pair| pair[0].density() >= pair[1].density()));
        assert_eq!(problem.items()[0].value, 60);
    }

    #[test]
    fn density_ties_prefer_lighter_items() {
        let problem = Problem::new(&[20, 10, 10], &[20, 10, 10], 100).unwrap();
        let indices = problem
            .density_order()
            .iter()
            .map(|i| i.index)
            .collect::<Vec<_>>();
        assert_eq!(indices, vec![1, 2, 0]);
    }

    #[test]
    fn density_order_drops_items_heavier_than_capacity() {
        let problem = Problem::new(&[10, 1000], &[5, 51], 50).unwrap();
        let sorted = problem.density_order();
        assert_eq!(sorted.len(), 1);
        assert_eq!(sorted[0].index, 0);
    }

    #[test]
    fn consistency_checks_value_and_weight() {
        let problem = Problem::new(&[60, 100, 120], &[10, 20, 30], 50).unwrap();
        let good = Solution {
            value: 220,
            items: Some(vec![false, true, true]),
        };
        assert!(good.is_consistent(&problem));
        let too_heavy = Solution {
            value: 280,
            items: Some(vec![true, true, true]),
        };
        assert!(!too_heavy.is_consistent(&problem));
        assert!(!Solution::value_only(220).is_consistent(&problem));
    }
}
