pub mod utils;
pub use utils::*;

pub mod frontier;

mod branch_bound;
pub use branch_bound::{BranchAndBoundSolver, SearchStats};

mod dynamic;
pub use dynamic::{DpTable, DynamicProgrammingSolver};

use enum_dispatch::enum_dispatch;

pub use super::{Error, Item, Problem, Solution};

#[enum_dispatch]
#[derive(Debug, Clone)]
pub enum Solver {
    BranchAndBound(BranchAndBoundSolver),
    DynamicProgramming(DynamicProgrammingSolver),
}
pub use Solver::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Methods {
    BranchAndBound,
    DynamicProgramming,
}

use itertools::Itertools;
use std::str::FromStr;

impl FromStr for Methods {
    type Err = Error;
    fn from_str(name: &str) -> Result<Methods, Error> {
        let methods = [
            ("branch-and-bound", Self::BranchAndBound),
            ("bb", Self::BranchAndBound),
            ("dynamic", Self::DynamicProgramming),
            ("dp", Self::DynamicProgramming),
        ];
        methods
            .iter()
            .find(|(method_name, _)| *method_name == name)
            .map(|(_, method)| *method)
            .ok_or_else(|| Error::UnknownMethod {
                name: name.to_string(),
                valid: methods.iter().map(|x| x.0).join(", "),
            })
    }
}

#[enum_dispatch(Solver)]
pub trait SolverTrait {
    fn construction(&self, problem: &Problem) -> Solution;
    // is `min_value` reachable? method can specialize better decision
    fn decision(&self, problem: &Problem, min_value: u64) -> Option<Solution> {
        let constr_sol = self.construction(problem);
        if constr_sol.value >= min_value {
            Some(constr_sol)
        } else {
            None
        }
    }
}

impl Solver {
    /// Second number on the first line of a report.
    pub fn report_flag(&self) -> u8 {
        match self {
            BranchAndBound(_) => 0,
            DynamicProgramming(_) => 1,
        }
    }

    pub fn from_method(method: Methods, track_selection: bool) -> Solver {
        match method {
            Methods::BranchAndBound => BranchAndBound(BranchAndBoundSolver { track_selection }),
            Methods::DynamicProgramming => DynamicProgramming(DynamicProgrammingSolver()),
        }
    }
}
