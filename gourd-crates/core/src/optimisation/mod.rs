//! Contains structures related to optimisation.
//!
//! An [`Objective`] turns a search into a branch-and-bound search: after every solution, the
//! objective variable is bounded to be strictly better than the value in that solution (by at
//! least [`Objective::step`]) for the remainder of the search.
use crate::predicate;
use crate::predicates::Predicate;
use crate::variables::DomainId;

/// The direction of the optimisation, either maximising or minimising.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OptimisationDirection {
    Maximise,
    #[default]
    Minimise,
}

/// The objective of a model: the variable to optimise, the direction, and the minimal
/// improvement required of every next solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Objective {
    variable: DomainId,
    direction: OptimisationDirection,
    step: i32,
}

impl Objective {
    pub fn minimise(variable: DomainId) -> Self {
        Objective::new(variable, OptimisationDirection::Minimise, 1)
    }

    pub fn maximise(variable: DomainId) -> Self {
        Objective::new(variable, OptimisationDirection::Maximise, 1)
    }

    /// Creates an objective which requires every next solution to improve by at least `step`.
    /// A step smaller than one is raised to one.
    pub fn new(variable: DomainId, direction: OptimisationDirection, step: i32) -> Self {
        Objective {
            variable,
            direction,
            step: step.max(1),
        }
    }

    pub fn variable(&self) -> DomainId {
        self.variable
    }

    pub fn direction(&self) -> OptimisationDirection {
        self.direction
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    /// The predicate which every solution better than `incumbent` satisfies, or [`None`] if no
    /// value of the objective variable can improve on it.
    pub fn improvement_over(&self, incumbent: i32) -> Option<Predicate> {
        let variable = self.variable;
        match self.direction {
            OptimisationDirection::Minimise => {
                let bound = incumbent.checked_sub(self.step)?;
                Some(predicate!(variable <= bound))
            }
            OptimisationDirection::Maximise => {
                let bound = incumbent.checked_add(self.step)?;
                Some(predicate!(variable >= bound))
            }
        }
    }

    /// Returns whether `candidate` is strictly better than `incumbent`.
    pub fn is_improvement(&self, candidate: i32, incumbent: i32) -> bool {
        match self.direction {
            OptimisationDirection::Minimise => candidate < incumbent,
            OptimisationDirection::Maximise => candidate > incumbent,
        }
    }

    /// Returns whether `value` is at least as good as `target`.
    pub fn reaches(&self, value: i32, target: i32) -> bool {
        match self.direction {
            OptimisationDirection::Minimise => value <= target,
            OptimisationDirection::Maximise => value >= target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn improvement_respects_direction_and_step() {
        let z = DomainId::new(0);

        assert_eq!(
            Objective::new(z, OptimisationDirection::Minimise, 3).improvement_over(10),
            Some(predicate!(z <= 7))
        );
        assert_eq!(
            Objective::maximise(z).improvement_over(10),
            Some(predicate!(z >= 11))
        );
    }

    #[test]
    fn nothing_improves_on_an_incumbent_at_the_integer_limits() {
        let z = DomainId::new(0);

        assert_eq!(Objective::minimise(z).improvement_over(i32::MIN), None);
        assert_eq!(Objective::maximise(z).improvement_over(i32::MAX), None);
        assert_eq!(
            Objective::new(z, OptimisationDirection::Minimise, 3).improvement_over(i32::MIN + 2),
            None
        );
        assert_eq!(
            Objective::minimise(z).improvement_over(i32::MIN + 1),
            Some(predicate!(z <= i32::MIN))
        );
    }

    #[test]
    fn step_is_at_least_one() {
        let objective = Objective::new(DomainId::new(0), OptimisationDirection::Minimise, 0);

        assert_eq!(objective.step(), 1);
        assert!(objective.is_improvement(4, 5));
        assert!(!objective.is_improvement(5, 5));
    }
}
