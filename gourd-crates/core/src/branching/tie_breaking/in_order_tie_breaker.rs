use super::Direction;
use super::TieBreaker;

/// Selects the first variable it received with the best value according to the [`Direction`].
///
/// Since variables are usually considered in declaration order, ties are broken in favour of the
/// variable which was declared first.
#[derive(Debug)]
pub struct InOrderTieBreaker<Var, Value> {
    selected: Option<(Var, Value)>,
    direction: Direction,
}

impl<Var, Value> InOrderTieBreaker<Var, Value> {
    pub fn new(direction: Direction) -> Self {
        Self {
            selected: None,
            direction,
        }
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for InOrderTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value) {
        let is_better = match &self.selected {
            None => true,
            Some((_, selected_value)) => match self.direction {
                Direction::Maximum => value > *selected_value,
                Direction::Minimum => value < *selected_value,
            },
        };

        if is_better {
            self.selected = Some((variable, value));
        }
    }

    fn select(&mut self) -> Option<Var> {
        self.selected.take().map(|(variable, _)| variable)
    }

    fn get_direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::InOrderTieBreaker;
    use crate::branching::tie_breaking::Direction;
    use crate::branching::tie_breaking::TieBreaker;
    use crate::variables::DomainId;

    #[test]
    fn ties_go_to_the_first_variable() {
        let mut breaker = InOrderTieBreaker::new(Direction::Minimum);

        breaker.consider(DomainId::new(0), 10);
        breaker.consider(DomainId::new(1), 10);
        breaker.consider(DomainId::new(2), 10);

        assert_eq!(breaker.select(), Some(DomainId::new(0)));
    }

    #[test]
    fn the_best_value_wins_in_either_direction() {
        let mut minimum = InOrderTieBreaker::new(Direction::Minimum);
        let mut maximum = InOrderTieBreaker::new(Direction::Maximum);

        for (id, value) in [(0, 10), (1, 5), (2, 12)] {
            minimum.consider(DomainId::new(id), value);
            maximum.consider(DomainId::new(id), value);
        }

        assert_eq!(minimum.select(), Some(DomainId::new(1)));
        assert_eq!(maximum.select(), Some(DomainId::new(2)));
    }

    #[test]
    fn selecting_resets_the_tie_breaker() {
        let mut breaker = InOrderTieBreaker::new(Direction::Maximum);
        breaker.consider(DomainId::new(3), 1);

        assert_eq!(breaker.select(), Some(DomainId::new(3)));
        assert_eq!(breaker.select(), None);
        assert_eq!(breaker.get_direction(), Direction::Maximum);
    }
}
