use crate::predicates::Predicate;

/// A branching choice made by a [`Brancher`](crate::branching::Brancher).
///
/// The first alternative is explored first. A binary decision explores the negation of the first
/// alternative when the first one has been refuted, while a unary decision fails its node instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Decision {
    predicate: Predicate,
    is_binary: bool,
}

impl Decision {
    /// Try `predicate`, and its negation on backtrack.
    pub fn binary(predicate: Predicate) -> Self {
        Decision {
            predicate,
            is_binary: true,
        }
    }

    /// Try `predicate` only; refuting it refutes the node the decision was made in.
    pub fn unary(predicate: Predicate) -> Self {
        Decision {
            predicate,
            is_binary: false,
        }
    }

    pub fn first_alternative(&self) -> Predicate {
        self.predicate
    }

    pub fn second_alternative(&self) -> Option<Predicate> {
        self.is_binary.then(|| !self.predicate)
    }

    pub fn is_binary(&self) -> bool {
        self.is_binary
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.second_alternative() {
            Some(second) => write!(f, "{} | {}", self.predicate, second),
            None => write!(f, "{}", self.predicate),
        }
    }
}
