use super::Constraint;
use crate::variables::DomainId;

/// Creates the [`Constraint`] `sum(weight * x) <= rhs` over the `(weight, x)` pairs in `terms`.
pub fn less_than_or_equals(
    terms: impl IntoIterator<Item = (i32, DomainId)>,
    rhs: i32,
) -> Constraint {
    Constraint::LinearLessOrEqual {
        terms: terms.into_iter().collect(),
        rhs,
    }
}

/// Creates the [`Constraint`] `sum(weight * x) == rhs`.
pub fn equals(terms: impl IntoIterator<Item = (i32, DomainId)>, rhs: i32) -> Constraint {
    Constraint::LinearEquals {
        terms: terms.into_iter().collect(),
        rhs,
    }
}

/// Creates the [`Constraint`] `sum(variables) == rhs`.
pub fn sum_equals(variables: impl IntoIterator<Item = DomainId>, rhs: i32) -> Constraint {
    equals(variables.into_iter().map(|domain_id| (1, domain_id)), rhs)
}

/// Creates the [`Constraint`] `x <= y + offset`.
pub fn binary_less_than_or_equals(x: DomainId, y: DomainId, offset: i32) -> Constraint {
    less_than_or_equals([(1, x), (-1, y)], offset)
}

/// Creates the [`Constraint`] `x != y + offset`.
pub fn not_equals(x: DomainId, y: DomainId, offset: i32) -> Constraint {
    Constraint::NotEquals { x, y, offset }
}

/// Creates the [`Constraint`] `result == max(variables)`.
pub fn maximum(variables: impl IntoIterator<Item = DomainId>, result: DomainId) -> Constraint {
    Constraint::Maximum {
        variables: variables.into_iter().collect(),
        result,
    }
}
