use super::Constraint;
use crate::gourd_assert_simple;
use crate::variables::DomainId;

/// Creates the [`Constraint`] which restricts `variables` to take the values of one of `tuples`;
/// every tuple has one value per variable.
pub fn table(
    variables: impl IntoIterator<Item = DomainId>,
    tuples: impl IntoIterator<Item = Vec<i32>>,
) -> Constraint {
    let variables: Box<[DomainId]> = variables.into_iter().collect();
    let tuples: Box<[Box<[i32]>]> = tuples
        .into_iter()
        .map(|tuple| {
            gourd_assert_simple!(
                tuple.len() == variables.len(),
                "a tuple of length {} cannot be matched against {} variables",
                tuple.len(),
                variables.len()
            );
            tuple.into_boxed_slice()
        })
        .collect();

    Constraint::Table { variables, tuples }
}
