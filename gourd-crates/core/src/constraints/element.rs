use super::Constraint;
use crate::variables::DomainId;

/// Creates the [`Constraint`] `array[index] == result`, where `index` is zero-based.
pub fn element(index: DomainId, array: impl Into<Box<[i32]>>, result: DomainId) -> Constraint {
    Constraint::Element {
        index,
        array: array.into(),
        result,
    }
}
