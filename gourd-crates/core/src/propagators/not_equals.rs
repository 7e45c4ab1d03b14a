use crate::basic_types::Inconsistency;
use crate::basic_types::Narrowing;
use crate::basic_types::PropagationStatusCP;
use crate::engine::propagation::PropagationContextMut;
use crate::variables::DomainId;

/// Propagates `x != y + offset` once either side is fixed.
pub(crate) fn propagate_not_equals(
    context: &mut PropagationContextMut<'_>,
    x: DomainId,
    y: DomainId,
    offset: i32,
) -> PropagationStatusCP {
    // Large intervals cannot hold holes, so the relation is checked once both sides are fixed.
    if let (Some(x_value), Some(y_value)) = (context.fixed_value(x), context.fixed_value(y)) {
        return if x_value as i64 == y_value as i64 + offset as i64 {
            Err(Inconsistency::Conflict)
        } else {
            Ok(Narrowing::Unchanged)
        };
    }

    let mut changed = false;
    if let Some(x_value) = context.fixed_value(x) {
        if let Ok(forbidden) = i32::try_from(x_value as i64 - offset as i64) {
            changed |= context.remove_value(y, forbidden)?;
        }
    }
    if let Some(y_value) = context.fixed_value(y) {
        if let Ok(forbidden) = i32::try_from(y_value as i64 + offset as i64) {
            changed |= context.remove_value(x, forbidden)?;
        }
    }

    Ok(Narrowing::from_changed(changed))
}
