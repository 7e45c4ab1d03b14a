use crate::basic_types::Narrowing;
use crate::basic_types::PropagationStatusCP;
use crate::containers::HashSet;
use crate::engine::propagation::PropagationContextMut;
use crate::variables::DomainId;

/// Propagates `result == array[index]` for a constant array; `index` is zero-based.
pub(crate) fn propagate_element(
    context: &mut PropagationContextMut<'_>,
    index: DomainId,
    array: &[i32],
    result: DomainId,
) -> PropagationStatusCP {
    let mut changed = context.restrict_min(index, 0)?;
    changed |= context.restrict_max(index, array.len() as i32 - 1)?;

    let unsupported_indices = context
        .iterate_domain(index)
        .filter(|&position| !context.contains(result, array[position as usize]))
        .collect::<Vec<_>>();
    for position in unsupported_indices {
        changed |= context.remove_value(index, position)?;
    }

    let reachable = context
        .iterate_domain(index)
        .map(|position| array[position as usize])
        .collect::<HashSet<_>>();
    changed |= context.retain_values(result, reachable)?;

    Ok(Narrowing::from_changed(changed))
}
