use crate::basic_types::Narrowing;
use crate::basic_types::PropagationStatusCP;
use crate::engine::propagation::PropagationContextMut;
use crate::variables::DomainId;

/// Bounds reasoning for `result == max(variables)`.
pub(crate) fn propagate_maximum(
    context: &mut PropagationContextMut<'_>,
    variables: &[DomainId],
    result: DomainId,
) -> PropagationStatusCP {
    let Some(highest_lower_bound) = variables.iter().map(|&id| context.lower_bound(id)).max()
    else {
        return Ok(Narrowing::Unchanged);
    };
    let highest_upper_bound = variables
        .iter()
        .map(|&id| context.upper_bound(id))
        .max()
        .unwrap_or(highest_lower_bound);

    let mut changed = context.restrict_min(result, highest_lower_bound)?;
    changed |= context.restrict_max(result, highest_upper_bound)?;

    let result_upper_bound = context.upper_bound(result);
    for &domain_id in variables {
        changed |= context.restrict_max(domain_id, result_upper_bound)?;
    }

    // When only one variable can still reach the lower bound of the result, it has to.
    let result_lower_bound = context.lower_bound(result);
    let mut candidates = variables
        .iter()
        .filter(|&&id| context.upper_bound(id) >= result_lower_bound);
    if let (Some(&only), None) = (candidates.next(), candidates.next()) {
        changed |= context.restrict_min(only, result_lower_bound)?;
    }

    Ok(Narrowing::from_changed(changed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DomainStore;
    use crate::engine::IntegerDomain;

    #[test]
    fn result_is_bounded_by_the_variables() {
        let mut store = DomainStore::new(64);
        let a = store.grow(IntegerDomain::interval(1, 4).expect("non-empty"), None);
        let b = store.grow(IntegerDomain::interval(3, 6).expect("non-empty"), None);
        let result = store.grow(IntegerDomain::interval(0, 5).expect("non-empty"), None);
        let mut context = PropagationContextMut::new(&mut store);

        let status = propagate_maximum(&mut context, &[a, b], result);

        assert_eq!(status, Ok(Narrowing::Narrowed));
        assert_eq!(store.lower_bound(result), 3);
        assert_eq!(store.upper_bound(b), 5);
        assert_eq!(store.upper_bound(a), 4);
    }

    #[test]
    fn the_only_candidate_is_raised_to_the_result() {
        let mut store = DomainStore::new(64);
        let a = store.grow(IntegerDomain::interval(0, 2).expect("non-empty"), None);
        let b = store.grow(IntegerDomain::interval(0, 9).expect("non-empty"), None);
        let result = store.grow(IntegerDomain::interval(5, 9).expect("non-empty"), None);
        let mut context = PropagationContextMut::new(&mut store);

        let _ = propagate_maximum(&mut context, &[a, b], result).expect("consistent");

        assert_eq!(store.lower_bound(b), 5);
    }
}
