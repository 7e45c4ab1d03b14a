use crate::basic_types::Inconsistency;
use crate::basic_types::Narrowing;
use crate::basic_types::PropagationStatusCP;
use crate::containers::HashSet;
use crate::engine::propagation::PropagationContextMut;
use crate::variables::DomainId;

/// Forward checking for `all_different(variables)`: the value of every fixed variable is removed
/// from the others.
pub(crate) fn propagate_all_different(
    context: &mut PropagationContextMut<'_>,
    variables: &[DomainId],
) -> PropagationStatusCP {
    let mut fixed_values = HashSet::default();
    for &domain_id in variables {
        if let Some(value) = context.fixed_value(domain_id) {
            if !fixed_values.insert(value) {
                return Err(Inconsistency::Conflict);
            }
        }
    }

    let mut changed = false;
    for &domain_id in variables {
        if context.is_fixed(domain_id) {
            continue;
        }
        for &value in &fixed_values {
            changed |= context.remove_value(domain_id, value)?;
        }
    }

    // Pigeonhole: more variables than values in the union of the bounds.
    let (lowest, highest) = variables.iter().fold((i64::MAX, i64::MIN), |(low, high), &id| {
        (
            low.min(context.lower_bound(id) as i64),
            high.max(context.upper_bound(id) as i64),
        )
    });
    if !variables.is_empty() && (variables.len() as i64) > highest - lowest + 1 {
        return Err(Inconsistency::Conflict);
    }

    Ok(Narrowing::from_changed(changed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DomainStore;
    use crate::engine::IntegerDomain;

    #[test]
    fn fixed_values_are_removed_from_the_others() {
        let mut store = DomainStore::new(64);
        let a = store.grow(IntegerDomain::interval(1, 1).expect("non-empty"), None);
        let b = store.grow(IntegerDomain::interval(1, 3).expect("non-empty"), None);
        let c = store.grow(IntegerDomain::sparse([1, 3]).expect("non-empty"), None);
        let mut context = PropagationContextMut::new(&mut store);

        let status = propagate_all_different(&mut context, &[a, b, c]);

        assert_eq!(status, Ok(Narrowing::Narrowed));
        assert_eq!(store.fixed_value(c), Some(3));
        assert_eq!(store.iterate_domain(b).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn too_few_values_is_a_conflict() {
        let mut store = DomainStore::new(64);
        let ids = (0..3)
            .map(|_| store.grow(IntegerDomain::interval(0, 1).expect("non-empty"), None))
            .collect::<Vec<_>>();
        let mut context = PropagationContextMut::new(&mut store);

        assert_eq!(
            propagate_all_different(&mut context, &ids),
            Err(Inconsistency::Conflict)
        );
    }
}
