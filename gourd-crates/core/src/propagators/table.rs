use crate::basic_types::Inconsistency;
use crate::basic_types::Narrowing;
use crate::basic_types::PropagationStatusCP;
use crate::containers::HashSet;
use crate::engine::propagation::PropagationContextMut;
use crate::variables::DomainId;

/// Generalised arc consistency for a positive table by scanning the tuples: a value is kept only
/// if some tuple which is valid under the current domains uses it.
pub(crate) fn propagate_table(
    context: &mut PropagationContextMut<'_>,
    variables: &[DomainId],
    tuples: &[Box<[i32]>],
) -> PropagationStatusCP {
    let mut supports: Vec<HashSet<i32>> = vec![HashSet::default(); variables.len()];
    let mut any_valid = false;

    for tuple in tuples {
        let is_valid = variables
            .iter()
            .zip(tuple.iter())
            .all(|(&domain_id, &value)| context.contains(domain_id, value));
        if !is_valid {
            continue;
        }

        any_valid = true;
        for (support, &value) in supports.iter_mut().zip(tuple.iter()) {
            let _ = support.insert(value);
        }
    }

    if !any_valid {
        return Err(Inconsistency::Conflict);
    }

    let mut changed = false;
    for (&domain_id, support) in variables.iter().zip(supports) {
        changed |= context.retain_values(domain_id, support)?;
    }

    Ok(Narrowing::from_changed(changed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::DomainStore;
    use crate::engine::IntegerDomain;

    fn tuples(rows: &[&[i32]]) -> Vec<Box<[i32]>> {
        rows.iter().map(|row| row.to_vec().into_boxed_slice()).collect()
    }

    #[test]
    fn unsupported_values_are_removed() {
        let mut store = DomainStore::new(64);
        let x = store.grow(IntegerDomain::interval(0, 3).expect("non-empty"), None);
        let y = store.grow(IntegerDomain::interval(0, 3).expect("non-empty"), None);
        let _ = store.remove_value(y, 2).expect("non-empty");
        let mut context = PropagationContextMut::new(&mut store);

        let status = propagate_table(
            &mut context,
            &[x, y],
            &tuples(&[&[0, 1], &[1, 2], &[3, 3], &[3, 0]]),
        );

        assert_eq!(status, Ok(Narrowing::Narrowed));
        assert_eq!(store.iterate_domain(x).collect::<Vec<_>>(), vec![0, 3]);
        assert_eq!(store.iterate_domain(y).collect::<Vec<_>>(), vec![0, 1, 3]);
    }

    #[test]
    fn no_valid_tuple_is_a_conflict() {
        let mut store = DomainStore::new(64);
        let x = store.grow(IntegerDomain::interval(5, 6).expect("non-empty"), None);
        let mut context = PropagationContextMut::new(&mut store);

        assert_eq!(
            propagate_table(&mut context, &[x], &tuples(&[&[1], &[2]])),
            Err(Inconsistency::Conflict)
        );
    }

    #[test]
    fn wide_domains_are_narrowed_to_the_supported_values() {
        let mut store = DomainStore::new(64);
        let x = store.grow(
            IntegerDomain::interval(-2_000_000_000, 2_000_000_000).expect("non-empty"),
            None,
        );
        let y = store.grow(IntegerDomain::interval(0, 1).expect("non-empty"), None);
        let mut context = PropagationContextMut::new(&mut store);

        let status = propagate_table(
            &mut context,
            &[x, y],
            &tuples(&[&[-2_000_000_000, 0], &[5, 1], &[9, 2]]),
        );

        assert_eq!(status, Ok(Narrowing::Narrowed));
        assert_eq!(
            store.iterate_domain(x).collect::<Vec<_>>(),
            vec![-2_000_000_000, 5]
        );
        assert_eq!(store.size(y), 2);
    }
}
