use crate::basic_types::Inconsistency;
use crate::basic_types::Narrowing;
use crate::basic_types::PropagationStatusCP;
use crate::engine::propagation::PropagationContextMut;
use crate::math::num_ext::NumExt;
use crate::variables::DomainId;

fn minimum_contribution(
    context: &PropagationContextMut<'_>,
    weight: i64,
    domain_id: DomainId,
) -> i64 {
    if weight >= 0 {
        weight * context.lower_bound(domain_id) as i64
    } else {
        weight * context.upper_bound(domain_id) as i64
    }
}

fn to_bound(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Bounds reasoning for `sum(weight * x) <= rhs`.
pub(crate) fn propagate_linear_less_or_equal(
    context: &mut PropagationContextMut<'_>,
    terms: &[(i32, DomainId)],
    rhs: i32,
) -> PropagationStatusCP {
    propagate_weighted_sum_at_most(
        context,
        terms
            .iter()
            .map(|&(weight, domain_id)| (weight as i64, domain_id)),
        rhs as i64,
    )
}

/// Bounds reasoning for `sum(weight * x) == rhs`, as the conjunction of both inequalities.
pub(crate) fn propagate_linear_equals(
    context: &mut PropagationContextMut<'_>,
    terms: &[(i32, DomainId)],
    rhs: i32,
) -> PropagationStatusCP {
    let upper = propagate_linear_less_or_equal(context, terms, rhs)?;

    // Negated in i64, as `-i32::MIN` does not fit an i32.
    let lower = propagate_weighted_sum_at_most(
        context,
        terms
            .iter()
            .map(|&(weight, domain_id)| (-(weight as i64), domain_id)),
        -(rhs as i64),
    )?;

    Ok(upper.merge(lower))
}

fn propagate_weighted_sum_at_most(
    context: &mut PropagationContextMut<'_>,
    terms: impl Iterator<Item = (i64, DomainId)> + Clone,
    rhs: i64,
) -> PropagationStatusCP {
    let minimum_sum: i64 = terms
        .clone()
        .map(|(weight, domain_id)| minimum_contribution(context, weight, domain_id))
        .sum();

    if minimum_sum > rhs {
        return Err(Inconsistency::Conflict);
    }

    let mut changed = false;
    for (weight, domain_id) in terms {
        if weight == 0 {
            continue;
        }

        // The most this term can take up while every other term is at its minimum. The minimum
        // of the other terms is unaffected by narrowing this term in the direction below.
        let slack = rhs - (minimum_sum - minimum_contribution(context, weight, domain_id));

        if weight > 0 {
            let bound = NumExt::div_floor(slack, weight);
            changed |= context.restrict_max(domain_id, to_bound(bound))?;
        } else {
            let bound = NumExt::div_ceil(slack, weight);
            changed |= context.restrict_min(domain_id, to_bound(bound))?;
        }
    }

    Ok(Narrowing::from_changed(changed))
}
