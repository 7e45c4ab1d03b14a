use itertools::Either;
use itertools::Itertools;

use super::EmptyDomain;

/// The values a variable can still take.
///
/// A domain is never empty; every narrowing which would empty it returns [`EmptyDomain`] instead
/// and leaves the domain untouched. The narrowing operations return `Ok(None)` when the domain
/// does not change and `Ok(Some(_))` with the narrowed domain otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum IntegerDomain {
    Interval { lower_bound: i32, upper_bound: i32 },
    /// Sorted, without duplicates, and never contiguous.
    Sparse(Vec<i32>),
    /// An interval with values removed from its interior. The holes are sorted, without
    /// duplicates, never empty, and lie strictly between the bounds.
    Holes {
        lower_bound: i32,
        upper_bound: i32,
        holes: Vec<i32>,
    },
}

impl IntegerDomain {
    pub(crate) fn interval(lower_bound: i32, upper_bound: i32) -> Option<IntegerDomain> {
        (lower_bound <= upper_bound).then_some(IntegerDomain::Interval {
            lower_bound,
            upper_bound,
        })
    }

    pub(crate) fn sparse(values: impl IntoIterator<Item = i32>) -> Option<IntegerDomain> {
        Self::from_sorted(values.into_iter().sorted_unstable().dedup().collect())
    }

    fn from_sorted(values: Vec<i32>) -> Option<IntegerDomain> {
        let first = *values.first()?;
        let last = *values.last()?;

        if (last as i64 - first as i64 + 1) as usize == values.len() {
            Some(IntegerDomain::Interval {
                lower_bound: first,
                upper_bound: last,
            })
        } else {
            Some(IntegerDomain::Sparse(values))
        }
    }

    /// The values of `[lower_bound, upper_bound]` except for the sorted `holes`; bounds which fall
    /// in a hole move inwards.
    fn from_holes(
        mut lower_bound: i32,
        mut upper_bound: i32,
        holes: &[i32],
    ) -> Option<IntegerDomain> {
        if lower_bound > upper_bound {
            return None;
        }

        let mut start = holes.partition_point(|&hole| hole < lower_bound);
        let mut end = holes.partition_point(|&hole| hole <= upper_bound);

        while start < end && holes[start] == lower_bound {
            if lower_bound == upper_bound {
                return None;
            }
            lower_bound += 1;
            start += 1;
        }
        while start < end && holes[end - 1] == upper_bound {
            if lower_bound == upper_bound {
                return None;
            }
            upper_bound -= 1;
            end -= 1;
        }

        if start == end {
            Some(IntegerDomain::Interval {
                lower_bound,
                upper_bound,
            })
        } else {
            Some(IntegerDomain::Holes {
                lower_bound,
                upper_bound,
                holes: holes[start..end].to_vec(),
            })
        }
    }

    pub(crate) fn lower_bound(&self) -> i32 {
        match self {
            IntegerDomain::Interval { lower_bound, .. }
            | IntegerDomain::Holes { lower_bound, .. } => *lower_bound,
            IntegerDomain::Sparse(values) => values[0],
        }
    }

    pub(crate) fn upper_bound(&self) -> i32 {
        match self {
            IntegerDomain::Interval { upper_bound, .. }
            | IntegerDomain::Holes { upper_bound, .. } => *upper_bound,
            IntegerDomain::Sparse(values) => values[values.len() - 1],
        }
    }

    pub(crate) fn size(&self) -> usize {
        match self {
            IntegerDomain::Interval {
                lower_bound,
                upper_bound,
            } => (*upper_bound as i64 - *lower_bound as i64 + 1) as usize,
            IntegerDomain::Sparse(values) => values.len(),
            IntegerDomain::Holes {
                lower_bound,
                upper_bound,
                holes,
            } => (*upper_bound as i64 - *lower_bound as i64 + 1) as usize - holes.len(),
        }
    }

    pub(crate) fn is_fixed(&self) -> bool {
        self.lower_bound() == self.upper_bound()
    }

    pub(crate) fn contains(&self, value: i32) -> bool {
        match self {
            IntegerDomain::Interval {
                lower_bound,
                upper_bound,
            } => (*lower_bound..=*upper_bound).contains(&value),
            IntegerDomain::Sparse(values) => values.binary_search(&value).is_ok(),
            IntegerDomain::Holes {
                lower_bound,
                upper_bound,
                holes,
            } => {
                (*lower_bound..=*upper_bound).contains(&value)
                    && holes.binary_search(&value).is_err()
            }
        }
    }

    /// The values in the domain in increasing order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        match self {
            IntegerDomain::Interval {
                lower_bound,
                upper_bound,
            } => Either::Left(Either::Left(*lower_bound..=*upper_bound)),
            IntegerDomain::Sparse(values) => Either::Right(values.iter().copied()),
            IntegerDomain::Holes {
                lower_bound,
                upper_bound,
                holes,
            } => Either::Left(Either::Right(
                (*lower_bound..=*upper_bound)
                    .filter(move |value| holes.binary_search(value).is_err()),
            )),
        }
    }

    pub(crate) fn assign(&self, value: i32) -> Result<Option<IntegerDomain>, EmptyDomain> {
        if !self.contains(value) {
            return Err(EmptyDomain);
        }
        if self.is_fixed() {
            return Ok(None);
        }

        Ok(Some(IntegerDomain::Interval {
            lower_bound: value,
            upper_bound: value,
        }))
    }

    pub(crate) fn restrict_min(&self, bound: i32) -> Result<Option<IntegerDomain>, EmptyDomain> {
        if bound <= self.lower_bound() {
            return Ok(None);
        }
        if bound > self.upper_bound() {
            return Err(EmptyDomain);
        }

        let narrowed = match self {
            IntegerDomain::Interval { upper_bound, .. } => IntegerDomain::Interval {
                lower_bound: bound,
                upper_bound: *upper_bound,
            },
            IntegerDomain::Sparse(values) => Self::from_sorted(
                values
                    .iter()
                    .copied()
                    .filter(|&value| value >= bound)
                    .collect(),
            )
            .ok_or(EmptyDomain)?,
            IntegerDomain::Holes {
                upper_bound, holes, ..
            } => Self::from_holes(bound, *upper_bound, holes).ok_or(EmptyDomain)?,
        };

        Ok(Some(narrowed))
    }

    pub(crate) fn restrict_max(&self, bound: i32) -> Result<Option<IntegerDomain>, EmptyDomain> {
        if bound >= self.upper_bound() {
            return Ok(None);
        }
        if bound < self.lower_bound() {
            return Err(EmptyDomain);
        }

        let narrowed = match self {
            IntegerDomain::Interval { lower_bound, .. } => IntegerDomain::Interval {
                lower_bound: *lower_bound,
                upper_bound: bound,
            },
            IntegerDomain::Sparse(values) => Self::from_sorted(
                values
                    .iter()
                    .copied()
                    .filter(|&value| value <= bound)
                    .collect(),
            )
            .ok_or(EmptyDomain)?,
            IntegerDomain::Holes {
                lower_bound, holes, ..
            } => Self::from_holes(*lower_bound, bound, holes).ok_or(EmptyDomain)?,
        };

        Ok(Some(narrowed))
    }

    /// Keeps only the values which also occur in `values`, which has to be sorted and free of
    /// duplicates.
    pub(crate) fn retain_values(
        &self,
        values: &[i32],
    ) -> Result<Option<IntegerDomain>, EmptyDomain> {
        let kept = values
            .iter()
            .copied()
            .filter(|&value| self.contains(value))
            .collect::<Vec<_>>();
        if kept.len() == self.size() {
            return Ok(None);
        }

        Self::from_sorted(kept).map(Some).ok_or(EmptyDomain)
    }

    /// Removes `value` from the domain.
    ///
    /// An interval with at most `sparse_domain_limit` values becomes an explicit value set when a
    /// hole is punched into it; larger intervals keep their bounds and record the hole.
    pub(crate) fn remove_value(
        &self,
        value: i32,
        sparse_domain_limit: usize,
    ) -> Result<Option<IntegerDomain>, EmptyDomain> {
        if !self.contains(value) {
            return Ok(None);
        }
        if self.is_fixed() {
            return Err(EmptyDomain);
        }

        match self {
            IntegerDomain::Interval {
                lower_bound,
                upper_bound,
            } => {
                if value == *lower_bound {
                    Ok(Some(IntegerDomain::Interval {
                        lower_bound: value + 1,
                        upper_bound: *upper_bound,
                    }))
                } else if value == *upper_bound {
                    Ok(Some(IntegerDomain::Interval {
                        lower_bound: *lower_bound,
                        upper_bound: value - 1,
                    }))
                } else if self.size() <= sparse_domain_limit {
                    Ok(Some(IntegerDomain::Sparse(
                        self.iter().filter(|&other| other != value).collect(),
                    )))
                } else {
                    Ok(Some(IntegerDomain::Holes {
                        lower_bound: *lower_bound,
                        upper_bound: *upper_bound,
                        holes: vec![value],
                    }))
                }
            }
            IntegerDomain::Holes {
                lower_bound,
                upper_bound,
                holes,
            } => {
                let mut holes = holes.clone();
                let position = holes.partition_point(|&hole| hole < value);
                holes.insert(position, value);
                Self::from_holes(*lower_bound, *upper_bound, &holes)
                    .map(Some)
                    .ok_or(EmptyDomain)
            }
            IntegerDomain::Sparse(values) => Self::from_sorted(
                values
                    .iter()
                    .copied()
                    .filter(|&other| other != value)
                    .collect(),
            )
            .map(Some)
            .ok_or(EmptyDomain),
        }
    }
}
