use std::fmt::Display;
use std::fmt::Formatter;

use crate::containers::HashMap;
use crate::variables::DomainId;

/// An immutable snapshot of the values of the tracked variables (and the objective, if any) at the
/// moment a solution was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    values: HashMap<DomainId, i32>,
    order: Box<[DomainId]>,
    objective_value: Option<i32>,
}

impl Assignment {
    pub(crate) fn new(
        entries: impl IntoIterator<Item = (DomainId, i32)>,
        objective_value: Option<i32>,
    ) -> Self {
        let mut values = HashMap::default();
        let mut order = Vec::new();

        for (domain_id, value) in entries {
            if values.insert(domain_id, value).is_none() {
                order.push(domain_id);
            }
        }

        Assignment {
            values,
            order: order.into_boxed_slice(),
            objective_value,
        }
    }

    /// The value of `domain_id`, or `None` if the variable was not recorded.
    pub fn value(&self, domain_id: DomainId) -> Option<i32> {
        self.values.get(&domain_id).copied()
    }

    pub fn objective_value(&self) -> Option<i32> {
        self.objective_value
    }

    /// The recorded variables with their values, in the order in which they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = (DomainId, i32)> + '_ {
        self.order
            .iter()
            .map(|domain_id| (*domain_id, self.values[domain_id]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, (domain_id, value)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{domain_id:?}={value}")?;
        }

        if let Some(objective_value) = self.objective_value {
            write!(f, " objective={objective_value}")?;
        }

        Ok(())
    }
}
