//! Routes of assumptions.

use crate::structures::assumption::Assumption;

/// The assumptions drawn for a single constraint-graph file, in the order drawn.
///
/// Routes are built by [sample_route](crate::procedures::sample::sample_route), which draws exactly [ROUTE_LENGTH](crate::config::defaults::ROUTE_LENGTH) assumptions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Route {
    assumptions: Vec<Assumption>,
}

impl Route {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            assumptions: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, assumption: Assumption) {
        self.assumptions.push(assumption);
    }

    pub fn len(&self) -> usize {
        self.assumptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assumptions.is_empty()
    }

    pub fn assumptions(&self) -> &[Assumption] {
        &self.assumptions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assumption> {
        self.assumptions.iter()
    }
}

impl<'r> IntoIterator for &'r Route {
    type Item = &'r Assumption;
    type IntoIter = std::slice::Iter<'r, Assumption>;

    fn into_iter(self) -> Self::IntoIter {
        self.assumptions.iter()
    }
}

impl FromIterator<Assumption> for Route {
    fn from_iter<I: IntoIterator<Item = Assumption>>(iter: I) -> Self {
        Self {
            assumptions: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut assumptions = self.assumptions.iter();
        if let Some(first) = assumptions.next() {
            write!(f, "{first}")?;
            for assumption in assumptions {
                write!(f, " {assumption}")?;
            }
        }
        Ok(())
    }
}
