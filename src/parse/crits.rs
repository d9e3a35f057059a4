use crate::common::Int;
use serde::Serialize;
use std::collections::BTreeSet;
use std::str::FromStr;

/// Face values that count as critical hits. Only membership matters.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CritSet(BTreeSet<Int>);

impl CritSet {
    pub fn contains(&self, value: Int) -> bool {
        self.0.contains(&value)
    }

    pub fn iter(&self) -> impl Iterator<Item = Int> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Int> for CritSet {
    fn from_iter<I: IntoIterator<Item = Int>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for CritSet {
    type Err = ParseCritsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(|segment| {
                let segment = segment.trim();
                segment
                    .parse::<Int>()
                    .map_err(|_| ParseCritsError(segment.to_string()))
            })
            .collect()
    }
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[error("{0:?} is not an integer")]
pub struct ParseCritsError(pub String);
