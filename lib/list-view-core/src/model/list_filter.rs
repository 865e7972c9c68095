/// Case-insensitive substring match against a textual field
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StringMatch {
    pub value: String,
}

impl StringMatch {
    pub fn contains(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Inclusive bound of a range filter
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComparisonType {
    LessThanOrEqual,
    GreaterThanOrEqual,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValueComparison<T> {
    pub comparison: ComparisonType,
    pub value: T,
}

impl<T> ValueComparison<T> {
    pub fn at_least(value: T) -> Self {
        Self {
            comparison: ComparisonType::GreaterThanOrEqual,
            value,
        }
    }

    pub fn at_most(value: T) -> Self {
        Self {
            comparison: ComparisonType::LessThanOrEqual,
            value,
        }
    }
}

pub trait ListFilterValue {
    fn condition(self) -> ListFilterCondition<Self>
    where
        Self: Sized,
    {
        ListFilterCondition::Value(self)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ListFilterCondition<FV: ListFilterValue> {
    And(Vec<ListFilterCondition<FV>>),
    Or(Vec<ListFilterCondition<FV>>),
    Value(FV),
}

impl<FV: ListFilterValue> ListFilterCondition<FV> {
    /// An empty `And`/`Or` group places no constraint and is skipped when
    /// translated into a storage query
    pub fn is_empty(&self) -> bool {
        match self {
            Self::And(conditions) | Self::Or(conditions) => {
                conditions.iter().all(ListFilterCondition::is_empty)
            }
            Self::Value(_) => false,
        }
    }

    /// Conjunction of all non-empty `conditions`, `None` if nothing remains
    pub fn all(conditions: impl IntoIterator<Item = Self>) -> Option<Self> {
        let mut conditions: Vec<Self> = conditions
            .into_iter()
            .filter(|condition| !condition.is_empty())
            .collect();

        match conditions.len() {
            0 => None,
            1 => conditions.pop(),
            _ => Some(Self::And(conditions)),
        }
    }
}

// empty conjunction, ignored when building the final query
impl<FV: ListFilterValue> Default for ListFilterCondition<FV> {
    fn default() -> Self {
        Self::And(vec![])
    }
}

impl<FV: ListFilterValue> From<FV> for ListFilterCondition<FV> {
    fn from(value: FV) -> Self {
        Self::Value(value)
    }
}

impl<FV: ListFilterValue> std::ops::BitAnd<ListFilterCondition<FV>> for ListFilterCondition<FV> {
    type Output = Self;
    fn bitand(self, rhs: ListFilterCondition<FV>) -> Self::Output {
        match (self, rhs) {
            (Self::And(mut lhs), Self::And(rhs)) => {
                lhs.extend(rhs);
                Self::And(lhs)
            }
            (Self::And(mut lhs), rhs) => {
                lhs.push(rhs);
                Self::And(lhs)
            }
            (lhs, rhs) => Self::And(vec![lhs, rhs]),
        }
    }
}

impl<FV: ListFilterValue> std::ops::BitAnd<Option<ListFilterCondition<FV>>>
    for ListFilterCondition<FV>
{
    type Output = Self;
    fn bitand(self, rhs: Option<ListFilterCondition<FV>>) -> Self::Output {
        match rhs {
            Some(rhs) => self & rhs,
            None => self,
        }
    }
}

impl<FV: ListFilterValue> std::ops::BitOr<ListFilterCondition<FV>> for ListFilterCondition<FV> {
    type Output = Self;
    fn bitor(self, rhs: ListFilterCondition<FV>) -> Self::Output {
        match (self, rhs) {
            (Self::Or(mut lhs), Self::Or(rhs)) => {
                lhs.extend(rhs);
                Self::Or(lhs)
            }
            (Self::Or(mut lhs), rhs) => {
                lhs.push(rhs);
                Self::Or(lhs)
            }
            (lhs, rhs) => Self::Or(vec![lhs, rhs]),
        }
    }
}
