use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use strum::Display;
use time::Date;
use time::macros::format_description;

use super::dto::FilterInput;
use crate::model::list_filter::{ListFilterCondition, ValueComparison};
use crate::model::record::RecordFilterValue;

/// value -> label
pub type OptionMap = IndexMap<String, String>;
pub type OptionSupplier = dyn Fn() -> OptionMap + Send + Sync;
pub type FilterPredicate =
    dyn Fn(&FilterInput) -> Option<ListFilterCondition<RecordFilterValue>> + Send + Sync;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Display)]
pub enum FilterKind {
    Text,
    Select,
    DateRange,
    NumericRange,
    Custom,
}

#[derive(Clone, Default)]
pub enum FilterOptions {
    #[default]
    None,
    Static(OptionMap),
    /// Evaluated lazily, once per resolution
    Deferred(Arc<OptionSupplier>),
}

impl FilterOptions {
    pub fn deferred(supplier: impl Fn() -> OptionMap + Send + Sync + 'static) -> Self {
        Self::Deferred(Arc::new(supplier))
    }

    pub(crate) fn evaluate(&self) -> Option<OptionMap> {
        match self {
            Self::None => None,
            Self::Static(options) => Some(options.to_owned()),
            Self::Deferred(supplier) => Some(supplier()),
        }
    }
}

impl From<OptionMap> for FilterOptions {
    fn from(options: OptionMap) -> Self {
        Self::Static(options)
    }
}

impl fmt::Debug for FilterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Static(options) => f.debug_tuple("Static").field(options).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// A query refinement, read from the `filter_<key>` request parameter
#[derive(Clone)]
pub struct Filter {
    pub(crate) key: String,
    pub(crate) field: String,
    pub(crate) label: String,
    pub(crate) kind: FilterKind,
    pub(crate) options: FilterOptions,
    pub(crate) predicate: Option<Arc<FilterPredicate>>,
}

impl Filter {
    pub(crate) fn new(key: String, label: String, options: FilterOptions, kind: FilterKind) -> Self {
        Self {
            field: key.to_owned(),
            key,
            label,
            kind,
            options,
            predicate: None,
        }
    }

    /// Targets another field than the one named by the filter key
    pub fn on_field(&mut self, field: impl Into<String>) -> &mut Self {
        self.field = field.into();
        self
    }

    pub fn label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = label.into();
        self
    }

    pub fn options(&mut self, options: impl Into<FilterOptions>) -> &mut Self {
        self.options = options.into();
        self
    }

    pub fn predicate<F>(&mut self, predicate: F) -> &mut Self
    where
        F: Fn(&FilterInput) -> Option<ListFilterCondition<RecordFilterValue>>
            + Send
            + Sync
            + 'static,
    {
        self.predicate = Some(Arc::new(predicate));
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn kind(&self) -> FilterKind {
        self.kind
    }

    /// Translates a (normalized) request input into a condition; input of
    /// the wrong shape for the filter kind yields `None`
    pub(crate) fn condition(
        &self,
        input: &FilterInput,
    ) -> Option<ListFilterCondition<RecordFilterValue>> {
        match (self.kind, input) {
            (FilterKind::Text, FilterInput::Value(value)) => {
                Some(RecordFilterValue::contains(&self.field, value).into())
            }
            (FilterKind::Select, FilterInput::Value(value)) => {
                Some(RecordFilterValue::equals(&self.field, value).into())
            }
            (FilterKind::DateRange, FilterInput::Range { from, to }) => range_condition(
                from.as_deref().and_then(parse_date),
                to.as_deref().and_then(parse_date),
                |value| RecordFilterValue::Date {
                    field: self.field.to_owned(),
                    value,
                },
            ),
            (FilterKind::NumericRange, FilterInput::Range { from, to }) => range_condition(
                from.as_deref().and_then(parse_number),
                to.as_deref().and_then(parse_number),
                |value| RecordFilterValue::Number {
                    field: self.field.to_owned(),
                    value,
                },
            ),
            (FilterKind::Custom, input) => self
                .predicate
                .as_ref()
                .and_then(|predicate| predicate(input)),
            _ => None,
        }
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("key", &self.key)
            .field("field", &self.field)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("options", &self.options)
            .field("predicate", &self.predicate.is_some())
            .finish()
    }
}

/// Inclusive range, either bound may be missing
fn range_condition<T>(
    from: Option<T>,
    to: Option<T>,
    to_filter_value: impl Fn(ValueComparison<T>) -> RecordFilterValue,
) -> Option<ListFilterCondition<RecordFilterValue>> {
    ListFilterCondition::all(
        [
            from.map(ValueComparison::at_least),
            to.map(ValueComparison::at_most),
        ]
        .into_iter()
        .flatten()
        .map(|comparison| to_filter_value(comparison).into()),
    )
}

fn parse_date(value: &str) -> Option<Date> {
    let date = Date::parse(value, format_description!("[year]-[month]-[day]")).ok();
    if date.is_none() {
        tracing::debug!("Ignoring unparsable date bound `{value}`");
    }
    date
}

fn parse_number(value: &str) -> Option<f64> {
    let number = value.parse::<f64>().ok().filter(|number| number.is_finite());
    if number.is_none() {
        tracing::debug!("Ignoring unparsable numeric bound `{value}`");
    }
    number
}
