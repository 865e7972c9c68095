use list_view_core::model::common::SortDirection;
use list_view_core::model::list_filter::{
    ComparisonType, ListFilterCondition, StringMatch, ValueComparison,
};
use list_view_core::model::record::{RecordFilterValue, RecordListQuery};
use sea_orm::sea_query::{Expr, Func, IntoCondition, LikeExpr, SimpleExpr};
use sea_orm::{
    ColumnTrait, ColumnType, Condition, EntityTrait, IntoSimpleExpr, Iterable, Order,
    PrimaryKeyToColumn, QueryFilter, QueryOrder, QuerySelect, Select, Value,
};
use time::Date;

use crate::mapper::order_from_sort_direction;

/// Storage expression a record field is read from, with the type used to
/// bind filter values against it
#[derive(Clone, Debug)]
pub struct FieldColumn {
    pub expr: SimpleExpr,
    pub column_type: ColumnType,
}

impl FieldColumn {
    pub fn new(column: impl ColumnTrait) -> Self {
        Self {
            column_type: column.def().get_column_type().to_owned(),
            expr: column.into_simple_expr(),
        }
    }
}

pub trait FieldResolver {
    /// `None` for fields the storage does not know about
    fn resolve_field(&self, field: &str) -> Option<FieldColumn>;
}

pub trait SelectWithListQuery {
    /// applies all `query` declared constraints (filtering, sorting and pagination) on the query
    fn with_list_query(self, query: &RecordListQuery, fields: &impl FieldResolver) -> Self;
}

impl<T> SelectWithListQuery for Select<T>
where
    T: EntityTrait,
{
    fn with_list_query(self, query: &RecordListQuery, fields: &impl FieldResolver) -> Select<T> {
        let mut result = self;

        if let Some(condition) = query
            .filtering
            .as_ref()
            .and_then(|filter| get_filter_condition(filter, fields))
        {
            result = result.filter(condition);
        }

        if let Some(sorting) = &query.sorting {
            match fields.resolve_field(&sorting.column) {
                Some(column) => {
                    result = result.order_by(
                        column.expr,
                        order_from_sort_direction(
                            sorting.direction.unwrap_or(SortDirection::Ascending),
                        ),
                    );
                }
                None => tracing::warn!("Ignoring sort on unknown field `{}`", sorting.column),
            }
        }

        // rows equal on the sort field keep the same order on every page
        for key in T::PrimaryKey::iter() {
            result = result.order_by(key.into_column(), Order::Asc);
        }

        if let Some(pagination) = &query.pagination {
            result = result
                .offset(pagination.offset())
                .limit(u64::from(pagination.page_size));
        }

        result
    }
}

// helpers
fn get_filter_condition(
    filter_condition: &ListFilterCondition<RecordFilterValue>,
    fields: &impl FieldResolver,
) -> Option<Condition> {
    match filter_condition {
        ListFilterCondition::And(conditions) => {
            get_group_condition(Condition::all(), conditions, fields)
        }
        ListFilterCondition::Or(conditions) => {
            get_group_condition(Condition::any(), conditions, fields)
        }
        ListFilterCondition::Value(value) => get_value_condition(value, fields),
    }
}

/// `None` when no member translates into a condition
fn get_group_condition(
    mut result: Condition,
    conditions: &[ListFilterCondition<RecordFilterValue>],
    fields: &impl FieldResolver,
) -> Option<Condition> {
    let mut empty = true;
    for condition in conditions
        .iter()
        .filter_map(|condition| get_filter_condition(condition, fields))
    {
        result = result.add(condition);
        empty = false;
    }

    (!empty).then_some(result)
}

fn get_value_condition(
    value: &RecordFilterValue,
    fields: &impl FieldResolver,
) -> Option<Condition> {
    let Some(column) = fields.resolve_field(value.field()) else {
        tracing::warn!("Ignoring condition on unknown field `{}`", value.field());
        return None;
    };

    let expr = match value {
        RecordFilterValue::Text { value, .. } => get_string_match_condition(column.expr, value),
        RecordFilterValue::Equals { value, .. } => get_equals_condition(column, value),
        RecordFilterValue::Number { value, .. } => {
            get_comparison_condition(column.expr, value.comparison, value.value)
        }
        RecordFilterValue::Date { value, .. } => get_date_condition(&column, value),
    };

    Some(expr.into_condition())
}

/// Case-insensitive `LIKE`, wildcards in the searched value match literally
pub(crate) fn get_string_match_condition(expr: SimpleExpr, value: &StringMatch) -> SimpleExpr {
    let pattern = format!("%{}%", escape_like(&value.value.to_lowercase()));

    Expr::expr(Func::lower(expr)).like(LikeExpr::new(pattern).escape('\\'))
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// `eq` with the value bound as the column's type; a value that cannot be
/// of that type matches nothing
pub(crate) fn get_equals_condition(column: FieldColumn, value: &str) -> SimpleExpr {
    match typed_value(&column.column_type, value) {
        Some(value) => Expr::expr(column.expr).eq(value),
        None => {
            tracing::debug!("`{value}` not comparable with {:?}", column.column_type);
            never()
        }
    }
}

fn typed_value(column_type: &ColumnType, value: &str) -> Option<Value> {
    match column_type {
        ColumnType::TinyInteger
        | ColumnType::SmallInteger
        | ColumnType::Integer
        | ColumnType::BigInteger
        | ColumnType::TinyUnsigned
        | ColumnType::SmallUnsigned
        | ColumnType::Unsigned
        | ColumnType::BigUnsigned => value.parse::<i64>().ok().map(Value::from),
        ColumnType::Float | ColumnType::Double | ColumnType::Decimal(_) => {
            value.parse::<f64>().ok().map(Value::from)
        }
        ColumnType::Boolean => match value {
            "1" | "true" => Some(true.into()),
            "0" | "false" => Some(false.into()),
            _ => None,
        },
        _ => Some(value.into()),
    }
}

pub(crate) fn get_comparison_condition(
    expr: SimpleExpr,
    comparison: ComparisonType,
    value: impl Into<Value>,
) -> SimpleExpr {
    let value: Value = value.into();
    let expr = Expr::expr(expr);
    match comparison {
        ComparisonType::LessThanOrEqual => expr.lte(value),
        ComparisonType::GreaterThanOrEqual => expr.gte(value),
    }
}

/// Day granular comparison, a date covers `[day 00:00, next day 00:00)` of
/// timestamp columns
fn get_date_condition(column: &FieldColumn, comparison: &ValueComparison<Date>) -> SimpleExpr {
    let start = day_start(&column.column_type, Some(comparison.value));
    let next_start = day_start(&column.column_type, comparison.value.next_day());

    let at_or_after = |bound: Option<Value>| match bound {
        Some(bound) => Expr::expr(column.expr.to_owned()).gte(bound),
        None => never(),
    };
    let before = |bound: Option<Value>| match bound {
        Some(bound) => Expr::expr(column.expr.to_owned()).lt(bound),
        None => always(),
    };

    match comparison.comparison {
        ComparisonType::GreaterThanOrEqual => at_or_after(start),
        ComparisonType::LessThanOrEqual => before(next_start),
    }
}

fn day_start(column_type: &ColumnType, date: Option<Date>) -> Option<Value> {
    let date = date?;
    Some(match column_type {
        ColumnType::Date => date.into(),
        ColumnType::DateTime | ColumnType::Timestamp => date.midnight().into(),
        ColumnType::TimestampWithTimeZone => date.midnight().assume_utc().into(),
        // ISO dates stored as text compare chronologically
        _ => date.to_string().into(),
    })
}

fn always() -> SimpleExpr {
    Expr::val(1).eq(1)
}

fn never() -> SimpleExpr {
    Expr::val(1).eq(0)
}
