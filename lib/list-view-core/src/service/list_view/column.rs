use std::fmt;
use std::sync::Arc;

use convert_case::{Case, Casing};
use serde_json::Value;

use super::action::RowAction;
use crate::model::record::Record;

pub type FormatterFn = dyn Fn(&Value, &Record) -> Result<Value, anyhow::Error> + Send + Sync;

/// A displayed record attribute.
///
/// Every mutator replaces the previous setting and hands back the same
/// column, so declarations chain: `view.column("name", None).sortable().searchable()`.
#[derive(Clone)]
pub struct Column {
    pub(crate) field: String,
    pub(crate) label: String,
    pub(crate) sortable: bool,
    pub(crate) searchable: bool,
    pub(crate) formatter: Option<Arc<FormatterFn>>,
    pub(crate) row_actions: Vec<RowAction>,
}

impl Column {
    pub(crate) fn new(field: String, label: Option<String>) -> Self {
        Self {
            label: label.unwrap_or_else(|| default_label(&field)),
            field,
            sortable: false,
            searchable: false,
            formatter: None,
            row_actions: vec![],
        }
    }

    pub fn label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = label.into();
        self
    }

    pub fn sortable(&mut self) -> &mut Self {
        self.sortable = true;
        self
    }

    pub fn searchable(&mut self) -> &mut Self {
        self.searchable = true;
        self
    }

    /// Replaces the raw value with `formatter(raw, record)`
    pub fn display<F>(&mut self, formatter: F) -> &mut Self
    where
        F: Fn(&Value, &Record) -> Value + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(
            move |value: &Value, record: &Record| -> Result<Value, anyhow::Error> {
                Ok(formatter(value, record))
            },
        ));
        self
    }

    /// Fallible variant of [`Column::display`]; an error aborts the resolution
    pub fn try_display<F>(&mut self, formatter: F) -> &mut Self
    where
        F: Fn(&Value, &Record) -> Result<Value, anyhow::Error> + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    pub fn actions(&mut self, actions: Vec<RowAction>) -> &mut Self {
        self.row_actions = actions;
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn is_searchable(&self) -> bool {
        self.searchable
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("field", &self.field)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("searchable", &self.searchable)
            .field("formatter", &self.formatter.is_some())
            .field("row_actions", &self.row_actions)
            .finish()
    }
}

/// `created_at` -> `Created At`, `role.name` -> `Role Name`
pub(crate) fn default_label(field: &str) -> String {
    field.replace('.', " ").to_case(Case::Title)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_label() {
        assert_eq!(default_label("id"), "Id");
        assert_eq!(default_label("created_at"), "Created At");
        assert_eq!(default_label("role.name"), "Role Name");
    }

    #[test]
    fn test_mutators_overwrite() {
        let mut column = Column::new("status".to_string(), None);
        column
            .label("First")
            .display(|_, _| Value::from("a"))
            .label("Second")
            .display(|_, _| Value::from("b"));

        assert_eq!(column.label, "Second");
        let formatter = column.formatter.clone().unwrap();
        assert_eq!(
            formatter(&Value::Null, &Record::default()).unwrap(),
            Value::from("b")
        );
    }
}
