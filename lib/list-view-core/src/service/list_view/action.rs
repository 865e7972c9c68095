use std::fmt;
use std::sync::Arc;

use crate::model::record::Record;

pub type ActionUrlFn = dyn Fn(&Record) -> String + Send + Sync;

/// Where a row action points to
#[derive(Clone)]
pub enum ActionTarget {
    Static(String),
    /// Evaluated against each record while formatting rows
    PerRecord(Arc<ActionUrlFn>),
}

impl ActionTarget {
    pub(crate) fn resolve(&self, record: &Record) -> String {
        match self {
            Self::Static(url) => url.to_owned(),
            Self::PerRecord(resolver) => resolver(record),
        }
    }
}

impl fmt::Debug for ActionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(url) => f.debug_tuple("Static").field(url).finish(),
            Self::PerRecord(_) => f.write_str("PerRecord(..)"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RowAction {
    pub label: String,
    pub target: ActionTarget,
    pub style: Option<String>,
    pub confirm: bool,
}

impl RowAction {
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: ActionTarget::Static(url.into()),
            style: None,
            confirm: false,
        }
    }

    pub fn per_record(
        label: impl Into<String>,
        url: impl Fn(&Record) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            target: ActionTarget::PerRecord(Arc::new(url)),
            style: None,
            confirm: false,
        }
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn confirm(mut self) -> Self {
        self.confirm = true;
        self
    }
}

/// Operation over selected rows, executed outside of the engine
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BulkAction {
    pub key: String,
    pub label: String,
    pub style: Option<String>,
    pub confirm: bool,
}

impl BulkAction {
    pub fn style(&mut self, style: impl Into<String>) -> &mut Self {
        self.style = Some(style.into());
        self
    }

    pub fn confirm(&mut self) -> &mut Self {
        self.confirm = true;
        self
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CreateAction {
    pub url: String,
    pub label: String,
}
