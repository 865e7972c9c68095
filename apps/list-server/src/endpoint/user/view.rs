use list_view_core::model::record::Record;
use list_view_core::service::list_view::ListView;
use list_view_core::service::list_view::action::RowAction;
use list_view_core::service::list_view::filter::{FilterOptions, OptionMap};
use serde_json::Value;

use crate::router::InternalAppState;

const STATUSES: [(&str, &str); 2] = [("1", "Active"), ("0", "Inactive")];
const ROLES: [(&str, &str); 3] = [("admin", "Administrator"), ("user", "User"), ("guest", "Guest")];

/// Users with their team, searchable by name, email and team
pub(crate) fn user_list_view(state: &InternalAppState) -> ListView {
    let mut view = state
        .list_view_service
        .list_view(state.data_layer.get_user_record_repository());

    view.id(Some("ID"));
    view.column("name", None)
        .sortable()
        .searchable()
        .actions(vec![
            RowAction::per_record("Edit", |record| {
                format!("/users/{}/edit", user_id(record))
            }),
            RowAction::per_record("Delete", |record| {
                format!("/users/{}/delete", user_id(record))
            })
            .style("danger")
            .confirm(),
        ]);
    view.column("email", None).searchable();
    view.column("status", None)
        .sortable()
        .display(|value, _| status_label(value));
    view.column("role", None).sortable();
    view.column("score", None).sortable();
    view.column("created_date", Some("Created"))
        .sortable()
        .display(|value, _| calendar_day(value));
    view.column("team.name", Some("Team")).sortable().searchable();

    view.add_select_filter("status", "Status", option_map(&STATUSES));
    view.add_select_filter(
        "role",
        "Role",
        FilterOptions::deferred(|| option_map(&ROLES)),
    );
    view.add_date_range_filter("created", "Created")
        .on_field("created_date");
    view.add_numeric_range_filter("score", "Score");
    view.add_text_filter("team", "Team").on_field("team.name");

    view.bulk_action("delete", "Delete selected")
        .style("danger")
        .confirm();
    view.bulk_action("export", "Export");
    view.create_action("/users/create", "New user");

    view
}

fn user_id(record: &Record) -> Value {
    record.value_of("id")
}

fn status_label(value: &Value) -> Value {
    let code = value.as_i64().map(|code| code.to_string());
    STATUSES
        .iter()
        .find(|(status, _)| Some(*status) == code.as_deref())
        .map_or(Value::Null, |(_, label)| Value::from(*label))
}

/// `2024-01-15T10:30:00Z` -> `2024-01-15`
fn calendar_day(value: &Value) -> Value {
    value
        .as_str()
        .and_then(|timestamp| timestamp.get(..10))
        .map_or(Value::Null, Value::from)
}

fn option_map(options: &[(&str, &str)]) -> OptionMap {
    options
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect()
}
