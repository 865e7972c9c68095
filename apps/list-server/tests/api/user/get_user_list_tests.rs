use list_view_core::config::core_config::ListViewConfig;
use sea_orm::ConnectionTrait;
use serde_json::{Value, json};
use sql_data_provider::test_utilities::{TestUser, insert_team, insert_user};
use time::macros::datetime;

use crate::utils::context::TestContext;

fn names(body: &Value) -> Vec<&str> {
    body["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["values"]["name"].as_str().unwrap())
        .collect()
}

async fn context_with_alice_and_bob() -> TestContext {
    let context = TestContext::new().await;

    let core = insert_team(&context.db, "Core").await.unwrap();
    let support = insert_team(&context.db, "Support").await.unwrap();
    insert_user(&context.db, TestUser::new("Alice").team(core))
        .await
        .unwrap();
    insert_user(&context.db, TestUser::new("Bob").status(0).team(support))
        .await
        .unwrap();

    context
}

#[tokio::test]
async fn test_get_user_list_search_and_status_filter() {
    // GIVEN
    let context = context_with_alice_and_bob().await;

    // WHEN
    let (status, body) = context
        .get_json("/api/user/v1?search=ali&filter_status=1")
        .await;

    // THEN
    assert_eq!(status, 200);

    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0]["values"],
        json!({
            "id": 1,
            "name": "Alice",
            "email": "alice@example.com",
            "status": "Active",
            "role": "user",
            "score": 0.0,
            "created_date": "2024-01-15",
            "team.name": "Core",
        })
    );
    assert_eq!(
        rows[0]["actions"]["name"],
        json!([
            {"label": "Edit", "url": "/users/1/edit", "style": null, "confirm": false},
            {"label": "Delete", "url": "/users/1/delete", "style": "danger", "confirm": true},
        ])
    );
    assert_eq!(
        body["pagination"],
        json!({"page": 1, "perPage": 15, "totalItems": 1, "totalPages": 1})
    );
    assert_eq!(body["search"], "ali");

    let status_filter = &body["filters"][0];
    assert_eq!(status_filter["key"], "status");
    assert_eq!(status_filter["kind"], "SELECT");
    assert_eq!(status_filter["value"], "1");
    assert_eq!(
        status_filter["options"],
        json!({"1": "Active", "0": "Inactive"})
    );
}

#[tokio::test]
async fn test_get_user_list_bogus_sort_falls_back_to_default() {
    // GIVEN
    let context = context_with_alice_and_bob().await;

    // WHEN
    let (status, body) = context
        .get_json("/api/user/v1?sort=bogus_field&order=asc")
        .await;

    // THEN
    assert_eq!(status, 200);
    assert_eq!(names(&body), vec!["Bob", "Alice"]);
    assert_eq!(body["sorting"], json!({"field": "id", "direction": "DESC"}));
}

#[tokio::test]
async fn test_get_user_list_sort_by_joined_team() {
    // GIVEN
    let context = context_with_alice_and_bob().await;

    // WHEN
    let (_, ascending) = context
        .get_json("/api/user/v1?sort=team.name&order=ASC")
        .await;
    let (_, descending) = context
        .get_json("/api/user/v1?sort=team.name&order=desc")
        .await;

    // THEN
    assert_eq!(names(&ascending), vec!["Alice", "Bob"]);
    assert_eq!(names(&descending), vec!["Bob", "Alice"]);
}

#[tokio::test]
async fn test_get_user_list_date_range_and_deferred_role_filter() {
    // GIVEN
    let context = TestContext::new().await;
    for user in [
        TestUser::new("Alice")
            .role("admin")
            .created_date(datetime!(2024-01-31 23:59 UTC)),
        TestUser::new("Bob")
            .role("admin")
            .created_date(datetime!(2024-02-01 00:00 UTC)),
        TestUser::new("Carol").created_date(datetime!(2024-01-20 08:00 UTC)),
    ] {
        insert_user(&context.db, user).await.unwrap();
    }

    // WHEN
    let (status, body) = context
        .get_json(
            "/api/user/v1?filter_created[from]=2024-01-01&filter_created[to]=2024-01-31&filter_role=admin",
        )
        .await;

    // THEN
    assert_eq!(status, 200);
    assert_eq!(names(&body), vec!["Alice"]);

    let filters = body["filters"].as_array().unwrap();
    let role = filters.iter().find(|f| f["key"] == "role").unwrap();
    assert_eq!(role["options"]["admin"], "Administrator");
    assert_eq!(role["value"], "admin");

    let created = filters.iter().find(|f| f["key"] == "created").unwrap();
    assert_eq!(created["field"], "created_date");
    assert_eq!(created["kind"], "DATE_RANGE");
    assert_eq!(
        created["value"],
        json!({"from": "2024-01-01", "to": "2024-01-31"})
    );
}

#[tokio::test]
async fn test_get_user_list_score_range_and_team_filter() {
    // GIVEN
    let context = TestContext::new().await;
    let core = insert_team(&context.db, "Core").await.unwrap();
    for user in [
        TestUser::new("Alice").score(12.5).team(core),
        TestUser::new("Bob").score(40.0),
        TestUser::new("Carol").score(3.0).team(core),
    ] {
        insert_user(&context.db, user).await.unwrap();
    }

    // WHEN
    let (_, scored) = context
        .get_json("/api/user/v1?filter_score[from]=10&sort=score&order=asc")
        .await;
    let (_, core_team) = context
        .get_json("/api/user/v1?filter_team=COR&filter_score[to]=20&sort=name&order=asc")
        .await;

    // THEN
    assert_eq!(names(&scored), vec!["Alice", "Bob"]);
    assert_eq!(names(&core_team), vec!["Alice", "Carol"]);
}

#[tokio::test]
async fn test_get_user_list_pagination() {
    // GIVEN
    let context = TestContext::new().await;
    for i in 0..20 {
        insert_user(&context.db, TestUser::new(&format!("User{i:02}")))
            .await
            .unwrap();
    }

    // WHEN
    let (status, body) = context
        .get_json("/api/user/v1?page=2&per_page=5&sort=name&order=asc")
        .await;

    // THEN
    assert_eq!(status, 200);
    assert_eq!(
        names(&body),
        vec!["User05", "User06", "User07", "User08", "User09"]
    );
    assert_eq!(
        body["pagination"],
        json!({"page": 2, "perPage": 5, "totalItems": 20, "totalPages": 4})
    );
}

#[tokio::test]
async fn test_get_user_list_uses_configured_defaults() {
    // GIVEN
    let context = TestContext::new_with_list_view_config(ListViewConfig {
        default_page_size: 2,
        ..Default::default()
    })
    .await;
    for name in ["Alice", "Bob", "Carol"] {
        insert_user(&context.db, TestUser::new(name)).await.unwrap();
    }

    // WHEN
    let (_, body) = context.get_json("/api/user/v1").await;

    // THEN
    assert_eq!(names(&body), vec!["Carol", "Bob"]);
    assert_eq!(body["pagination"]["perPage"], 2);
    assert_eq!(body["pagination"]["totalPages"], 2);
}

#[tokio::test]
async fn test_get_user_list_malformed_query_uses_defaults() {
    // GIVEN
    let context = context_with_alice_and_bob().await;

    // WHEN
    let (status, body) = context
        .get_json("/api/user/v1?page=abc&per_page=-3&filter_created[to]=yesterday&order=sideways")
        .await;

    // THEN
    assert_eq!(status, 200);
    assert_eq!(names(&body), vec!["Bob", "Alice"]);
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["perPage"], 15);
}

#[tokio::test]
async fn test_get_user_list_describes_grid() {
    // GIVEN
    let context = TestContext::new().await;

    // WHEN
    let (status, body) = context.get_json("/api/user/v1").await;

    // THEN
    assert_eq!(status, 200);
    assert_eq!(body["rows"], json!([]));
    assert_eq!(body["pagination"]["totalItems"], 0);

    let columns: Vec<_> = body["columns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|column| column["field"].as_str().unwrap())
        .collect();
    assert_eq!(
        columns,
        vec![
            "id",
            "name",
            "email",
            "status",
            "role",
            "score",
            "created_date",
            "team.name"
        ]
    );
    assert_eq!(
        body["columns"][1],
        json!({"field": "name", "label": "Name", "sortable": true, "searchable": true})
    );

    let kinds: Vec<_> = body["filters"]
        .as_array()
        .unwrap()
        .iter()
        .map(|filter| filter["kind"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec!["SELECT", "SELECT", "DATE_RANGE", "NUMERIC_RANGE", "TEXT"]
    );

    assert_eq!(
        body["bulkActions"][0],
        json!({"key": "delete", "label": "Delete selected", "style": "danger", "confirm": true})
    );
    assert_eq!(
        body["createAction"],
        json!({"url": "/users/create", "label": "New user"})
    );
}

#[tokio::test]
async fn test_get_user_list_data_source_failure() {
    // GIVEN
    let context = TestContext::new().await;
    context
        .db
        .execute_unprepared("DROP TABLE user")
        .await
        .unwrap();

    // WHEN
    let (status, body) = context.get_json("/api/user/v1").await;

    // THEN
    assert_eq!(status, 500);
    assert_eq!(body["code"], "BR_0054");
    assert_eq!(body["message"], "Data source unavailable");
}

#[tokio::test]
async fn test_get_user_list_unsupported_parameter_shape_keeps_the_rest() {
    // GIVEN
    let context = context_with_alice_and_bob().await;

    // WHEN
    let (status, body) = context
        .get_json("/api/user/v1?search=bo&search=ali&filter_status[]=0&sort=name&order=asc")
        .await;

    // THEN
    assert_eq!(status, 200);
    assert_eq!(names(&body), vec!["Alice"]);
    assert_eq!(body["search"], "ali");
    assert_eq!(body["sorting"], json!({"field": "name", "direction": "ASC"}));

    let status_filter = body["filters"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["key"] == "status")
        .unwrap();
    assert_eq!(status_filter["value"], Value::Null);
}
