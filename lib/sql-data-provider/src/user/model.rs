use sea_orm::FromQueryResult;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, FromQueryResult, Serialize)]
pub struct UserListItemEntityModel {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub status: i32,
    pub role: String,
    pub score: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_date: OffsetDateTime,
    pub team_id: Option<i64>,
    #[serde(rename = "team.name")]
    pub team_name: Option<String>,
}
