use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use time::OffsetDateTime;
use time::macros::datetime;

use crate::entity::{team, user};
use crate::{DataLayer, db_conn};

pub fn get_dummy_date() -> OffsetDateTime {
    datetime!(2024-01-15 10:30 UTC)
}

pub async fn setup_test_data_layer_and_connection_with_custom_url(database_url: &str) -> DataLayer {
    let db = db_conn(database_url).await.expect("database available");
    DataLayer::build(db)
}

pub async fn setup_test_data_layer_and_connection() -> DataLayer {
    setup_test_data_layer_and_connection_with_custom_url("sqlite::memory:").await
}

pub async fn insert_team(database: &DatabaseConnection, name: &str) -> Result<i64, DbErr> {
    let team = team::ActiveModel {
        id: NotSet,
        name: Set(name.to_owned()),
    }
    .insert(database)
    .await?;

    Ok(team.id)
}

#[derive(Clone, Debug)]
pub struct TestUser {
    pub name: String,
    pub email: String,
    pub status: i32,
    pub role: String,
    pub score: f64,
    pub created_date: OffsetDateTime,
    pub team_id: Option<i64>,
}

impl TestUser {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            email: format!("{}@example.com", name.to_lowercase()),
            status: 1,
            role: "user".to_owned(),
            score: 0.0,
            created_date: get_dummy_date(),
            team_id: None,
        }
    }

    pub fn status(mut self, status: i32) -> Self {
        self.status = status;
        self
    }

    pub fn role(mut self, role: &str) -> Self {
        self.role = role.to_owned();
        self
    }

    pub fn score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    pub fn created_date(mut self, created_date: OffsetDateTime) -> Self {
        self.created_date = created_date;
        self
    }

    pub fn team(mut self, team_id: i64) -> Self {
        self.team_id = Some(team_id);
        self
    }
}

pub async fn insert_user(database: &DatabaseConnection, user: TestUser) -> Result<i64, DbErr> {
    let user = user::ActiveModel {
        id: NotSet,
        name: Set(user.name),
        email: Set(user.email),
        status: Set(user.status),
        role: Set(user.role),
        score: Set(user.score),
        created_date: Set(user.created_date),
        team_id: Set(user.team_id),
    }
    .insert(database)
    .await?;

    Ok(user.id)
}
