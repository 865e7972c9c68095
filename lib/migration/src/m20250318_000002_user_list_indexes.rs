use sea_orm_migration::prelude::*;

use crate::m20250312_000001_initial::User;

const USER_NAME_INDEX: &str = "index-User-Name";
const USER_CREATED_DATE_INDEX: &str = "index-User-CreatedDate";
const USER_STATUS_ROLE_INDEX: &str = "index-User-Status-Role";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(USER_NAME_INDEX)
                    .table(User::Table)
                    .col(User::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(USER_CREATED_DATE_INDEX)
                    .table(User::Table)
                    .col(User::CreatedDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(USER_STATUS_ROLE_INDEX)
                    .table(User::Table)
                    .col(User::Status)
                    .col(User::Role)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for index in [USER_STATUS_ROLE_INDEX, USER_CREATED_DATE_INDEX, USER_NAME_INDEX] {
            manager
                .drop_index(Index::drop().name(index).table(User::Table).to_owned())
                .await?;
        }
        Ok(())
    }
}
