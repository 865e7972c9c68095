use sea_orm::{DatabaseConnection, EntityTrait, JoinType, QuerySelect, RelationTrait};

use crate::entity::{team, user};
use crate::record::{FieldColumn, RecordProvider};

pub mod model;


use model::UserListItemEntityModel;

pub(crate) type UserRecordProvider = RecordProvider<user::Entity, UserListItemEntityModel>;

/// Every user, with the name of the team they belong to as `team.name`
pub(crate) fn user_record_provider(db: DatabaseConnection) -> UserRecordProvider {
    let base = user::Entity::find()
        .column_as(team::Column::Name, "team_name")
        .join(JoinType::LeftJoin, user::Relation::Team.def());

    RecordProvider::new(db, base).with_field("team.name", FieldColumn::new(team::Column::Name))
}
