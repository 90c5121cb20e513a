use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};
use serde::Serialize;

/// One user's preference for one section.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "user_section_ratings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub section_id: i64,
    pub rating: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::authcode_user::Entity",
        from = "Column::UserId",
        to = "super::authcode_user::Column::Id",
        on_delete = "Cascade"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::section::Entity",
        from = "Column::SectionId",
        to = "super::section::Column::Id",
        on_delete = "Cascade"
    )]
    Section,
}

impl Related<super::authcode_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Section.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C>(db: &C, user_id: i64, section_id: i64, rating: i32) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        ActiveModel {
            user_id: Set(user_id),
            section_id: Set(section_id),
            rating: Set(rating),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Ratings of a user, ordered by section id.
    pub async fn for_user<C>(db: &C, user_id: i64) -> Result<Vec<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::SectionId)
            .all(db)
            .await
    }

    /// Returns the number of rows removed.
    pub async fn delete_for_user<C>(db: &C, user_id: i64) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let res = Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }

    /// Returns the number of rows removed.
    pub async fn delete_for_section<C>(db: &C, section_id: i64) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let res = Entity::delete_many()
            .filter(Column::SectionId.eq(section_id))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }
}
