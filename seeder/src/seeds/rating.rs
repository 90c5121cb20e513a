use crate::seed::Seeder;
use db::models::authcode_user::Entity as AuthcodeUserEntity;
use sea_orm::{DatabaseConnection, EntityTrait};
use services::{ServiceError, pick_service::PickService};
use std::collections::HashMap;

pub struct RatingSeeder;

#[async_trait::async_trait]
impl Seeder for RatingSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), ServiceError> {
        let users = AuthcodeUserEntity::find().all(db).await?;

        // Same path as a form submission: one rating per section per user
        for user in users {
            PickService::record_picks(db, user.id, &HashMap::new()).await?;
        }
        Ok(())
    }
}
