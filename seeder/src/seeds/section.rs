use crate::seed::Seeder;
use db::models::section::{Model, Weekday};
use sea_orm::DatabaseConnection;
use services::ServiceError;

pub struct SectionSeeder;

#[async_trait::async_trait]
impl Seeder for SectionSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), ServiceError> {
        for day in [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
        ] {
            for time in ["9:00", "11:00", "14:00"] {
                Model::create(db, day, time).await?;
            }
        }
        Model::create(db, Weekday::Saturday, "10:30").await?;
        Ok(())
    }
}
