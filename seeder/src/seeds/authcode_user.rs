use crate::seed::Seeder;
use db::models::authcode_user::Model;
use fake::{Fake, faker::internet::en::Username};
use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use services::ServiceError;

pub struct AuthcodeUserSeeder;

/// Creates `username` unless it is already taken. Other failures propagate.
async fn create_unless_taken(db: &DatabaseConnection, username: &str) -> Result<(), DbErr> {
    match Model::create(db, username).await {
        Ok(_) => Ok(()),
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => Ok(()),
        Err(e) => Err(e),
    }
}

#[async_trait::async_trait]
impl Seeder for AuthcodeUserSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), ServiceError> {
        // Fixed user for manual testing
        create_unless_taken(db, "student").await?;

        for _ in 0..10 {
            let name: String = Username().fake();
            let username = format!("{}{:03}", name, fastrand::u16(..1000));
            create_unless_taken(db, &username).await?;
        }
        Ok(())
    }
}
