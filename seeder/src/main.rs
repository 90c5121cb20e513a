use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    authcode_user::AuthcodeUserSeeder, rating::RatingSeeder, section::SectionSeeder,
};
use colored::*;
use migration::Migrator;
use sea_orm_migration::MigratorTrait;

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("{} {e}", "Failed to connect to database:".red());
            std::process::exit(1);
        }
    };
    if let Err(e) = Migrator::up(&db, None).await {
        eprintln!("{} {e}", "Failed to run migrations:".red());
        std::process::exit(1);
    }

    for (seeder, name) in [
        (Box::new(AuthcodeUserSeeder) as Box<dyn Seeder + Send + Sync>, "AuthcodeUser"),
        (Box::new(SectionSeeder), "Section"),
        (Box::new(RatingSeeder), "Rating"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
}
