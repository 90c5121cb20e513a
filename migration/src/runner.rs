use crate::Migrator;
use colored::*;
use futures::FutureExt;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

/// Connects to `url` and applies every pending migration, printing one status
/// line per migration.
///
/// Exits the process with status 1 on the first failure.
pub async fn run_all_migrations(url: &str) {
    let mut opts = ConnectOptions::new(url);
    opts.sqlx_logging(false);

    let db = match Database::connect(opts).await {
        Ok(db) => db,
        Err(err) => {
            eprintln!("{} {}", "DB connection failed:".red(), err);
            std::process::exit(1);
        }
    };

    println!("Running migrations...");
    match apply_pending(&db).await {
        Ok(0) => println!("{}", "Nothing to migrate".dimmed()),
        Ok(_) => {}
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}

/// Applies pending migrations one at a time through [`Migrator`], so each is
/// recorded in `seaql_migrations` and later `Migrator::up` calls skip it.
///
/// Returns how many migrations were applied.
pub async fn apply_pending(db: &DatabaseConnection) -> Result<usize, DbErr> {
    let pending = Migrator::get_pending_migrations(db).await?;

    for migration in &pending {
        let name = migration.name().to_owned();
        let name_str = format!("Applying {}", name.bold());
        let dots = ".".repeat(STATUS_COLUMN.saturating_sub(name_str.len()));
        print!("{}{} ", name_str, dots);
        io::stdout().flush().ok();

        let start = Instant::now();
        let result = std::panic::AssertUnwindSafe(Migrator::up(db, Some(1)))
            .catch_unwind()
            .await;

        match result {
            Ok(Ok(())) => {
                let time_str = format!("({:.2?})", start.elapsed()).dimmed();
                println!("{} {}", "done".green(), time_str);
            }
            Ok(Err(err)) => {
                println!("{}", "failed".red());
                return Err(err);
            }
            Err(_) => {
                println!("{}", "failed".red());
                return Err(DbErr::Migration(format!("{name} panicked")));
            }
        }
    }

    Ok(pending.len())
}
