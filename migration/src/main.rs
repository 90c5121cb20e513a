use migration::runner;
use std::{fs, path::Path};
use util::config;

#[tokio::main]
async fn main() {
    let db_path = config::database_path();
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("clean") => {
            remove_db_file(&db_path);
        }
        Some("fresh") => {
            remove_db_file(&db_path);
            runner::run_all_migrations(&config::database_url()).await;
        }
        _ => {
            runner::run_all_migrations(&config::database_url()).await;
        }
    }
}

fn remove_db_file(path: &str) {
    if config::is_database_url(path) {
        println!("DATABASE_PATH is a URL, not a file; nothing to delete: {path}");
        return;
    }

    let db_path = Path::new(path);
    if !db_path.exists() {
        println!("DB file does not exist: {}", db_path.display());
        return;
    }

    match fs::remove_file(db_path) {
        Ok(()) => println!("Deleted DB: {}", db_path.display()),
        Err(err) => {
            eprintln!("Failed to delete DB {}: {}", db_path.display(), err);
            std::process::exit(1);
        }
    }
}
