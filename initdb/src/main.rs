//! A helper program to apply the recitation schema to a database.

use std::env;

use movine::Movine;
use postgres::{Client, NoTls};

use log::{debug, info, initialize_logger};

/// Where the migrations live relative to the repository root.
const DEFAULT_MIGRATION_DIR: &str = "./migrations";

fn main() {
    dotenv::dotenv().ok();

    let logger = initialize_logger();
    let connection_string = env::var("BACKEND_DB_CONNECTION_STRING")
        .expect("could not read BACKEND_DB_CONNECTION_STRING");
    let migration_dir =
        env::var("INITDB_MIGRATION_DIR").unwrap_or_else(|_| DEFAULT_MIGRATION_DIR.to_owned());

    debug!(logger, "Connecting to database...");

    let mut client =
        Client::connect(&connection_string, NoTls).expect("could not connect to database");

    let mut movine = Movine::new(&mut client);
    movine.set_migration_dir(&migration_dir);

    if movine.status().is_err() {
        debug!(logger, "Initializing movine...");
        movine.initialize().expect("failed to initialize movine")
    }

    info!(logger, "Running migrations..."; "migration_dir" => &migration_dir);
    movine.up().expect("failed to run migrations");

    info!(logger, "Schema is up to date.");
}
