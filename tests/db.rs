use diesel::prelude::*;
use healio::db::{get_connection, run_migrations};
use healio::schema::{appointments, bills, patients};

mod common;

#[test]
fn test_creates_and_migrates_db_file() {
    let test_db = common::TestDb::new("test_creates_and_migrates_db_file.db");
    let mut conn = get_connection(&test_db.pool()).unwrap();

    let patient_count: i64 = patients::table.count().get_result(&mut conn).unwrap();
    let appointment_count: i64 = appointments::table.count().get_result(&mut conn).unwrap();
    let bill_count: i64 = bills::table.count().get_result(&mut conn).unwrap();
    assert_eq!((patient_count, appointment_count, bill_count), (0, 0, 0));
}

#[test]
fn test_migrations_are_idempotent() {
    let test_db = common::TestDb::new("test_migrations_are_idempotent.db");
    assert!(run_migrations(&test_db.pool()).is_ok());
}
