#![allow(dead_code)]

use healio::db::{DbPool, PoolOptions, establish_connection_pool, run_migrations};
use healio::repository::DieselRepository;
use tempfile::TempDir;

/// Migrated SQLite file inside a temporary directory removed on drop.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 temp path").to_string();
        let pool = establish_connection_pool(&url, PoolOptions::default())
            .expect("establish connection pool");
        run_migrations(&pool).expect("run migrations");
        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repository(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}
