use std::error::Error;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tokio::runtime::{Builder, Runtime};

use common::err::define::database as db_err;
use common::{func, logger, make_err_msg};

use crate::model::RombaseEnum;

const CREATE_TABLE_SQL : &'static str = "CREATE TABLE IF NOT EXISTS rombase_enum (
    type TEXT NOT NULL DEFAULT '',
    name TEXT NOT NULL DEFAULT '',
    sort INTEGER NOT NULL DEFAULT 0
)";

const SELECT_ALL_SQL : &'static str = "SELECT type, name, sort FROM rombase_enum ORDER BY sort ASC";

const SELECT_BY_TYPE_SQL : &'static str = "SELECT type, name, sort FROM rombase_enum WHERE type = ? ORDER BY sort ASC";

const INSERT_SQL : &'static str = "INSERT INTO rombase_enum (type, name, sort) VALUES (?, ?, ?)";

const DELETE_BY_TYPE_SQL : &'static str = "DELETE FROM rombase_enum WHERE type = ?";

const FILE_MAX_CONN : u32 = 4;

/// Blocking access to the `rombase_enum` table. Owns a private runtime that
/// drives the async sqlite pool.
pub struct RombaseStore {
    pool : SqlitePool,
    rt : Runtime,
}

impl RombaseStore {
    fn connect(options : SqliteConnectOptions, pool_options : SqlitePoolOptions) -> Result<Self, Box<dyn Error>> {
        let rt = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| db_err::OpenFailedError::new(make_err_msg!("runtime build failed : {}", e)))?;

        let pool = rt.block_on(pool_options.connect_with(options)).map_err(|e| {
            db_err::OpenFailedError::new(make_err_msg!("{}", e))
        })?;

        let store = RombaseStore { pool, rt };
        store.create_table()?;
        Ok(store)
    }

    /// Opens (creating when missing) a sqlite database file.
    pub fn open(file : &'_ str) -> Result<Self, Box<dyn Error>> {
        logger::debug!("{} - open rombase db {}", func!(), file);

        let options = SqliteConnectOptions::new()
            .filename(file)
            .create_if_missing(true);

        Self::connect(options, SqlitePoolOptions::new().max_connections(FILE_MAX_CONN))
    }

    /// Private in-memory database. Lives as long as the single pooled
    /// connection, so that connection is never recycled.
    pub fn open_memory() -> Result<Self, Box<dyn Error>> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:").map_err(|e| {
            db_err::OpenFailedError::new(make_err_msg!("{}", e))
        })?;

        let pool_options = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);

        Self::connect(options, pool_options)
    }

    fn create_table(&self) -> Result<(), Box<dyn Error>> {
        self.rt.block_on(sqlx::query(CREATE_TABLE_SQL).execute(&self.pool)).map_err(|e| {
            db_err::QueryFailedError::new(make_err_msg!("create table failed : {}", e))
        })?;
        Ok(())
    }

    /// Inserts every row in one transaction.
    pub fn batch_add(&self, list : &'_ [RombaseEnum]) -> Result<(), Box<dyn Error>> {
        if list.is_empty() {
            return Ok(());
        }

        self.rt.block_on(async {
            let mut tx = self.pool.begin().await?;
            for v in list {
                sqlx::query(INSERT_SQL)
                    .bind(v.rom_type.as_str())
                    .bind(v.name.as_str())
                    .bind(v.sort)
                    .execute(&mut *tx)
                    .await?;
            }
            tx.commit().await
        }).map_err(|e| {
            db_err::QueryFailedError::new(make_err_msg!("batch add {} rows : {}", list.len(), e))
        })
    }

    pub fn get_all(&self) -> Result<Vec<RombaseEnum>, Box<dyn Error>> {
        let ret = self.rt.block_on(
            sqlx::query_as::<_, RombaseEnum>(SELECT_ALL_SQL).fetch_all(&self.pool)
        );

        ret.map_err(|e| {
            logger::error!("{} - {}", func!(), e);
            db_err::QueryFailedError::new(make_err_msg!("{}", e))
        })
    }

    pub fn get_by_type(&self, rom_type : &'_ str) -> Result<Vec<RombaseEnum>, Box<dyn Error>> {
        let ret = self.rt.block_on(
            sqlx::query_as::<_, RombaseEnum>(SELECT_BY_TYPE_SQL)
                .bind(rom_type)
                .fetch_all(&self.pool)
        );

        ret.map_err(|e| {
            logger::error!("{} - {}", func!(), e);
            db_err::QueryFailedError::new(make_err_msg!("type {} : {}", rom_type, e))
        })
    }

    /// Removes every row of `rom_type`, returning how many were deleted.
    pub fn delete_by_type(&self, rom_type : &'_ str) -> Result<u64, Box<dyn Error>> {
        let ret = self.rt.block_on(
            sqlx::query(DELETE_BY_TYPE_SQL).bind(rom_type).execute(&self.pool)
        ).map_err(|e| {
            db_err::QueryFailedError::new(make_err_msg!("type {} : {}", rom_type, e))
        })?;

        Ok(ret.rows_affected())
    }
}

impl Drop for RombaseStore {
    fn drop(&mut self) {
        self.rt.block_on(self.pool.close());
    }
}
