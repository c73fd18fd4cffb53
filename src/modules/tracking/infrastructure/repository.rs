/// Diesel-based implementation of TrackedAnimeRepository
///
/// Runs on the connection owned by `Database`, so every write lands in
/// whatever transaction the caller opened on it.
use crate::modules::tracking::domain::{TrackedAnime, TrackedAnimeRepository};
use crate::modules::tracking::infrastructure::models::{AnimeRow, NewAnimeRow};
use crate::schema::animes;
use crate::shared::errors::AppResult;
use crate::shared::utils::{LogContext, TimedOperation};
use crate::shared::Database;
use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

pub struct TrackedAnimeRepositoryImpl {
    db: Arc<Database>,
}

impl TrackedAnimeRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TrackedAnimeRepository for TrackedAnimeRepositoryImpl {
    async fn get_status(&self, id: i64) -> AppResult<Option<String>> {
        let mut conn = self.db.connection()?;

        let status: Option<Option<String>> = animes::table
            .find(id)
            .select(animes::last_known_status)
            .first(&mut *conn)
            .optional()?;

        Ok(status.map(Option::unwrap_or_default))
    }

    async fn upsert(&self, id: i64, title: &str, status: &str) -> AppResult<()> {
        let timer = TimedOperation::start();
        let mut conn = self.db.connection()?;

        let new_row = NewAnimeRow {
            id,
            title,
            last_known_status: status,
        };

        // On conflict only the status moves; the first recorded title stays
        diesel::insert_into(animes::table)
            .values(&new_row)
            .on_conflict(animes::id)
            .do_update()
            .set(animes::last_known_status.eq(status))
            .execute(&mut *conn)?;

        LogContext::db_operation("upsert", "animes", Some(timer.elapsed_ms()));
        Ok(())
    }

    async fn find(&self, id: i64) -> AppResult<Option<TrackedAnime>> {
        let mut conn = self.db.connection()?;

        let row: Option<AnimeRow> = animes::table
            .find(id)
            .select(AnimeRow::as_select())
            .first(&mut *conn)
            .optional()?;

        Ok(row.map(AnimeRow::to_entity))
    }

    async fn list_all(&self) -> AppResult<Vec<TrackedAnime>> {
        let mut conn = self.db.connection()?;

        let rows: Vec<AnimeRow> = animes::table
            .order(animes::id.asc())
            .select(AnimeRow::as_select())
            .load(&mut *conn)?;

        Ok(rows.into_iter().map(AnimeRow::to_entity).collect())
    }
}
