/// Diesel models for the animes table
use crate::modules::tracking::domain::TrackedAnime;
use crate::schema::animes;
use diesel::prelude::*;

/// Diesel model for querying existing rows.
///
/// Both text columns are nullable in the table; older databases may hold NULL
/// where the API returned no value.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = animes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AnimeRow {
    pub id: i64,
    pub title: Option<String>,
    pub last_known_status: Option<String>,
}

impl AnimeRow {
    /// Convert to domain TrackedAnime
    pub fn to_entity(self) -> TrackedAnime {
        TrackedAnime {
            id: self.id,
            title: self.title.unwrap_or_default(),
            last_known_status: self.last_known_status.unwrap_or_default(),
        }
    }
}

/// Diesel model for inserting new rows
#[derive(Insertable, Debug)]
#[diesel(table_name = animes)]
pub struct NewAnimeRow<'a> {
    pub id: i64,
    pub title: &'a str,
    pub last_known_status: &'a str,
}
