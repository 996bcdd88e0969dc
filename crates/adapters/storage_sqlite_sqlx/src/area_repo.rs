//! `SQLite` implementation of [`AreaRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use filpilote_app::ports::AreaRepository;
use filpilote_domain::area::Area;
use filpilote_domain::error::{FilPiloteError, NotFoundError, ValidationError};
use filpilote_domain::id::{AreaId, LineId};
use filpilote_domain::line::LineHandle;
use filpilote_domain::mode::Mode;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Area`].
struct Wrapper(Area);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Area> {
        value.map(|w| w.0)
    }
}

fn decode<T, E>(value: &str) -> Result<T, sqlx::Error>
where
    T: FromStr<Err = E>,
    E: std::error::Error + Send + Sync + 'static,
{
    T::from_str(value).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

fn line_from_row(row: &SqliteRow, prefix: &str) -> Result<LineHandle, sqlx::Error> {
    let id: String = row.try_get(format!("{prefix}_id").as_str())?;
    Ok(LineHandle {
        id: decode::<LineId, _>(&id)?,
        name: row.try_get(format!("{prefix}_name").as_str())?,
        line: row.try_get(format!("{prefix}_line").as_str())?,
    })
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let mode: String = row.try_get("mode")?;

        Ok(Self(Area {
            id: decode::<AreaId, _>(&id)?,
            name,
            mode: decode::<Mode, _>(&mode)?,
            line_a: line_from_row(row, "line_a")?,
            line_b: line_from_row(row, "line_b")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO areas (id, name, mode, line_a_id, line_a_name, line_a_line, line_b_id, line_b_name, line_b_line) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM areas WHERE id = ?";
const SELECT_BY_NAME: &str = "SELECT * FROM areas WHERE name = ?";
const SELECT_ALL: &str = "SELECT * FROM areas ORDER BY name";
const UPDATE_MODE: &str = "UPDATE areas SET mode = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM areas WHERE id = ?";

/// `SQLite`-backed area repository.
pub struct SqliteAreaRepository {
    pool: SqlitePool,
}

impl SqliteAreaRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AreaRepository for SqliteAreaRepository {
    fn create(&self, area: Area) -> impl Future<Output = Result<Area, FilPiloteError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(area.id.to_string())
                .bind(&area.name)
                .bind(area.mode.as_str())
                .bind(area.line_a.id.to_string())
                .bind(&area.line_a.name)
                .bind(&area.line_a.line)
                .bind(area.line_b.id.to_string())
                .bind(&area.line_b.name)
                .bind(&area.line_b.line)
                .execute(&pool)
                .await;

            match result {
                Ok(_) => Ok(area),
                Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
                    Err(ValidationError::DuplicateName(area.name).into())
                }
                Err(err) => Err(StorageError::from(err).into()),
            }
        }
    }

    fn get_by_id(
        &self,
        id: AreaId,
    ) -> impl Future<Output = Result<Option<Area>, FilPiloteError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Area>, FilPiloteError>> + Send {
        let pool = self.pool.clone();
        let name = name.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_NAME)
                .bind(name)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Area>, FilPiloteError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update_mode(
        &self,
        id: AreaId,
        mode: Mode,
    ) -> impl Future<Output = Result<(), FilPiloteError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE_MODE)
                .bind(mode.as_str())
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError {
                    entity: "Area",
                    id: id.to_string(),
                }
                .into());
            }
            Ok(())
        }
    }

    fn delete(&self, id: AreaId) -> impl Future<Output = Result<(), FilPiloteError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
