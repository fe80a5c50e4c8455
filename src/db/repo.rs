//! Repository layer for character storage.
//!
//! Every method maps to exactly one SQL statement; connections are checked
//! out of the pool per statement and released when the future completes.

use crate::domain::{Character, CharacterId, NewCharacter};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

/// Repository for operations on the `characters` table.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// Insert a character and return the full record with its assigned id.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_character(&self, new: NewCharacter) -> Result<Character, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO characters (name, height, mass, hair_color, skin_color, eye_color, birth_year)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new.name)
        .bind(new.height)
        .bind(new.mass)
        .bind(&new.hair_color)
        .bind(&new.skin_color)
        .bind(&new.eye_color)
        .bind(new.birth_year)
        .execute(&self.pool)
        .await?;

        Ok(new.with_id(CharacterId::new(result.last_insert_rowid())))
    }

    /// List every character, ordered by id ascending.
    ///
    /// An empty table yields an empty vector.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_characters(&self) -> Result<Vec<Character>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, height, mass, hair_color, skin_color, eye_color, birth_year
            FROM characters
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(character_from_row).collect())
    }

    /// Get a character by id, or None if no such record exists.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn get_character(&self, id: CharacterId) -> Result<Option<Character>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT id, name, height, mass, hair_color, skin_color, eye_color, birth_year
            FROM characters
            WHERE id = ?
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(character_from_row))
    }

    /// Delete a character by id. Returns whether a row was removed.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub async fn delete_character(&self, id: CharacterId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn character_from_row(row: &SqliteRow) -> Character {
    Character {
        id: CharacterId::new(row.get("id")),
        name: row.get("name"),
        height: row.get("height"),
        mass: row.get("mass"),
        hair_color: row.get("hair_color"),
        skin_color: row.get("skin_color"),
        eye_color: row.get("eye_color"),
        birth_year: row.get("birth_year"),
    }
}
