//! [`SqliteStore`] — the SQLite implementation of [`EmployeeStore`].

use std::path::Path;

use rusqlite::{OptionalExtension as _, Transaction};
use tracing::debug;
use uuid::Uuid;

use cadre_core::{
  employee::{Company, EmployeeDraft, Person, RosterEntry},
  store::{EmployeeStore, RosterQuery},
};

use crate::{
  Error, Result,
  encode::{RawCompany, RawEntry, RawPerson, encode_date, encode_uuid},
  schema::SCHEMA,
};

// ─── SQL fragments ───────────────────────────────────────────────────────────

/// Shared SELECT list for roster rows: a position joined with both parents.
const ENTRY_SELECT: &str = "
  SELECT pos.position_id, pos.title, pos.start_date,
         p.person_id, p.full_name, p.passport_series, p.passport_number,
         p.address,
         c.company_id, c.name
    FROM positions pos
    JOIN persons   p ON p.person_id  = pos.person_id
    JOIN companies c ON c.company_id = pos.company_id";

/// Map one row of [`ENTRY_SELECT`] into a [`RawEntry`].
fn entry_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawEntry> {
  Ok(RawEntry {
    position_id: row.get(0)?,
    title:       row.get(1)?,
    start_date:  row.get(2)?,
    person:      RawPerson {
      person_id:       row.get(3)?,
      full_name:       row.get(4)?,
      passport_series: row.get(5)?,
      passport_number: row.get(6)?,
      address:         row.get(7)?,
    },
    company:     RawCompany {
      company_id: row.get(8)?,
      name:       row.get(9)?,
    },
  })
}

/// Resolve a company name to its id within `tx`, inserting a new row when
/// no exact-name match exists. No normalisation is applied to the name.
fn resolve_company(tx: &Transaction<'_>, name: &str) -> rusqlite::Result<String> {
  let existing: Option<String> = tx
    .query_row(
      "SELECT company_id FROM companies WHERE name = ?1",
      rusqlite::params![name],
      |r| r.get(0),
    )
    .optional()?;

  if let Some(id) = existing {
    return Ok(id);
  }

  let id = encode_uuid(Uuid::new_v4());
  tx.execute(
    "INSERT INTO companies (company_id, name) VALUES (?1, ?2)",
    rusqlite::params![id, name],
  )?;
  Ok(id)
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// An employee store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. The handle
/// is constructed once at startup and passed to whoever needs it; there is
/// no global engine state.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Fetch the joined roster row for one position.
  async fn entry_by_position(&self, position_id: Uuid) -> Result<RosterEntry> {
    let id_str = encode_uuid(position_id);

    let raw: Option<RawEntry> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("{ENTRY_SELECT} WHERE pos.position_id = ?1"),
              rusqlite::params![id_str],
              entry_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw
      .ok_or(cadre_core::Error::PositionNotFound(position_id))?
      .into_entry()
  }
}

// ─── EmployeeStore impl ──────────────────────────────────────────────────────

impl EmployeeStore for SqliteStore {
  type Error = Error;

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn list_companies(&self) -> Result<Vec<Company>> {
    let raws: Vec<RawCompany> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT company_id, name FROM companies ORDER BY name")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawCompany {
              company_id: row.get(0)?,
              name:       row.get(1)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawCompany::into_company).collect()
  }

  async fn search(&self, query: &RosterQuery) -> Result<Vec<RosterEntry>> {
    // Lowercase both sides for the substring match; NULL filters pass
    // every row.
    let name_pattern = query
      .name
      .as_deref()
      .map(|n| format!("%{}%", n.to_lowercase()));
    let company = query.company.clone();

    let raws: Vec<RawEntry> = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "{ENTRY_SELECT}
           WHERE (?1 IS NULL OR LOWER(p.full_name) LIKE ?1)
             AND (?2 IS NULL OR c.name = ?2)
           ORDER BY p.full_name, pos.start_date"
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params![name_pattern, company], entry_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawEntry::into_entry).collect()
  }

  async fn get_person(&self, id: Uuid) -> Result<Option<Person>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawPerson> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT person_id, full_name, passport_series, passport_number,
                      address
                 FROM persons WHERE person_id = ?1",
              rusqlite::params![id_str],
              |row| {
                Ok(RawPerson {
                  person_id:       row.get(0)?,
                  full_name:       row.get(1)?,
                  passport_series: row.get(2)?,
                  passport_number: row.get(3)?,
                  address:         row.get(4)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawPerson::into_person).transpose()
  }

  // ── Mutations ─────────────────────────────────────────────────────────────

  async fn add_employee(&self, draft: EmployeeDraft) -> Result<RosterEntry> {
    let person_id = Uuid::new_v4();
    let position_id = Uuid::new_v4();

    let person_id_str = encode_uuid(person_id);
    let position_id_str = encode_uuid(position_id);
    let start_date_str = encode_date(draft.start_date);

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        tx.execute(
          "INSERT INTO persons
             (person_id, full_name, passport_series, passport_number, address)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![
            person_id_str,
            draft.full_name,
            draft.passport_series,
            draft.passport_number,
            draft.address,
          ],
        )?;

        let company_id_str = resolve_company(&tx, &draft.company)?;

        tx.execute(
          "INSERT INTO positions
             (position_id, title, start_date, person_id, company_id)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![
            position_id_str,
            draft.title,
            start_date_str,
            person_id_str,
            company_id_str,
          ],
        )?;

        tx.commit()?;
        Ok(())
      })
      .await?;

    debug!(%person_id, %position_id, "added employee");
    self.entry_by_position(position_id).await
  }

  async fn update_employee(
    &self,
    position_id: Uuid,
    draft: EmployeeDraft,
  ) -> Result<RosterEntry> {
    let position_id_str = encode_uuid(position_id);
    let start_date_str = encode_date(draft.start_date);

    let found = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let person_id_str: Option<String> = tx
          .query_row(
            "SELECT person_id FROM positions WHERE position_id = ?1",
            rusqlite::params![position_id_str],
            |r| r.get(0),
          )
          .optional()?;

        let Some(person_id_str) = person_id_str else {
          return Ok(false);
        };

        tx.execute(
          "UPDATE persons
              SET full_name = ?1, passport_series = ?2, passport_number = ?3,
                  address = ?4
            WHERE person_id = ?5",
          rusqlite::params![
            draft.full_name,
            draft.passport_series,
            draft.passport_number,
            draft.address,
            person_id_str,
          ],
        )?;

        let company_id_str = resolve_company(&tx, &draft.company)?;

        tx.execute(
          "UPDATE positions
              SET title = ?1, start_date = ?2, company_id = ?3
            WHERE position_id = ?4",
          rusqlite::params![
            draft.title,
            start_date_str,
            company_id_str,
            position_id_str,
          ],
        )?;

        tx.commit()?;
        Ok(true)
      })
      .await?;

    if !found {
      return Err(cadre_core::Error::PositionNotFound(position_id).into());
    }

    debug!(%position_id, "updated employee");
    self.entry_by_position(position_id).await
  }

  async fn delete_person(&self, person_id: Uuid) -> Result<()> {
    let id_str = encode_uuid(person_id);

    let deleted = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM persons WHERE person_id = ?1",
          rusqlite::params![id_str],
        )?)
      })
      .await?;

    if deleted == 0 {
      return Err(cadre_core::Error::PersonNotFound(person_id).into());
    }

    debug!(%person_id, "deleted person");
    Ok(())
  }
}
