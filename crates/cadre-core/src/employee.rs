//! Domain records — people, companies, and the positions linking them.
//!
//! A position references exactly one person and one company. The storage
//! layer enforces this with foreign keys and removes positions when either
//! parent is deleted; nothing here re-validates it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An individual employee record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
  pub person_id:       Uuid,
  pub full_name:       String,
  pub passport_series: String,
  pub passport_number: String,
  pub address:         String,
}

/// An employer, referenced by unique name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
  pub company_id: Uuid,
  pub name:       String,
}

/// Links one person to one company with a title and a start date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Position {
  pub position_id: Uuid,
  pub title:       String,
  pub start_date:  NaiveDate,
  pub person_id:   Uuid,
  pub company_id:  Uuid,
}

/// One row of the roster view — a position joined with its person and
/// company. Never stored, always derived by the store's search query.
///
/// The embedded ids are what edit and delete operations key on; the
/// displayed text fields are not identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
  pub person:   Person,
  pub company:  Company,
  pub position: Position,
}

/// The seven form fields captured when adding or editing an employee.
///
/// `company` is a name, not an id: the store resolves it against existing
/// company rows by exact match and creates a new row when none matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeDraft {
  pub full_name:       String,
  pub passport_series: String,
  pub passport_number: String,
  pub address:         String,
  pub company:         String,
  pub title:           String,
  pub start_date:      NaiveDate,
}
