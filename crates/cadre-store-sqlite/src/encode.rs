//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! UUIDs are stored as hyphenated lowercase strings; dates as `%Y-%m-%d`
//! strings, which is also the format the table displays.

use cadre_core::employee::{Company, Person, Position, RosterEntry};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── NaiveDate ───────────────────────────────────────────────────────────────

pub fn encode_date(d: NaiveDate) -> String { d.format("%Y-%m-%d").to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `persons` row.
pub struct RawPerson {
  pub person_id:       String,
  pub full_name:       String,
  pub passport_series: String,
  pub passport_number: String,
  pub address:         String,
}

impl RawPerson {
  pub fn into_person(self) -> Result<Person> {
    Ok(Person {
      person_id:       decode_uuid(&self.person_id)?,
      full_name:       self.full_name,
      passport_series: self.passport_series,
      passport_number: self.passport_number,
      address:         self.address,
    })
  }
}

/// Raw strings read directly from a `companies` row.
pub struct RawCompany {
  pub company_id: String,
  pub name:       String,
}

impl RawCompany {
  pub fn into_company(self) -> Result<Company> {
    Ok(Company {
      company_id: decode_uuid(&self.company_id)?,
      name:       self.name,
    })
  }
}

/// Raw strings from a `positions` row joined with both of its parents.
pub struct RawEntry {
  pub position_id: String,
  pub title:       String,
  pub start_date:  String,
  pub person:      RawPerson,
  pub company:     RawCompany,
}

impl RawEntry {
  pub fn into_entry(self) -> Result<RosterEntry> {
    let person = self.person.into_person()?;
    let company = self.company.into_company()?;
    let position = Position {
      position_id: decode_uuid(&self.position_id)?,
      title:       self.title,
      start_date:  decode_date(&self.start_date)?,
      person_id:   person.person_id,
      company_id:  company.company_id,
    };
    Ok(RosterEntry { person, company, position })
  }
}
