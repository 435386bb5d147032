//! SQL schema for the cadre SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS persons (
    person_id       TEXT PRIMARY KEY,
    full_name       TEXT NOT NULL,
    passport_series TEXT NOT NULL,
    passport_number TEXT NOT NULL,
    address         TEXT NOT NULL
);

-- Company names are unique; lookups are exact-match on name.
CREATE TABLE IF NOT EXISTS companies (
    company_id TEXT PRIMARY KEY,
    name       TEXT NOT NULL UNIQUE
);

-- A position references exactly one person and one company. Deleting
-- either parent removes the position.
CREATE TABLE IF NOT EXISTS positions (
    position_id TEXT PRIMARY KEY,
    title       TEXT NOT NULL,
    start_date  TEXT NOT NULL,    -- ISO 8601 date, e.g. 2024-03-01
    person_id   TEXT NOT NULL REFERENCES persons(person_id)    ON DELETE CASCADE,
    company_id  TEXT NOT NULL REFERENCES companies(company_id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS positions_person_idx  ON positions(person_id);
CREATE INDEX IF NOT EXISTS positions_company_idx ON positions(company_id);

PRAGMA user_version = 1;
";
