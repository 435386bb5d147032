//! The `EmployeeStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g.
//! `cadre-store-sqlite`). The UI depends on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::employee::{Company, EmployeeDraft, Person, RosterEntry};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`EmployeeStore::search`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterQuery {
  /// Case-insensitive substring filter on the person's full name.
  pub name:    Option<String>,
  /// Exact-match filter on the company name.
  pub company: Option<String>,
}

impl RosterQuery {
  /// Build a query from raw UI inputs, dropping a blank name filter.
  ///
  /// `company` is `None` when the "all companies" filter entry is active.
  pub fn from_inputs(name: &str, company: Option<&str>) -> Self {
    let name = name.trim();
    Self {
      name:    (!name.is_empty()).then(|| name.to_owned()),
      company: company.map(str::to_owned),
    }
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over an employee roster backend.
///
/// Every operation opens its own short-lived storage session; multi-row
/// mutations are atomic within a single transaction. Edit and delete key on
/// persisted ids, never on displayed text.
///
/// All methods return `Send` futures so the trait can be used from
/// multi-threaded async runtimes.
pub trait EmployeeStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// List all companies, sorted by name.
  fn list_companies(
    &self,
  ) -> impl Future<Output = Result<Vec<Company>, Self::Error>> + Send + '_;

  /// List positions joined with their person and company, filtered by
  /// `query`. Results are ordered by person name, then start date, so the
  /// table stays stable across reloads.
  fn search<'a>(
    &'a self,
    query: &'a RosterQuery,
  ) -> impl Future<Output = Result<Vec<RosterEntry>, Self::Error>> + Send + 'a;

  /// Retrieve a person by id. Returns `None` if not found.
  fn get_person(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  // ── Mutations ─────────────────────────────────────────────────────────

  /// Insert a person, their position, and the named company if no company
  /// row with that exact name exists yet — all within one transaction.
  fn add_employee(
    &self,
    draft: EmployeeDraft,
  ) -> impl Future<Output = Result<RosterEntry, Self::Error>> + Send + '_;

  /// Update the person and position behind an existing roster row,
  /// reattaching the position to a new-or-existing company.
  ///
  /// Returns an error if `position_id` does not exist. The previous
  /// company row is left in place even if nothing references it anymore.
  fn update_employee(
    &self,
    position_id: Uuid,
    draft: EmployeeDraft,
  ) -> impl Future<Output = Result<RosterEntry, Self::Error>> + Send + '_;

  /// Delete a person; their positions are removed by cascade.
  ///
  /// Returns an error if `person_id` does not exist.
  fn delete_person(
    &self,
    person_id: Uuid,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}

#[cfg(test)]
mod tests {
  use super::RosterQuery;

  #[test]
  fn blank_name_input_becomes_no_filter() {
    let q = RosterQuery::from_inputs("   ", None);
    assert_eq!(q, RosterQuery::default());
  }

  #[test]
  fn name_input_is_trimmed() {
    let q = RosterQuery::from_inputs("  smith ", Some("Initech"));
    assert_eq!(q.name.as_deref(), Some("smith"));
    assert_eq!(q.company.as_deref(), Some("Initech"));
  }
}
