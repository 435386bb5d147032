//! Integration tests for `SqliteStore` against an in-memory database.

use cadre_core::{
  employee::EmployeeDraft,
  store::{EmployeeStore, RosterQuery},
};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn draft(full_name: &str, company: &str) -> EmployeeDraft {
  EmployeeDraft {
    full_name:       full_name.into(),
    passport_series: "4509".into(),
    passport_number: "123456".into(),
    address:         "1 Main St".into(),
    company:         company.into(),
    title:           "Engineer".into(),
    start_date:      NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
  }
}

fn by_name(name: &str) -> RosterQuery {
  RosterQuery {
    name: Some(name.into()),
    ..Default::default()
  }
}

fn by_company(name: &str) -> RosterQuery {
  RosterQuery {
    company: Some(name.into()),
    ..Default::default()
  }
}

// ─── Adding ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_creates_one_company_and_one_position() {
  let s = store().await;

  let entry = s.add_employee(draft("Alice Liddell", "Initech")).await.unwrap();
  assert_eq!(entry.person.full_name, "Alice Liddell");
  assert_eq!(entry.company.name, "Initech");
  assert_eq!(entry.position.title, "Engineer");
  assert_eq!(entry.position.person_id, entry.person.person_id);
  assert_eq!(entry.position.company_id, entry.company.company_id);

  let companies = s.list_companies().await.unwrap();
  assert_eq!(companies.len(), 1);

  let all = s.search(&RosterQuery::default()).await.unwrap();
  assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn add_reuses_existing_company_row() {
  let s = store().await;

  let first = s.add_employee(draft("Alice Liddell", "Initech")).await.unwrap();
  let second = s.add_employee(draft("Bob Harris", "Initech")).await.unwrap();

  assert_eq!(first.company.company_id, second.company.company_id);

  let companies = s.list_companies().await.unwrap();
  assert_eq!(companies.len(), 1);

  let all = s.search(&RosterQuery::default()).await.unwrap();
  assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn companies_are_sorted_by_name() {
  let s = store().await;

  s.add_employee(draft("Alice Liddell", "Umbrella")).await.unwrap();
  s.add_employee(draft("Bob Harris", "Acme")).await.unwrap();
  s.add_employee(draft("Carol Danvers", "Initech")).await.unwrap();

  let names: Vec<_> = s
    .list_companies()
    .await
    .unwrap()
    .into_iter()
    .map(|c| c.name)
    .collect();
  assert_eq!(names, ["Acme", "Initech", "Umbrella"]);
}

// ─── Searching ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn search_by_name_substring_is_case_insensitive() {
  let s = store().await;

  s.add_employee(draft("Alice Johnson", "Initech")).await.unwrap();
  s.add_employee(draft("Bob Smith", "Initech")).await.unwrap();

  let hits = s.search(&by_name("JOHN")).await.unwrap();
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].person.full_name, "Alice Johnson");

  let hits = s.search(&by_name("smith")).await.unwrap();
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].person.full_name, "Bob Smith");

  let hits = s.search(&by_name("zzz")).await.unwrap();
  assert!(hits.is_empty());
}

#[tokio::test]
async fn filter_by_company_returns_only_that_companys_positions() {
  let s = store().await;

  s.add_employee(draft("Alice Liddell", "Initech")).await.unwrap();
  s.add_employee(draft("Bob Harris", "Globex")).await.unwrap();
  s.add_employee(draft("Carol Danvers", "Initech")).await.unwrap();

  let hits = s.search(&by_company("Initech")).await.unwrap();
  assert_eq!(hits.len(), 2);
  assert!(hits.iter().all(|e| e.company.name == "Initech"));

  // Exact match only — no substring behavior for companies.
  let hits = s.search(&by_company("Ini")).await.unwrap();
  assert!(hits.is_empty());
}

#[tokio::test]
async fn name_and_company_filters_compose() {
  let s = store().await;

  s.add_employee(draft("Alice Johnson", "Initech")).await.unwrap();
  s.add_employee(draft("Amy Johnson", "Globex")).await.unwrap();

  let q = RosterQuery {
    name:    Some("johnson".into()),
    company: Some("Globex".into()),
  };
  let hits = s.search(&q).await.unwrap();
  assert_eq!(hits.len(), 1);
  assert_eq!(hits[0].person.full_name, "Amy Johnson");
}

#[tokio::test]
async fn search_orders_by_person_name() {
  let s = store().await;

  s.add_employee(draft("Carol Danvers", "Initech")).await.unwrap();
  s.add_employee(draft("Alice Liddell", "Initech")).await.unwrap();
  s.add_employee(draft("Bob Harris", "Initech")).await.unwrap();

  let names: Vec<_> = s
    .search(&RosterQuery::default())
    .await
    .unwrap()
    .into_iter()
    .map(|e| e.person.full_name)
    .collect();
  assert_eq!(names, ["Alice Liddell", "Bob Harris", "Carol Danvers"]);
}

// ─── Point reads ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_person_roundtrip() {
  let s = store().await;

  let entry = s.add_employee(draft("Alice Liddell", "Initech")).await.unwrap();

  let person = s
    .get_person(entry.person.person_id)
    .await
    .unwrap()
    .expect("person exists");
  assert_eq!(person.full_name, "Alice Liddell");
  assert_eq!(person.passport_series, "4509");
  assert_eq!(person.passport_number, "123456");
  assert_eq!(person.address, "1 Main St");
}

#[tokio::test]
async fn get_person_missing_returns_none() {
  let s = store().await;
  let result = s.get_person(Uuid::new_v4()).await.unwrap();
  assert!(result.is_none());
}

// ─── Updating ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_rewrites_person_and_position_fields() {
  let s = store().await;

  let entry = s.add_employee(draft("Alice Liddell", "Initech")).await.unwrap();

  let mut upd = draft("Alice Kingsleigh", "Initech");
  upd.passport_series = "4510".into();
  upd.address = "9 Rabbit Hole".into();
  upd.title = "Staff Engineer".into();
  upd.start_date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();

  let updated = s
    .update_employee(entry.position.position_id, upd)
    .await
    .unwrap();

  // Same identities, new field values.
  assert_eq!(updated.person.person_id, entry.person.person_id);
  assert_eq!(updated.position.position_id, entry.position.position_id);
  assert_eq!(updated.person.full_name, "Alice Kingsleigh");
  assert_eq!(updated.person.passport_series, "4510");
  assert_eq!(updated.person.address, "9 Rabbit Hole");
  assert_eq!(updated.position.title, "Staff Engineer");
  assert_eq!(
    updated.position.start_date,
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
  );
}

#[tokio::test]
async fn update_to_new_company_creates_it_and_keeps_old_row() {
  let s = store().await;

  let entry = s.add_employee(draft("Alice Liddell", "Initech")).await.unwrap();

  let updated = s
    .update_employee(entry.position.position_id, draft("Alice Liddell", "Globex"))
    .await
    .unwrap();

  assert_eq!(updated.company.name, "Globex");
  assert_ne!(updated.company.company_id, entry.company.company_id);

  // The now-unreferenced Initech row is left in place.
  let names: Vec<_> = s
    .list_companies()
    .await
    .unwrap()
    .into_iter()
    .map(|c| c.name)
    .collect();
  assert_eq!(names, ["Globex", "Initech"]);
}

#[tokio::test]
async fn update_to_existing_company_reuses_it() {
  let s = store().await;

  let alice = s.add_employee(draft("Alice Liddell", "Initech")).await.unwrap();
  let bob = s.add_employee(draft("Bob Harris", "Globex")).await.unwrap();

  let updated = s
    .update_employee(alice.position.position_id, draft("Alice Liddell", "Globex"))
    .await
    .unwrap();

  assert_eq!(updated.company.company_id, bob.company.company_id);
  assert_eq!(s.list_companies().await.unwrap().len(), 2);
}

#[tokio::test]
async fn update_unknown_position_errors() {
  let s = store().await;

  let err = s
    .update_employee(Uuid::new_v4(), draft("Nobody", "Nowhere"))
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Domain(cadre_core::Error::PositionNotFound(_))
  ));

  // The transaction rolled back: no company row was created.
  assert!(s.list_companies().await.unwrap().is_empty());
}

// ─── Deleting ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_person_cascades_to_positions_and_spares_others() {
  let s = store().await;

  let alice = s.add_employee(draft("Alice Liddell", "Initech")).await.unwrap();
  s.add_employee(draft("Bob Harris", "Initech")).await.unwrap();

  s.delete_person(alice.person.person_id).await.unwrap();

  let all = s.search(&RosterQuery::default()).await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].person.full_name, "Bob Harris");

  assert!(
    s.get_person(alice.person.person_id).await.unwrap().is_none()
  );

  // Companies are untouched by a person delete.
  assert_eq!(s.list_companies().await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_unknown_person_errors() {
  let s = store().await;
  let err = s.delete_person(Uuid::new_v4()).await.unwrap_err();
  assert!(matches!(
    err,
    crate::Error::Domain(cadre_core::Error::PersonNotFound(_))
  ));
}
