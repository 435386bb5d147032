//! Application state machine and event dispatcher.

use cadre_core::{
  employee::{Company, EmployeeDraft, RosterEntry},
  role::Role,
  store::{EmployeeStore, RosterQuery},
};
use cadre_store_sqlite::SqliteStore;
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;
use uuid::Uuid;

// ─── Screen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
  /// The opening screen: pick Administrator or Manager.
  RoleSelect,
  /// The roster table with search and company filter.
  Roster,
}

// ─── Employee form ────────────────────────────────────────────────────────────

pub const FORM_FIELDS: usize = 7;

/// Field labels in form order; the last field is the start date.
pub const FIELD_LABELS: [&str; FORM_FIELDS] = [
  "Full name",
  "Passport series",
  "Passport number",
  "Address",
  "Company",
  "Position",
  "Start date",
];

const DATE_FMT: &str = "%Y-%m-%d";

/// State of the modal employee form.
pub struct FormState {
  /// One text buffer per field, in [`FIELD_LABELS`] order.
  pub fields:  [String; FORM_FIELDS],
  /// Index of the focused field.
  pub focus:   usize,
  /// `Some(position_id)` when editing an existing row, `None` when adding.
  pub editing: Option<Uuid>,
}

impl FormState {
  /// An empty form with the start date prefilled to today.
  pub fn blank() -> Self {
    let mut fields: [String; FORM_FIELDS] = Default::default();
    fields[6] = Local::now().date_naive().format(DATE_FMT).to_string();
    Self { fields, focus: 0, editing: None }
  }

  /// A form prefilled from the selected roster row.
  pub fn prefilled(entry: &RosterEntry) -> Self {
    Self {
      fields:  [
        entry.person.full_name.clone(),
        entry.person.passport_series.clone(),
        entry.person.passport_number.clone(),
        entry.person.address.clone(),
        entry.company.name.clone(),
        entry.position.title.clone(),
        entry.position.start_date.format(DATE_FMT).to_string(),
      ],
      focus:   0,
      editing: Some(entry.position.position_id),
    }
  }

  pub fn title(&self) -> &'static str {
    if self.editing.is_some() {
      " Edit employee "
    } else {
      " New employee "
    }
  }

  /// Turn the buffers into a draft. Fails only on an unparseable start
  /// date — there is no other field validation.
  pub fn to_draft(&self) -> Result<EmployeeDraft, String> {
    let raw_date = self.fields[6].trim();
    let start_date = NaiveDate::parse_from_str(raw_date, DATE_FMT)
      .map_err(|_| format!("Invalid start date {raw_date:?} (expected YYYY-MM-DD)."))?;

    Ok(EmployeeDraft {
      full_name:       self.fields[0].clone(),
      passport_series: self.fields[1].clone(),
      passport_number: self.fields[2].clone(),
      address:         self.fields[3].clone(),
      company:         self.fields[4].clone(),
      title:           self.fields[5].clone(),
      start_date,
    })
  }
}

// ─── Modals ───────────────────────────────────────────────────────────────────

/// A dialog drawn over the roster; input goes to it exclusively.
pub enum Modal {
  Form(FormState),
  ConfirmDelete { person_id: Uuid, full_name: String },
  Message(String),
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// Current screen.
  pub screen: Screen,

  /// Role picked on the opening screen; gates which action keys work.
  pub role: Option<Role>,

  /// Cursor on the role-select screen (0 = Administrator, 1 = Manager).
  pub role_cursor: usize,

  /// Current search text; re-queries the store on every change.
  pub search: String,

  /// Whether keystrokes go into the search box.
  pub search_active: bool,

  /// Companies backing the filter, sorted by name.
  pub companies: Vec<Company>,

  /// Company filter position: 0 = all companies, i > 0 = companies[i - 1].
  pub company_idx: usize,

  /// Roster rows currently displayed.
  pub entries: Vec<RosterEntry>,

  /// Cursor position within `entries`.
  pub table_cursor: usize,

  /// Active modal dialog, if any.
  pub modal: Option<Modal>,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  /// Store handle opened in `main`; cheap to clone, dropped at shutdown.
  pub store: SqliteStore,
}

impl App {
  /// Create an [`App`] on the role-select screen with an empty roster.
  pub fn new(store: SqliteStore) -> Self {
    Self {
      screen: Screen::RoleSelect,
      role: None,
      role_cursor: 0,
      search: String::new(),
      search_active: false,
      companies: Vec::new(),
      company_idx: 0,
      entries: Vec::new(),
      table_cursor: 0,
      modal: None,
      status_msg: String::new(),
      store,
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// The query matching the current search text and company filter.
  fn query(&self) -> RosterQuery {
    RosterQuery::from_inputs(&self.search, self.company_filter())
  }

  /// The company name selected in the filter, or `None` for "all".
  pub fn company_filter(&self) -> Option<&str> {
    (self.company_idx > 0)
      .then(|| self.companies.get(self.company_idx - 1))
      .flatten()
      .map(|c| c.name.as_str())
  }

  /// Re-query both the company list and the roster in full. Called after
  /// every mutation and every filter change; there is no incremental
  /// update path.
  pub async fn reload(&mut self) {
    match self.store.list_companies().await {
      Ok(companies) => {
        self.companies = companies;
        if self.company_idx > self.companies.len() {
          self.company_idx = 0;
        }
      }
      Err(e) => {
        warn!(error = %e, "company reload failed");
        self.modal = Some(Modal::Message(format!("Storage error: {e}")));
        return;
      }
    }

    let query = self.query();
    match self.store.search(&query).await {
      Ok(entries) => {
        self.entries = entries;
        if self.table_cursor >= self.entries.len() {
          self.table_cursor = self.entries.len().saturating_sub(1);
        }
      }
      Err(e) => {
        warn!(error = %e, "roster reload failed");
        self.modal = Some(Modal::Message(format!("Storage error: {e}")));
      }
    }
  }

  /// The roster row under the table cursor, if any.
  pub fn selected_entry(&self) -> Option<&RosterEntry> {
    self.entries.get(self.table_cursor)
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return Ok(false);
    }

    // A modal captures all input while open.
    if self.modal.is_some() {
      self.handle_modal_key(key).await;
      return Ok(true);
    }

    match self.screen {
      Screen::RoleSelect => self.handle_role_key(key).await,
      Screen::Roster if self.search_active => {
        self.handle_search_key(key).await;
        Ok(true)
      }
      Screen::Roster => self.handle_roster_key(key).await,
    }
  }

  async fn handle_role_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      KeyCode::Char('q') => return Ok(false),

      KeyCode::Down | KeyCode::Char('j') | KeyCode::Up | KeyCode::Char('k') | KeyCode::Tab => {
        self.role_cursor = 1 - self.role_cursor;
      }

      KeyCode::Enter => {
        let role = if self.role_cursor == 0 {
          Role::Administrator
        } else {
          Role::Manager
        };
        self.role = Some(role);
        self.screen = Screen::Roster;
        self.status_msg = String::new();
        self.reload().await;
      }

      _ => {}
    }
    Ok(true)
  }

  async fn handle_search_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.search_active = false;
        self.search.clear();
        self.table_cursor = 0;
        self.reload().await;
      }
      KeyCode::Enter => {
        self.search_active = false;
      }
      KeyCode::Backspace => {
        self.search.pop();
        self.table_cursor = 0;
        self.reload().await;
      }
      KeyCode::Char(c) => {
        self.search.push(c);
        self.table_cursor = 0;
        self.reload().await;
      }
      _ => {}
    }
  }

  async fn handle_roster_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    let role = self.role.unwrap_or(Role::Manager);

    match key.code {
      // Quit
      KeyCode::Char('q') => return Ok(false),

      // Navigation
      KeyCode::Down | KeyCode::Char('j') => {
        if !self.entries.is_empty() && self.table_cursor + 1 < self.entries.len() {
          self.table_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        if self.table_cursor > 0 {
          self.table_cursor -= 1;
        }
      }

      // Search
      KeyCode::Char('/') => {
        self.search_active = true;
        self.search.clear();
        self.table_cursor = 0;
        self.reload().await;
      }

      // Company filter: cycle forward / backward through the dropdown.
      KeyCode::Tab => {
        self.company_idx = (self.company_idx + 1) % (self.companies.len() + 1);
        self.table_cursor = 0;
        self.reload().await;
      }
      KeyCode::BackTab => {
        let n = self.companies.len() + 1;
        self.company_idx = (self.company_idx + n - 1) % n;
        self.table_cursor = 0;
        self.reload().await;
      }

      // Actions, gated by role.
      KeyCode::Char('a') if role.can_add() => {
        self.modal = Some(Modal::Form(FormState::blank()));
      }
      KeyCode::Char('e') if role.can_edit() => {
        self.modal = Some(match self.selected_entry() {
          Some(entry) => Modal::Form(FormState::prefilled(entry)),
          None => Modal::Message("Select an employee first.".into()),
        });
      }
      KeyCode::Char('d') if role.can_delete() => {
        self.modal = Some(match self.selected_entry() {
          Some(entry) => Modal::ConfirmDelete {
            person_id: entry.person.person_id,
            full_name: entry.person.full_name.clone(),
          },
          None => Modal::Message("Select an employee first.".into()),
        });
      }

      _ => {}
    }
    Ok(true)
  }

  async fn handle_modal_key(&mut self, key: KeyEvent) {
    match self.modal.take() {
      Some(Modal::Message(_)) | None => {
        // Any key dismisses a message.
      }

      Some(Modal::ConfirmDelete { person_id, full_name }) => match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
          self.delete(person_id, &full_name).await;
        }
        KeyCode::Char('n') | KeyCode::Esc => {}
        _ => {
          self.modal = Some(Modal::ConfirmDelete { person_id, full_name });
        }
      },

      Some(Modal::Form(mut form)) => match key.code {
        KeyCode::Esc => {
          self.status_msg = String::new();
        }
        KeyCode::Enter => {
          self.submit_form(form).await;
        }
        KeyCode::Tab | KeyCode::Down => {
          form.focus = (form.focus + 1) % FORM_FIELDS;
          self.modal = Some(Modal::Form(form));
        }
        KeyCode::BackTab | KeyCode::Up => {
          form.focus = (form.focus + FORM_FIELDS - 1) % FORM_FIELDS;
          self.modal = Some(Modal::Form(form));
        }
        KeyCode::Backspace => {
          form.fields[form.focus].pop();
          self.modal = Some(Modal::Form(form));
        }
        KeyCode::Char(c) => {
          form.fields[form.focus].push(c);
          self.modal = Some(Modal::Form(form));
        }
        _ => {
          self.modal = Some(Modal::Form(form));
        }
      },
    }
  }

  // ── Mutations ─────────────────────────────────────────────────────────────

  /// Confirm the form: run the add or update, then reload everything.
  async fn submit_form(&mut self, form: FormState) {
    let draft = match form.to_draft() {
      Ok(draft) => draft,
      Err(msg) => {
        // Keep the form open; the status bar shows what went wrong.
        self.status_msg = msg;
        self.modal = Some(Modal::Form(form));
        return;
      }
    };

    let result = match form.editing {
      Some(position_id) => self.store.update_employee(position_id, draft).await,
      None => self.store.add_employee(draft).await,
    };

    match result {
      Ok(entry) => {
        self.status_msg = format!("Saved {}.", entry.person.full_name);
        self.reload().await;
      }
      Err(e) => {
        warn!(error = %e, "save failed");
        self.modal = Some(Modal::Message(format!("Storage error: {e}")));
      }
    }
  }

  async fn delete(&mut self, person_id: Uuid, full_name: &str) {
    match self.store.delete_person(person_id).await {
      Ok(()) => {
        self.status_msg = format!("Deleted {full_name}.");
        self.reload().await;
      }
      Err(e) => {
        warn!(error = %e, "delete failed");
        self.modal = Some(Modal::Message(format!("Storage error: {e}")));
      }
    }
  }
}
