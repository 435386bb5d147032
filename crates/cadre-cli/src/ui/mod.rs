//! TUI rendering — orchestrates all panes.

pub mod form;
pub mod role_select;
pub mod roster;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::app::{App, Modal, Screen};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app);

  match app.screen {
    Screen::RoleSelect => role_select::draw(f, rows[1], app),
    Screen::Roster => roster::draw(f, rows[1], app),
  }

  draw_status(f, rows[2], app);

  // Modals render last, over everything else.
  match &app.modal {
    Some(Modal::Form(state)) => form::draw_form(f, rows[1], state),
    Some(Modal::ConfirmDelete { full_name, .. }) => {
      form::draw_confirm(f, rows[1], full_name)
    }
    Some(Modal::Message(msg)) => form::draw_message(f, rows[1], msg),
    None => {}
  }
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    " cadre  employee roster",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );

  let right_text = match app.role {
    Some(role) => format!("{}  {date} ", role.label()),
    None => format!("{date} "),
  };
  let right = Span::styled(right_text, Style::default().fg(Color::Gray));

  // Simple left-right header: pad the middle.
  let left_width = left.content.len() as u16;
  let right_width = right.content.len() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![
    left,
    Span::raw(" ".repeat(pad as usize)),
    right,
  ]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match (&app.modal, app.screen) {
    (Some(Modal::Form(_)), _) => (
      "FORM",
      "Type to edit  Tab next field  Enter save  Esc cancel".to_string(),
    ),
    (Some(Modal::ConfirmDelete { .. }), _) => {
      ("CONFIRM", "y delete  n cancel".to_string())
    }
    (Some(Modal::Message(_)), _) => ("NOTICE", "any key to dismiss".to_string()),
    (None, Screen::RoleSelect) => (
      "ROLE",
      "↑↓/jk select  Enter confirm  q quit".to_string(),
    ),
    (None, Screen::Roster) if app.search_active => (
      "SEARCH",
      "Type to filter  Esc clear  Enter done".to_string(),
    ),
    (None, Screen::Roster) => ("NORMAL", roster_hints(app)),
  };

  let status = if app.status_msg.is_empty() {
    hints
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(
    format!("  {status}"),
    Style::default().fg(Color::DarkGray),
  );

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}

/// Roster hints, with action keys present only for the current role.
fn roster_hints(app: &App) -> String {
  let mut hints = vec!["↑↓/jk navigate", "/ search", "Tab company"];

  if let Some(role) = app.role {
    if role.can_add() {
      hints.push("a add");
    }
    if role.can_edit() {
      hints.push("e edit");
    }
    if role.can_delete() {
      hints.push("d delete");
    }
  }

  hints.push("q quit");
  hints.join("  ")
}
