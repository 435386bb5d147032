//! Modal dialogs — the employee form, delete confirmation, and messages.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{FIELD_LABELS, FORM_FIELDS, FormState};

/// Centered `width` × `height` rect clamped to `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
  let w = width.min(area.width);
  let h = height.min(area.height);
  Rect {
    x:      area.x + (area.width - w) / 2,
    y:      area.y + (area.height - h) / 2,
    width:  w,
    height: h,
  }
}

// ─── Employee form ────────────────────────────────────────────────────────────

/// Render the modal employee form over `area`.
pub fn draw_form(f: &mut Frame, area: Rect, form: &FormState) {
  let rect = centered_rect(56, FORM_FIELDS as u16 + 4, area);
  f.render_widget(Clear, rect);

  let block = Block::default()
    .title(form.title())
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Cyan));
  let inner = block.inner(rect);
  f.render_widget(block, rect);

  let mut lines: Vec<Line> = Vec::with_capacity(FORM_FIELDS + 2);

  for (i, label) in FIELD_LABELS.iter().enumerate() {
    let focused = i == form.focus;

    let label_style = if focused {
      Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(Color::Cyan)
    };

    let value = if focused {
      format!("{}_", form.fields[i])
    } else {
      form.fields[i].clone()
    };

    lines.push(Line::from(vec![
      Span::styled(format!("{:<17}", format!("{label}:")), label_style),
      Span::raw(value),
    ]));
  }

  lines.push(Line::from(""));
  lines.push(Line::from(Span::styled(
    "Enter save  Tab next  Esc cancel",
    Style::default().fg(Color::DarkGray),
  )));

  f.render_widget(Paragraph::new(lines), inner);
}

// ─── Delete confirmation ──────────────────────────────────────────────────────

/// Render the yes/no delete dialog over `area`.
pub fn draw_confirm(f: &mut Frame, area: Rect, full_name: &str) {
  let text = format!("Delete {full_name}?");
  let width = (text.chars().count() as u16 + 6).max(28);
  let rect = centered_rect(width, 5, area);
  f.render_widget(Clear, rect);

  let block = Block::default()
    .title(" Delete ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Red));
  let inner = block.inner(rect);
  f.render_widget(block, rect);

  let lines = vec![
    Line::from(text),
    Line::from(""),
    Line::from(Span::styled(
      "[y] delete  [n] cancel",
      Style::default().fg(Color::DarkGray),
    )),
  ];

  f.render_widget(Paragraph::new(lines), inner);
}

// ─── Message dialog ───────────────────────────────────────────────────────────

/// Render a blocking one-line message over `area`.
pub fn draw_message(f: &mut Frame, area: Rect, msg: &str) {
  let width = (msg.chars().count() as u16 + 6).clamp(28, area.width);
  let rect = centered_rect(width, 5, area);
  f.render_widget(Clear, rect);

  let block = Block::default()
    .title(" Notice ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Yellow));
  let inner = block.inner(rect);
  f.render_widget(block, rect);

  let lines = vec![
    Line::from(msg.to_string()),
    Line::from(""),
    Line::from(Span::styled(
      "press any key",
      Style::default().fg(Color::DarkGray),
    )),
  ];

  f.render_widget(Paragraph::new(lines), inner);
}
