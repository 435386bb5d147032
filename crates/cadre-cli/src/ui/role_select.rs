//! Role selection screen — the first thing the user sees.

use cadre_core::role::Role;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::App;

const ROLES: [Role; 2] = [Role::Administrator, Role::Manager];

/// Render the role chooser centered in `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let width = 36.min(area.width);
  let height = 7.min(area.height);
  let rect = Rect {
    x:      area.x + (area.width.saturating_sub(width)) / 2,
    y:      area.y + (area.height.saturating_sub(height)) / 2,
    width,
    height,
  };

  let block = Block::default()
    .title(" Choose a role ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let mut inner = block.inner(rect);
  f.render_widget(block, rect);

  // One-line prompt above the list.
  if inner.height > 2 {
    let prompt = Rect { height: 1, ..inner };
    f.render_widget(
      Paragraph::new(Line::from(Span::styled(
        "The role controls which actions are shown.",
        Style::default().fg(Color::DarkGray),
      ))),
      prompt,
    );
    inner.y += 2;
    inner.height -= 2;
  }

  let items: Vec<ListItem> = ROLES
    .iter()
    .map(|role| ListItem::new(Line::from(Span::raw(format!("  {}", role.label())))))
    .collect();

  let mut state = ListState::default();
  state.select(Some(app.role_cursor));

  f.render_stateful_widget(
    List::new(items)
      .highlight_style(
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("▸"),
    inner,
    &mut state,
  );
}
