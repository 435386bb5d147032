//! Roster screen — search bar, company filter, and the employee table.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Row, Table, TableState},
};

use crate::app::App;

/// Render the roster screen into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(3), // search + company filter
      Constraint::Min(0),    // table
    ])
    .split(area);

  draw_filters(f, rows[0], app);
  draw_table(f, rows[1], app);
}

// ─── Filter row ───────────────────────────────────────────────────────────────

fn draw_filters(f: &mut Frame, area: Rect, app: &App) {
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Min(0), Constraint::Length(32)])
    .split(area);

  // Search box; a cursor marker shows while it has focus.
  let search_text = if app.search_active {
    format!("{}_", app.search)
  } else if app.search.is_empty() {
    "Search by name…".to_string()
  } else {
    app.search.clone()
  };

  let search_style = if app.search_active {
    Style::default().fg(Color::Yellow)
  } else if app.search.is_empty() {
    Style::default().fg(Color::DarkGray)
  } else {
    Style::default()
  };

  let search_block = Block::default()
    .title(" Search [/] ")
    .borders(Borders::ALL)
    .border_style(if app.search_active {
      Style::default().fg(Color::Yellow)
    } else {
      Style::default().fg(Color::DarkGray)
    });
  let search_inner = search_block.inner(cols[0]);
  f.render_widget(search_block, cols[0]);
  f.render_widget(
    Paragraph::new(Line::from(Span::styled(search_text, search_style))),
    search_inner,
  );

  // Company filter; Tab cycles through "All companies" + the list.
  let company_text = app.company_filter().unwrap_or("All companies").to_string();

  let company_block = Block::default()
    .title(" Company [Tab] ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));
  let company_inner = company_block.inner(cols[1]);
  f.render_widget(company_block, cols[1]);
  f.render_widget(Paragraph::new(company_text), company_inner);
}

// ─── Table ────────────────────────────────────────────────────────────────────

const HEADERS: [&str; 7] = [
  "Full name",
  "Series",
  "Number",
  "Address",
  "Company",
  "Position",
  "Start date",
];

fn draw_table(f: &mut Frame, area: Rect, app: &App) {
  let block = Block::default()
    .title(format!(" Employees ({}) ", app.entries.len()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let header = Row::new(HEADERS).style(
    Style::default()
      .fg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );

  let rows: Vec<Row> = app
    .entries
    .iter()
    .map(|e| {
      Row::new([
        e.person.full_name.clone(),
        e.person.passport_series.clone(),
        e.person.passport_number.clone(),
        e.person.address.clone(),
        e.company.name.clone(),
        e.position.title.clone(),
        e.position.start_date.format("%Y-%m-%d").to_string(),
      ])
    })
    .collect();

  let widths = [
    Constraint::Percentage(20),
    Constraint::Length(7),
    Constraint::Length(8),
    Constraint::Percentage(22),
    Constraint::Percentage(18),
    Constraint::Percentage(18),
    Constraint::Length(10),
  ];

  let mut state = TableState::default();
  state.select(if app.entries.is_empty() {
    None
  } else {
    Some(app.table_cursor)
  });

  f.render_stateful_widget(
    Table::new(rows, widths)
      .header(header)
      .block(block)
      .row_highlight_style(
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      ),
    area,
    &mut state,
  );
}
