//! Catalog list screen rendering
//!
//! Renders the accumulated species catalog with the current selection, how
//! much of the catalog has been loaded, and a footer with key hints or the
//! last error.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::CatalogEntry;

/// Renders the catalog list view
pub fn render_catalog_list(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_list(frame, app, chunks[1]);
    render_footer(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let progress = format!("{} / {} species", app.catalog_len(), app.catalog_size());
    let mut spans = vec![
        Span::styled(
            "Pokédex",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(progress, Style::default().fg(Color::DarkGray)),
    ];
    if app.store.is_loading() {
        spans.push(Span::styled(
            "  loading...",
            Style::default().fg(Color::Yellow),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let catalog = app.store.catalog();

    if catalog.is_empty() {
        let empty = Paragraph::new("No species loaded. Press n to try again.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = catalog
        .iter()
        .enumerate()
        .map(|(index, entry)| ListItem::new(entry_line(index, entry)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Species "))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(app.selected_index));
    frame.render_stateful_widget(list, area, &mut state);
}

/// `#001 bulbasaur`, numbered by catalog position
fn entry_line(index: usize, entry: &CatalogEntry) -> Line<'static> {
    let number = entry.species_id().unwrap_or(index as u32 + 1);
    Line::from(vec![
        Span::styled(
            format!("#{:03} ", number),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(entry.name.clone()),
    ])
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let footer = match &app.status_message {
        Some(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        )),
        None => {
            let more = if app.has_more() { "  n more" } else { "" };
            Line::from(Span::styled(
                format!("↑↓ select  Enter open{}  ? help  q quit", more),
                Style::default().fg(Color::DarkGray),
            ))
        }
    };
    frame.render_widget(Paragraph::new(footer), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(app: &App) -> String {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_catalog_list(frame, app))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_entries_and_progress() {
        let app = App::with_catalog(&["bulbasaur", "ivysaur", "venusaur"]);
        let content = render_to_string(&app);

        assert!(content.contains("Pokédex"));
        assert!(content.contains("3 / 807 species"));
        assert!(content.contains("#001"));
        assert!(content.contains("bulbasaur"));
        assert!(content.contains("venusaur"));
        assert!(content.contains("n more"));
    }

    #[test]
    fn test_renders_status_message_in_footer() {
        let mut app = App::with_catalog(&["bulbasaur"]);
        app.status_message = Some("Could not load more species".to_string());

        let content = render_to_string(&app);
        assert!(content.contains("Could not load more species"));
    }

    #[test]
    fn test_progress_uses_configured_catalog_size() {
        use crate::cli::StartupConfig;
        use crate::data::CatalogClient;

        let mut config = StartupConfig::default();
        config.dex.catalog_size = 3;
        let mut app = App::with_client(CatalogClient::without_cache(&config.dex), &config);
        app.store.append_catalog(["bulbasaur", "ivysaur", "venusaur"].iter().enumerate().map(
            |(i, name)| CatalogEntry {
                name: name.to_string(),
                url: format!("https://pokeapi.co/api/v2/pokemon-species/{}/", i + 1),
                image: String::new(),
            },
        ));
        app.state = crate::app::AppState::CatalogList;

        let content = render_to_string(&app);
        assert!(content.contains("3 / 3 species"));
        assert!(!content.contains("n more"));
    }

    #[test]
    fn test_renders_empty_catalog_hint() {
        let app = App::with_catalog(&[]);
        let content = render_to_string(&app);
        assert!(content.contains("No species loaded"));
    }

    #[test]
    fn test_entry_line_falls_back_to_position() {
        let entry = CatalogEntry {
            name: "mew".to_string(),
            url: String::new(),
            image: String::new(),
        };
        let line = entry_line(150, &entry);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "#151 mew");
    }
}
