//! Record detail screen rendering
//!
//! Shows the species header, one tab per variant, the selected variant's base
//! stats as bars, and a scrollable panel with types, abilities, measurements,
//! artwork links, Pokédex entries and the evolution chain.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::App;
use crate::data::reshape::{evolution_stages, WHITE_DISPLAY_COLOR};
use crate::data::{SpeciesRecord, VariantRecord};
use crate::ui::widgets::StatBar;

/// Maps a species color label to a terminal color
pub fn species_color(color: &str) -> Color {
    match color {
        WHITE_DISPLAY_COLOR => Color::Rgb(0xdd, 0xdd, 0xdd),
        "black" => Color::DarkGray,
        "blue" => Color::Blue,
        "brown" => Color::Rgb(0x8b, 0x5a, 0x2b),
        "gray" => Color::Gray,
        "green" => Color::Green,
        "pink" => Color::LightMagenta,
        "purple" => Color::Magenta,
        "red" => Color::Red,
        "yellow" => Color::Yellow,
        _ => Color::White,
    }
}

/// Renders the detail view for the record in the store
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let Some(record) = app.record() else {
        render_missing(frame, app, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, record, chunks[0]);
    render_tabs(frame, record, app.variant_index, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[2]);

    let variant = record.data.get(app.variant_index);
    render_stats(frame, variant, body[0]);
    render_info(frame, record, variant, app.detail_scroll_offset, body[1]);

    let footer = Paragraph::new(Line::from(Span::styled(
        "←→ variant  ↑↓ scroll  Esc back  ? help  q quit",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(footer, chunks[3]);
}

fn render_missing(frame: &mut Frame, app: &App, area: Rect) {
    let message = app
        .status_message
        .clone()
        .unwrap_or_else(|| "Not found".to_string());

    let lines = vec![
        Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc to go back",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_header(frame: &mut Frame, record: &SpeciesRecord, area: Rect) {
    let color = species_color(&record.color);
    let title = Line::from(vec![
        Span::styled(
            format!("#{:03} ", record.id),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            record.name.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::raw(record.display_name.clone()),
    ]);
    let subtitle = Line::from(vec![
        Span::styled(record.category.clone(), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(record.default_image.clone(), Style::default().fg(Color::DarkGray)),
    ]);

    let header = Paragraph::new(vec![title, subtitle]).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_tabs(frame: &mut Frame, record: &SpeciesRecord, selected: usize, area: Rect) {
    let titles: Vec<String> = record.data.iter().map(|v| v.name.clone()).collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Variants "))
        .select(selected)
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, area);
}

fn render_stats(frame: &mut Frame, variant: Option<&VariantRecord>, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Base stats ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(variant) = variant else {
        frame.render_widget(
            Paragraph::new("No variant data").style(Style::default().fg(Color::DarkGray)),
            inner,
        );
        return;
    };

    for (row, stat) in variant.stats.iter().enumerate() {
        let y = inner.y + row as u16;
        if y >= inner.bottom() {
            return;
        }
        let bar = StatBar::new(&stat.name, stat.base_stat)
            .highlighted(stat.base_stat == variant.highest_stat);
        frame.render_widget(bar, Rect::new(inner.x, y, inner.width, 1));
    }

    let total_y = inner.y + variant.stats.len() as u16 + 1;
    if total_y < inner.bottom() {
        let total = Line::from(vec![
            Span::styled("total ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(variant.total_stats.to_string()),
            Span::styled("  highest ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(variant.highest_stat.to_string()),
        ]);
        frame.render_widget(
            Paragraph::new(total),
            Rect::new(inner.x, total_y, inner.width, 1),
        );
    }
}

/// Lines of the scrollable info panel
pub fn info_lines(record: &SpeciesRecord, variant: Option<&VariantRecord>) -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();

    if let Some(variant) = variant {
        let types: Vec<String> = variant.types.iter().map(|t| t.kind.name.clone()).collect();
        lines.push(Line::from(vec![
            Span::styled("Type      ", bold),
            Span::raw(types.join(" / ")),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Abilities ", bold),
            Span::raw(variant.abilities.clone()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Height    ", bold),
            Span::raw(variant.height.clone()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Weight    ", bold),
            Span::raw(variant.weight.clone()),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Artwork", bold)));
        for image in &variant.images {
            let label = if image.form_name.is_empty() {
                "default".to_string()
            } else {
                image.form_name.trim_start_matches('-').to_string()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<10} ", label), Style::default().fg(Color::Yellow)),
                Span::styled(image.image.clone(), Style::default().fg(Color::DarkGray)),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled("Evolution", bold)));
    let stages = evolution_stages(&record.evo);
    if stages.is_empty() {
        lines.push(Line::from(Span::styled(
            "  none",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        let chain: Vec<String> = stages.iter().map(|stage| stage.join(" / ")).collect();
        lines.push(Line::from(format!("  {}", chain.join(" → "))));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Pokédex entries", bold)));
    for description in &record.descriptions {
        lines.push(Line::from(format!("  {}", description.trim())));
    }

    lines
}

fn render_info(
    frame: &mut Frame,
    record: &SpeciesRecord,
    variant: Option<&VariantRecord>,
    scroll: u16,
    area: Rect,
) {
    let lines = info_lines(record, variant);
    let max_scroll = (lines.len() as u16).saturating_sub(area.height.saturating_sub(2));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false })
        .scroll((scroll.min(max_scroll), 0));
    frame.render_widget(paragraph, area);
}
