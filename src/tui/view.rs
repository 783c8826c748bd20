// File: src/tui/view.rs
use crate::model::display::{MISSING_SUMMARY, ProcedureDisplay, truncate_ellipsis};
use crate::tui::state::{AppState, FilterRow, InputMode};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    // --- 1. Prepare Details Text ---
    let mut full_details = String::new();
    if let Some(procedure) = state.get_selected_procedure() {
        full_details.push_str(&procedure.title);
        full_details.push_str("\n\n");
        full_details.push_str(&format!("Reference: {}\n", procedure.reference));
        if !procedure.stage.is_empty() {
            full_details.push_str(&format!("Stage: {}\n", procedure.stage));
        }
        full_details.push_str(&format!("Status: {}\n", procedure.status.label()));
        full_details.push_str(&format!("Latest event: {}\n", procedure.date_label));
        if !procedure.subject_names.is_empty() {
            full_details.push_str(&format!(
                "Subjects: {}\n",
                procedure.subject_names.join(", ")
            ));
        }
        full_details.push('\n');
        match &procedure.summary {
            Some(text) => full_details.push_str(text),
            None => full_details.push_str(MISSING_SUMMARY),
        }
    }
    if full_details.is_empty() {
        full_details = "No procedure selected.".to_string();
    }

    // --- 2. Calculate Dynamic Height ---
    let details_width = v_chunks[0].width.saturating_sub(2); // subtract borders
    let mut required_lines: u16 = 0;

    if details_width > 0 {
        for line in full_details.lines() {
            let line_len = line.chars().count() as u16;
            if line_len == 0 {
                required_lines += 1;
            } else {
                required_lines += line_len.div_ceil(details_width);
            }
        }
    }

    let calculated_height = required_lines + 2;
    let available_height = v_chunks[0].height;
    let max_details_height = available_height / 2;
    let final_details_height = calculated_height.clamp(3, max_details_height.max(3));

    // --- 3. Dynamic Layout ---
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                       // Procedure list takes remaining space
            Constraint::Length(final_details_height), // Details takes only what it needs
        ])
        .split(v_chunks[0]);

    // --- Procedure List Rendering ---
    let list_inner_width = main_chunks[0].width.saturating_sub(2) as usize;

    let procedure_items: Vec<ListItem> = state
        .procedures
        .iter()
        .map(|p| {
            let status_style = if p.status.is_completed() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Yellow)
            };

            let badges = p.subject_badges();
            // Fixed columns: symbol + gap, reference + gap, date + gap.
            let fixed = 4 + p.reference.chars().count() + 2 + p.date_label.chars().count() + 2;
            let badge_room = if badges.is_empty() {
                0
            } else {
                badges.chars().count() + 1
            };
            let title_room = list_inner_width.saturating_sub(fixed + badge_room);

            let mut spans = vec![
                Span::styled(p.status.symbol(), status_style),
                Span::raw(" "),
                Span::styled(
                    p.reference.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(p.date_label.clone(), Style::default().fg(Color::Blue)),
                Span::raw("  "),
                Span::raw(truncate_ellipsis(&p.title, title_room)),
            ];

            if !badges.is_empty() {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(badges, Style::default().fg(Color::DarkGray)));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let mut title = format!(
        " Procedures ({}/{}) ",
        state.procedures.len(),
        state.store.len()
    );
    if state.filters.is_active() {
        title.push_str("[filtered] ");
    }

    let procedure_list = List::new(procedure_items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::Green)
                .fg(Color::Black),
        );
    f.render_stateful_widget(procedure_list, main_chunks[0], &mut state.list_state);

    // Details
    let details = Paragraph::new(full_details)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Details "));
    f.render_widget(details, main_chunks[1]);

    // Footer
    let footer_area = v_chunks[1];
    f.render_widget(Clear, footer_area);

    let status_text = match state.filters.active_summary() {
        Some(summary) => format!("{} [{}]", state.message, summary),
        None => state.message.clone(),
    };
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                .title(" Status "),
        );
    let help_str = match state.mode {
        InputMode::Filtering => "Esc/f:Close Spc:Toggle j/k:Move r:Reset o:Order",
        InputMode::Normal => "q:Quit f:Filter o:Order r:Reset R:Reload j/k:Move",
    };
    let help = Paragraph::new(help_str).alignment(Alignment::Right).block(
        Block::default()
            .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
            .title(" Actions "),
    );

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(footer_area);
    f.render_widget(status, chunks[0]);
    f.render_widget(help, chunks[1]);

    // --- FILTER POPUP ---
    if state.mode == InputMode::Filtering {
        let area = centered_rect(50, 70, f.area());
        let items: Vec<ListItem> = state
            .filter_rows
            .iter()
            .map(|row| match row {
                FilterRow::Header(group) => ListItem::new(Line::from(Span::styled(
                    group.title(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))),
                FilterRow::Option(option) => {
                    let selected = state.filters.is_selected(option.group, &option.value);
                    let mark = if option.group.is_exclusive() {
                        if selected { "(x)" } else { "( )" }
                    } else if selected {
                        "[x]"
                    } else {
                        "[ ]"
                    };
                    ListItem::new(Line::from(format!(" {} {}", mark, option.label)))
                }
            })
            .collect();
        let popup = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Filters "))
            .highlight_style(Style::default().bg(Color::Blue));
        f.render_widget(Clear, area);
        f.render_stateful_widget(popup, area, &mut state.filter_cursor);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
