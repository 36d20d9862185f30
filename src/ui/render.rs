//! Frame rendering, a pure function of the app state and theme

use crate::ui::app::{App, EditorField, EditorState, Screen};
use crate::ui::theme::Theme;
use chrono::Local;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

const DATE_FORMAT: &str = "%d-%m-%Y";

pub fn draw(f: &mut Frame, app: &App, theme: &Theme) {
    match app.screen {
        Screen::Splash => draw_splash(f, theme),
        Screen::Main => {
            draw_main(f, app, theme);
            if let Some(editor) = &app.editor {
                draw_editor_sheet(f, editor, theme);
                if editor.confirm_discard {
                    draw_confirm(
                        f,
                        theme,
                        "Discard Changes?",
                        "This entry has unsaved changes.",
                    );
                }
            } else if let Some(id) = app.pending_delete {
                let title = app
                    .store
                    .get(id)
                    .map(|e| e.title.as_str())
                    .unwrap_or("this entry");
                draw_confirm(
                    f,
                    theme,
                    "Delete Journal?",
                    &format!("Are you sure you want to delete \"{}\"?", title),
                );
            }
        }
    }
}

fn draw_splash(f: &mut Frame, theme: &Theme) {
    let area = centered_rect(60, 40, f.area());
    let lines = vec![
        Line::from(Span::styled(
            "journali",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Your thoughts, your story",
            Style::default().fg(theme.text_secondary),
        )),
    ];
    let splash = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(splash, area);
}

fn draw_main(f: &mut Frame, app: &App, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, app, theme, chunks[0]);
    draw_entry_list(f, app, theme, chunks[1]);
    draw_search_bar(f, app, theme, chunks[2]);
    draw_footer(f, theme, chunks[3]);
}

fn draw_header(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Journal",
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  [{}]", app.store.filter_mode().label()),
            Style::default().fg(theme.accent),
        ),
    ]));
    f.render_widget(header, area);
}

fn draw_entry_list(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let visible = app.store.visible_entries();

    if visible.is_empty() {
        let lines = if app.store.is_empty() {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Begin Your Journal",
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Craft your personal diary, press n to begin",
                    Style::default().fg(theme.text_secondary),
                )),
            ]
        } else {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No entries match",
                    Style::default().fg(theme.text_secondary),
                )),
            ]
        };
        let empty = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|entry| {
            let mut title_spans = vec![Span::styled(
                entry.title.clone(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )];
            if entry.bookmarked {
                title_spans.push(Span::styled(
                    " \u{2605}",
                    Style::default().fg(theme.accent_strong),
                ));
            }

            let preview = entry.content.lines().next().unwrap_or("").to_string();
            ListItem::new(vec![
                Line::from(title_spans),
                Line::from(Span::styled(
                    entry.date.format(DATE_FORMAT).to_string(),
                    Style::default().fg(theme.text_secondary),
                )),
                Line::from(Span::styled(preview, Style::default().fg(theme.text))),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default().bg(theme.surface));

    let mut state = ListState::default();
    state.select(Some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_search_bar(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let border_color = if app.search_active {
        theme.accent
    } else {
        theme.text_secondary
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let search = app.store.search_text();
    let content = if search.is_empty() && !app.search_active {
        Span::styled("Search", Style::default().fg(theme.text_secondary))
    } else {
        Span::styled(search.to_string(), Style::default().fg(theme.text))
    };

    f.render_widget(Paragraph::new(Line::from(content)).block(block), area);
}

fn draw_footer(f: &mut Frame, theme: &Theme, area: Rect) {
    let hints = Paragraph::new(Line::from(Span::styled(
        " n new  enter edit  space bookmark  d delete  / search  1/2/3 filter  q quit",
        Style::default().fg(theme.text_secondary),
    )));
    f.render_widget(hints, area);
}

fn draw_editor_sheet(f: &mut Frame, editor: &EditorState, theme: &Theme) {
    let area = centered_rect(84, 84, f.area());
    f.render_widget(Clear, area);

    let title = if editor.draft.target.is_some() {
        " Edit Entry "
    } else {
        " New Entry "
    };
    let sheet = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_strong))
        .title(title);
    let inner = sheet.inner(area);
    f.render_widget(sheet, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let field_border = |field: EditorField| {
        if editor.field == field {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text_secondary)
        }
    };

    let title_input = Paragraph::new(editor.draft.title.as_str())
        .style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(field_border(EditorField::Title))
                .title("Title"),
        );
    f.render_widget(title_input, chunks[0]);

    let date_line = Paragraph::new(Span::styled(
        Local::now().format(DATE_FORMAT).to_string(),
        Style::default().fg(theme.text_secondary),
    ));
    f.render_widget(date_line, chunks[1]);

    let content_widget = if editor.draft.content.is_empty() {
        Paragraph::new(Span::styled(
            "Type your Journal...",
            Style::default().fg(theme.text_secondary),
        ))
    } else {
        Paragraph::new(editor.draft.content.as_str()).style(Style::default().fg(theme.text))
    };
    f.render_widget(
        content_widget.wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(field_border(EditorField::Content)),
        ),
        chunks[2],
    );

    let save_hint = if editor.draft.is_blank() {
        Span::styled(
            " tab switch  esc cancel",
            Style::default().fg(theme.text_secondary),
        )
    } else {
        Span::styled(
            " tab switch  ctrl+s save  esc cancel",
            Style::default().fg(theme.text_secondary),
        )
    };
    f.render_widget(Paragraph::new(Line::from(save_hint)), chunks[3]);
}

fn draw_confirm(f: &mut Frame, theme: &Theme, title: &str, message: &str) {
    let area = centered_rect(50, 24, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.danger))
        .title(format!(" {} ", title));

    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(theme.text),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y]", Style::default().fg(theme.danger)),
            Span::styled("es  ", Style::default().fg(theme.text_secondary)),
            Span::styled("[n]", Style::default().fg(theme.accent)),
            Span::styled("o", Style::default().fg(theme.text_secondary)),
        ]),
    ];

    let dialog = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(dialog, area);
}

/// Carve a centered sub-rectangle out of `r`, sized in percent.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
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
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_to_string(app: &App) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::dark();
        terminal.draw(|f| draw(f, app, &theme)).unwrap();

        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_splash_renders_name_and_tagline() {
        let app = App::new(true);
        let screen = render_to_string(&app);
        assert!(screen.contains("journali"));
        assert!(screen.contains("Your thoughts, your story"));
    }

    #[test]
    fn test_empty_state_renders_prompt() {
        let app = App::new(false);
        let screen = render_to_string(&app);
        assert!(screen.contains("Begin Your Journal"));
        assert!(screen.contains("press n to begin"));
    }

    #[test]
    fn test_entry_list_renders_titles() {
        let mut app = App::new(false);
        app.store.upsert(None, "My Day", "walked the pier");
        let screen = render_to_string(&app);
        assert!(screen.contains("My Day"));
        assert!(screen.contains("walked the pier"));
    }

    #[test]
    fn test_editor_sheet_renders_over_list() {
        let mut app = App::new(false);
        app.store.upsert(None, "My Day", "");
        app.on_key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('n'),
            crossterm::event::KeyModifiers::NONE,
        ));
        let screen = render_to_string(&app);
        assert!(screen.contains("New Entry"));
        assert!(screen.contains("Type your Journal..."));
    }

    #[test]
    fn test_delete_confirm_names_entry() {
        let mut app = App::new(false);
        app.store.upsert(None, "My Day", "");
        app.on_key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('d'),
            crossterm::event::KeyModifiers::NONE,
        ));
        let screen = render_to_string(&app);
        assert!(screen.contains("Delete Journal?"));
        assert!(screen.contains("My Day"));
    }
}
