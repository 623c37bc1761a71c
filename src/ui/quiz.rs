use crate::models::Prompt;
use crate::ui::layout::{calculate_question_chunks, calculate_screen_chunks};
use crate::utils::{help_line, key_style, truncate_to_width};
use crate::view::IMAGE_CAPTION;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw_question(
    f: &mut Frame,
    number: usize,
    total: usize,
    prompt: &Prompt,
    answers: &[String],
    selected: usize,
) {
    let layout = calculate_screen_chunks(f.area());
    let body = calculate_question_chunks(layout.body_area);

    let header = Paragraph::new(format!("Question {} / {}", number, total))
        .style(key_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let prompt_text = match prompt {
        Prompt::Text(text) => Text::from(text.as_str()),
        Prompt::Image { url, description } => {
            // The terminal cannot show the picture itself, only where it lives.
            let mut text = Text::default();
            text.push_line(Line::from(Span::styled(
                format!("🖼  {} ({})", description, url),
                Style::default().fg(Color::Blue),
            )));
            text.push_line(Line::from(""));
            text.push_line(Line::from(IMAGE_CAPTION));
            text
        }
    };
    let prompt_widget = Paragraph::new(prompt_text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(prompt_widget, body.prompt_area);

    let label_width = (body.answers_area.width as usize).saturating_sub(8);
    let items: Vec<ListItem> = answers
        .iter()
        .enumerate()
        .map(|(i, answer)| {
            let style = if i == selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{}. {}", i + 1, truncate_to_width(answer, label_width)))
                .style(style)
        })
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Answers"));
    f.render_widget(list, body.answers_area);

    let help = Paragraph::new(help_line(&[
        ("1-4", "Answer"),
        ("↑/↓", "Move"),
        ("Enter", "Choose"),
        ("q", "Quit"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
