use crate::ui::layout::calculate_screen_chunks;
use crate::utils::{help_line, key_style};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_end(f: &mut Frame, score: u32, total: usize, actions: &[&str; 2]) {
    let layout = calculate_screen_chunks(f.area());

    let title = Paragraph::new("Game Over! 🎉")
        .style(key_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let mut summary_text = Text::default();
    summary_text.push_line(Line::from(""));
    summary_text.push_line(
        Line::from(format!("Your Score: {}/{}", score, total))
            .style(Style::default().add_modifier(Modifier::BOLD)),
    );
    summary_text.push_line(Line::from(""));
    for action in actions {
        summary_text.push_line(Line::from(format!("[ {} ]", action)));
    }

    let summary = Paragraph::new(summary_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(summary, layout.body_area);

    let help = Paragraph::new(help_line(&[
        ("p", actions[0]),
        ("r", actions[1]),
        ("q", "Quit"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
