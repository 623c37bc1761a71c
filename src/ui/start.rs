use crate::ui::layout::calculate_screen_chunks;
use crate::utils::{help_line, key_style};
use ratatui::{
    layout::Alignment,
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_start(f: &mut Frame, title: &str, tagline: &str) {
    let layout = calculate_screen_chunks(f.area());

    let header = Paragraph::new(title)
        .style(key_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let mut body = Text::default();
    body.push_line(Line::from(""));
    body.push_line(Line::from(tagline.to_string()));
    body.push_line(Line::from(""));
    body.push_line(Line::from("[ Start Game ]").style(key_style()));

    let content = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, layout.body_area);

    let help = Paragraph::new(help_line(&[("Enter", "Start Game"), ("q", "Quit")]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
