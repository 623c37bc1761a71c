use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use trivia_quiz::{
    draw_screen, logger, map_key, render_view, spawn_comment_worker, step_selection, InputAction,
    PostRequest, QuizConfig, QuizEvent, QuizSession,
};

fn main() -> io::Result<()> {
    let config = match QuizConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Usage: trivia-quiz [--image | --speed] [--post <post id>]");
            std::process::exit(2);
        }
    };

    logger::init_at(&config.log_path);
    logger::log(&format!("Launching {}", config.variant.title()));

    let (post_tx, post_rx) = crossbeam_channel::unbounded();
    let worker = spawn_comment_worker(config.post_context(), post_rx)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, QuizSession::new(config.variant), &post_tx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Let in-flight posts finish before exiting.
    drop(post_tx);
    if worker.join().is_err() {
        logger::error("Comment worker panicked");
    }

    result
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut session: QuizSession,
    post_tx: &crossbeam_channel::Sender<PostRequest>,
) -> io::Result<()> {
    let mut selected: usize = 0;

    loop {
        let screen = render_view(&session);
        terminal.draw(|f| draw_screen(f, &screen, selected))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match map_key(&screen, selected, key) {
            InputAction::Quit => break,
            InputAction::MoveSelection(delta) => {
                selected = step_selection(selected, delta, screen.answer_count());
            }
            InputAction::Dispatch(event) => {
                if matches!(event, QuizEvent::Start | QuizEvent::Answer(_)) {
                    selected = 0;
                }
                if let Some(report) = session.handle_event(event)
                    && post_tx.send(PostRequest::Submit(report)).is_err()
                {
                    logger::error("Comment worker is gone; score not posted");
                }
            }
            InputAction::None => {}
        }
    }

    Ok(())
}
