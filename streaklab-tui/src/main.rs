//! StreakLab TUI entry point.
//!
//! Usage: `streaklab-tui [returns.csv] [config.toml]`. Without a CSV path a
//! synthetic table is generated so the viewer can be explored offline.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use streaklab_runner::{load_table, synthetic_table, AnalysisConfig};
use streaklab_tui::{handle_key, ui, App};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1).map(PathBuf::from);
    let input = args.next();
    let config = match args.next() {
        Some(path) => AnalysisConfig::from_file(&path)?,
        None => AnalysisConfig::default(),
    };

    // Load before touching the terminal so errors print normally.
    let data = match &input {
        Some(path) => {
            load_table(path).with_context(|| format!("failed to load {}", path.display()))?
        }
        None => synthetic_table(950, 250, 42)?,
    };

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut app = App::new(data, config);

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // 50ms poll keeps the loop responsive without spinning.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, key);
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}
