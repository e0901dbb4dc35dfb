use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use pocket_arcade::arcade::{GameKind, Viewport};
use pocket_arcade::build_info;
use pocket_arcade::core::{config, logging, ArcadeConfig};
use pocket_arcade::desk::{Desk, WindowId};
use pocket_arcade::input;
use pocket_arcade::ui::{self, HitMap};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Target frame time; also the longest we block waiting for input.
const FRAME: Duration = Duration::from_millis(16);

type Term = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let mut start_game = None;

    if args.len() > 2 {
        eprintln!("Unexpected argument: {}", args[2]);
        eprintln!("Run 'pocket-arcade --help' for usage.");
        std::process::exit(1);
    }
    if let Some(arg) = args.get(1) {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Pocket Arcade - snake, flappy bird and tic-tac-toe\n");
                println!("Usage: pocket-arcade [game]\n");
                println!("Games:");
                println!("  snake      Open Snake right away");
                println!("  flappy     Open Flappy Bird right away");
                println!("  tictactoe  Open Tic-Tac-Toe right away");
                println!("\nOptions:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                println!("\nConfig: ${} or the platform config dir", config::CONFIG_ENV);
                std::process::exit(0);
            }
            other => match GameKind::from_arg(other) {
                Some(kind) => start_game = Some(kind),
                None => {
                    eprintln!("Unknown command: {}", other);
                    eprintln!("Run 'pocket-arcade --help' for usage.");
                    std::process::exit(1);
                }
            },
        }
    }

    let loaded = config::load();
    init_logging(&loaded.config);
    if let Some(warning) = &loaded.warning {
        warn!("{}", warning);
    }
    info!(
        version = %build_info::version_line(),
        config = ?loaded.path,
        "starting"
    );

    let mouse = loaded.config.mouse;
    let mut terminal = setup_terminal(mouse).context("failed to set up terminal")?;

    let result = run(&mut terminal, &loaded.config, start_game);

    // Restore the terminal even if the loop failed
    let restored = restore_terminal(&mut terminal, mouse).context("failed to restore terminal");
    match &result {
        Ok(()) => info!("exiting"),
        Err(e) => warn!(error = %e, "exiting after error"),
    }
    result.and(restored)
}

/// Logging is optional: if the file can't be opened the game still runs.
fn init_logging(config: &ArcadeConfig) {
    let outcome = config::data_dir().and_then(|dir| logging::init(&dir, &config.log_level));
    if let Ok(path) = outcome {
        info!(path = %path.display(), "logging to file");
    }
}

fn setup_terminal(mouse: bool) -> io::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableFocusChange)?;
    if mouse {
        stdout.execute(EnableMouseCapture)?;
    }
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Term, mouse: bool) -> io::Result<()> {
    disable_raw_mode()?;
    let backend = terminal.backend_mut();
    if mouse {
        backend.execute(DisableMouseCapture)?;
    }
    backend.execute(DisableFocusChange)?;
    backend.execute(LeaveAlternateScreen)?;
    terminal.show_cursor()
}

fn run(terminal: &mut Term, config: &ArcadeConfig, start_game: Option<GameKind>) -> Result<()> {
    let mut rng = rand::thread_rng();
    let size = terminal.size().context("failed to read terminal size")?;
    let mut desk = Desk::new(
        Viewport::from_terminal(size.width, size.height),
        config.tick_rates(),
    );
    if let Some(kind) = start_game {
        desk.open(WindowId::from(kind), &mut rng);
    }

    let mut hits = HitMap::new();
    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            terminal.draw(|f| {
                hits = ui::draw(f, &desk);
            })?;
            dirty = false;
        }

        let timeout = FRAME.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let ev = event::read()?;
            dirty |= input::handle_event(ev, &mut desk, &hits, &mut rng);
            if desk.should_quit() {
                return Ok(());
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= FRAME {
            let dt_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
            // Carry the sub-millisecond remainder into the next frame
            last_tick += Duration::from_millis(dt_ms);
            dirty |= desk.tick(dt_ms, &mut rng);
        }
    }
}
