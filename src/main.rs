use anyhow::{Context, Result};
use clap::Parser;
use ratatui::{backend::TermionBackend, Terminal};
use std::io::{self, IsTerminal, Write};
use std::time::Duration;
use termion::raw::IntoRawMode;
use termion::screen::IntoAlternateScreen;

use jsonquill::config::Config;
use jsonquill::editor::state::EditorState;
use jsonquill::file::loader::load_json_file;
use jsonquill::file::saver::save_json_file;
use jsonquill::input::InputHandler;
use jsonquill::theme::get_builtin_theme;
use jsonquill::ui::UI;

/// jsonquill - A terminal-based structural JSON editor
#[derive(Parser)]
#[command(name = "jsonquill")]
#[command(version)]
#[command(about = "A terminal-based structural JSON editor", long_about = None)]
struct Cli {
    /// JSON file to edit
    file: String,

    /// Theme name (overrides the config file)
    #[arg(short, long)]
    theme: Option<String>,
}

/// Set up a panic hook that restores the terminal before displaying panic information.
///
/// This ensures that panics are visible even when the terminal is in raw mode with alternate screen.
/// Without this, panic messages would be hidden or garbled, making debugging very difficult.
fn setup_panic_hook() {
    use std::panic;

    // Take the default panic hook so we can call it after restoration
    let default_panic = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal to normal state
        // Use stderr to avoid interfering with stdout pipes
        use std::io::Write;

        let _ = write!(io::stderr(), "{}", termion::screen::ToMainScreen);
        let _ = write!(io::stderr(), "{}", termion::cursor::Show);
        let _ = io::stderr().flush();

        default_panic(panic_info);
    }));
}

fn main() -> Result<()> {
    // Set up panic hook to restore terminal before showing panic info
    setup_panic_hook();

    let cli = Cli::parse();
    let config = Config::load();

    // Load and parse before taking over the terminal; a bad file should
    // fail with a plain error message, not a garbled alternate screen
    let document = load_json_file(&cli.file)?;

    // CLI theme overrides config theme
    let theme_name = cli.theme.as_deref().unwrap_or(&config.theme);
    let theme = get_builtin_theme(theme_name).unwrap_or_else(|| {
        eprintln!(
            "Warning: Theme '{}' not found, using default-dark",
            theme_name
        );
        get_builtin_theme("default-dark").unwrap()
    });

    // Setup terminal
    let stdout = io::stdout()
        .into_raw_mode()
        .context("Failed to enable raw mode")?;
    let stdout = stdout
        .into_alternate_screen()
        .context("Failed to enter alternate screen")?;
    let backend = TermionBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let ui = UI::new(theme);
    let mut input_handler = if io::stdin().is_terminal() {
        InputHandler::new()
    } else {
        InputHandler::new_with_tty()
            .context("Failed to open /dev/tty for keyboard input when stdin was piped")?
    };

    let mut state = EditorState::new(document, &config);
    state.set_filename(cli.file.clone());

    // Main event loop
    let result = run_event_loop(&mut terminal, &ui, &mut input_handler, &mut state);

    // Termion handles cleanup automatically through Drop guards, but we
    // still want to show the cursor before exiting
    write!(terminal.backend_mut(), "{}", termion::cursor::Show)?;
    terminal.backend_mut().flush()?;
    drop(terminal);

    result?;

    // Write the document back on quit. This runs even when nothing was
    // edited, normalizing the file to pretty form; the dirty flag only
    // drives the status-line marker
    save_json_file(&cli.file, state.document(), &config)
        .with_context(|| format!("Failed to save {}", cli.file))?;
    println!("Saved {}", cli.file);

    Ok(())
}

fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    ui: &UI,
    input_handler: &mut InputHandler,
    state: &mut EditorState,
) -> Result<()> {
    loop {
        ui.render(terminal, state)?;

        if let Some(event) = input_handler.poll_event(Duration::from_millis(100))? {
            let should_quit = input_handler.handle_event(event, state)?;
            if should_quit {
                break;
            }
        }
    }

    Ok(())
}
