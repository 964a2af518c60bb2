// Slidetty: step-through visualizer for the sliding-window longest-unique-substring scan

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use slidetty::input;
use slidetty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("slidetty");

    if args.len() > 2 || args.get(1).is_some_and(|a| matches!(a.as_str(), "-h" | "--help")) {
        eprintln!("Usage: {} [string]", program_name);
        eprintln!();
        eprintln!("Visualize the longest-substring-without-repeating-characters scan.");
        eprintln!("The string must be 1-50 lowercase letters; with no argument a");
        eprintln!("random one is generated.");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} abcabcbb", program_name);
        eprintln!("  {}              # random input", program_name);
        std::process::exit(1);
    }

    let initial = match args.get(1) {
        Some(arg) => {
            if let Err(e) = input::validate(arg) {
                eprintln!("Error: {}", e);
                eprintln!("Usage: {} [string]", program_name);
                std::process::exit(1);
            }
            arg.clone()
        }
        None => input::random_string(&mut rand::thread_rng()),
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(&initial);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
