// algotty: Step-by-Step Algorithm Visualizer for the Terminal

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use algotty::controller::RunController;
use algotty::engine::EngineError;
use algotty::registry::AlgorithmId;
use algotty::ui::App;

fn usage(program_name: &str) {
    eprintln!("Usage: {} [algorithm] [options]", program_name);
    eprintln!();
    eprintln!("Algorithms:");
    for algorithm in AlgorithmId::ALL {
        eprintln!("  {:<10} {}", algorithm.id(), algorithm.info().name);
    }
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --size <n>   array size for sorting runs (5-100, default 20)");
    eprintln!("  --speed <n>  playback speed (1-100, default 50)");
    eprintln!("  --seed <n>   seed the dataset generator for reproducible runs");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("algotty");

    let mut algorithm = AlgorithmId::Bubble;
    let mut size: Option<usize> = None;
    let mut speed: Option<u8> = None;
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                usage(program_name);
                return Ok(());
            }
            "--size" | "--speed" | "--seed" => {
                let flag = args[i].clone();
                i += 1;
                let value = match args.get(i) {
                    Some(v) => v,
                    None => {
                        eprintln!("Error: {} expects a value", flag);
                        std::process::exit(1);
                    }
                };
                match flag.as_str() {
                    "--size" => match value.parse() {
                        Ok(n) => size = Some(n),
                        Err(_) => {
                            eprintln!("Error: invalid size '{}'", value);
                            std::process::exit(1);
                        }
                    },
                    "--speed" => match value.parse() {
                        Ok(n) => speed = Some(n),
                        Err(_) => {
                            eprintln!("Error: invalid speed '{}'", value);
                            std::process::exit(1);
                        }
                    },
                    _ => match value.parse() {
                        Ok(n) => seed = Some(n),
                        Err(_) => {
                            eprintln!("Error: invalid seed '{}'", value);
                            std::process::exit(1);
                        }
                    },
                }
            }
            name => match AlgorithmId::parse(name) {
                Some(found) => algorithm = found,
                None => {
                    let err = EngineError::UnknownAlgorithm {
                        name: name.to_string(),
                    };
                    eprintln!("Error: {}", err);
                    eprintln!();
                    usage(program_name);
                    std::process::exit(1);
                }
            },
        }
        i += 1;
    }

    // Build the controller and apply the requested settings up front
    let mut controller = match seed {
        Some(seed) => RunController::with_seed(algorithm.family(), seed),
        None => RunController::new(algorithm.family()),
    }?;

    if let Some(speed) = speed {
        if let Err(e) = controller.set_speed(speed) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
    if let Some(size) = size {
        let result = controller
            .set_array_size(size)
            .and_then(|()| controller.generate(algorithm.family()));
        if let Err(e) = result {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    eprintln!(
        "Selected {} ({} family), speed {}.",
        algorithm.info().name,
        algorithm.family(),
        controller.speed()
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(controller, algorithm);
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
