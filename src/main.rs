use crossterm::cursor::MoveToColumn;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::Print;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::ExecutableCommand;
use mybaby::core::{Config, SessionRuntime, SAVE_VERSION};
use mybaby::persistence::FileStore;
use mybaby::progression::{get_achievement_def, InteractionKind, RoomId, UnlockEvent};
use mybaby::session::InteractionOutcome;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "MYBABY_LOG";

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "mybaby {} (save format {})",
                    env!("CARGO_PKG_VERSION"),
                    SAVE_VERSION
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("My Baby - a tiny virtual pet\n");
                println!("Usage: mybaby\n");
                println!("Keys:");
                println!("  f / p / s  Feed, play, sleep");
                println!("  1-4        Go to bedroom, kitchen, playroom, bathroom");
                println!("  c          Clear the saved game and start over");
                println!("  q          Save and quit\n");
                println!("Set {LOG_ENV_VAR}=debug for more detail in the log file.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'mybaby --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let config = match Config::default_path() {
        Ok(path) => Config::load_or_default(&path),
        Err(_) => Config::default(),
    };
    let store = match &config.data_dir {
        Some(dir) => FileStore::new(dir),
        None => FileStore::default_location().map_err(io::Error::other)?,
    };
    init_tracing(store.dir());

    let mut runtime = SessionRuntime::start(store, &config).map_err(io::Error::other)?;
    info!(
        room = runtime.session.current_room().key(),
        "session started"
    );

    enable_raw_mode()?;
    let result = run(&mut runtime);
    disable_raw_mode()?;

    let saved = runtime.save();
    println!();
    match saved {
        Ok(()) => println!("Saved. Bye bye!"),
        Err(e) => {
            error!(error = %e, "final save failed");
            println!("Could not save: {}", e);
        }
    }
    result
}

fn init_tracing(log_dir: &Path) {
    let log_file = fs::create_dir_all(log_dir).and_then(|_| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_dir.join("mybaby.log"))
    });
    // The terminal is in raw mode while we run, so logs only go to the file
    let Ok(log_file) = log_file else {
        return;
    };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_target(false)
        .init();
}

fn run(runtime: &mut SessionRuntime<FileStore>) -> io::Result<()> {
    let mut stdout = io::stdout();
    let mut message = String::from("Say hi to your baby!");
    let mut last_frame = Instant::now();

    loop {
        draw_status(&mut stdout, runtime, &message)?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                match key_event.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                    KeyCode::Char('f') => {
                        let outcome = runtime.session.apply_interaction(InteractionKind::Feed);
                        message = describe_outcome(&outcome);
                    }
                    KeyCode::Char('p') => {
                        let outcome = runtime.session.apply_interaction(InteractionKind::Play);
                        message = describe_outcome(&outcome);
                    }
                    KeyCode::Char('s') => {
                        let outcome = runtime.session.apply_interaction(InteractionKind::Sleep);
                        message = describe_outcome(&outcome);
                    }
                    KeyCode::Char(c @ '1'..='4') => {
                        let index = c as usize - '1' as usize;
                        let target = RoomId::ALL[index];
                        message = match runtime.session.request_room_switch(target) {
                            Ok(_) => format!("{} Welcome to the {}", target.icon(), target.name()),
                            Err(e) => e.to_string(),
                        };
                    }
                    KeyCode::Char('c') => {
                        message = match runtime.clear_and_reset() {
                            Ok(()) => "Fresh start!".to_string(),
                            Err(e) => format!("Could not clear save: {}", e),
                        };
                    }
                    _ => {}
                }
            }
        }

        let elapsed = last_frame.elapsed();
        last_frame = Instant::now();
        let report = runtime.update(elapsed);
        if let Some(Err(e)) = report.autosave {
            warn!(error = %e, "autosave failed, will retry next interval");
            message = format!("Autosave failed: {}", e);
        }
    }

    Ok(())
}

fn describe_outcome(outcome: &InteractionOutcome) -> String {
    let mut text = format!(
        "{} x{} - baby is {} {}",
        outcome.kind.icon(),
        outcome.count,
        outcome.mood.name(),
        outcome.mood.emoji()
    );
    for event in &outcome.unlocked {
        match event {
            UnlockEvent::Room(room) => {
                text.push_str(&format!(" | {} {} unlocked!", room.icon(), room.name()))
            }
            UnlockEvent::Achievement(id) => {
                let def = get_achievement_def(*id);
                text.push_str(&format!(" | {} {}!", def.icon, def.name))
            }
        }
    }
    text
}

fn draw_status(
    stdout: &mut io::Stdout,
    runtime: &SessionRuntime<FileStore>,
    message: &str,
) -> io::Result<()> {
    let session = &runtime.session;
    let gauges = session.gauges();
    let room = session.current_room();
    let line = format!(
        "{} {} | {} {} | happy {:>3.0} hunger {:>3.0} energy {:>3.0} | {}",
        room.icon(),
        room.name(),
        gauges.mood.emoji(),
        gauges.mood.name(),
        gauges.happiness,
        gauges.hunger,
        gauges.energy,
        message
    );
    stdout
        .execute(MoveToColumn(0))?
        .execute(Clear(ClearType::CurrentLine))?
        .execute(Print(line))?;
    stdout.flush()
}
