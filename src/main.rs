use std::convert::TryFrom;
use std::io;

use anyhow::{bail, Result};
use clap::Parser;
use log::{error, info};
use rustyline::config::Config as EditorConfig;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use simplelog::{Config as LogConfig, LevelFilter, SimpleLogger};

mod repl;
mod surface;
mod walkthrough;

use repl::{Command, ReplResult, COMMANDS};
use surface::TextSurface;

const HISTORY_FILE: &str = ".varwalk_history";
const PROMPT: &str = "(varwalk) ";

/// Element ids on the presentation surface: one clickable control and one
/// text-bearing output region. Both exist from startup.
const ACTION_BUTTON: &str = "actionButton";
const OUTPUT_REGION: &str = "output";

const CLICK_MESSAGE: &str = "Hello from a Named Function!";

#[derive(Parser)]
struct Opt {
    /// Show debug output
    #[arg(short, long)]
    debug: bool,

    /// Run the walkthrough once and exit instead of starting the prompt
    #[arg(short, long)]
    run: bool,
}

fn init_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        LevelFilter::Info
    } else {
        LevelFilter::Error
    };

    match SimpleLogger::init(filter, LogConfig::default()) {
        Ok(_) => Ok(()),
        Err(e) => bail!("Failed to init logger: {}", e),
    }
}

fn init_editor() -> Result<DefaultEditor> {
    let config = EditorConfig::builder().auto_add_history(true).build();
    let editor = DefaultEditor::with_config(config)?;

    Ok(editor)
}

fn init_history(editor: &mut DefaultEditor) {
    let _ = editor.load_history(HISTORY_FILE);
}

fn save_history(editor: &mut DefaultEditor) -> Result<()> {
    match editor.save_history(HISTORY_FILE) {
        Ok(_) => Ok(()),
        Err(e) => bail!("Failed to save history: {}", e),
    }
}

/// Build the presentation surface and wire the click handler onto it.
fn init_surface() -> TextSurface {
    let mut surface = TextSurface::new(&[OUTPUT_REGION]);
    surface.add_click_listener(ACTION_BUTTON, show_message);

    surface
}

/// Click handler for `actionButton`: writes the fixed greeting to the
/// diagnostic log and to the output region. Every activation produces the
/// same two writes.
fn show_message(surface: &mut TextSurface) {
    info!("{}", CLICK_MESSAGE);
    surface.set_text(OUTPUT_REGION, CLICK_MESSAGE);
}

fn welcome() {
    println!(
        r#"varwalk (variable binding walkthrough) v{}"#,
        env!("CARGO_PKG_VERSION")
    );
    println!("Type 'help' for help");
    println!();
}

fn help() {
    println!("Commands:");
    for cmd in COMMANDS.iter() {
        println!("    {:<8}{}", cmd.to_string(), cmd.describe());
    }
}

fn dispatch(cmd: Command, surface: &mut TextSurface) -> ReplResult {
    match cmd {
        Command::Run => {
            let stdout = io::stdout();
            let mut sink = stdout.lock();

            match walkthrough::run_examples(&mut sink) {
                Ok(()) => ReplResult::Ok,
                Err(e) => ReplResult::Err(e.to_string()),
            }
        }
        Command::Click => {
            if surface.click(ACTION_BUTTON) {
                ReplResult::Ok
            } else {
                ReplResult::Err(format!("No click listener on '{}'", ACTION_BUTTON))
            }
        }
        Command::Show => {
            match surface.text(OUTPUT_REGION) {
                Some(text) if !text.is_empty() => println!("{}", text),
                _ => println!("(the output region is empty)"),
            }

            ReplResult::Ok
        }
        Command::Help => {
            help();

            ReplResult::Ok
        }
        Command::Quit => ReplResult::Quit,
    }
}

fn main() -> Result<()> {
    let opts = Opt::parse();
    init_logging(opts.debug)?;

    let mut surface = init_surface();

    if opts.run {
        let stdout = io::stdout();
        let mut sink = stdout.lock();

        return walkthrough::run_examples(&mut sink);
    }

    let mut editor = init_editor()?;
    init_history(&mut editor);
    welcome();

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                info!("read: {}", &line);

                if line.trim().is_empty() {
                    continue;
                }

                let cmd = match Command::try_from(line.as_str()) {
                    Ok(cmd) => cmd,
                    Err(e) => {
                        eprintln!("{}", e);
                        continue;
                    }
                };

                match dispatch(cmd, &mut surface) {
                    ReplResult::Ok => (),
                    ReplResult::Quit => break,
                    ReplResult::Err(e) => {
                        eprintln!("{}", e);
                        continue;
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                eprintln!("Press Ctrl-D or type 'quit' to quit");
            }
            Err(ReadlineError::Eof) => {
                println!("quit");
                break;
            }
            Err(e) => {
                error!("Unexpected error: {}", e);
                println!("quit");
            }
        }
    }

    save_history(&mut editor)?;

    Ok(())
}

#[test]
fn test_click_writes_message_to_output_region() {
    let mut surface = init_surface();

    assert!(surface.click(ACTION_BUTTON));
    assert_eq!(surface.text(OUTPUT_REGION), Some(CLICK_MESSAGE));

    // Repeated activations produce identical writes
    assert!(surface.click(ACTION_BUTTON));
    assert!(surface.click(ACTION_BUTTON));
    assert_eq!(surface.write_count(OUTPUT_REGION), 3);
    assert_eq!(surface.text(OUTPUT_REGION), Some(CLICK_MESSAGE));
}

#[test]
fn test_output_region_starts_empty() {
    let surface = init_surface();

    assert_eq!(surface.text(OUTPUT_REGION), Some(""));
    assert_eq!(surface.write_count(OUTPUT_REGION), 0);
}
