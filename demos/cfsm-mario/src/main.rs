//! Console driver for the Mario game
//!
//! `mario [CONFIG.toml]`
//!
//! Every round runs one process cycle, prints what the states had to say
//! and asks for the next event.

use std::fmt;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use cfsm_core::{Fsm, VERSION_MAJOR, VERSION_MINOR, VERSION_PATCH};
use cfsm_mario::{Mario, MarioConfig, MarioEvent};

const MENU: &str = "Choose Event: (1=Mushroom, 2=FireFlower, 3=Feather, 4=Monster, 5=none, 0=quit)";

#[derive(Debug)]
enum CliError {
    Io(io::Error),
    Config(toml::de::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Config(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<toml::de::Error> for CliError {
    fn from(e: toml::de::Error) -> Self {
        CliError::Config(e)
    }
}

fn load_config(path: Option<&str>) -> Result<MarioConfig, CliError> {
    match path {
        Some(path) => Ok(toml::from_str(&fs::read_to_string(path)?)?),
        None => Ok(MarioConfig::default()),
    }
}

/// Print and drain the journal
fn flush_announcements(fsm: &mut Fsm<Mario>, out: &mut impl Write) -> io::Result<()> {
    while let Some(message) = fsm.data_mut().take_announcement() {
        writeln!(out, "{message}")?;
    }
    Ok(())
}

/// Prompt until a valid option is read; `None` on end of input
fn read_event(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<Option<MarioEvent>> {
    let mut line = String::new();
    loop {
        writeln!(out, "{MENU}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.parse::<MarioEvent>() {
            Ok(event) => return Ok(Some(event)),
            Err(e) => writeln!(out, "Invalid option ({e}), try again")?,
        }
    }
}

fn play(
    fsm: &mut Fsm<Mario>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let rules = fsm.data().config();
    writeln!(
        out,
        "{} lives, one more for every {} coins",
        rules.initial_lives, rules.one_up_coins
    )?;

    cfsm_mario::start(fsm);

    loop {
        fsm.process();
        flush_announcements(fsm, out)?;
        writeln!(out, "{}", fsm.data().status())?;

        if cfsm_mario::is_over(fsm) {
            writeln!(out, "Game over")?;
            return Ok(());
        }

        match read_event(input, out)? {
            None | Some(MarioEvent::Quit) => return Ok(()),
            Some(MarioEvent::Nop) => {}
            Some(event) => fsm.event(event.id()),
        }
    }
}

fn run() -> Result<(), CliError> {
    let path = std::env::args().nth(1);
    let config = load_config(path.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "cfsm {VERSION_MAJOR}.{VERSION_MINOR}.{VERSION_PATCH} Mario demo"
    )?;

    let mut fsm = cfsm_mario::new_game(config);
    play(&mut fsm, &mut io::stdin().lock(), &mut out)
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mario: {e}");
            ExitCode::FAILURE
        }
    }
}
