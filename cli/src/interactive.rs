use pairmatch_core::{
    Coord, Coord2, Effect, HintOutcome, HintRefusal, Rejection, RoundSnapshot, SelectOutcome,
    Session, Timeline,
};
use std::io::{self, BufRead};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;
use web_time::Instant;

use crate::render;

/// How often the clock is advanced while waiting for input.
const FRAME_MS: u64 = 50;

const HELP: &str = "Commands: <row> <col> to flip a card, h for a hint, n for a new round, q to quit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Command {
    Select(Coord2),
    Hint,
    NewRound,
    Show,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    match line {
        "" => return Ok(Command::Show),
        "h" | "hint" => return Ok(Command::Hint),
        "n" | "new" => return Ok(Command::NewRound),
        "q" | "quit" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<_> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();
    let [row, col] = parts[..] else {
        return Err(format!("Unknown command: {}", line));
    };
    let parse = |part: &str| {
        part.parse::<Coord>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(|| format!("Not a card position: {}", line))
    };
    Ok(Command::Select((parse(row)?, parse(col)?)))
}

/// Prints notifications as they arrive. Returns whether a card changed on screen.
fn report(effects: &[Effect]) -> bool {
    let mut board_changed = false;
    for effect in effects {
        match effect {
            Effect::Notify(notification) => {
                if let Some(line) = render::describe(*notification) {
                    println!("{}", line);
                }
            }
            Effect::Wait { .. } => {}
            _ => board_changed = true,
        }
    }
    board_changed
}

fn explain_rejection(rejection: Rejection) -> &'static str {
    match rejection {
        Rejection::RoundOver => "The round is over, press n for a new one",
        Rejection::TurnLocked => "Wait for the cards to settle",
        Rejection::NotHidden(_) => "That card is not face down",
    }
}

fn explain_hint(outcome: HintOutcome) -> Option<&'static str> {
    match outcome {
        HintOutcome::Shown { .. } => None,
        HintOutcome::NoPairFound => Some("No pair to hint right now"),
        HintOutcome::Refused(HintRefusal::Exhausted) => Some("No hints left"),
        HintOutcome::Refused(HintRefusal::TurnInProgress) => Some("Finish your turn first"),
        HintOutcome::Refused(HintRefusal::RoundOver) => Some("The round is over"),
    }
}

/// Plays rounds from stdin until the player quits or input ends.
pub(crate) fn run(session: &mut Session) -> anyhow::Result<RoundSnapshot> {
    let (tx, rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut timeline = Timeline::new(session.config().timing);
    let mut last = Instant::now();
    println!("{}", HELP);
    println!("{}", render::board_text(&session.snapshot()));

    loop {
        let input = match rx.recv_timeout(Duration::from_millis(FRAME_MS)) {
            Ok(line) => Some(line),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => break,
        };

        let now = Instant::now();
        let elapsed = now.duration_since(last).as_millis() as u64;
        last = now;
        let mut effects = timeline.advance(session, elapsed);
        let mut redraw = false;

        if let Some(line) = input {
            redraw = true;
            match parse_command(&line) {
                Ok(Command::Select(coords)) => match session.select(coords) {
                    Ok(SelectOutcome::Accepted) => {}
                    Ok(SelectOutcome::Ignored(rejection)) => {
                        println!("{}", explain_rejection(rejection))
                    }
                    Err(err) => println!("{}", err),
                },
                Ok(Command::Hint) => {
                    if let Some(reason) = explain_hint(session.request_hint()) {
                        println!("{}", reason);
                    }
                }
                Ok(Command::NewRound) => {
                    session.new_round()?;
                    timeline.restart();
                    log::info!("New round {}", session.generation());
                }
                Ok(Command::Show) => {}
                Ok(Command::Quit) => break,
                Err(message) => {
                    println!("{}\n{}", message, HELP);
                    redraw = false;
                }
            }
            effects.extend(timeline.pump(session));
        }

        if report(&effects) || redraw {
            println!("{}", render::board_text(&session.snapshot()));
        }
    }

    Ok(session.snapshot())
}
