//! Play a tower from the terminal, one input line at a time.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use tower_content::{ConfigLoader, TowerLoader};
use tower_core::{Direction, GameConfig};
use tower_runtime::{Session, SessionConfig, Step, Topic};

use crate::config::CliConfig;
use crate::input::{self, PlayCommand};
use crate::view;

/// Play a tower interactively, or run a fixed move script
#[derive(Parser)]
pub struct Play {
    /// Tower record (JSON) to play
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Run these moves (e.g. "lluu right") and print the final room instead
    /// of reading stdin
    #[arg(short, long, value_name = "MOVES")]
    moves: Option<String>,

    /// Maximum number of queued moves
    #[arg(long, default_value_t = SessionConfig::DEFAULT_MOVE_BUFFER_CAPACITY)]
    buffer: usize,
}

impl Play {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let game_config = match &config.config_path {
            Some(path) => ConfigLoader::load(path)?,
            None => GameConfig::default(),
        };
        let tower = TowerLoader::load_strict(&self.file)?;

        let session = Session::builder()
            .config(SessionConfig {
                game_config,
                move_buffer_capacity: Some(self.buffer.max(1)),
            })
            .tower(tower)
            .build()?;

        let stdout = io::stdout();
        let mut console = Console::new(session, stdout.lock());
        match self.moves {
            Some(script) => {
                console.play_moves(&input::parse_moves(&script)?)?;
                console.show()
            }
            None => console.run(io::stdin().lock()),
        }
    }
}

/// Line-driven front-end over a [`Session`]. Events published by the session
/// are collected by listeners and written after each command.
pub(crate) struct Console<W> {
    session: Session,
    log: Rc<RefCell<Vec<String>>>,
    out: W,
}

impl<W: Write> Console<W> {
    pub(crate) fn new(mut session: Session, out: W) -> Self {
        let log = Rc::new(RefCell::new(Vec::new()));
        for topic in [Topic::Action, Topic::Room] {
            let sink = Rc::clone(&log);
            session.subscribe(topic, move |event| {
                sink.borrow_mut().push(view::describe_event(event));
            });
        }
        Self { session, log, out }
    }

    pub(crate) fn run(&mut self, input: impl BufRead) -> Result<()> {
        self.show()?;
        writeln!(self.out, "type `help` for commands")?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            let command = match input::parse_line(&line) {
                Ok(command) => command,
                Err(error) => {
                    writeln!(self.out, "{error}")?;
                    continue;
                }
            };
            if !self.execute(command)? {
                break;
            }
        }
        Ok(())
    }

    /// Returns false when the console should stop.
    fn execute(&mut self, command: PlayCommand) -> Result<bool> {
        match command {
            PlayCommand::Moves(moves) => {
                self.play_moves(&moves)?;
                self.show()?;
            }
            PlayCommand::Show => self.show()?,
            PlayCommand::Help => writeln!(self.out, "{}\n\n{}", input::HELP, view::LEGEND)?,
            PlayCommand::Save(path) => {
                std::fs::write(&path, self.session.snapshot()?)
                    .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
                writeln!(self.out, "saved to {}", path.display())?;
            }
            PlayCommand::Load(path) => {
                let snapshot = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
                self.session.restore(&snapshot)?;
                self.flush_log()?;
                self.show()?;
            }
            PlayCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Queues `moves` and resolves them in order. A rejected move drops
    /// whatever was still queued and the rest of the script.
    pub(crate) fn play_moves(&mut self, moves: &[Direction]) -> Result<()> {
        let mut remaining = moves.iter().copied().peekable();

        while remaining.peek().is_some() {
            while let Some(&direction) = remaining.peek() {
                if !self.session.queue_move(direction) {
                    break;
                }
                remaining.next();
            }

            loop {
                match self.session.drain_one()? {
                    Step::Committed(_) => {}
                    Step::Idle => break,
                    Step::Rejected { .. } => {
                        let unplayed = remaining.count();
                        if unplayed > 0 {
                            tracing::debug!(unplayed, "move script stopped early");
                        }
                        return self.flush_log();
                    }
                }
            }
        }
        self.flush_log()
    }

    pub(crate) fn show(&mut self) -> Result<()> {
        write!(
            self.out,
            "{}{}",
            view::render_room(self.session.state(), self.session.current_reachability()),
            view::render_status(self.session.player())
        )?;
        Ok(())
    }

    fn flush_log(&mut self) -> Result<()> {
        for line in self.log.borrow_mut().drain(..) {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    #[cfg(test)]
    fn session(&self) -> &Session {
        &self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_core::{Color, Location, Position};

    fn sample_session(capacity: usize) -> Session {
        let path =
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../game/content/data/towers/sample.json");
        Session::builder()
            .config(SessionConfig {
                game_config: GameConfig::default(),
                move_buffer_capacity: Some(capacity),
            })
            .tower(TowerLoader::load_strict(&path).expect("sample loads"))
            .build()
            .expect("session builds")
    }

    fn output(console: Console<Vec<u8>>) -> String {
        String::from_utf8(console.out).expect("utf-8")
    }

    #[test]
    fn script_longer_than_the_buffer_is_played_in_chunks() {
        let mut console = Console::new(sample_session(1), Vec::new());
        console
            .play_moves(&input::parse_moves("llrr").expect("valid script"))
            .expect("no fault");

        assert_eq!(
            console.session().player().location,
            Location::at(0, Position::new(9, 5))
        );
        assert_eq!(console.session().player().stats.keys.count(Color::Yellow), 1);
        let text = output(console);
        assert!(text.contains("picked up a yellow key\n"));
    }

    #[test]
    fn rejection_stops_the_script() {
        let mut console = Console::new(sample_session(16), Vec::new());
        console
            .play_moves(&input::parse_moves("uuuu").expect("valid script"))
            .expect("no fault");

        assert_eq!(
            console.session().player().location,
            Location::at(0, Position::new(8, 5))
        );
        assert_eq!(console.session().pending_moves(), 0);
        let text = output(console);
        assert!(text.contains("cannot move up from room 0 [8, 5] (2 queued moves dropped)"));
    }

    #[test]
    fn interactive_session_reads_commands_until_quit() {
        let dir = tempfile::tempdir().expect("temp dir");
        let snapshot = dir.path().join("run.json");
        let script = format!(
            "ll\nbogus\nsave {path}\nrr\nload {path}\nquit\nll\n",
            path = snapshot.display()
        );

        let mut console = Console::new(sample_session(16), Vec::new());
        console.run(script.as_bytes()).expect("console runs");

        // The restored snapshot puts the player back next to the key.
        assert_eq!(
            console.session().player().location,
            Location::at(0, Position::new(9, 3))
        );
        let text = output(console);
        assert!(text.contains("type `help` for commands"));
        assert!(text.contains("'b' is not a move"));
        assert!(text.contains(&format!("saved to {}", snapshot.display())));
        assert!(text.starts_with("Ground floor (room 0)\n"));
    }

    #[test]
    fn help_lists_commands_and_glyphs() {
        let mut console = Console::new(sample_session(16), Vec::new());
        console.run("help\n".as_bytes()).expect("console runs");

        let text = output(console);
        assert!(text.contains(input::HELP));
        assert!(text.contains(view::LEGEND));
    }
}
