//! Line-oriented front end
//!
//! Reads one command per line and renders outcomes, either as text or as
//! one JSON object per line.

use anyhow::Result;
use colored::Colorize;
use lineup_core::application::{Board, EnqueueOutcome, LineDesk, LINE_COUNT};
use lineup_core::domain::DequeueOutcome;
use serde_json::json;
use std::io::{BufRead, Write};
use tabled::{Table, Tabled};
use thiserror::Error;

const HELP: &str = "\
Commands:
  add <name>    register a name; it joins a random cashier line
  serve <n>     cashier n (1-3) finishes with the person at the front
  show          print every line
  dismiss       close the pending warning alert
  help          show this help
  quit          leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    /// 1-based cashier number, as printed on the board
    Serve(usize),
    Show,
    Dismiss,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command: {0} (try `help`)")]
    UnknownCommand(String),

    #[error("Usage: serve <n>")]
    MissingCashier,

    #[error("Cashier must be a number from 1 to {}, got: {0}", LINE_COUNT)]
    InvalidCashier(String),
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(input: &str) -> Result<Option<Command>, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (input, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        // Name is passed through untrimmed-by-us; the core owns trimming
        "add" | "submit" => Command::Add(rest.to_string()),
        "serve" | "next" => {
            if rest.is_empty() {
                return Err(ParseError::MissingCashier);
            }
            match rest.parse::<usize>() {
                Ok(n) if (1..=LINE_COUNT).contains(&n) => Command::Serve(n),
                _ => return Err(ParseError::InvalidCashier(rest.to_string())),
            }
        }
        "show" | "board" => Command::Show,
        "dismiss" | "close" => Command::Dismiss,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

#[derive(Tabled)]
struct BoardRow {
    #[tabled(rename = "Cashier")]
    cashier: usize,
    #[tabled(rename = "Waiting")]
    waiting: usize,
    #[tabled(rename = "Visible")]
    visible: String,
    #[tabled(rename = "More")]
    more: String,
}

/// Text rendering of the board. The More cell stays empty without overflow.
pub fn render_board(board: &Board) -> String {
    let rows: Vec<BoardRow> = board
        .lines
        .iter()
        .map(|view| BoardRow {
            cashier: view.line + 1,
            waiting: view.waiting,
            visible: view.window.visible_names().join(", "),
            more: view
                .window
                .overflow()
                .map(|n| format!("{n} more person"))
                .unwrap_or_default(),
        })
        .collect();
    Table::new(rows).to_string()
}

pub struct Session<W: Write> {
    desk: LineDesk,
    out: W,
    json: bool,
    prompt: bool,
}

impl<W: Write> Session<W> {
    pub fn new(desk: LineDesk, out: W, json: bool) -> Self {
        Self {
            desk,
            out,
            json,
            prompt: false,
        }
    }

    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn desk(&self) -> &LineDesk {
        &self.desk
    }

    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        self.show_prompt()?;
        for line in input.lines() {
            let line = line?;
            match parse_command(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.execute(command)?,
                Err(e) => self.report_parse_error(&e)?,
            }
            self.show_prompt()?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Add(name) => self.add(&name),
            Command::Serve(cashier) => self.serve(cashier),
            Command::Show => self.show(),
            Command::Dismiss => self.dismiss(),
            Command::Help => {
                writeln!(self.out, "{HELP}")?;
                Ok(())
            }
            Command::Quit => Ok(()),
        }
    }

    fn add(&mut self, name: &str) -> Result<()> {
        let outcome = self.desk.submit_entry(name)?;
        if self.json {
            writeln!(self.out, "{}", serde_json::to_string(&outcome)?)?;
            return Ok(());
        }

        match outcome {
            EnqueueOutcome::Accepted { id, line } => {
                writeln!(
                    self.out,
                    "{} joined cashier {} ({id})",
                    name.trim(),
                    line + 1
                )?;
            }
            EnqueueOutcome::RejectedEmpty => {
                writeln!(self.out, "{}", "Name cannot be empty.".red().italic())?;
            }
            EnqueueOutcome::RejectedDuplicate { .. } => {
                writeln!(self.out, "{}", "Names may not be duplicated.".red().italic())?;
            }
        }
        Ok(())
    }

    fn serve(&mut self, cashier: usize) -> Result<()> {
        let outcome = self.desk.complete_service(cashier - 1)?;
        if self.json {
            writeln!(self.out, "{}", serde_json::to_string(&outcome)?)?;
            return Ok(());
        }

        match outcome {
            DequeueOutcome::Removed { entry } => {
                writeln!(self.out, "Cashier {cashier} served {}", entry.name)?;
            }
            DequeueOutcome::NoticeEmptyLine { line } => {
                writeln!(self.out, "{}", "Warning alert!".red().bold())?;
                writeln!(
                    self.out,
                    "No data is deleted: cashier {} has nobody waiting. Type `dismiss` to close.",
                    line + 1
                )?;
            }
        }
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        let board = self.desk.board();
        if self.json {
            writeln!(self.out, "{}", board.to_json()?)?;
        } else {
            writeln!(self.out, "{}", render_board(&board))?;
        }
        Ok(())
    }

    fn dismiss(&mut self) -> Result<()> {
        let dismissed = self.desk.dismiss_notice();
        if self.json {
            writeln!(self.out, "{}", json!({ "dismissed": dismissed }))?;
        } else if dismissed.is_some() {
            writeln!(self.out, "Alert closed.")?;
        } else {
            writeln!(self.out, "No alert to close.")?;
        }
        Ok(())
    }

    fn report_parse_error(&mut self, error: &ParseError) -> Result<()> {
        if self.json {
            writeln!(self.out, "{}", json!({ "error": error.to_string() }))?;
        } else {
            writeln!(self.out, "{}", error.to_string().red())?;
        }
        Ok(())
    }

    fn show_prompt(&mut self) -> Result<()> {
        if self.prompt {
            write!(self.out, "lineup> ")?;
            self.out.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineup_core::application::QueueState;
    use lineup_core::config::DeskConfig;
    use lineup_core::port::line_selector::mocks::ScriptedLineSelector;
    use std::io::Cursor;
    use std::sync::Arc;

    fn session(script: &[usize], json: bool) -> Session<Vec<u8>> {
        let state = QueueState::with_selector(Arc::new(ScriptedLineSelector::new(script.to_vec())));
        let desk = LineDesk::new(state, DeskConfig::default()).unwrap();
        Session::new(desk, Vec::new(), json)
    }

    fn run(session: &mut Session<Vec<u8>>, input: &str) -> String {
        session.run(Cursor::new(input.to_string())).unwrap();
        String::from_utf8(std::mem::take(&mut session.out)).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(
            parse_command("add Mary Jane"),
            Ok(Some(Command::Add("Mary Jane".to_string())))
        );
        assert_eq!(parse_command("add"), Ok(Some(Command::Add(String::new()))));
        assert_eq!(parse_command("SERVE 2"), Ok(Some(Command::Serve(2))));
        assert_eq!(parse_command("show"), Ok(Some(Command::Show)));
        assert_eq!(parse_command("dismiss"), Ok(Some(Command::Dismiss)));
        assert_eq!(parse_command("exit"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn test_parse_rejects_bad_cashier() {
        assert_eq!(parse_command("serve"), Err(ParseError::MissingCashier));
        assert_eq!(
            parse_command("serve 0"),
            Err(ParseError::InvalidCashier("0".to_string()))
        );
        assert_eq!(
            parse_command("serve 4"),
            Err(ParseError::InvalidCashier("4".to_string()))
        );
        assert_eq!(
            parse_command("serve two"),
            Err(ParseError::InvalidCashier("two".to_string()))
        );
        assert_eq!(
            parse_command("jump"),
            Err(ParseError::UnknownCommand("jump".to_string()))
        );
    }

    #[test]
    fn test_text_session() {
        let mut session = session(&[0, 0, 1], false);
        let out = run(
            &mut session,
            "add Alice\nadd  \nadd Alice\nadd Bob\nserve 1\nserve 3\n",
        );

        assert!(out.contains("Alice joined cashier 1 (entry-1)"));
        assert!(out.contains("Name cannot be empty."));
        assert!(out.contains("Names may not be duplicated."));
        assert!(out.contains("Bob joined cashier 1"));
        assert!(out.contains("Cashier 1 served Alice"));
        assert!(out.contains("cashier 3 has nobody waiting"));
        assert!(session.desk().notice().is_some());

        let out = run(&mut session, "dismiss\ndismiss\n");
        assert!(out.contains("Alert closed."));
        assert!(out.contains("No alert to close."));
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut session = session(&[0], false);
        run(&mut session, "add Alice\nquit\nadd Bob\n");

        assert_eq!(session.desk().state().len(), 1);
    }

    #[test]
    fn test_board_rendering() {
        let mut session = session(&[1], false);
        let out = run(&mut session, "add A\nadd B\nadd C\nadd D\nadd E\nshow\n");

        assert!(out.contains("Cashier"));
        assert!(out.contains("A, B, C"));
        assert!(out.contains("2 more person"));
        assert!(!out.contains("0 more person"));
    }

    #[test]
    fn test_json_session() {
        let mut session = session(&[2], true);
        let out = run(&mut session, "add Alice\nserve 1\nshow\nbogus\n");
        let lines: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines[0]["outcome"], "accepted");
        assert_eq!(lines[0]["line"], 2);
        assert_eq!(lines[1]["outcome"], "notice_empty_line");
        assert_eq!(lines[2]["lines"][2]["waiting"], 1);
        assert!(lines[3]["error"].as_str().unwrap().contains("bogus"));
    }
}
