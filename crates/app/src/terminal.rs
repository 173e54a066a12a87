//! Line-oriented frontend over `SessionController` for plain terminals.

use std::fmt;
use std::io::{self, BufRead, Write};

use drill_core::model::{FinishedNotice, MaxFactor, PackSize};
use services::{SessionController, SessionError};
use ui::vm::{map_practice, map_settings, parse_response};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TerminalCommand {
    Start,
    Next,
    Previous,
    Answer(Option<i64>),
    End,
    MaxFactor(MaxFactor),
    More,
    Less,
    Pack(PackSize),
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CommandError {
    Empty,
    Unknown(String),
    MissingArgument(&'static str),
    InvalidArgument(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Empty => Ok(()),
            CommandError::Unknown(cmd) => write!(f, "unknown command: {cmd} (try 'help')"),
            CommandError::MissingArgument(cmd) => write!(f, "{cmd} needs a value"),
            CommandError::InvalidArgument(msg) => f.write_str(msg),
        }
    }
}

fn parse_command(line: &str) -> Result<TerminalCommand, CommandError> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err(CommandError::Empty);
    };
    let arg = parts.next();

    if let Ok(value) = head.parse::<i64>() {
        return Ok(TerminalCommand::Answer(Some(value)));
    }

    match head.to_ascii_lowercase().as_str() {
        "start" | "s" => Ok(TerminalCommand::Start),
        "next" | "n" => Ok(TerminalCommand::Next),
        "prev" | "previous" | "p" => Ok(TerminalCommand::Previous),
        "answer" | "a" => Ok(TerminalCommand::Answer(arg.and_then(parse_response))),
        "skip" => Ok(TerminalCommand::Answer(None)),
        "end" => Ok(TerminalCommand::End),
        "max" => {
            let raw = arg.ok_or(CommandError::MissingArgument("max"))?;
            raw.parse::<MaxFactor>()
                .map(TerminalCommand::MaxFactor)
                .map_err(|err| CommandError::InvalidArgument(err.to_string()))
        }
        "more" | "+" => Ok(TerminalCommand::More),
        "less" | "-" => Ok(TerminalCommand::Less),
        "pack" => {
            let raw = arg.ok_or(CommandError::MissingArgument("pack"))?;
            raw.parse::<PackSize>()
                .map(TerminalCommand::Pack)
                .map_err(|err| CommandError::InvalidArgument(err.to_string()))
        }
        "status" => Ok(TerminalCommand::Status),
        "help" | "h" | "?" => Ok(TerminalCommand::Help),
        "quit" | "q" | "exit" => Ok(TerminalCommand::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// Reads commands from `input` and writes the drill to `output`.
pub struct TerminalFrontend<R, W> {
    session: SessionController,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalFrontend<R, W> {
    pub fn new(session: SessionController, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &SessionController {
        &self.session
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from the underlying reader and writer.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Practice multiplication")?;
        self.render_settings()?;
        writeln!(self.output, "Type 'help' for commands.")?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            match parse_command(&line) {
                Ok(TerminalCommand::Quit) => break,
                Ok(command) => self.apply(command)?,
                Err(CommandError::Empty) => {}
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
        Ok(())
    }

    fn apply(&mut self, command: TerminalCommand) -> io::Result<()> {
        let result = match command {
            TerminalCommand::Start => self.session.start(),
            TerminalCommand::Next => self.session.next().map(|_| ()),
            TerminalCommand::Previous => self.session.previous().map(|_| ()),
            TerminalCommand::Answer(response) => match self.session.submit(response) {
                Ok(outcome) => {
                    writeln!(self.output, "{}", outcome.feedback.label())?;
                    if let Some(notice) = outcome.finished {
                        return self.show_finished(notice);
                    }
                    Ok(())
                }
                Err(err) => Err(err),
            },
            TerminalCommand::End => self.session.end(),
            TerminalCommand::MaxFactor(value) => self.session.set_max_factor(value),
            TerminalCommand::More => self.session.increment_max_factor().map(|_| ()),
            TerminalCommand::Less => self.session.decrement_max_factor().map(|_| ()),
            TerminalCommand::Pack(size) => self.session.set_pack_size(size),
            TerminalCommand::Help => return self.render_help(),
            TerminalCommand::Status | TerminalCommand::Quit => Ok(()),
        };

        if let Err(err) = result {
            writeln!(self.output, "{}", rejection_hint(&err))?;
        }
        self.render()
    }

    fn show_finished(&mut self, notice: FinishedNotice) -> io::Result<()> {
        writeln!(self.output, "{}", notice.title())?;
        writeln!(self.output, "{}", notice.message())?;
        // Printing the notice counts as acknowledging it.
        self.session.dismiss_finished_notice();
        self.render()
    }

    fn render(&mut self) -> io::Result<()> {
        if self.session.is_practicing() {
            self.render_question()
        } else {
            self.render_settings()
        }
    }

    fn render_settings(&mut self) -> io::Result<()> {
        let vm = map_settings(&self.session.config());
        let choices = vm
            .pack_options
            .iter()
            .map(|option| {
                if option.selected {
                    format!("[{}]", option.count)
                } else {
                    option.count.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.output, "{}", vm.max_factor_label)?;
        writeln!(self.output, "Question amount: {choices}")
    }

    fn render_question(&mut self) -> io::Result<()> {
        let Some(vm) = map_practice(&self.session) else {
            return Ok(());
        };
        let answered = match (&vm.submitted_response, vm.feedback) {
            (Some(response), Some(feedback)) => format!(" {response} ({})", feedback.label),
            _ => String::new(),
        };
        writeln!(
            self.output,
            "{}: {} ={answered}   {}",
            vm.position_label, vm.question_text, vm.score_label
        )
    }

    fn render_help(&mut self) -> io::Result<()> {
        writeln!(self.output, "Settings:  max <2-12> | more | less | pack <5|10|20>")?;
        writeln!(self.output, "Practice:  start | next | prev | <number> | answer <n> | skip | end")?;
        writeln!(self.output, "Other:     status | help | quit")
    }
}

fn rejection_hint(err: &SessionError) -> &'static str {
    match err {
        SessionError::InvalidNavigation { .. } => "No question in that direction.",
        SessionError::DoubleSubmission { .. } => "Already answered.",
        SessionError::NotPracticing => "Type 'start' to begin practicing.",
        SessionError::AlreadyPracticing | SessionError::ConfigLocked => {
            "Type 'end' to change settings."
        }
        _ => "That action is not available right now.",
    }
}
