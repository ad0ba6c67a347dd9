//! Interactive search loop
//!
//! Alternates between the yes/no prompt and a category search. Reads from any
//! `BufRead` and writes to any `Write`, so the loop runs the same against a
//! terminal or an in-memory script. Colour is decided by the caller, not by
//! whatever stdout happens to be.

use std::io::{BufRead, Write};

use colored::Colorize;
use tracing::{debug, info, instrument, warn};

use crate::application::services::QueryService;
use crate::application::{parse_answer, Answer, Category};
use crate::cli::render::{
    continue_prompt, outcome_lines, term_prompt, CATEGORY_PROMPT, FAREWELL, INVALID_CATEGORY,
    MALFORMED_ANSWER,
};
use crate::cli::{CliError, CliResult};
use crate::config::Settings;

/// Whether the loop goes on after an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Counters reported when the loop ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellStats {
    pub searches: usize,
    pub invalid_categories: usize,
    pub malformed_answers: usize,
}

/// Presentation knobs for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellOptions {
    /// Bank name as it appears in the yes/no prompt
    pub bank_label: String,
    pub currency_symbol: String,
    pub strict: bool,
    /// Colour warnings and errors with ANSI escapes
    pub color: bool,
}

impl ShellOptions {
    pub fn from_settings(settings: &Settings, color: bool) -> Self {
        Self {
            bank_label: settings.prompt_name().to_string(),
            currency_symbol: settings.currency_symbol.clone(),
            strict: settings.strict_answers,
            color,
        }
    }
}

pub struct Shell<'a, R, W> {
    service: &'a QueryService,
    options: ShellOptions,
    input: R,
    output: W,
    stats: ShellStats,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(service: &'a QueryService, options: ShellOptions, input: R, output: W) -> Self {
        Self {
            service,
            options,
            input,
            output,
            stats: ShellStats::default(),
        }
    }

    /// Run until a negative answer or end of input.
    #[instrument(skip_all)]
    pub fn run(mut self) -> CliResult<ShellStats> {
        let prompt = continue_prompt(&self.options.bank_label);
        loop {
            self.say(&prompt)?;
            let Some(reply) = self.read_line()? else {
                debug!("end of input at yes/no prompt");
                break;
            };
            match parse_answer(&reply, self.options.strict) {
                Answer::Yes => {
                    if self.perform_search()? == Flow::Stop {
                        break;
                    }
                }
                Answer::No => break,
                Answer::Malformed(token) => {
                    warn!("malformed answer: {:?}", token);
                    self.stats.malformed_answers += 1;
                    self.say_warning(MALFORMED_ANSWER)?;
                }
            }
        }
        self.say(FAREWELL)?;
        info!("shell finished: {:?}", self.stats);
        Ok(self.stats)
    }

    fn perform_search(&mut self) -> CliResult<Flow> {
        self.say(CATEGORY_PROMPT)?;
        let Some(raw_category) = self.read_line()? else {
            return Ok(Flow::Stop);
        };

        let term = match Category::parse(&raw_category) {
            None => {
                debug!("invalid category: {:?}", raw_category);
                self.stats.invalid_categories += 1;
                self.say_warning(INVALID_CATEGORY)?;
                return Ok(Flow::Continue);
            }
            Some(category) => match term_prompt(category) {
                None => None,
                Some(prompt) => {
                    self.say(prompt)?;
                    match self.read_line()? {
                        Some(term) => Some(term),
                        None => return Ok(Flow::Stop),
                    }
                }
            },
        };

        self.stats.searches += 1;
        match self.service.search(&raw_category, term.as_deref()) {
            Ok(outcome) => {
                let lines = outcome_lines(
                    &outcome,
                    self.service.projection_months(),
                    &self.options.currency_symbol,
                );
                for line in lines {
                    self.say(&line)?;
                }
            }
            Err(e) => {
                warn!("search failed: {}", e);
                let msg = format!("Ошибка: {}", e);
                if self.options.color {
                    self.say(&msg.red())?;
                } else {
                    self.say(&msg)?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    /// Next input line without its line ending, `None` at end of input.
    fn read_line(&mut self) -> CliResult<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| CliError::io("read input", e))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn say_warning(&mut self, msg: &str) -> CliResult<()> {
        if self.options.color {
            self.say(&msg.yellow())
        } else {
            self.say(msg)
        }
    }

    fn say(&mut self, msg: &(impl std::fmt::Display + ?Sized)) -> CliResult<()> {
        writeln!(self.output, "{}", msg).map_err(|e| CliError::io("write output", e))?;
        self.output
            .flush()
            .map_err(|e| CliError::io("flush output", e))
    }
}
