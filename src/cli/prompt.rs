//! Line-oriented prompts
//!
//! Every prompt re-asks until the answer is valid. Input and output are
//! generic so the interactive flows can be driven from tests.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{parse_amount, parse_date, Category, TransactionKind, DATE_FORMAT};

/// Reads answers from `input` and writes prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a line of text
    pub fn say(&mut self, text: &str) -> BudgetResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Write text verbatim, without adding a newline
    pub fn write_raw(&mut self, text: &str) -> BudgetResult<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Show a prompt and read one trimmed line; `None` at end of input
    pub fn read_answer(&mut self, prompt: &str) -> BudgetResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`Self::read_answer`] but treats end of input as an error
    pub fn ask(&mut self, prompt: &str) -> BudgetResult<String> {
        self.read_answer(prompt)?
            .ok_or_else(|| BudgetError::Io("Input closed before an answer was given".into()))
    }

    /// Ask for a date, defaulting to `today` on an empty answer
    pub fn prompt_date(&mut self, today: NaiveDate) -> BudgetResult<NaiveDate> {
        let prompt = format!(
            "Enter the date (YYYY-MM-DD) [default: {}]: ",
            today.format(DATE_FORMAT)
        );

        loop {
            let answer = self.ask(&prompt)?;
            if answer.is_empty() {
                return Ok(today);
            }
            match parse_date(&answer) {
                Ok(date) => return Ok(date),
                Err(_) => self.say("Invalid date format. Please use YYYY-MM-DD, like 2025-06-01.")?,
            }
        }
    }

    /// Ask whether the transaction is income or an expense
    pub fn prompt_kind(&mut self) -> BudgetResult<TransactionKind> {
        let mut answer = self.ask("Type of transaction (income/expense): ")?;
        loop {
            if let Ok(kind) = answer.parse::<TransactionKind>() {
                return Ok(kind);
            }
            answer = self.ask("Please enter 'income' or 'expense': ")?;
        }
    }

    /// Show the numbered vocabulary for `kind` and ask for a choice
    pub fn prompt_category(&mut self, kind: TransactionKind) -> BudgetResult<Category> {
        let categories = kind.categories();

        self.say("")?;
        self.say("Select a category:")?;
        for (i, category) in categories.iter().enumerate() {
            self.say(&format!("{}. {}", i + 1, category))?;
        }

        loop {
            let answer = self.ask("-> Choose a corresponding number: ")?;
            let picked = answer
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| categories.get(i));

            match picked {
                Some(category) => return Ok(*category),
                None => self.say("Invalid choice. Please enter a valid number.")?,
            }
        }
    }

    /// Ask for an amount until it parses
    pub fn prompt_amount(&mut self) -> BudgetResult<f64> {
        loop {
            let answer = self.ask("Enter the amount (for example, 25.50): ")?;
            match parse_amount(&answer) {
                Ok(amount) => return Ok(amount),
                Err(_) => self.say("Invalid amount. Please enter a number like 12.50.")?,
            }
        }
    }

    /// Ask for free-text notes; may be empty
    pub fn prompt_description(&mut self) -> BudgetResult<String> {
        self.ask("Any notes?: ")
    }
}
