//! Interactive menu loop
//!
//! Presents the numbered actions, runs the chosen one and loops until the
//! user quits or input ends. A failing action is reported and the loop
//! continues.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use tracing::warn;

use crate::error::BudgetResult;
use crate::models::Transaction;
use crate::storage::TransactionStore;

use super::commands::{
    add_transaction, render_all, render_categories, render_health, render_monthly,
    render_summary,
};
use super::prompt::Prompter;

/// An entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddTransaction,
    ViewAll,
    ViewByCategory,
    ViewSummary,
    ViewMonthly,
    EvaluateMonthly,
    Quit,
}

impl MenuAction {
    /// All actions in menu order; position + 1 is the menu number
    pub fn all() -> &'static [Self] {
        &[
            Self::AddTransaction,
            Self::ViewAll,
            Self::ViewByCategory,
            Self::ViewSummary,
            Self::ViewMonthly,
            Self::EvaluateMonthly,
            Self::Quit,
        ]
    }

    /// Map a typed choice such as "3" to its action
    pub fn from_choice(choice: &str) -> Option<Self> {
        let n: usize = choice.trim().parse().ok()?;
        Self::all().get(n.checked_sub(1)?).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddTransaction => "Add a transaction",
            Self::ViewAll => "View all transactions",
            Self::ViewByCategory => "View spending by category",
            Self::ViewSummary => "View summary",
            Self::ViewMonthly => "View monthly statistics",
            Self::EvaluateMonthly => "Evaluate monthly spending",
            Self::Quit => "Quit",
        }
    }
}

/// The interactive session
pub struct Menu<'a, R, W> {
    store: &'a TransactionStore,
    prompter: Prompter<R, W>,
    today: NaiveDate,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a TransactionStore, input: R, output: W, today: NaiveDate) -> Self {
        Self {
            store,
            prompter: Prompter::new(input, output),
            today,
        }
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> BudgetResult<()> {
        self.store.ensure_initialized()?;
        self.prompter.say("Welcome to Personal Budget Manager!")?;
        self.prompter
            .say(&format!("Using data file: {}", self.store.path().display()))?;

        loop {
            self.show_menu()?;

            let choice = match self.prompter.read_answer("\n-> Choose an option (1-7): ")? {
                Some(choice) => choice,
                None => {
                    self.prompter.say("")?;
                    break;
                }
            };

            let action = match MenuAction::from_choice(&choice) {
                Some(MenuAction::Quit) => break,
                Some(action) => action,
                None => {
                    self.prompter.say("Invalid choice. Please try again.")?;
                    continue;
                }
            };

            if let Err(e) = self.dispatch(action) {
                warn!(error = %e, ?action, "menu action failed");
                self.prompter.say(&format!("\nError: {}", e))?;
            }
        }

        self.prompter.say("Bye Bye!")?;
        Ok(())
    }

    fn show_menu(&mut self) -> BudgetResult<()> {
        self.prompter.say("")?;
        self.prompter.say("==== PERSONAL BUDGET MANAGER ====")?;
        for (i, action) in MenuAction::all().iter().enumerate() {
            self.prompter.say(&format!("{}. {}", i + 1, action.label()))?;
        }
        Ok(())
    }

    fn dispatch(&mut self, action: MenuAction) -> BudgetResult<()> {
        let text = match action {
            MenuAction::AddTransaction => {
                let txn = self.collect_transaction()?;
                add_transaction(self.store, &txn)?
            }
            MenuAction::ViewAll => render_all(self.store)?,
            MenuAction::ViewByCategory => render_categories(self.store)?,
            MenuAction::ViewSummary => render_summary(self.store)?,
            MenuAction::ViewMonthly => render_monthly(self.store)?,
            MenuAction::EvaluateMonthly => render_health(self.store)?,
            MenuAction::Quit => return Ok(()),
        };

        self.prompter.say("")?;
        self.prompter.write_raw(&text)
    }

    /// Walk the user through entering one transaction
    fn collect_transaction(&mut self) -> BudgetResult<Transaction> {
        self.prompter.say("")?;
        let date = self.prompter.prompt_date(self.today)?;
        let kind = self.prompter.prompt_kind()?;
        let category = self.prompter.prompt_category(kind)?;
        let amount = self.prompter.prompt_amount()?;
        let description = self.prompter.prompt_description()?;

        Ok(Transaction::new(date, kind, category, amount, description))
    }
}
