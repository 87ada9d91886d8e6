//! Command-line host for the tracker.
//!
//! Each invocation opens a session, applies one command and exits. Output
//! goes to any `Write` so commands can be driven from tests.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use finpocket_core::{
    Clock, ExpenseCategory, IdGenerator, RecordId, SimulationInput, WeekdayBucket,
};

use crate::data::settings::Settings;
use crate::platform::Storage;
use crate::session::Session;
use crate::util::common::parse_yes_no;
use crate::util::format::{format_compact_currency, format_currency};

/// Width of the longest bar in the text charts
const CHART_WIDTH: usize = 28;

#[derive(Parser, Debug)]
#[command(name = "finpocket")]
#[command(about = "Track currency-exchange gains and weekly expenses")]
pub struct Args {
    /// Path to the data directory (default: ~/.finpocket/)
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Preview the gain of an exchange and optionally log it for today
    #[command(allow_negative_numbers = true)]
    Simulate {
        /// Cash amount to exchange
        cash: f64,
        /// Buy rate
        buy: f64,
        /// Sell rate
        sell: f64,
        /// Log the result as today's exchange record
        #[arg(long)]
        save: bool,
    },
    /// Exchange history
    #[command(subcommand)]
    Exchange(ExchangeCommand),
    /// Expense records
    #[command(subcommand)]
    Expense(ExpenseCommand),
    /// Weekly totals and the 7-day chart
    Summary {
        /// Only show one section
        #[arg(value_enum)]
        section: Option<Section>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ExchangeCommand {
    /// List the logged exchange days
    List,
    /// Delete the whole exchange history
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ExpenseCommand {
    /// Record a new expense
    Add {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        #[arg(short, long, default_value_t = ExpenseCategory::default())]
        category: ExpenseCategory,
    },
    /// Change the amount and/or category of an expense
    Edit {
        id: String,
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<ExpenseCategory>,
    },
    /// Delete one expense
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// List all expenses, newest first
    List,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Exchange,
    Expenses,
}

/// Execute one command against `session`.
///
/// `ask` answers confirmation prompts for destructive commands run without
/// `--yes`.
pub fn run<S, C, G>(
    command: Command,
    session: &mut Session<S, C, G>,
    settings: &Settings,
    out: &mut impl Write,
    ask: &mut dyn FnMut(&str) -> bool,
) -> color_eyre::Result<()>
where
    S: Storage,
    C: Clock,
    G: IdGenerator,
{
    let symbol = settings.currency_symbol.as_str();

    match command {
        Command::Simulate {
            cash,
            buy,
            sell,
            save,
        } => {
            session.set_simulation_input(SimulationInput::new(cash, buy, sell));
            let gain = session.tracker().estimated_gain();
            writeln!(out, "Estimated gain: {}", format_currency(gain, symbol))?;

            if save {
                match session.confirm_simulation() {
                    Ok(_) => {
                        if let Some(record) = session.tracker().exchange_records().last() {
                            writeln!(
                                out,
                                "Logged {} for {} ({})",
                                format_currency(record.gain, symbol),
                                record.day,
                                record.id
                            )?;
                        }
                    }
                    Err(e) => writeln!(out, "Nothing logged: {e}")?,
                }
            }
        }

        Command::Exchange(ExchangeCommand::List) => {
            let tracker = session.tracker();
            let records = tracker.exchange_records();
            if records.is_empty() {
                writeln!(out, "No exchange records")?;
            }
            for record in records {
                writeln!(
                    out,
                    "{}  {:<4} {:>12}  {}",
                    tracker.clock().local_date(record.date),
                    record.day,
                    format_currency(record.gain, symbol),
                    record.id
                )?;
            }
        }

        Command::Exchange(ExchangeCommand::Reset { yes }) => {
            match session.reset_exchange(|prompt| yes || ask(prompt)) {
                Some(_) => writeln!(out, "Exchange history and simulator cleared")?,
                None => writeln!(out, "Cancelled")?,
            }
        }

        Command::Expense(ExpenseCommand::Add { amount, category }) => {
            session.cancel_edit();
            session.set_draft_amount(amount);
            session.set_draft_category(category);
            match session.submit_expense() {
                Ok(_) => {
                    if let Some(record) = session.tracker().expense_records().first() {
                        writeln!(
                            out,
                            "Saved {} ({}) as {}",
                            format_currency(record.amount, symbol),
                            record.category,
                            record.id
                        )?;
                    }
                }
                Err(e) => writeln!(out, "Not saved: {e}")?,
            }
        }

        Command::Expense(ExpenseCommand::Edit {
            id,
            amount,
            category,
        }) => {
            let id = RecordId::from(id);
            if !session.begin_edit(&id) {
                writeln!(out, "No expense with id {id}")?;
                return Ok(());
            }
            if let Some(amount) = amount {
                session.set_draft_amount(amount);
            }
            if let Some(category) = category {
                session.set_draft_category(category);
            }
            match session.submit_expense() {
                Ok(_) => {
                    if let Some(record) = session.tracker().find_expense(&id) {
                        writeln!(
                            out,
                            "Updated {}: {} ({})",
                            record.id,
                            format_currency(record.amount, symbol),
                            record.category
                        )?;
                    }
                }
                Err(e) => {
                    session.cancel_edit();
                    writeln!(out, "Not saved: {e}")?;
                }
            }
        }

        Command::Expense(ExpenseCommand::Delete { id, yes }) => {
            let id = RecordId::from(id);
            if session.tracker().find_expense(&id).is_none() {
                writeln!(out, "No expense with id {id}")?;
                return Ok(());
            }
            match session.delete_expense(&id, |prompt| yes || ask(prompt)) {
                Some(_) => writeln!(out, "Deleted {id}")?,
                None => writeln!(out, "Cancelled")?,
            }
        }

        Command::Expense(ExpenseCommand::List) => {
            let tracker = session.tracker();
            let records = tracker.expense_records();
            if records.is_empty() {
                writeln!(out, "No expenses")?;
            }
            for record in records {
                writeln!(
                    out,
                    "{}  {:>12}  {:<16} {}",
                    tracker.clock().local_date(record.date),
                    format_currency(record.amount, symbol),
                    record.category.label(),
                    record.id
                )?;
            }
        }

        Command::Summary { section } => {
            let tracker = session.tracker();
            if section.is_none_or(|s| s == Section::Exchange) {
                writeln!(out, "Weekly gain (last 7 records)")?;
                writeln!(out, "{}", format_currency(tracker.weekly_gain_total(), symbol))?;
                for line in render_chart(&tracker.gain_chart(), symbol) {
                    writeln!(out, "{line}")?;
                }
            }
            if section.is_none() {
                writeln!(out)?;
            }
            if section.is_none_or(|s| s == Section::Expenses) {
                writeln!(out, "Weekly expenses (last 7 days)")?;
                writeln!(
                    out,
                    "{}",
                    format_currency(tracker.weekly_expense_total(), symbol)
                )?;
                for line in render_chart(&tracker.expense_chart(), symbol) {
                    writeln!(out, "{line}")?;
                }
            }
        }
    }

    Ok(())
}

/// One text line per bucket, bars scaled to the largest value
pub fn render_chart(buckets: &[WeekdayBucket], symbol: &str) -> Vec<String> {
    let max = buckets.iter().map(|b| b.value).fold(0.0_f64, f64::max);

    buckets
        .iter()
        .map(|bucket| {
            let bar_len = if max > 0.0 {
                ((bucket.value / max) * CHART_WIDTH as f64).round() as usize
            } else {
                0
            };
            format!(
                "{:<4} {:<width$} {}",
                bucket.label,
                "█".repeat(bar_len),
                format_compact_currency(bucket.value, symbol),
                width = CHART_WIDTH
            )
            .trim_end()
            .to_string()
        })
        .collect()
}

/// Ask `prompt` on stdout and read a y/N answer from `input`
pub fn ask_yes_no(prompt: &str, input: &mut impl BufRead, out: &mut impl Write) -> bool {
    if write!(out, "{prompt} [y/N] ").and_then(|_| out.flush()).is_err() {
        return false;
    }
    let mut answer = String::new();
    match input.read_line(&mut answer) {
        Ok(_) => parse_yes_no(&answer),
        Err(_) => false,
    }
}
