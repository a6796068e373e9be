//! The command set: `add category`, `list category`, `add transaction`,
//! `exit` and `help`.
//!
//! Every mutation rewrites the affected list file in full.

use spendbook_core::{CategoryService, SummaryService, TransactionService};
use spendbook_domain::Transaction;

use crate::cli::context::{CliMode, ShellContext};
use crate::cli::error::{CommandError, CommandResult, LoopControl};
use crate::cli::registry::CommandEntry;
use crate::cli::{help, io, output};

pub const ADD_CATEGORY: &str = "add category";
pub const LIST_CATEGORY: &str = "list category";
pub const ADD_TRANSACTION: &str = "add transaction";
pub const EXIT: &str = "exit";
pub const HELP: &str = "help";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            ADD_CATEGORY,
            "Create a spending category",
            "add category <name>",
            cmd_add_category,
        ),
        CommandEntry::new(
            LIST_CATEGORY,
            "List categories with their transaction totals",
            "list category",
            cmd_list_category,
        ),
        CommandEntry::new(
            ADD_TRANSACTION,
            "Record a transaction against a category",
            "add transaction <amount> <category> [date] [description...]",
            cmd_add_transaction,
        ),
        CommandEntry::new(EXIT, "Leave Spendbook", "exit", cmd_exit),
        CommandEntry::new(HELP, "Show available commands", "help [command]", cmd_help),
    ]
}

fn cmd_add_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = if args.is_empty() {
        if context.mode() == CliMode::Script {
            return Err(CommandError::InvalidArguments(
                "usage: add category <name>".into(),
            ));
        }
        io::prompt_text("Category name", false)?
    } else {
        args.join(" ")
    };

    let category = CategoryService::add(&mut context.categories, &name)?;
    context.store().save_categories(&context.categories);
    output::success(format!("Category `{}` added.", category.name));
    Ok(LoopControl::Continue)
}

fn cmd_list_category(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.categories().is_empty() {
        output::info("No categories yet. Use `add category <name>` to create one.");
        return Ok(LoopControl::Continue);
    }

    let currency = context.currency().to_string();
    output::section("Categories");
    for summary in SummaryService::by_category(context.categories(), context.transactions()) {
        output::detail(format!(
            "{}: {} transaction(s), {:.2} {}",
            summary.name, summary.transaction_count, summary.total, currency
        ));
    }
    Ok(LoopControl::Continue)
}

fn cmd_add_transaction(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let transaction = if args.is_empty() && context.mode() == CliMode::Interactive {
        match prompt_transaction(context)? {
            Some(transaction) => transaction,
            None => return Ok(LoopControl::Continue),
        }
    } else {
        transaction_from_args(context, args)?
    };

    if CategoryService::find(context.categories(), &transaction.category).is_none() {
        output::warning(format!(
            "Category `{}` is not in the category list.",
            transaction.category
        ));
    }

    let recorded = TransactionService::record(&mut context.transactions, transaction)?;
    let label = format!("{:.2} on {}", recorded.amount, recorded.category);
    context.store().save_transactions(&context.transactions);
    output::success(format!("Transaction of {} recorded.", label));
    Ok(LoopControl::Continue)
}

fn transaction_from_args(
    context: &ShellContext,
    args: &[&str],
) -> Result<Transaction, CommandError> {
    let [amount, category, rest @ ..] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: add transaction <amount> <category> [date] [description...]".into(),
        ));
    };
    let amount = TransactionService::parse_amount(amount)?;
    let (date, description) = match rest.split_first() {
        Some((date, description)) => (
            TransactionService::parse_date(date, context.today())?,
            description.join(" "),
        ),
        None => (context.today(), String::new()),
    };
    Ok(Transaction::new(amount, *category, date).with_description(description))
}

fn prompt_transaction(context: &ShellContext) -> Result<Option<Transaction>, CommandError> {
    let amount = TransactionService::parse_amount(&io::prompt_text("Amount", false)?)?;

    let category = if context.categories().is_empty() {
        io::prompt_text("Category", false)?
    } else {
        let names = CategoryService::names(context.categories());
        match io::select_item("Category", &names)? {
            Some(index) => names[index].to_string(),
            None => return Ok(None),
        }
    };

    let date = TransactionService::parse_date(
        &io::prompt_text("Date (YYYY-MM-DD, empty for today)", true)?,
        context.today(),
    )?;
    let description = io::prompt_text("Description (optional)", true)?;

    Ok(Some(
        Transaction::new(amount, category, date).with_description(description),
    ))
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info("Goodbye.");
    Ok(LoopControl::Exit)
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        help::print_overview(context.registry());
        return Ok(LoopControl::Continue);
    }
    let topic = args.join(" ").to_lowercase();
    match context.registry().get(&topic) {
        Some(entry) => help::print_command(entry),
        None => context.suggest_command(&topic),
    }
    Ok(LoopControl::Continue)
}
