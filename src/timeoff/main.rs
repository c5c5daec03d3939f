use chrono::NaiveDate;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::{self, Write};
use std::path::PathBuf;
use timeoff::api::{
    CmdMessage, ConfigAction, LeaveSummary, MessageLevel, TimeoffApi, TimeoffPaths,
};
use timeoff::config::TimeoffConfig;
use timeoff::error::{Result, TimeoffError};
use timeoff::model::{LeaveDraft, LeaveRecord, LeaveType};
use timeoff::store::fs::FileStore;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        print_error(&e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: TimeoffApi<FileStore>,
    config: TimeoffConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Apply {
            name,
            leave_type,
            from,
            to,
            reason,
        }) => handle_apply(&mut ctx, name, leave_type, from, to, reason),
        Some(Commands::History) => handle_history(&ctx),
        Some(Commands::Edit {
            position,
            name,
            leave_type,
            from,
            to,
            reason,
        }) => handle_edit(&mut ctx, &position, name, leave_type, from, to, reason),
        Some(Commands::Delete { position, yes }) => handle_delete(&mut ctx, &position, yes),
        Some(Commands::Home) => handle_home(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_home(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = TimeoffConfig::load(&data_dir).unwrap_or_default();

    let store = FileStore::new(data_dir.clone());
    let paths = TimeoffPaths { data: data_dir };
    let api = TimeoffApi::new(store, paths);

    Ok(AppContext { api, config })
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Ok(dir) = std::env::var("TIMEOFF_DATA_DIR") {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let proj_dirs = ProjectDirs::from("com", "timeoff", "timeoff")
        .ok_or_else(|| TimeoffError::Store("Could not determine a data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn handle_apply(
    ctx: &mut AppContext,
    name: Option<String>,
    leave_type: Option<String>,
    from: Option<String>,
    to: Option<String>,
    reason: Option<String>,
) -> Result<()> {
    let draft = LeaveDraft {
        name,
        leave_type,
        start_date: from,
        end_date: to,
        reason,
    };

    let result = ctx.api.apply(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_history(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.history()?;
    print_history(&result.records, &ctx.config);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    position: &str,
    name: Option<String>,
    leave_type: Option<String>,
    from: Option<String>,
    to: Option<String>,
    reason: Option<String>,
) -> Result<()> {
    let index = parse_position(position)?;
    let records = ctx.api.history()?.records;
    let current = records
        .get(index)
        .ok_or_else(|| position_error(index, records.len()))?;

    // Flags override the stored values; fields not given keep their
    // current value.
    let mut draft = LeaveDraft::from(current);
    draft.name = name.or(draft.name);
    draft.leave_type = leave_type.or(draft.leave_type);
    draft.start_date = from.or(draft.start_date);
    draft.end_date = to.or(draft.end_date);
    draft.reason = reason.or(draft.reason);

    let result = ctx.api.edit(index, draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, position: &str, yes: bool) -> Result<()> {
    let index = parse_position(position)?;
    let records = ctx.api.history()?.records;
    let record = records
        .get(index)
        .ok_or_else(|| position_error(index, records.len()))?;

    if !yes {
        println!("This will permanently remove the following leave application:");
        println!(
            "  {}. {}, {}, {}",
            index + 1,
            record.name.bold(),
            paint_type(record.leave_type),
            format_range(record, &ctx.config)
        );
        print!("[Y] To delete: ");
        io::stdout().flush().map_err(TimeoffError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(TimeoffError::Io)?;

        if input.trim() != "Y" {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let result = ctx.api.remove(index)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_home(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.home(ctx.config.recent_limit)?;
    if let Some(summary) = &result.summary {
        print_home(summary, &ctx.config);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("recent-limit = {}", config.recent_limit);
        println!("date-format = {}", config.date_format);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_error(err: &TimeoffError) {
    match err {
        TimeoffError::Validation(errors) => {
            eprintln!("{}", "The application was not saved:".red());
            for (field, message) in errors.iter() {
                eprintln!("  {}: {}", field.to_string().yellow(), message);
            }
        }
        _ => eprintln!("Error: {}", err),
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TYPE_WIDTH: usize = 14;

fn print_history(records: &[LeaveRecord], config: &TimeoffConfig) {
    if records.is_empty() {
        println!("No leave applications found.");
        return;
    }

    for (i, record) in records.iter().enumerate() {
        let idx_str = format!("{:>3}. ", i + 1);

        let label = record.leave_type.label();
        let type_padding = TYPE_WIDTH.saturating_sub(label.width());

        let dates = format_range(record, config);
        let days = record.days();
        let days_str = if days == 1 {
            "(1 day)".to_string()
        } else {
            format!("({} days)", days)
        };

        // Widths are computed on the plain strings; color is applied at
        // print time so escape codes never enter the math.
        let trailer_width = dates.width() + 1 + days_str.width();
        let fixed_width = idx_str.width() + TYPE_WIDTH + trailer_width + 2;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let name_display = truncate_to_width(&record.name, available);
        let padding = available.saturating_sub(name_display.width()) + 2;

        println!(
            "{}{}{}{}{}{} {}",
            idx_str,
            paint_type(record.leave_type),
            " ".repeat(type_padding),
            name_display.bold(),
            " ".repeat(padding),
            dates,
            days_str.dimmed()
        );

        let reason: String = record
            .reason
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        println!("     {}", reason.dimmed());
    }
}

fn print_home(summary: &LeaveSummary, config: &TimeoffConfig) {
    if summary.total == 0 {
        println!("No leaves found.");
        println!(
            "{}",
            r#"Run "timeoff apply" to submit your first leave application."#.dimmed()
        );
        return;
    }

    println!("{} {}", "Total leaves applied:".bold(), summary.total);
    println!();
    println!("Recently applied leaves:");
    for record in &summary.recent {
        let label = record.leave_type.label();
        let type_padding = TYPE_WIDTH.saturating_sub(label.width());
        println!(
            "  {}{}{} {}",
            paint_type(record.leave_type),
            " ".repeat(type_padding),
            record.name.bold(),
            format_range(record, config).dimmed()
        );
    }
}

fn paint_type(leave_type: LeaveType) -> ColoredString {
    let label = leave_type.label();
    match leave_type {
        LeaveType::Sick => label.red(),
        LeaveType::Casual => label.yellow(),
        LeaveType::Earned => label.green(),
    }
}

fn format_range(record: &LeaveRecord, config: &TimeoffConfig) -> String {
    let start = format_date(record.start_date, &config.date_format);
    if record.start_date == record.end_date {
        start
    } else {
        format!(
            "{} - {}",
            start,
            format_date(record.end_date, &config.date_format)
        )
    }
}

fn format_date(date: NaiveDate, format: &str) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    // A bad format string fails at render time; fall back to ISO dates.
    match write!(out, "{}", date.format(format)) {
        Ok(()) => out,
        Err(_) => date.to_string(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn parse_position(s: &str) -> Result<usize> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(TimeoffError::Api(format!(
            "Invalid position: {} (expected 1, 2, 3, ...)",
            s
        ))),
    }
}

fn position_error(index: usize, len: usize) -> TimeoffError {
    let noun = if len == 1 { "entry" } else { "entries" };
    TimeoffError::Api(format!(
        "No leave application at position {} (history has {} {})",
        index + 1,
        len,
        noun
    ))
}
