use colored::*;
use console::Term;
use contactbook::api::{CmdMessage, CmdResult, ConfigAction, ContactsApi, MessageLevel};
use contactbook::config::BookConfig;
use contactbook::error::{BookError, Result};
use contactbook::store::fs::FileStore;
use directories::ProjectDirs;

mod args;
use args::{Cli, Commands, PhoneCommands};
use clap::Parser;

const WAIT_FOR_ENTER: &str = "Press 'Enter' to continue.";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ContactsApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Add {
            name,
            birthday,
            phones,
        }) => handle_add(&mut ctx, name, birthday, phones),
        Some(Commands::Show { name }) => handle_show(&ctx, name),
        Some(Commands::Delete { name }) => handle_delete(&mut ctx, name),
        Some(Commands::List {
            page_size,
            no_pause,
        }) => handle_list(&ctx, page_size, no_pause),
        Some(Commands::Search { term }) => handle_search(&ctx, term),
        Some(Commands::Phone(action)) => handle_phone(&mut ctx, action),
        Some(Commands::Birthday { name, set }) => handle_birthday(&mut ctx, name, set),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, None, false),
    }
}

fn init_context() -> Result<AppContext> {
    let proj_dirs = ProjectDirs::from("com", "contactbook", "contactbook")
        .ok_or_else(|| BookError::Store("Could not determine config dir".to_string()))?;
    let config_dir = proj_dirs.config_dir().to_path_buf();
    let config = BookConfig::load(&config_dir)?;

    let store = FileStore::in_home_dir()?;
    let mut api = ContactsApi::new(store, config, config_dir);
    let loaded = api.load()?;
    print_messages(&loaded.messages);

    Ok(AppContext { api })
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    birthday: Option<String>,
    phones: Vec<String>,
) -> Result<()> {
    let result = ctx.api.add_contact(&name, birthday.as_deref(), &phones[..])?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, name: String) -> Result<()> {
    let result = ctx.api.show_contact(&name)?;
    for record in &result.listed_records {
        println!("{}", record);
    }
    print_days_to_birthday(&result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, name: String) -> Result<()> {
    let result = ctx.api.delete_contact(&name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, page_size: Option<usize>, no_pause: bool) -> Result<()> {
    let result = ctx.api.list_contacts(page_size)?;
    print_pages(&result.pages, !no_pause && console::user_attended())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &AppContext, term: String) -> Result<()> {
    let result = ctx.api.search_contacts(&term)?;
    print_pages(&result.pages, false)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_phone(ctx: &mut AppContext, action: PhoneCommands) -> Result<()> {
    let result = match action {
        PhoneCommands::Add { name, phone } => ctx.api.add_phone(&name, &phone)?,
        PhoneCommands::Remove { name, phone } => ctx.api.remove_phone(&name, &phone)?,
        PhoneCommands::Edit { name, old, new } => ctx.api.edit_phone(&name, &old, &new)?,
        PhoneCommands::Find { name, phone } => ctx.api.find_phone(&name, &phone)?,
    };
    if let Some(phone) = &result.phone {
        println!("{}", phone);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_birthday(ctx: &mut AppContext, name: String, set: Option<String>) -> Result<()> {
    let result = match set {
        Some(raw) => ctx.api.set_birthday(&name, &raw)?,
        None => ctx.api.birthday(&name)?,
    };
    print_days_to_birthday(&result);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.configure(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in BookConfig::KEYS {
                println!("{} = {}", key, config.get(key).unwrap_or_default());
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_pages(pages: &[String], pause: bool) -> Result<()> {
    if pages.is_empty() {
        println!("{}", "No contacts found.".dimmed());
        return Ok(());
    }

    let term = Term::stdout();
    for (i, page) in pages.iter().enumerate() {
        println!("{}", page);
        if pause && i + 1 < pages.len() {
            term.write_line(&WAIT_FOR_ENTER.dimmed().to_string())?;
            term.read_line()?;
        }
    }
    Ok(())
}

fn print_days_to_birthday(result: &CmdResult) {
    if let Some(days) = result.days_to_birthday {
        let text = match days {
            0 => "Birthday is today!".to_string(),
            1 => "Next birthday in 1 day".to_string(),
            n => format!("Next birthday in {} days", n),
        };
        println!("{}", text.cyan());
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
