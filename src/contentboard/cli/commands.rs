use super::render::{
    print_messages, render_full_records, render_record_list, render_text_list,
};
use super::setup::{Cli, Commands, FieldArgs, FilterArgs};
use clap::Parser;
use contentboard::api::{self, BoardApi, CmdMessage, ConfigAction};
use contentboard::config::BoardConfig;
use contentboard::draft::RecordDraft;
use contentboard::error::{BoardError, Result};
use contentboard::store::fs::FsBlobStore;
use directories::ProjectDirs;
use env_logger::Builder as LoggerBuilder;
use log::{debug, LevelFilter};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const BOARD_DIR: &str = ".contentboard";

struct AppContext {
    api: BoardApi<FsBlobStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_env_logger_verbosity(cli.verbose);

    let dir = board_dir(cli.global)?;
    debug!("Using board directory {}", dir.display());

    // Naked `contentboard` lists the board
    let command = cli.command.unwrap_or(Commands::List {
        filter: FilterArgs::default(),
    });

    match command {
        Commands::Config { key, value } => handle_config(&dir, key, value),
        Commands::Init => handle_init(&dir),
        Commands::List { filter } => handle_list(&mut init_context(dir)?, &filter),
        Commands::Show { ids } => handle_show(&init_context(dir)?, &ids),
        Commands::Add { fields } => handle_add(&mut init_context(dir)?, &fields),
        Commands::Edit { id, fields } => handle_edit(&mut init_context(dir)?, &id, &fields),
        Commands::Toggle { id } => handle_toggle(&mut init_context(dir)?, &id),
        Commands::Move {
            source,
            target,
            filter,
        } => handle_move(&mut init_context(dir)?, &source, &target, &filter),
        Commands::Delete { id, yes } => handle_delete(&mut init_context(dir)?, &id, yes),
    }
}

fn init_env_logger_verbosity(verbosity_level: u8) {
    let log_level_filter = match verbosity_level {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut logger_builder = LoggerBuilder::new();
    logger_builder.filter_level(log_level_filter);
    if let Ok(rust_log) = env::var("RUST_LOG") {
        logger_builder.parse_filters(&rust_log);
    }
    let _ = logger_builder.try_init();
}

fn board_dir(global: bool) -> Result<PathBuf> {
    if global {
        let proj_dirs = ProjectDirs::from("com", "contentboard", "contentboard").ok_or_else(
            || BoardError::Store("Could not determine the global data directory".to_string()),
        )?;
        Ok(proj_dirs.data_dir().to_path_buf())
    } else {
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Ok(cwd.join(BOARD_DIR))
    }
}

fn init_context(dir: PathBuf) -> Result<AppContext> {
    let config = BoardConfig::load(&dir)?;
    let api = BoardApi::open(FsBlobStore::new(dir), &config)?;
    Ok(AppContext { api })
}

fn handle_list(ctx: &mut AppContext, filter: &FilterArgs) -> Result<()> {
    let result = ctx.api.list(filter.to_filter())?;
    print!("{}", render_record_list(&result.listed_records));
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, ids: &[String]) -> Result<()> {
    let result = ctx.api.show(ids)?;
    print!("{}", render_full_records(&result.listed_records));
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, fields: &FieldArgs) -> Result<()> {
    let result = ctx.api.add()?;
    print_messages(&result.messages);

    if fields.is_empty() {
        return Ok(());
    }
    let Some(added) = result.affected_records.first() else {
        return Ok(());
    };
    let mut draft = RecordDraft::from(added);
    fields.apply_to(&mut draft);
    let result = ctx.api.save(&added.id, &draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: &str, fields: &FieldArgs) -> Result<()> {
    let Some(record) = ctx.api.board().find(id) else {
        print_messages(&[CmdMessage::info(format!(
            "No record with id {}, nothing to edit",
            id
        ))]);
        return Ok(());
    };
    let mut draft = RecordDraft::from(record);
    fields.apply_to(&mut draft);

    let result = ctx.api.save(id, &draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_toggle(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.toggle_visibility(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_move(
    ctx: &mut AppContext,
    source: &str,
    target: &str,
    filter: &FilterArgs,
) -> Result<()> {
    let result = ctx.api.move_record(filter.to_filter(), source, target)?;
    print_messages(&result.messages);
    if !result.listed_records.is_empty() {
        print!("{}", render_record_list(&result.listed_records));
    }
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str, yes: bool) -> Result<()> {
    let request = ctx.api.request_delete(id)?;
    print_messages(&request.messages);
    if ctx.api.board().pending_delete().is_none() {
        return Ok(());
    }

    let result = if yes || confirm_from_stdin()? {
        ctx.api.confirm_delete()?
    } else {
        ctx.api.cancel_delete()?
    };
    print_messages(&result.messages);
    Ok(())
}

fn confirm_from_stdin() -> Result<bool> {
    print!("Confirm [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    println!();
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn handle_config(dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.clone(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = api::config(dir, action)?;
    if key.is_none() {
        if let Some(config) = &result.config {
            let lines: Vec<String> = config
                .entries()
                .into_iter()
                .map(|(k, v)| format!("{} = {}", k, v))
                .collect();
            print!("{}", render_text_list(&lines, "No configuration values."));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(dir: &Path) -> Result<()> {
    let result = api::init(dir)?;
    print_messages(&result.messages);
    Ok(())
}
