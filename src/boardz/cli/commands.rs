//! # CLI Layer
//!
//! This module is **one possible UI client** for boardz. It is the only place
//! that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Parses arguments
//! - Starts the async runtime for the remote widgets
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the data directory, config and API
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::print::{
    print_config, print_draft, print_messages, print_notes, print_profile, print_question,
    print_stats, prompt,
};
use super::setup::{Cli, Commands};
use boardz::api::{BoardzApi, CmdResult, ConfigAction};
use boardz::config::BoardzConfig;
use boardz::editor::{edit_content, EditorContent};
use boardz::error::{BoardzError, Result};
use boardz::quiz::NO_QUESTIONS_MESSAGE;
use boardz::store::fs::FsSlot;
use clap::Parser;
use directories::ProjectDirs;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::PathBuf;

const HOME_ENV: &str = "BOARDZ_HOME";

struct AppContext {
    api: BoardzApi<FsSlot>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Add { title, content }) => handle_add(&mut ctx, &title, &content),
        Some(Commands::Edit { id, title, content }) => handle_edit(&mut ctx, id, title, content),
        Some(Commands::Remove { id }) => handle_remove(&mut ctx, id),
        Some(Commands::Board) => handle_board(&mut ctx),
        Some(Commands::Profile { username }) => handle_profile(&ctx, &username),
        Some(Commands::Quiz { amount }) => handle_quiz(&ctx, amount),
        Some(Commands::Count { text }) => handle_count(&ctx, text),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    let dirs = ProjectDirs::from("com", "boardz", "boardz")
        .ok_or_else(|| BoardzError::Store("Could not determine data directory".to_string()))?;
    Ok(dirs.data_dir().to_path_buf())
}

fn init_context() -> Result<AppContext> {
    let dir = data_dir()?;
    log::debug!("Using data directory {}", dir.display());

    let config = BoardzConfig::load(&dir).unwrap_or_else(|e| {
        log::warn!("Ignoring unreadable config: {}", e);
        BoardzConfig::default()
    });
    let api = BoardzApi::new(FsSlot::new(dir.clone()), config, dir);
    Ok(AppContext { api })
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(BoardzError::Io)
}

fn print_result(result: &CmdResult) {
    if !result.listed_notes.is_empty() {
        print_notes(&result.listed_notes);
    }
    if let Some(draft) = &result.draft {
        print_draft(draft);
    }
    if let Some(view) = &result.profile {
        print_profile(view);
    }
    if let Some(stats) = &result.stats {
        print_stats(stats);
    }
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_notes();
    if result.listed_notes.is_empty() {
        print_notes(&[]);
    }
    print_result(&result);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, title: &str, content: &str) -> Result<()> {
    print_result(&ctx.api.add_note(title, content));
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    id: i64,
    title: Option<String>,
    content: Option<String>,
) -> Result<()> {
    let (title, content) = if title.is_none() && content.is_none() {
        let note = ctx.api.get_note(id)?;
        let edited = edit_content(&EditorContent::new(&note.title, &note.content))?;
        (Some(edited.title), Some(edited.content))
    } else {
        (title, content)
    };

    print_result(&ctx.api.edit_note(id, title, content)?);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, id: i64) -> Result<()> {
    print_result(&ctx.api.remove_note(id));
    Ok(())
}

fn handle_board(ctx: &mut AppContext) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!("Note board. Type 'help' for commands.");
    }

    print_notes(ctx.api.store().notes());

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{}", prompt(ctx.api.store().mode()));
            io::stdout().flush().map_err(BoardzError::Io)?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(BoardzError::Io)?;

        let result = ctx.api.board_line(&line);
        print_result(&result);
        if result.quit {
            break;
        }
    }
    Ok(())
}

fn handle_profile(ctx: &AppContext, username: &str) -> Result<()> {
    let result = runtime()?.block_on(ctx.api.profile(username))?;
    print_result(&result);
    Ok(())
}

fn handle_quiz(ctx: &AppContext, amount: Option<u32>) -> Result<()> {
    println!("Loading quiz questions...");
    let mut quiz = runtime()?.block_on(ctx.api.load_quiz(amount))?;
    if quiz.is_empty() {
        println!("{}", NO_QUESTIONS_MESSAGE);
        return Ok(());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        while let Some(question) = quiz.current_question().cloned() {
            if quiz.is_finished() {
                break;
            }
            print_question(&quiz, &question);

            let Some(line) = lines.next() else {
                return Ok(());
            };
            let line = line.map_err(BoardzError::Io)?;
            let choice = line.trim().parse::<usize>().ok().and_then(|n| n.checked_sub(1));
            match choice.and_then(|c| quiz.answer(c)) {
                Some(true) => println!("Correct!"),
                Some(false) => {
                    let right = question
                        .answers
                        .iter()
                        .find(|a| a.is_correct)
                        .map(|a| a.text.as_str())
                        .unwrap_or_default();
                    println!("Wrong, the answer was: {}", right);
                }
                None => println!(
                    "Pick a number between 1 and {}",
                    question.answers.len()
                ),
            }
        }

        println!();
        println!("{}", quiz.result_line());
        println!("Try again? [y/N]");
        match lines.next() {
            Some(Ok(answer)) if answer.trim().eq_ignore_ascii_case("y") => quiz.reset(),
            _ => return Ok(()),
        }
    }
}

fn handle_count(ctx: &AppContext, text: Option<String>) -> Result<()> {
    let text = match text {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(BoardzError::Io)?;
            buf
        }
    };
    print_result(&ctx.api.count(&text));
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    print_result(&ctx.api.config(action)?);
    Ok(())
}
