use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use flexi_logger::Logger;
use postits::board::Board;
use postits::error::{PostitError, Result};
use postits::store::fs::FileStore;
use postits::view::NoteView;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use uuid::Uuid;

mod args;
mod print;
use args::{Cli, Commands};

fn main() {
    // Logger handle must stay alive for the duration of the process.
    let _logger = Logger::try_with_env_or_str("warn").and_then(|l| l.start());

    if let Err(e) = run() {
        match &e {
            PostitError::Validation(fields) => {
                for field in fields {
                    eprintln!("{}", format!("The {} cannot be empty", field).red());
                }
            }
            _ => eprintln!("{} {}", "Error:".red(), e),
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut board = Board::new(FileStore::new(store_path(&cli)?));
    let initial = board.initialize();

    match cli.command {
        Some(Commands::Add { title, content }) => handle_add(&mut board, &title, &content),
        Some(Commands::Edit { index }) => handle_edit(&mut board, &initial.view, index),
        Some(Commands::Delete { index }) => handle_delete(&mut board, &initial.view, index),
        Some(Commands::Clear { yes }) => handle_clear(&mut board, yes),
        Some(Commands::List) | None => {
            print::print_notes(&initial.view);
            Ok(())
        }
    }
}

fn store_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.store {
        return Ok(path.clone());
    }
    let dirs = ProjectDirs::from("com", "postits", "postits")
        .ok_or_else(|| PostitError::Store("could not determine a data directory".to_string()))?;
    Ok(dirs.data_dir().join("post-its.json"))
}

/// Maps a 1-based list position from the last render onto a note id.
fn resolve(view: &[NoteView], index: usize) -> Result<Uuid> {
    index
        .checked_sub(1)
        .and_then(|i| view.get(i))
        .map(|note| note.id)
        .ok_or_else(|| PostitError::Api(format!("No note at position {}", index)))
}

fn handle_add<S: postits::store::NoteStore>(
    board: &mut Board<S>,
    title: &str,
    content: &str,
) -> Result<()> {
    let result = board.add_note(title, content)?;
    print::print_messages(&result.messages);
    print::print_notes(&result.view);
    Ok(())
}

fn handle_delete<S: postits::store::NoteStore>(
    board: &mut Board<S>,
    view: &[NoteView],
    index: usize,
) -> Result<()> {
    let id = resolve(view, index)?;
    let result = board.delete_note(id)?;
    print::print_messages(&result.messages);
    print::print_notes(&result.view);
    Ok(())
}

fn handle_edit<S: postits::store::NoteStore>(
    board: &mut Board<S>,
    view: &[NoteView],
    index: usize,
) -> Result<()> {
    let id = resolve(view, index)?;
    let started = board.start_edit(id)?;
    if !started.changed {
        println!("Another note is being edited.");
        return Ok(());
    }

    let current = started
        .view
        .iter()
        .find(|v| v.id == id)
        .cloned()
        .ok_or(PostitError::NoteNotFound(id))?;
    print::print_note(&current);
    println!("{}", "Empty input keeps the old value, '.' cancels.".dimmed());

    let new_title = prompt("title> ")?;
    if new_title.trim() == "." {
        let result = board.cancel_edit(id)?;
        print::print_messages(&result.messages);
        return Ok(());
    }
    let new_content = prompt("content> ")?;
    if new_content.trim() == "." {
        let result = board.cancel_edit(id)?;
        print::print_messages(&result.messages);
        return Ok(());
    }

    let title = keep_if_blank(&new_title, &current.title);
    let content = keep_if_blank(&new_content, &current.content);

    let result = board.save_edit(id, title, content)?;
    print::print_messages(&result.messages);
    print::print_notes(&result.view);
    Ok(())
}

fn handle_clear<S: postits::store::NoteStore>(board: &mut Board<S>, yes: bool) -> Result<()> {
    if !yes {
        let answer = prompt("Delete ALL notes? [y/N] ")?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let result = board.clear_all();
    print::print_messages(&result.messages);
    Ok(())
}

fn keep_if_blank<'a>(input: &'a str, previous: &'a str) -> &'a str {
    if input.trim().is_empty() {
        previous
    } else {
        input
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    std::io::stdout().flush().map_err(PostitError::Io)?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(PostitError::Io)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}
