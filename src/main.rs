use clap::Parser;
use sideway::application::{
    delete_note, list_notes, show_note, ConfigService, InitService, SaveNoteService,
};
use sideway::cli::{format_note_detail, format_note_list, Cli, Commands};
use sideway::domain::NoteDraft;
use sideway::error::NotepadError;
use sideway::infrastructure::{BackendKind, Config, FileSystemRepository, NotepadRepository};
use sideway::logging::init_logging;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    // Logging follows the workspace config when there is one
    let level = FileSystemRepository::discover()
        .and_then(|repo| repo.load_config())
        .map(|config| config.log_level)
        .unwrap_or_else(|_| "warn".to_string());
    init_logging(&level);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn open_workspace() -> Result<(FileSystemRepository, Config), NotepadError> {
    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;
    Ok((repo, config))
}

fn run(cli: Cli) -> Result<(), NotepadError> {
    match cli.command {
        Some(Commands::Init { path, backend }) => {
            let backend = BackendKind::from_str(&backend).map_err(NotepadError::Config)?;
            let config = Config {
                backend,
                ..Config::default()
            };
            InitService::execute(&path, &config)?;

            println!("Initialized sideway notepad at {}", path.display());
            println!("Backend: {}", backend);
            Ok(())
        }
        Some(Commands::List { limit }) => {
            let (repo, config) = open_workspace()?;
            let store = repo.open_store(&config);
            let notes = list_notes(&store, limit)?;
            print!("{}", format_note_list(&notes));
            if notes.is_empty() {
                println!();
            }
            Ok(())
        }
        Some(Commands::Show { id }) => {
            let (repo, config) = open_workspace()?;
            let store = repo.open_store(&config);
            let note = show_note(&store, &id)?;
            print!("{}", format_note_detail(&note));
            Ok(())
        }
        Some(Commands::New { title, content }) => {
            let (repo, config) = open_workspace()?;
            let store = repo.open_store(&config);
            let note = SaveNoteService::new(&store).create(&NoteDraft::new(title, content))?;
            println!("Created note {}", note.id);
            Ok(())
        }
        Some(Commands::Edit { id, title, content }) => {
            let (repo, config) = open_workspace()?;
            let store = repo.open_store(&config);
            let note = SaveNoteService::new(&store).edit(&id, title, content)?;
            println!("Updated note {}", note.id);
            Ok(())
        }
        Some(Commands::Delete { id, yes }) => {
            let (repo, config) = open_workspace()?;
            let store = repo.open_store(&config);

            if !yes {
                let note = show_note(&store, &id)?;
                println!("{}", note.title);
                if !confirm("Are you sure you want to delete this note? [y/N] ")? {
                    println!("Cancelled");
                    return Ok(());
                }
            }

            if delete_note(&store, &id)? {
                println!("Deleted note {}", id);
                Ok(())
            } else {
                Err(NotepadError::NoteNotFound(id))
            }
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("backend = {}", config.backend);
                println!("storage_key = {}", config.storage_key);
                println!("default_title = {}", config.default_title);
                println!("log_level = {}", config.log_level);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: sideway config [--list | <key> [<value>]]");
                println!("Valid keys: backend, storage_key, default_title, log_level");
                Ok(())
            }
        }
        None => {
            println!("Welcome to Sideway Notepad");
            println!("Run 'sideway new' to create a note or 'sideway list' to see your notes.");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

/// Ask a yes/no question on stderr; anything but y/yes is a no
fn confirm(prompt: &str) -> Result<bool, NotepadError> {
    let mut stderr = io::stderr();
    stderr.write_all(prompt.as_bytes())?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
