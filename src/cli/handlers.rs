use std::path::{Path, PathBuf};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::data_dir;
use crate::io::storage::FileStorage;
use crate::io::view_state::{self, ViewState};
use crate::model::{CategoryFilter, StatusFilter, TodoId, category};
use crate::store::TodoService;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let start = match cli.data_dir {
        Some(ref dir) => std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?,
        None => std::env::current_dir()?,
    };

    // Init runs before data-dir discovery
    if let Commands::Init = cli.command {
        return cmd_init(&start);
    }

    let data_dir = data_dir::discover(&start)?;
    match cli.command {
        Commands::Init => unreachable!(),
        Commands::Add(args) => cmd_add(&data_dir, args, json),
        Commands::List => cmd_list(&data_dir, json),
        Commands::Done(args) => cmd_done(&data_dir, args),
        Commands::Rm(args) => cmd_rm(&data_dir, args),
        Commands::Clear => cmd_clear(&data_dir),
        Commands::Cat(cmd) => match cmd.command {
            CatCommands::List => cmd_cat_list(&data_dir, json),
            CatCommands::Add { name } => cmd_cat_add(&data_dir, &name),
            CatCommands::Rm { name } => cmd_cat_rm(&data_dir, &name),
        },
        Commands::Filter(args) => cmd_filter(&data_dir, args, json),
        Commands::Stats => cmd_stats(&data_dir, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The container plus the CLI's persisted filter selections
struct Session {
    data_dir: PathBuf,
    view: ViewState,
    service: TodoService<FileStorage>,
}

/// Open the store and replay the persisted view filters into the container
fn open(data_dir: &Path) -> Session {
    let view = view_state::read_view_state(data_dir).unwrap_or_default();
    let mut service = TodoService::new(FileStorage::new(data_dir));
    service.set_filter(view.status_filter);
    service.set_selected_category(view.category_filter.clone());
    Session {
        data_dir: data_dir.to_path_buf(),
        view,
        service,
    }
}

/// Resolve a todo by its id or any unique prefix of it
fn resolve_id(
    service: &TodoService<FileStorage>,
    prefix: &str,
) -> Result<TodoId, Box<dyn std::error::Error>> {
    let matches: Vec<TodoId> = service
        .todos()
        .iter()
        .map(|t| t.id)
        .filter(|id| id.to_string().starts_with(prefix))
        .collect();
    match matches.len() {
        0 => Err(format!("no todo matching '{}'", prefix).into()),
        1 => Ok(matches[0]),
        n => Err(format!("ambiguous id '{}' ({} matches)", prefix, n).into()),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_init(start: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let dir = data_dir::init(start)?;
    println!("initialized {}", dir.display());
    Ok(())
}

fn cmd_add(data_dir: &Path, args: AddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open(data_dir);
    let Some(id) = session.service.add_todo(&args.text, &args.category)? else {
        return Err("todo text cannot be empty".into());
    };
    let todo = session
        .service
        .todos()
        .iter()
        .find(|t| t.id == id)
        .ok_or("todo missing after add")?;
    if json {
        println!("{}", serde_json::to_string_pretty(&AddedJson { todo })?);
    } else {
        println!("added {}", todo_line(todo));
    }
    Ok(())
}

fn cmd_list(data_dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let session = open(data_dir);
    let todos = session.service.filtered_todos();
    if json {
        let out = ListJson {
            status_filter: session.view.status_filter.as_str(),
            category_filter: session.view.category_filter.as_str(),
            todos,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    if todos.is_empty() {
        println!("(no todos)");
        return Ok(());
    }
    for todo in todos {
        println!("{}", todo_line(todo));
    }
    Ok(())
}

fn cmd_done(data_dir: &Path, args: IdArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open(data_dir);
    let id = resolve_id(&session.service, &args.id)?;
    session.service.toggle_todo(id)?;
    let todo = session
        .service
        .todos()
        .iter()
        .find(|t| t.id == id)
        .ok_or("todo missing after toggle")?;
    println!("{}", todo_line(todo));
    Ok(())
}

fn cmd_rm(data_dir: &Path, args: IdArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open(data_dir);
    let id = resolve_id(&session.service, &args.id)?;
    session.service.delete_todo(id)?;
    println!("deleted {}", id);
    Ok(())
}

fn cmd_clear(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open(data_dir);
    let before = session.service.todos().len();
    session.service.clear_completed()?;
    let removed = before - session.service.todos().len();
    println!("cleared {} completed", removed);
    Ok(())
}

fn cmd_cat_list(data_dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let session = open(data_dir);
    let categories = session.service.categories();
    if json {
        let out = CategoriesJson { categories };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    for name in categories {
        if category::is_default(name) {
            println!("{} (default)", name);
        } else {
            println!("{}", name);
        }
    }
    Ok(())
}

fn cmd_cat_add(data_dir: &Path, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open(data_dir);
    if name.trim().is_empty() {
        return Err("category name cannot be empty".into());
    }
    if session.service.categories().iter().any(|c| c.as_str() == name) {
        println!("category '{}' already exists", name);
        return Ok(());
    }
    session.service.add_category(name)?;
    println!("added category '{}'", name);
    Ok(())
}

fn cmd_cat_rm(data_dir: &Path, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open(data_dir);
    if category::is_default(name) {
        return Err(format!("cannot delete default category '{}'", name).into());
    }
    if !session.service.categories().iter().any(|c| c.as_str() == name) {
        return Err(format!("no category '{}'", name).into());
    }
    session.service.delete_category(name)?;
    // the container resets its own filter; mirror that in the view state
    if session.view.category_filter == CategoryFilter::Name(name.to_string()) {
        session.view.category_filter = CategoryFilter::All;
        view_state::write_view_state(&session.data_dir, &session.view)?;
    }
    println!("removed category '{}'", name);
    Ok(())
}

fn cmd_filter(
    data_dir: &Path,
    args: FilterArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut view = view_state::read_view_state(data_dir).unwrap_or_default();
    if let Some(ref status) = args.status {
        view.status_filter = StatusFilter::parse(status).ok_or_else(|| {
            format!(
                "invalid status '{}' (expected all, active, or completed)",
                status
            )
        })?;
    }
    if let Some(category) = args.category {
        view.category_filter = CategoryFilter::from(category);
    }
    view_state::write_view_state(data_dir, &view)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!(
            "filter: {}, category: {}",
            view.status_filter.as_str(),
            view.category_filter.as_str()
        );
    }
    Ok(())
}

fn cmd_stats(data_dir: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let session = open(data_dir);
    let stats = session.service.stats();
    if json {
        let out = StatsJson {
            status_filter: session.view.status_filter.as_str(),
            category_filter: session.view.category_filter.as_str(),
            stats,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", stats_line(&stats));
    }
    Ok(())
}
