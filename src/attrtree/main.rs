use attrtree::api::TreeStore;
use attrtree::config::TreeConfig;
use attrtree::error::Result;
use attrtree::model::SelectionMode;
use attrtree::state_file::StateDocument;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod args;
mod cli;
use args::{Cli, Commands, ModeArg};
use cli::print::{print_info, print_matches, print_move, print_rows, print_success};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

struct AppContext {
    store: TreeStore,
    config: TreeConfig,
    file: PathBuf,
}

impl AppContext {
    fn save(&self) -> Result<()> {
        StateDocument::from_store(&self.store).save(&self.file)
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Show { all }) => handle_show(&ctx, all),
        Some(Commands::Expand { folder }) => handle_expand(&mut ctx, &folder),
        Some(Commands::Select { leaf, mode }) => handle_select(&mut ctx, &leaf, mode),
        Some(Commands::Move {
            leaf,
            folder,
            index,
            dry_run,
        }) => handle_move(&mut ctx, &leaf, &folder, index, dry_run),
        Some(Commands::Remove { leaf }) => handle_remove(&mut ctx, &leaf),
        Some(Commands::Search { term }) => handle_search(&ctx, &term.join(" ")),
        Some(Commands::Selected) => handle_selected(&ctx),
        None => handle_show(&ctx, false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => cli
            .file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    let config = TreeConfig::load(&config_dir)?;
    let store = StateDocument::load(&cli.file)?.into_store(&config)?;

    Ok(AppContext {
        store,
        config,
        file: cli.file.clone(),
    })
}

fn handle_show(ctx: &AppContext, all: bool) -> Result<()> {
    let rows = if all {
        ctx.store.all_rows()
    } else {
        ctx.store.visible_rows()
    };
    print_rows(&rows, ctx.config.show_locked_marker);
    Ok(())
}

fn handle_expand(ctx: &mut AppContext, folder: &str) -> Result<()> {
    let expanded = ctx.store.toggle_expand(folder)?;
    ctx.save()?;
    let verb = if expanded { "Expanded" } else { "Collapsed" };
    print_success(&format!("{} folder '{}'", verb, folder));
    Ok(())
}

fn handle_select(ctx: &mut AppContext, leaf: &str, mode: Option<ModeArg>) -> Result<()> {
    let mode = match mode {
        Some(ModeArg::Single) => SelectionMode::Single,
        Some(ModeArg::Multi) => SelectionMode::Multi,
        None => ctx.config.selection_mode,
    };
    let selected = ctx.store.toggle_select(leaf, mode)?;
    ctx.save()?;
    let verb = if selected { "Checked" } else { "Unchecked" };
    print_success(&format!("{} '{}'", verb, leaf));
    Ok(())
}

fn handle_move(
    ctx: &mut AppContext,
    leaf: &str,
    folder: &str,
    index: usize,
    dry_run: bool,
) -> Result<()> {
    ctx.store.begin_drag(leaf)?;
    if let Err(e) = ctx.store.update_drag_target(folder, index) {
        ctx.store.cancel_drag();
        return Err(e);
    }

    if dry_run {
        let preview = ctx.store.drop_preview();
        ctx.store.cancel_drag();
        let target = preview?;
        print_info(&format!(
            "'{}' would land in '{}' at position {}",
            leaf, target.parent_id, target.index
        ));
        return Ok(());
    }

    let report = ctx.store.commit_drag()?;
    if !report.is_noop() {
        ctx.save()?;
    }
    print_move(&report);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, leaf: &str) -> Result<()> {
    let removed = ctx.store.remove_leaf(leaf)?;
    ctx.save()?;
    print_success(&format!(
        "Removed '{}' ({})",
        removed.display_label(),
        removed.id()
    ));
    Ok(())
}

fn handle_search(ctx: &AppContext, term: &str) -> Result<()> {
    print_matches(&ctx.store.search(term));
    Ok(())
}

fn handle_selected(ctx: &AppContext) -> Result<()> {
    for leaf in ctx.store.selected_leaves() {
        println!("{}", leaf.id());
    }
    Ok(())
}
