use super::print::{describe, print_config, print_history, print_messages, print_share, print_view};
use super::setup::{Cli, Commands};
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use log::{debug, warn};
use std::io::IsTerminal;
use std::path::PathBuf;
use zapscan::api::{ConfigAction, ZapPaths, ZapScanApi};
use zapscan::classifier::BarcodeEvent;
use zapscan::config::ZapConfig;
use zapscan::error::{Result, ZapError};
use zapscan::model::ScanRecord;
use zapscan::presenter::HistoryFilter;
use zapscan::screen::scanner::ScanChoice;
use zapscan::store::fs::FileStore;
use zapscan::theme::Palette;

const DATA_DIR_ENV: &str = "ZAPSCAN_DATA";

struct AppContext {
    api: ZapScanApi<FileStore>,
    palette: Palette,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Scan {
            payload,
            hint,
            event,
            save,
            view,
        }) => handle_scan(&ctx, payload, hint, event, save, view),
        Some(Commands::History { filter }) => handle_history(&ctx, filter),
        Some(Commands::View { index }) => handle_view(&ctx, index),
        Some(Commands::Share { index }) => handle_share(&ctx, index),
        Some(Commands::Delete { index, swipe, yes }) => handle_delete(&ctx, index, swipe, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_history(&ctx, HistoryFilter::All),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "zapscan=debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init();
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "zapscan", "zapscan")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ZapError::Config("Could not determine a data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir(cli)?;
    debug!("data dir: {}", data_dir.display());

    let config = ZapConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!("{}; using default settings", e);
        ZapConfig::default()
    });

    let accent = config.accent.resolve(&mut rand::thread_rng());
    let platform_dark = matches!(dark_light::detect(), dark_light::Mode::Dark);
    let palette = Palette::new(config.color_scheme, accent, platform_dark);
    debug!("accent {} on {:?} scheme", accent.name(), config.color_scheme);

    let store = FileStore::new(data_dir.clone());
    Ok(AppContext {
        api: ZapScanApi::new(store, ZapPaths { data_dir }, config),
        palette,
    })
}

fn handle_scan(
    ctx: &AppContext,
    payload: Option<String>,
    hint: Option<String>,
    event: Option<String>,
    save: bool,
    view: bool,
) -> Result<()> {
    let event = match event {
        Some(raw) => serde_json::from_str::<BarcodeEvent>(&raw)?,
        None => BarcodeEvent::new(payload.unwrap_or_default(), hint.as_deref()),
    };

    let scan = ctx.api.classify(&event);
    println!("Scanned {}: {}", scan.kind, scan.data);

    let choice = match (save, view) {
        (true, true) => Some(ScanChoice::SaveAndView),
        (true, false) => Some(ScanChoice::SaveOnly),
        (false, true) => Some(ScanChoice::ViewOnly),
        (false, false) => prompt_scan_choice(),
    };

    let result = ctx.api.scan(&event, choice)?;
    print_messages(&result.messages, &ctx.palette);
    if let Some(view) = &result.view {
        print_view(view, &ctx.palette);
    }
    Ok(())
}

fn prompt_scan_choice() -> Option<ScanChoice> {
    println!();
    println!("QR Scanned");
    println!("Do you want to view the Result or Save it.");
    let options: Vec<String> = ScanChoice::ALL
        .iter()
        .map(|c| format!("[{}] {}", c.shortcut(), c))
        .collect();
    println!("{}  (enter to dismiss)", options.join("  "));

    let line = read_answer()?;
    match line.parse::<ScanChoice>() {
        Ok(choice) => Some(choice),
        Err(e) => {
            debug!("{}", e);
            None
        }
    }
}

fn handle_history(ctx: &AppContext, filter: HistoryFilter) -> Result<()> {
    let result = ctx.api.history(filter)?;
    print_history(&result.listed_records, filter, &ctx.palette);
    print_messages(&result.messages, &ctx.palette);
    Ok(())
}

fn handle_view(ctx: &AppContext, index: usize) -> Result<()> {
    let result = ctx.api.view(index)?;
    if let Some(view) = &result.view {
        print_view(view, &ctx.palette);
    }
    print_messages(&result.messages, &ctx.palette);
    Ok(())
}

fn handle_share(ctx: &AppContext, index: usize) -> Result<()> {
    let result = ctx.api.share(index)?;
    if let Some(share) = &result.share {
        print_share(share);
    }
    print_messages(&result.messages, &ctx.palette);
    Ok(())
}

fn handle_delete(ctx: &AppContext, index: usize, swipe: Option<f32>, yes: bool) -> Result<()> {
    let result = ctx.api.delete(index, swipe, |record| yes || confirm_delete(record))?;
    print_messages(&result.messages, &ctx.palette);
    Ok(())
}

fn confirm_delete(record: &ScanRecord) -> bool {
    println!("{}", describe(record));
    println!("Delete item");
    println!("Are you sure you want to delete this item? [y/N]");
    match read_answer() {
        Some(answer) => matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"),
        None => false,
    }
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages, &ctx.palette);
    Ok(())
}

/// A trimmed line from the terminal; `None` when empty or unreadable.
fn read_answer() -> Option<String> {
    if !std::io::stdin().is_terminal() {
        return None;
    }
    let term = Term::stdout();
    match term.read_line() {
        Ok(line) if !line.trim().is_empty() => Some(line.trim().to_string()),
        Ok(_) => None,
        Err(e) => {
            debug!("prompt read failed: {}", e);
            None
        }
    }
}
