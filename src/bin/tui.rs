use anyhow::Result;
use dossier::cli::{self, CliArgs, CliCommand};
use dossier::config::Config;
use dossier::context::{SharedContext, StandardContext};
use dossier::model::FilterState;
use dossier::model::display::ProcedureDisplay;
use dossier::storage::LocalStorage;
use dossier::store::ProcedureStore;
use std::env;
use std::sync::Arc;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match cli::parse(&args) {
        CliCommand::Help => {
            cli::print_help("dossier");
            Ok(())
        }
        CliCommand::Export(opts) => export(opts),
        CliCommand::Run(opts) => {
            let ctx: SharedContext = Arc::new(StandardContext::new(opts.root));
            dossier::tui::run(ctx, opts.snapshot)
        }
    }
}

// CLI Command: dossier export
fn export(opts: CliArgs) -> Result<()> {
    let ctx: SharedContext = Arc::new(StandardContext::new(opts.root));
    let cfg = match Config::load(ctx.as_ref()) {
        Ok(c) => c,
        Err(e) if Config::is_missing_config_error(&e) => Config::default(),
        Err(e) => return Err(e),
    };

    let snapshot_path = opts
        .snapshot
        .or_else(|| cfg.resolve_snapshot_path(ctx.as_ref()));
    let procedures = match &snapshot_path {
        Some(path) => LocalStorage::load_snapshot(path, &cfg.date_format)?,
        None => Vec::new(),
    };

    let mut store = ProcedureStore::new();
    store.load(procedures, &cfg.subject_labels);

    let order = opts.order.unwrap_or(cfg.default_order);
    let filters = FilterState::with_order(order);
    for procedure in store.visible(&filters) {
        println!("{}", procedure.list_line());
    }
    Ok(())
}
