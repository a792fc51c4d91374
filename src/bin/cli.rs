use anyhow::Result;
use listo::cli;
use listo::config::Config;
use listo::context::{AppContext, StandardContext};
use listo::storage::LocalStorage;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Handle help flag
    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h" || args[1] == "help") {
        cli::print_help(&args[0]);
        return Ok(());
    }

    let mut override_root: Option<PathBuf> = None;
    let mut export = false;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--root" | "-r" => {
                if i + 1 >= args.len() {
                    anyhow::bail!("--root requires a path argument");
                }
                override_root = Some(PathBuf::from(&args[i + 1]));
                i += 1;
            }
            "export" => export = true,
            other => anyhow::bail!("Unknown argument '{}', try --help", other),
        }
        i += 1;
    }

    let ctx = StandardContext::new(override_root);
    init_logging(&ctx);

    // CLI Command: listo export
    if export {
        let tasks = LocalStorage::load(&ctx)?;
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    // Normal interactive startup
    let config = Config::load_or_default(&ctx)?;
    listo::repl::run(&ctx, &config)
}

/// Best-effort file logging; the app stays usable without it.
fn init_logging(ctx: &StandardContext) {
    let Ok(path) = ctx.get_log_file_path() else {
        return;
    };
    if let Ok(file) = std::fs::File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Info, ConfigBuilder::new().build(), file);
    }
}
