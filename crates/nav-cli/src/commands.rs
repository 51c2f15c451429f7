use std::io::ErrorKind;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;

use nav_server::{NavServer, ServerConfig};
use nav_store::codec::{self, Recovery};
use nav_types::Dataset;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::HashPassword(args) => cmd_hash_password(args),
        Command::Inspect(args) => cmd_inspect(args),
    }
}

/// Defaults, then the config file, then env and flags.
fn resolve_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_file(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(port) = args.port {
        config = config.with_port(port);
    }
    if let Some(data) = &args.data {
        config.data_path = data.clone();
    }
    if args.cookie_secure {
        config.cookie_secure = true;
    }
    Ok(config)
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    tracing::info!(
        bind = %config.bind_addr,
        data = %config.data_path.display(),
        "starting nav server"
    );
    let runtime = tokio::runtime::Runtime::new().context("cannot start async runtime")?;
    runtime.block_on(NavServer::new(config).serve())?;
    Ok(())
}

fn cmd_hash_password(args: HashPasswordArgs) -> anyhow::Result<()> {
    println!("{}", nav_crypto::hash_password(&args.password));
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let raw = match std::fs::read(&args.data) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            println!(
                "{} No dataset at {}; the server would start with defaults.",
                "!".yellow().bold(),
                args.data.display()
            );
            return Ok(());
        }
        Err(e) => {
            return Err(anyhow::Error::new(e).context(format!("cannot read {}", args.data.display())))
        }
    };
    let (dataset, recovery) = codec::decode(&raw);
    print!("{}", render_summary(&args.data, &dataset, recovery));
    Ok(())
}

fn render_summary(path: &Path, dataset: &Dataset, recovery: Recovery) -> String {
    let mut out = String::new();
    let status = match recovery {
        Recovery::Clean => "ok".green(),
        Recovery::Partial => "partially recovered".yellow(),
        Recovery::Reset => "unreadable, defaults used".red(),
    };
    out.push_str(&format!("Dataset {} ({})\n", path.display().to_string().bold(), status));
    out.push_str(&format!("  Admin:      {}\n", dataset.admin.username.cyan()));
    out.push_str(&format!("  Next id:    {}\n", dataset.next_id.to_string().bold()));
    out.push_str(&format!("  Categories: {}\n", dataset.categories.len()));
    out.push_str(&format!("  Items:      {}\n", dataset.items.len()));

    let dangling: Vec<_> = dataset.dangling_items().collect();
    if dangling.is_empty() {
        out.push_str(&format!("{} All category references resolve.\n", "✓".green().bold()));
    } else {
        out.push_str(&format!(
            "{} {} item(s) point at missing categories:\n",
            "!".yellow().bold(),
            dangling.len()
        ));
        for item in dangling {
            let category = item.category_id.map(|id| id.to_string()).unwrap_or_default();
            out.push_str(&format!("  {} {} -> {}\n", item.id.to_string().yellow(), item.name, category.red()));
        }
    }
    out
}
