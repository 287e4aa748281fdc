use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tinkerbox::Toolbox;
use tinkerbox::catalog::Catalog;
use tinkerbox::utils::{RetryPolicy, Terminal};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tinkerbox", version)]
#[command(about = "Energy calculator, products list and character encoder in one terminal menu")]
struct Cli {
    /// JSON catalog replacing the built-in product categories
    #[arg(long, value_name = "FILE")]
    products: Option<PathBuf>,

    /// JSON catalog replacing the built-in appliance categories
    #[arg(long, value_name = "FILE")]
    appliances: Option<PathBuf>,

    /// Give up on a prompt after this many invalid answers
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    max_attempts: Option<u32>,

    /// Typing this word at any prompt cancels it
    #[arg(long, value_name = "TOKEN")]
    cancel: Option<String>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let products = load_catalog(cli.products.as_deref(), Catalog::products)?;
    let appliances = load_catalog(cli.appliances.as_deref(), Catalog::appliances)?;

    let mut policy = RetryPolicy::unlimited();
    if let Some(attempts) = cli.max_attempts {
        policy = policy.max_attempts(attempts as usize);
    }
    if let Some(token) = cli.cancel {
        policy = policy.cancel_with(token);
    }

    banner();

    let mut terminal = Terminal::stdio().with_policy(policy);
    Toolbox::new(products, appliances).run(&mut terminal);
    Ok(())
}

fn load_catalog(path: Option<&Path>, builtin: fn() -> Catalog) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("loading catalog from {}", path.display())),
        None => Ok(builtin()),
    }
}

fn banner() {
    println!("----------------------------------------------------------------------");
    println!("████████ ██ ███    ██ ██   ██ ███████ ██████  ██████   ██████  ██   ██");
    println!("   ██    ██ ████   ██ ██  ██  ██      ██   ██ ██   ██ ██    ██  ██ ██ ");
    println!("   ██    ██ ██ ██  ██ █████   █████   ██████  ██████  ██    ██   ███  ");
    println!("   ██    ██ ██  ██ ██ ██  ██  ██      ██   ██ ██   ██ ██    ██  ██ ██ ");
    println!("   ██    ██ ██   ████ ██   ██ ███████ ██   ██ ██████   ██████  ██   ██");
    println!("                          VERSION:            {}", env!("CARGO_PKG_VERSION"));
    println!("----------------------------------------------------------------------");
}
