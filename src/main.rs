use clap::{Parser, Subcommand};
use env_logger::Env;
use log::debug;
use std::error::Error;
use std::time::Duration;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};

use recipe_finder::render::{render, render_results};
use recipe_finder::{HttpRecipeApi, RecipeFinder, SearchMode, ViewState};

#[derive(Parser)]
#[command(name = "recipe-finder")]
#[command(about = "Search recipes by name, ingredients or cuisine", long_about = None)]
#[command(version)]
struct Cli {
    /// API base URL (overrides config and environment)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// API key (overrides config and environment)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Number of results per search
    #[arg(long, global = true)]
    limit: Option<u32>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search recipes and print the results
    Search {
        /// What the text searches by: name, ingredients or cuisine
        #[arg(long = "by", default_value = "name")]
        mode: SearchMode,

        /// Search text, e.g. "pasta" or "egg,flour"
        #[arg(required = true)]
        text: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the full recipe for an id
    Details {
        id: u64,

        /// Print the recipe as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive search and browse loop
    Browse {
        /// Initial search mode
        #[arg(long = "by", default_value = "name")]
        mode: SearchMode,
    },
}

const BROWSE_HELP: &str = "\
Commands:
  <text> or s <text>   search in the current mode
  m <mode>             switch mode (name, ingredients, cuisine)
  <number>             open that result
  b                    back to results
  h                    show this help
  q                    quit";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Initialize logger with default level (overridden by RUST_LOG)
    let env = Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    let mut builder = RecipeFinder::builder();
    if let Some(url) = cli.base_url {
        builder = builder.base_url(url);
    }
    if let Some(key) = cli.api_key {
        builder = builder.api_key(key);
    }
    if let Some(limit) = cli.limit {
        builder = builder.result_limit(limit);
    }
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let mut finder = builder.build()?;

    match cli.command {
        Commands::Search { mode, text, json } => {
            let text = text.join(" ");
            let state = finder.search(mode, &text).await.clone();
            match state {
                ViewState::Error(message) => {
                    eprintln!("{}", message);
                    std::process::exit(1);
                }
                ViewState::ListResults(items) if json => {
                    println!("{}", serde_json::to_string_pretty(&items)?);
                }
                _ => print!("{}", render(finder.controller())),
            }
        }
        Commands::Details { id, json } => {
            let state = finder.open(id).await.clone();
            match state {
                ViewState::Error(message) => {
                    eprintln!("{}", message);
                    std::process::exit(1);
                }
                ViewState::Detail(detail) if json => {
                    println!("{}", serde_json::to_string_pretty(&detail)?);
                }
                _ => print!("{}", render(finder.controller())),
            }
        }
        Commands::Browse { mode } => browse(&mut finder, mode).await?,
    }

    Ok(())
}

async fn browse(
    finder: &mut RecipeFinder<HttpRecipeApi>,
    mut mode: SearchMode,
) -> Result<(), Box<dyn Error>> {
    println!("{}", BROWSE_HELP);
    prompt(mode);

    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        debug!("browse input: {:?}", line);

        match line {
            "" => {}
            "q" | "quit" => break,
            "h" | "help" => println!("{}", BROWSE_HELP),
            "b" | "back" => {
                if finder.back() {
                    print!("{}", render_results(finder.controller().results()));
                } else {
                    println!("Nothing to go back to.");
                }
            }
            _ if line.starts_with("m ") => match line[2..].parse::<SearchMode>() {
                Ok(next) => mode = next,
                Err(e) => println!("{}", e),
            },
            _ => {
                if let Ok(number) = line.parse::<usize>() {
                    open_result(finder, number).await;
                } else {
                    let text = line.strip_prefix("s ").unwrap_or(line);
                    finder.search(mode, text).await;
                    print!("{}", render(finder.controller()));
                }
            }
        }

        prompt(mode);
    }

    Ok(())
}

async fn open_result(finder: &mut RecipeFinder<HttpRecipeApi>, number: usize) {
    let id = number
        .checked_sub(1)
        .and_then(|index| finder.controller().results().get(index))
        .map(|recipe| recipe.id);

    match id {
        Some(id) => {
            finder.open(id).await;
            print!("{}", render(finder.controller()));
        }
        None => println!("No result #{}", number),
    }
}

fn prompt(mode: SearchMode) {
    println!("\n[{}] {}", mode.label(), mode.hint());
}
