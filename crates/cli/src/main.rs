use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::Dataset;
use llm_client::LlmClient;
use pipeline::{compose_blocks, recommend};
use server::ChatSession;
use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// MovieMate - conversational movie recommender
#[derive(Parser)]
#[command(name = "moviemate")]
#[command(about = "Chat with a movie recommender over a CSV dataset", long_about = None)]
struct Cli {
    /// Path to the movie CSV file
    #[arg(short, long, default_value = "movies.csv")]
    data: PathBuf,

    /// How many movies to recommend per reply (1-10)
    #[arg(short = 'k', long, default_value_t = 5,
          value_parser = clap::value_parser!(u8).range(1..=10))]
    top_k: u8,

    /// Gemini API key; without one, replies use canned filler text
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Gemini model used for the blurb
    #[arg(long, default_value = "gemini-1.5-flash")]
    model: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat session (the default)
    Chat,

    /// One-shot recommendation without a chat session
    Recommend {
        /// Genre filter, repeatable (e.g. --genre comedy --genre action)
        #[arg(long)]
        genre: Vec<String>,

        /// Actor/director filter, repeatable
        #[arg(long)]
        star: Vec<String>,
    },

    /// List every distinct genre in the dataset
    Genres,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load the dataset once; failure here is fatal by design
    println!("Loading movie dataset from {}...", cli.data.display());
    let start = Instant::now();
    let dataset = Arc::new(
        Dataset::load_from_csv(&cli.data)
            .with_context(|| format!("Failed to load movie dataset from {}", cli.data.display()))?,
    );
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        dataset.len(),
        start.elapsed()
    );

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let llm = LlmClient::new(cli.api_key).with_model(cli.model);
            run_chat(dataset, llm, cli.top_k as usize).await
        }
        Commands::Recommend { genre, star } => {
            handle_recommend(&dataset, genre, star, cli.top_k as usize)
        }
        Commands::Genres => handle_genres(&dataset),
    }
}

/// Run the interactive chat loop until EOF or /quit
async fn run_chat(dataset: Arc<Dataset>, llm: LlmClient, top_k: usize) -> Result<()> {
    let mut session = ChatSession::new(dataset, llm, top_k);

    println!();
    print_assistant(server::GREETING);
    println!(
        "{}",
        "(type a message, /reset to start over, /quit to exit)".dimmed()
    );

    let stdin = std::io::stdin();
    loop {
        print!("{} ", "you>".green().bold());
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();

        match input {
            "" => continue,
            "/quit" | "/exit" => break,
            "/reset" => {
                session.reset();
                print_assistant(server::RESET_GREETING);
            }
            _ => {
                let reply = session.handle_turn(input).await;
                print_assistant(&reply);
            }
        }
    }

    println!("bye! 🎬");
    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(
    dataset: &Dataset,
    genres: Vec<String>,
    stars: Vec<String>,
    top_k: usize,
) -> Result<()> {
    let genres: BTreeSet<String> = genres.into_iter().map(|g| g.to_lowercase()).collect();
    let stars: BTreeSet<String> = stars.into_iter().map(|s| s.to_lowercase()).collect();

    let ranked = recommend(dataset, &genres, &stars, top_k);
    if ranked.is_empty() {
        println!("{}", server::NO_MATCH_REPLY);
        return Ok(());
    }

    println!("{}", "Recommendations:".bold().blue());
    println!("{}", compose_blocks(&ranked));
    Ok(())
}

/// Handle the 'genres' command
fn handle_genres(dataset: &Dataset) -> Result<()> {
    println!("{}", "Known genres:".bold().blue());
    for genre in dataset.genre_vocabulary() {
        println!("  {} {}", "•".cyan(), genre);
    }
    Ok(())
}

fn print_assistant(text: &str) {
    println!("{} {}", "MovieMate:".cyan().bold(), text);
    println!();
}
