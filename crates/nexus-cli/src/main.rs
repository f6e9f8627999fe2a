//! Nexus CLI - command-line driver for the orchestration pipeline

mod offline;

use std::sync::Arc;

use clap::Parser;

use nexus_core::{Orchestrator, OrchestratorConfig};
use nexus_gen::CompletionService;
use nexus_seed::{seed_hash, shannon_entropy};
use nexus_swarm::SwarmConfig;

use crate::offline::{OfflineCompletionProvider, OfflineGenerator, TraceNotifier};

#[derive(Parser)]
#[command(name = "nexus")]
#[command(about = "Nexus - multi-agent code generation orchestrator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run an orchestration with the offline generator
    Run {
        /// The code-generation request
        prompt: String,
        /// Number of Cognito agents
        #[arg(short, long, default_value_t = 4)]
        agents: usize,
        /// Number of reasoning rounds
        #[arg(short, long, default_value_t = 2)]
        rounds: usize,
        /// Let fragments diverge per agent instead of converging
        #[arg(long)]
        variety: bool,
    },
    /// Derive a seed hash from ordered string parts
    Hash {
        /// Parts hashed in the given order
        parts: Vec<String>,
    },
    /// Compute the Shannon entropy of a string in bits per character
    Entropy {
        /// Text to score
        text: String,
    },
    /// Request inline completion suggestions for a cursor context
    Complete {
        /// Code before the cursor
        before: String,
        /// Code after the cursor
        #[arg(default_value = "")]
        after: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            prompt,
            agents,
            rounds,
            variety,
        }) => {
            let config = OrchestratorConfig::new().with_swarm(
                SwarmConfig::new()
                    .with_agent_count(agents)
                    .with_round_count(rounds),
            );
            let mut orchestrator =
                Orchestrator::new(config, Arc::new(OfflineGenerator::new(variety)))
                    .with_notifier(Arc::new(TraceNotifier));

            let state = orchestrator.run(&prompt).await?;

            println!("\nCandidates ({}):", state.candidates.len());
            for (rank, candidate) in state.candidates.iter().enumerate() {
                let first_line = candidate.text.lines().next().unwrap_or("");
                println!(
                    "  #{:<2} score {:>7.3}  votes {:>2}  entropy {:>5.3}  {}",
                    rank + 1,
                    candidate.score,
                    candidate.vote_count,
                    candidate.avg_entropy,
                    first_line
                );
            }

            println!("\nConsensus score: {:.3}", state.consensus_score);
            println!("Final code:\n{}", state.final_code.unwrap_or_default());
        }
        Some(Commands::Hash { parts }) => {
            let parts: Vec<&str> = parts.iter().map(String::as_str).collect();
            println!("{}", seed_hash(&parts));
        }
        Some(Commands::Entropy { text }) => {
            println!("{:.4}", shannon_entropy(&text));
        }
        Some(Commands::Complete { before, after }) => {
            let service = CompletionService::new(OfflineCompletionProvider);
            let suggestions = service.suggest(&before, &after).await;
            if suggestions.is_empty() {
                println!("(no suggestions)");
            } else {
                for suggestion in suggestions {
                    println!("{suggestion}");
                }
            }
        }
        None => {
            println!("Nexus v0.1.0 - Use --help for commands");
        }
    }

    Ok(())
}
