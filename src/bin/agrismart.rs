// Interactive AgriSmart assistant
//
// Usage: cargo run --bin agrismart
// Type a question, or /help for commands.

use std::path::PathBuf;

use agrismart::calculators::{run_report, FarmTool, FormFields};
use agrismart::knowledge::{catalog, CatalogCategory, CatalogStats, KnowledgeBase};
use agrismart::router::{random_thinking_message, suggest, INITIAL_THINKING_MESSAGE};
use agrismart::{ChatSession, Config, MarkdownFormatter};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
Commands:
  <question>                 ask the assistant
  /image <path> [question]   attach an image to a question
  /crop <name>|none          select the crop for crop-specific info
  /near <draft>              append your location to a draft question
  /suggest <text>            show matching question suggestions
  /tool <name> k=v ...       run a farm tool (fertilizer, irrigation, calendar, profit, gdd, seedrate)
  /kb [category]             browse the knowledge base (crops, soil, pests, irrigation, fertilizers, equipment)
  /history                   list saved exchanges
  /load <n>                  reopen saved exchange n
  /export [dir]              export this chat as JSON
  /new                       start a new chat
  /quit                      exit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agrismart=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    tracing::info!("Configuration:");
    tracing::info!("  AGRISMART_LOCATION: {}", config.location);
    tracing::info!("  AGRISMART_DATA_DIR: {}", config.data_dir.display());

    let mut session = ChatSession::with_file_storage(config.clone());

    println!("Welcome to AgriSmart AI Assistant! ({})", session.location());
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.strip_prefix('/') {
            Some(cmd) => cmd.split_once(' ').unwrap_or((cmd, "")),
            None => {
                ask(&mut session, line, None).await;
                continue;
            }
        };
        let rest = rest.trim();

        match command {
            "quit" | "exit" => break,
            "help" => println!("{}", HELP),
            "new" => {
                session.new_chat();
                println!("Started a new chat.");
            }
            "image" => {
                let (image, question) = rest.split_once(' ').unwrap_or((rest, ""));
                if image.is_empty() {
                    println!("Usage: /image <path> [question]");
                } else {
                    ask(&mut session, question, Some(image.to_string())).await;
                }
            }
            "crop" => {
                let crop = (!rest.is_empty() && rest != "none").then(|| rest.to_lowercase());
                session.set_crop(crop);
                println!("Selected crop: {}", session.selected_crop().unwrap_or("none"));
            }
            "near" => println!("{}", session.append_location(rest)),
            "suggest" => {
                for suggestion in suggest(rest) {
                    println!("  {}", suggestion);
                }
            }
            "tool" => {
                let (name, pairs) = rest.split_once(' ').unwrap_or((rest, ""));
                let output = name
                    .parse::<FarmTool>()
                    .and_then(|tool| run_report(tool, &FormFields::parse_pairs(pairs)));
                match output {
                    Ok(report) => println!("{}", MarkdownFormatter::format_report(&report)),
                    Err(err) => println!("{}", MarkdownFormatter::format_error(&err)),
                }
            }
            "kb" => {
                let kb = KnowledgeBase::global();
                if rest.is_empty() {
                    let stats = CatalogStats::from_knowledge_base(kb);
                    println!(
                        "{} crop varieties, {} pests & diseases, {} soil types",
                        stats.crop_varieties, stats.pests_and_diseases, stats.soil_types
                    );
                } else {
                    match rest.parse::<CatalogCategory>() {
                        Ok(category) => println!(
                            "{}",
                            MarkdownFormatter::format_catalog(&catalog::build_page(kb, category))
                        ),
                        Err(err) => println!("{}", MarkdownFormatter::format_error(&err)),
                    }
                }
            }
            "history" => match session.history() {
                Ok(entries) if entries.is_empty() => println!("No saved chats yet."),
                Ok(entries) => {
                    for (i, entry) in entries.iter().enumerate() {
                        println!("{:>2}. {}  ({})", i + 1, entry.question, entry.timestamp);
                    }
                }
                Err(e) => tracing::warn!("Failed to load chat history: {:#}", e),
            },
            "load" => {
                let entries = session.history().unwrap_or_else(|e| {
                    tracing::warn!("Failed to load chat history: {:#}", e);
                    Vec::new()
                });
                match rest.parse::<usize>().ok().and_then(|n| entries.get(n.wrapping_sub(1))) {
                    Some(entry) => {
                        session.load_from_history(entry);
                        println!("Q: {}\n", entry.full_question);
                        println!("{}", entry.full_response);
                    }
                    None => println!("Usage: /load <n> (see /history)"),
                }
            }
            "export" => {
                let dir = if rest.is_empty() {
                    config.data_dir.clone()
                } else {
                    PathBuf::from(rest)
                };
                match session.export_to(&dir) {
                    Ok(path) => println!("Chat exported to {}", path.display()),
                    Err(e) => tracing::warn!("Export failed: {:#}", e),
                }
            }
            other => println!("Unknown command /{} (try /help)", other),
        }
    }

    tracing::info!("Goodbye");
    Ok(())
}

async fn ask(session: &mut ChatSession, question: &str, image: Option<String>) {
    println!("{}", INITIAL_THINKING_MESSAGE);
    println!("{}", random_thinking_message());
    match session.send_message(question, image).await {
        Ok(response) => println!("{}", MarkdownFormatter::format_response(&response)),
        Err(e) => println!("{}", e),
    }
}
