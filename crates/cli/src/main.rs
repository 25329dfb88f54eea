//! Quillbox note browser CLI.

mod browser;
mod client;

use browser::NoteBrowser;
use clap::{Parser, Subcommand};
use client::{ApiClient, NoteDraft};
use quill_types::Note;

#[derive(Parser)]
#[command(name = "quill")]
#[command(about = "Quillbox note browser")]
struct Cli {
    /// Base URL of the notes API
    #[arg(long, default_value = "http://localhost:3000", env = "QUILLBOX_URL")]
    server: String,
    /// Identity to act as
    #[arg(long, env = "QUILLBOX_USER")]
    user: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List notes, optionally filtered locally
    List {
        /// Case-insensitive text to look for in title or content
        #[arg(long)]
        search: Option<String>,
        /// Only show notes carrying this tag
        #[arg(long)]
        tag: Option<String>,
    },
    /// Show a single note in full
    Show {
        /// Note id
        id: String,
    },
    /// Create a note
    Create {
        /// Title text
        #[arg(long)]
        title: Option<String>,
        /// Rich-text content
        #[arg(long)]
        content: Option<String>,
        /// Tags, repeatable
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Replace the mutable fields of a note
    Edit {
        /// Note id
        id: String,
        /// New title text
        #[arg(long)]
        title: Option<String>,
        /// New rich-text content
        #[arg(long)]
        content: Option<String>,
        /// New tags, repeatable
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Delete a note
    Delete {
        /// Note id
        id: String,
    },
    /// Show the tag index derived from the current notes
    Tags,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = ApiClient::new(cli.server, cli.user);

    match cli.command {
        Commands::List { search, tag } => {
            let mut browser = NoteBrowser::new();
            browser.set_notes(fetch_notes(&client).await);
            if let Some(search) = search {
                browser.set_search(search);
            }
            browser.select_tag(tag);

            let matched = browser.filtered();
            if matched.is_empty() {
                println!("No notes found.");
            } else {
                for note in matched {
                    print_note_line(note);
                }
            }
        }
        Commands::Show { id } => {
            let note = client.get(&id).await?;
            print_note_full(&note);
        }
        Commands::Create {
            title,
            content,
            tags,
        } => {
            let note = client
                .create(&NoteDraft {
                    title,
                    content,
                    tags,
                })
                .await?;
            println!("Created note {}", note.id);
            report_refreshed(&client).await;
        }
        Commands::Edit {
            id,
            title,
            content,
            tags,
        } => {
            let note = client
                .update(
                    &id,
                    &NoteDraft {
                        title,
                        content,
                        tags,
                    },
                )
                .await?;
            println!("Updated note {}", note.id);
            report_refreshed(&client).await;
        }
        Commands::Delete { id } => {
            client.delete(&id).await?;
            println!("Deleted note {id}");
            report_refreshed(&client).await;
        }
        Commands::Tags => {
            let mut browser = NoteBrowser::new();
            browser.set_notes(fetch_notes(&client).await);
            let tags = browser.tags();
            if tags.is_empty() {
                println!("No tags.");
            } else {
                for tag in tags {
                    println!("{tag}");
                }
            }
        }
    }

    Ok(())
}

/// Re-fetches the full list after a successful mutation; local state is
/// never patched incrementally.
async fn report_refreshed(client: &ApiClient) {
    let notes = fetch_notes(client).await;
    println!("{} notes total.", notes.len());
}

/// Fetches the full note list, falling back to an empty set on failure so
/// the view still renders.
async fn fetch_notes(client: &ApiClient) -> Vec<Note> {
    match client.list().await {
        Ok(notes) => notes,
        Err(err) => {
            eprintln!("Failed to fetch notes: {err}");
            Vec::new()
        }
    }
}

fn print_note_line(note: &Note) {
    println!(
        "ID: {}, Title: {}, Tags: [{}], Updated: {}",
        note.id,
        note.title.as_deref().unwrap_or("(untitled)"),
        note.tags.join(", "),
        note.updated_at.format("%Y-%m-%d %H:%M")
    );
}

fn print_note_full(note: &Note) {
    println!("ID:      {}", note.id);
    println!("Title:   {}", note.title.as_deref().unwrap_or("(untitled)"));
    println!("Tags:    [{}]", note.tags.join(", "));
    println!("Created: {}", note.created_at.to_rfc3339());
    println!("Updated: {}", note.updated_at.to_rfc3339());
    println!();
    println!("{}", note.content.as_deref().unwrap_or(""));
}
