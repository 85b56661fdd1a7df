//! Dossier CLI
//!
//! Thin wrapper around dossier-core for command-line usage. The guestbook is
//! kept in a file-backed slot under the data directory, using the same JSON
//! layout the site keeps in browser storage.
//!
//! ## Usage
//!
//! ```bash
//! # Show archive information
//! dossier info
//!
//! # Post a message (blank sender becomes 匿名访客)
//! dossier guestbook post "测试留言" --sender 高城
//!
//! # List stored messages, optionally as JSON
//! dossier guestbook list --json
//!
//! # Print the message count banner
//! dossier guestbook count
//!
//! # Print message markup
//! dossier guestbook render
//!
//! # List gallery images, optionally filtered
//! dossier gallery list --category costume
//!
//! # Show one gallery image
//! dossier gallery show 0
//!
//! # Show an outfit
//! dossier costume show gq uniform
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dossier_core::guestbook::{self, PRESET_ENTRIES};
use dossier_core::{costume, Character, FileStore, Filter, GalleryState, Guestbook};

/// Dossier - archive guestbook and gallery
#[derive(Parser)]
#[command(name = "dossier")]
#[command(version = "0.1.0")]
#[command(about = "Dossier - archive guestbook and gallery")]
#[command(
    long_about = "Inspect and post to the archive guestbook, and browse the gallery and costume catalog, from the command line."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory (default: ~/.dossier/data)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show archive information
    Info,

    /// Guestbook management
    Guestbook {
        #[command(subcommand)]
        action: GuestbookAction,
    },

    /// Gallery browsing
    Gallery {
        #[command(subcommand)]
        action: GalleryAction,
    },

    /// Costume catalog
    Costume {
        #[command(subcommand)]
        action: CostumeAction,
    },
}

#[derive(Subcommand)]
enum GuestbookAction {
    /// List stored messages, oldest first
    List {
        /// Include the messages built into the page
        #[arg(long)]
        all: bool,
        /// Print the stored JSON array instead of text
        #[arg(long)]
        json: bool,
    },
    /// Post a message
    Post {
        /// Message content (1-500 characters after trimming)
        content: String,
        /// Sender name (blank for anonymous)
        #[arg(short, long, default_value = "")]
        sender: String,
    },
    /// Print the message count banner
    Count,
    /// Print message markup as the site renders it
    Render,
}

#[derive(Subcommand)]
enum GalleryAction {
    /// List gallery images
    List {
        /// Filter: all, scene, character, costume or other
        #[arg(short, long, default_value = "all")]
        category: String,
    },
    /// Show one image by its index position
    Show {
        /// Position in the gallery index
        index: usize,
    },
}

#[derive(Subcommand)]
enum CostumeAction {
    /// Show an outfit
    Show {
        /// Character key: gq or gc
        character: String,
        /// Outfit key (e.g. uniform)
        outfit: String,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Get the default data directory (~/.dossier/data)
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".dossier")
        .join("data")
}

/// Built gallery, ready for lookups
fn built_gallery() -> GalleryState {
    let mut gallery = GalleryState::new();
    gallery.ensure_built();
    gallery
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let store = FileStore::open(&data_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), "Opened data directory");

    match cli.command {
        Commands::Info => {
            let book = Guestbook::new(&store);
            let gallery = built_gallery();

            println!("Dossier v0.1.0");
            println!();
            println!("Guestbook:");
            println!("  Slot: {}", book.store().key());
            println!("  Stored messages: {}", book.entries().len());
            println!("  {}", guestbook::count_banner(book.total_count()));
            println!();
            println!("Gallery:");
            println!("  Images: {}", gallery.len());
            println!();
            println!("Data directory: {}", data_dir.display());
        }

        Commands::Guestbook { action } => match action {
            GuestbookAction::List { all, json } => {
                let book = Guestbook::new(&store);
                let mut entries = Vec::new();
                if all {
                    entries.extend(PRESET_ENTRIES.iter().map(|p| p.to_entry()));
                }
                entries.extend(book.entries().iter().cloned());

                if json {
                    println!("{}", serde_json::to_string_pretty(&entries)?);
                } else if entries.is_empty() {
                    println!("No messages yet.");
                } else {
                    for entry in &entries {
                        println!("[{}] {}: {}", entry.time, entry.sender, entry.content);
                    }
                }
            }
            GuestbookAction::Post { content, sender } => {
                let mut book = Guestbook::new(&store);
                let entry = book
                    .submit(&sender, &content)
                    .map_err(|e| anyhow::anyhow!("{}", e.notice()))?;

                // The core keeps the entry for the session even if the write
                // failed; a CLI run has no session, so check the slot.
                if !book.store().try_load_entries()?.contains(&entry) {
                    anyhow::bail!("Message could not be saved to {}", data_dir.display());
                }

                println!("{}", guestbook::SUBMIT_SUCCESS_NOTICE);
                println!("  ID: {}", entry.id);
                println!("  Sender: {}", entry.sender);
                println!("  Time: {}", entry.time);
            }
            GuestbookAction::Count => {
                let book = Guestbook::new(&store);
                println!("{}", guestbook::count_banner(book.total_count()));
            }
            GuestbookAction::Render => {
                let book = Guestbook::new(&store);
                for markup in book.render_presets().into_iter().chain(book.render_all()) {
                    println!("{}", markup);
                }
            }
        },

        Commands::Gallery { action } => match action {
            GalleryAction::List { category } => {
                let filter: Filter = category.parse()?;
                let gallery = built_gallery();
                let selected = gallery.select(filter);

                for index in &selected {
                    let image = &gallery.index()[*index];
                    println!(
                        "  {:>2}  [{}] {}  {}",
                        index,
                        image.category.label(),
                        image.src,
                        image.alt
                    );
                }
                println!();
                println!("{} images ({})", selected.len(), filter.label());
            }
            GalleryAction::Show { index } => {
                let mut gallery = built_gallery();
                let total = gallery.len();
                let Some(image) = gallery.open_at(index) else {
                    anyhow::bail!("No image at index {} (gallery has {} images)", index, total);
                };

                println!("Image {}/{}", index + 1, total);
                println!("  Source: {}", image.src);
                println!("  Title: {}", image.alt);
                println!("  Category: {} ({})", image.category.label(), image.category);
                if let Some(desc) = &image.desc {
                    println!("  Description: {}", desc);
                }
            }
        },

        Commands::Costume { action } => match action {
            CostumeAction::Show { character, outfit } => {
                let character: Character = character.parse()?;
                let Some(entry) = costume::lookup(character, &outfit) else {
                    anyhow::bail!(
                        "Unknown outfit '{}' for {}. Available: {}",
                        outfit,
                        character.name(),
                        character.outfits().join(", ")
                    );
                };

                println!("{} · {}", character.name(), entry.title);
                println!();
                println!("{}", entry.description);
                println!();
                println!("Images:");
                for image in entry.images {
                    println!("  {}", image);
                }
            }
        },
    }

    Ok(())
}
