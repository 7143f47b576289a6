use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use playbook::models::{Playbook, Principle, TacticGroup};
use playbook::storage::Storage;
use playbook::store::PlaybookStore;
use playbook::{catalog, export};

#[derive(Parser)]
#[command(name = "pbk")]
#[command(about = "Personal influence-tactics playbook: browse levers, build a plan, practice daily")]
struct Cli {
    /// Storage database path (defaults to the platform data directory)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the tactic catalog, optionally filtered by keyword
    Browse {
        /// Substring matched against title, summary, and group
        query: Option<String>,
    },
    /// Show the current playbook
    Show,
    /// Adopt a tactic into the playbook by catalog id
    Add {
        tactic_id: String,
    },
    /// Edit an adopted item by its position in `show`
    Set {
        index: usize,

        /// Priority 1-5 (values outside the range are clamped)
        #[arg(long)]
        priority: Option<i64>,

        /// The plan: a concrete move, metric, or ritual
        #[arg(long)]
        note: Option<String>,

        /// Mark done or not done
        #[arg(long)]
        done: Option<bool>,

        /// Toggle a persuasion principle pairing (repeatable)
        #[arg(long = "principle")]
        principles: Vec<String>,
    },
    /// Drop an adopted item by position
    Remove {
        index: usize,
    },
    /// Rename the playbook
    Rename {
        name: String,
    },
    /// Manage the daily practice checklist
    Checklist {
        #[command(subcommand)]
        action: Option<ChecklistAction>,
    },
    /// Show the seven-habits guide
    Guides,
    /// List the six persuasion principles
    Principles,
    /// Export the playbook as pretty-printed JSON
    Export {
        /// Directory to write the export into
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

#[derive(Subcommand)]
enum ChecklistAction {
    /// Append a checklist entry (blank text is ignored)
    Add { text: String },
    /// Remove a checklist entry by position
    Remove { index: usize },
}

/// Initialize tracing to stderr so stdout stays clean for command output.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "playbook=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open_storage(db: Option<PathBuf>) -> anyhow::Result<Storage> {
    match db {
        Some(path) => Storage::open(path),
        None => Storage::open_default(),
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let storage = open_storage(cli.db)?;
    let mut store = PlaybookStore::open(storage);

    match cli.command {
        Some(Commands::Browse { query }) => {
            let query = query.unwrap_or_default();
            print_catalog(&query, store.playbook());
        }
        // Default: show the playbook
        Some(Commands::Show) | None => {
            print_playbook(store.playbook());
        }
        Some(Commands::Add { tactic_id }) => {
            if store.add_item(&tactic_id)? {
                println!("Added '{}' to {}", tactic_id, store.playbook().name);
            } else {
                println!("'{}' is already in the playbook", tactic_id);
            }
        }
        Some(Commands::Set {
            index,
            priority,
            note,
            done,
            principles,
        }) => {
            let Some(current) = store.playbook().items.get(index) else {
                anyhow::bail!(
                    "item index {} out of range (playbook has {} items)",
                    index,
                    store.playbook().items.len()
                );
            };
            let mut next = current.clone();

            if let Some(p) = priority {
                // Input layer owns the 1..=5 invariant; the store trusts it.
                next.priority = p.clamp(1, 5) as u8;
            }
            if let Some(n) = note {
                next.note = n;
            }
            if let Some(d) = done {
                next.done = d;
            }
            for key in &principles {
                let Some(principle) = Principle::from_str(key) else {
                    anyhow::bail!(
                        "unknown principle '{}' (expected one of: {})",
                        key,
                        Principle::ALL.map(|p| p.as_str()).join(", ")
                    );
                };
                if !next.principle_keys.remove(&principle) {
                    next.principle_keys.insert(principle);
                }
            }

            store.update_item(index, next)?;
            println!("Updated item {}", index);
        }
        Some(Commands::Remove { index }) => {
            if store.remove_item(index) {
                println!("Removed item {}", index);
            } else {
                println!("No item at index {}", index);
            }
        }
        Some(Commands::Rename { name }) => {
            store.rename(&name);
            println!("Renamed playbook to '{}'", name);
        }
        Some(Commands::Checklist { action }) => match action {
            Some(ChecklistAction::Add { text }) => {
                if store.add_checklist_entry(&text) {
                    println!("Added checklist entry");
                } else {
                    println!("Ignored blank checklist entry");
                }
            }
            Some(ChecklistAction::Remove { index }) => {
                if store.remove_checklist_entry(index) {
                    println!("Removed checklist entry {}", index);
                } else {
                    println!("No checklist entry at index {}", index);
                }
            }
            None => print_checklist(store.playbook()),
        },
        Some(Commands::Guides) => {
            println!("Seven Habits of the Influential\n");
            for habit in catalog::HABITS {
                println!("  {}", habit.title);
                println!("      {}", habit.note);
            }
        }
        Some(Commands::Principles) => {
            for principle in Principle::ALL {
                println!("  {:<12} {}", principle.as_str(), principle.label());
            }
        }
        Some(Commands::Export { out }) => {
            let path = export::write_to_dir(store.playbook(), &out)?;
            println!("Exported to {}", path.display());
        }
    }

    Ok(())
}

// ============================================================
// Rendering
// ============================================================

/// Short tag for a tactic's catalog section. Exhaustive on purpose: adding a
/// group must force a decision about how it renders.
fn group_tag(group: TacticGroup) -> &'static str {
    match group {
        TacticGroup::Persuasion => "[Persuasion]",
        TacticGroup::Negotiation => "[Negotiation]",
        TacticGroup::Structure => "[Structure]",
        TacticGroup::MetaTools => "[Meta-Tools]",
        TacticGroup::CaseLbj => "[Case: LBJ]",
        TacticGroup::ModernOrg => "[Modern Org]",
    }
}

fn print_catalog(query: &str, book: &Playbook) {
    let hits = catalog::search(query);
    if hits.is_empty() {
        println!("No tactics match '{}'", query);
        return;
    }

    for tactic in hits {
        let adopted = book.items.iter().any(|it| it.tactic_id == tactic.id);
        let marker = if adopted { '★' } else { ' ' };
        println!("{} {:<22} {} {}", marker, tactic.id, group_tag(tactic.group), tactic.title);
        println!("      {}", tactic.summary);
        for prompt in tactic.prompts {
            println!("      · {}", prompt);
        }
    }
}

fn print_playbook(book: &Playbook) {
    println!(
        "{} ({}/{} done)",
        book.name,
        book.done_count(),
        book.items.len()
    );

    if book.items.is_empty() {
        println!("\n  No items yet. Run `pbk browse` and `pbk add <id>` to get started.");
    }
    for (i, item) in book.items.iter().enumerate() {
        let mark = if item.done { '●' } else { '○' };
        // The store validates ids on add; the raw id only shows up if the
        // storage file was edited by hand.
        let title = catalog::find_tactic(&item.tactic_id)
            .map(|t| t.title)
            .unwrap_or(item.tactic_id.as_str());
        println!("\n  {} {} {} (priority {})", i, mark, title, item.priority);
        if !item.note.is_empty() {
            println!("      plan: {}", item.note);
        }
        if !item.principle_keys.is_empty() {
            let keys: Vec<_> = item.principle_keys.iter().map(|p| p.label()).collect();
            println!("      principles: {}", keys.join(", "));
        }
    }

    if !book.checklist.is_empty() {
        println!();
        print_checklist(book);
    }
}

fn print_checklist(book: &Playbook) {
    println!("Daily practice:");
    if book.checklist.is_empty() {
        println!("  (empty)");
    }
    for (i, entry) in book.checklist.iter().enumerate() {
        println!("  {} {}", i, entry);
    }
}
