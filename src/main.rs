use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use order_forms::export::{import_form, Exporter};
use order_forms::links::{dangling_links, resolve_form_name};
use order_forms::persistence::{clear_state, open_store, FileStorage};
use order_forms::settings::Settings;
use order_forms::store::FormStore;
use order_forms::validation::validate;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "order-forms", version, about = "Compose order-form menus and export them as CSV")]
struct Cli {
    /// Directory holding the saved state (overrides the settings file)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the sections, forms and questions
    Tree,
    /// Run the pre-export checks
    Validate,
    /// Validate and write the zip bundle
    Export {
        /// Output directory
        #[arg(long)]
        out: Option<PathBuf>,
        /// Do not nest the files under a company folder
        #[arg(long)]
        flat: bool,
    },
    /// Add a form read from a CSV file to a section
    Import {
        file: PathBuf,
        #[arg(long)]
        section: String,
        /// Form name (defaults to the file stem)
        #[arg(long)]
        name: Option<String>,
    },
    /// Append a new section
    AddSection { name: String },
    /// Forget the saved state and start again from the default sections
    Reset,
}

fn print_tree(store: &FormStore) {
    let state = store.state();
    for section in &state.sections {
        let marker = if state.current_section_id.as_deref() == Some(section.id.as_str()) {
            "*"
        } else {
            " "
        };
        let lock = if section.is_default { " (default)" } else { "" };
        println!("{marker} [{}] {}{lock}", section.id, section.name);
        for form in &section.forms {
            println!(
                "    {} ({}) -> {}",
                form.display_name(),
                form.kind.as_str(),
                resolve_form_name(state, form.global_link.as_deref())
            );
            println!("      0. {}", form.main_question.text_fr);
            for question in &form.questions {
                println!(
                    "      {}. {} [{}] -> {}",
                    question.input,
                    question.text_fr,
                    question.exported_price(),
                    resolve_form_name(state, question.linked_form.as_deref())
                );
            }
        }
    }
    for link in dangling_links(state) {
        println!("! {} links to missing form {}", link.form_id, link.target);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load();
    order_forms::logging::init(settings.log_filter.as_deref());

    let storage = match cli.data_dir.or_else(|| settings.storage_dir.clone()) {
        Some(dir) => FileStorage::new(dir),
        None => FileStorage::default_location().context("Failed to locate the data directory")?,
    };

    match cli.command {
        Command::Tree => print_tree(&open_store(storage)),
        Command::Validate => {
            let store = open_store(storage);
            if let Err(errors) = validate(store.state()) {
                for message in errors.messages() {
                    eprintln!("{message}");
                }
                bail!("{} validation error(s)", errors.violations().len());
            }
            println!("OK");
        }
        Command::Export { out, flat } => {
            let store = open_store(storage);
            let mut options = settings.export.clone();
            if flat {
                options.nest_in_folder = false;
            }
            let dir = out
                .or_else(|| settings.export_dir.clone())
                .unwrap_or_else(|| PathBuf::from("."));
            let path = Exporter::new(options)
                .export_to_dir(store.state(), &dir)
                .context("Export failed")?;
            println!("{}", path.display());
        }
        Command::Import {
            file,
            section,
            name,
        } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let name = name.unwrap_or_else(|| {
                file.file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or_default()
                    .to_string()
            });
            let form = import_form(&name, &content)
                .with_context(|| format!("Failed to import {}", file.display()))?;
            let mut store = open_store(storage);
            if store.state().section(&section).is_none() {
                bail!("No section with id {section}");
            }
            store.add_form(&section, form);
            print_tree(&store);
        }
        Command::AddSection { name } => {
            let mut store = open_store(storage);
            match store.new_section(&name) {
                Some(id) => println!("{id}"),
                None => bail!("Section name cannot be blank"),
            }
        }
        Command::Reset => {
            clear_state(&storage).context("Failed to clear the saved state")?;
            println!("State cleared");
        }
    }
    Ok(())
}
