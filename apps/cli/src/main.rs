//! dnalens - DNA sequence interpretation assistant
//!
//! ```bash
//! dnalens validate ">seq1\nATGC..."
//! dnalens analyze --example "Promoter Region" --report report.txt --svg network.svg
//! dnalens key set <API_KEY>
//! echo "active in liver" | dnalens chat --file enhancer.fasta
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;

use dnalens_cli::commands::analysis::{self, ExportPaths};
use dnalens_cli::commands::{chat, key, open_credentials, open_session, read_input, sequence, InputSource};
use dnalens_cli::config::AppConfig;
use dnalens_cli::dto::AnalysisDto;
use dnalens_formats::export::{default_history_filename, write_history_json};
use dnalens_session::ChatSession;

/// Predict regulatory function, target genes and experiments for a DNA sequence
#[derive(Parser, Debug)]
#[command(name = "dnalens", version, about)]
struct Cli {
    /// TOML configuration file (defaults to $DNALENS_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Clean and check a sequence without analysing it
    Validate {
        #[command(flatten)]
        input: InputArgs,
        /// Print JSON instead of text
        #[arg(long, conflicts_with = "fasta")]
        json: bool,
        /// Print only the cleaned sequence as FASTA
        #[arg(long)]
        fasta: bool,
    },
    /// Base composition of the cleaned sequence
    Stats {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long)]
        json: bool,
    },
    /// Analyse a sequence and optionally export the results
    Analyze {
        #[command(flatten)]
        input: InputArgs,
        /// Write a paginated text report
        #[arg(long)]
        report: Option<PathBuf>,
        /// Write the session history as JSON
        #[arg(long = "json")]
        json_out: Option<PathBuf>,
        /// Write the gene-interaction diagram as SVG
        #[arg(long)]
        svg: Option<PathBuf>,
        /// Print the analysis as JSON instead of a summary
        #[arg(long)]
        raw: bool,
    },
    /// List the built-in example sequences
    Examples,
    /// Manage the stored API key
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },
    /// Talk to the assistant; lines from stdin become notes on the analysis
    Chat {
        #[command(flatten)]
        input: OptionalInputArgs,
        /// Export the annotated history when stdin closes
        #[arg(long)]
        export: bool,
    },
}

#[derive(Subcommand, Debug)]
enum KeyAction {
    Set { key: String },
    Show,
    Clear,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// Raw sequence text; "-" reads stdin
    sequence: Option<String>,
    /// Read the sequence from a .fasta/.fa/.txt/.seq file
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Use a built-in example by name
    #[arg(short, long)]
    example: Option<String>,
}

#[derive(Args, Debug)]
#[group(required = false, multiple = false)]
struct OptionalInputArgs {
    #[arg(long)]
    sequence: Option<String>,
    #[arg(short, long)]
    file: Option<PathBuf>,
    #[arg(short, long)]
    example: Option<String>,
}

fn source_of(
    sequence: Option<String>,
    file: Option<PathBuf>,
    example: Option<String>,
) -> Option<InputSource> {
    match (sequence, file, example) {
        (Some(s), _, _) if s == "-" => Some(InputSource::Stdin),
        (Some(s), _, _) => Some(InputSource::Inline(s)),
        (None, Some(path), _) => Some(InputSource::File(path)),
        (None, None, Some(name)) => Some(InputSource::Example(name)),
        (None, None, None) => None,
    }
}

impl InputArgs {
    fn read(self) -> Result<String> {
        match source_of(self.sequence, self.file, self.example) {
            Some(source) => read_input(&source),
            None => anyhow::bail!("No sequence given"),
        }
    }
}

fn print_lines(lines: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for line in lines {
        writeln!(handle, "{}", line)?;
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Validate { input, json, fasta } => {
            let dto = sequence::validate(&input.read()?);
            if json {
                print_json(&dto)?;
            } else if fasta {
                print!("{}", sequence::cleaned_fasta(&dto));
            } else {
                print_lines(&sequence::describe_validation(&dto))?;
            }
        }

        Command::Stats { input, json } => {
            let dto = sequence::stats(&input.read()?);
            if json {
                print_json(&dto)?;
            } else {
                print_lines(&[
                    format!("Length: {} bp", dto.length),
                    format!("GC:     {:.1}%", dto.gc_content),
                    format!("AT:     {:.1}%", dto.at_content),
                    format!("A {}  T {}  G {}  C {}", dto.a, dto.t, dto.g, dto.c),
                ])?;
            }
        }

        Command::Analyze {
            input,
            report,
            json_out,
            svg,
            raw,
        } => {
            let mut session = open_session(&config)?;
            let outcome = analysis::analyze(&mut session, &input.read()?)?;
            let dto = AnalysisDto::from(&outcome);
            if raw {
                print_json(&dto)?;
            } else {
                print_lines(&analysis::summary_lines(&dto))?;
            }

            let paths = ExportPaths {
                report,
                json: json_out,
                svg,
            };
            for path in analysis::write_exports(outcome.result(), session.history().as_slice(), &paths)? {
                eprintln!("Wrote {}", path.display());
            }
        }

        Command::Examples => {
            for example in sequence::examples() {
                println!(
                    "{:<18} {:<10} {:>4} bp  {}",
                    example.name, example.element_type, example.length, example.description
                );
            }
        }

        Command::Key { action } => {
            let mut store = open_credentials(&config)?;
            let message = match action {
                KeyAction::Set { key: value } => key::set_key(&mut store, &value)?,
                KeyAction::Show => key::show_key(&store)?,
                KeyAction::Clear => key::clear_key(&mut store)?,
            };
            println!("{}", message);
        }

        Command::Chat { input, export } => {
            let mut session = open_session(&config)?;
            if let Some(source) = source_of(input.sequence, input.file, input.example) {
                let outcome = analysis::analyze(&mut session, &read_input(&source)?)?;
                print_lines(&analysis::summary_lines(&AnalysisDto::from(&outcome)))?;
            }

            let mut chat_session = ChatSession::new();
            let stdin = io::stdin();
            let attached = chat::run_chat(&mut session, &mut chat_session, stdin.lock(), io::stdout())?;
            log::info!("Attached {} notes", attached);

            if export && !session.history().is_empty() {
                let path = PathBuf::from(default_history_filename(chrono::Local::now().date_naive()));
                write_history_json(&path, session.history().as_slice())?;
                eprintln!("Wrote {}", path.display());
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    run(cli)
}
