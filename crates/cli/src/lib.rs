mod choose;
mod schema;
mod translate;

use clap::{Parser, Subcommand, ValueEnum};
use ideinfo_api::models::TestSize;
use ideinfo_ingest::RecordFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ideinfo",
    version,
    about = "Translate build aspect IDE info into a typed target model",
    long_about = "ideinfo reads the per-target records emitted by the IDE-info build aspect, \
                  normalizes legacy encodings and writes typed target descriptors. It can also \
                  pick the test target that owns a given source file."
)]
pub struct Cli {
    /// Optional JSON config file
    #[arg(long, global = true, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Also log to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Translate aspect records into target descriptors
    #[command(
        long_about = "Decodes aspect records (JSON array, JSON lines or MessagePack) and prints \
                            the translated targets as JSON. Records without a recognised kind are \
                            skipped."
    )]
    Translate {
        /// Aspect output file
        #[arg(value_name = "RECORDS")]
        input: PathBuf,

        /// Record format; guessed from the extension by default
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Write the targets here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Translate on a single thread
        #[arg(long)]
        sequential: bool,
    },
    /// Choose the test target owning a source file
    Choose {
        /// Source file, relative to the workspace root
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        /// Translated targets (output of `translate`)
        #[arg(short, long, value_name = "TARGETS")]
        targets: PathBuf,

        /// Declared size of the test
        #[arg(long, value_parser = parse_test_size)]
        size: Option<TestSize>,

        /// Fully qualified test class name
        #[arg(long)]
        class_name: Option<String>,
    },
    /// Print the JSON schema of an aspect record
    Schema,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Json,
    Jsonl,
    Msgpack,
}

impl From<FormatArg> for RecordFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => RecordFormat::Json,
            FormatArg::Jsonl => RecordFormat::JsonLines,
            FormatArg::Msgpack => RecordFormat::MessagePack,
        }
    }
}

fn parse_test_size(value: &str) -> Result<TestSize, String> {
    TestSize::from_attribute(value)
        .ok_or_else(|| format!("expected small, medium, large or enormous, got '{}'", value))
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = ideinfo_runtime::init_logging("cli", cli.verbose);

    let mut config = ideinfo_runtime::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Translate {
            input,
            format,
            output,
            sequential,
        } => {
            if let Some(format) = format {
                config.format = Some(format.into());
            }
            if sequential {
                config.translate.parallel = false;
            }
            translate::run(&input, output.as_deref(), &config)
        }
        Commands::Choose {
            source,
            targets,
            size,
            class_name,
        } => choose::run(source, &targets, size, class_name),
        Commands::Schema => schema::run(),
    }
}
