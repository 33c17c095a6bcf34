use std::error::Error;
use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use doc_builder::demos::{custom, run_all_demos, technical_report};
use doc_builder::{pdf, Document, Flavor};

/// Builds sample documents from the command line.
///
/// PDF output needs the Roboto font family under `assets/fonts` next to the
/// binary or in the directory named by `DOC_BUILDER_FONTS_DIR`; otherwise the
/// system DejaVu Sans family is used when present.
#[derive(Parser)]
#[command(author, version, about = "Builder pattern document demos")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the technical report and the custom document built by one builder.
    #[command(name = "demo", aliases = ["run-all", "all"])]
    Demo {
        /// Decoration flavor: html, markdown or plain.
        #[arg(long, short, default_value = "html")]
        flavor: Flavor,
    },

    /// Build the technical report through the director.
    #[command(name = "report")]
    Report(OutputArgs),

    /// Build the hand-assembled custom document.
    #[command(name = "custom")]
    Custom(OutputArgs),
}

#[derive(Args)]
struct OutputArgs {
    /// Decoration flavor: html, markdown or plain.
    #[arg(long, short, default_value = "html")]
    flavor: Flavor,

    /// Write the document as PDF to this path instead of printing it.
    #[arg(long, value_name = "PATH")]
    pdf: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), Box<dyn Error>> = match cli.command {
        Commands::Demo { flavor } => {
            run_all_demos(flavor, &mut io::stdout().lock()).map_err(Into::into)
        }
        Commands::Report(args) => {
            let document = technical_report::build(args.flavor.builder().as_mut());
            emit(&document, "Технічний звіт", &args)
        }
        Commands::Custom(args) => {
            let document = custom::build(args.flavor.builder().as_mut());
            emit(&document, "Мій власний документ", &args)
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

fn emit(document: &Document, title: &str, args: &OutputArgs) -> Result<(), Box<dyn Error>> {
    match &args.pdf {
        Some(path) => {
            let written = pdf::write_pdf(document, title, path)?;
            println!("Generated {} ({} bytes)", path.display(), written);
        }
        None => println!("{document}"),
    }
    Ok(())
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
