//! Vimbind Code Generator
//!
//! Generates strongly-typed Rust data bindings from vSphere schema files.

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use vimbind_gen::cargo_gen::write_cargo_toml;
use vimbind_gen::errors::GeneratorError;
use vimbind_gen::output::generate_and_write_all;
use vimbind_model::SchemaModel;
use vimbind_xsd::load_schema;

/// Vimbind code generator - transforms schema documents into typed Rust bindings
#[derive(Parser, Debug)]
#[command(name = "vimbind-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Schema file to generate bindings for (repeatable)
    #[arg(short, long, required = true)]
    schema: Vec<PathBuf>,

    /// Output directory for generated code
    #[arg(short, long, default_value = "bindings/src")]
    output: String,

    /// Type whose extension chain marks records as faults
    #[arg(long, default_value = "MethodFault")]
    fault_root: String,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), GeneratorError> {
    if cli.verbose > 0 {
        eprintln!("Output directory: {}", cli.output);
        eprintln!("Fault root: {}", cli.fault_root);
        if cli.dry_run {
            eprintln!("Dry run mode - no files will be written");
        }
    }

    let mut schemas: Vec<SchemaModel> = Vec::new();
    for path in &cli.schema {
        let schema = load_schema(path)?;
        if cli.verbose > 0 {
            eprintln!(
                "Loaded {}: module '{}', {} types",
                path.display(),
                schema.module,
                schema.types.len()
            );
        }
        if cli.verbose > 1 {
            for def in &schema.types {
                eprintln!("  - {}", def.name());
            }
        }
        schemas.push(schema);
    }

    let schema_refs: Vec<&SchemaModel> = schemas.iter().collect();
    let output_dir = Path::new(&cli.output);
    generate_and_write_all(&schema_refs, output_dir, &cli.fault_root, cli.dry_run)?;

    // The output directory is the crate's src/; the manifest goes beside it.
    let crate_dir = output_dir.parent().unwrap_or(Path::new("bindings"));
    write_cargo_toml(crate_dir, cli.dry_run)?;

    if !cli.dry_run {
        eprintln!(
            "{} generated {} module(s) to {}",
            "success:".green().bold(),
            schema_refs.len(),
            cli.output
        );
    }

    Ok(())
}
