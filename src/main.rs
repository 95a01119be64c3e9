use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::{Parser, ValueEnum};
use template_parser::{
    ast::nodes::{FileKind, SourceFileNode},
    body::RawTextBodyParser,
    display_diagnostic,
    errors::diagnostics::{Diagnostics, ErrorReporter},
    ids::IdGenerator,
    parse_file,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Source,
    Dependency,
    Indirect,
}

impl From<KindArg> for FileKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Source => FileKind::Source,
            KindArg::Dependency => FileKind::Dependency,
            KindArg::Indirect => FileKind::IndirectDependency,
        }
    }
}

/// Parses template files and reports their file-level structure.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    #[arg(required = true, value_name = "FILE")]
    inputs: Vec<PathBuf>,

    #[arg(long, value_enum, default_value = "source")]
    kind: KindArg,

    #[arg(short, long, help = "Only print diagnostics")]
    quiet: bool,

    #[arg(long, help = "Print the parsed namespace, aliases and templates")]
    dump: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let start = Instant::now();
    let mut id_gen = IdGenerator::new();
    let mut diagnostics = Diagnostics::new();
    let mut failed_files = 0;

    for input in &args.inputs {
        let file_name = input.to_string_lossy();

        let source = match read_to_string(input) {
            Ok(source) => source,
            Err(error) => {
                println!("Error: failed to read {}: {}", file_name, error);
                failed_files += 1;
                continue;
            }
        };

        let parse_start = Instant::now();
        let checkpoint = diagnostics.checkpoint();
        let outcome = parse_file(
            &source,
            &file_name,
            args.kind.into(),
            &RawTextBodyParser,
            &mut id_gen,
            &mut diagnostics,
        );

        if !args.quiet {
            println!("Parsed {} in {:?}", file_name, parse_start.elapsed());
        }

        for diagnostic in diagnostics.since(&checkpoint) {
            display_diagnostic(diagnostic, &source);
        }

        if outcome.is_failed() {
            failed_files += 1;
        } else if args.dump {
            if let Some(file) = &outcome.file {
                dump(file);
            }
        }
    }

    if !args.quiet {
        println!(
            "Parsed {} file(s), {} failed, in {:?}",
            args.inputs.len(),
            failed_files,
            start.elapsed()
        );
    }

    if failed_files > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn dump(file: &SourceFileNode) {
    println!("{} ({:?})", file.file_path, file.file_kind);

    if let Some(package) = &file.delegate_package {
        println!("  delpackage {}", package);
    }

    if let Some(namespace) = &file.namespace {
        println!("  namespace {}", namespace.name);
        for attribute in &namespace.attributes {
            println!("    {}=\"{}\"", attribute.name, attribute.value);
        }
    }

    for alias in &file.aliases {
        println!("  alias {} as {}", alias.target, alias.alias_name());
    }

    for template in &file.templates {
        let kind = if template.is_delegate() { "deltemplate" } else { "template" };
        let documented = if template.doc_comment.is_some() { ", documented" } else { "" };
        println!(
            "  {} {} (line {}{})",
            kind,
            template.display_name(),
            template.location.begin_line,
            documented
        );
    }
}
