//! docshift CLI - document conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use docshift::{
    file_extension, ConvertOptions, Converter, ExtractOptions, SourceDocument, TargetFormat,
    FORMAT_TABLE,
};

#[derive(Parser)]
#[command(name = "docshift")]
#[command(version)]
#[command(about = "Convert documents to PDF, DOCX, HTML, RTF, CSV, JSON, Markdown or text", long_about = None)]
struct Cli {
    /// Input file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Target format (pdf, docx, txt, html, rtf, csv, json, md)
    #[arg(value_name = "FORMAT")]
    format: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a document to another format
    Convert {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Target format (pdf, docx, txt, html, rtf, csv, json, md)
        #[arg(short, long, value_name = "FORMAT")]
        to: String,

        /// Output file (defaults to the suggested filename next to the input)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the plain text recovered from a document
    Extract {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// List supported target formats
    Formats,

    /// Show version information
    Version,
}

#[derive(clap::Args)]
struct SourceArgs {
    /// Declared media type of the input (derived from the extension if omitted)
    #[arg(long, value_name = "MIME", env = "DOCSHIFT_MEDIA_TYPE")]
    media_type: Option<String>,

    /// Treat unrecognised files starting with %PDF- as PDF
    #[arg(long)]
    sniff: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            to,
            output,
            source,
        }) => cmd_convert(&input, &to, output.as_deref(), &source),
        Some(Commands::Extract {
            input,
            output,
            source,
        }) => cmd_extract(&input, output.as_deref(), &source),
        Some(Commands::Formats) => {
            cmd_formats();
            Ok(())
        }
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => match (cli.input, cli.format) {
            (Some(input), Some(format)) => {
                let source = SourceArgs {
                    media_type: None,
                    sniff: false,
                };
                cmd_convert(&input, &format, None, &source)
            }
            _ => {
                println!("{}", "Usage: docshift <FILE> <FORMAT>".yellow());
                println!("       docshift --help for more information");
                Ok(())
            }
        },
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Read an input file into a source document.
fn load_source(input: &Path, args: &SourceArgs) -> Result<SourceDocument, Box<dyn std::error::Error>> {
    let bytes = fs::read(input)?;
    let filename = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let media_type = args.media_type.clone().unwrap_or_else(|| {
        TargetFormat::from_extension(file_extension(&filename))
            .map(|format| format.media_type().to_string())
            .unwrap_or_default()
    });
    log::debug!("loaded {} ({} bytes, media type {:?})", filename, bytes.len(), media_type);

    Ok(SourceDocument::new(bytes, media_type, filename))
}

fn build_converter(args: &SourceArgs) -> Converter {
    let options =
        ConvertOptions::new().with_extract_options(ExtractOptions::new().with_sniffing(args.sniff));
    Converter::with_options(options)
}

fn cmd_convert(
    input: &Path,
    format: &str,
    output: Option<&Path>,
    args: &SourceArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let target: TargetFormat = format.parse()?;
    let source = load_source(input, args)?;
    let converter = build_converter(args);

    let converted = converter
        .convert(&source, target)
        .map_err(|e| e.user_message())?;

    let path = output.map(Path::to_path_buf).unwrap_or_else(|| {
        input
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(&converted.suggested_filename)
    });
    fs::write(&path, &converted.bytes)?;

    println!(
        "{} {} ({}, {} bytes)",
        "Saved to".green(),
        path.display(),
        converted.media_type.dimmed(),
        converted.len()
    );

    Ok(())
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    args: &SourceArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = load_source(input, args)?;
    let text = build_converter(args)
        .extract(&source)
        .map_err(|e| e.user_message())?;

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_formats() {
    println!("{}", "Supported Formats".cyan().bold());
    println!("{}", "─".repeat(60).dimmed());

    for row in FORMAT_TABLE.iter() {
        println!(
            "{} {:<18} {}",
            format!("{:<6}", row.extension).bold(),
            row.label,
            row.media_type.dimmed()
        );
    }
}

fn cmd_version() {
    println!("{} {}", "docshift".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document conversion tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> SourceArgs {
        SourceArgs {
            media_type: None,
            sniff: false,
        }
    }

    #[test]
    fn test_load_source_derives_media_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.csv");
        fs::write(&path, "a,b").unwrap();

        let source = load_source(&path, &args()).unwrap();
        assert_eq!(source.filename, "table.csv");
        assert_eq!(source.media_type, "text/csv");
        assert_eq!(source.bytes, b"a,b");
    }

    #[test]
    fn test_load_source_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        fs::write(&path, [0u8, 1, 2]).unwrap();

        let source = load_source(&path, &args()).unwrap();
        assert_eq!(source.media_type, "");
    }

    #[test]
    fn test_convert_writes_suggested_filename() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("notes.txt");
        fs::write(&input, "line1\nline2").unwrap();

        cmd_convert(&input, "csv", None, &args()).unwrap();

        let written = fs::read_to_string(dir.path().join("notes.csv")).unwrap();
        assert_eq!(written, "\"Line Number\",\"Content\"\n\"1\",\"line1\"\n\"2\",\"line2\"");
    }

    #[test]
    fn test_convert_rejects_unknown_format() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("notes.txt");
        fs::write(&input, "x").unwrap();

        let err = cmd_convert(&input, "odt", None, &args()).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported target format: odt");
    }

    #[test]
    fn test_cli_parses_subcommand() {
        let cli = Cli::try_parse_from(["docshift", "convert", "a.txt", "--to", "pdf"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Convert { ref to, .. }) if to == "pdf"));
    }
}
