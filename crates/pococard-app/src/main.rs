//! pococard - Portable Contacts JSON to vCard 3.0 converter

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use pococard_core::config::load_config;
use pococard_rfc::rfc::poco::parse_records;
use pococard_rfc::rfc::vcard::RecordSerializer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pococard")]
#[command(version, about = "Convert Portable Contacts JSON to vCard 3.0", long_about = None)]
#[command(after_help = "EXAMPLES:
    pococard contacts.json              Print vCards to stdout
    pococard contacts.json -o out.vcf   Write vCards to a file
    cat contacts.json | pococard        Read JSON from stdin")]
struct Cli {
    /// Portable Contacts JSON (entry, entry array, or response); stdin if omitted
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file; stdout if omitted
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .init();

    let config = load_config()?;

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping warn");
    }

    let input = read_input(cli.input.as_deref())?;
    let records = parse_records(&input).context("Failed to read contacts")?;
    tracing::info!(count = records.len(), "Parsed contact records");

    let serializer = RecordSerializer::new(config.vcard.product_id);
    let mut document = serializer.serialize_records(&records);
    if !document.is_empty() {
        document.push('\n');
    }

    write_output(cli.output.as_deref(), &document)
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    if let Some(path) = path {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    } else {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read stdin")?;
        Ok(input)
    }
}

fn write_output(path: Option<&Path>, document: &str) -> anyhow::Result<()> {
    if let Some(path) = path {
        fs::write(path, document).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "Wrote vCards");
    } else {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(document.as_bytes())
            .context("Failed to write stdout")?;
        stdout.flush().context("Failed to flush stdout")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_parses_input_and_output() {
        let cli = Cli::try_parse_from(["pococard", "in.json", "-o", "out.vcf"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("in.json")));
        assert_eq!(cli.output, Some(PathBuf::from("out.vcf")));
    }

    #[test]
    fn cli_defaults_to_stdio() {
        let cli = Cli::try_parse_from(["pococard"]).unwrap();
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
    }

    #[test_log::test]
    fn file_round_trip_through_helpers() {
        let dir = std::env::temp_dir().join(format!("pococard-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let input_path = dir.join("contacts.json");
        let output_path = dir.join("contacts.vcf");
        fs::write(&input_path, r#"{"entry":[{"displayName":"Ada"}]}"#).unwrap();

        let input = read_input(Some(input_path.as_path())).unwrap();
        let records = parse_records(&input).unwrap();
        let document = RecordSerializer::default().serialize_records(&records);
        write_output(Some(output_path.as_path()), &document).unwrap();

        let written = fs::read_to_string(&output_path).unwrap();
        assert!(written.contains("\nFN:Ada\n"));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_input_file_reports_path() {
        let err = read_input(Some(Path::new("/nonexistent/contacts.json"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/contacts.json"));
    }
}
