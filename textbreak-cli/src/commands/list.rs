//! List command implementation

use super::analyze::{OutputFormat, Unit};
use super::ListCommands;
use anyhow::Result;
use clap::ValueEnum;
use std::io::{self, Write};
use textbreak_core::{get_tailoring, list_available_tailorings};

/// Print the requested listing to stdout
pub fn execute(subcommand: ListCommands) -> Result<()> {
    let mut out = io::stdout().lock();
    write_listing(subcommand, &mut out)
}

/// Write the requested listing to `out`
pub fn write_listing<W: Write>(subcommand: ListCommands, out: &mut W) -> Result<()> {
    match subcommand {
        ListCommands::Tailorings => {
            writeln!(out, "Embedded tailorings:")?;
            for code in list_available_tailorings() {
                let tailoring = get_tailoring(code)?;
                writeln!(out, "  {code:<6} {}", tailoring.name())?;
            }
        }
        ListCommands::Formats => {
            writeln!(out, "Output formats:")?;
            write_values::<OutputFormat, _>(out)?;
        }
        ListCommands::Units => {
            writeln!(out, "Units:")?;
            write_values::<Unit, _>(out)?;
        }
    }
    Ok(())
}

fn write_values<V: ValueEnum, W: Write>(out: &mut W) -> Result<()> {
    for value in V::value_variants() {
        if let Some(possible) = value.to_possible_value() {
            let help = possible.get_help().map(|h| h.to_string()).unwrap_or_default();
            writeln!(out, "  {:<11} {help}", possible.get_name())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(subcommand: ListCommands) -> String {
        let mut out = Vec::new();
        write_listing(subcommand, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_tailorings() {
        let out = listing(ListCommands::Tailorings);
        assert!(out.contains("en     English"));
        assert!(out.contains("ja     Japanese"));
    }

    #[test]
    fn test_formats() {
        let out = listing(ListCommands::Formats);
        for name in ["text", "json", "markdown"] {
            assert!(out.contains(name));
        }
    }

    #[test]
    fn test_units() {
        let out = listing(ListCommands::Units);
        for name in ["graphemes", "words", "sentences", "lines", "attributes"] {
            assert!(out.contains(name));
        }
    }
}
