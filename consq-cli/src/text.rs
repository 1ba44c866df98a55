use std::fs::File;
use std::io::prelude::*;
use std::io::BufReader;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use consq::Seq;

#[derive(Debug, Parser)]
pub(crate) struct Text {
    #[command(subcommand)]
    pub(crate) command: TextCommand,
}

#[derive(Debug, Subcommand)]
pub(crate) enum TextCommand {
    /// Split the input at every separator character. Empty lines are kept.
    Lines {
        /// separator character
        #[arg(long, default_value_t = '\n')]
        separator: char,
        /// input file (default stdin)
        infile: Option<PathBuf>,
    },
    /// Split the input at runs of whitespace. Empty words are dropped.
    Words {
        /// input file (default stdin)
        infile: Option<PathBuf>,
    },
}

impl TextCommand {
    fn infile(&self) -> Option<&PathBuf> {
        match self {
            TextCommand::Lines { infile, .. } | TextCommand::Words { infile } => infile.as_ref(),
        }
    }

    /// Split `input` into segments, each rendered back as a string.
    pub(crate) fn segments(&self, input: &str) -> Vec<String> {
        let chars: Seq<char> = input.chars().collect();
        let segments = match self {
            TextCommand::Lines { separator, .. } => chars.lines_by(|c| c == separator),
            TextCommand::Words { .. } => chars.words_by(|c| c.is_whitespace()),
        };
        segments
            .iter()
            .map(|segment| segment.iter().collect())
            .collect()
    }
}

impl Text {
    pub(crate) fn run(&self) -> Result<(), anyhow::Error> {
        let mut reader: Box<dyn BufRead> = if let Some(infile) = self.command.infile() {
            Box::new(BufReader::new(File::open(infile)?))
        } else {
            Box::new(BufReader::new(std::io::stdin()))
        };

        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        tracing::debug!(chars = input.chars().count(), "read text input");

        for (index, segment) in self.command.segments(&input).iter().enumerate() {
            println!("{}\t{}", index, segment);
        }
        Ok(())
    }
}
