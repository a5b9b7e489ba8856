//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "lexicorpus", about = "vocabulary and example sentence corpus builder.")]
pub struct Lexicorpus {
    #[structopt(
        long = "config",
        short = "c",
        parse(from_os_str),
        help = "TOML configuration file. Defaults are used if absent."
    )]
    pub config: Option<PathBuf>,
    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(Debug, StructOpt)]
/// Holds every command that is callable by the `lexicorpus` command.
pub enum Command {
    #[structopt(about = "Split vocabulary profiles into batches")]
    Plan(Plan),
    #[structopt(about = "Generate example sentences for vocabulary words")]
    Generate(Generate),
    #[structopt(about = "Translate a list of strings through the oracle")]
    Translate(Translate),
    #[structopt(about = "Combine partial files into a corpus")]
    Combine(Combine),
    #[structopt(about = "Validate universal vocabulary batches")]
    Validate(Validate),
    #[structopt(about = "Add template examples for missing languages")]
    Backfill(Backfill),
}

/// Parse a `name=path` profile argument.
pub fn parse_profile(s: &str) -> Result<(String, PathBuf), String> {
    match s.split_once('=') {
        Some((name, path)) if !name.is_empty() && !path.is_empty() => {
            Ok((name.to_string(), PathBuf::from(path)))
        }
        _ => Err(format!("expected <name>=<path>, got {:?}", s)),
    }
}

#[derive(Debug, StructOpt)]
/// Plan command and parameters.
///
/// ```sh
/// lexicorpus plan german_b2=vocab/b2.json german_c1=vocab/c1.json --dst plan.json
/// ```
pub struct Plan {
    #[structopt(
        parse(try_from_str = parse_profile),
        required = true,
        help = "vocabulary profiles, as <name>=<path>"
    )]
    pub profiles: Vec<(String, PathBuf)>,
    #[structopt(long = "dst", parse(from_os_str), help = "batch plan destination")]
    pub dst: PathBuf,
    #[structopt(long = "chunk-size", help = "words per batch. Overrides configuration.")]
    pub chunk_size: Option<usize>,
}

#[derive(Debug, StructOpt)]
/// Generate command and parameters.
pub struct Generate {
    #[structopt(parse(from_os_str), required = true, help = "vocabulary sources")]
    pub sources: Vec<PathBuf>,
    #[structopt(long = "dst", parse(from_os_str), help = "partial corpus destination")]
    pub dst: PathBuf,
    #[structopt(long = "offline", help = "use sentence templates instead of the oracle")]
    pub offline: bool,
    #[structopt(long = "seed", default_value = "42", help = "template random seed")]
    pub seed: u64,
    #[structopt(long = "domain", help = "domain of every word. Domains of the configuration are used in turn otherwise.")]
    pub domain: Option<String>,
}

#[derive(Debug, StructOpt)]
/// Translate command and parameters.
pub struct Translate {
    #[structopt(parse(from_os_str), help = "JSON list of strings")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "translations destination")]
    pub dst: PathBuf,
    #[structopt(long = "from", help = "source language")]
    pub from: String,
    #[structopt(long = "to", help = "target language")]
    pub to: String,
}

#[derive(Debug, StructOpt)]
/// Combine command and parameters.
pub struct Combine {
    #[structopt(required = true, help = "partial corpora (paths or glob patterns)")]
    pub inputs: Vec<String>,
    #[structopt(long = "dst", parse(from_os_str), help = "corpus destination")]
    pub dst: PathBuf,
    #[structopt(long = "profile", help = "source profile names to record in metadata")]
    pub profiles: Vec<String>,
    #[structopt(long = "sequential-ids", help = "number records over the whole corpus")]
    pub sequential_ids: bool,
}

#[derive(Debug, StructOpt)]
/// Validate command and parameters.
///
/// Exits with status 1 if a batch is missing, invalid or failed.
pub struct Validate {
    #[structopt(parse(from_os_str), help = "directory holding batch_NN.json files")]
    pub dir: PathBuf,
    #[structopt(long = "first", default_value = "1", help = "first batch")]
    pub first: usize,
    #[structopt(long = "last", help = "last batch. Defaults to the highest batch found.")]
    pub last: Option<usize>,
}

#[derive(Debug, StructOpt)]
/// Backfill command and parameters.
pub struct Backfill {
    #[structopt(parse(from_os_str), help = "vocabulary source")]
    pub src: PathBuf,
    #[structopt(long = "dst", parse(from_os_str), help = "destination")]
    pub dst: PathBuf,
    #[structopt(long = "lang", required = true, help = "languages to fill")]
    pub languages: Vec<String>,
    #[structopt(long = "domain", default_value = "general", help = "template domain")]
    pub domain: String,
    #[structopt(long = "seed", default_value = "42", help = "template random seed")]
    pub seed: u64,
    #[structopt(long = "count", default_value = "2", help = "examples per language")]
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_argument() {
        assert_eq!(
            parse_profile("german_b2=vocab/b2.json"),
            Ok(("german_b2".to_string(), PathBuf::from("vocab/b2.json")))
        );
        assert!(parse_profile("vocab/b2.json").is_err());
        assert!(parse_profile("=vocab/b2.json").is_err());
    }

    #[test]
    fn parse_plan() {
        let args = Lexicorpus::from_iter_safe(&[
            "lexicorpus",
            "plan",
            "a=a.json",
            "b=b.json",
            "--dst",
            "plan.json",
            "--chunk-size",
            "10",
        ])
        .unwrap();
        match args.command {
            Command::Plan(p) => {
                assert_eq!(p.profiles.len(), 2);
                assert_eq!(p.chunk_size, Some(10));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn parse_combine() {
        let args = Lexicorpus::from_iter_safe(&[
            "lexicorpus",
            "--config",
            "lexicorpus.toml",
            "combine",
            "out/*.json",
            "--dst",
            "corpus.json",
            "--profile",
            "german_b2",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("lexicorpus.toml")));
        match args.command {
            Command::Combine(c) => {
                assert_eq!(c.inputs, vec!["out/*.json".to_string()]);
                assert_eq!(c.profiles, vec!["german_b2".to_string()]);
                assert!(!c.sequential_ids);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
