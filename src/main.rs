//! # lexicorpus
//!
//! Builds a vocabulary and example sentence corpus for a language-learning product.
//!
//! ```sh
//! lexicorpus 0.3.0
//! vocabulary and example sentence corpus builder.
//!
//! USAGE:
//!     lexicorpus [OPTIONS] <SUBCOMMAND>
//!
//! OPTIONS:
//!     -c, --config <config>    TOML configuration file. Defaults are used if absent.
//!
//! SUBCOMMANDS:
//!     backfill     Add template examples for missing languages
//!     combine      Combine partial files into a corpus
//!     generate     Generate example sentences for vocabulary words
//!     plan         Split vocabulary profiles into batches
//!     translate    Translate a list of strings through the oracle
//!     validate     Validate universal vocabulary batches
//! ```
//!
//! Log verbosity is set with `RUST_LOG` (e.g. `RUST_LOG=lexicorpus=debug`).
use structopt::StructOpt;

use lexicorpus::config::Config;
use lexicorpus::error::Error;
use lexicorpus::identifiers::IdScheme;
use lexicorpus::oracle::{GenerationAdapter, HttpOracle};
use lexicorpus::pipelines::{
    highest_batch, BackfillPipeline, CombinePipeline, GeneratePipeline, Pipeline, PlanPipeline,
    SentenceSource, TranslatePipeline, ValidatePipeline,
};

#[macro_use]
extern crate log;

mod cli;

fn adapter(config: &Config) -> Result<GenerationAdapter, Error> {
    let oracle = HttpOracle::from_config(&config.oracle)?;
    Ok(GenerationAdapter::new(Box::new(oracle), &config.oracle))
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Lexicorpus::from_args();
    debug!("cli args\n{:#?}", opt);

    let config = Config::from_optional_path(opt.config.as_deref())?;

    match opt.command {
        cli::Command::Plan(p) => {
            let chunk_size = p.chunk_size.unwrap_or(config.batch.chunk_size);
            PlanPipeline::new(p.profiles, p.dst, chunk_size).run()?;
        }

        cli::Command::Generate(g) => {
            let source = if g.offline {
                SentenceSource::Templates { seed: g.seed }
            } else {
                SentenceSource::Oracle(adapter(&config)?)
            };
            let report = GeneratePipeline::new(g.sources, g.dst, config, source)
                .with_domain(g.domain)
                .run()?;
            if !report.skipped.is_empty() {
                warn!("words without sentences: {:?}", report.skipped);
            }
        }

        cli::Command::Translate(t) => {
            let adapter = adapter(&config)?;
            TranslatePipeline::new(t.src, t.dst, &t.from, &t.to, adapter)?.run()?;
        }

        cli::Command::Combine(c) => {
            let scheme = if c.sequential_ids {
                IdScheme::Sequential
            } else {
                IdScheme::WordIndexed
            };
            CombinePipeline::new(c.inputs, c.dst, c.profiles, config)
                .with_scheme(scheme)
                .run()?;
        }

        cli::Command::Validate(v) => {
            let last = match v.last {
                Some(last) => last,
                None => highest_batch(&v.dir)?.unwrap_or(v.first).max(v.first),
            };
            let summary = ValidatePipeline::new(v.dir, v.first, last, config.batch)?.run()?;
            if !summary.success() {
                error!("{} batches failed", summary.failed);
                std::process::exit(1);
            }
        }

        cli::Command::Backfill(b) => {
            BackfillPipeline::new(b.src, b.dst, &b.languages, &b.domain, b.seed, b.count)?.run()?;
        }
    };
    Ok(())
}
