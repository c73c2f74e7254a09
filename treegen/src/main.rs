//! Regenerates AST definitions.
//!
//! ```text
//! treegen [--target java|rust] [--package PKG] [--base NAME --table FILE] <out-dir>
//! ```
//!
//! Without `--table`, writes the built-in `Expr` and `Stmt` trees.

use anyhow::{Context, bail};
use std::path::PathBuf;
use treegen_codegen::{AstBuilder, Target};
use treegen_schema::tables::{EXPR_SHAPES, STMT_SHAPES};

const USAGE: &str =
    "usage: treegen [--target java|rust] [--package PKG] [--base NAME --table FILE] <out-dir>";

/// Parsed command line.
#[derive(Debug, PartialEq, Eq)]
struct Args {
    target: Target,
    package: Option<String>,
    table: Option<(String, PathBuf)>,
    out_dir: PathBuf,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Args> {
    let mut target = Target::default();
    let mut package = None;
    let mut base = None;
    let mut table = None;
    let mut out_dir = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--target" => {
                let value = args.next().context("--target needs a value")?;
                target = Target::parse(&value)
                    .with_context(|| format!("unknown target '{value}'"))?;
            }
            "--package" => package = Some(args.next().context("--package needs a value")?),
            "--base" => base = Some(args.next().context("--base needs a value")?),
            "--table" => {
                table = Some(PathBuf::from(args.next().context("--table needs a value")?))
            }
            flag if flag.starts_with("--") => bail!("unknown flag '{flag}'\n{USAGE}"),
            _ if out_dir.is_none() => out_dir = Some(PathBuf::from(&arg)),
            _ => bail!("unexpected argument '{arg}'\n{USAGE}"),
        }
    }

    let table = match (base, table) {
        (Some(base), Some(table)) => Some((base, table)),
        (None, None) => None,
        _ => bail!("--base and --table must be given together\n{USAGE}"),
    };

    Ok(Args {
        target,
        package,
        table,
        out_dir: out_dir.context(USAGE)?,
    })
}

fn builders(args: &Args) -> Vec<AstBuilder> {
    let builders = match &args.table {
        Some((base, path)) => vec![AstBuilder::new(base).table_file(path)],
        None => vec![
            AstBuilder::new("Expr").shapes(EXPR_SHAPES),
            AstBuilder::new("Stmt").shapes(STMT_SHAPES),
        ],
    };

    builders
        .into_iter()
        .map(|builder| {
            let builder = builder.target(args.target).out_dir(&args.out_dir);
            match &args.package {
                Some(package) => builder.package(package),
                None => builder,
            }
        })
        .collect()
}

fn run(args: &Args) -> anyhow::Result<Vec<PathBuf>> {
    builders(args)
        .iter()
        .map(|builder| builder.run().map_err(anyhow::Error::from))
        .collect()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    for path in run(&args)? {
        tracing::info!("Generated {}", path.display());
    }
    Ok(())
}
