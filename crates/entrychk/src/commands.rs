//! Command dispatch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use entrychk_json::parse_json;
use entrychk_rulecount::count_source;
use entrychk_sem::{ignore_code, validate, Schema, AUTHOR_SCHEMA, INFO_SCHEMA};

use crate::cli::{CheckArgs, Cli, Commands, Format, SizeArgs};
use crate::config::Config;
use crate::report::{DocumentReport, SizeReport};
use crate::{EXIT_INVALID, EXIT_OK, EXIT_STRICT_INVALID};

struct RunContext {
    strict: bool,
    format: Format,
    verbose: u8,
    config: Config,
}

impl RunContext {
    fn fail_code(&self) -> i32 {
        if self.strict {
            EXIT_STRICT_INVALID
        } else {
            EXIT_INVALID
        }
    }

    fn dbg(&self, level: u8, msg: &str) {
        if self.verbose >= level {
            eprintln!("debug[{level}]: {msg}");
        }
    }
}

pub fn dispatch(cli: Cli) -> Result<i32> {
    let config = Config::resolve(cli.global.config.as_deref())?;

    // The registry is written here, before any validation runs, and is
    // read-only from then on.
    for &code in config.ignore.iter().chain(cli.global.ignore.iter()) {
        ignore_code(code);
    }

    let ctx = RunContext {
        strict: cli.global.strict || config.strict,
        format: cli.global.format,
        verbose: cli.global.verbose,
        config,
    };

    match cli.command {
        Commands::Size(args) => size(&args, &ctx),
        Commands::Info(args) => document(&args.file, &INFO_SCHEMA, "info", &ctx),
        Commands::Auth(args) => document(&args.file, &AUTHOR_SCHEMA, "author", &ctx),
        Commands::Check(args) => check(&args, &ctx),
    }
}

fn size(args: &SizeArgs, ctx: &RunContext) -> Result<i32> {
    let bytes = std::fs::read(&args.prog_c)
        .with_context(|| format!("failed to read {}", args.prog_c.display()))?;
    ctx.dbg(1, &format!("read {} bytes", bytes.len()));

    let metrics = count_source(&bytes);
    let report = SizeReport::new(
        args.prog_c.display().to_string(),
        metrics,
        ctx.config.limits.rule_2a,
        ctx.config.limits.rule_2b,
    );
    emit(ctx, &report, &report.render_text())?;

    if report.over_limit() {
        Ok(ctx.fail_code())
    } else {
        Ok(EXIT_OK)
    }
}

fn document(file: &Path, schema: &Schema, kind: &'static str, ctx: &RunContext) -> Result<i32> {
    let bytes =
        std::fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;

    let tree = match parse_json(&bytes) {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("{}: JSON parse failed: {err}", file.display());
            return Ok(ctx.fail_code());
        }
    };
    ctx.dbg(1, &format!("parsed {} nodes", tree.len()));

    let errors = validate(&tree, schema);
    let report = DocumentReport::new(file.display().to_string(), kind, errors);
    emit(ctx, &report, &report.render_text())?;

    if report.valid {
        Ok(EXIT_OK)
    } else {
        Ok(ctx.fail_code())
    }
}

fn check(args: &CheckArgs, ctx: &RunContext) -> Result<i32> {
    let info: PathBuf = args.dir.join(".info.json");
    let auth: PathBuf = args.dir.join(".author.json");
    let info_code = document(&info, &INFO_SCHEMA, "info", ctx)?;
    let auth_code = document(&auth, &AUTHOR_SCHEMA, "author", ctx)?;
    Ok(info_code.max(auth_code))
}

fn emit<T: serde::Serialize>(ctx: &RunContext, report: &T, text: &str) -> Result<()> {
    match ctx.format {
        Format::Text => print!("{text}"),
        Format::Json => {
            let json = serde_json::to_string_pretty(report).context("report serialization")?;
            println!("{json}");
        }
    }
    Ok(())
}
