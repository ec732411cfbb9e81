//! Input/output routing for the CLI.

use crate::args::CliArgs;
use anyhow::{bail, Context, Result};
use jss_core::StripConfig;
use jss_storage::{output_path_for, strip_tree, BatchReport, FileReport, SourceFs, WriteMode};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// Name used for stdin in reports.
pub const STDIN_NAME: &str = "<stdin>";

/// Where a single stripped file goes.
enum Target {
    Stdout,
    File(PathBuf),
}

/// What to do with one input.
enum Plan {
    /// Walk a directory, mirroring into the given directory or stripping in place.
    Tree(Option<PathBuf>),
    File(Target),
}

/// Run the CLI. `Ok(false)` means some input failed to strip.
pub async fn run(args: CliArgs) -> Result<bool> {
    let config = match &args.config {
        Some(path) => StripConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => StripConfig::default(),
    };
    let sfs = Arc::new(SourceFs::new(config).context("invalid config")?);
    let mode = if args.check { WriteMode::Check } else { WriteMode::Write };

    let report = if args.reads_stdin() {
        let mut source = String::new();
        tokio::io::stdin()
            .read_to_string(&mut source)
            .await
            .context("reading stdin")?;
        BatchReport {
            files: vec![strip_text(&sfs, &source, args.output.as_deref(), mode).await],
        }
    } else {
        strip_inputs(&sfs, &args.inputs, args.output.as_deref(), mode).await?
    };

    if args.stats {
        eprintln!("{}", report.to_json()?);
    }
    for file in report.files.iter().filter(|f| !f.is_ok()) {
        eprintln!(
            "jsstrip: {}: {}",
            file.input.display(),
            file.error.as_deref().unwrap_or_default()
        );
    }
    Ok(!report.has_failures())
}

/// Strip text read from stdin, writing to `output` or stdout.
pub async fn strip_text(
    sfs: &SourceFs,
    source: &str,
    output: Option<&Path>,
    mode: WriteMode,
) -> FileReport {
    let input = PathBuf::from(STDIN_NAME);
    let result = async {
        let result = jss_compactor::compress_with_stats(source)?;
        let written = match (mode, output) {
            (WriteMode::Check, _) => None,
            (WriteMode::Write, Some(path)) => {
                sfs.write_output(path, &result.output).await?;
                Some(path.to_path_buf())
            }
            (WriteMode::Write, None) => {
                write_stdout(&result.output).await?;
                None
            }
        };
        Ok::<_, anyhow::Error>(FileReport {
            input: input.clone(),
            output: written,
            original_len: result.original_len,
            compressed_len: result.compressed_len,
            error: None,
        })
    }
    .await;
    result.unwrap_or_else(|err| failed_report(&input, &err))
}

/// Strip every input; directories are walked, files are stripped directly.
///
/// Fails before touching anything when two inputs would be written to the
/// same place.
pub async fn strip_inputs(
    sfs: &Arc<SourceFs>,
    inputs: &[PathBuf],
    output: Option<&Path>,
    mode: WriteMode,
) -> Result<BatchReport> {
    let plans = plan_outputs(sfs, inputs, output)?;

    let mut report = BatchReport::default();
    for (input, plan) in inputs.iter().zip(plans) {
        match plan {
            Plan::Tree(out_dir) => {
                let batch = strip_tree(Arc::clone(sfs), input, out_dir.as_deref(), mode)
                    .await
                    .with_context(|| format!("walking {}", input.display()))?;
                report.files.extend(batch.files);
            }
            Plan::File(target) => report.files.push(strip_one(sfs, input, target, mode).await),
        }
    }
    Ok(report)
}

fn plan_outputs(sfs: &SourceFs, inputs: &[PathBuf], output: Option<&Path>) -> Result<Vec<Plan>> {
    let single = inputs.len() == 1;
    if !single {
        if let Some(out) = output.filter(|o| o.is_file()) {
            bail!("{} is a file; several inputs need an output directory", out.display());
        }
    }

    let mut seen = HashSet::new();
    let mut plans = Vec::with_capacity(inputs.len());
    for input in inputs {
        let name = input.file_name().unwrap_or(input.as_os_str());
        let plan = if input.is_dir() {
            Plan::Tree(match output {
                Some(out) if single => Some(out.to_path_buf()),
                Some(out) => Some(out.join(name)),
                None => None,
            })
        } else {
            Plan::File(match output {
                Some(out) if single => Target::File(out.to_path_buf()),
                Some(out) => Target::File(out.join(name)),
                None if single => Target::Stdout,
                None => Target::File(output_path_for(input, &sfs.config().output_suffix)),
            })
        };
        let dest = match &plan {
            Plan::Tree(Some(dir)) => Some(dir.clone()),
            Plan::File(Target::File(path)) => Some(path.clone()),
            _ => None,
        };
        if let Some(dest) = dest {
            if !seen.insert(dest.clone()) {
                bail!(
                    "{} and another input would both be written to {}",
                    input.display(),
                    dest.display()
                );
            }
        }
        plans.push(plan);
    }
    Ok(plans)
}

async fn strip_one(sfs: &SourceFs, input: &Path, target: Target, mode: WriteMode) -> FileReport {
    let result = match target {
        Target::File(path) => sfs.strip_file(input, &path, mode).await.map_err(anyhow::Error::from),
        Target::Stdout => strip_to_stdout(sfs, input, mode).await,
    };
    result.unwrap_or_else(|err| failed_report(input, &err))
}

fn failed_report(input: &Path, err: &anyhow::Error) -> FileReport {
    tracing::warn!(input = %input.display(), error = %err, "failed to strip");
    FileReport {
        input: input.to_path_buf(),
        output: None,
        original_len: 0,
        compressed_len: 0,
        error: Some(format!("{err:#}")),
    }
}

async fn strip_to_stdout(sfs: &SourceFs, input: &Path, mode: WriteMode) -> Result<FileReport> {
    let source = sfs.read_source(input).await?;
    let result = jss_compactor::compress_with_stats(&source)?;
    if mode == WriteMode::Write {
        write_stdout(&result.output).await?;
    }
    Ok(FileReport {
        input: input.to_path_buf(),
        output: None,
        original_len: result.original_len,
        compressed_len: result.compressed_len,
        error: None,
    })
}

async fn write_stdout(content: &str) -> Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(content.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}
