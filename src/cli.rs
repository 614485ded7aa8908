// src/cli.rs
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;

use crate::app_log;
use crate::config::{AppConfig, ConfigLoader, Integration, DEFAULT_ENV_FILE};
use crate::dedup::JobDeduplicator;
use crate::export::{read_jobs, write_jobs, OutputFormat};
use crate::integrations::adzuna::SearchParams;
use crate::integrations::{AdzunaClient, ApifyClient, SheetsClient};
use crate::logger::{Logger, StderrSink};
use crate::types::JobRecord;

#[derive(Parser)]
#[command(name = "job-hunter")]
#[command(about = "Collect, merge and deduplicate job listings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Environment file with credentials
    #[arg(long, global = true, default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Emit debug records from the workflow logger
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check that the environment file defines the given keys
    CheckConfig {
        #[arg(long = "require")]
        keys: Vec<String>,
        #[arg(long = "integration", value_enum)]
        integrations: Vec<Integration>,
    },
    /// Merge job files (JSON arrays) and drop duplicate listings
    Dedup {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[arg(long, short)]
        output: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Search the job board, optionally scrape with an actor, and merge
    Search {
        #[arg(long)]
        what: String,
        #[arg(long = "where")]
        location: Option<String>,
        #[arg(long)]
        country: Option<String>,
        /// Apify actor to run alongside the board search
        #[arg(long)]
        actor: Option<String>,
        /// Sheet that receives the merged listings
        #[arg(long)]
        sheet: Option<String>,
        #[arg(long, short)]
        output: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    match cli.command {
        Command::CheckConfig { keys, integrations } => {
            check_config(&cli.env_file, &keys, &integrations)?;
            println!("Configuration OK");
            Ok(())
        }

        Command::Dedup {
            files,
            output,
            format,
        } => {
            let sources = files
                .iter()
                .map(|path| read_jobs(path))
                .collect::<Result<Vec<_>>>()?;
            let total: usize = sources.iter().map(Vec::len).sum();

            let unique = JobDeduplicator::merge_and_deduplicate(sources);
            app_log!(info, "Deduplicated {} listings into {}", total, unique.len());

            write_output(output.as_deref(), &unique, format)?;

            workflow_logger("Dedup", cli.debug, output.is_none()).info(
                "Merged job files",
                json!({"files": files.len(), "input": total, "unique": unique.len()}),
            );
            Ok(())
        }

        Command::Search {
            what,
            location,
            country,
            actor,
            sheet,
            output,
            format,
        } => {
            let config = AppConfig::load(&cli.env_file)?;
            let logger = workflow_logger("Search", cli.debug || config.debug, output.is_none());

            let params = SearchParams {
                what: Some(what),
                location,
                country,
                ..SearchParams::default()
            };

            match run_search(&config, &logger, &params, actor.as_deref(), sheet.as_deref()).await {
                Ok(jobs) => write_output(output.as_deref(), &jobs, format),
                Err(e) => {
                    logger.error("Search failed", Some(&e));
                    Err(e)
                }
            }
        }
    }
}

/// Explicit keys first, then the keys of each integration, reported together
pub fn check_config(env_file: &Path, keys: &[String], integrations: &[Integration]) -> Result<()> {
    let config = ConfigLoader::load_env(env_file)?;

    let required = Integration::merge_required_keys(keys.iter().map(String::as_str), integrations);
    ConfigLoader::validate(&config, &required)?;
    Ok(())
}

pub async fn run_search(
    config: &AppConfig,
    logger: &Logger,
    params: &SearchParams,
    actor: Option<&str>,
    sheet: Option<&str>,
) -> Result<Vec<JobRecord>> {
    let mut needed = vec![Integration::Adzuna];
    if actor.is_some() {
        needed.push(Integration::Apify);
    }
    if sheet.is_some() {
        needed.push(Integration::GoogleSheets);
    }
    config.require(&needed)?;

    logger.debug("Search parameters", json!(params));

    let board = AdzunaClient::new(config.adzuna.clone())
        .search_jobs(params)
        .await
        .context("Job board search failed")?;
    logger.info("Job board search finished", json!({"count": board.results.len()}));

    let mut sources = vec![board.results];

    if let Some(actor_id) = actor {
        let input = json!({
            "search": params.what,
            "location": params.location,
        });
        let run = ApifyClient::new(config.apify.clone())
            .run_actor(actor_id, &input)
            .await
            .with_context(|| format!("Actor run failed: {}", actor_id))?;
        logger.info(
            "Actor run finished",
            json!({"actor": actor_id, "status": run.status, "count": run.data.len()}),
        );
        sources.push(run.data);
    }

    let jobs = JobDeduplicator::merge_and_deduplicate(sources);
    logger.info("Merged listings", json!({"unique": jobs.len()}));

    if let Some(sheet_id) = sheet {
        let result = SheetsClient::new(config.sheets.clone())
            .append_data(sheet_id, &jobs)
            .await
            .context("Failed to store listings")?;
        logger.info(
            "Stored listings",
            json!({"sheet": sheet_id, "rowsAdded": result.rows_added}),
        );
    }

    Ok(jobs)
}

/// Workflow records move to stderr when stdout carries the result document
pub fn workflow_logger(context: &str, debug: bool, data_on_stdout: bool) -> Logger {
    if data_on_stdout {
        Logger::with_sink(context, debug, Arc::new(StderrSink))
    } else {
        Logger::new(context, debug)
    }
}

fn write_output(output: Option<&Path>, jobs: &[JobRecord], format: OutputFormat) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_jobs(BufWriter::new(file), jobs, format)
        }
        None => write_jobs(std::io::stdout().lock(), jobs, format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::logger::MemorySink;

    #[test]
    fn test_parse_dedup_args() {
        let cli = Cli::try_parse_from([
            "job-hunter",
            "dedup",
            "a.json",
            "b.json",
            "--format",
            "csv",
        ])
        .unwrap();

        assert_eq!(cli.env_file, PathBuf::from(".env"));
        match cli.command {
            Command::Dedup { files, format, output } => {
                assert_eq!(files.len(), 2);
                assert_eq!(format, OutputFormat::Csv);
                assert!(output.is_none());
            }
            _ => panic!("expected dedup"),
        }
    }

    #[test]
    fn test_dedup_requires_files() {
        assert!(Cli::try_parse_from(["job-hunter", "dedup"]).is_err());
    }

    #[test]
    fn test_check_config_combines_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let env = dir.path().join(".env");
        std::fs::write(&env, "APIFY_API_KEY=k\nFOO=\n").unwrap();

        let err = check_config(
            &env,
            &["FOO".to_string(), "APIFY_API_KEY".to_string()],
            &[Integration::Apify, Integration::OpenRouter],
        )
        .unwrap_err();

        match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::Validation { missing }) => {
                assert_eq!(missing, &vec!["FOO".to_string(), "OPENROUTER_API_KEY".to_string()])
            }
            _ => panic!("unexpected error: {err}"),
        }
    }

    #[tokio::test]
    async fn test_run_search_requires_credentials() {
        let config = AppConfig::from_map(&ConfigLoader::parse("ADZUNA_APP_ID=id"));
        let sink = Arc::new(MemorySink::default());
        let logger = Logger::with_sink("Search", false, sink.clone());

        let err = run_search(&config, &logger, &SearchParams::what("rust"), Some("actor"), None)
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required configuration: ADZUNA_API_KEY, APIFY_API_KEY"
        );
        assert!(sink.lines().is_empty());
    }

    #[tokio::test]
    async fn test_run_search_pipeline() {
        let config = AppConfig::from_map(&ConfigLoader::parse(
            "ADZUNA_APP_ID=id\nADZUNA_API_KEY=key\nAPIFY_API_KEY=k\nGOOGLE_SHEETS_CREDENTIALS=c\nDEBUG=true",
        ));
        let sink = Arc::new(MemorySink::default());
        let logger = Logger::with_sink("Search", config.debug, sink.clone());

        let jobs = run_search(
            &config,
            &logger,
            &SearchParams::what("rust").with_location("Berlin"),
            Some("jobs-scraper"),
            Some("sheet-1"),
        )
        .await
        .unwrap();

        assert!(jobs.is_empty());

        let messages: Vec<String> = sink
            .lines()
            .iter()
            .map(|(_, line)| {
                let value: serde_json::Value = serde_json::from_str(line).unwrap();
                value["message"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(
            messages,
            vec![
                "Search parameters",
                "Job board search finished",
                "Actor run finished",
                "Merged listings",
                "Stored listings",
            ]
        );
    }
}
