//! Resume scorer: match a PDF resume against a job description

use clap::Parser;
use log::{error, info, warn};
use resume_scorer::cli::{self, Cli, Commands, ConfigAction, JobSource};
use resume_scorer::config::Config;
use resume_scorer::error::{Result, ResumeScorerError};
use resume_scorer::input::InputManager;
use resume_scorer::output::formatter::{save_report_to_file, ReportGenerator};
use resume_scorer::output::report::ErrorReport;
use resume_scorer::processing::MatchAnalyzer;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, config_path).await {
        if let ResumeScorerError::Pipeline(pipeline_error) = &e {
            let report = ErrorReport::from(pipeline_error);
            if pipeline_error.is_client_error() {
                warn!("Input rejected ({}): {}", report.status, report.error);
            } else {
                error!("Analysis failed ({}): {}", report.status, report.error);
            }
        } else {
            error!("Command failed: {}", e);
        }
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: PathBuf) -> Result<()> {
    match command {
        Commands::Analyze { resume, job, output, save } => {
            cli::validate_file_extension(&resume, &["pdf"])
                .map_err(|e| ResumeScorerError::InvalidInput(format!("Resume file: {}", e)))?;

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeScorerError::InvalidInput)?,
                None => config.output.format,
            };

            let input_manager = InputManager::new();
            let resume_bytes = input_manager.read_resume(&resume).await?;

            let job_description = match job {
                JobSource { job: Some(path), .. } => {
                    cli::validate_file_extension(&path, &["txt", "md", "markdown"])
                        .map_err(|e| ResumeScorerError::InvalidInput(format!("Job description file: {}", e)))?;
                    input_manager.read_job_description(&path).await?
                }
                JobSource { job_text: Some(text), .. } => text,
                JobSource { .. } => {
                    return Err(ResumeScorerError::InvalidInput(
                        "Provide --job or --job-text".to_string(),
                    ))
                }
            };

            info!("Scoring {} against the job description", resume.display());

            let analyzer = MatchAnalyzer::new(&config);
            let result = analyzer.analyze(Some(resume_bytes.as_slice()), Some(job_description.as_str()))?;

            let generator = ReportGenerator::with_options(config.output.color_output && save.is_none(), true);
            let rendered = generator.generate_report(&result, &output_format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    info!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| ResumeScorerError::Configuration(e.to_string()))?;
                println!("{}", content);
            }

            Some(ConfigAction::Reset) => {
                Config::default().save_to(&config_path)?;
                info!("Configuration reset to defaults at {}", config_path.display());
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }
        },
    }

    Ok(())
}
