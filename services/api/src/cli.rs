use crate::commands::{run_batch, run_catalog, run_predict, BatchArgs, PredictArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use salary_insight::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Salary Insight",
    about = "Predict salaries, project their growth, and compare candidates to ideal profiles",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run a single prediction and print the report
    Predict(PredictArgs),
    /// Predict every candidate row of a CSV file
    Batch(BatchArgs),
    /// List the selectable options for every form field
    Catalog,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured model artifact path
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Predict(args) => run_predict(args),
        Command::Batch(args) => run_batch(args),
        Command::Catalog => run_catalog(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::try_parse_from(["salary-insight-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn predict_accepts_form_flags() {
        let cli = Cli::try_parse_from([
            "salary-insight-api",
            "predict",
            "--education",
            "PhD",
            "--job-title",
            "Director",
            "--experience",
            "15",
            "--age",
            "45",
            "--location",
            "Urban",
            "--growth-rate",
            "5",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Predict(args)) => {
                assert_eq!(args.job_title, "Director");
                assert_eq!(args.gender, "Male");
                assert_eq!(args.growth_rate, Some(5.0));
                assert!(args.model.is_none());
            }
            other => panic!("expected predict, got {other:?}"),
        }
    }

    #[test]
    fn predict_rejects_out_of_range_growth_rate() {
        let result = Cli::try_parse_from([
            "salary-insight-api",
            "predict",
            "--education",
            "PhD",
            "--job-title",
            "Director",
            "--experience",
            "15",
            "--age",
            "45",
            "--location",
            "Urban",
            "--growth-rate",
            "35",
        ]);
        assert!(result.is_err());
    }
}
