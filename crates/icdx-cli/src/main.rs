use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use eyre::{Result, WrapErr};
use tracing::info;

use icdx_bedrock::converse::ConverseProvider;
use icdx_bedrock::interpret::{Interpreter, InterpreterOptions};
use icdx_bedrock::models::{DEFAULT_MODEL_ID, list_models};
use icdx_core::models::request::InterpretRequest;
use icdx_core::schema::ResponseSchema;

mod aws;

#[derive(Parser)]
#[command(name = "icdx")]
#[command(version, about = "Codex assistant: ICD-10 code interpretation from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpret an ICD-10 code or diagnostic phrase
    Interpret(InterpretArgs),
    /// List the Claude models available for interpretation
    Models {
        #[command(flatten)]
        aws: AwsArgs,
    },
    /// Print a response contract as JSON
    Schema {
        #[command(flatten)]
        contract: ContractArgs,
    },
}

#[derive(Args)]
struct InterpretArgs {
    /// The code or phrase, e.g. "E11.9" or "type 2 diabetes mellitus"
    input: String,

    /// Inference profile ID to invoke
    #[arg(long, default_value = DEFAULT_MODEL_ID)]
    model: String,

    #[command(flatten)]
    contract: ContractArgs,

    /// Deadline for each model call, in seconds
    #[arg(long, default_value_t = 120)]
    timeout_secs: u64,

    /// Total attempts, including the first (1 disables retry)
    #[arg(long, default_value_t = 2)]
    attempts: u32,

    #[command(flatten)]
    aws: AwsArgs,
}

#[derive(Args)]
struct ContractArgs {
    /// Use the six-field summary contract instead of the full profile
    #[arg(long)]
    summary: bool,

    /// Load a custom contract from a JSON file
    #[arg(long, conflicts_with = "summary")]
    schema_file: Option<PathBuf>,
}

#[derive(Args)]
struct AwsArgs {
    /// AWS region (defaults to the environment, then us-east-1)
    #[arg(long)]
    region: Option<String>,

    /// Named profile from the shared AWS config
    #[arg(long)]
    aws_profile: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Commands::Interpret(args) => interpret(args).await,
        Commands::Models { aws } => models(aws).await,
        Commands::Schema { contract } => print_schema(&contract),
    }
}

async fn interpret(args: InterpretArgs) -> Result<()> {
    let schema = load_contract(&args.contract)?;
    let config = aws::build_aws_config(args.aws.region, args.aws.aws_profile).await;
    let provider = ConverseProvider::new(&config, args.model);

    let options = InterpreterOptions {
        timeout: Duration::from_secs(args.timeout_secs),
        max_attempts: args.attempts,
        ..InterpreterOptions::default()
    };
    let interpreter = Interpreter::with_options(provider, schema, options);

    let record = interpreter
        .interpret_recorded(&InterpretRequest::new(args.input))
        .await?;

    println!(
        "{}",
        serde_json::to_string_pretty(&record.interpretation.to_value())?
    );

    info!(
        interpretation_id = %record.id,
        model = record.model_id.as_str(),
        input_tokens = record.usage.tokens.input,
        output_tokens = record.usage.tokens.output,
        total_tokens = record.usage.tokens.total(),
        cost_usd = record.usage.cost_usd,
        "interpretation complete"
    );

    Ok(())
}

async fn models(args: AwsArgs) -> Result<()> {
    let config = aws::build_aws_config(args.region, args.aws_profile).await;
    let models = list_models(&config).await?;

    for model in models {
        println!("{}  {}", model.model_id, model.name);
    }

    Ok(())
}

fn print_schema(contract: &ContractArgs) -> Result<()> {
    let schema = load_contract(contract)?;
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn load_contract(contract: &ContractArgs) -> Result<ResponseSchema> {
    if let Some(path) = &contract.schema_file {
        let raw = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read contract from {}", path.display()))?;
        let schema: ResponseSchema = serde_json::from_str(&raw)
            .wrap_err_with(|| format!("invalid contract in {}", path.display()))?;
        return Ok(schema);
    }

    Ok(if contract.summary {
        ResponseSchema::code_summary()
    } else {
        ResponseSchema::code_profile()
    })
}
