use anyhow::Context;
use clap::Parser;
use investment_planner::utils::logger;
use investment_planner::{compute, InvestmentRequest};

#[derive(Parser)]
#[command(name = "fv-calc")]
#[command(about = "Compute the future value of a recurring investment plan")]
struct Args {
    /// Initial deposit
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    initial_amount: f64,

    /// Fixed monthly contribution (must be > 0)
    #[arg(long, allow_negative_numbers = true)]
    monthly_contribution: f64,

    /// Annual interest rate in percent, e.g. 5 for 5%
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    annual_rate: f64,

    /// Investment term in years
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    years: i64,

    /// Pretty-print the JSON result
    #[arg(long)]
    pretty: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let request = InvestmentRequest {
        initial_amount: args.initial_amount,
        monthly_contribution: args.monthly_contribution,
        annual_interest_rate_percent: args.annual_rate,
        years: args.years,
    };
    tracing::debug!("Request: {:?}", request);

    let response = match compute(&request) {
        Ok(response) => response,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let output = if args.pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    }
    .context("failed to serialize result")?;

    println!("{}", output);
    Ok(())
}
