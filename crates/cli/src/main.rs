//! CLI entry point for carbon-match.
//!
//! Lists carbon-reduction projects from the matching service with the
//! yield each would return on a given investment, and submits investor
//! preferences for a filtered match.

mod shell;
mod table;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use core_types::{Bound, ChoiceField, FlagField, RangeField};
use match_state::{PreferenceCollector, Session, SortOrder};
use matching_client::{GatewayConfig, HttpGateway};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// carbon-match: match investors with carbon-reduction projects
#[derive(Parser)]
#[command(name = "carbon-match")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base URL of the matching service [default: $CARBON_MATCH_BASE_URL or http://localhost:5000]
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every project and show its yield
    Projects {
        /// Investment amount in pounds
        #[arg(short, long, default_value = "0")]
        investment: String,

        /// Sort the table by yield
        #[arg(short, long, value_enum)]
        sort: Option<SortArg>,
    },

    /// Submit preferences and show the matching projects
    Match {
        /// Investment amount in pounds
        #[arg(short, long, default_value = "0")]
        investment: String,

        /// Sort the table by yield
        #[arg(short, long, value_enum)]
        sort: Option<SortArg>,

        #[command(flatten)]
        preferences: PreferenceArgs,
    },

    /// Interactive session
    Shell {
        /// Starting investment amount in pounds
        #[arg(short, long, default_value = "0")]
        investment: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SortArg {
    Asc,
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => SortOrder::Asc,
            SortArg::Desc => SortOrder::Desc,
        }
    }
}

/// Preference flags for `match`. Setting one bound of a range sends only
/// that bound, so the two bounds of the same range are mutually exclusive.
#[derive(Args, Debug, Default)]
struct PreferenceArgs {
    #[arg(long, conflicts_with = "max_financial_returns")]
    min_financial_returns: Option<String>,
    #[arg(long)]
    max_financial_returns: Option<String>,

    #[arg(long, conflicts_with = "max_cost")]
    min_cost: Option<String>,
    #[arg(long)]
    max_cost: Option<String>,

    #[arg(long, conflicts_with = "max_carbon_reduction")]
    min_carbon_reduction: Option<String>,
    #[arg(long)]
    max_carbon_reduction: Option<String>,

    #[arg(long, conflicts_with = "max_lifespan")]
    min_lifespan: Option<String>,
    #[arg(long)]
    max_lifespan: Option<String>,

    #[arg(long)]
    project_type: Option<String>,
    #[arg(long)]
    risk_profile: Option<String>,
    #[arg(long)]
    environmental_impact: Option<String>,
    #[arg(long)]
    management_expertise: Option<String>,
    #[arg(long)]
    mrv_transparency: Option<String>,

    #[arg(long)]
    regulatory_compliance: Option<bool>,
    #[arg(long)]
    scalability: Option<bool>,
}

impl PreferenceArgs {
    fn apply(&self, collector: &mut PreferenceCollector) {
        let ranges = [
            (RangeField::FinancialReturns, &self.min_financial_returns, &self.max_financial_returns),
            (RangeField::CostEffectiveness, &self.min_cost, &self.max_cost),
            (RangeField::CarbonReductionPotential, &self.min_carbon_reduction, &self.max_carbon_reduction),
            (RangeField::ProjectLifespan, &self.min_lifespan, &self.max_lifespan),
        ];
        for (field, min, max) in ranges {
            if let Some(raw) = min {
                collector.set_range_input(field, Bound::Min, raw);
            }
            if let Some(raw) = max {
                collector.set_range_input(field, Bound::Max, raw);
            }
        }

        let choices = [
            (ChoiceField::ProjectType, &self.project_type),
            (ChoiceField::RiskProfile, &self.risk_profile),
            (ChoiceField::EnvironmentalImpact, &self.environmental_impact),
            (ChoiceField::ManagementTeamExpertise, &self.management_expertise),
            (ChoiceField::MrvTransparency, &self.mrv_transparency),
        ];
        for (field, value) in choices {
            if let Some(value) = value {
                collector.set_choice(field, value.clone());
            }
        }

        let flags = [
            (FlagField::RegulatoryCompliance, self.regulatory_compliance),
            (FlagField::Scalability, self.scalability),
        ];
        for (field, value) in flags {
            if let Some(value) = value {
                collector.set_flag(field, value);
            }
        }
    }
}

/// An explicit `--base-url` wins over the environment.
fn gateway_config(base_url: Option<String>) -> GatewayConfig {
    base_url.map(GatewayConfig::new).unwrap_or_else(GatewayConfig::from_env)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = gateway_config(cli.base_url);
    let base_url = config.base_url.clone();
    debug!(%base_url, "Using matching service");
    let gateway = HttpGateway::new(config)
        .with_context(|| format!("Invalid matching service URL: {base_url}"))?;
    let mut session = Session::new(gateway);

    match cli.command {
        Commands::Projects { investment, sort } => {
            session.dashboard_mut().set_investment_input(&investment);
            if !session.load_projects().await.is_applied() {
                anyhow::bail!("Could not fetch projects from {base_url}");
            }
            if let Some(order) = sort {
                session.dashboard_mut().sort(order.into());
            }
            print!("{}", table::render(session.dashboard()));
        }

        Commands::Match {
            investment,
            sort,
            preferences,
        } => {
            session.dashboard_mut().set_investment_input(&investment);
            if !session.load_projects().await.is_applied() {
                anyhow::bail!("Could not fetch projects from {base_url}");
            }
            preferences.apply(session.preferences_mut());
            if !session.submit_preferences().await.is_applied() {
                anyhow::bail!("Matching request to {base_url} failed");
            }
            if let Some(order) = sort {
                session.dashboard_mut().sort(order.into());
            }
            print!("{}", table::render(session.dashboard()));
        }

        Commands::Shell { investment } => {
            session.dashboard_mut().set_investment_input(&investment);
            shell::run(session).await?;
        }
    }

    Ok(())
}
