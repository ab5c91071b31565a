use clap::{Args, Parser, Subcommand};
use loan_o_meter::application::auth::Authenticator;
use loan_o_meter::application::calculator::LoanCalculator;
use loan_o_meter::config::AppConfig;
use loan_o_meter::domain::loan::{LoanCategory, LoanField};
use loan_o_meter::infrastructure::file::FileSessionStore;
use loan_o_meter::interfaces::csv::edit_reader::EditReader;
use loan_o_meter::interfaces::report::{write_bounds, write_quote};
use loan_o_meter::telemetry;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(author, version, about = "See your loan payments before they see you", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in with the demo credentials
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// End the current session
    Logout,
    /// Show whether a session is active
    Status,
    /// Print the monthly payment breakdown of one loan category
    Quote(QuoteArgs),
    /// Apply a CSV script of `category,field,value` edits and print every category
    Replay {
        /// Input edits CSV file
        input: PathBuf,
    },
    /// Print the allowed range of every field
    Bounds {
        /// Limit the listing to one category
        category: Option<LoanCategory>,
    },
}

#[derive(Args)]
struct QuoteArgs {
    /// personal, vehicle, home or business
    #[arg(default_value = "vehicle")]
    category: LoanCategory,
    #[arg(long)]
    annual_income: Option<Decimal>,
    #[arg(long)]
    loan_amount: Option<Decimal>,
    #[arg(long)]
    down_payment: Option<Decimal>,
    /// Tenure in months
    #[arg(long)]
    tenure: Option<u32>,
    /// Annual interest rate in percent
    #[arg(long)]
    interest_rate: Option<Decimal>,
}

impl QuoteArgs {
    /// Requested edits in field order, so the loan amount lands before the
    /// down payment is bounded against it.
    fn edits(&self) -> Vec<(LoanField, Decimal)> {
        [
            (LoanField::AnnualIncome, self.annual_income),
            (LoanField::LoanAmount, self.loan_amount),
            (LoanField::DownPayment, self.down_payment),
            (LoanField::TenureMonths, self.tenure.map(Decimal::from)),
            (LoanField::InterestRate, self.interest_rate),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load();
    telemetry::init(&config.telemetry).into_diagnostic()?;

    let auth = Authenticator::new(Box::new(FileSessionStore::new(&config.session.path)));
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Login { username, password } => {
            auth.attempt_login(&username, &password)
                .await
                .into_diagnostic()?;
            writeln!(out, "Signed in as {username}").into_diagnostic()?;
        }
        Command::Logout => {
            auth.logout().await.into_diagnostic()?;
            writeln!(out, "Signed out").into_diagnostic()?;
        }
        Command::Status => {
            let status = if auth.is_authenticated().await.into_diagnostic()? {
                "Signed in"
            } else {
                "Signed out"
            };
            writeln!(out, "{status}").into_diagnostic()?;
        }
        Command::Quote(args) => {
            auth.require_session().await.into_diagnostic()?;
            let mut calculator =
                LoanCalculator::new(config.bound_table().into_diagnostic()?).into_diagnostic()?;
            let category = calculator.select(args.category);

            for (field, value) in args.edits() {
                calculator
                    .update_parameter(category, field, value)
                    .into_diagnostic()?;
            }

            write_quote(
                &mut out,
                category,
                calculator.get_parameters(category),
                &calculator.get_result(category),
            )
            .into_diagnostic()?;
        }
        Command::Replay { input } => {
            auth.require_session().await.into_diagnostic()?;
            let mut calculator =
                LoanCalculator::new(config.bound_table().into_diagnostic()?).into_diagnostic()?;

            let file = File::open(input).into_diagnostic()?;
            let reader = EditReader::new(file);
            for edit in reader.edits() {
                match edit {
                    Ok(edit) => {
                        if let Err(e) =
                            calculator.update_parameter(edit.category, edit.field, edit.value)
                        {
                            warn!(category = %edit.category, field = %edit.field, "edit rejected");
                            eprintln!("Error applying edit: {}", e);
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "edit row skipped");
                        eprintln!("Error reading edit: {}", e);
                    }
                }
            }

            for (i, (category, parameters, result)) in calculator.quotes().enumerate() {
                if i > 0 {
                    writeln!(out).into_diagnostic()?;
                }
                write_quote(&mut out, category, parameters, &result).into_diagnostic()?;
            }
        }
        Command::Bounds { category } => {
            let table = config.bound_table().into_diagnostic()?;
            let categories = match category {
                Some(category) => vec![category],
                None => LoanCategory::ALL.to_vec(),
            };
            write_bounds(&mut out, &table, &categories).into_diagnostic()?;
        }
    }

    Ok(())
}
