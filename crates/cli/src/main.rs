use anyhow::Result;
use clap::{Parser, Subcommand};
use linalg::AngleUnit;
use tracing_subscriber::fmt::SubscriberBuilder;

mod ops;

use ops::VectorOp;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Exact-decimal vector and line calculator")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Apply a vector operation and print a JSON report
    Vector {
        #[arg(value_enum)]
        op: VectorOp,
        /// Left operand, e.g. "8.462,7.893,-8.187"
        #[arg(long, allow_hyphen_values = true)]
        a: String,
        /// Right operand (binary operations)
        #[arg(long, allow_hyphen_values = true)]
        b: Option<String>,
        /// Scalar factor for `scale`
        #[arg(long, allow_hyphen_values = true)]
        scalar: Option<String>,
        /// Report angles in degrees instead of radians
        #[arg(long)]
        degrees: bool,
    },
    /// Compare two lines `n · x = k` and intersect them
    Line {
        #[arg(long, allow_hyphen_values = true)]
        normal1: String,
        #[arg(long, allow_hyphen_values = true, default_value = "0")]
        constant1: String,
        #[arg(long, allow_hyphen_values = true)]
        normal2: String,
        #[arg(long, allow_hyphen_values = true, default_value = "0")]
        constant2: String,
    },
    /// Print a small version JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let out = match cmd.action {
        Action::Vector {
            op,
            a,
            b,
            scalar,
            degrees,
        } => {
            let unit = if degrees {
                AngleUnit::Degrees
            } else {
                AngleUnit::Radians
            };
            tracing::info!(?op, a = %a, b = ?b, scalar = ?scalar, degrees, "vector");
            serde_json::to_value(ops::run_vector(op, &a, b.as_deref(), scalar.as_deref(), unit)?)?
        }
        Action::Line {
            normal1,
            constant1,
            normal2,
            constant2,
        } => {
            tracing::info!(
                normal1 = %normal1,
                constant1 = %constant1,
                normal2 = %normal2,
                constant2 = %constant2,
                "line"
            );
            serde_json::to_value(ops::run_line(&normal1, &constant1, &normal2, &constant2)?)?
        }
        Action::Report => serde_json::json!({
            "name": "linalg",
            "version": linalg::VERSION,
        }),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
