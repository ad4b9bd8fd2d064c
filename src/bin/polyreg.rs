use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use polyreg::{
    api::{DegreeMode, FitRequest, FitResponse},
    score::ScoringMethod,
};

#[derive(Parser)]
#[command(
    name = "polyreg",
    version,
    about = "Fit a least-squares polynomial to x,y points"
)]
struct Cli {
    /// File with one `x,y` point per line; omit or use `-` to read stdin
    input: Option<PathBuf>,

    /// Fit exactly this degree (1-20)
    #[arg(short, long, conflicts_with = "method")]
    degree: Option<usize>,

    /// Pick the degree automatically with this criterion (aic or bic)
    #[arg(short, long)]
    method: Option<ScoringMethod>,

    /// Evaluate the fit at this x; may be repeated
    #[arg(short, long, allow_negative_numbers = true)]
    predict: Vec<f64>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Log each candidate degree to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn mode(&self) -> DegreeMode {
        match (self.degree, self.method) {
            (Some(degree), _) => DegreeMode::Fixed(degree),
            (None, method) => DegreeMode::Auto(method.unwrap_or_default()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing_subscriber::filter::LevelFilter::DEBUG
    } else {
        tracing_subscriber::filter::LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let text = read_input(cli.input.as_ref())?;
    let request = FitRequest::from_text(&text, cli.mode()).context("Failed to read points")?;
    let response = request.run().context("Failed to fit polynomial")?;

    if cli.json {
        print_json(&response, &cli.predict)
    } else {
        print_text(&response, &cli.predict);
        Ok(())
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn print_text(response: &FitResponse, predictions: &[f64]) {
    println!("Degree:       {}", response.degree);
    let coefficients: Vec<String> = response
        .coefficients
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("Coefficients: [{}]", coefficients.join(", "));
    println!("{}", response.formula);

    for &x in predictions {
        match response.predict(x) {
            Some(y) => println!("f({x}) = {y}"),
            None => println!("f({x}) = undefined"),
        }
    }
}

fn print_json(response: &FitResponse, predictions: &[f64]) -> Result<()> {
    let predictions: Vec<_> = predictions
        .iter()
        .map(|&x| serde_json::json!({ "x": x, "y": response.predict(x) }))
        .collect();

    let mut output = serde_json::to_value(response)?;
    output["predictions"] = serde_json::Value::Array(predictions);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
