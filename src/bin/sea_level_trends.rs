use argh::FromArgs;
use dataset_stats::sea_level::{generate_trend_chart, load_observations};
use std::path::PathBuf;
use tabled::{Table, Tabled};

/// Fit and plot linear sea-level trends from the EPA dataset
#[derive(FromArgs, Debug)]
struct Args {
    /// input CSV file (default: epa-sea-level.csv)
    #[argh(option, short = 'i', default = "PathBuf::from(\"epa-sea-level.csv\")")]
    input: PathBuf,

    /// directory the chart is written into (default: working directory)
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    output_dir: PathBuf,
}

/// One fitted trend, formatted for the console summary table
#[derive(Tabled)]
struct FitRow {
    #[tabled(rename = "Fit")]
    name: String,
    #[tabled(rename = "Slope (in/yr)")]
    slope: String,
    #[tabled(rename = "Intercept")]
    intercept: String,
    #[tabled(rename = "r")]
    r_value: String,
    #[tabled(rename = "Std Err")]
    std_err: String,
    #[tabled(rename = "Level in 2050 (in)")]
    level_2050: String,
}

impl FitRow {
    fn new(name: &str, fit: &dataset_stats::stats::LinearFit) -> Self {
        Self {
            name: name.to_string(),
            slope: format!("{:.6}", fit.slope),
            intercept: format!("{:.4}", fit.intercept),
            r_value: format!("{:.4}", fit.r_value),
            std_err: format!("{:.6}", fit.std_err),
            level_2050: format!("{:.2}", fit.predict(2050.0)),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = argh::from_env();

    if !args.input.exists() {
        eprintln!("Error: Input file does not exist: {}", args.input.display());
        std::process::exit(1);
    }

    let observations = load_observations(&args.input)?;
    println!(
        "Loaded {} observations from {}",
        observations.len(),
        args.input.display()
    );

    let chart = generate_trend_chart(&observations, &args.output_dir)?;

    let rows = vec![
        FitRow::new("Full history", &chart.full_fit),
        FitRow::new("Since 2000", &chart.recent_fit),
    ];
    println!("{}", Table::new(rows));
    println!("Chart saved to {}", chart.output_path.display());

    Ok(())
}
