use argh::FromArgs;
use dataset_stats::medical::{
    derive_overweight, generate_correlation_heatmap, generate_indicator_chart, load_records,
    normalize_markers,
};
use std::path::PathBuf;
use tabled::{Table, Tabled};

/// Derive health indicators and plot the examination dataset charts
#[derive(FromArgs, Debug)]
struct Args {
    /// input CSV file (default: medical_examination.csv)
    #[argh(
        option,
        short = 'i',
        default = "PathBuf::from(\"medical_examination.csv\")"
    )]
    input: PathBuf,

    /// directory the charts are written into (default: working directory)
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    output_dir: PathBuf,
}

/// One long-form count row, formatted for the console summary table
#[derive(Tabled)]
struct CountRow {
    #[tabled(rename = "Cardio")]
    cardio: u8,
    #[tabled(rename = "Indicator")]
    indicator: &'static str,
    #[tabled(rename = "Value")]
    value: u8,
    #[tabled(rename = "Total")]
    total: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = argh::from_env();

    if !args.input.exists() {
        eprintln!("Error: Input file does not exist: {}", args.input.display());
        std::process::exit(1);
    }

    let mut records = load_records(&args.input)?;
    println!(
        "Loaded {} records from {}",
        records.len(),
        args.input.display()
    );

    // Normalize the shared table before either chart reads it
    derive_overweight(&mut records);
    normalize_markers(&mut records);

    let indicator_chart = generate_indicator_chart(&records, &args.output_dir)?;
    let rows: Vec<CountRow> = indicator_chart
        .counts
        .iter()
        .map(|row| CountRow {
            cardio: row.cardio,
            indicator: row.indicator,
            value: row.value,
            total: row.total,
        })
        .collect();
    println!("{}", Table::new(rows));
    println!("Chart saved to {}", indicator_chart.output_path.display());

    let heatmap = generate_correlation_heatmap(&records, &args.output_dir)?;
    println!(
        "Correlation matrix over {} columns, {} of {} records after filtering",
        heatmap.matrix.len(),
        heatmap.filtered_rows,
        records.len()
    );
    println!("Chart saved to {}", heatmap.output_path.display());

    Ok(())
}
