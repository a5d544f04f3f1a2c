use clap::{Parser, Subcommand};

use crate::core::{color::ColorId, constants::DEFAULT_FORMAT};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "ascii-chart",
    about = "Line charts drawn with Unicode box glyphs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Plot the columns of a CSV file, one series per column
    Plot(PlotArgs),
    /// Plot seeded random walks
    Demo(DemoArgs),
    /// Show built-in color names
    Colors,
    /// Print example invocations
    Examples,
}

/// Options shared by every drawing command.
#[derive(clap::Args, Debug)]
pub struct ChartArgs {
    /// Fixed number of rows (auto if omitted)
    #[arg(long)]
    pub height: Option<usize>,

    /// Extra left margin before the axis
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// printf-style label template
    #[arg(long, default_value = DEFAULT_FORMAT, allow_hyphen_values = true)]
    pub format: String,

    /// Color name or 0-255 code; repeat once per series
    #[arg(long = "color", value_name = "COLOR")]
    pub colors: Vec<ColorId>,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}

/// `ascii-chart plot …`
#[derive(Parser, Debug)]
pub struct PlotArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Drop the oldest samples so the chart fits the terminal width
    #[arg(long)]
    pub fit: bool,

    #[command(flatten)]
    pub chart: ChartArgs,
}

/// `ascii-chart demo …`
#[derive(Parser, Debug)]
pub struct DemoArgs {
    /// Number of walks to overlay
    #[arg(long, default_value_t = 2)]
    pub series: usize,
    #[arg(long, default_value_t = 60)]
    pub points: usize,
    #[arg(long, default_value_t = 1.0)]
    pub sigma: f64,
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    #[command(flatten)]
    pub chart: ChartArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_colors_collect_in_order() {
        let cli = Cli::try_parse_from([
            "ascii-chart", "plot", "data.csv", "--color", "red", "--color", "33", "--height", "8",
        ])
        .unwrap();
        let Command::Plot(a) = cli.cmd else {
            panic!("expected plot");
        };
        assert_eq!(a.file, "data.csv");
        assert_eq!(a.chart.height, Some(8));
        assert_eq!(
            a.chart.colors,
            vec![ColorId::Name("red".into()), ColorId::Code(33)]
        );
        assert_eq!(a.chart.format, DEFAULT_FORMAT);
    }

    #[test]
    fn demo_defaults() {
        let cli = Cli::try_parse_from(["ascii-chart", "demo"]).unwrap();
        let Command::Demo(a) = cli.cmd else {
            panic!("expected demo");
        };
        assert_eq!((a.series, a.points, a.seed), (2, 60, 42));
        assert!(a.chart.colors.is_empty());
    }
}
