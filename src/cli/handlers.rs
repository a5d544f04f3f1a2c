use std::time::Instant;

use crate::{
    core::{
        bounds::{batch_range, samples_that_fit, terminal_width},
        color::{ColorId, ColorMap},
        config::{ColorSpec, RenderOptions},
        data::{Series, read_series_from_path},
        error::ChartError,
        rng::Lcg,
    },
    render::Composer,
};

use super::parse::{ChartArgs, DemoArgs, PlotArgs};

/// Rotation used by `demo` when no colours are given.
const DEMO_PALETTE: [&str; 6] = ["red", "lime", "blue", "yellow", "fuchsia", "aqua"];

fn options(a: &ChartArgs) -> Result<RenderOptions, ChartError> {
    let b = RenderOptions::builder()
        .height_opt(a.height)
        .offset(a.offset)
        .format(a.format.as_str());
    match a.colors.as_slice() {
        [] => b.build(),
        [one] => b.color(one.clone()).build(),
        many => b.colors(many.iter().cloned()).build(),
    }
}

/// Keep only the newest samples that fit on screen.
fn fit_to_terminal(series: &mut [Series], opts: &RenderOptions) {
    let label_w = batch_range(series).map_or(0, |(lo, hi)| {
        [lo, hi]
            .map(|v| opts.format.format(v).chars().count())
            .into_iter()
            .max()
            .unwrap_or(0)
    });
    let keep = samples_that_fit(terminal_width(), opts.offset, label_w).max(2);
    for s in series {
        if s.len() > keep {
            s.drain(..s.len() - keep);
        }
    }
}

fn draw(series: &[Series], opts: &RenderOptions, debug: bool) -> Result<(), ChartError> {
    let t_render = Instant::now();
    let chart = Composer::default().plot(series, opts)?;
    if debug {
        eprintln!(
            "render: {} µs   ({} series × {} points)",
            t_render.elapsed().as_micros(),
            series.len(),
            series.first().map_or(0, Vec::len)
        );
    }
    println!("{chart}");
    Ok(())
}

pub fn plot(a: PlotArgs) -> Result<(), ChartError> {
    let t_ingest = Instant::now();
    let mut series = read_series_from_path(&a.file)?;
    let dur_ingest = t_ingest.elapsed().as_micros();

    let opts = options(&a.chart)?;
    if a.fit {
        fit_to_terminal(&mut series, &opts);
    }
    if a.chart.debug {
        eprintln!("CSV ingest: {dur_ingest} µs   ({} columns)", series.len());
    }
    draw(&series, &opts, a.chart.debug)
}

pub fn demo(a: &DemoArgs) -> Result<(), ChartError> {
    let mut rng = Lcg::seed(a.seed);
    #[allow(clippy::cast_precision_loss)]
    let series: Vec<Series> = (0..a.series.max(1))
        .map(|i| {
            rng.walk(a.points, i as f64 * 2.0, a.sigma)
                .into_iter()
                .map(Some)
                .collect()
        })
        .collect();

    let mut opts = options(&a.chart)?;
    if a.chart.colors.is_empty() {
        let palette: Vec<ColorId> = DEMO_PALETTE
            .iter()
            .cycle()
            .take(series.len())
            .map(|&c| c.into())
            .collect();
        opts = RenderOptions {
            color: Some(ColorSpec::PerSeries(palette)),
            ..opts
        };
    }
    draw(&series, &opts, a.chart.debug)
}

/// Print every built-in colour name in its own colour.
pub fn colors() {
    let map = ColorMap::xterm();
    println!("\nPossible colors (or any code 0-255):");
    for (name, idx) in map.names() {
        match map.lookup(&ColorId::from(idx)) {
            Ok(pair) => println!("{idx:>4}  {}", pair.wrap(name)),
            Err(_) => println!("{idx:>4}  {name}"),
        }
    }
    println!();
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "ascii-chart";
    println!(
        "
Example invocations
-------------------
• Single column     : {bin} plot temps.csv
• Fixed height      : {bin} plot temps.csv --height 10
• Per-series colors : {bin} plot cpu_mem.csv --color red --color 33
• Narrow labels     : {bin} plot temps.csv --format '%5.1f '
• From stdin        : seq 1 20 | {bin} plot -
• Fit the terminal  : {bin} plot long.csv --fit
• Random walks      : {bin} demo --series 3 --points 70 --sigma 0.8
"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart_args(colors: Vec<ColorId>) -> ChartArgs {
        ChartArgs {
            height: Some(4),
            offset: 0,
            format: "%5.1f ".into(),
            colors,
            debug: false,
        }
    }

    #[test]
    fn one_color_is_shared_many_are_per_series() {
        let o = options(&chart_args(vec!["red".into()])).unwrap();
        assert_eq!(o.color, Some(ColorSpec::Single("red".into())));
        let o = options(&chart_args(vec!["red".into(), ColorId::Code(4)])).unwrap();
        assert_eq!(
            o.color,
            Some(ColorSpec::PerSeries(vec!["red".into(), ColorId::Code(4)]))
        );
        assert_eq!(options(&chart_args(vec![])).unwrap().color, None);
    }

    #[test]
    fn fit_keeps_newest_samples() {
        let opts = options(&chart_args(vec![])).unwrap();
        let long: Series = (0..10_000).map(|v| Some(f64::from(v))).collect();
        let mut batch = vec![long];
        fit_to_terminal(&mut batch, &opts);
        let kept = batch[0].len();
        assert!(kept < 10_000);
        assert_eq!(batch[0].last(), Some(&Some(9_999.0)));
    }
}
