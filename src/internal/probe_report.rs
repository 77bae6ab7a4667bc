#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use plotters::prelude::*;
use probemap::{HashTable, TableConfig};
use rand::Rng;

const TABLE_SIZE: usize = 100_000;
// Load ratios from 0.1 to 0.95
const NUM_LOAD_RATIOS: usize = 10;
// Share of the inserted keys removed again in the tombstone scenario
const REMOVED_SHARE: f64 = 0.25;

const SCENARIOS: [&str; 3] =
    ["Successful lookup", "Unsuccessful lookup", "Successful lookup, 25% tombstones"];

#[derive(Debug, Default, Clone, Copy)]
struct ProbeStats {
    average: f64,
    worst: usize,
}

fn measure<I, S>(table: &HashTable<usize>, keys: I) -> Result<ProbeStats, probemap::HashTableError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut total = 0;
    let mut count = 0;
    let mut worst = 0;
    for key in keys {
        let probes = table.probe_length(key.as_ref())?;
        total += probes;
        count += 1;
        worst = worst.max(probes);
    }
    let average = if count == 0 { 0.0 } else { total as f64 / count as f64 };
    Ok(ProbeStats { average, worst })
}

// The threshold is just under 1 so the sweep never triggers a resize
fn fixed_table() -> Result<HashTable<usize>, probemap::HashTableError> {
    HashTable::with_config(
        TableConfig::new().with_initial_capacity(TABLE_SIZE).with_max_load_ratio(0.99),
    )
}

fn random_keys(rng: &mut impl Rng, prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|_| format!("{prefix}{:016x}", rng.random::<u64>())).collect()
}

fn draw_chart(
    path: &str,
    caption: &str,
    y_desc: &str,
    num_keys: &[usize],
    series: &[Vec<f64>],
) -> Result<(), Box<dyn std::error::Error>> {
    let font_family = "sans-serif";
    let colors = [RGBColor(220, 50, 50), RGBColor(50, 90, 220), RGBColor(50, 180, 50)];

    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_y = series.iter().flatten().fold(1.0_f64, |max, &y| max.max(y)) * 1.1;
    let x_labels: Vec<String> = num_keys.iter().map(ToString::to_string).collect();

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (font_family, 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..num_keys.len() - 1, 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_labels(num_keys.len())
        .x_label_formatter(&|x| x_labels.get(*x).cloned().unwrap_or_default())
        .x_desc("Number of Keys Inserted")
        .y_desc(y_desc)
        .axis_desc_style((font_family, 16))
        .draw()?;

    for (scenario_idx, &scenario) in SCENARIOS.iter().enumerate() {
        let color = colors[scenario_idx % colors.len()];
        let line_style = ShapeStyle::from(&color).stroke_width(2);
        let points: Vec<(usize, f64)> = series[scenario_idx].iter().copied().enumerate().collect();

        chart
            .draw_series(LineSeries::new(points.clone(), line_style))?
            .label(scenario)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));
        chart.draw_series(points.into_iter().map(|point| Circle::new(point, 4, color.filled())))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;
    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let load_ratios: Vec<f64> = (0..NUM_LOAD_RATIOS)
        .map(|i| 0.1 + (0.95 - 0.1) * (i as f64) / ((NUM_LOAD_RATIOS - 1) as f64))
        .collect();
    let num_keys: Vec<usize> =
        load_ratios.iter().map(|&load| (TABLE_SIZE as f64 * load) as usize).collect();

    println!("Load ratios: {load_ratios:.2?}");
    println!("Number of keys: {num_keys:?}");

    let mut rng = rand::rng();
    let max_keys_needed = num_keys.iter().copied().max().unwrap_or_default();
    let keys = random_keys(&mut rng, "", max_keys_needed);
    let absent = random_keys(&mut rng, "absent-", 1_000);

    let mut average_probes: Vec<Vec<f64>> = vec![Vec::new(); SCENARIOS.len()];
    let mut worst_probes: Vec<Vec<f64>> = vec![Vec::new(); SCENARIOS.len()];

    for &n_keys in &num_keys {
        println!("Testing with {n_keys} keys");

        let mut table = fixed_table()?;
        for (i, key) in keys.iter().take(n_keys).enumerate() {
            table.set(key.as_str(), i)?;
        }
        let hit = measure(&table, keys.iter().take(n_keys))?;
        let miss = measure(&table, &absent)?;

        // Same number of occupied slots, but a quarter of them are tombstones
        let removed = (n_keys as f64 * REMOVED_SHARE) as usize;
        for key in keys.iter().take(removed) {
            table.remove(key)?;
        }
        let tombstoned = measure(&table, keys.iter().take(n_keys).skip(removed))?;

        for (scenario_idx, stats) in [hit, miss, tombstoned].into_iter().enumerate() {
            println!(
                "  {}: Avg probes = {:.2}, Worst = {}",
                SCENARIOS[scenario_idx], stats.average, stats.worst
            );
            average_probes[scenario_idx].push(stats.average);
            worst_probes[scenario_idx].push(stats.worst as f64);
        }
    }

    draw_chart(
        "average_probe_length.png",
        "Linear Probing: Average Probe Length",
        "Average Probes per Lookup",
        &num_keys,
        &average_probes,
    )?;
    draw_chart(
        "worst_case_probe_length.png",
        "Linear Probing: Worst-Case Probe Length",
        "Worst-Case Probes per Lookup",
        &num_keys,
        &worst_probes,
    )?;

    println!("Generated plot images: average_probe_length.png, worst_case_probe_length.png");

    Ok(())
}
