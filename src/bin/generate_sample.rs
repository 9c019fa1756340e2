use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// (category, version prefix, max payload kg, success probability)
const BOOSTERS: [(&str, &str, f64, f64); 5] = [
    ("v1.0", "F9 v1.0", 700.0, 0.2),
    ("v1.1", "F9 v1.1", 4500.0, 0.35),
    ("FT", "F9 FT", 8000.0, 0.75),
    ("B4", "F9 B4", 9600.0, 0.6),
    ("B5", "F9 B5", 7000.0, 0.9),
];

const SITES: [&str; 4] = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];

struct Row {
    flight: i64,
    site: String,
    class: i64,
    payload: f64,
    version: String,
    category: String,
}

fn generate(n: usize, rng: &mut SimpleRng) -> Vec<Row> {
    (0..n)
        .map(|i| {
            // Later flights use newer boosters.
            let era = (i * BOOSTERS.len() / n).min(BOOSTERS.len() - 1);
            let (category, prefix, max_payload, p_success) = BOOSTERS[era];
            Row {
                flight: i as i64 + 1,
                site: rng.pick(&SITES).to_string(),
                class: i64::from(rng.next_f64() < p_success),
                payload: (rng.next_f64() * max_payload * 10.0).round() / 10.0,
                version: format!("{prefix}  B{}", 1000 + i),
                category: category.to_string(),
            }
        })
        .collect()
}

fn write_csv(rows: &[Row], path: &str) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV")?;
    writer.write_record([
        "Flight Number",
        "Launch Site",
        "class",
        "Payload Mass (kg)",
        "Booster Version",
        "Booster Version Category",
    ])?;
    for r in rows {
        writer.write_record([
            r.flight.to_string(),
            r.site.clone(),
            r.class.to_string(),
            r.payload.to_string(),
            r.version.clone(),
            r.category.clone(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_json(rows: &[Row], path: &str) -> Result<()> {
    let values: Vec<serde_json::Value> = rows
        .iter()
        .map(|r| {
            serde_json::json!({
                "Flight Number": r.flight,
                "Launch Site": r.site,
                "class": r.class,
                "Payload Mass (kg)": r.payload,
                "Booster Version": r.version,
                "Booster Version Category": r.category,
            })
        })
        .collect();
    std::fs::write(path, serde_json::to_string_pretty(&values)?).context("writing JSON")?;
    Ok(())
}

fn write_parquet(rows: &[Row], path: &str) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("Flight Number", DataType::Int64, false),
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("class", DataType::Int64, false),
        Field::new("Payload Mass (kg)", DataType::Float64, false),
        Field::new("Booster Version", DataType::Utf8, false),
        Field::new("Booster Version Category", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.flight))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.site.as_str()))),
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.class))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.payload))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.version.as_str()))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.category.as_str()))),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let rows = generate(56, &mut rng);

    write_csv(&rows, "spacex_launch_dash.csv")?;
    write_json(&rows, "spacex_launch_dash.json")?;
    write_parquet(&rows, "spacex_launch_dash.parquet")?;

    println!(
        "Wrote {} launches ({} successful) to spacex_launch_dash.{{csv,json,parquet}}",
        rows.len(),
        rows.iter().filter(|r| r.class == 1).count()
    );
    Ok(())
}
