//! Writes a synthetic `spacex_launch_dash.csv` with the same column layout as
//! the real launch records file.

use anyhow::{Context, Result};
use serde::Serialize;

const OUTPUT_PATH: &str = "spacex_launch_dash.csv";
const FLIGHTS: usize = 56;

const SITES: [&str; 4] = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];

/// (category, payload ceiling kg, success probability), oldest first.
const BOOSTERS: [(&str, f64, f64); 5] = [
    ("v1.0", 700.0, 0.2),
    ("v1.1", 4500.0, 0.3),
    ("FT", 7000.0, 0.65),
    ("B4", 9600.0, 0.55),
    ("B5", 9600.0, 0.9),
];

#[derive(Serialize)]
struct Row {
    #[serde(rename = "Flight Number")]
    flight_number: usize,
    #[serde(rename = "Launch Site")]
    launch_site: &'static str,
    class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: String,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: &'static str,
}

/// Deterministic splitmix64 so every run writes the same file.
struct SplitMix(u64);

impl SplitMix {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn main() -> Result<()> {
    let mut rng = SplitMix(2010);
    let mut writer = csv::Writer::from_path(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;

    for flight in 1..=FLIGHTS {
        // Booster generations advance with the flight number.
        let era = ((flight - 1) * BOOSTERS.len()) / FLIGHTS;
        let (category, ceiling, p_success) = BOOSTERS[era];

        let payload = (rng.next_f64() * ceiling).round();
        let class = u8::from(rng.next_f64() < p_success);

        writer.serialize(Row {
            flight_number: flight,
            launch_site: rng.pick(&SITES),
            class,
            payload_mass_kg: payload,
            booster_version: format!("F9 {category} B{:04}", 1000 + flight),
            booster_version_category: category,
        })?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {FLIGHTS} launch records to {OUTPUT_PATH}");
    Ok(())
}
