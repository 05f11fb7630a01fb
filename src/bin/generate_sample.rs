use std::path::PathBuf;

use anyhow::{Context, Result};

const HEADER: [&str; 16] = [
    "ln_dsply_seq_nbr",
    "sub_ln_itm_id",
    "unfld_ord_qty",
    "shpd_qty",
    "catlg_nbr",
    "catlg_desc",
    "desnat_desc",
    "shiploc",
    "shpschd_id",
    "commit_shpschd_dt",
    "not_b4_dt",
    "prom_dt",
    "cust_rqst_dlvry_dt",
    "prgrs_pnt",
    "ship_dt",
    "actn_status",
];

const CATALOG: [(&str, &str); 5] = [
    ("1756-L71", "CONTROLLOGIX 2MB CONTROLLER"),
    ("1756-A10", "10 SLOT CHASSIS, SERIES B"),
    ("1769-IQ16", "COMPACT 16 PT 24VDC INPUT"),
    ("2711P-T10C21D8S", "PANELVIEW PLUS 7, 10\" TOUCH"),
    ("22B-D010N104", "POWERFLEX 40 AC DRIVE"),
];

const LOCATIONS: [&str; 4] = ["TORONTO DC", "MONTREAL DC", "CANADA RESALE", "MILWAUKEE PLANT"];

const PROGRESS: [&str; 5] = ["Entered", "Scheduled", "Shipped", "Cancelled", "Cancelled by Customer"];

/// splitmix64: one word of state, good enough for repeatable sample data.
struct SampleRng(u64);

impl SampleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len() as u64) as usize]
    }
}

/// `2015-09-DD` style date within the month.
fn date(day: u64) -> String {
    format!("2015-09-{:02}", day.clamp(1, 30))
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_data/order_status.csv"));
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let mut rng = SampleRng(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    writer.write_record(HEADER)?;

    let mut rows = 0;
    for line in 1..=40u64 {
        let (catalog_nbr, catalog_desc) = CATALOG[rng.below(CATALOG.len() as u64) as usize];
        let sub_lines = 1 + rng.below(3);

        for sub in 0..sub_lines {
            let progress = rng.pick(&PROGRESS);
            let ordered = 1 + rng.below(20);
            let shipped = if progress == "Shipped" { ordered } else { 0 };
            let promise = 5 + rng.below(20);

            let record = [
                (line * 10).to_string(),
                (sub * 10).to_string(),
                (ordered - shipped).to_string(),
                shipped.to_string(),
                catalog_nbr.to_string(),
                catalog_desc.to_string(),
                format!("PANEL {}", 1 + rng.below(9)),
                rng.pick(&LOCATIONS).to_string(),
                format!("{}-{}", 1 + rng.below(3), line),
                date(promise - 2),
                date(promise - 4),
                date(promise),
                date(promise + 3),
                progress.to_string(),
                if shipped > 0 { date(promise + 1) } else { String::new() },
                if rng.below(6) == 0 { "Y" } else { "N" }.to_string(),
            ];
            writer.write_record(&record)?;
            rows += 1;
        }
    }
    writer.flush()?;

    println!("Wrote {rows} order lines to {}", output_path.display());
    Ok(())
}
