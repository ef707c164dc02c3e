use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Xorshift generator so the demo files are the same on every run
struct Rng(u64);

impl Rng {
    fn next_f64(&mut self) -> f64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x as f64 / u64::MAX as f64
    }
}

/// Write an Abricate summary: a `#FILE\tNUM_FOUND\t...` header, then one row
/// per sample. `hit_rate` is the chance a cell holds a hit instead of `.`.
fn write_summary(
    path: &Path,
    databases: &[&str],
    samples: usize,
    hit_rate: f64,
    seed: u64,
) -> std::io::Result<()> {
    let mut rng = Rng(seed.max(1));
    let mut writer = BufWriter::new(File::create(path)?);

    write!(writer, "#FILE\tNUM_FOUND")?;
    for db in databases {
        write!(writer, "\t{}", db)?;
    }
    writeln!(writer)?;

    for sample in 0..samples {
        let cells: Vec<String> = databases
            .iter()
            .map(|_| {
                if rng.next_f64() >= hit_rate {
                    return ".".to_string();
                }
                let identity = 80.0 + rng.next_f64() * 20.0;
                // Some genes are hit more than once
                if rng.next_f64() < 0.2 {
                    format!("{:.2};{:.2}", identity, 80.0 + rng.next_f64() * 20.0)
                } else {
                    format!("{:.2}", identity)
                }
            })
            .collect();
        let found = cells.iter().filter(|c| *c != ".").count();

        write!(
            writer,
            "/data/abricate/run1/sample_{:02}.tab\t{}",
            sample + 1,
            found
        )?;
        for cell in &cells {
            write!(writer, "\t{}", cell)?;
        }
        writeln!(writer)?;
    }

    writer.flush()
}

fn main() -> std::io::Result<()> {
    let dir = Path::new("test_data");
    std::fs::create_dir_all(dir)?;

    // Three databases, every cell a hit
    write_summary(
        &dir.join("small.tab"),
        &["card", "resfinder", "vfdb"],
        4,
        1.0,
        7,
    )?;

    // Enough databases to switch to the dense bar layout
    write_summary(
        &dir.join("dense.tab"),
        &["card", "resfinder", "vfdb", "argannot", "ncbi", "megares", "plasmidfinder"],
        6,
        0.6,
        42,
    )?;

    // Sparse hits, mostly no-hit markers
    write_summary(&dir.join("sparse.tab"), &["card", "vfdb"], 8, 0.15, 99)?;

    println!("Generated: small.tab, dense.tab, sparse.tab");
    Ok(())
}
