use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;

use lr_core::{DivinationRecord, ElementOverrides, RecordMeta, ThreePalaces, random_triplet};

#[allow(clippy::too_many_arguments)]
pub fn run(
    numbers: &[i64],
    seed: Option<u64>,
    query: Option<String>,
    no_save: bool,
    overrides: &ElementOverrides,
    db: &Path,
    passphrase: &str,
) -> Result<(), String> {
    let triplet: [u32; 3] = match numbers {
        [] => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            random_triplet(&mut rng)
        }
        [a, b, c] => [coerce(*a)?, coerce(*b)?, coerce(*c)?],
        _ => return Err("provide exactly three numbers, or none to draw them".to_string()),
    };

    let palaces = ThreePalaces::from_numbers(
        i64::from(triplet[0]),
        i64::from(triplet[1]),
        i64::from(triplet[2]),
        overrides,
    );

    let record = DivinationRecord::assemble(
        palaces,
        RecordMeta {
            time_based: false,
            time_info: None,
            numbers: Some(triplet),
            query,
        },
    );

    super::finish(&record, no_save, db, passphrase)
}

/// Validate a user-entered number; an emptied field shows up as 0 and counts
/// as 10 by convention. The engine itself takes any integer; this range is a
/// front-end rule.
fn coerce(n: i64) -> Result<u32, String> {
    match n {
        0 => Ok(10),
        1..=100 => Ok(n as u32),
        _ => Err(format!("number {n} is out of range (1-100; 0 counts as 10)")),
    }
}
