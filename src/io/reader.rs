//! Load list reader.
//!
//! The format is one load per line, fields separated by spaces, after a
//! header line that is skipped:
//!
//! ```text
//! loadNumber pickup dropoff
//! 1 (-50.1,80.0) (90.1,12.2)
//! 2 (-24.5,-19.2) (98.5,1.8)
//! ```

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::InputError;
use crate::models::{Load, LoadId, Point};

/// Reads loads from a file.
pub fn read_loads_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Load>, InputError> {
    let file = File::open(path)?;
    read_loads(BufReader::new(file))
}

/// Reads loads from any byte source, in record order.
///
/// Runs of spaces count as one separator. Each record must hold exactly a
/// load number, a pickup point and a dropoff point; load numbers must be
/// unique.
///
/// # Examples
///
/// ```
/// use u_dispatch::io::read_loads;
///
/// let text = "loadNumber pickup dropoff\n1 (0,0) (0,10)\n2 (0,10) (0,20)\n";
/// let loads = read_loads(text.as_bytes()).unwrap();
/// assert_eq!(loads.len(), 2);
/// assert_eq!(loads[1].id(), 2);
/// ```
pub fn read_loads<R: Read>(reader: R) -> Result<Vec<Load>, InputError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut loads = Vec::new();
    let mut seen: HashSet<LoadId> = HashSet::new();

    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 2);

        let fields: Vec<&str> = record.iter().filter(|f| !f.is_empty()).collect();
        if fields.len() != 3 {
            return Err(InputError::FieldCount {
                line,
                fields: fields.iter().map(|f| f.to_string()).collect(),
            });
        }

        let id = fields[0]
            .parse::<LoadId>()
            .map_err(|_| InputError::InvalidId {
                line,
                value: fields[0].to_string(),
            })?;
        let pickup = fields[1]
            .parse::<Point>()
            .map_err(|source| InputError::InvalidPickup {
                line,
                value: fields[1].to_string(),
                source,
            })?;
        let dropoff = fields[2]
            .parse::<Point>()
            .map_err(|source| InputError::InvalidDropoff {
                line,
                value: fields[2].to_string(),
                source,
            })?;

        if !seen.insert(id) {
            return Err(InputError::DuplicateId { line, id });
        }
        loads.push(Load::new(id, pickup, dropoff));
    }

    Ok(loads)
}
