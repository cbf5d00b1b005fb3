//! Reading and writing specimen measurement files.
//!
//! A specimen file is plain text with one specimen per line: a name followed
//! by 14 space-separated measurements. Values are written with up to four
//! decimal places and no trailing zeros, so a loaded and re-saved file keeps
//! its numbers in the same shape.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::error::{ModelError, ModelResult};
use crate::model::Specimen;

/// One line of a specimen file: the name and 14 measurements, in file order.
/// Lengths are in cm, masses in grams.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecimenRecord {
    pub name: String,
    /// Pivot to A2 insertion on the ascending process of the articular.
    pub a2_in_lever: f64,
    /// Pivot to A3 insertion on the medial face of the mandible.
    pub a3_in_lever: f64,
    /// Pivot to the interoperculomandibular ligament insertion.
    pub open_in_lever: f64,
    /// Pivot to the anterior jaw tip.
    pub out_lever: f64,
    /// A2 origin to insertion.
    pub a2_length: f64,
    /// A3 origin to insertion, tendon included.
    pub a3_length: f64,
    /// A3 tendon length.
    pub a3_tendon_length: f64,
    /// A2 origin to the pivot.
    pub a2_joint_dist: f64,
    /// A3 origin to the pivot.
    pub a3_joint_dist: f64,
    /// A2 insertion to A3 insertion.
    pub a2_a3_insertion_dist: f64,
    /// A2 insertion to jaw tip.
    pub dorsal_length: f64,
    /// Ligament insertion to jaw tip.
    pub ventral_length: f64,
    /// A2 muscle mass.
    pub a2_mass: f64,
    /// A3 muscle mass.
    pub a3_mass: f64,
}

impl FromStr for SpecimenRecord {
    type Err = ModelError;

    fn from_str(line: &str) -> ModelResult<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 15 {
            return Err(ModelError::MalformedRecord {
                reason: format!("expected a name and 14 measurements, got {} fields", tokens.len()),
            });
        }

        let mut values = [0.0f64; 14];
        for (i, token) in tokens[1..].iter().enumerate() {
            values[i] = token.parse().map_err(|_| ModelError::MalformedRecord {
                reason: format!("field {} is not a number: {:?}", i + 2, token),
            })?;
        }

        Ok(SpecimenRecord {
            name: tokens[0].to_string(),
            a2_in_lever: values[0],
            a3_in_lever: values[1],
            open_in_lever: values[2],
            out_lever: values[3],
            a2_length: values[4],
            a3_length: values[5],
            a3_tendon_length: values[6],
            a2_joint_dist: values[7],
            a3_joint_dist: values[8],
            a2_a3_insertion_dist: values[9],
            dorsal_length: values[10],
            ventral_length: values[11],
            a2_mass: values[12],
            a3_mass: values[13],
        })
    }
}

impl SpecimenRecord {
    /// The record as a specimen-file line.
    pub fn to_line(&self) -> String {
        let values = [
            self.a2_in_lever,
            self.a3_in_lever,
            self.open_in_lever,
            self.out_lever,
            self.a2_length,
            self.a3_length,
            self.a3_tendon_length,
            self.a2_joint_dist,
            self.a3_joint_dist,
            self.a2_a3_insertion_dist,
            self.dorsal_length,
            self.ventral_length,
            self.a2_mass,
            self.a3_mass,
        ];
        let mut line = self.name.clone();
        for value in values {
            line.push(' ');
            line.push_str(&format_measure(value));
        }
        line
    }
}

/// Format a measurement with up to four decimal places and no trailing
/// zeros.
pub fn format_measure(value: f64) -> String {
    let mut s = format!("{:.4}", value);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

/// Load every parsable specimen from a file.
///
/// Blank lines are skipped; lines that fail to parse or describe an
/// impossible jaw are logged and skipped rather than failing the whole
/// file.
pub fn load_specimens<P: AsRef<Path>>(path: P) -> Result<Vec<Specimen>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading specimen file {}", path.display()))?;

    let mut specimens = Vec::new();
    for (line_no, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: SpecimenRecord = match line.parse() {
            Ok(record) => record,
            Err(e) => {
                log::warn!("{}:{}: skipping line: {}", path.display(), line_no + 1, e);
                continue;
            }
        };
        match Specimen::from_record(&record) {
            Ok(specimen) => specimens.push(specimen),
            Err(e) => {
                log::warn!(
                    "{}:{}: skipping specimen {:?}: {}",
                    path.display(),
                    line_no + 1,
                    record.name,
                    e
                );
            }
        }
    }

    log::info!(
        "Loaded {} specimens from {}",
        specimens.len(),
        path.display()
    );
    Ok(specimens)
}

/// Write specimens to a file, one record per line, in their current state.
pub fn save_specimens<P: AsRef<Path>>(path: P, specimens: &[Specimen]) -> Result<()> {
    let path = path.as_ref();
    let mut contents = String::new();
    for specimen in specimens {
        contents.push_str(&specimen.to_record().to_line());
        contents.push('\n');
    }
    fs::write(path, contents)
        .with_context(|| format!("writing specimen file {}", path.display()))?;
    log::info!("Saved {} specimens to {}", specimens.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TESTDAT1: &str =
        "Testdat1 0.598 0.510 0.246 1.509 1.085 2.180 0.60 0.689 1.796 0.420 1.051 1.695 0.12 0.2";

    #[test]
    fn test_parse_record() {
        let record: SpecimenRecord = TESTDAT1.parse().unwrap();
        assert_eq!(record.name, "Testdat1");
        assert!((record.a2_in_lever - 0.598).abs() < 1e-12);
        assert!((record.a3_tendon_length - 0.6).abs() < 1e-12);
        assert!((record.a3_mass - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        let err = "Testdat1 0.598 0.510".parse::<SpecimenRecord>().unwrap_err();
        assert!(matches!(err, ModelError::MalformedRecord { .. }));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let line = TESTDAT1.replace("1.509", "out-lever");
        let err = line.parse::<SpecimenRecord>().unwrap_err();
        assert!(matches!(err, ModelError::MalformedRecord { .. }));
    }

    #[test]
    fn test_format_measure() {
        assert_eq!(format_measure(0.598), "0.598");
        assert_eq!(format_measure(2.18), "2.18");
        assert_eq!(format_measure(0.6), "0.6");
        assert_eq!(format_measure(1.0), "1");
        assert_eq!(format_measure(0.12345), "0.1235");
    }

    #[test]
    fn test_record_line_round_trip() {
        let record: SpecimenRecord = TESTDAT1.parse().unwrap();
        let expected =
            "Testdat1 0.598 0.51 0.246 1.509 1.085 2.18 0.6 0.689 1.796 0.42 1.051 1.695 0.12 0.2";
        assert_eq!(record.to_line(), expected);
        // and the normalized line parses back to the same record
        let reparsed: SpecimenRecord = record.to_line().parse().unwrap();
        assert_eq!(reparsed, record);
    }
}
