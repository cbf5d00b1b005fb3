//! End-to-end tests: specimen file in, contraction sweep, CSV files out.

use std::fs;
use std::path::PathBuf;

use fish_jaw_sim::{
    io::{self, SpecimenRecord},
    muscle::MuscleRole,
    sim, SimParameters, Specimen, SweepExporter,
};

const TESTDAT1: &str =
    "Testdat1 0.598 0.510 0.246 1.509 1.085 2.180 0.60 0.689 1.796 0.420 1.051 1.695 0.12 0.2";

fn testdat1() -> Specimen {
    let record: SpecimenRecord = TESTDAT1.parse().unwrap();
    Specimen::from_record(&record).unwrap()
}

/// A unique scratch directory under the system temp dir.
fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "fish_jaw_sim_{}_{}",
        tag,
        std::process::id()
    ));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    dir
}

#[test]
fn test_load_specimens_skips_bad_lines() {
    let dir = scratch_dir("load");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("specimens.dat");
    fs::write(
        &path,
        format!(
            "{}\n\nnot a specimen line\n{}\n",
            TESTDAT1,
            TESTDAT1.replace("Testdat1", "Testdat2")
        ),
    )
    .unwrap();

    let specimens = io::load_specimens(&path).unwrap();
    assert_eq!(specimens.len(), 2);
    assert_eq!(specimens[0].name(), "Testdat1");
    assert_eq!(specimens[1].name(), "Testdat2");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = scratch_dir("save");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("specimens.dat");

    let specimen = testdat1();
    io::save_specimens(&path, &[specimen]).unwrap();

    let reloaded = io::load_specimens(&path).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded[0].to_record().to_line(), testdat1().to_record().to_line());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_sweep_bins_are_physically_consistent() {
    let specimen = testdat1();
    let params = SimParameters::default();

    let result = sim::run_sweep(&specimen, &params);

    for bins in [&result.a2_bins, &result.a3_bins] {
        assert_eq!(bins.len(), params.sweep_bins as usize);

        let mut previous_time = 0.0;
        for (i, bin) in bins.iter().enumerate() {
            // one record per bin, in order, none dropped
            assert_eq!(bin.bin as usize, i + 1);
            // time only runs forward
            assert!(bin.time_ms > previous_time);
            previous_time = bin.time_ms;

            // Hill: force and velocity fractions trade off within [0, 1]
            assert!(bin.force_fraction >= 0.0 && bin.force_fraction <= 1.0);
            assert!(bin.velocity_fraction >= 0.0 && bin.velocity_fraction <= 1.0);

            assert!(bin.muscle_force_n > 0.0);
            assert!(bin.work_j > 0.0);
            assert!(bin.power_w > 0.0);
        }

        // the last bin lands on the closed jaw
        let last = &bins[bins.len() - 1];
        assert!(last.jaw_angle_deg.abs() < 1e-6);
        assert!((last.contraction_pct / 100.0
            - specimen.max_contraction(
                if last.muscle == "A2" { MuscleRole::A2 } else { MuscleRole::A3 },
                &params
            ))
        .abs()
            < 1e-6);
    }
}

#[test]
fn test_closed_summary_matches_bins() {
    let specimen = testdat1();
    let params = SimParameters::default();
    let bins = params.sweep_bins as f64;

    let result = sim::run_sweep(&specimen, &params);

    let a2_mean: f64 = result.a2_bins.iter().map(|b| b.muscle_force_n).sum::<f64>() / bins;
    assert!((result.closed.a2_mean_force_n - a2_mean).abs() < 1e-9);

    let a3_mean_torque: f64 = result.a3_bins.iter().map(|b| b.torque_nm).sum::<f64>() / bins;
    assert!((result.closed.a3_mean_torque_nm - a3_mean_torque).abs() < 1e-9);

    // the bilateral bite force doubles the per-side sum
    let last = &result.a2_bins[result.a2_bins.len() - 1];
    assert!(
        (last.bilateral_bite_force_n - result.closed.total_bite_force_n).abs() < 1e-9
    );
}

#[test]
fn test_exporter_writes_four_csv_files() {
    let dir = scratch_dir("export");
    let specimen = testdat1();
    let params = SimParameters::default();

    let mut exporter = SweepExporter::new(&dir, Some("run1")).unwrap();
    exporter.record(&sim::run_sweep(&specimen, &params)).unwrap();
    let paths = exporter.finish().unwrap();

    let names: Vec<String> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        [
            "run1.OpenSum.csv",
            "run1.CloseSum.csv",
            "run1.A2Sim.csv",
            "run1.A3Sim.csv",
        ]
    );

    // summaries: header plus one row; sweeps: header plus one row per bin
    for (path, rows) in paths.iter().zip([1usize, 1, 20, 20]) {
        let contents = fs::read_to_string(path).unwrap();
        assert_eq!(
            contents.lines().count(),
            rows + 1,
            "{} has the wrong row count",
            path.display()
        );
    }
    let open = fs::read_to_string(&paths[0]).unwrap();
    assert!(open.lines().next().unwrap().contains("gape_cm"));
    assert!(open.contains("Testdat1"));

    fs::remove_dir_all(&dir).unwrap();
}
