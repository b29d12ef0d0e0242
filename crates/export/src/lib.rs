//! Export helpers for trajectory text files and JSON run summaries.

pub mod trajectory {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use sat_core::vector::Vector3;

    /// Create a truncating writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write one `x y z` line. No header is ever written.
    ///
    /// Components use shortest round-trip formatting, so parsing a line back
    /// yields the exact `f64` values that were written.
    pub fn write_position(writer: &mut dyn Write, position: &Vector3) -> io::Result<()> {
        writeln!(writer, "{}", position)
    }
}

pub mod summary {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use sat_core::vector::Vector3;
    use serde::Serialize;
    use serde_json::to_writer_pretty;

    /// Run diagnostics written next to the trajectory.
    #[derive(Debug, Clone, Serialize)]
    pub struct RunSummary {
        pub trajectory_path: String,
        pub steps: usize,
        pub time_step_s: f64,
        pub elapsed_s: f64,
        pub initial_energy_j_kg: f64,
        pub final_energy_j_kg: f64,
        pub max_relative_energy_drift: f64,
        pub min_altitude_km: f64,
        pub max_altitude_km: f64,
        pub period_estimate_s: Option<f64>,
        pub final_position_m: Vector3,
        pub final_velocity_m_s: Vector3,
    }

    /// Write the summary as pretty-printed JSON, creating parent directories as needed.
    pub fn write_summary(path: &Path, summary: &RunSummary) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut writer = BufWriter::new(File::create(path)?);
        to_writer_pretty(&mut writer, summary)?;
        writeln!(writer)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::summary::{RunSummary, write_summary};
    use super::trajectory::{write_position, writer_for_path};
    use sat_core::vector::Vector3;
    use std::fs;
    use std::io::Write;

    #[test]
    fn position_lines_round_trip_exactly() {
        let mut buf: Vec<u8> = Vec::new();
        let p = Vector3::new(7_070_601.403_158_912, 75_000.0, -0.1);
        write_position(&mut buf, &p).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert!(line.ends_with('\n'));
        let fields: Vec<f64> = line
            .split_whitespace()
            .map(|f| f.parse().unwrap())
            .collect();
        assert_eq!(fields, vec![p.x, p.y, p.z]);
    }

    #[test]
    fn writer_creates_parents_and_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/run/trajectory.txt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "stale line\nstale line\n").unwrap();

        {
            let mut w = writer_for_path(&path).unwrap();
            write_position(&mut *w, &Vector3::new(1.0, 2.0, 3.0)).unwrap();
            w.flush().unwrap();
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "1 2 3\n");
    }

    #[test]
    fn summary_is_valid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/summary.json");
        let summary = RunSummary {
            trajectory_path: "trajectory_data.txt".into(),
            steps: 3,
            time_step_s: 10.0,
            elapsed_s: 30.0,
            initial_energy_j_kg: -2.8e7,
            final_energy_j_kg: -2.8e7,
            max_relative_energy_drift: 1e-9,
            min_altitude_km: 699.9,
            max_altitude_km: 700.0,
            period_estimate_s: Some(5_898.7),
            final_position_m: Vector3::new(1.0, 2.0, 3.0),
            final_velocity_m_s: Vector3::new(4.0, 5.0, 6.0),
        };
        write_summary(&path, &summary).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["steps"], 3);
        assert_eq!(value["trajectory_path"], "trajectory_data.txt");
        assert_eq!(value["final_velocity_m_s"]["z"], 6.0);
    }
}
