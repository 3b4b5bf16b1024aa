pub mod climate;
pub mod kc;
pub mod soil;

pub use climate::load_climate_series;
pub use kc::load_kc_schedule;
pub use soil::load_soil_parameters;

/// Scratch-file helper shared by the loader tests; avoids a tempfile
/// dev-dependency for three small CSV fixtures.
#[cfg(test)]
pub(crate) mod testutil {
    use std::path::PathBuf;

    pub struct TempCsv(pub PathBuf);

    impl Drop for TempCsv {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    pub fn write_csv(prefix: &str, content: &str) -> TempCsv {
        let mut path = std::env::temp_dir();
        path.push(format!(
            "irrisim-{}-{}-{:?}.csv",
            prefix,
            std::process::id(),
            std::thread::current().id()
        ));
        std::fs::write(&path, content).unwrap();
        TempCsv(path)
    }
}
