use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct CoreConfig {
    pub data_dir: PathBuf,
}

impl CoreConfig {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Data directory under the platform's per-user data dir,
    /// falling back to the current directory when unavailable.
    pub fn resolve() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            data_dir: base.join("corvus"),
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new("corvus_data")
    }
}
