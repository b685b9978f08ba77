use crate::model::Fleet;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait Storage {
    /// Charge une flotte depuis un support.
    fn load(&self) -> anyhow::Result<Fleet>;
    /// Sauvegarde de manière atomique.
    fn save(&self, fleet: &Fleet) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Comme `load`, mais une flotte par défaut si le fichier n'existe pas.
    pub fn load_or_default(&self) -> anyhow::Result<Fleet> {
        if !self.path.exists() {
            return Ok(Fleet::default());
        }
        self.load()
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<Fleet> {
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let fleet: Fleet = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(fleet)
    }

    fn save(&self, fleet: &Fleet) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(fleet)?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }
}
