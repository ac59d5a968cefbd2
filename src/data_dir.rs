use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    genre::Genre,
};

#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// Resolve the data directory from, in order of priority:
    /// 1. An explicit path (from --data-dir)
    /// 2. The KWICDEX_DATA_DIR environment variable
    /// 3. The XDG data directory (~/.local/share/kwicdex/)
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let root = if let Some(path) = explicit {
            path.to_path_buf()
        } else if let Ok(val) = std::env::var("KWICDEX_DATA_DIR") {
            PathBuf::from(val)
        } else {
            xdg::BaseDirectories::with_prefix("kwicdex")
                .get_data_home()
                .ok_or_else(|| {
                    Error::Config(
                        "could not determine XDG data home directory".into(),
                    )
                })?
        };

        std::fs::create_dir_all(&root)
            .map_err(|_| Error::DataDir(root.clone()))?;

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn genre_dir(&self, genre: Genre) -> PathBuf {
        self.root.join(genre.folder())
    }

    /// Folder holding the reference vocabulary for neologism detection.
    pub fn dictionary_dir(&self) -> PathBuf {
        self.genre_dir(Genre::DICTIONARY)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.root.join("kwicdex.json")
    }

    pub fn processed_json(&self) -> PathBuf {
        self.root.join("processed.json")
    }

    /// Create every genre folder that does not exist yet.
    ///
    /// Failures are logged rather than returned: a missing folder simply
    /// reads as empty.
    pub fn ensure_genre_dirs(&self) {
        for genre in Genre::ALL {
            let dir = self.genre_dir(genre);
            if let Err(e) = std::fs::create_dir_all(&dir) {
                tracing::warn!(
                    path = %dir.display(),
                    error = %e,
                    "could not create genre folder"
                );
            }
        }
    }
}
