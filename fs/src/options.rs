use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesystemRepositoryOptions {
    /// Root directory of the repository. Empty means the working directory.
    pub catalogue: PathBuf,
}
