//! The fixed script lists, in execution order

use std::fmt;
use std::path::{Path, PathBuf};

/// Kind of script, which also names its directory under the scripts root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptCategory {
    /// Table definitions
    Schema,
    /// Bulk data loads
    Data,
    /// Foreign keys and indexes added after the load
    Constraints,
}

impl ScriptCategory {
    /// All categories in the order they run
    pub const ALL: [ScriptCategory; 3] = [Self::Schema, Self::Data, Self::Constraints];

    /// Directory holding this category's scripts
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Schema => "ddl",
            Self::Data => "import",
            Self::Constraints => "constraint",
        }
    }

    /// Script file names, in the order they run
    pub fn scripts(self) -> &'static [&'static str] {
        match self {
            Self::Schema => &[
                "characteristics.sql",
                "reviews.sql",
                "characteristic_reviews.sql",
                "reviews_photos.sql",
            ],
            Self::Data => &[
                "reviews.sql",
                "characteristic_reviews.sql",
                "reviews_photos.sql",
                "characteristics.sql",
            ],
            Self::Constraints => &["characteristic_reviews.sql", "reviews_photos.sql"],
        }
    }

    /// Full paths of this category's scripts under `root`
    pub fn script_paths(self, root: &Path) -> Vec<PathBuf> {
        let dir = root.join(self.dir_name());
        self.scripts().iter().map(|file| dir.join(file)).collect()
    }
}

impl fmt::Display for ScriptCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}
