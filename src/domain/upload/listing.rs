//! File manager listing state.

use chrono::{DateTime, Utc};

use super::StoredFile;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileListing {
    pub files: Vec<StoredFile>,
    pub loading: bool,
    pub query: String,
    /// `folder/filename` of the file being deleted.
    pub deleting: Option<String>,
}

impl FileListing {
    /// Files whose name contains the query, ignoring case.
    pub fn filtered(&self) -> Vec<&StoredFile> {
        let needle = self.query.to_lowercase();
        self.files
            .iter()
            .filter(|f| f.filename.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }

    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.files
            .iter()
            .max_by_key(|f| f.modified)
            .and_then(StoredFile::modified_at)
    }

    pub fn is_deleting(&self, file: &StoredFile) -> bool {
        self.deleting.as_deref() == Some(file.key().as_str())
    }
}
