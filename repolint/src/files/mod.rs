//! Files of one repository scan.
//!
//! The dispatcher owns every [`FileDescriptor`] of a repository in a
//! [`FileSet`]. Checkers flag requirements on the shared descriptors while
//! files are pushed and keep [`FileId`] handles to read the materialized data
//! back when they run.

mod descriptor;
mod requirements;

pub use descriptor::FileDescriptor;
pub use requirements::Requirements;

use std::ops::Index;

/// Handle to a file inside a [`FileSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId(usize);

/// Ordered files of one repository.
#[derive(Debug, Clone, Default)]
pub struct FileSet {
    files: Vec<FileDescriptor>,
}

impl FileSet {
    /// Creates a set from repository paths, keeping their order.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: paths.into_iter().map(FileDescriptor::new).collect(),
        }
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if the set has no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Returns the file behind `id`, if it belongs to this set.
    pub fn get(&self, id: FileId) -> Option<&FileDescriptor> {
        self.files.get(id.0)
    }

    /// Iterates files in tree order.
    pub fn iter(&self) -> impl Iterator<Item = &FileDescriptor> {
        self.files.iter()
    }

    /// Iterates files mutably in tree order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut FileDescriptor> {
        self.files.iter_mut()
    }

    /// Iterates files mutably together with their handles.
    pub fn entries_mut(&mut self) -> impl Iterator<Item = (FileId, &mut FileDescriptor)> {
        self.files
            .iter_mut()
            .enumerate()
            .map(|(index, file)| (FileId(index), file))
    }

    /// Number of files whose content has been fetched.
    pub fn materialized_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_materialized()).count()
    }
}

impl Index<FileId> for FileSet {
    type Output = FileDescriptor;

    fn index(&self, id: FileId) -> &Self::Output {
        &self.files[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hands_out_stable_ids() {
        let mut files = FileSet::from_paths(["README.md", "src/main.rs"]);
        let ids: Vec<FileId> = files.entries_mut().map(|(id, _)| id).collect();

        assert_eq!(files.len(), 2);
        assert_eq!(files[ids[1]].original_path(), "src/main.rs");
        assert_eq!(files.get(ids[0]).map(FileDescriptor::base_name), Some("README.md"));
    }
}
