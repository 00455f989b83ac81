//! Files a checker has accepted for the current repository.

use crate::files::{FileDescriptor, FileId, FileSet};
use crate::tools::PathTranslator;
use indexmap::IndexSet;

/// Ordered, duplicate-free set of accepted file handles.
#[derive(Debug, Clone, Default)]
pub(crate) struct AcceptedFiles {
    ids: IndexSet<FileId>,
}

impl AcceptedFiles {
    pub(crate) fn clear(&mut self) {
        self.ids.clear();
    }

    pub(crate) fn accept(&mut self, id: FileId) {
        self.ids.insert(id);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Accepted files in push order.
    pub(crate) fn iter<'a>(
        &'a self,
        files: &'a FileSet,
    ) -> impl Iterator<Item = &'a FileDescriptor> + 'a {
        self.ids.iter().filter_map(|id| files.get(*id))
    }

    /// Scratch copy paths of the accepted files that were materialized.
    pub(crate) fn local_paths(&self, files: &FileSet) -> Vec<String> {
        self.iter(files)
            .filter_map(|file| file.local_path())
            .map(|path| path.display().to_string())
            .collect()
    }

    /// Translator from the accepted files' scratch paths to their repository paths.
    pub(crate) fn translator(&self, files: &FileSet) -> PathTranslator {
        PathTranslator::new(self.iter(files).filter_map(|file| {
            let local = file.local_path()?.display().to_string();
            Some((local, file.original_path().to_string()))
        }))
    }
}
