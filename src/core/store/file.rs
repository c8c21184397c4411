//! TOML-file-backed record store

use super::{Dataset, MemoryStore, RecordStore, StoreResult};
use crate::core::models::{CatalogCourse, CompletionRecord, Profile, Program, Requirement, ScheduleAssignment};
use crate::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// A [`MemoryStore`] persisted to a TOML data file.
///
/// Reads are served from memory. Each write is staged on a copy and becomes
/// visible only once the file has been rewritten.
/// A missing file opens as an empty store and is created on the first write.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl FileStore {
    /// Open the data file at `path`
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let inner = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let dataset: Dataset = toml::from_str(&content)?;
            debug!(
                "Loaded {} program(s), {} catalog course(s), {} student(s) from {}",
                dataset.programs.len(),
                dataset.catalog.len(),
                dataset.students.len(),
                path.display()
            );
            MemoryStore::from_dataset(dataset)
        } else {
            debug!("Data file {} not found, starting empty", path.display());
            MemoryStore::new()
        };
        Ok(Self { path, inner })
    }

    /// Location of the data file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add or replace a program and persist
    ///
    /// # Errors
    /// Returns an error if the data cannot be written
    pub fn add_program(&mut self, program: Program) -> StoreResult<()> {
        self.commit(|staged| {
            staged.add_program(program);
            Ok(())
        })
    }

    /// Apply `change` to a copy of the records, write the copy, and keep it
    /// only if the write succeeds. A failed write leaves the store untouched.
    fn commit<T, F>(&mut self, change: F) -> StoreResult<T>
    where
        F: FnOnce(&mut MemoryStore) -> StoreResult<T>,
    {
        let mut staged = self.inner.clone();
        let out = change(&mut staged)?;
        write_snapshot(&self.path, &staged)?;
        self.inner = staged;
        Ok(out)
    }
}

fn write_snapshot(path: &Path, store: &MemoryStore) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let toml_str = toml::to_string_pretty(&store.to_dataset())?;
    fs::write(path, toml_str)?;
    Ok(())
}

impl RecordStore for FileStore {
    fn program_by_code(&self, code: &str) -> StoreResult<Option<Program>> {
        self.inner.program_by_code(code)
    }

    fn program_by_name(&self, name: &str) -> StoreResult<Option<Program>> {
        self.inner.program_by_name(name)
    }

    fn requirements(&self, program_id: &str) -> StoreResult<Vec<Requirement>> {
        self.inner.requirements(program_id)
    }

    fn completions(&self, student: &str) -> StoreResult<Vec<CompletionRecord>> {
        self.inner.completions(student)
    }

    fn schedule(&self, student: &str) -> StoreResult<Vec<ScheduleAssignment>> {
        self.inner.schedule(student)
    }

    fn profile(&self, student: &str) -> StoreResult<Option<Profile>> {
        self.inner.profile(student)
    }

    fn catalog(&self) -> StoreResult<Vec<CatalogCourse>> {
        self.inner.catalog()
    }

    fn upsert_completion(
        &mut self,
        student: &str,
        course_code: &str,
        semester_label: Option<&str>,
    ) -> StoreResult<()> {
        self.commit(|staged| staged.upsert_completion(student, course_code, semester_label))
    }

    fn upsert_schedule(&mut self, student: &str, course_code: &str, semester_label: &str) -> StoreResult<()> {
        self.commit(|staged| staged.upsert_schedule(student, course_code, semester_label))
    }

    fn remove_scheduled(&mut self, student: &str, course_code: &str) -> StoreResult<bool> {
        if !self.inner.schedule(student)?.iter().any(|s| s.course_code == course_code) {
            return Ok(false);
        }
        self.commit(|staged| staged.remove_scheduled(student, course_code))
    }

    fn save_profile(&mut self, student: &str, profile: Profile) -> StoreResult<()> {
        self.commit(|staged| staged.save_profile(student, profile))
    }

    fn import_catalog(&mut self, courses: Vec<CatalogCourse>) -> StoreResult<usize> {
        self.commit(|staged| staged.import_catalog(courses))
    }
}
