//! Program operations for the ProgramStore.

use super::ProgramStore;
use crate::{
    error::{CopayError, Result},
    models::{Program, ProgramId, ProgramSummary},
};

impl ProgramStore {
    /// Loads a program with all of its child collections.
    ///
    /// `Ok(None)` means the program does not exist; storage failures are
    /// errors.
    pub async fn fetch(&self, id: ProgramId) -> Result<Option<Program>> {
        self.run(move |db| db.get_program(id)).await
    }

    /// Loads a program, treating absence as `CopayError::ProgramNotFound`.
    pub async fn fetch_existing(&self, id: ProgramId) -> Result<Program> {
        self.fetch(id)
            .await?
            .ok_or(CopayError::ProgramNotFound { id })
    }

    /// Inserts a new program and all of its child rows atomically.
    pub async fn insert(&self, program: &Program) -> Result<ProgramId> {
        let program = program.clone();
        self.run(move |db| db.insert_program(&program)).await
    }

    /// Replaces a stored program and all of its child rows atomically.
    ///
    /// Returns the new version; `program.version` is the expected one.
    pub async fn replace(&self, program: &Program) -> Result<u32> {
        let program = program.clone();
        self.run(move |db| db.replace_program(&program)).await
    }

    /// Permanently deletes a program and all of its child rows.
    /// This operation cannot be undone.
    pub async fn delete(&self, id: ProgramId) -> Result<bool> {
        self.run(move |db| db.delete_program(id)).await
    }

    /// Lists all stored programs.
    pub async fn list(&self) -> Result<Vec<ProgramSummary>> {
        self.run(|db| db.list_programs()).await
    }
}
