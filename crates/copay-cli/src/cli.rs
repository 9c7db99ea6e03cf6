//! Command handlers for the copay CLI.
//!
//! Each handler drives one [`ProgramStore`] operation and renders the
//! outcome as markdown. Errors are returned unchanged so that `main` can
//! log the full chain and show only the public message.

use std::{fs, path::Path};

use copay_core::{
    display::{CreateResult, DeleteResult, ProgramSummaries, UpdateResult},
    CopayError, Program, ProgramStore, Result,
};
use log::debug;

use crate::{
    args::{
        DeleteProgramArgs, ImportProgramArgs, ProgramCommands, ReplaceProgramArgs,
        ShowProgramArgs,
    },
    renderer::TerminalRenderer,
};

pub struct Cli {
    store: ProgramStore,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(store: ProgramStore, renderer: TerminalRenderer) -> Self {
        Self { store, renderer }
    }

    pub fn render_error(&self, message: &str) {
        self.renderer.render_error(message);
    }

    pub async fn handle_program_command(&self, command: ProgramCommands) -> Result<()> {
        match command {
            ProgramCommands::List => self.list_programs().await,
            ProgramCommands::Show(args) => self.show_program(args).await,
            ProgramCommands::Import(args) => self.import_program(args).await,
            ProgramCommands::Replace(args) => self.replace_program(args).await,
            ProgramCommands::Delete(args) => self.delete_program(args).await,
        }
    }

    pub async fn list_programs(&self) -> Result<()> {
        let summaries = ProgramSummaries::from(self.store.list().await?);

        let title = if summaries.is_empty() {
            "No programs found"
        } else {
            "Programs"
        };
        self.renderer.render(&format!("# {title}\n\n{summaries}"));
        Ok(())
    }

    async fn show_program(&self, args: ShowProgramArgs) -> Result<()> {
        let program = self.store.fetch_existing(args.id).await?;
        self.renderer.render(&program.to_string());
        Ok(())
    }

    async fn import_program(&self, args: ImportProgramArgs) -> Result<()> {
        let program = read_document(&args.file)?;
        debug!(
            "Importing program {} from {}",
            program.program_id,
            args.file.display()
        );

        self.store.insert(&program).await?;
        self.renderer
            .render(&CreateResult::new(program).to_string());
        Ok(())
    }

    async fn replace_program(&self, args: ReplaceProgramArgs) -> Result<()> {
        let mut program = read_document(&args.file)?;
        debug!(
            "Replacing program {} at version {} from {}",
            program.program_id,
            program.version,
            args.file.display()
        );

        let previous = self.store.fetch_existing(program.program_id).await?;
        program.version = self.store.replace(&program).await?;

        self.renderer
            .render(&UpdateResult::between(&previous, program).to_string());
        Ok(())
    }

    async fn delete_program(&self, args: DeleteProgramArgs) -> Result<()> {
        if !args.confirm {
            return Err(CopayError::invalid_input("confirm")
                .with_reason("deletion is permanent; pass --confirm to proceed"));
        }

        if !self.store.delete(args.id).await? {
            return Err(CopayError::ProgramNotFound { id: args.id });
        }

        self.renderer
            .render(&DeleteResult::new(args.id).to_string());
        Ok(())
    }
}

/// Reads a program JSON document from disk.
fn read_document(path: &Path) -> Result<Program> {
    let contents = fs::read_to_string(path).map_err(|source| CopayError::FileSystem {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        CopayError::invalid_input("program document").with_reason(e.to_string())
    })
}
