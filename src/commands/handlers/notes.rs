//! Note handlers
//!
//! Handles: note_save, note_list
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::commands::context::AssistantContext;
use crate::commands::handler::IntentHandler;
use crate::commands::intent::{Intent, IntentKind};

pub const NOTE_SAVED_RESPONSE: &str = "Saved your note.";
pub const NO_NOTES_RESPONSE: &str = "No notes yet.";

pub struct NotesHandler;

#[async_trait]
impl IntentHandler for NotesHandler {
    fn intents(&self) -> &'static [IntentKind] {
        &[IntentKind::NoteSave, IntentKind::NoteList]
    }

    async fn handle(&self, ctx: Arc<AssistantContext>, intent: &Intent) -> Result<String> {
        match intent {
            Intent::NoteSave { text } => {
                ctx.notes.save(text).await?;
                info!("Saved a note ({} chars)", text.len());
                Ok(NOTE_SAVED_RESPONSE.to_string())
            }
            Intent::NoteList => {
                let notes = ctx.notes.list().await?;
                if notes.is_empty() {
                    return Ok(NO_NOTES_RESPONSE.to_string());
                }
                Ok(format!("Here are your notes:\n{}", notes.join("\n")))
            }
            other => anyhow::bail!("NotesHandler can't handle {}", other.kind()),
        }
    }
}
