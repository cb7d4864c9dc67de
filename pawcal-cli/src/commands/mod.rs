pub mod add;
pub mod auth;
pub mod check;
pub mod delete;
pub mod edit;
pub mod filters;
pub mod list;
pub mod move_event;
pub mod select;

use anyhow::Result;
use owo_colors::OwoColorize;
use pawcal_core::Commit;

use crate::render::Render;

/// Turn a commit into the applied event. Rejections print the reason and
/// fail the command; unknown ids are reported and skipped.
fn settle(commit: Commit, id: &str) -> Result<Option<pawcal_core::EventRecord>> {
    match commit {
        Commit::Accepted(event) => Ok(Some(event)),
        Commit::Rejected(reason) => {
            eprintln!("{}", reason.render());
            anyhow::bail!("Change was not applied")
        }
        Commit::Unchanged => {
            println!("{}", format!("No event with id '{}'", id).dimmed());
            Ok(None)
        }
    }
}
