//! Command handlers.
//!
//! Each handler writes its output to the given writer and turns API
//! failures into a single human-readable line via [`extract_api_error`].

use std::io::Write;

use color_eyre::eyre::eyre;
use color_eyre::{Result, Section};

use super::args::{CliCommand, USAGE};
use super::version::version_line;
use crate::error::{extract_api_error, ApiError};
use crate::session::SessionManager;

/// The display message, with the category's recovery hint as a suggestion.
fn api_failure(err: ApiError) -> color_eyre::Report {
    let hint = failure_hint(&err);
    eyre!(extract_api_error(&err)).suggestion(hint)
}

fn failure_hint(err: &ApiError) -> &'static str {
    err.category().recovery_hint()
}

/// Run a parsed command against the session.
pub async fn run_cli_command<W: Write>(
    command: CliCommand,
    session: &SessionManager,
    out: &mut W,
) -> Result<()> {
    match command {
        CliCommand::Version => {
            writeln!(out, "{}", version_line())?;
            Ok(())
        }
        CliCommand::Usage(reason) => {
            writeln!(out, "{}", USAGE)?;
            match reason {
                Some(reason) => Err(eyre!(reason)),
                None => Ok(()),
            }
        }
        CliCommand::WhoAmI => handle_whoami(session, out).await,
        CliCommand::Logout => handle_logout(session, out).await,
        CliCommand::Ideas => handle_ideas(session, out).await,
        CliCommand::DeleteIdea(id) => handle_delete_idea(session, &id, out).await,
    }
}

async fn handle_whoami<W: Write>(session: &SessionManager, out: &mut W) -> Result<()> {
    let user = session.refresh().await.map_err(api_failure)?;
    writeln!(out, "{} ({})", user.email, user.plan)?;
    if let Some(channel_id) = user.primary_channel_id {
        writeln!(out, "primary channel: {}", channel_id)?;
    }
    Ok(())
}

async fn handle_logout<W: Write>(session: &SessionManager, out: &mut W) -> Result<()> {
    session.logout().await;
    writeln!(out, "Signed out")?;
    Ok(())
}

async fn handle_ideas<W: Write>(session: &SessionManager, out: &mut W) -> Result<()> {
    let envelope = session.api().list_ideas().await.map_err(api_failure)?;
    let total = envelope.meta_u64("total");
    let ideas = envelope.data.unwrap_or_default();

    if ideas.is_empty() {
        writeln!(out, "No ideas yet")?;
        return Ok(());
    }

    for idea in &ideas {
        match idea.score {
            Some(score) => writeln!(out, "{}\t{}\t{:.0}", idea.id, idea.title, score)?,
            None => writeln!(out, "{}\t{}", idea.id, idea.title)?,
        }
    }
    if let Some(total) = total {
        writeln!(out, "{} of {} ideas", ideas.len(), total)?;
    }
    Ok(())
}

async fn handle_delete_idea<W: Write>(
    session: &SessionManager,
    id: &str,
    out: &mut W,
) -> Result<()> {
    session.api().delete_idea(id).await.map_err(api_failure)?;
    writeln!(out, "Deleted idea {}", id)?;
    Ok(())
}
