use std::io::{BufRead, Write};

use anyhow::Result;
use dnalens_client::AnalysisBackend;
use dnalens_session::{transcribe_placeholder, ChatSession, CredentialStore, MessageKind, Session};

/// Typed in place of a message to simulate a voice recording
pub const VOICE_COMMAND: &str = "/voice";

/// Read observations line by line, answer each one and attach it to the
/// newest analysis. Returns how many notes were attached.
pub fn run_chat<B, C, R, W>(
    session: &mut Session<B, C>,
    chat: &mut ChatSession,
    input: R,
    mut out: W,
) -> Result<usize>
where
    B: AnalysisBackend,
    C: CredentialStore,
    R: BufRead,
    W: Write,
{
    if let Some(greeting) = chat.messages().first() {
        writeln!(out, "assistant> {}", greeting.content)?;
    }

    let mut attached = 0;
    for line in input.lines() {
        let line = line?;
        let (text, kind) = if line.trim() == VOICE_COMMAND {
            let transcript = transcribe_placeholder();
            writeln!(out, "you (voice)> {}", transcript)?;
            (transcript.to_string(), MessageKind::Voice)
        } else {
            (line, MessageKind::Text)
        };

        let Some(reply) = chat.send(&text, kind) else {
            continue;
        };
        writeln!(out, "assistant> {}", reply.content)?;

        if session.add_note(&text) {
            attached += 1;
        } else {
            log::debug!("No analysis to attach the note to");
        }
    }

    Ok(attached)
}
