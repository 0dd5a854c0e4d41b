// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Display Helpers
//!
//! Terminal output formatting and styling.

use std::io::{self, Write};

use console::{style, StyledObject};
use slidefeed_core::{ContentEvent, ContentItem, ContentKind, Renderer, Snapshot};
use tracing::warn;

/// Width of separator lines.
const WIDTH: usize = 48;

/// Prints an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Prints a warning message.
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Prints an info message.
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Prints a pipeline problem reported through the event channel.
pub fn event_notice(event: &ContentEvent) {
    match event {
        ContentEvent::FetchFailed { error } => {
            warning(&format!("Content not updated: {}", error))
        }
        ContentEvent::StructuralParseFailure { error } => {
            warning(&format!("Content not updated: {}", error))
        }
        ContentEvent::ItemSkipped { index, reason } => {
            warning(&format!("Skipped item {}: {}", index, reason))
        }
        ContentEvent::ManifestLoadFailed { message } => warning(message),
        _ => {}
    }
}

fn kind_badge(kind: ContentKind) -> StyledObject<&'static str> {
    match kind {
        ContentKind::Slide => style("SLIDE").cyan().bold(),
        ContentKind::Story => style("STORY").magenta().bold(),
        ContentKind::Unknown => style("?").dim(),
    }
}

fn write_item<W: Write>(out: &mut W, position: usize, item: &ContentItem) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(WIDTH))?;
    writeln!(
        out,
        "{:>2}. {} {}",
        position,
        kind_badge(item.kind()),
        style(item.title()).bold()
    )?;
    for line in item.body().lines() {
        writeln!(out, "    {}", line)?;
    }
    Ok(())
}

/// Writes every renderable item of a snapshot.
pub fn render_snapshot<W: Write>(out: &mut W, snapshot: &Snapshot) -> io::Result<()> {
    if snapshot.is_loading {
        writeln!(out, "{}", style("Loading…").dim())?;
    }

    let mut shown = 0;
    for item in snapshot.content.renderable() {
        shown += 1;
        write_item(out, shown, item)?;
    }

    if shown == 0 {
        if !snapshot.is_loading {
            writeln!(out, "  {}", style("(no content)").dim())?;
        }
    } else {
        writeln!(out, "{}", "─".repeat(WIDTH))?;
    }
    out.flush()
}

/// Render layer that writes snapshots to a terminal stream.
pub struct TerminalRenderer<W> {
    out: W,
}

impl<W: Write + Send + 'static> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write + Send + 'static> Renderer for TerminalRenderer<W> {
    fn render(&mut self, snapshot: &Snapshot) {
        if let Err(e) = render_snapshot(&mut self.out, snapshot) {
            warn!(error = %e, "failed to draw snapshot");
        }
    }
}
