//! Console status output and interactive prompts

use super::host::{Prompter, Renderer, StatusSink};
use crate::domain::Preset;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Status sink printing to stdout and mirroring everything to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleStatus;

impl StatusSink for ConsoleStatus {
    fn set_status_text(&self, text: &str) {
        tracing::info!(status = %text, "Status changed");
        println!("{text}");
    }

    fn output_text(&self, text: &str) {
        tracing::debug!("{text}");
        println!("  {text}");
    }

    fn notify(&self, message: &str, title: &str) {
        tracing::info!(title = %title, "{message}");
        println!();
        println!("[{title}] {message}");
    }
}

/// Line-oriented prompter over any reader/writer pair
pub struct ConsolePrompter<R, W> {
    io: Mutex<(R, W)>,
}

impl ConsolePrompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    /// Create a prompter over the given input and output
    pub fn new(input: R, output: W) -> Self {
        Self {
            io: Mutex::new((input, output)),
        }
    }

    fn ask(&self, question: &str) -> Option<String> {
        let mut guard = self.io.lock().ok()?;
        let (input, output) = &mut *guard;

        write!(output, "{question}").ok()?;
        output.flush().ok()?;

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let answer = line.trim();
                if answer.is_empty() {
                    None
                } else {
                    Some(answer.to_string())
                }
            }
        }
    }

    fn say(&self, text: &str) {
        if let Ok(mut guard) = self.io.lock() {
            if let Err(e) = writeln!(guard.1, "{text}") {
                tracing::debug!(error = %e, "Failed to write prompt text");
            }
        }
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    fn choose_directory(&self, message: &str, start: &Path) -> Option<PathBuf> {
        self.say(message);
        // Relative answers are resolved against `start` by the caller
        let answer = self.ask(&format!("Directory [relative to {}]: ", start.display()))?;
        Some(PathBuf::from(answer))
    }

    fn choose_template(&self, renderer: &dyn Renderer) -> Option<Preset> {
        self.say(&format!("Templates for {}:", renderer.name()));
        for template in renderer.templates() {
            self.say(&format!("  [{}] {}", template.index, template.name));
        }

        let answer = self.ask("Template (index or name): ")?;
        match answer.parse::<i32>() {
            Ok(index) => renderer.template_by_index(index),
            Err(_) => renderer.template_by_name(&answer),
        }
    }
}

/// Prompter for unattended runs; every chooser is cancelled
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPrompter;

impl Prompter for NoPrompter {
    fn choose_directory(&self, message: &str, _start: &Path) -> Option<PathBuf> {
        tracing::warn!(prompt = %message, "Interactive directory chooser disabled");
        None
    }

    fn choose_template(&self, renderer: &dyn Renderer) -> Option<Preset> {
        tracing::warn!(
            renderer = %renderer.name(),
            "Interactive template chooser disabled"
        );
        None
    }
}
