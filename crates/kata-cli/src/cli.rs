//! Interactive lesson loop.
//!
//! Reads one command per line from stdin and drives the session engine,
//! rendering markdown through the terminal renderer. Code submissions
//! are entered as multi-line blocks terminated by a single `.` line.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use kata_core::display::{ActivityList, AiHistory, GitLog};
use kata_core::{Action, ActionEffect, Outcome, Session};
use log::debug;

use crate::renderer::TerminalRenderer;

/// Delay between streamed feedback characters.
const CHAR_DELAY: Duration = Duration::from_millis(15);

/// Poll interval while printing an in-flight stream.
const POLL_INTERVAL: Duration = Duration::from_millis(30);

/// Dramatic pause between choosing at a fork and revealing the outcome.
const CONFIRM_DELAY: Duration = Duration::from_millis(500);

const HELP: &str = "\
## Commands

- `status` — roadmap, build status and score
- `next` / `prev` / `goto <n>` — move between unlocked activities
- `preview` — storefront preview at the current position
- `log` — simulated git log
- `history` — AI feedback history
- `project` — project files and build status
- `approve` / `regen` / `edit` — quality review actions
- `submit` — submit code (end the block with a single `.` line)
- `decide <option-id>` — choose at a decision fork
- `fix` — submit a repair attempt
- `hint` — ask for a hint
- `error` — report a failed attempt
- `quit` — leave the lesson
";

/// Interactive command handler owning the session and renderer.
pub struct Cli {
    session: Session,
    renderer: TerminalRenderer,
    fast: bool,
}

impl Cli {
    /// Create a new CLI handler.
    pub fn new(session: Session, renderer: TerminalRenderer, fast: bool) -> Self {
        Self {
            session,
            renderer,
            fast,
        }
    }

    /// Runs the interactive loop until `quit` or end of input.
    pub async fn run(mut self) -> Result<()> {
        self.renderer.render(&self.session.lesson().to_string())?;
        self.show_current_activity()?;

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            print!("> ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                break;
            };
            let line = line.context("Failed to read input")?;
            let mut words = line.split_whitespace();
            let Some(command) = words.next() else {
                continue;
            };
            let argument = words.next();

            match command {
                "quit" | "exit" | "q" => break,
                "help" | "?" => self.renderer.render(HELP)?,
                "status" => self.show_status()?,
                "next" => self.navigate(|s| s.go_to_next_activity())?,
                "prev" => self.navigate(|s| s.go_to_previous_activity())?,
                "goto" => self.goto(argument)?,
                "preview" => {
                    let preview = self.session.preview_state();
                    self.renderer.render(&preview.to_string())?;
                }
                "log" => {
                    let log = GitLog(self.session.git_log().to_vec());
                    self.renderer.render(&log.to_string())?;
                }
                "history" => {
                    let history = AiHistory(self.session.ai_history().to_vec());
                    self.renderer.render(&history.to_string())?;
                }
                "project" => self.renderer.render(&self.session.project().to_string())?,
                "approve" => self.act(Action::Approve).await?,
                "regen" | "regenerate" => self.act(Action::Regenerate).await?,
                "edit" => {
                    let code = read_code_block(&mut lines)?;
                    self.act(Action::Edit { code }).await?;
                }
                "submit" => {
                    let code = read_code_block(&mut lines)?;
                    self.act(Action::Submit { code }).await?;
                }
                "fix" => {
                    let code = read_code_block(&mut lines)?;
                    self.act(Action::Fix { code }).await?;
                }
                "decide" => match argument {
                    Some(option_id) => {
                        self.act(Action::Decide {
                            option_id: option_id.to_string(),
                        })
                        .await?;
                    }
                    None => self.renderer.render("Usage: `decide <option-id>`\n")?,
                },
                "hint" => self.act(Action::RequestHint).await?,
                "error" => self.act(Action::ReportError).await?,
                other => {
                    debug!("unrecognized command '{other}'");
                    self.renderer
                        .render(&format!("Unknown command `{other}`. Try `help`.\n"))?;
                }
            }
        }

        Ok(())
    }

    async fn act(&mut self, action: Action) -> Result<()> {
        let activity_id = self.session.current_activity().id.clone();
        if matches!(action, Action::Decide { .. }) && !self.fast {
            tokio::time::sleep(CONFIRM_DELAY).await;
        }
        match self.session.apply_action(&activity_id, action) {
            Ok(ActionEffect::Feedback { text }) => self.stream_feedback(&text).await,
            Ok(ActionEffect::Resolved(outcome)) => self.show_outcome(outcome).await,
            Err(e) => self.renderer.render(&format!("{e}\n")),
        }
    }

    async fn show_outcome(&mut self, outcome: Outcome) -> Result<()> {
        self.stream_feedback(&outcome.feedback_text).await?;
        self.renderer.render(&outcome.to_string())?;
        if !outcome.is_success && self.session.lives() == 0 {
            self.renderer
                .render("Out of lives, but the lesson keeps going. Take a breath.\n")?;
        }
        if outcome.lesson_complete {
            self.renderer.render("## Lesson Summary\n")?;
            self.renderer.render(&self.session.stats().to_string())?;
        } else if outcome.is_success && self.session.go_to_next_activity() {
            self.show_current_activity()?;
        }
        Ok(())
    }

    /// Streams feedback through the playback controller, echoing the
    /// revealed prefix to stdout as it grows.
    async fn stream_feedback(&self, text: &str) -> Result<()> {
        if self.fast {
            self.renderer.render(text)?;
            self.renderer.render("\n")?;
            return Ok(());
        }

        let playback = self.session.playback().clone();
        let task = tokio::spawn({
            let playback = playback.clone();
            let text = text.to_string();
            async move {
                playback.stream(&text, CHAR_DELAY).await;
            }
        });

        let mut printed = 0;
        loop {
            tokio::time::sleep(POLL_INTERVAL).await;
            let snapshot = playback.snapshot();
            let revealed: Vec<char> = snapshot.text.chars().collect();
            for c in &revealed[printed.min(revealed.len())..] {
                print!("{c}");
            }
            io::stdout().flush()?;
            printed = revealed.len();
            if !snapshot.is_streaming {
                break;
            }
        }
        task.await.context("Feedback stream task failed")?;
        println!();
        Ok(())
    }

    fn navigate(&mut self, mover: impl FnOnce(&mut Session) -> bool) -> Result<()> {
        if mover(&mut self.session) {
            self.show_current_activity()
        } else {
            self.renderer.render("Can't move there yet.\n")
        }
    }

    fn goto(&mut self, argument: Option<&str>) -> Result<()> {
        let Some(position) = argument.and_then(|a| a.parse::<usize>().ok()) else {
            return self.renderer.render("Usage: `goto <activity number>`\n");
        };
        if position == 0 || !self.session.go_to_activity(position - 1) {
            return self
                .renderer
                .render(&format!("Activity {position} is locked or out of range.\n"));
        }
        self.show_current_activity()
    }

    fn show_current_activity(&self) -> Result<()> {
        self.renderer
            .render(&self.session.current_activity().to_string())
    }

    fn show_status(&self) -> Result<()> {
        let list = ActivityList(self.session.activities().to_vec());
        self.renderer.render(&list.to_string())?;
        self.renderer.render(&format!(
            "\nBuild: {}\n",
            self.session.project().status.with_icon()
        ))?;
        self.renderer.render(&self.session.stats().to_string())
    }
}

/// Reads a multi-line code block terminated by a single `.` line.
fn read_code_block<B: BufRead>(lines: &mut io::Lines<B>) -> Result<String> {
    println!("Enter code, end with a single `.` line:");
    let mut code = Vec::new();
    for line in lines {
        let line = line.context("Failed to read input")?;
        if line.trim() == "." {
            break;
        }
        code.push(line);
    }
    Ok(code.join("\n"))
}
