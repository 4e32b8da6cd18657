//! Line-oriented front-end standing in for the view layer.
//!
//! A reader (task or thread) turns input lines into events on a channel; a
//! single UI loop owns the screens and applies events one at a time, so
//! every derivation and presenter call happens on that loop.

mod console;
mod parser;

pub use console::ConsolePresenter;
pub use parser::{HELP, ShellCmd, parse_line};

use crate::error::AppResult;
use crate::screens::{LoginScreen, Presenter};
use serde::Serialize;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

const EVENT_QUEUE: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// JSON view of the open screens for the `state` command.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub identifier: Option<String>,
    pub password: Option<String>,
    pub login_enabled: bool,
    pub nickname: Option<String>,
    pub sheet: Option<SheetSnapshot>,
}

#[derive(Debug, Serialize)]
pub struct SheetSnapshot {
    pub nickname: Option<String>,
    pub save_enabled: bool,
}

impl Snapshot {
    pub fn capture(screen: &LoginScreen) -> Self {
        let vm = screen.view_model();
        let password = vm.password().map(|pw| {
            if screen.is_secure_entry() {
                "*".repeat(pw.chars().count())
            } else {
                pw
            }
        });

        Self {
            identifier: vm.identifier(),
            password,
            login_enabled: vm.is_login_enabled(),
            nickname: screen.nickname(),
            sheet: screen.sheet().ok().map(|s| SheetSnapshot {
                nickname: s.view_model().nickname(),
                save_enabled: s.view_model().is_save_enabled(),
            }),
        }
    }
}

/// Applies one command to the screens.
pub fn dispatch(screen: &mut LoginScreen, presenter: &dyn Presenter, cmd: ShellCmd) -> AppResult<Flow> {
    match cmd {
        ShellCmd::Set(field, text) => screen.field_changed(field, Some(text.as_str()))?,
        ShellCmd::Unset(field) => screen.field_changed(field, None)?,
        ShellCmd::Clear(field) => screen.clear(field)?,
        ShellCmd::Login => screen.login_tapped(),
        ShellCmd::OpenNickname => screen.present_nickname()?,
        ShellCmd::Save => screen.save_nickname()?,
        ShellCmd::Close => screen.close_nickname()?,
        ShellCmd::ToggleSecure => {
            let masked = screen.toggle_secure_entry();
            presenter.notice(if masked { "password hidden" } else { "password shown" });
        }
        ShellCmd::State => {
            let json = serde_json::to_string_pretty(&Snapshot::capture(screen))?;
            presenter.notice(&json);
        }
        ShellCmd::Help => presenter.notice(HELP),
        ShellCmd::Quit => return Ok(Flow::Quit),
        ShellCmd::Empty => {}
    }
    Ok(Flow::Continue)
}

/// Runs the UI loop over `input` until `quit` or end of input.
pub async fn serve<R>(input: R, screen: LoginScreen, presenter: Arc<dyn Presenter>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<String>(EVENT_QUEUE);
    let reader = tokio::spawn(read_lines(input, tx));

    run_events(rx, screen, presenter).await;

    reader.abort();
    match reader.await {
        Ok(res) => res,
        Err(e) if e.is_cancelled() => Ok(()),
        Err(e) => Err(std::io::Error::other(e).into()),
    }
}

/// Runs the UI loop over the process stdin. Lines are read on a detached OS
/// thread: a blocking stdin read cannot be cancelled, so after `quit` the
/// thread is simply left behind and dies with the process.
pub async fn serve_stdin(screen: LoginScreen, presenter: Arc<dyn Presenter>) -> AppResult<()> {
    let (tx, rx) = mpsc::channel::<String>(EVENT_QUEUE);
    spawn_stdin_reader(tx)?;
    run_events(rx, screen, presenter).await;
    Ok(())
}

/// Applies events in arrival order until `quit` or until every sender is gone.
pub async fn run_events(
    mut rx: mpsc::Receiver<String>,
    mut screen: LoginScreen,
    presenter: Arc<dyn Presenter>,
) {
    while let Some(line) = rx.recv().await {
        let cmd = match parse_line(&line) {
            Ok(cmd) => cmd,
            Err(e) => {
                presenter.notice(&e.to_string());
                continue;
            }
        };

        match dispatch(&mut screen, presenter.as_ref(), cmd) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => presenter.notice(&e.to_string()),
        }
    }
}

fn spawn_stdin_reader(tx: mpsc::Sender<String>) -> AppResult<()> {
    use std::io::BufRead;

    std::thread::Builder::new()
        .name("stdin-reader".into())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.blocking_send(line).is_err() {
                            // UI loop is gone
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "stdin read failed");
                        break;
                    }
                }
            }
            tracing::debug!("stdin closed");
        })?;
    Ok(())
}

async fn read_lines<R>(input: R, tx: mpsc::Sender<String>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if tx.send(line).await.is_err() {
            // UI loop is gone
            break;
        }
    }
    tracing::debug!("input closed");
    Ok(())
}
