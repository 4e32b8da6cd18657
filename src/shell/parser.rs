//! Line parser for the shell.
//!
//! Examples:
//!   "id user@sopt.org"   -> Set(Identifier, "user@sopt.org")
//!   "pw"                 -> Set(Password, "")
//!   "nick 진웅"           -> Set(Nickname, "진웅")
//!   "clear pw"           -> Clear(Password)
//!   "unset nick"         -> Unset(Nickname)
//!
//! Everything after the first space of a field command is the value,
//! untouched: "id  a " sets the identifier to " a ".

use crate::error::{AppError, AppResult};
use crate::models::field::FieldKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCmd {
    /// Replace the field text
    Set(FieldKind, String),
    /// Clear button
    Clear(FieldKind),
    /// Deliver a null text value
    Unset(FieldKind),
    Login,
    OpenNickname,
    Save,
    Close,
    ToggleSecure,
    State,
    Help,
    Quit,
    Empty,
}

pub const HELP: &str = "\
Commands:
  id [text]          set the identifier field
  pw [text]          set the password field
  nick [text]        set the nickname field (sheet must be open)
  clear id|pw|nick   press a field's clear button
  unset id|pw|nick   send a null value for a field
  login              tap the login button
  nickname           open the nickname sheet
  save               tap the nickname save button
  close              dismiss the nickname sheet without saving
  show               toggle password masking
  state              print the current form state as JSON
  help               this text
  quit               leave";

pub fn parse_line(raw: &str) -> AppResult<ShellCmd> {
    let line = raw.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(ShellCmd::Empty);
    }

    let line = line.trim_start();
    let (word, rest) = match line.split_once(' ') {
        Some((w, r)) => (w, Some(r)),
        None => (line, None),
    };
    let word = word.to_ascii_lowercase();

    let cmd = match word.as_str() {
        "id" => ShellCmd::Set(FieldKind::Identifier, rest.unwrap_or_default().to_string()),
        "pw" => ShellCmd::Set(FieldKind::Password, rest.unwrap_or_default().to_string()),
        "nick" => ShellCmd::Set(FieldKind::Nickname, rest.unwrap_or_default().to_string()),
        "clear" => ShellCmd::Clear(field_arg("clear", rest)?),
        "unset" => ShellCmd::Unset(field_arg("unset", rest)?),
        "login" => ShellCmd::Login,
        "nickname" => ShellCmd::OpenNickname,
        "save" => ShellCmd::Save,
        "close" => ShellCmd::Close,
        "show" => ShellCmd::ToggleSecure,
        "state" => ShellCmd::State,
        "help" | "?" => ShellCmd::Help,
        "quit" | "exit" => ShellCmd::Quit,
        other => return Err(AppError::Usage(format!("unknown command '{other}', try 'help'"))),
    };
    Ok(cmd)
}

fn field_arg(cmd: &str, rest: Option<&str>) -> AppResult<FieldKind> {
    rest.map(str::trim)
        .and_then(FieldKind::from_alias)
        .ok_or_else(|| AppError::Usage(format!("{cmd} id|pw|nick")))
}
