//! Line-oriented form session.
//!
//! Reads one command per line and renders the form's values, inline errors
//! and submit outcomes as text.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, warn};

use signup_form::{FormValidator, Locale, SubmissionResult, TextField};

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set a field to the rest of the line.
    Set { field: String, value: String },
    Submit,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parses a line. Returns `None` for blank lines.
    ///
    /// Keywords are matched on the trimmed line. For field updates the value
    /// is everything after the first whitespace character, kept verbatim.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let keyword = match trimmed.to_ascii_lowercase().as_str() {
            "submit" => Some(Self::Submit),
            "show" => Some(Self::Show),
            "help" => Some(Self::Help),
            "quit" | "exit" => Some(Self::Quit),
            _ => None,
        };
        if keyword.is_some() {
            return keyword;
        }

        let (field, value) = line
            .trim_start()
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));
        Some(Self::Set {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

const HELP: &str = "\
Commands:
  name <text>         set the name
  email <text>        set the email
  password <text>     set the password
  comment <text>      set the comment
  subscribe yes|no    toggle the newsletter subscription
  show                print the current form
  submit              register
  quit                leave";

/// Drives a [`FormValidator`] from text input.
pub struct Session {
    form: FormValidator,
    locale: Locale,
    json: bool,
}

impl Session {
    pub fn new(locale: Locale, json: bool) -> Self {
        Self {
            form: FormValidator::new(),
            locale,
            json,
        }
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<()> {
        for line in input.lines() {
            let Some(command) = Command::parse(&line?) else {
                continue;
            };
            if let Command::Set { field, .. } = &command {
                debug!(%field, "field update received");
            }
            if !self.handle(command, &mut out)? {
                break;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Handles one command. Returns `false` when the session should end.
    pub fn handle(&mut self, command: Command, out: &mut impl Write) -> Result<bool> {
        match command {
            Command::Set { field, value } => self.set(&field, &value, out)?,
            Command::Submit => self.submit(out)?,
            Command::Show => self.show(out)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn set(&mut self, field: &str, value: &str, out: &mut impl Write) -> Result<()> {
        if let Err(err) = self.form.update(field, value) {
            warn!(%err, "input rejected");
            writeln!(out, "! {err}")?;
            return Ok(());
        }

        let Ok(field) = field.parse::<signup_form::Field>() else {
            return Ok(());
        };
        if let Some(text) = field.as_text() {
            if let Some(error) = self.form.error(text) {
                writeln!(out, "  {}", self.locale.field_error(text, error))?;
            }
            if text == TextField::Comment {
                writeln!(out, "  {}", self.form.comment_counter())?;
            }
        }
        Ok(())
    }

    fn submit(&mut self, out: &mut impl Write) -> Result<()> {
        match self.form.submit() {
            SubmissionResult::Accepted(registration) => {
                if self.json {
                    writeln!(out, "{}", serde_json::to_string(&registration)?)?;
                } else {
                    writeln!(out, "{}", self.locale.confirmation(&registration))?;
                }
            }
            SubmissionResult::Rejected {
                errors,
                first_invalid,
            } => {
                writeln!(out, "{}", self.locale.rejection())?;
                for (field, error) in errors.iter() {
                    writeln!(out, "  - {}", self.locale.field_error(field, error))?;
                }
                writeln!(out, "focus: {first_invalid}")?;
            }
        }
        Ok(())
    }

    fn show(&self, out: &mut impl Write) -> Result<()> {
        let state = self.form.state();
        let locale = self.locale;
        writeln!(out, "{}: {}", locale.label(TextField::Name), state.name)?;
        writeln!(out, "{}: {}", locale.label(TextField::Email), state.email)?;
        writeln!(
            out,
            "{}: {}",
            locale.label(TextField::Password),
            "*".repeat(state.password.chars().count())
        )?;
        writeln!(
            out,
            "subscribe: {}",
            if state.subscribe { "yes" } else { "no" }
        )?;
        writeln!(
            out,
            "{}: {} ({})",
            locale.label(TextField::Comment),
            state.comment,
            self.form.comment_counter()
        )?;
        for (field, error) in self.form.errors().iter() {
            writeln!(out, "  - {}", locale.field_error(field, error))?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn form(&self) -> &FormValidator {
        &self.form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str, locale: Locale, json: bool) -> (Session, String) {
        let mut session = Session::new(locale, json);
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("   \n"), None);
        assert_eq!(Command::parse("submit\n"), Some(Command::Submit));
        assert_eq!(Command::parse("EXIT"), Some(Command::Quit));
        assert_eq!(
            Command::parse("name  Anna \r\n"),
            Some(Command::Set {
                field: "name".to_string(),
                value: " Anna ".to_string(),
            })
        );
        assert_eq!(
            Command::parse("comment"),
            Some(Command::Set {
                field: "comment".to_string(),
                value: String::new(),
            })
        );
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        assert_eq!(Command::parse("submit \n"), Some(Command::Submit));
        assert_eq!(Command::parse("  quit \t\r\n"), Some(Command::Quit));
        assert_eq!(Command::parse("Show  "), Some(Command::Show));
        assert_eq!(
            Command::parse("name\tAnna"),
            Some(Command::Set {
                field: "name".to_string(),
                value: "Anna".to_string(),
            })
        );
        assert_eq!(
            Command::parse("comment "),
            Some(Command::Set {
                field: "comment".to_string(),
                value: String::new(),
            })
        );
    }

    #[test]
    fn test_submit_with_trailing_space_registers() {
        let script = "name Anna\nemail a@b.co\npassword secret1\nsubmit \nquit \nname Boris\n";
        let (session, out) = run(script, Locale::En, false);
        assert!(out.starts_with("Registration successful\nName: Anna\n"));
        assert!(session.form().state().is_empty());
    }

    #[test]
    fn test_inline_error_after_update() {
        let (_, out) = run("name A\n", Locale::En, false);
        assert_eq!(out, "  Name must be at least 2 characters\n");
    }

    #[test]
    fn test_rejected_submit_reports_focus() {
        let script = "name Anna\nemail bad\npassword secret1\nsubmit\n";
        let (session, out) = run(script, Locale::En, false);
        assert!(out.contains("Error\nPlease check the form fields\n"));
        assert!(out.contains("  - Enter a valid email\n"));
        assert!(out.ends_with("focus: email\n"));
        assert_eq!(session.form().state().name, "Anna");
    }

    #[test]
    fn test_accepted_submit_prints_confirmation() {
        let script = "name Anna\nemail a@b.co\npassword secret1\nsubscribe yes\nsubmit\n";
        let (session, out) = run(script, Locale::Ru, false);
        assert!(out.contains("Регистрация успешна\nИмя: Anna\n"));
        assert!(out.contains("Подписка: Да\n"));
        assert!(session.form().state().is_empty());
    }

    #[test]
    fn test_accepted_submit_as_json() {
        let script = "name Anna\nemail a@b.co\npassword secret1\nsubmit\n";
        let (_, out) = run(script, Locale::En, true);
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["name"], "Anna");
        assert_eq!(value["subscribe"], false);
        assert_eq!(value["comment"], "");
    }

    #[test]
    fn test_unknown_field_keeps_session_alive() {
        let (session, out) = run("phone 123\nname Anna\n", Locale::En, false);
        assert!(out.starts_with("! unknown field: phone\n"));
        assert_eq!(session.form().state().name, "Anna");
    }

    #[test]
    fn test_quit_stops_reading() {
        let (session, _) = run("quit\nname Anna\n", Locale::En, false);
        assert!(session.form().state().name.is_empty());
    }

    #[test]
    fn test_show_masks_password() {
        let (_, out) = run("password secret1\ncomment hi\nshow\n", Locale::En, false);
        assert!(out.contains("Password: *******\n"));
        assert!(out.contains("Comment: hi (2/200)\n"));
    }
}
