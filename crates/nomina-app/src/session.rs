use std::io::{self, BufRead, Write};

use nomina_core::normalize_input;

use crate::state::{AppState, Resolved};

/// What the user typed at a prompt
enum Reply {
    Line(String),
    Quit,
}

/// Outcome of the language prompt
enum LanguagePick {
    Chosen(Resolved),
    /// Unknown language: start over from the country prompt
    Invalid,
    Quit,
}

/// Interactive country -> language -> translation loop
pub struct Session<'a, R, W> {
    state: &'a AppState,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(state: &'a AppState, input: R, output: W) -> Self {
        Self {
            state,
            input,
            output,
        }
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let Some(country) = self.choose_country()? else {
                break;
            };
            let language = match self.choose_language(&country)? {
                LanguagePick::Chosen(language) => language,
                LanguagePick::Invalid => continue,
                LanguagePick::Quit => break,
            };

            match self.state.translate(&country, &language) {
                Some(translation) => writeln!(
                    self.output,
                    "{} in {} is {}",
                    country.name, language.name, translation
                )?,
                None => writeln!(self.output, "Translation not available.")?,
            }

            writeln!(
                self.output,
                "Press enter to continue or type '{}' to exit.",
                self.state.prompt.quit_command
            )?;
            if let Reply::Quit = self.read_reply()? {
                break;
            }
        }

        tracing::debug!("Session ended");
        Ok(())
    }

    /// Prompt until a valid country is picked. `None` means quit.
    fn choose_country(&mut self) -> io::Result<Option<Resolved>> {
        loop {
            let names = self.state.country_names();
            self.print_choices("countries", &names)?;
            writeln!(
                self.output,
                "Select a country from above or type '{}' to exit:",
                self.state.prompt.quit_command
            )?;

            let Reply::Line(input) = self.read_reply()? else {
                return Ok(None);
            };

            match self.state.resolve_country(&input) {
                Some(country) => {
                    tracing::debug!(code = %country.code, "country selected");
                    return Ok(Some(country));
                }
                None => writeln!(self.output, "Invalid country name. Please try again.")?,
            }
        }
    }

    fn choose_language(&mut self, country: &Resolved) -> io::Result<LanguagePick> {
        let names = self.state.language_names(&country.code);
        self.print_choices("languages", &names)?;
        writeln!(
            self.output,
            "Select a language from above or type '{}' to exit:",
            self.state.prompt.quit_command
        )?;

        let Reply::Line(input) = self.read_reply()? else {
            return Ok(LanguagePick::Quit);
        };

        match self.state.resolve_language(&input) {
            Some(language) => {
                tracing::debug!(code = %language.code, "language selected");
                Ok(LanguagePick::Chosen(language))
            }
            None => {
                writeln!(self.output, "Invalid language name. Please try again.")?;
                Ok(LanguagePick::Invalid)
            }
        }
    }

    fn print_choices(&mut self, label: &str, names: &[String]) -> io::Result<()> {
        writeln!(self.output, "Available {label}:")?;
        for name in names {
            writeln!(self.output, "{name}")?;
        }
        Ok(())
    }

    /// Read one line. End of input counts as quitting.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, so the line just fails to match.
    fn read_reply(&mut self) -> io::Result<Reply> {
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            tracing::debug!("End of input");
            return Ok(Reply::Quit);
        }

        let line = normalize_input(&String::from_utf8_lossy(&raw));
        if self.state.is_quit(&line) {
            return Ok(Reply::Quit);
        }
        Ok(Reply::Line(line))
    }
}
