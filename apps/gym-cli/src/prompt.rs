// prompt.rs - Line-oriented prompts for the interactive menu.
//
// Reads from any BufRead and writes to any Write, so sessions can be driven
// by scripted input in tests. End of input is reported as `None` from every
// read, which callers treat like "go back".

use std::fmt::Display;
use std::io::{self, BufRead, Stdin, Stdout, Write};

pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl Prompter<io::StdinLock<'static>, Stdout> {
    /// Prompter over the real terminal.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Write one line of output.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.writer, "{}", text)
    }

    /// Show `prompt` and read one trimmed line. `None` at end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Read a whole number, asking again until one is given.
    pub fn read_int(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<i64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say("Please enter a whole number.")?,
            }
        }
    }

    /// Read a finite decimal number, asking again until one is given.
    pub fn read_f64(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.replace(',', ".").parse::<f64>() {
                Ok(value) if value.is_finite() => return Ok(Some(value)),
                _ => self.say("Please enter a number.")?,
            }
        }
    }

    /// Yes/no question that also accepts `0` to go back.
    ///
    /// Returns `Some(true)` for s/si/y/yes, `Some(false)` for n/no and `None`
    /// for `0` or end of input. Anything else is asked again.
    pub fn yes_no_back(&mut self, prompt: &str) -> io::Result<Option<bool>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.to_lowercase().as_str() {
                "s" | "si" | "sí" | "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                "0" => return Ok(None),
                _ => self.say("Please answer 's', 'n' or '0' to go back.")?,
            }
        }
    }

    /// Yes/no question where anything but yes counts as no.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        let answer = self.read_line(prompt)?.unwrap_or_default().to_lowercase();
        Ok(matches!(answer.as_str(), "s" | "si" | "sí" | "y" | "yes"))
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.writer
    }
}
