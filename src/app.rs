// std imports
use std::io::{BufRead, Write};

// third-party imports
use wildcard::{Case, Pattern, quote};

// local imports
use crate::{cli::Opt, error::*, input::Input, settings::Settings};

// ---

pub struct Options {
    pub pattern: Pattern,
    pub invert_match: bool,
    pub count: bool,
    pub with_filename: bool,
}

impl Options {
    /// Combines command-line options with settings for the given number of inputs.
    ///
    /// Flags can only turn boolean settings on, an explicit filename option replaces the setting.
    pub fn new(opt: &Opt, settings: &Settings, inputs: usize) -> Self {
        let source = if opt.literal {
            quote(&opt.pattern)
        } else {
            opt.pattern.clone()
        };

        Self {
            pattern: Pattern::with_case(source, Case::from(opt.ignore_case || settings.ignore_case)),
            invert_match: opt.invert_match || settings.invert_match,
            count: opt.count,
            with_filename: opt
                .filename_option()
                .unwrap_or(settings.with_filename)
                .resolve(inputs),
        }
    }
}

/// Line filter selecting lines that match the pattern as a whole.
pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Processes all inputs in order and returns the total number of selected lines.
    pub fn run<W: Write>(&self, inputs: impl IntoIterator<Item = Input>, output: &mut W) -> Result<usize> {
        let mut total = 0;
        for mut input in inputs {
            total += self.process(&mut input, output)?;
        }
        output.flush()?;

        Ok(total)
    }

    fn process<W: Write>(&self, input: &mut Input, output: &mut W) -> Result<usize> {
        let opt = &self.options;
        let mut buf = Vec::new();
        let mut selected = 0;

        loop {
            buf.clear();
            if input.stream.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = buf.strip_suffix(b"\n").unwrap_or(&buf);
            let line = line.strip_suffix(b"\r").unwrap_or(line);

            if opt.pattern.matches(&String::from_utf8_lossy(line)) == opt.invert_match {
                continue;
            }

            selected += 1;
            if opt.count {
                continue;
            }

            if opt.with_filename {
                write!(output, "{}:", input.reference)?;
            }
            output.write_all(&buf)?;
            if !buf.ends_with(b"\n") {
                output.write_all(b"\n")?;
            }
        }

        if opt.count {
            if opt.with_filename {
                write!(output, "{}:", input.reference)?;
            }
            writeln!(output, "{}", selected)?;
        }

        log::debug!("{}: {} line(s) selected", input.reference.description(), selected);

        Ok(selected)
    }
}

/// Maps the outcome of a run to the process exit status.
///
/// `0` if any line was selected, `1` if none, `2` on error.
/// A closed output is not an error, the reader has seen everything it wanted.
pub fn exit_status(result: &Result<usize>) -> i32 {
    match result {
        Ok(0) => 1,
        Ok(_) => 0,
        Err(err) if err.is_broken_pipe() => 0,
        Err(_) => 2,
    }
}
