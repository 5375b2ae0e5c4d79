//! Prompt/echo loop around the placement validator.
//!
//! Reads one line per prompt from any `BufRead`, writes the validator's
//! verdict to any `Write`, and prints the capture report once placement is
//! finalized. Stdin/stdout in the binary, `Cursor`/`Vec<u8>` in tests.

use std::io::{self, BufRead, Write};

use log::trace;

use crate::capture::capture_evaluator::CaptureReport;
use crate::placement::placement_outcome::PlacementOutcome;
use crate::placement::placement_validator::PlacementValidator;
use crate::utils::render_board::render_board;

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Repeat each input line after its prompt (scripted input).
    pub echo: bool,
    /// Print the board diagram before the capture report.
    pub show_board: bool,
}

/// Drives `validator` until it is finalized, then prints the capture report.
pub fn run_console_session<R: BufRead, W: Write>(
    validator: &mut PlacementValidator,
    input: R,
    output: &mut W,
    options: SessionOptions,
) -> io::Result<CaptureReport> {
    let mut lines = input.lines();

    while let Some(prompt) = validator.prompt() {
        write!(output, "{prompt}")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before piece placement was finished",
            ));
        };
        let line = line.trim_end_matches(['\r', '\n']);
        trace!("read line {line:?}");

        // interactive terminals echo the typed line themselves
        if options.echo {
            writeln!(output, "{line}")?;
        }

        match validator.process_line(line) {
            PlacementOutcome::Finalized => {}
            outcome => writeln!(output, "{outcome}")?,
        }
    }

    let report = CaptureReport::from_board(validator.board(), &validator.config().codec)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

    writeln!(output)?;
    if options.show_board {
        writeln!(
            output,
            "{}\n",
            render_board(validator.board(), &validator.config().codec, true)
        )?;
    }
    writeln!(output, "{report}")?;
    output.flush()?;

    Ok(report)
}
