use std::io::{BufRead, Write};

use anyhow::Result;
use log::warn;

use crate::{parse_line, write_output, AccessProvider, Output, SessionManager};

/// Reads commands line by line until `quit` or end of input. Bad lines are reported and skipped.
pub fn run_console<R, W, A>(mut input: R, mut output: W, manager: &mut SessionManager<A>) -> Result<()>
where
    R: BufRead,
    W: Write,
    A: AccessProvider,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let outputs = match std::str::from_utf8(&buf) {
            Ok(line) => match parse_line(line.trim()) {
                Ok(command) => manager.command(command),
                Err(e) => {
                    warn!("{}", e);
                    vec![Output::Warning(e.to_string())]
                }
            },
            Err(e) => {
                warn!("Input line is not valid UTF-8: {}", e);
                vec![Output::Warning("input line is not valid UTF-8".to_string())]
            }
        };

        for out in &outputs {
            if *out == Output::Quit {
                output.flush()?;
                return Ok(());
            }

            write_output(&mut output, out)?;
        }

        output.flush()?;
    }

    Ok(())
}
