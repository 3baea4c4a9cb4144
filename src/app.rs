use std::io::{BufRead, Read, Write};

use tracing::info;

use crate::{
    common::{
        config::{Config, ListFormat},
        error::AppError,
        outcome::Outcome,
    },
    domain::registry::Registry,
    io::{console::Console, reader, writer},
    worker::processor::Processor,
};

/// Runs one session with a fresh registry built from `config`.
///
/// Commands come from the batch script when one is configured, otherwise
/// from the interactive menu on `input`.
pub fn run<R: BufRead, W: Write>(config: &Config, input: R, output: W) -> Result<(), AppError> {
    let mut registry = Registry::with_capacity(config.capacity);

    match &config.batch {
        Some(path) => {
            info!(path = %path.display(), "running batch script");
            let file = std::fs::File::open(path)?;
            run_batch(&mut registry, config.list_format, file, output)
        }
        None => run_interactive(&mut registry, config.list_format, input, output),
    }
}

/// Drives the menu loop until Exit is chosen or the input runs out.
pub fn run_interactive<R: BufRead, W: Write>(
    registry: &mut Registry,
    format: ListFormat,
    input: R,
    output: W,
) -> Result<(), AppError> {
    let mut console = Console::new(input, output);
    let mut processor = Processor::new();

    while let Some(command) = console.next_command()? {
        let outcome = processor.process(registry, command);
        writer::render_outcome(console.output(), &outcome, format)?;
        if outcome == Outcome::Exit {
            break;
        }
    }

    console.output().flush()?;
    Ok(())
}

/// Applies every command of a CSV script, stopping at the first `exit` row.
pub fn run_batch<R: Read, W: Write>(
    registry: &mut Registry,
    format: ListFormat,
    script: R,
    mut output: W,
) -> Result<(), AppError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(script);
    let mut processor = Processor::new();

    for command in reader::read_commands(&mut rdr) {
        let command = command.map_err(AppError::Parse)?;
        let outcome = processor.process(registry, command);
        writer::render_outcome(&mut output, &outcome, format)?;
        if outcome == Outcome::Exit {
            break;
        }
    }

    output.flush()?;
    Ok(())
}
