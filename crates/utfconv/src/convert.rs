use std::{fs, path::Path, vec::Vec};

use log::{debug, info, warn};

use crate::{ConversionError, ConversionStats, ConvertOptions, Direction, UTF32_UNIT_LEN, convert_buffer};

/// Converts the file at `input` and writes the result to `output`.
///
/// `output` is created or truncated. If the conversion fails part way, the
/// bytes converted before the failing unit are still written and the error is
/// returned; nothing is rolled back.
///
/// # Errors
///
/// Any I/O failure or codec failure, wrapped in a [`ConversionError`].
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    direction: Direction,
) -> Result<(), ConversionError> {
    convert_file_with(input, output, direction, &ConvertOptions::default()).map(|_| ())
}

/// [`convert_file`] with explicit codec options, returning the conversion
/// counters.
///
/// # Errors
///
/// As [`convert_file`].
pub fn convert_file_with(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    direction: Direction,
    options: &ConvertOptions,
) -> Result<ConversionStats, ConversionError> {
    let (input, output) = (input.as_ref(), output.as_ref());
    info!(
        "Converting {} -> {} ({direction})",
        input.display(),
        output.display()
    );

    let data = fs::read(input).map_err(ConversionError::io)?;
    debug!("Read {} bytes from {}", data.len(), input.display());

    let capacity = match direction {
        Direction::Utf32ToUtf8 => data.len() / UTF32_UNIT_LEN,
        Direction::Utf8ToUtf32 => data.len() * UTF32_UNIT_LEN,
    };
    let mut converted = Vec::with_capacity(capacity);
    let result = convert_buffer(&data, direction, options, &mut converted);

    let written = fs::write(output, &converted);
    match (result, written) {
        (Ok(stats), Ok(())) => {
            info!(
                "Converted {} code points, wrote {} bytes to {}",
                stats.code_points,
                stats.bytes_written,
                output.display()
            );
            Ok(stats)
        }
        (Ok(_), Err(err)) => {
            warn!("Could not write {}: {err}", output.display());
            Err(ConversionError::io(err))
        }
        (Err(err), written) => {
            warn!(
                "Aborted {direction} conversion of {}: {err}: {}; kept {} bytes of output",
                input.display(),
                err.cause(),
                converted.len()
            );
            if let Err(write_err) = written {
                warn!("Could not write partial output {}: {write_err}", output.display());
            }
            Err(err)
        }
    }
}
