use std::fs::File;
use std::io::{self, BufRead, BufReader};

use airsign_frame::{FrameReader, Ingest, Reassembler};
use airsign_payload::decode_payload;

use crate::cmd::ReassembleArgs;
use crate::exit::{frame_error, io_error, payload_error, CliError, CliResult, FAILURE, SUCCESS};
use crate::output::{print_payload, print_request, OutputFormat};

pub fn run(args: ReassembleArgs, format: OutputFormat) -> CliResult<i32> {
    let input: Box<dyn BufRead> = match &args.input {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path).map_err(|err| {
                io_error(&format!("failed opening {}", path.display()), err)
            })?;
            Box::new(BufReader::new(file))
        }
        _ => Box::new(io::stdin().lock()),
    };

    let payload = collect(FrameReader::new(input))?;

    if args.decode {
        let request =
            decode_payload(&payload).map_err(|err| payload_error("decode failed", err))?;
        print_request(&request, format);
    } else {
        print_payload(&payload, format);
    }
    Ok(SUCCESS)
}

fn collect<R: BufRead>(mut reader: FrameReader<R>) -> CliResult<bytes::Bytes> {
    let mut reassembler = Reassembler::new();

    loop {
        let frame = match reader.read_frame() {
            Ok(Some(frame)) => frame,
            Ok(None) => break,
            Err(err) => {
                let context = format!("line {}", reader.line_number());
                return Err(frame_error(&context, err));
            }
        };

        match reassembler.ingest(frame) {
            Ok(Ingest::Complete(payload)) => {
                tracing::info!(
                    frames = reassembler.received_count(),
                    size = payload.len(),
                    "payload reassembled"
                );
                return Ok(payload);
            }
            Ok(Ingest::Progressed { received, expected }) => {
                tracing::debug!(received, expected, "frame accepted");
            }
            Err(err) => {
                let context = format!("line {}", reader.line_number());
                return Err(frame_error(&context, err));
            }
        }
    }

    let missing = reassembler.missing_indices();
    Err(CliError::new(
        FAILURE,
        format!(
            "incomplete frame set: received {}/{} frames, missing {:?}",
            reassembler.received_count(),
            reassembler
                .expected_count()
                .map_or_else(|| "?".to_string(), |n| n.to_string()),
            missing
        ),
    ))
}
