use bytes::Bytes;

use airsign_frame::{split_with_config, FrameConfig};

use crate::cmd::encode::build_request;
use crate::cmd::{parse_hex, SplitArgs};
use crate::exit::{frame_error, CliResult, SUCCESS};
use crate::output::{print_frames, OutputFormat};

pub fn run(args: SplitArgs, format: OutputFormat) -> CliResult<i32> {
    let payload = match &args.payload {
        Some(hex) => Bytes::from(parse_hex("--payload", hex)?),
        None => build_request(&args.request)?.encode(),
    };

    let config = FrameConfig {
        max_chunk_size: args.chunk_size,
    };
    let frames = split_with_config(payload, &config)
        .map_err(|err| frame_error("split failed", err))?;

    tracing::info!(
        frames = frames.len(),
        chunk_size = args.chunk_size,
        "payload split"
    );
    print_frames(&frames, format)?;
    Ok(SUCCESS)
}
