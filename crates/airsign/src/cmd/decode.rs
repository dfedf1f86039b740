use airsign_payload::decode_payload;

use crate::cmd::{parse_hex, DecodeArgs};
use crate::exit::{payload_error, CliResult, SUCCESS};
use crate::output::{print_request, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let payload = parse_hex("payload", &args.payload)?;
    let request = decode_payload(&payload).map_err(|err| payload_error("decode failed", err))?;
    print_request(&request, format);
    Ok(SUCCESS)
}
