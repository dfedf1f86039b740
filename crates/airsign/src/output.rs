use std::io::{IsTerminal, Write};

use airsign_frame::{Frame, FrameWriter};
use airsign_payload::command::is_transaction;
use airsign_payload::{command_name, SigningRequest};
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

use crate::exit::{frame_error, CliResult};

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct PayloadOutput {
    size: usize,
    payload: String,
}

#[derive(Serialize)]
struct FrameOutput {
    index: u16,
    count: u16,
    chunk_size: usize,
    frame: String,
}

#[derive(Serialize)]
struct RequestOutput<'a> {
    network_tag: u8,
    crypto: &'a str,
    crypto_code: u8,
    command: u8,
    command_name: &'a str,
    public_key: String,
    data: String,
    data_text: Option<&'a str>,
    genesis_hash: String,
    payload_size: usize,
}

/// Print an encoded payload.
pub fn print_payload(payload: &[u8], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = PayloadOutput {
                size: payload.len(),
                payload: hex::encode(payload),
            };
            print_json(&out);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["SIZE", "PAYLOAD"])
                .add_row(vec![payload.len().to_string(), hex::encode(payload)]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("size={} payload={}", payload.len(), hex::encode(payload));
        }
        OutputFormat::Raw => {
            print_raw(payload);
        }
    }
}

/// Print a frame set. Pretty and raw formats emit one hex frame per line.
pub fn print_frames(frames: &[Frame], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => {
            let out: Vec<FrameOutput> = frames.iter().map(frame_output).collect();
            print_json(&out);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["INDEX", "COUNT", "SIZE", "FRAME"]);
            for frame in frames {
                let out = frame_output(frame);
                table.add_row(vec![
                    out.index.to_string(),
                    out.count.to_string(),
                    out.chunk_size.to_string(),
                    out.frame,
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            let mut writer = FrameWriter::new(std::io::stdout().lock());
            writer
                .write_all(frames)
                .map_err(|err| frame_error("failed writing frames", err))?;
        }
    }
    Ok(())
}

/// Print a decoded signing request.
pub fn print_request(request: &SigningRequest, format: OutputFormat) {
    let data_text = if is_transaction(request.command) {
        None
    } else {
        std::str::from_utf8(&request.data).ok()
    };
    let out = RequestOutput {
        network_tag: request.network_tag,
        crypto: request.crypto.name(),
        crypto_code: request.crypto.code(),
        command: request.command,
        command_name: command_name(request.command),
        public_key: hex::encode(request.public_key),
        data: hex::encode(&request.data),
        data_text,
        genesis_hash: hex::encode(request.genesis_hash),
        payload_size: request.wire_size(),
    };

    match format {
        OutputFormat::Json => print_json(&out),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FIELD", "VALUE"])
                .add_row(vec!["network".to_string(), format!("0x{:02x}", out.network_tag)])
                .add_row(vec!["crypto".to_string(), request.crypto.to_string()])
                .add_row(vec![
                    "command".to_string(),
                    format!("{} ({})", out.command_name, out.command),
                ])
                .add_row(vec!["public key".to_string(), out.public_key.clone()])
                .add_row(vec!["data".to_string(), data_preview(&out)])
                .add_row(vec!["genesis hash".to_string(), out.genesis_hash.clone()]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("Signing Request:");
            println!("  Network:      0x{:02x}", out.network_tag);
            println!("  Crypto:       {}", request.crypto);
            println!("  Command:      {} ({})", out.command_name, out.command);
            println!("  Public key:   {}", out.public_key);
            println!("  Data:         {}", data_preview(&out));
            println!("  Genesis hash: {}", out.genesis_hash);
        }
        OutputFormat::Raw => {
            print_raw(&request.data);
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

fn frame_output(frame: &Frame) -> FrameOutput {
    FrameOutput {
        index: frame.index,
        count: frame.count,
        chunk_size: frame.chunk.len(),
        frame: hex::encode(frame.to_bytes()),
    }
}

fn data_preview(out: &RequestOutput<'_>) -> String {
    match out.data_text {
        Some(text) => format!("\"{text}\" ({} bytes)", text.len()),
        None => format!("0x{} ({} bytes)", out.data, out.data.len() / 2),
    }
}
