//! Animated transfer example — a producer loops frames, a scanner reassembles.
//!
//! Run with:
//!   cargo run --example animated-transfer

use std::sync::mpsc;
use std::thread;

use airsign::frame::{FrameConfig, Ingest, Reassembler};
use airsign::payload::{CryptoAlgorithm, EncoderConfig, PayloadData, SigningRequest, SIGN_MESSAGE};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let request = SigningRequest::new(
        &EncoderConfig::default(),
        CryptoAlgorithm::Sr25519,
        SIGN_MESSAGE,
        &[0x11; 32],
        PayloadData::parse("I authorize this air-gapped signature. ".repeat(8).as_str())?,
        &[0x22; 32],
    )?;
    let frames = airsign::prepare(&request, &FrameConfig { max_chunk_size: 48 })?;
    eprintln!("[display] {} frames", frames.len());

    let (tx, rx) = mpsc::channel();
    let display = thread::spawn(move || {
        // The animation loops; the scanner joins part-way through the first pass.
        let start = frames.len() / 2;
        for frame in frames.iter().cycle().skip(start).take(frames.len() * 2) {
            if tx.send(frame.clone()).is_err() {
                break;
            }
        }
    });

    let mut reassembler = Reassembler::new();
    let mut payload = None;
    for frame in rx {
        match reassembler.ingest(frame)? {
            Ingest::Progressed { received, expected } => {
                eprintln!("[scanner] {received}/{expected}");
            }
            Ingest::Complete(bytes) => {
                payload = Some(bytes);
                break;
            }
        }
    }
    let _ = display.join();

    let payload = payload.ok_or("animation ended before all frames were seen")?;
    let scanned = SigningRequest::decode(&payload)?;
    eprintln!(
        "[scanner] {} request, {} data bytes, matches: {}",
        scanned.crypto,
        scanned.data.len(),
        scanned == request
    );
    Ok(())
}
