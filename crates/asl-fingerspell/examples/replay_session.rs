//! Replay a recorded landmark stream and write a JSON report.
//!
//! Usage: `replay_session [recording.json]`; defaults to the sample
//! recording under `testdata/`.

use std::path::PathBuf;

use asl_fingerspell::{replay, SessionRecording};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let path = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../testdata/sample_session.json")
    });
    let recording = SessionRecording::load_json(&path)?;
    info!(
        "replaying {} frames from {}",
        recording.frames.len(),
        path.display()
    );

    let report = replay(&recording)?;
    for frame in report.frames.iter().filter(|f| f.notified) {
        info!("{:>6} ms  {}", frame.t_ms, frame.state);
    }

    let output_path = recording.output_path();
    report.write_json(&output_path)?;
    println!("text: {:?}", report.text);
    println!("wrote replay report to {}", output_path.display());
    Ok(())
}

fn init_logging() {
    #[cfg(feature = "tracing")]
    asl_fingerspell::init_tracing(false);

    #[cfg(not(feature = "tracing"))]
    {
        let _ = asl_fingerspell::core::init_with_level(log::LevelFilter::Info);
    }
}
