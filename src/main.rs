//! Interactive play binary: human against the engine on the terminal.

use drop_four::cli::play_top::{run_stdio_loop, PlayConfig};

fn main() {
    let mut config = PlayConfig::default();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--second" => config.human_plays_first = false,
            "--no-color" => config.color = false,
            other => {
                if let Some(ms) = other.strip_prefix("--movetime=") {
                    if let Ok(ms) = ms.parse() {
                        config.movetime_ms = ms;
                    }
                }
            }
        }
    }

    if let Err(err) = run_stdio_loop(config) {
        eprintln!("io error: {err}");
        std::process::exit(1);
    }
}
