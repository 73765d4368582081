//! Slingshot headless runner
//!
//! Loads a room file, simulates it frame by frame and logs what happened.
//!
//! ```text
//! slingshot <room.json> [--frames N] [--settings settings.json] [--save-positions out.bin]
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod runner {
    use std::error::Error;
    use std::path::PathBuf;

    use clap::Parser;
    use slingshot::persistence::{load_room, save_positions_to};
    use slingshot::{Settings, advance_frame};

    /// Simulate a slingshot room headlessly
    #[derive(Debug, Parser)]
    #[command(name = "slingshot", version, about)]
    pub struct Args {
        /// Room file (JSON)
        pub room: PathBuf,
        /// Frames to simulate (defaults to the settings value)
        #[arg(long)]
        pub frames: Option<u32>,
        /// Settings file (JSON)
        #[arg(long)]
        pub settings: Option<PathBuf>,
        /// Write final position records here
        #[arg(long, value_name = "PATH")]
        pub save_positions: Option<PathBuf>,
    }

    pub fn run(args: Args) -> Result<(), Box<dyn Error>> {
        let settings = args
            .settings
            .as_deref()
            .map(Settings::load)
            .unwrap_or_default();
        let mut room = load_room(&args.room)?;
        let frames = args.frames.unwrap_or(settings.frames);

        let mut total_contacts = 0;
        for frame in 0..frames {
            let report = advance_frame(&mut room, &settings);
            total_contacts += report.contacts.len();
            for kind in &report.removed {
                log::info!("Frame {}: {:?} removed", frame, kind);
            }
            if !report.removed.is_empty() && report.level_cleared() {
                log::info!("Frame {}: level cleared", frame);
                break;
            }
        }

        log::info!(
            "Simulated up to {} frames: {} contacts, {} entities left, {} pigs",
            frames,
            total_contacts,
            room.count(),
            room.pig_count()
        );
        for (i, entity) in room.iter().enumerate() {
            println!(
                "{:>3} {:<16} x={:<5} y={:<5} vel={:?}",
                i,
                format!("{:?}", entity.kind),
                entity.rect.x,
                entity.rect.y,
                entity.vel()
            );
        }

        if let Some(path) = &args.save_positions {
            save_positions_to(&room, path)?;
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_full() {
            let parsed = Args::try_parse_from([
                "slingshot",
                "room.json",
                "--frames",
                "60",
                "--settings",
                "s.json",
                "--save-positions",
                "out.bin",
            ])
            .unwrap();
            assert_eq!(parsed.room, PathBuf::from("room.json"));
            assert_eq!(parsed.frames, Some(60));
            assert_eq!(parsed.settings, Some(PathBuf::from("s.json")));
            assert_eq!(parsed.save_positions, Some(PathBuf::from("out.bin")));
        }

        #[test]
        fn test_parse_equals_form() {
            let parsed = Args::try_parse_from(["slingshot", "room.json", "--frames=60"]).unwrap();
            assert_eq!(parsed.frames, Some(60));
            assert_eq!(parsed.settings, None);
        }

        #[test]
        fn test_help_is_not_an_error() {
            let err = Args::try_parse_from(["slingshot", "--help"]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        }

        #[test]
        fn test_parse_errors() {
            assert!(Args::try_parse_from(["slingshot"]).is_err());
            assert!(Args::try_parse_from(["slingshot", "room.json", "--frames", "lots"]).is_err());
            assert!(Args::try_parse_from(["slingshot", "room.json", "--bogus"]).is_err());
            assert!(Args::try_parse_from(["slingshot", "a.json", "b.json"]).is_err());
        }

        #[test]
        fn test_command_definition() {
            use clap::CommandFactory;
            Args::command().debug_assert();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Slingshot runner starting...");

    use clap::Parser;
    let args = runner::Args::parse();
    if let Err(err) = runner::run(args) {
        log::error!("{}", err);
        eprintln!("slingshot: {err}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The runner needs a filesystem; the library is used directly on the web
}
