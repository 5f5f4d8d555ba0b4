//! Bunny Dash headless shell
//!
//! Drives one session without rendering: a reactive auto-player jumps
//! whenever the next obstacle gets close, and the terminal outcome is
//! printed as JSON. Level and seed come from the command line:
//!
//! ```text
//! bunny-dash [level 1-5] [seed]
//! ```

use bunny_dash::{Session, Viewport};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let level_id: u8 = args.next().and_then(|a| a.parse().ok()).unwrap_or(1);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(0xB0B);

    let view = Viewport { width: 800.0, height: 400.0 };
    let mut session = match Session::start(level_id, view, seed) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let speed = session.level().obstacle_speed;

    loop {
        let frame = session.tick(view);

        if let Some(outcome) = frame.outcome {
            match serde_json::to_string(&outcome) {
                Ok(json) => println!("{json}"),
                Err(err) => log::error!("failed to serialize outcome: {err}"),
            }
            break;
        }

        // React like a player: jump when the nearest approaching obstacle
        // closes within a speed-scaled distance.
        let nearest_gap = frame
            .obstacles
            .iter()
            .filter(|o| o.x + o.width >= frame.character.x)
            .map(|o| o.x - frame.character.x)
            .fold(f32::INFINITY, f32::min);
        if nearest_gap < speed * 12.0 {
            session.jump();
        }
    }
}
