//! Boar-out entry point
//!
//! Headless host: runs the fixed-rate game loop, steers the paddle with a
//! simple autopilot and prints ASCII frames to stdout.

use std::io::{self, Write};
use std::time::Instant;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use boarout::consts::PADDLE_WIDTH;
use boarout::platform::{FpsCounter, Key, Keyboard};
use boarout::renderer::AsciiSurface;
use boarout::{Game, Settings};

/// Fatal host failures. The game itself never fails.
#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error("failed to write frame: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize state: {0}")]
    Snapshot(#[from] serde_json::Error),
}

fn main() {
    env_logger::init();

    let settings = Settings::default();
    log::info!(
        "{} starting ({}x{} @ {} Hz)",
        settings.window_title,
        settings.window_width,
        settings.window_height,
        settings.tick_rate
    );

    if let Err(e) = run(&settings) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(settings: &Settings) -> Result<(), HostError> {
    let mut game = Game::new(Pcg32::from_rng(&mut rand::rng()));
    let (width, height) = game.layout(settings.window_width, settings.window_height);
    let mut surface = AsciiSurface::new(width as usize, height as usize);
    let mut keyboard = Keyboard::new();
    let mut fps = FpsCounter::new();
    let start = Instant::now();
    let mut out = io::stdout().lock();

    // The game starts paused; press pause once to get going
    keyboard.press(Key::Escape);

    let mut ticks = 0;
    while ticks < settings.max_ticks && !game.state().is_over() {
        let frame_start = Instant::now();

        if settings.autopilot {
            steer(&game, &mut keyboard);
        }
        game.update(&keyboard.snapshot(fps.fps()));
        keyboard.end_frame();
        keyboard.release(Key::Escape);
        ticks += 1;

        if settings.should_render(ticks) && !game.state().is_over() {
            present(&game, &mut surface, &mut out, ticks)?;
        }

        fps.record(start.elapsed().as_secs_f64() * 1000.0);
        if let Some(rest) = settings
            .frame_duration()
            .and_then(|budget| budget.checked_sub(frame_start.elapsed()))
        {
            std::thread::sleep(rest);
        }
    }

    present(&game, &mut surface, &mut out, ticks)?;
    log::info!("Stopped after {} ticks with score {}", ticks, game.state().score);
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("Final state: {}", serde_json::to_string(game.state())?);
    }
    Ok(())
}

/// Hold left or right to keep the paddle under the ball
fn steer(game: &Game<Pcg32>, keyboard: &mut Keyboard) {
    let state = game.state();
    let center = state.paddle_x + PADDLE_WIDTH / 2.0;
    let ball_x = state.ball.pos.x;

    keyboard.release(Key::Left);
    keyboard.release(Key::Right);
    if ball_x < center - state.speed {
        keyboard.press(Key::Left);
    } else if ball_x > center + state.speed {
        keyboard.press(Key::Right);
    }
}

/// Draw the current frame and a status line
fn present(
    game: &Game<Pcg32>,
    surface: &mut AsciiSurface,
    out: &mut impl Write,
    ticks: u64,
) -> Result<(), HostError> {
    surface.clear();
    game.render(surface);
    write!(out, "{}", surface.render())?;
    let state = game.state();
    writeln!(
        out,
        "tick {}  lives {}  score {}  {:?}",
        ticks, state.lives, state.score, state.phase
    )?;
    out.flush()?;
    Ok(())
}
