//! Pinball entry point
//!
//! The browser build is driven from JS through `platform::web`. Natively this
//! runs a headless session: pull the plunger, launch, and work the flippers
//! while logging where the ball goes.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use pinball::renderer;
    use pinball::sim::tick::ball_speed;
    use pinball::{FrameDriver, PointerEvent, Settings, Table};

    env_logger::init();
    log::info!("Pinball (native, headless) starting...");

    // Optional settings file as the only argument
    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    let seed = settings.seed.unwrap_or_else(pinball::platform::fresh_seed);
    log::info!("Table seed: {}", seed);

    let mut table = Table::new(seed, settings.tuning.clone());
    let mut driver = FrameDriver::for_tuning(&settings.tuning);
    table.on_size_changed(1080.0, 1920.0);

    // Simulated 60 Hz display clock
    let mut now_ms = 0u64;
    driver.attach(now_ms);

    let board = table.board;
    let lane_x = (table.lane().left + board.right) / 2.0;
    let pull_y = board.bottom - table.plunger.max_pull;
    table.handle_pointer(PointerEvent::down(lane_x, board.bottom - 10.0));
    table.handle_pointer(PointerEvent::moved(lane_x, pull_y));
    log::info!("Plunger pulled {:.1} px", table.plunger.pull);
    table.handle_pointer(PointerEvent::up(lane_x, pull_y));

    let flip_line = board.top + board.height() * 0.7;
    let mut scene_bytes = 0;
    for frame in 0..600u32 {
        now_ms += 16;

        // Hold the flipper on whichever side the ball drops toward
        let ball = table.ball;
        let any_flipped = table.left.flipped || table.right.flipped;
        if ball.vel.y > 0.0 && ball.pos.y > flip_line && !any_flipped {
            table.handle_pointer(PointerEvent::down(ball.pos.x, board.top + 10.0));
        } else if any_flipped && (ball.vel.y < 0.0 || ball.pos.y < flip_line) {
            table.handle_pointer(PointerEvent::up(ball.pos.x, board.top + 10.0));
        }

        if let Some(state) = driver.frame(&mut table, now_ms) {
            scene_bytes = renderer::as_bytes(&renderer::build_scene(&state)).len();
        }

        if frame % 60 == 0 {
            log::info!(
                "frame {:>3}: ball ({:7.1}, {:7.1}) speed {:7.1}",
                frame,
                table.ball.pos.x,
                table.ball.pos.y,
                ball_speed(&table)
            );
        }
    }

    driver.detach();
    println!(
        "Simulated {} frames, last scene {} bytes, ball at ({:.1}, {:.1})",
        driver.frames(),
        scene_bytes,
        table.ball.pos.x,
        table.ball.pos.y
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
