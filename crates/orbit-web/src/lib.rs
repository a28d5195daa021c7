pub mod runner;

pub use runner::PlaybackRunner;

use std::cell::RefCell;

use js_sys::Float64Array;
use orbit_engine::{position_velocity_index, rate_label, ClockCommand, PlaybackConfig};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<PlaybackRunner>> = RefCell::new(None);
}

/// Run `f` against the playback runner, creating a default one if `playback_init`
/// was never called.
fn with_runner<R>(f: impl FnOnce(&mut PlaybackRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        f(borrow.get_or_insert_with(PlaybackRunner::default))
    })
}

fn to_js(err: orbit_engine::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Install the panic hook and console logger, then create the runner.
/// An empty `config_json` selects the defaults.
#[wasm_bindgen]
pub fn playback_init(config_json: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = if config_json.trim().is_empty() {
        PlaybackConfig::default()
    } else {
        PlaybackConfig::from_json(config_json).map_err(to_js)?
    };

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(PlaybackRunner::new(config));
    });
    log::info!("orbit playback: initialized");
    Ok(())
}

#[wasm_bindgen]
pub fn playback_load_scenario(json: &str) -> Result<(), JsValue> {
    with_runner(|r| r.load_scenario_json(json)).map_err(|err| {
        log::error!("scenario rejected: {err}");
        to_js(err)
    })
}

/// Advance by one rendered frame of `dt` real seconds. Returns the ticks run.
#[wasm_bindgen]
pub fn playback_frame(dt: f64) -> u32 {
    with_runner(|r| r.frame(dt))
}

// ---- Clock controls (applied at the next frame) ----

#[wasm_bindgen]
pub fn playback_toggle_running() {
    with_runner(|r| r.push_command(ClockCommand::ToggleRunning));
}

#[wasm_bindgen]
pub fn playback_stop() {
    with_runner(|r| r.push_command(ClockCommand::Stop));
}

#[wasm_bindgen]
pub fn playback_increase_rate() {
    with_runner(|r| r.push_command(ClockCommand::IncreaseRate));
}

#[wasm_bindgen]
pub fn playback_decrease_rate() {
    with_runner(|r| r.push_command(ClockCommand::DecreaseRate));
}

#[wasm_bindgen]
pub fn playback_reset_rate() {
    with_runner(|r| r.push_command(ClockCommand::ResetRate));
}

#[wasm_bindgen]
pub fn playback_reset_time() {
    with_runner(|r| r.push_command(ClockCommand::ResetTime));
}

#[wasm_bindgen]
pub fn playback_seek(time: f64) {
    with_runner(|r| r.push_command(ClockCommand::Seek(time)));
}

// ---- Clock state ----

#[wasm_bindgen]
pub fn get_time() -> f64 {
    with_runner(|r| r.clock().time())
}

#[wasm_bindgen]
pub fn get_rate_exponent() -> i32 {
    with_runner(|r| r.clock().rate_exponent())
}

#[wasm_bindgen]
pub fn get_rate_label() -> String {
    with_runner(|r| rate_label(r.clock().rate_exponent()))
}

#[wasm_bindgen]
pub fn is_running() -> bool {
    with_runner(|r| r.clock().is_running())
}

#[wasm_bindgen]
pub fn get_time_span_end() -> f64 {
    with_runner(|r| r.clock().time_span_end())
}

// ---- Body data ----

#[wasm_bindgen]
pub fn get_positions_ptr() -> *const f64 {
    with_runner(|r| r.positions_ptr())
}

#[wasm_bindgen]
pub fn get_body_count() -> u32 {
    with_runner(|r| r.body_count() as u32)
}

#[wasm_bindgen]
pub fn get_body_name(index: u32) -> Option<String> {
    with_runner(|r| r.body_name(index as usize).map(str::to_owned))
}

/// Flat xyz sample points of a sampled body, in meters.
#[wasm_bindgen]
pub fn get_path(name: &str) -> Option<Float64Array> {
    with_runner(|r| r.path(name)).map(|points| Float64Array::from(points.as_slice()))
}

/// `[samples, out_of_domain, not_converged]` counters.
#[wasm_bindgen]
pub fn get_diagnostics() -> Float64Array {
    let d = with_runner(|r| r.diagnostics());
    Float64Array::from(&[d.samples as f64, d.out_of_domain as f64, d.not_converged as f64][..])
}

/// Heliocentric mean-J2000 equatorial state of planet `index` (1 = Mercury .. 8 = Neptune)
/// as `[x, y, z, vx, vy, vz, status]` in au and au/day. Status is 0 nominal,
/// 1 remote date, 2 not converged and -1 for an illegal index (state zeroed).
#[wasm_bindgen]
pub fn planet_position_velocity(date1: f64, date2: f64, index: i32) -> Float64Array {
    let out = match position_velocity_index(date1, date2, index) {
        Ok(state) => {
            let p = state.position;
            let v = state.velocity;
            [p.x, p.y, p.z, v.x, v.y, v.z, state.status.code() as f64]
        }
        Err(err) => {
            log::warn!("{err}");
            [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0]
        }
    };
    Float64Array::from(&out[..])
}
