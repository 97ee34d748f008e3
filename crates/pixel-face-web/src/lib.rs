pub mod audio;
pub mod runner;

pub use audio::WebAudio;
pub use runner::AvatarRunner;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use pixel_face::{AvatarConfig, FaceBounds, Stimulus};

thread_local! {
    static RUNNER: RefCell<Option<AvatarRunner<WebAudio>>> = RefCell::new(None);
}

/// Run `f` against the live runner. Returns `None` before `avatar_init`
/// and after `avatar_unmount`, so late page events are dropped.
fn with_runner<R>(f: impl FnOnce(&mut AvatarRunner<WebAudio>) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn push(stimulus: Stimulus) {
    if with_runner(|r| r.push_input(stimulus)).is_none() {
        log::trace!("avatar not mounted, dropping input");
    }
}

/// Create and mount the avatar. `config_json` overrides defaults; a bad
/// config is reported and the defaults are used instead.
#[wasm_bindgen]
pub fn avatar_init(config_json: Option<String>) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = match config_json.as_deref() {
        Some(json) => AvatarConfig::from_json(json).unwrap_or_else(|err| {
            log::warn!("pixel-face: {}; using defaults", err);
            AvatarConfig::default()
        }),
        None => AvatarConfig::default(),
    };

    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let mut runner = AvatarRunner::new(config, seed, WebAudio::new());
    runner.init();

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("pixel-face: initialized");
}

#[wasm_bindgen]
pub fn avatar_tick(dt_ms: f64) {
    with_runner(|r| r.tick(dt_ms));
}

/// Unmount the avatar: cancels every timer and releases the audio context.
#[wasm_bindgen]
pub fn avatar_unmount() {
    let runner = RUNNER.with(|cell| cell.borrow_mut().take());
    if let Some(mut runner) = runner {
        runner.unmount();
    }
}

#[wasm_bindgen]
pub fn avatar_set_bounds(left: f32, top: f32, width: f32, height: f32) {
    push(Stimulus::Bounds(FaceBounds::new(left, top, width, height)));
}

#[wasm_bindgen]
pub fn avatar_pointer_move(x: f32, y: f32) {
    push(Stimulus::PointerMove { x, y });
}

#[wasm_bindgen]
pub fn avatar_click() {
    push(Stimulus::AvatarClick);
}

#[wasm_bindgen]
pub fn avatar_button_hover(name: &str) {
    push(Stimulus::ButtonHover { name: name.to_owned() });
}

#[wasm_bindgen]
pub fn avatar_button_leave() {
    push(Stimulus::ButtonLeave);
}

#[wasm_bindgen]
pub fn avatar_button_click(name: &str) {
    push(Stimulus::ButtonClick { name: name.to_owned() });
}

#[wasm_bindgen]
pub fn avatar_set_input(text: &str) {
    push(Stimulus::InputChanged { text: text.to_owned() });
}

#[wasm_bindgen]
pub fn avatar_submit_input() {
    push(Stimulus::InputSubmit);
}

#[wasm_bindgen]
pub fn avatar_visibility(hidden: bool) {
    push(Stimulus::Visibility { hidden });
}

#[wasm_bindgen]
pub fn avatar_scroll(y: f32) {
    push(Stimulus::Scroll { y });
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_frame_ptr() -> *const f32 {
    with_runner(|r| r.frame_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_frame_len() -> u32 {
    with_runner(|r| r.frame_len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_buffer_total_floats() -> u32 {
    with_runner(|r| r.buffer_total_floats()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_mood_key() -> String {
    with_runner(|r| r.mood_key()).unwrap_or("idle").to_owned()
}

#[wasm_bindgen]
pub fn get_caption() -> String {
    with_runner(|r| r.caption()).unwrap_or_default().to_owned()
}
