// Monotonic clock usable on both native and wasm32 (std::time::Instant panics in the browser)

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

pub fn now() -> AppInstant {
    AppInstant::now()
}
