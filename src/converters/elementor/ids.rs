//! Element id generation.
//!
//! An id packs three 16-bit sources into 32 bits and prints them as eight
//! lowercase hex digits: `((time ^ random) << 16) | counter`. The counter is
//! process-wide and never reset, so ids produced in quick succession differ
//! even when the clock and the random source repeat.

use std::sync::atomic::{AtomicU16, Ordering};

use log::warn;

static ID_COUNTER: AtomicU16 = AtomicU16::new(0);

#[cfg(target_arch = "wasm32")]
mod clock {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = Date, js_name = now)]
        fn date_now() -> f64;
    }

    pub fn now_millis() -> u64 {
        date_now() as u64
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod clock {
    use std::time::{SystemTime, UNIX_EPOCH};

    pub fn now_millis() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Next counter value; wraps to 0 after 65535.
fn next_counter() -> u16 {
    ID_COUNTER.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
}

fn random_u16() -> u16 {
    let mut bytes = [0u8; 2];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => u16::from_le_bytes(bytes),
        Err(e) => {
            // The counter alone still keeps ids distinct within the process.
            warn!("Random source unavailable for element ids: {}", e);
            0
        }
    }
}

fn pack_id(time: u16, random: u16, counter: u16) -> String {
    let combined = (u32::from(time ^ random) << 16) | u32::from(counter);
    format!("{:08x}", combined)
}

/// Returns a fresh element id, e.g. `"3fa10007"`.
pub fn unique_id() -> String {
    let time = (clock::now_millis() & 0xFFFF) as u16;
    pack_id(time, random_u16(), next_counter())
}
