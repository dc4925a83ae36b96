use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub time_zone: Option<String>,
}

const DEFAULT_TIME_ZONE: &str = "UTC";

static TIME_ZONE: Mutex<Option<String>> = Mutex::new(None);

fn cached_time_zone() -> Option<String> {
    TIME_ZONE.lock().ok().and_then(|guard| guard.clone())
}

fn cache_time_zone(value: &str) -> String {
    if let Ok(mut guard) = TIME_ZONE.lock() {
        *guard = Some(value.to_string());
    }
    value.to_string()
}

fn parse_zone(value: &str) -> Tz {
    value.parse::<Tz>().unwrap_or_else(|_| {
        log::warn!("Unknown time zone '{}', falling back to UTC", value);
        Tz::UTC
    })
}

fn get_from_env_js() -> Option<String> {
    // Expect optional global object: window.__EVENTBOARD_ENV = { TIME_ZONE: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__EVENTBOARD_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    // Try upper and lower case keys
    let val = js_sys::Reflect::get(&obj, &"TIME_ZONE".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"time_zone".into()).ok());
    val.and_then(|v| v.as_string())
}

fn get_from_window_config() -> Option<String> {
    // Expect optional global object: window.__EVENTBOARD_CONFIG = { time_zone: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__EVENTBOARD_CONFIG".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"time_zone".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"TIME_ZONE".into()).ok());
    val.and_then(|v| v.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    if let Some(env_zone) = get_from_env_js() {
        return Some(env_zone);
    }
    get_from_window_config()
}

fn write_window_config(cfg: &RuntimeConfig) {
    if cfg.time_zone.is_none() {
        return;
    }
    let w = match web_sys::window() {
        Some(win) => win,
        None => return,
    };
    let obj = js_sys::Object::new();
    if let Some(zone) = &cfg.time_zone {
        let _ = js_sys::Reflect::set(
            &obj,
            &"time_zone".into(),
            &wasm_bindgen::JsValue::from_str(zone),
        );
    }
    let _ = js_sys::Reflect::set(&w, &"__EVENTBOARD_CONFIG".into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_time_zone() -> Tz {
    if let Some(cached) = cached_time_zone() {
        return parse_zone(&cached);
    }
    if let Some(existing) = snapshot_from_globals() {
        return parse_zone(&cache_time_zone(&existing));
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        if let Some(zone) = cfg.time_zone {
            return parse_zone(&cache_time_zone(&zone));
        }
    }
    parse_zone(&cache_time_zone(DEFAULT_TIME_ZONE))
}

/// The cached display time zone, without blocking on resolution. UTC until
/// [`await_time_zone`] has completed.
pub fn current_time_zone() -> Tz {
    cached_time_zone()
        .map(|zone| parse_zone(&zone))
        .unwrap_or(Tz::UTC)
}

pub async fn init() {
    let _ = await_time_zone().await;
}

#[cfg(test)]
pub fn overwrite_time_zone_for_test(zone: Option<&str>) {
    if let Ok(mut guard) = TIME_ZONE.lock() {
        *guard = zone.map(|z| z.to_string());
    }
}
