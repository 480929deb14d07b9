use lazy_static::lazy_static;
use web_sys::window;

lazy_static! {
    pub static ref API_BASE_URL: Option<String> = get_api_base_url();
}

pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    // Check if env_config is undefined
    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    // Get the specific environment variable
    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    // Convert to string if it's not undefined
    if !value.is_undefined() {
        value.as_string()
    } else {
        log::warn!("Environment variable '{}' is undefined", key);
        None
    }
}

pub fn get_backend_url() -> Option<String> {
    get_env_var("BACKEND_URL")
}

/// All endpoints live under a fixed `/api` prefix on the backend.
/// `None` means the client runs unconfigured: requests fail with a
/// descriptive error instead of hitting a guessed address.
pub fn get_api_base_url() -> Option<String> {
    let backend_url = get_backend_url()?;
    Some(format!("{}/api", backend_url.trim_end_matches('/')))
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| "YouTube Shorts Automation".to_string())
}

pub fn is_debug_mode() -> bool {
    get_env_var("DEBUG_MODE")
        .unwrap_or_else(|| "false".to_string())
        .parse()
        .unwrap_or(false)
}
