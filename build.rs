use std::env;
use std::fs;
use std::path::Path;

/// Keys read through `option_env!` in src/config.rs.
const CONFIG_KEYS: &[&str] = &[
    "API_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
    "USE_MOCK_FALLBACK",
    "TOAST_DURATION_MS",
];

fn unquote(value: &str) -> &str {
    let value = value.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = value.strip_prefix(quote).and_then(|v| v.strip_suffix(quote)) {
            return inner;
        }
    }
    value
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=campus-materials: no .env, building with the defaults from src/config.rs");
        return;
    };
    println!("cargo:rerun-if-changed=.env");

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            println!("cargo:warning=campus-materials: ignoring .env line without '=': {}", line);
            continue;
        };
        let key = key.trim().trim_start_matches("export ").trim();
        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=campus-materials: unknown .env key {}", key);
            continue;
        }
        // The process environment overrides .env.
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, unquote(value));
        }
    }
}
