//! Environment-variable configuration, assembled once at startup.
//!
//! Every variable listed here is optional except the ROM variant
//! itself; missing values fall back to the documented defaults. A
//! malformed value (e.g. a non-numeric port) is a [`ConfigError`] and
//! is fatal, per the harness's error-handling policy.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::variant::RomVariant;

#[derive(Debug, Clone)]
pub struct MqttConfig {
    pub broker: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub client_id: Option<String>,
}

impl MqttConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("MQTT_PORT") {
            Ok(v) => v.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "MQTT_PORT",
                value: v,
            })?,
            Err(_) => 1883,
        };
        Ok(Self {
            broker: env::var("MQTT_BROKER").unwrap_or_else(|_| "localhost".to_string()),
            port,
            username: env::var("MQTT_USERNAME").ok(),
            password: env::var("MQTT_PASSWORD").ok(),
            client_id: env::var("MQTT_CLIENT_ID").ok(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub variant: RomVariant,
    pub rom_path: PathBuf,
    pub save_state_path: PathBuf,
    pub autosave_interval: Duration,
    pub autoload_state: bool,
    pub autosave_enabled: bool,
    pub mqtt: MqttConfig,
}

fn rom_file_name(variant: RomVariant) -> (&'static str, &'static str) {
    match variant {
        RomVariant::Red => ("PKM_ROM_RED_NAME", "PokemonRed.gb"),
        RomVariant::Blue => ("PKM_ROM_BLUE_NAME", "PokemonBlue.gb"),
        RomVariant::Yellow => ("PKM_ROM_YELLOW_NAME", "PokemonYellow.gb"),
    }
}

impl Config {
    /// Assemble configuration from the environment. `variant` is
    /// supplied by the caller (typically parsed from a CLI argument)
    /// rather than read from the environment, since it is the one
    /// setting this harness cannot sensibly default.
    pub fn from_env(variant: RomVariant) -> Result<Self, ConfigError> {
        let rom_base = env::var("ROM_BASE_PATH").unwrap_or_else(|_| "games/".to_string());
        let (var_name, default_name) = rom_file_name(variant);
        let rom_file = env::var(var_name).unwrap_or_else(|_| default_name.to_string());
        let rom_path = PathBuf::from(rom_base).join(rom_file);

        let save_state_path = match env::var("SAVE_STATE_PATH") {
            Ok(v) => PathBuf::from(v),
            Err(_) => {
                let mut p = rom_path.clone();
                let mut name = p.file_name().unwrap_or_default().to_os_string();
                name.push(".state");
                p.set_file_name(name);
                p
            }
        };

        let autosave_interval = match env::var("AUTOSAVE_INTERVAL_SECONDS") {
            Ok(v) => {
                let secs: f64 = v.parse().map_err(|_| ConfigError::InvalidValue {
                    name: "AUTOSAVE_INTERVAL_SECONDS",
                    value: v,
                })?;
                Duration::from_secs_f64(secs)
            }
            Err(_) => Duration::from_secs(100),
        };

        let autoload_state = match env::var("AUTOLOAD_STATE") {
            Ok(v) => parse_bool(&v).ok_or_else(|| ConfigError::InvalidValue {
                name: "AUTOLOAD_STATE",
                value: v,
            })?,
            Err(_) => true,
        };

        Ok(Self {
            variant,
            rom_path,
            save_state_path,
            autosave_interval,
            autoload_state,
            autosave_enabled: true,
            mqtt: MqttConfig::from_env()?,
        })
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment-variable tests must not run concurrently with each
    // other (the process environment is global state).
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_all() {
        for var in [
            "ROM_BASE_PATH",
            "PKM_ROM_RED_NAME",
            "PKM_ROM_BLUE_NAME",
            "PKM_ROM_YELLOW_NAME",
            "SAVE_STATE_PATH",
            "AUTOSAVE_INTERVAL_SECONDS",
            "AUTOLOAD_STATE",
            "MQTT_BROKER",
            "MQTT_PORT",
            "MQTT_USERNAME",
            "MQTT_PASSWORD",
            "MQTT_CLIENT_ID",
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all();
        let cfg = Config::from_env(RomVariant::Red).unwrap();
        assert_eq!(cfg.rom_path, PathBuf::from("games/PokemonRed.gb"));
        assert_eq!(cfg.autosave_interval, Duration::from_secs(100));
        assert!(cfg.autoload_state);
        assert_eq!(cfg.mqtt.port, 1883);
    }

    #[test]
    fn invalid_port_is_a_config_error() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all();
        env::set_var("MQTT_PORT", "not-a-number");
        let result = Config::from_env(RomVariant::Blue);
        assert!(result.is_err());
        clear_all();
    }
}
