use crate::constants::*;
use crate::map::MapSettings;
use crate::models::LatLng;
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Backend bind host
    pub host: String,
    /// Backend bind port
    pub port: u16,
    /// Base URL the client sends route searches to
    pub api_base_url: String,
    /// Per-request timeout; `None` leaves the transport default in place
    pub request_timeout: Option<Duration>,
    pub map: MapSettings,
}

impl MapSettings {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let lat: f64 = env::var("MAP_DEFAULT_LAT")
            .unwrap_or_else(|_| defaults.center.lat.to_string())
            .parse()
            .map_err(|_| "Invalid MAP_DEFAULT_LAT")?;
        let lng: f64 = env::var("MAP_DEFAULT_LNG")
            .unwrap_or_else(|_| defaults.center.lng.to_string())
            .parse()
            .map_err(|_| "Invalid MAP_DEFAULT_LNG")?;
        let center = LatLng::new(lat, lng)?;

        let zoom: u8 = env::var("MAP_DEFAULT_ZOOM")
            .unwrap_or_else(|_| defaults.zoom.to_string())
            .parse()
            .map_err(|_| "Invalid MAP_DEFAULT_ZOOM")?;
        if zoom > MAX_MAP_ZOOM {
            return Err(format!("MAP_DEFAULT_ZOOM must be at most {}", MAX_MAP_ZOOM));
        }

        Ok(MapSettings {
            center,
            zoom,
            tile_url: env::var("MAP_TILE_URL").unwrap_or(defaults.tile_url),
            attribution: env::var("MAP_TILE_ATTRIBUTION").unwrap_or(defaults.attribution),
            ..defaults
        })
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let api_base_url =
            env::var("SAFEROUTE_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(format!(
                "SAFEROUTE_API_URL must be an http(s) URL, got '{}'",
                api_base_url
            ));
        }

        let request_timeout = match env::var("SAFEROUTE_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw
                    .parse()
                    .map_err(|_| "Invalid SAFEROUTE_REQUEST_TIMEOUT_SECS")?;
                if secs == 0 {
                    return Err("SAFEROUTE_REQUEST_TIMEOUT_SECS must be positive".to_string());
                }
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            api_base_url,
            request_timeout,
            map: MapSettings::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 9] = [
        "SAFEROUTE_API_URL",
        "SAFEROUTE_REQUEST_TIMEOUT_SECS",
        "MAP_DEFAULT_LAT",
        "MAP_DEFAULT_LNG",
        "MAP_DEFAULT_ZOOM",
        "MAP_TILE_URL",
        "MAP_TILE_ATTRIBUTION",
        "HOST",
        "PORT",
    ];

    fn clear_env() {
        for var in VARS {
            unsafe { env::remove_var(var) };
        }
    }

    #[test]
    #[serial]
    fn config_defaults() {
        clear_env();
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.api_base_url, "http://localhost:5000");
        assert_eq!(cfg.request_timeout, None);
        assert_eq!(cfg.server_address(), "0.0.0.0:5000");
        assert_eq!(cfg.map.center, LatLng { lat: 28.6139, lng: 77.2090 });
        assert_eq!(cfg.map.zoom, 12);
        assert_eq!(cfg.map.tile_url, DEFAULT_TILE_URL);
    }

    #[test]
    #[serial]
    fn config_overrides() {
        clear_env();
        unsafe {
            env::set_var("SAFEROUTE_API_URL", "https://routes.example.org");
            env::set_var("SAFEROUTE_REQUEST_TIMEOUT_SECS", "15");
            env::set_var("MAP_DEFAULT_LAT", "48.8566");
            env::set_var("MAP_DEFAULT_LNG", "2.3522");
            env::set_var("MAP_DEFAULT_ZOOM", "14");
            env::set_var("PORT", "8080");
        }
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.api_base_url, "https://routes.example.org");
        assert_eq!(cfg.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(cfg.map.center.lat, 48.8566);
        assert_eq!(cfg.map.zoom, 14);
        assert_eq!(cfg.port, 8080);
        clear_env();
    }

    #[test]
    #[serial]
    fn config_rejects_bad_values() {
        clear_env();
        unsafe { env::set_var("SAFEROUTE_API_URL", "localhost:5000") };
        assert!(Config::from_env().is_err());
        clear_env();

        unsafe { env::set_var("SAFEROUTE_REQUEST_TIMEOUT_SECS", "0") };
        assert!(Config::from_env().is_err());
        clear_env();

        unsafe { env::set_var("MAP_DEFAULT_LAT", "95") };
        assert!(Config::from_env().is_err());
        clear_env();

        unsafe { env::set_var("MAP_DEFAULT_ZOOM", "25") };
        assert!(Config::from_env().is_err());
        clear_env();
    }
}
