use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

/// Tuning knobs for the geospatial search path. Held as an explicit immutable
/// struct and passed into the services rather than read as ambient globals.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Assumed straight-line travel speed in km/h for the time estimate.
    pub average_speed_kmh: f64,
    /// Half-width of the square search box, in coordinate degrees.
    pub search_range_degrees: f64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            database: DatabaseConfig::from_env()?,
            search: SearchConfig::from_env()?,
        })
    }
}

impl DatabaseConfig {
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            url,
            max_connections,
            acquire_timeout_secs,
        })
    }
}

impl SearchConfig {
    const DEFAULT_AVERAGE_SPEED_KMH: f64 = 80.0;
    const DEFAULT_SEARCH_RANGE_DEGREES: f64 = 2.0;

    pub fn from_env() -> Result<Self, String> {
        let average_speed_kmh = env::var("AVERAGE_SPEED_KMH")
            .unwrap_or_else(|_| Self::DEFAULT_AVERAGE_SPEED_KMH.to_string())
            .parse::<f64>()
            .map_err(|_| "AVERAGE_SPEED_KMH must be a valid number".to_string())?;

        let search_range_degrees = env::var("SEARCH_RANGE_DEGREES")
            .unwrap_or_else(|_| Self::DEFAULT_SEARCH_RANGE_DEGREES.to_string())
            .parse::<f64>()
            .map_err(|_| "SEARCH_RANGE_DEGREES must be a valid number".to_string())?;

        Ok(Self {
            average_speed_kmh,
            search_range_degrees,
        })
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            average_speed_kmh: Self::DEFAULT_AVERAGE_SPEED_KMH,
            search_range_degrees: Self::DEFAULT_SEARCH_RANGE_DEGREES,
        }
    }
}
