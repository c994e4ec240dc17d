use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub swagger: SwaggerConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Settings for the demo data and the simulated responder map
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Load the demo reports into the store at startup
    pub seed_reports: bool,
    /// Incident latitude used by the tracking map (no geocoding in the demo)
    pub incident_lat: f64,
    /// Incident longitude used by the tracking map
    pub incident_lng: f64,
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
            app: AppConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            demo: DemoConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "ResQ API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for the ResQ emergency dashboard".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl DemoConfig {
    // Chennai city centre
    const DEFAULT_INCIDENT_LAT: f64 = 13.0827;
    const DEFAULT_INCIDENT_LNG: f64 = 80.2707;

    pub fn from_env() -> Result<Self, String> {
        let seed_reports = env::var("RESQ_SEED_DEMO_DATA")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .map_err(|_| "RESQ_SEED_DEMO_DATA must be true or false".to_string())?;

        let incident_lat = env::var("RESQ_INCIDENT_LAT")
            .unwrap_or_else(|_| Self::DEFAULT_INCIDENT_LAT.to_string())
            .parse::<f64>()
            .map_err(|_| "RESQ_INCIDENT_LAT must be a valid number".to_string())?;

        let incident_lng = env::var("RESQ_INCIDENT_LNG")
            .unwrap_or_else(|_| Self::DEFAULT_INCIDENT_LNG.to_string())
            .parse::<f64>()
            .map_err(|_| "RESQ_INCIDENT_LNG must be a valid number".to_string())?;

        Ok(Self {
            seed_reports,
            incident_lat,
            incident_lng,
        })
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed_reports: true,
            incident_lat: Self::DEFAULT_INCIDENT_LAT,
            incident_lng: Self::DEFAULT_INCIDENT_LNG,
        }
    }
}
