//! Server configuration read from the environment.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};
use crate::models::AttendanceSchema;

/// Environment variable naming the bind address.
pub const BIND_VAR: &str = "SALARY_BIND";
/// Environment variable selecting the attendance schema generation.
pub const SCHEMA_VAR: &str = "SALARY_ATTENDANCE_SCHEMA";
/// Environment variable pointing at the seed file.
pub const SEED_VAR: &str = "SALARY_SEED";

/// Bind address used when `SALARY_BIND` is unset.
const DEFAULT_BIND: &str = "127.0.0.1:3000";
/// Seed file picked up when `SALARY_SEED` is unset and the file exists.
const DEFAULT_SEED: &str = "config/seed.yaml";

/// Server configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Attendance schema generation the deployment runs under.
    pub schema: AttendanceSchema,
    /// Seed file applied when the store starts empty, if any.
    pub seed_path: Option<PathBuf>,
}

impl AppConfig {
    /// Reads the configuration from environment variables.
    ///
    /// `SALARY_BIND` defaults to `127.0.0.1:3000`, `SALARY_ATTENDANCE_SCHEMA`
    /// to `v2`. `SALARY_SEED` defaults to `config/seed.yaml` when that file
    /// exists; an explicitly named seed file must exist.
    pub fn from_env() -> EngineResult<Self> {
        let bind_addr = match std::env::var(BIND_VAR) {
            Ok(raw) => raw.parse().map_err(|_| EngineError::ConfigParse {
                path: BIND_VAR.to_string(),
                message: format!("'{}' is not a socket address", raw),
            })?,
            Err(_) => DEFAULT_BIND.parse().expect("default bind address parses"),
        };

        let schema = match std::env::var(SCHEMA_VAR) {
            Ok(label) => {
                AttendanceSchema::from_label(&label).map_err(|_| EngineError::ConfigParse {
                    path: SCHEMA_VAR.to_string(),
                    message: format!("'{}' is not a schema generation (v1 or v2)", label),
                })?
            }
            Err(_) => AttendanceSchema::V2,
        };

        let seed_path = match std::env::var(SEED_VAR) {
            Ok(raw) => {
                let path = PathBuf::from(raw);
                if !path.exists() {
                    return Err(EngineError::ConfigNotFound {
                        path: path.display().to_string(),
                    });
                }
                Some(path)
            }
            Err(_) => {
                let path = Path::new(DEFAULT_SEED);
                path.exists().then(|| path.to_path_buf())
            }
        };

        Ok(Self {
            bind_addr,
            schema,
            seed_path,
        })
    }
}
