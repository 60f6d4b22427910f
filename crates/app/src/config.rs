use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from environment variables.
///
/// All fields have defaults suitable for a fresh install; a `.env` file
/// next to the executable overrides them.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite database URL (default: `sqlite://causa.db`).
    pub database_url: String,
    /// Root of the client-keyed document store (default: `./documents`).
    pub document_root: PathBuf,
    /// Wall-clock limit for liquidator runs (default: 60 s).
    pub tool_timeout: Duration,
    /// PP-OCR model locations; `None` disables the OCR fallback.
    pub ocr: Option<OcrModelConfig>,
}

/// Paths to the PP-OCR ONNX models and character key file.
#[derive(Debug, Clone)]
pub struct OcrModelConfig {
    pub detection_model: PathBuf,
    pub recognition_model: PathBuf,
    pub character_keys: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default             |
    /// |--------------------------|---------------------|
    /// | `CAUSA_DATABASE_URL`     | `sqlite://causa.db` |
    /// | `CAUSA_DOCUMENT_ROOT`    | `./documents`       |
    /// | `CAUSA_TOOL_TIMEOUT_SECS`| `60`                |
    /// | `CAUSA_OCR_DET_MODEL`    | unset               |
    /// | `CAUSA_OCR_REC_MODEL`    | unset               |
    /// | `CAUSA_OCR_KEYS`         | unset               |
    ///
    /// OCR is enabled only when all three model variables are set.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("CAUSA_DATABASE_URL").unwrap_or_else(|_| "sqlite://causa.db".into());

        let document_root: PathBuf = std::env::var("CAUSA_DOCUMENT_ROOT")
            .unwrap_or_else(|_| "./documents".into())
            .into();

        let tool_timeout_secs: u64 = std::env::var("CAUSA_TOOL_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("CAUSA_TOOL_TIMEOUT_SECS must be a valid u64");

        let ocr = match (
            std::env::var("CAUSA_OCR_DET_MODEL"),
            std::env::var("CAUSA_OCR_REC_MODEL"),
            std::env::var("CAUSA_OCR_KEYS"),
        ) {
            (Ok(det), Ok(rec), Ok(keys)) => Some(OcrModelConfig {
                detection_model: det.into(),
                recognition_model: rec.into(),
                character_keys: keys.into(),
            }),
            _ => None,
        };

        Self {
            database_url,
            document_root,
            tool_timeout: Duration::from_secs(tool_timeout_secs),
            ocr,
        }
    }
}
