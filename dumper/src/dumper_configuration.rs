use crate::{
    error::Error,
    settings::{Settings, DEBUG_DUMP_REQUESTS_RESPONSES, DUMP_DATA_DIR},
};
use std::path::{Path, PathBuf};

const REQUESTS_DIR_NAME: &str = "_requests";
const RESPONSES_DIR_NAME: &str = "_responses";

#[derive(Debug, Clone)]
pub struct DumperConfiguration {
    enabled: bool,
    data_dir: PathBuf,
    requests_dir_name: String,
    responses_dir_name: String,
}

impl DumperConfiguration {
    pub fn new<P: Into<PathBuf>>(data_dir: P) -> Self {
        Self {
            enabled: false,
            data_dir: data_dir.into(),
            requests_dir_name: String::from(REQUESTS_DIR_NAME),
            responses_dir_name: String::from(RESPONSES_DIR_NAME),
        }
    }

    pub fn from_settings<S: Settings + ?Sized>(settings: &S) -> Result<Self, Error> {
        let data_dir = settings
            .get(DUMP_DATA_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let mut configuration = Self::new(data_dir);
        configuration.set_enabled(settings.get_bool(DEBUG_DUMP_REQUESTS_RESPONSES)?);

        Ok(configuration)
    }

    pub fn set_enabled(&mut self, value: bool) {
        self.enabled = value;
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_data_dir<P: Into<PathBuf>>(&mut self, data_dir: P) {
        self.data_dir = data_dir.into();
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn set_requests_dir_name<S: Into<String>>(&mut self, name: S) {
        self.requests_dir_name = name.into();
    }

    pub fn set_responses_dir_name<S: Into<String>>(&mut self, name: S) {
        self.responses_dir_name = name.into();
    }

    pub fn requests_dir(&self) -> PathBuf {
        self.data_dir.join(&self.requests_dir_name)
    }

    pub fn responses_dir(&self) -> PathBuf {
        self.data_dir.join(&self.responses_dir_name)
    }
}

impl Default for DumperConfiguration {
    fn default() -> Self {
        Self::new(".")
    }
}
