use crate::{
    data::{MessageKind, RequestData, ResponseData},
    dump_writer::{decode_response_body, dump_file_stem, extension_for, Dump, DumpWriter},
    dumper_configuration::DumperConfiguration,
    error::Error,
    settings::Settings,
    signals::{CrawlObserver, Signals},
};
use chrono::Local;
use std::{
    fs,
    path::{Path, PathBuf},
    str,
    sync::Arc,
};

const EMPTY_BODY: &str = "(Empty body)";
const GITIGNORE_CONTENTS: &str = "*\n";

/// Dumps every scheduled request and received response to disk, for debugging purposes.
///
/// Only exists while enabled: a disabled configuration never produces an instance,
/// so nothing is created on disk and nothing is connected to the bus.
#[derive(Debug)]
pub struct DumperExtension {
    requests_dir: PathBuf,
    responses_dir: PathBuf,
}

impl DumperExtension {
    pub fn from_settings<S: Settings + ?Sized>(
        settings: &S,
        signals: &mut Signals,
    ) -> Result<Arc<Self>, Error> {
        let configuration = DumperConfiguration::from_settings(settings)?;
        Self::install(&configuration, signals)
    }

    /// Prepares the dump directories and connects the extension to `signals`.
    ///
    /// Returns `Error::NotConfigured` when the configuration is disabled.
    pub fn install(
        configuration: &DumperConfiguration,
        signals: &mut Signals,
    ) -> Result<Arc<Self>, Error> {
        if !configuration.enabled() {
            return Err(Error::NotConfigured);
        }

        let extension = Arc::new(Self {
            requests_dir: configuration.requests_dir(),
            responses_dir: configuration.responses_dir(),
        });
        extension.prepare_directories()?;
        signals.connect(extension.clone());

        tracing::info!(
            "Dumping requests to {} and responses to {}",
            extension.requests_dir.display(),
            extension.responses_dir.display()
        );

        Ok(extension)
    }

    fn prepare_directories(&self) -> Result<(), Error> {
        for directory in [&self.requests_dir, &self.responses_dir].iter() {
            fs::create_dir_all(directory)?;
            fs::write(directory.join(".gitignore"), GITIGNORE_CONTENTS)?;
        }

        Ok(())
    }

    pub fn requests_dir(&self) -> &Path {
        &self.requests_dir
    }

    pub fn responses_dir(&self) -> &Path {
        &self.responses_dir
    }

    pub fn dump_request(&self, request: &RequestData) -> Result<PathBuf, Error> {
        let stem = dump_file_stem(&Local::now(), &request.url, &request.method, None);
        let extension = extension_for(&request.headers)?;
        let body = if request.body.is_empty() {
            EMPTY_BODY
        } else {
            str::from_utf8(&request.body)?
        };

        DumpWriter::write(
            &self.requests_dir,
            &stem,
            &extension,
            &Dump {
                kind: MessageKind::Request,
                url: &request.url,
                method: &request.method,
                status: None,
                headers: &request.headers,
                body,
            },
        )
    }

    pub fn dump_response(
        &self,
        response: &ResponseData,
        request: &RequestData,
    ) -> Result<PathBuf, Error> {
        let stem = dump_file_stem(
            &Local::now(),
            &response.url,
            &request.method,
            Some(response.status_code),
        );
        let extension = extension_for(&response.headers)?;
        let body = decode_response_body(&response.headers, &response.body)?;

        DumpWriter::write(
            &self.responses_dir,
            &stem,
            &extension,
            &Dump {
                kind: MessageKind::Response,
                url: &response.url,
                method: &request.method,
                status: Some(response.status_code),
                headers: &response.headers,
                body: &body,
            },
        )
    }
}

impl CrawlObserver for DumperExtension {
    fn on_request_scheduled(&self, request: &RequestData) {
        match self.dump_request(request) {
            Ok(path) => tracing::debug!("Request dumped to {}", path.display()),
            Err(e) => tracing::debug!("Could not dump request: {}. Error: {}", request, e),
        }
    }

    fn on_response_received(&self, response: &ResponseData, request: &RequestData) {
        match self.dump_response(response, request) {
            Ok(path) => tracing::debug!("Response dumped to {}", path.display()),
            Err(e) => tracing::debug!("Could not dump response: {}. Error: {}", response, e),
        }
    }
}
