mod data;
mod dump_writer;
mod dumper_configuration;
mod error;
mod extension;
pub mod logging;
mod sanitize;
mod settings;
mod signals;

pub use data::{MessageKind, RequestData, ResponseData};
pub use dump_writer::{dump_file_stem, extension_for, Dump, DumpWriter};
pub use dumper_configuration::DumperConfiguration;
pub use error::Error;
pub use extension::DumperExtension;
pub use sanitize::safe_filename;
pub use settings::{Settings, TomlSettings, DEBUG_DUMP_REQUESTS_RESPONSES, DUMP_DATA_DIR};
pub use signals::{CrawlObserver, Signals};
