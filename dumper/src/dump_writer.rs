use crate::{data::MessageKind, error::Error, sanitize::safe_filename};
use chrono::{DateTime, TimeZone};
use encoding_rs::{Encoding, UTF_8};
use hyper::{
    header::{HeaderName, HeaderValue, CONTENT_TYPE},
    HeaderMap,
};
use std::{
    borrow::Cow,
    fmt::Display,
    fs,
    io::Write,
    path::{Path, PathBuf},
    str,
};

/// Extensions that get the commented metadata block in front of the body.
const TEXT_EXTENSIONS: [&str; 4] = ["html", "xml", "text", "plain"];
const DEFAULT_CONTENT_TYPE: &str = "application/text";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const NOT_APPLICABLE: &str = "N/A";

/// Everything that ends up inside one dump file.
#[derive(Debug, Clone)]
pub struct Dump<'a> {
    pub kind: MessageKind,
    pub url: &'a str,
    pub method: &'a str,
    pub status: Option<u16>,
    pub headers: &'a HeaderMap,
    pub body: &'a str,
}

pub struct DumpWriter;

impl DumpWriter {
    /// Writes `dump` to `{directory}/{stem}.{extension}` and returns that path.
    ///
    /// The whole file is rendered before anything touches the disk, so a header
    /// that can't be rendered leaves no file behind.
    pub fn write<P: AsRef<Path>>(
        directory: P,
        stem: &str,
        extension: &str,
        dump: &Dump,
    ) -> Result<PathBuf, Error> {
        let path = directory
            .as_ref()
            .join(format!("{}.{}", stem, extension));
        let contents = Self::render(extension, dump)?;

        fs::write(&path, contents)?;

        Ok(path)
    }

    fn render(extension: &str, dump: &Dump) -> Result<Vec<u8>, Error> {
        let mut contents = Vec::with_capacity(dump.body.len() + 256);

        if Self::is_text_extension(extension) {
            let status = dump
                .status
                .map(|status| status.to_string())
                .unwrap_or_else(|| String::from(NOT_APPLICABLE));

            writeln!(contents, "<!--")?;
            writeln!(contents, "{}", dump.kind)?;
            writeln!(contents, "URL: {}", dump.url)?;
            writeln!(contents, "Method: {}", dump.method)?;
            writeln!(contents, "Status: {}", status)?;
            writeln!(contents, "-->")?;
            writeln!(contents, "<!-- Headers -->")?;
            writeln!(contents, "<!--")?;
            for name in dump.headers.keys() {
                if let Some(value) = dump.headers.get(name) {
                    writeln!(contents, "{}: {}", name, header_str(name, value)?)?;
                }
            }
            writeln!(contents, "-->")?;
            writeln!(contents, "<!-- Body -->")?;
        }

        writeln!(contents, "{}", dump.body)?;

        Ok(contents)
    }

    pub fn is_text_extension(extension: &str) -> bool {
        TEXT_EXTENSIONS.contains(&extension)
    }
}

fn header_str<'a>(name: &HeaderName, value: &'a HeaderValue) -> Result<&'a str, Error> {
    str::from_utf8(value.as_bytes())
        .map_err(|e| Error::InvalidHeaderValue(name.to_string(), e))
}

fn content_type(headers: &HeaderMap) -> Result<&str, Error> {
    match headers.get(CONTENT_TYPE) {
        Some(value) => header_str(&CONTENT_TYPE, value),
        None => Ok(DEFAULT_CONTENT_TYPE),
    }
}

/// The MIME subtype of `Content-Type`, parameters stripped.
/// Without the header this is `text`.
pub fn extension_for(headers: &HeaderMap) -> Result<String, Error> {
    let content_type = content_type(headers)?;
    let mime = content_type.split(';').next().unwrap_or_default();
    let subtype = mime.rsplit('/').next().unwrap_or_default();

    Ok(subtype.trim().to_string())
}

/// Decodes a response body with the `charset` declared in `Content-Type`.
/// UTF-8 when no charset is declared or the label is unknown.
pub fn decode_response_body<'a>(
    headers: &HeaderMap,
    body: &'a [u8],
) -> Result<Cow<'a, str>, Error> {
    let encoding = content_type(headers)?
        .split(';')
        .skip(1)
        .filter_map(|parameter| {
            let (key, value) = parameter.split_once('=')?;
            if key.trim().eq_ignore_ascii_case("charset") {
                Encoding::for_label(value.trim().trim_matches('"').as_bytes())
            } else {
                None
            }
        })
        .next()
        .unwrap_or(UTF_8);

    if encoding == UTF_8 {
        return Ok(Cow::Borrowed(str::from_utf8(body)?));
    }

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| Error::UndecodableBody(encoding.name()))
}

pub fn dump_file_stem<Tz>(
    timestamp: &DateTime<Tz>,
    url: &str,
    method: &str,
    status: Option<u16>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut stem = format!(
        "{}_{}_{}",
        timestamp.format(TIMESTAMP_FORMAT),
        safe_filename(url),
        method
    );
    if let Some(status) = status {
        stem.push('_');
        stem.push_str(&status.to_string());
    }

    stem
}
