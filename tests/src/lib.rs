#[cfg(test)]
mod tests {
    use crawl_dumper::{
        logging::capture_logs, DumperExtension, Error, RequestData, ResponseData, Signals,
        DEBUG_DUMP_REQUESTS_RESPONSES, DUMP_DATA_DIR,
    };
    use hyper::{
        body::Bytes,
        header::{CONTENT_TYPE, USER_AGENT},
        Request, Response,
    };
    use std::{
        collections::HashMap,
        fs,
        path::{Path, PathBuf},
    };

    fn settings(enabled: &str, data_dir: &Path) -> HashMap<String, String> {
        let mut settings = HashMap::new();
        settings.insert(DEBUG_DUMP_REQUESTS_RESPONSES.to_string(), enabled.to_string());
        settings.insert(
            DUMP_DATA_DIR.to_string(),
            data_dir.to_string_lossy().into_owned(),
        );
        settings
    }

    fn dumps_in<P: AsRef<Path>>(directory: P) -> Vec<PathBuf> {
        let mut dumps: Vec<PathBuf> = fs::read_dir(directory)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| path.file_name().unwrap() != ".gitignore")
            .collect();
        dumps.sort();
        dumps
    }

    #[test]
    fn disabled_dumper_stays_out_of_the_way() {
        let dir = tempfile::tempdir().unwrap();
        let mut signals = Signals::new();

        let result = DumperExtension::from_settings(&settings("false", dir.path()), &mut signals);

        assert!(matches!(result, Err(Error::NotConfigured)));
        assert_eq!(signals.observer_count(), 0);
        assert!(!dir.path().join("_requests").exists());
        assert!(!dir.path().join("_responses").exists());
    }

    #[test]
    fn crawl_round_trip_is_dumped() {
        let dir = tempfile::tempdir().unwrap();
        let mut signals = Signals::new();
        DumperExtension::from_settings(&settings("true", dir.path()), &mut signals).unwrap();

        let request = RequestData::from_hyper(
            &Request::builder()
                .method("GET")
                .uri("https://example.com/catalogue/page-2.html")
                .header(USER_AGENT, "crawler/1.0")
                .body(Bytes::new())
                .unwrap(),
        );
        let response = ResponseData::from_hyper(
            "https://example.com/catalogue/page-2.html",
            &Response::builder()
                .status(200)
                .header(CONTENT_TYPE, "text/html; charset=utf-8")
                .body(Bytes::from_static(b"<html><body>books</body></html>"))
                .unwrap(),
        );

        let logs = capture_logs(|| {
            signals.send_request_scheduled(&request);
            signals.send_response_received(&response, &request);
        });

        let requests = dumps_in(dir.path().join("_requests"));
        assert_eq!(requests.len(), 1);
        let request_name = requests[0].file_name().unwrap().to_string_lossy().into_owned();
        assert!(request_name.ends_with("_https||examplecom|catalogue|page2html_GET.text"));
        let request_dump = fs::read_to_string(&requests[0]).unwrap();
        assert_eq!(
            request_dump,
            "<!--\n\
             REQUEST\n\
             URL: https://example.com/catalogue/page-2.html\n\
             Method: GET\n\
             Status: N/A\n\
             -->\n\
             <!-- Headers -->\n\
             <!--\n\
             user-agent: crawler/1.0\n\
             -->\n\
             <!-- Body -->\n\
             (Empty body)\n"
        );

        let responses = dumps_in(dir.path().join("_responses"));
        assert_eq!(responses.len(), 1);
        let response_name = responses[0].file_name().unwrap().to_string_lossy().into_owned();
        assert!(response_name.ends_with("_https||examplecom|catalogue|page2html_GET_200.html"));
        let response_dump = fs::read_to_string(&responses[0]).unwrap();
        assert!(response_dump.contains("content-type: text/html; charset=utf-8\n"));
        assert!(response_dump.ends_with("<!-- Body -->\n<html><body>books</body></html>\n"));

        assert!(logs.contains("Request dumped to"));
        assert!(logs.contains("Response dumped to"));
    }

    #[test]
    fn json_response_is_dumped_raw() {
        let dir = tempfile::tempdir().unwrap();
        let mut signals = Signals::new();
        DumperExtension::from_settings(&settings("1", dir.path()), &mut signals).unwrap();
        let request = RequestData::new("GET", "http://api.example.com/items?page=1");
        let mut response = ResponseData::new(200, "http://api.example.com/items?page=1");
        response
            .headers
            .insert(CONTENT_TYPE, "application/json".parse().unwrap());
        response.body = Bytes::from_static(b"[1, 2, 3]");

        signals.send_response_received(&response, &request);

        let responses = dumps_in(dir.path().join("_responses"));
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].extension().unwrap(), "json");
        assert_eq!(fs::read_to_string(&responses[0]).unwrap(), "[1, 2, 3]\n");
    }

    #[test]
    fn latin1_page_is_dumped_in_its_charset() {
        let dir = tempfile::tempdir().unwrap();
        let mut signals = Signals::new();
        DumperExtension::from_settings(&settings("true", dir.path()), &mut signals).unwrap();
        let request = RequestData::new("GET", "http://example.fr/menu");
        let mut response = ResponseData::new(200, "http://example.fr/menu");
        response.headers.insert(
            CONTENT_TYPE,
            "text/html; charset=iso-8859-1".parse().unwrap(),
        );
        response.body = Bytes::from_static(b"<p>cr\xe8me br\xfbl\xe9e</p>");

        signals.send_response_received(&response, &request);

        let responses = dumps_in(dir.path().join("_responses"));
        assert_eq!(responses.len(), 1);
        let dump = fs::read_to_string(&responses[0]).unwrap();
        assert!(dump.ends_with("<!-- Body -->\n<p>crème brûlée</p>\n"));
    }

    #[test]
    fn undecodable_response_is_logged_and_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let mut signals = Signals::new();
        DumperExtension::from_settings(&settings("true", dir.path()), &mut signals).unwrap();
        let request = RequestData::new("GET", "http://example.com/logo.png");
        let mut response = ResponseData::new(200, "http://example.com/logo.png");
        response
            .headers
            .insert(CONTENT_TYPE, "image/png".parse().unwrap());
        response.body = Bytes::from_static(b"\x89PNG\r\n\x1a\n\xff");

        let logs = capture_logs(|| signals.send_response_received(&response, &request));

        assert!(dumps_in(dir.path().join("_responses")).is_empty());
        assert!(logs.contains("DEBUG"));
        assert!(logs.contains("Could not dump response: <200 http://example.com/logo.png>"));
    }

    #[test]
    fn one_failing_dump_does_not_stop_the_next() {
        let dir = tempfile::tempdir().unwrap();
        let mut signals = Signals::new();
        let extension =
            DumperExtension::from_settings(&settings("true", dir.path()), &mut signals).unwrap();
        let mut bad = RequestData::new("POST", "http://example.com/upload");
        bad.body = Bytes::from_static(b"\xc3\x28");
        let good = RequestData::new("GET", "http://example.com/next");

        signals.send_request_scheduled(&bad);
        signals.send_request_scheduled(&good);

        let requests = dumps_in(extension.requests_dir());
        assert_eq!(requests.len(), 1);
        assert!(requests[0]
            .to_string_lossy()
            .ends_with("_http||examplecom|next_GET.text"));
    }

    #[test]
    fn dump_names_only_use_safe_characters() {
        let dir = tempfile::tempdir().unwrap();
        let mut signals = Signals::new();
        let extension =
            DumperExtension::from_settings(&settings("true", dir.path()), &mut signals).unwrap();
        let urls = [
            "http://example.com/",
            "https://example.com/a b/c?d=e&f=g#h",
            "http://[::1]:8080/ünïcödé/path",
            "ftp://example.com/..%2F..%2Fetc%2Fpasswd",
        ];

        for url in urls.iter() {
            let path = extension.dump_request(&RequestData::new("GET", *url)).unwrap();
            assert_eq!(path.parent().unwrap(), extension.requests_dir());

            let name = path.file_stem().unwrap().to_string_lossy().into_owned();
            let sanitized = name.splitn(2, '_').nth(1).unwrap().trim_end_matches("_GET");
            assert!(sanitized
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '|'));
            assert!(!sanitized.contains('/'));
        }
    }
}
