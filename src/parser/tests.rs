//! Tests for the HTTP parser.

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::str::FromStr;

    use crate::parser::{
        parse_request, resolve_path, Error, HttpRequest, HttpVersion, Method, DEFAULT_INDEX_FILE,
    };

    #[test]
    fn test_parse_simple_get_request() {
        let request = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.method, Method::GET);
        assert_eq!(result.path, "/index.html");
        assert_eq!(result.version, HttpVersion::Http11);
    }

    #[test]
    fn test_parse_request_without_headers() {
        let request = b"GET /index.html HTTP/1.1\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.path, "/index.html");
    }

    #[test]
    fn test_parse_request_line_without_newline() {
        let result = parse_request(b"GET /a.txt HTTP/1.1").unwrap();
        assert_eq!(result.path, "/a.txt");
    }

    #[test]
    fn test_parse_request_with_bare_lf() {
        let result = parse_request(b"GET /a.txt HTTP/1.1\nHost: x\n\n").unwrap();
        assert_eq!(result.path, "/a.txt");
    }

    #[test]
    fn test_headers_are_ignored() {
        // A truncated or garbled header block does not affect the request line
        let request = b"GET /data.json HTTP/1.1\r\nthis is not a header\r\nHost: exa";
        let result = parse_request(request).unwrap();
        assert_eq!(result.path, "/data.json");
    }

    #[test]
    fn test_empty_request() {
        let result = parse_request(b"");
        assert!(matches!(result, Err(Error::EmptyRequest)));
    }

    #[test]
    fn test_single_token_request_line() {
        let result = parse_request(b"FOO\r\n\r\n");
        assert!(matches!(result, Err(Error::MalformedRequestLine(ref l)) if l == "FOO"));
    }

    #[test]
    fn test_blank_request_line() {
        let result = parse_request(b"\r\n\r\n");
        assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
    }

    #[test]
    fn test_too_many_tokens() {
        let result = parse_request(b"GET /a b HTTP/1.1\r\n\r\n");
        assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
    }

    #[test]
    fn test_leading_whitespace_rejected() {
        for request in [&b" GET / HTTP/1.1\r\n\r\n"[..], &b"  GET /index.html HTTP/1.1\r\n"[..], &b"\tGET / HTTP/1.1\r\n"[..]] {
            let result = parse_request(request);
            assert!(matches!(result, Err(Error::MalformedRequestLine(_))), "{result:?}");
        }
    }

    #[test]
    fn test_tab_separators_rejected() {
        let result = parse_request(b"GET\t/\tHTTP/1.1\r\n\r\n");
        assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
    }

    #[test]
    fn test_repeated_spaces_rejected() {
        for request in [&b"GET  / HTTP/1.1\r\n\r\n"[..], &b"GET /index.html  HTTP/1.1\r\n"[..], &b"GET / HTTP/1.1 \r\n"[..]] {
            let result = parse_request(request);
            assert!(matches!(result, Err(Error::MalformedRequestLine(_))), "{result:?}");
        }
    }

    #[test]
    fn test_no_break_space_separators_rejected() {
        let result = parse_request("GET\u{a0}/x\u{a0}HTTP/1.1\r\n".as_bytes());
        assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
    }

    #[test]
    fn test_missing_version() {
        let result = parse_request(b"GET /index.html\r\n\r\n");
        assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
    }

    #[test]
    fn test_invalid_method() {
        let result = parse_request(b"FETCH /index.html HTTP/1.1\r\n\r\n");
        assert!(matches!(result, Err(Error::InvalidMethod(ref m)) if m == "FETCH"));
    }

    #[test]
    fn test_method_is_case_sensitive() {
        let result = parse_request(b"get /index.html HTTP/1.1\r\n\r\n");
        assert!(matches!(result, Err(Error::InvalidMethod(ref m)) if m == "get"));
    }

    #[test]
    fn test_non_retrieval_methods_rejected() {
        for method in ["POST", "PUT", "DELETE", "HEAD", "OPTIONS", "PATCH"] {
            let request = format!("{method} /index.html HTTP/1.1\r\n\r\n");
            let result = parse_request(request.as_bytes());
            assert!(
                matches!(result, Err(Error::UnsupportedMethod(m)) if m.to_string() == method),
                "{method} should be rejected"
            );
        }
    }

    #[test]
    fn test_http10_rejected() {
        let result = parse_request(b"GET /index.html HTTP/1.0\r\n\r\n");
        assert!(matches!(result, Err(Error::UnsupportedVersion(HttpVersion::Http10))));
    }

    #[test]
    fn test_invalid_http_version() {
        let result = parse_request(b"GET /index.html HTTP/9.9\r\n\r\n");
        assert!(matches!(result, Err(Error::InvalidVersion(ref v)) if v == "HTTP/9.9"));
    }

    #[test]
    fn test_invalid_utf8_request_line() {
        let result = parse_request(b"GET /\xff\xfe HTTP/1.1\r\n\r\n");
        assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
    }

    #[test]
    fn test_invalid_utf8_after_request_line_is_ignored() {
        let result = parse_request(b"GET /x.png HTTP/1.1\r\nX: \xff\r\n\r\n").unwrap();
        assert_eq!(result.path, "/x.png");
    }

    #[test]
    fn test_method_from_str_and_display() {
        assert_eq!(Method::from_str("GET").unwrap(), Method::GET);
        assert_eq!(Method::GET.to_string(), "GET");
        assert!(Method::GET.is_retrieval());
        assert!(!Method::HEAD.is_retrieval());
    }

    #[test]
    fn test_method_tokens_parse_back() {
        for token in ["GET", "POST", "PUT", "DELETE", "HEAD", "OPTIONS", "PATCH"] {
            assert_eq!(Method::from_str(token).unwrap().as_str(), token);
        }
        assert!(matches!(Method::from_str("Get"), Err(Error::InvalidMethod(_))));
    }

    #[test]
    fn test_version_display() {
        assert_eq!(HttpVersion::Http11.to_string(), "HTTP/1.1");
        assert_eq!(HttpVersion::from_str("HTTP/1.0").unwrap(), HttpVersion::Http10);
        assert_eq!(HttpVersion::Http10.as_str(), "HTTP/1.0");
        assert!(matches!(HttpVersion::from_str("http/1.1"), Err(Error::InvalidVersion(_))));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(Error::EmptyRequest.to_string(), "Empty request");
        assert_eq!(
            Error::UnsupportedMethod(Method::POST).to_string(),
            "Unsupported HTTP method: POST"
        );
    }

    #[test]
    fn test_root_resolves_to_index() {
        let root = resolve_path("/", DEFAULT_INDEX_FILE);
        let index = resolve_path("/index.html", DEFAULT_INDEX_FILE);
        assert_eq!(root, index);
        assert_eq!(root.as_str(), "index.html");
    }

    #[test]
    fn test_root_uses_configured_index() {
        assert_eq!(resolve_path("/", "home.htm").as_str(), "home.htm");
    }

    #[test]
    fn test_leading_separator_stripped_once() {
        assert_eq!(resolve_path("/docs/a.txt", DEFAULT_INDEX_FILE).as_str(), "docs/a.txt");
        assert_eq!(resolve_path("//etc/hosts", DEFAULT_INDEX_FILE).as_str(), "/etc/hosts");
    }

    #[test]
    fn test_first_character_stripped_without_separator() {
        assert_eq!(resolve_path("index.html", DEFAULT_INDEX_FILE).as_str(), "ndex.html");
    }

    #[test]
    fn test_traversal_not_sanitized() {
        assert_eq!(resolve_path("/../secret", DEFAULT_INDEX_FILE).as_str(), "../secret");
    }

    #[test]
    fn test_multibyte_first_character() {
        assert_eq!(resolve_path("éa.txt", DEFAULT_INDEX_FILE).as_str(), "a.txt");
    }

    #[test]
    fn test_resolved_path_joined_to_root() {
        let resolved = resolve_path("/img/logo.png", DEFAULT_INDEX_FILE);
        assert_eq!(resolved.to_path_in(Path::new("/srv/www")), Path::new("/srv/www/img/logo.png"));
    }

    #[test]
    fn test_request_resolve() {
        let request = parse_request(b"GET / HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(request.resolve(DEFAULT_INDEX_FILE).to_string(), "index.html");
        assert_eq!(
            request,
            HttpRequest::new(Method::GET, "/".to_string(), HttpVersion::Http11)
        );
    }
}
