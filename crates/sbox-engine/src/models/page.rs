use std::fmt;

use crate::parsing::escape_path_segment;

/// A page addressed by server, project and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub name: String,
    pub project: String,
    pub server: String,
}

impl Page {
    /// Parses `[[server/]project/]name`, filling missing parts from the defaults.
    ///
    /// The server part may not itself contain `/`; pass full URLs through the
    /// defaults instead.
    pub fn parse_path(path: &str, default_project: &str, default_server: &str) -> Self {
        let mut parts = path.rsplit('/');
        let name = parts.next().unwrap_or_default().to_string();
        let project = parts.next().unwrap_or(default_project).to_string();
        let server = parts.next().unwrap_or(default_server).to_string();
        Self {
            name,
            project,
            server,
        }
    }

    /// The page URL with the name percent-escaped.
    pub fn url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.server.trim_end_matches('/'),
            self.project,
            escape_path_segment(&self.name)
        )
    }

    /// The page URL, pre-filling the body when `contents` is given.
    pub fn browse_url(&self, contents: Option<&str>) -> String {
        match contents {
            Some(contents) if !contents.is_empty() => {
                format!("{}?{}", self.url(), body_query(contents))
            }
            _ => self.url(),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.server.trim_end_matches('/'),
            self.project,
            self.name
        )
    }
}

/// Form-encoded query string that pre-fills a new page's body.
///
/// Spaces become `+`; every other byte outside `A-Za-z0-9-_.~` is escaped.
pub fn body_query(contents: &str) -> String {
    format!("body={}", urlencoding::encode(contents).replace("%20", "+"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SERVER: &str = "https://scrapbox.io";

    #[rstest]
    #[case("page", "page", "default", SERVER)]
    #[case("proj/page", "page", "proj", SERVER)]
    #[case("example.com/proj/page", "page", "proj", "example.com")]
    #[case("a/b/proj/page", "page", "proj", "b")]
    #[case("", "", "default", SERVER)]
    fn parses_page_paths(
        #[case] path: &str,
        #[case] name: &str,
        #[case] project: &str,
        #[case] server: &str,
    ) {
        assert_eq!(
            Page::parse_path(path, "default", SERVER),
            Page {
                name: name.into(),
                project: project.into(),
                server: server.into(),
            }
        );
    }

    #[test]
    fn url_escapes_name() {
        let page = Page::parse_path("proj/my page", "default", SERVER);
        assert_eq!(page.url(), "https://scrapbox.io/proj/my%20page");
        assert_eq!(page.to_string(), "https://scrapbox.io/proj/my page");
    }

    #[test]
    fn browse_url_adds_body() {
        let page = Page::parse_path("proj/new", "default", SERVER);
        assert_eq!(page.browse_url(None), "https://scrapbox.io/proj/new");
        assert_eq!(page.browse_url(Some("")), "https://scrapbox.io/proj/new");
        assert_eq!(
            page.browse_url(Some("hello world")),
            "https://scrapbox.io/proj/new?body=hello+world"
        );
    }

    #[test]
    fn body_query_escapes_markup() {
        assert_eq!(body_query("[* a]&b"), "body=%5B%2A+a%5D%26b");
    }

    #[rstest]
    #[case("a b", "body=a+b")]
    #[case("1+1", "body=1%2B1")]
    #[case("100% sure", "body=100%25+sure")]
    #[case("line\nnext", "body=line%0Anext")]
    fn body_query_is_form_encoded(#[case] contents: &str, #[case] expected: &str) {
        assert_eq!(body_query(contents), expected);
    }

    #[test]
    fn url_keeps_path_sub_delims() {
        let page = Page::parse_path("proj/Q&A: a,b", "default", SERVER);
        assert_eq!(page.url(), "https://scrapbox.io/proj/Q&A:%20a%2Cb");
    }
}
