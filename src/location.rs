/// Where a model's bytes come from, decided by the identifier's scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location<'a> {
    /// `http://` or `https://` URL, kept whole.
    Remote(&'a str),
    /// Local path. A leading `file://` has been stripped.
    Local(&'a str),
}

impl<'a> Location<'a> {
    /// Classify an identifier. Only the scheme prefix is inspected; the rest
    /// of the string is handed on unchanged.
    ///
    /// `file://` is stripped without URL parsing, so a host part is not
    /// understood: `file://localhost/tmp/m.rten` becomes the relative path
    /// `localhost/tmp/m.rten`. Use `file:///tmp/m.rten` or a plain path.
    pub fn classify(identifier: &'a str) -> Self {
        if has_scheme(identifier, "http://") || has_scheme(identifier, "https://") {
            Location::Remote(identifier)
        } else if has_scheme(identifier, "file://") {
            Location::Local(&identifier["file://".len()..])
        } else {
            Location::Local(identifier)
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Location::Remote(_))
    }
}

fn has_scheme(identifier: &str, scheme: &str) -> bool {
    identifier
        .get(..scheme.len())
        .map_or(false, |prefix| prefix.eq_ignore_ascii_case(scheme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(
            Location::classify("https://example.com/model.rten"),
            Location::Remote("https://example.com/model.rten")
        );
        assert_eq!(
            Location::classify("HTTP://example.com/m.rten"),
            Location::Remote("HTTP://example.com/m.rten")
        );
        assert_eq!(
            Location::classify("file:///tmp/graph.rten"),
            Location::Local("/tmp/graph.rten")
        );
        assert_eq!(
            Location::classify("file://localhost/tmp/m.rten"),
            Location::Local("localhost/tmp/m.rten")
        );
        assert_eq!(
            Location::classify("./models/graph.json"),
            Location::Local("./models/graph.json")
        );
    }

    #[test]
    fn test_identifier_is_not_normalized() {
        // Odd paths are passed through for the file source to reject.
        assert_eq!(Location::classify(""), Location::Local(""));
        assert_eq!(
            Location::classify("  models//a b.rten "),
            Location::Local("  models//a b.rten ")
        );
        assert_eq!(Location::classify("http:/x"), Location::Local("http:/x"));
        assert!(!Location::classify("ftp://host/m.rten").is_remote());
    }
}
