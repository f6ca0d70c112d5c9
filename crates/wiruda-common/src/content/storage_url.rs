use percent_encoding::percent_decode_str;
use url::Url;

/// A stored object located from its public URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageObject {
    pub bucket: String,
    pub path: String,
}

impl StorageObject {
    /// Locate the object behind a public storage URL.
    ///
    /// Two layouts are recognized around the `public` segment:
    /// - `.../object/public/<bucket>/<path...>` (storage API form)
    /// - `.../<bucket>/public/<path...>` (bucket-prefixed form)
    ///
    /// Returns `None` for malformed URLs, URLs without a `public` segment, or
    /// when the bucket or path is empty.
    #[must_use]
    pub fn from_public_url(public_url: &str) -> Option<Self> {
        let url = Url::parse(public_url.trim()).ok()?;
        let segments: Vec<&str> = url
            .path_segments()?
            .filter(|segment| !segment.is_empty())
            .collect();

        let public_index = segments.iter().position(|segment| *segment == "public")?;
        let (bucket, rest) = match public_index.checked_sub(1).map(|i| segments[i]) {
            Some(before) if before != "object" => (before, &segments[public_index + 1..]),
            _ => (
                *segments.get(public_index + 1)?,
                &segments[public_index + 2..],
            ),
        };

        let bucket = decode(bucket)?;
        let path = rest
            .iter()
            .map(|segment| decode(segment))
            .collect::<Option<Vec<_>>>()?
            .join("/");

        if bucket.is_empty() || path.is_empty() {
            return None;
        }

        Some(Self { bucket, path })
    }
}

fn decode(segment: &str) -> Option<String> {
    percent_decode_str(segment)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}
