//! Transit agency record.

/// The operator publishing a feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agency {
    pub id: String,
    pub name: String,
    pub url: String,
    pub timezone: String,
    pub lang: String,
    pub phone: String,
    pub fare_url: String,
}

impl Agency {
    /// The agency assumed when a feed does not name one.
    pub fn fallback() -> Self {
        Self {
            id: "GO".to_string(),
            name: "GO Transit".to_string(),
            url: "https://www.gotransit.com".to_string(),
            timezone: "America/Toronto".to_string(),
            lang: "en".to_string(),
            phone: "1-888-GET-ON-GO".to_string(),
            fare_url: "https://www.gotransit.com".to_string(),
        }
    }
}
