use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseFormat {
    Text,
    Json,
    Html,
    Prometheus,
}

impl ResponseFormat {
    pub const ALL: [ResponseFormat; 4] = [
        ResponseFormat::Text,
        ResponseFormat::Json,
        ResponseFormat::Html,
        ResponseFormat::Prometheus,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Text => "text",
            ResponseFormat::Json => "json",
            ResponseFormat::Html => "html",
            ResponseFormat::Prometheus => "prometheus",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ResponseFormat::Text => "text/plain",
            ResponseFormat::Json => "application/json",
            ResponseFormat::Html => "text/html",
            ResponseFormat::Prometheus => "text/plain",
        }
    }
}

impl FromStr for ResponseFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ResponseFormat::Text),
            "json" => Ok(ResponseFormat::Json),
            "html" => Ok(ResponseFormat::Html),
            "prometheus" => Ok(ResponseFormat::Prometheus),
            _ => Err(format!("Unknown response format: {}", s)),
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
