//! Job listings as returned by the marketplace backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::wire;

/// Job category.
///
/// Three categories get dedicated styling; every other label is kept verbatim
/// so it can still be shown and echoed back on bids.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    GraphicsDesign,
    WebDevelopment,
    DigitalMarketing,
    Other(String),
}

impl Category {
    pub const GRAPHICS_DESIGN: &'static str = "Graphics Design";
    pub const WEB_DEVELOPMENT: &'static str = "Web Development";
    pub const DIGITAL_MARKETING: &'static str = "Digital Marketing";

    /// Maps a backend label to a category. Matching is exact.
    pub fn from_label(label: &str) -> Self {
        match label {
            Self::GRAPHICS_DESIGN => Category::GraphicsDesign,
            Self::WEB_DEVELOPMENT => Category::WebDevelopment,
            Self::DIGITAL_MARKETING => Category::DigitalMarketing,
            other => Category::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::GraphicsDesign => Self::GRAPHICS_DESIGN,
            Category::WebDevelopment => Self::WEB_DEVELOPMENT,
            Category::DigitalMarketing => Self::DIGITAL_MARKETING,
            Category::Other(label) => label,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(Category::from_label(&label))
    }
}

/// The person who posted a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buyer {
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// A posted work listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "jobTitle")]
    pub title: String,

    #[serde(rename = "jobDescription", default)]
    pub description: String,

    #[serde(rename = "jobCategory")]
    pub category: Category,

    /// Lower bound of the budget. Not checked against `max_price`.
    #[serde(rename = "minPrice", with = "wire::price")]
    pub min_price: f64,

    #[serde(rename = "maxPrice", with = "wire::price")]
    pub max_price: f64,

    #[serde(with = "wire::date")]
    pub deadline: DateTime<Utc>,

    pub buyer: Buyer,

    /// Maintained by the backend; incremented when a bid is accepted.
    #[serde(default, with = "wire::count")]
    pub bid_count: u64,
}

impl Job {
    pub fn is_past_deadline(&self, at: DateTime<Utc>) -> bool {
        at > self.deadline
    }

    pub fn is_posted_by(&self, email: &str) -> bool {
        self.buyer.email == email
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_json() -> &'static str {
        r#"{
            "_id": "6650f1c2a1b2c3d4e5f60718",
            "jobTitle": "Landing page redesign",
            "jobDescription": "Rework the marketing landing page.",
            "jobCategory": "Web Development",
            "minPrice": 100,
            "maxPrice": "500",
            "deadline": "2024-05-14T00:00:00.000Z",
            "buyer": {
                "name": "Rafi",
                "email": "b@x.com",
                "photo": "https://example.com/rafi.png"
            },
            "bid_count": 3
        }"#
    }

    #[test]
    fn test_deserialize_backend_job() {
        let job: Job = serde_json::from_str(sample_json()).unwrap();

        assert_eq!(job.id, "6650f1c2a1b2c3d4e5f60718");
        assert_eq!(job.category, Category::WebDevelopment);
        assert_eq!(job.min_price, 100.0);
        assert_eq!(job.max_price, 500.0);
        assert_eq!(
            job.deadline,
            Utc.with_ymd_and_hms(2024, 5, 14, 0, 0, 0).unwrap()
        );
        assert_eq!(job.buyer.email, "b@x.com");
        assert_eq!(job.bid_count, 3);
    }

    #[test]
    fn test_missing_bid_count_defaults_to_zero() {
        let json = r#"{
            "_id": "1", "jobTitle": "t", "jobCategory": "Copywriting",
            "minPrice": 1, "maxPrice": 2, "deadline": "2024-01-01",
            "buyer": {"email": "b@x.com"}
        }"#;
        let job: Job = serde_json::from_str(json).unwrap();

        assert_eq!(job.bid_count, 0);
        assert_eq!(job.description, "");
        assert_eq!(job.category, Category::Other("Copywriting".to_string()));
        assert_eq!(job.buyer.photo, None);
    }

    #[test]
    fn test_category_label_roundtrip() {
        for label in [
            "Graphics Design",
            "Web Development",
            "Digital Marketing",
            "web development",
            "",
        ] {
            assert_eq!(Category::from_label(label).as_str(), label);
        }
        assert_eq!(
            Category::from_label("web development"),
            Category::Other("web development".to_string())
        );
    }

    #[test]
    fn test_deadline_comparison_is_strict() {
        let job: Job = serde_json::from_str(sample_json()).unwrap();
        assert!(!job.is_past_deadline(job.deadline));
        assert!(job.is_past_deadline(job.deadline + chrono::Duration::milliseconds(1)));
    }
}
