//! Job card: the compact listing shown on browse pages.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{Category, Job};
use crate::navigate::Route;

/// Maximum number of description characters shown on a card.
pub const DEFAULT_DESCRIPTION_LIMIT: usize = 100;

/// Badge colour for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryStyle {
    Blue,
    Green,
    Red,
    /// Any category without a dedicated colour. Renders unstyled.
    Fallback,
}

impl CategoryStyle {
    pub fn for_category(category: &Category) -> Self {
        match category {
            Category::GraphicsDesign => CategoryStyle::Blue,
            Category::WebDevelopment => CategoryStyle::Green,
            Category::DigitalMarketing => CategoryStyle::Red,
            Category::Other(_) => CategoryStyle::Fallback,
        }
    }

    /// Utility classes applied to the badge.
    pub fn classes(&self) -> &'static str {
        match self {
            CategoryStyle::Blue => "bg-blue-200 text-blue-800",
            CategoryStyle::Green => "bg-green-200 text-green-800",
            CategoryStyle::Red => "bg-red-200 text-red-800",
            CategoryStyle::Fallback => "",
        }
    }
}

/// Everything a card renders, derived from one job.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub link: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub category_style: CategoryStyle,
    pub deadline: String,
    pub price_range: String,
    pub bid_count: String,
}

impl JobSummary {
    pub fn from_job(job: &Job) -> Self {
        Self::with_limit(job, DEFAULT_DESCRIPTION_LIMIT)
    }

    pub fn with_limit(job: &Job, description_limit: usize) -> Self {
        Self {
            link: Route::JobDetail(job.id.clone()).path(),
            title: job.title.clone(),
            excerpt: truncate(&job.description, description_limit).to_string(),
            category: job.category.to_string(),
            category_style: CategoryStyle::for_category(&job.category),
            deadline: deadline_label(&job.deadline),
            price_range: price_range_label(job.min_price, job.max_price),
            bid_count: format!("Total Bids: {}", job.bid_count),
        }
    }

    /// Plain-text rendering for terminals.
    pub fn render(&self) -> String {
        format!(
            "{}  [{}]\n{}\n{}\n{}\n{}\n-> {}",
            self.deadline,
            self.category.to_uppercase(),
            self.title,
            self.excerpt,
            self.price_range,
            self.bid_count,
            self.link
        )
    }
}

/// Returns the first `limit` characters of `text`.
pub fn truncate(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Short US date, e.g. `05/14/2024`.
pub fn format_short_date(date: &DateTime<Utc>) -> String {
    date.format("%m/%d/%Y").to_string()
}

pub fn deadline_label(date: &DateTime<Utc>) -> String {
    format!("Deadline: {}", format_short_date(date))
}

pub fn price_range_label(min: f64, max: f64) -> String {
    format!("Range: ${} - ${}", min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Buyer;
    use chrono::TimeZone;

    fn job_with(description: &str, category: Category) -> Job {
        Job {
            id: "abc123".to_string(),
            title: "Brand kit".to_string(),
            description: description.to_string(),
            category,
            min_price: 100.0,
            max_price: 500.0,
            deadline: Utc.with_ymd_and_hms(2024, 5, 14, 0, 0, 0).unwrap(),
            buyer: Buyer {
                name: "Rafi".to_string(),
                email: "b@x.com".to_string(),
                photo: None,
            },
            bid_count: 7,
        }
    }

    #[test]
    fn test_summary_labels() {
        let summary = JobSummary::from_job(&job_with("Short", Category::GraphicsDesign));

        assert_eq!(summary.link, "/job/abc123");
        assert_eq!(summary.deadline, "Deadline: 05/14/2024");
        assert_eq!(summary.price_range, "Range: $100 - $500");
        assert_eq!(summary.bid_count, "Total Bids: 7");
        assert_eq!(summary.excerpt, "Short");
        assert_eq!(summary.category_style, CategoryStyle::Blue);
    }

    #[test]
    fn test_category_styles() {
        let cases = [
            (Category::GraphicsDesign, "bg-blue-200 text-blue-800"),
            (Category::WebDevelopment, "bg-green-200 text-green-800"),
            (Category::DigitalMarketing, "bg-red-200 text-red-800"),
            (Category::Other("Video Editing".to_string()), ""),
            (Category::Other(String::new()), ""),
        ];
        for (category, classes) in cases {
            assert_eq!(CategoryStyle::for_category(&category).classes(), classes);
        }
    }

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("hello", 3), "hel");
        assert_eq!(truncate("héllo wörld", 7), "héllo w");
        assert_eq!(truncate("", 100), "");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_long_description_is_cut_to_limit() {
        let description = "x".repeat(250);
        let summary = JobSummary::from_job(&job_with(&description, Category::WebDevelopment));
        assert_eq!(summary.excerpt.chars().count(), DEFAULT_DESCRIPTION_LIMIT);
        assert!(description.starts_with(&summary.excerpt));
    }

    #[test]
    fn test_fractional_prices_keep_decimals() {
        assert_eq!(price_range_label(99.5, 120.0), "Range: $99.5 - $120");
    }

    #[test]
    fn test_render_contains_every_field() {
        let summary = JobSummary::from_job(&job_with("Design a logo", Category::DigitalMarketing));
        let text = summary.render();
        assert!(text.contains("DIGITAL MARKETING"));
        assert!(text.contains("Design a logo"));
        assert!(text.contains("Total Bids: 7"));
        assert!(text.ends_with("-> /job/abc123"));
    }
}
