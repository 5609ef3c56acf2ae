//! Full job view shown beside the bid form.

use serde::Serialize;

use crate::model::Job;
use crate::summary::{deadline_label, price_range_label, CategoryStyle};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetailView {
    pub title: String,
    pub description: String,
    pub category: String,
    pub category_style: CategoryStyle,
    pub deadline: String,
    pub buyer_name: String,
    pub buyer_email: String,
    pub buyer_photo: Option<String>,
    pub price_range: String,
}

impl JobDetailView {
    pub fn from_job(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            description: job.description.clone(),
            category: job.category.to_string(),
            category_style: CategoryStyle::for_category(&job.category),
            deadline: deadline_label(&job.deadline),
            buyer_name: job.buyer.name.clone(),
            buyer_email: job.buyer.email.clone(),
            buyer_photo: job.buyer.photo.clone(),
            price_range: price_range_label(job.min_price, job.max_price),
        }
    }

    pub fn render(&self) -> String {
        let mut out = format!(
            "{}  [{}]\n{}\n\n{}\n\nBuyer Details:\n  Name: {}\n  Email: {}\n",
            self.deadline,
            self.category.to_uppercase(),
            self.title,
            self.description,
            self.buyer_name,
            self.buyer_email,
        );
        if let Some(photo) = &self.buyer_photo {
            out.push_str(&format!("  Photo: {}\n", photo));
        }
        out.push_str(&self.price_range);
        out
    }
}
