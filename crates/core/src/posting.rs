//! Transformation functions for MyCareersFuture search results

use serde::{Deserialize, Serialize};

use crate::lenient::{lenient, lenient_object, lenient_objects};
use crate::salary::{format_salary, RawSalary};

/// Title used when the provider sends a posting without one
pub const UNTITLED_ROLE: &str = "Untitled role";

/// Search response from the MyCareersFuture API
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RawSearchResponse {
    #[serde(default, deserialize_with = "lenient_objects")]
    pub results: Vec<RawJob>,
    #[serde(default, deserialize_with = "lenient")]
    pub total: Option<u64>,
}

/// One search result item as returned by the API
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawJob {
    #[serde(default, deserialize_with = "lenient")]
    pub uuid: Option<RawId>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub metadata: Option<RawMetadata>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub posted_company: Option<RawCompany>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub address: Option<RawAddress>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub salary: Option<RawSalary>,
    #[serde(default, deserialize_with = "lenient_objects")]
    pub categories: Vec<RawCategory>,
    #[serde(default, deserialize_with = "lenient_objects")]
    pub employment_types: Vec<RawEmploymentType>,
    #[serde(default, deserialize_with = "lenient_objects")]
    pub skills: Vec<RawSkill>,
    #[serde(default, deserialize_with = "lenient")]
    pub score: Option<f64>,
}

/// Identifier that may arrive as a string or a number
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl RawId {
    /// The identifier as text, or `None` when it is empty or zero
    pub fn to_text(&self) -> Option<String> {
        match self {
            RawId::Text(text) if !text.is_empty() => Some(text.clone()),
            RawId::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawMetadata {
    #[serde(default, deserialize_with = "lenient")]
    pub job_post_id: Option<RawId>,
    #[serde(default, deserialize_with = "lenient")]
    pub job_details_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub new_posting_date: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct RawCompany {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct RawAddress {
    #[serde(default, deserialize_with = "lenient")]
    pub street: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub district: Option<String>,
    #[serde(default, deserialize_with = "lenient_objects")]
    pub districts: Vec<RawDistrict>,
    #[serde(default, deserialize_with = "lenient")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub lng: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct RawDistrict {
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub region: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct RawCategory {
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawEmploymentType {
    #[serde(default, deserialize_with = "lenient")]
    pub employment_type: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct RawSkill {
    #[serde(default, deserialize_with = "lenient")]
    pub skill: Option<String>,
}

/// Normalized job posting, serialized as the flat record the widget consumes
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: Option<String>,
    #[serde(rename = "jobUrl")]
    pub url: Option<String>,
    pub salary: Option<String>,
    pub location: Option<String>,
    pub region: Option<String>,
    pub categories: Vec<String>,
    pub employment_types: Vec<String>,
    pub skills: Vec<String>,
    pub updated_at: Option<String>,
    pub posted_at: Option<String>,
    pub score: Option<f64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl RawJob {
    fn metadata(&self) -> Option<&RawMetadata> {
        self.metadata.as_ref()
    }

    fn address(&self) -> Option<&RawAddress> {
        self.address.as_ref()
    }

    fn primary_district(&self) -> Option<&RawDistrict> {
        self.address().and_then(|a| a.districts.first())
    }
}

fn non_empty(text: Option<&String>) -> Option<String> {
    text.filter(|t| !t.is_empty()).cloned()
}

fn names<T>(entries: &[T], name: impl Fn(&T) -> Option<&String>) -> Vec<String> {
    entries
        .iter()
        .filter_map(|entry| non_empty(name(entry)))
        .collect()
}

/// Map one raw search result to a [`JobPosting`]
///
/// `fallback_index` is the number of postings already produced for the current
/// response. It becomes the id when the provider sends neither a job post id nor
/// a UUID, which keeps ids unique within a result set.
pub fn normalize(raw: &RawJob, fallback_index: usize) -> JobPosting {
    let id = raw
        .metadata()
        .and_then(|m| m.job_post_id.as_ref())
        .and_then(RawId::to_text)
        .or_else(|| raw.uuid.as_ref().and_then(RawId::to_text))
        .unwrap_or_else(|| fallback_index.to_string());

    let location = non_empty(raw.address().and_then(|a| a.street.as_ref()))
        .or_else(|| non_empty(raw.primary_district().and_then(|d| d.location.as_ref())))
        .or_else(|| non_empty(raw.address().and_then(|a| a.district.as_ref())));

    JobPosting {
        id,
        title: non_empty(raw.title.as_ref()).unwrap_or_else(|| UNTITLED_ROLE.to_string()),
        company: raw.posted_company.as_ref().and_then(|c| c.name.clone()),
        url: raw.metadata().and_then(|m| m.job_details_url.clone()),
        salary: format_salary(raw.salary.as_ref()),
        location,
        region: raw.primary_district().and_then(|d| d.region.clone()),
        categories: names(&raw.categories, |c| c.category.as_ref()),
        employment_types: names(&raw.employment_types, |e| e.employment_type.as_ref()),
        skills: names(&raw.skills, |s| s.skill.as_ref()),
        updated_at: raw.metadata().and_then(|m| m.updated_at.clone()),
        posted_at: raw.metadata().and_then(|m| m.new_posting_date.clone()),
        score: raw.score,
        lat: raw.address().and_then(|a| a.lat),
        lng: raw.address().and_then(|a| a.lng),
    }
}

/// Normalize a batch, threading the running count as the fallback index
pub fn normalize_all(raw_jobs: &[RawJob]) -> Vec<JobPosting> {
    raw_jobs
        .iter()
        .enumerate()
        .map(|(index, raw)| normalize(raw, index))
        .collect()
}
