//! Static job and internship catalogue.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum EmploymentType {
    #[serde(rename = "Full-time")]
    FullTime,
    Contract,
    Internship,
}

impl EmploymentType {
    pub fn label(self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full-time",
            EmploymentType::Contract => "Contract",
            EmploymentType::Internship => "Internship",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: u32,
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    pub tags: &'static [&'static str],
    /// Key of the company logo in the client's image catalogue.
    pub logo_id: &'static str,
}

pub const JOB_LISTINGS: &[JobListing] = &[
    JobListing {
        id: 1,
        title: "Senior Frontend Engineer",
        company: "Google",
        location: "Mountain View, CA",
        employment_type: EmploymentType::FullTime,
        tags: &["React", "TypeScript", "Web Performance"],
        logo_id: "google-logo",
    },
    JobListing {
        id: 2,
        title: "Product Manager, AI",
        company: "Microsoft",
        location: "Redmond, WA",
        employment_type: EmploymentType::FullTime,
        tags: &["AI/ML", "Product Strategy", "Agile"],
        logo_id: "microsoft-logo",
    },
    JobListing {
        id: 3,
        title: "Data Scientist",
        company: "Amazon",
        location: "Seattle, WA",
        employment_type: EmploymentType::FullTime,
        tags: &["Python", "SQL", "Machine Learning"],
        logo_id: "amazon-logo",
    },
    JobListing {
        id: 4,
        title: "UX/UI Designer",
        company: "Apple",
        location: "Cupertino, CA",
        employment_type: EmploymentType::Contract,
        tags: &["Figma", "User Research", "Prototyping"],
        logo_id: "apple-logo",
    },
    JobListing {
        id: 5,
        title: "Backend Engineer, Streaming",
        company: "Netflix",
        location: "Los Gatos, CA",
        employment_type: EmploymentType::FullTime,
        tags: &["Java", "Microservices", "AWS"],
        logo_id: "netflix-logo",
    },
    JobListing {
        id: 6,
        title: "Marketing Intern",
        company: "Facebook",
        location: "Menlo Park, CA",
        employment_type: EmploymentType::Internship,
        tags: &["Social Media", "Analytics", "Campaigns"],
        logo_id: "facebook-logo",
    },
];

/// Optional filters; both must match when both are set.
#[derive(Debug, Default)]
pub struct JobFilter<'a> {
    pub employment_type: Option<&'a str>,
    pub tag: Option<&'a str>,
}

impl JobFilter<'_> {
    fn matches(&self, job: &JobListing) -> bool {
        let type_ok = self
            .employment_type
            .map_or(true, |t| job.employment_type.label().eq_ignore_ascii_case(t.trim()));
        let tag_ok = self.tag.map_or(true, |wanted| {
            job.tags
                .iter()
                .any(|tag| tag.eq_ignore_ascii_case(wanted.trim()))
        });
        type_ok && tag_ok
    }
}

pub fn list_jobs(filter: &JobFilter<'_>) -> Vec<&'static JobListing> {
    JOB_LISTINGS.iter().filter(|job| filter.matches(job)).collect()
}

pub fn find_job(id: u32) -> Option<&'static JobListing> {
    JOB_LISTINGS.iter().find(|job| job.id == id)
}
