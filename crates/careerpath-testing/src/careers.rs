//! Career records for tests.

use careerpath_domain::career::{Career, JobType};

/// Builder for a [`Career`] with placeholder text. Only the fields a test
/// cares about need setting.
pub struct CareerBuilder {
    career: Career,
}

impl CareerBuilder {
    pub fn new(name_en: &str) -> Self {
        Self {
            career: Career {
                icon: "Star".into(),
                name_en: name_en.into(),
                name_te: String::new(),
                short_desc_en: format!("About {name_en}."),
                short_desc_te: String::new(),
                salary_min: 10000,
                salary_max: 20000,
                education: "10th pass".into(),
                job_type: JobType::Mixed,
                field: "General".into(),
                skills: vec![],
                tags: vec![],
                growth_path_en: vec![],
                growth_path_te: vec![],
            },
        }
    }

    pub fn name_te(mut self, name_te: &str) -> Self {
        self.career.name_te = name_te.into();
        self
    }

    pub fn field(mut self, field: &str) -> Self {
        self.career.field = field.into();
        self
    }

    pub fn education(mut self, education: &str) -> Self {
        self.career.education = education.into();
        self
    }

    pub fn job_type(mut self, job_type: JobType) -> Self {
        self.career.job_type = job_type;
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.career.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn build(self) -> Career {
        self.career
    }
}

/// A catalog wider than the default seed: one career per quiz answer
/// category, plus one matching none.
pub fn sample_catalog() -> Vec<Career> {
    vec![
        CareerBuilder::new("Graphic Designer")
            .field("Design")
            .education("Diploma in Design")
            .job_type(JobType::SelfEmployed)
            .tags(&["creative", "art"])
            .build(),
        CareerBuilder::new("Software Developer")
            .field("Engineering")
            .education("B.Tech")
            .job_type(JobType::Private)
            .tags(&["logic", "computers"])
            .build(),
        CareerBuilder::new("Plumber")
            .field("Trades")
            .education("ITI Plumbing")
            .job_type(JobType::SelfEmployed)
            .tags(&["hands-on", "fixing"])
            .build(),
        CareerBuilder::new("Village Health Worker")
            .name_te("గ్రామ ఆరోగ్య కార్యకర్త")
            .field("Healthcare")
            .education("10th pass + training")
            .job_type(JobType::Government)
            .tags(&["helping", "people"])
            .build(),
        CareerBuilder::new("Shop Assistant")
            .field("Retail")
            .job_type(JobType::Private)
            .build(),
    ]
}
