//! The structured résumé schema. Field names and nesting are the wire
//! contract with both the model and API clients, so they never change.
//!
//! Every nested struct defaults field-by-field: a key the model left out
//! comes back as `""`, `[]` or `false`, and serializing always emits the
//! full schema.

use serde::{Deserialize, Serialize};

/// Top-level keys the model must return. Anything else is a malformed response.
pub const REQUIRED_TOP_LEVEL_KEYS: [&str; 13] = [
    "personal_information",
    "summary",
    "objective",
    "experience",
    "education",
    "skills",
    "projects",
    "publications",
    "awards_and_honors",
    "volunteer_experience",
    "extracurricular_activities",
    "references",
    "additional_information",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredResume {
    pub personal_information: PersonalInformation,
    pub summary: String,
    pub objective: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Skills,
    pub projects: Vec<Project>,
    pub publications: Vec<Publication>,
    pub awards_and_honors: Vec<Award>,
    pub volunteer_experience: Vec<VolunteerExperience>,
    pub extracurricular_activities: Vec<ExtracurricularActivity>,
    pub references: Vec<Reference>,
    pub additional_information: AdditionalInformation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInformation {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub linkedin_profile: String,
    pub github_profile: String,
    pub portfolio_website: String,
    pub address: Address,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub job_title: String,
    pub company_name: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub currently_working: bool,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub major: String,
    pub school_name: String,
    pub location: String,
    pub graduation_date: String,
    pub gpa: String,
    pub honors: String,
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub languages: Vec<String>,
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub issuing_organization: String,
    pub issue_date: String,
    pub expiration_date: String,
    pub credential_id: String,
    pub credential_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies_used: Vec<String>,
    pub github_link: String,
    pub live_demo_link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Publication {
    pub title: String,
    pub journal_or_conference_name: String,
    pub publication_date: String,
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Award {
    pub title: String,
    pub organization: String,
    pub date_received: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolunteerExperience {
    pub role: String,
    pub organization: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub currently_volunteering: bool,
    pub responsibilities: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtracurricularActivity {
    pub role: String,
    pub organization: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub currently_involved: bool,
    pub responsibilities: Vec<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reference {
    pub name: String,
    pub position: String,
    pub company: String,
    pub email: String,
    pub phone_number: String,
    pub relationship: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdditionalInformation {
    pub hobbies: Vec<String>,
    pub interests: Vec<String>,
    pub personal_statement: String,
    pub professional_affiliations: Vec<ProfessionalAffiliation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfessionalAffiliation {
    pub organization_name: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub currently_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_empty_resume_serializes_every_top_level_key() {
        let value = serde_json::to_value(StructuredResume::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), REQUIRED_TOP_LEVEL_KEYS.len());
        for key in REQUIRED_TOP_LEVEL_KEYS {
            assert!(object.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn test_empty_resume_uses_empty_values() {
        let value = serde_json::to_value(StructuredResume::default()).unwrap();
        assert_eq!(value["summary"], "");
        assert_eq!(value["experience"], Value::Array(vec![]));
        assert_eq!(value["personal_information"]["address"]["zip_code"], "");
        assert_eq!(value["skills"]["certifications"], Value::Array(vec![]));
        assert_eq!(
            value["additional_information"]["professional_affiliations"],
            Value::Array(vec![])
        );
    }

    #[test]
    fn test_partial_nested_entry_is_filled_with_empties() {
        let json = r#"{"job_title": "Data Analyst", "company_name": "Initech"}"#;
        let experience: Experience = serde_json::from_str(json).unwrap();
        assert_eq!(experience.job_title, "Data Analyst");
        assert_eq!(experience.end_date, "");
        assert!(!experience.currently_working);
        assert!(experience.responsibilities.is_empty());

        let value = serde_json::to_value(&experience).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_volunteer_and_extracurricular_flags_keep_their_names() {
        let value = serde_json::to_value(VolunteerExperience::default()).unwrap();
        assert_eq!(value["currently_volunteering"], false);
        let value = serde_json::to_value(ExtracurricularActivity::default()).unwrap();
        assert_eq!(value["currently_involved"], false);
        let value = serde_json::to_value(ProfessionalAffiliation::default()).unwrap();
        assert_eq!(value["currently_active"], false);
    }
}
