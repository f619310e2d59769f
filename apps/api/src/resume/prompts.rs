// Resume structuring prompt. Pure data: rendered by `PromptTemplate::render`.

use crate::llm_client::prompts::PromptTemplate;

/// Structuring prompt. Fill `{content}` with the extracted résumé text.
pub const RESUME_PARSE_TEMPLATE: PromptTemplate = PromptTemplate {
    name: "resume_parse",
    text: RESUME_PARSE_TEXT,
    slots: &["content"],
};

const RESUME_PARSE_TEXT: &str = r#"You are an expert resume parser. Given the resume content below, extract and structure the information into a detailed JSON document with EXACTLY the following fields.
When parsing projects, the text that comes right after a project title is usually that project's description, so include it as the description along with the project title.

{
  "personal_information": {
    "full_name": "",
    "email": "",
    "phone_number": "",
    "linkedin_profile": "",
    "github_profile": "",
    "portfolio_website": "",
    "address": {
      "street": "",
      "city": "",
      "state": "",
      "zip_code": "",
      "country": ""
    }
  },
  "summary": "",
  "objective": "",
  "experience": [
    {
      "job_title": "",
      "company_name": "",
      "location": "",
      "start_date": "",
      "end_date": "",
      "currently_working": false,
      "responsibilities": [""]
    }
  ],
  "education": [
    {
      "degree": "",
      "major": "",
      "school_name": "",
      "location": "",
      "graduation_date": "",
      "gpa": "",
      "honors": "",
      "courses": [""]
    }
  ],
  "skills": {
    "technical_skills": [""],
    "soft_skills": [""],
    "languages": [""],
    "certifications": [
      {
        "name": "",
        "issuing_organization": "",
        "issue_date": "",
        "expiration_date": "",
        "credential_id": "",
        "credential_url": ""
      }
    ]
  },
  "projects": [
    {
      "title": "",
      "description": "",
      "technologies_used": [""],
      "github_link": "",
      "live_demo_link": ""
    }
  ],
  "publications": [
    {
      "title": "",
      "journal_or_conference_name": "",
      "publication_date": "",
      "url": "",
      "description": ""
    }
  ],
  "awards_and_honors": [
    {
      "title": "",
      "organization": "",
      "date_received": "",
      "description": ""
    }
  ],
  "volunteer_experience": [
    {
      "role": "",
      "organization": "",
      "location": "",
      "start_date": "",
      "end_date": "",
      "currently_volunteering": false,
      "responsibilities": [""],
      "achievements": [""]
    }
  ],
  "extracurricular_activities": [
    {
      "role": "",
      "organization": "",
      "location": "",
      "start_date": "",
      "end_date": "",
      "currently_involved": false,
      "responsibilities": [""],
      "achievements": [""]
    }
  ],
  "references": [
    {
      "name": "",
      "position": "",
      "company": "",
      "email": "",
      "phone_number": "",
      "relationship": ""
    }
  ],
  "additional_information": {
    "hobbies": [""],
    "interests": [""],
    "personal_statement": "",
    "professional_affiliations": [
      {
        "organization_name": "",
        "role": "",
        "start_date": "",
        "end_date": "",
        "currently_active": false
      }
    ]
  }
}

RULES:
1. Every field above MUST be present in your output. If a piece of information is not available, leave the field empty ("" for text, [] for lists, false for flags). Never drop a key.
2. Do NOT create or make up information. Only use what appears in the content.
3. All dates, GPAs and identifiers are strings.

Now parse the following content into the JSON format.

Content:
{content}

Your response should only contain the JSON in the specified format and nothing else, no text before or after it. Do not start with any text, do not say "here is the response" or anything similar. Directly give only the JSON."#;
