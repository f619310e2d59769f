//! The grade report schema: exactly `score`, `feedback`, `improved_score`.

use serde::{Deserialize, Serialize};

pub const MAX_SCORE: u8 = 100;

pub const REQUIRED_REPORT_KEYS: [&str; 3] = ["score", "feedback", "improved_score"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCategory {
    Experience,
    Education,
    Skills,
    Projects,
    Publications,
    AchievementsAndAwards,
    AdditionalActivities,
    OverallComments,
}

/// In the order the report presents them.
pub const FEEDBACK_CATEGORIES: [FeedbackCategory; 8] = [
    FeedbackCategory::Experience,
    FeedbackCategory::Education,
    FeedbackCategory::Skills,
    FeedbackCategory::Projects,
    FeedbackCategory::Publications,
    FeedbackCategory::AchievementsAndAwards,
    FeedbackCategory::AdditionalActivities,
    FeedbackCategory::OverallComments,
];

impl FeedbackCategory {
    pub fn key(self) -> &'static str {
        match self {
            FeedbackCategory::Experience => "experience",
            FeedbackCategory::Education => "education",
            FeedbackCategory::Skills => "skills",
            FeedbackCategory::Projects => "projects",
            FeedbackCategory::Publications => "publications",
            FeedbackCategory::AchievementsAndAwards => "achievements_and_awards",
            FeedbackCategory::AdditionalActivities => "additional_activities",
            FeedbackCategory::OverallComments => "overall_comments",
        }
    }

    /// Display label: `achievements_and_awards` → `Achievements And Awards`.
    pub fn label(self) -> String {
        self.key()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Free-text feedback for each of the eight categories. Unknown categories
/// are rejected so the report always has exactly these keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Feedback {
    pub experience: String,
    pub education: String,
    pub skills: String,
    pub projects: String,
    pub publications: String,
    pub achievements_and_awards: String,
    pub additional_activities: String,
    pub overall_comments: String,
}

impl Feedback {
    pub fn get(&self, category: FeedbackCategory) -> &str {
        match category {
            FeedbackCategory::Experience => &self.experience,
            FeedbackCategory::Education => &self.education,
            FeedbackCategory::Skills => &self.skills,
            FeedbackCategory::Projects => &self.projects,
            FeedbackCategory::Publications => &self.publications,
            FeedbackCategory::AchievementsAndAwards => &self.achievements_and_awards,
            FeedbackCategory::AdditionalActivities => &self.additional_activities,
            FeedbackCategory::OverallComments => &self.overall_comments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GradeReport {
    /// 0 – 100
    pub score: u8,
    pub feedback: Feedback,
    /// 0 – 100. Expected to be ≥ `score`, not enforced.
    pub improved_score: u8,
}

/// One rendered row of the feedback breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackLine {
    pub category: FeedbackCategory,
    pub label: String,
    pub comment: String,
}

impl GradeReport {
    pub fn breakdown(&self) -> Vec<FeedbackLine> {
        FEEDBACK_CATEGORIES
            .iter()
            .map(|&category| FeedbackLine {
                category,
                label: category.label(),
                comment: self.feedback.get(category).to_string(),
            })
            .collect()
    }

    pub fn improvement(&self) -> i16 {
        i16::from(self.improved_score) - i16::from(self.score)
    }
}
