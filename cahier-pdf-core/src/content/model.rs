use serde::{Deserialize, Serialize};

/// Copy for page 1: project, impact, contact, audience and features cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectCopy {
    pub title: String,
    pub subtitle: String,
    pub cards: ProjectCards,
    pub fields: ProjectFields,
    pub impact_hint: String,
    pub audience_labels: Vec<String>,
    pub features_left: Vec<String>,
    pub features_right: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectCards {
    pub project: String,
    pub impact: String,
    pub contact: String,
    pub audience: String,
    pub features: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectFields {
    pub project_name: String,
    pub project_type: String,
    pub project_goal: String,
    pub project_budget: String,
    pub project_date: String,
    pub impact_detail: String,
    pub contact_name_role: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub contact_company: String,
    pub contact_location: String,
}

/// Copy for page 2: design, integrations and pages cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TechnicalCopy {
    pub title: String,
    pub subtitle: String,
    pub cards: TechnicalCards,
    pub design_hint: String,
    pub fields: TechnicalFields,
    pub integrations_left: Vec<String>,
    pub integrations_right: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TechnicalCards {
    pub design: String,
    pub integrations: String,
    pub pages: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TechnicalFields {
    pub design_references: String,
    pub design_content: String,
    pub pages_primary: String,
    pub pages_secondary: String,
}

/// Copy for page 3: planning table and signature block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanningCopy {
    pub title: String,
    pub subtitle: String,
    pub cards: PlanningCards,
    pub planning_target: String,
    pub planning_rows: Vec<String>,
    pub fields: SignatureFields,
    pub terms_note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanningCards {
    pub planning: String,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignatureFields {
    pub sign_client_name: String,
    pub sign_client: String,
    pub sign_kd_name: String,
    pub sign_kd: String,
}

/// Copy for page 4: the media modules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModulesCopy {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<MediaItem>,
}

/// One media row: text block plus a remote illustration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MediaItem {
    pub title: String,
    pub summary: String,
    pub pricing: String,
    pub timeline: String,
    /// URL of the illustration
    pub image: String,
}
