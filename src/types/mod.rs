pub mod content;
pub mod document;
pub mod record;
pub mod section;

pub use document::{CandidateDocument, CandidateName, DocumentBody, DocumentType};
pub use record::{
    CareerHistoryRecord, CareerPlanRecord, CompanyFields, FieldMap, Record, RecommendationRecord,
    StartDateField, RAW_JSON_FIELD,
};
pub use section::{CareerHistorySection, CareerPlanSection, PlanTerm, RecommendationSection, Section};
