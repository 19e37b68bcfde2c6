//! medisight-triage
//!
//! Rule-based text classification. Pure data and pure functions, with no async
//! runtime, no I/O. Defines the keyword tables, severity vocabularies and
//! extraction patterns behind the health assistant, the consultation
//! analyzer and the dashboard chat.

pub mod consultation;
pub mod dashboard;
pub mod health;
pub mod keywords;
pub mod tips;
pub mod vitals;

pub use keywords::{find_category, KeywordCategory, ResponseTemplate, SeverityVocabulary};
