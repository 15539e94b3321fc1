//! CardioGuard core: deterministic decision layer for 10-year coronary heart
//! disease (CHD) risk assessment.
//!
//! The library turns a validated questionnaire into the fixed feature vector
//! the pre-trained predictors consume, classifies the resulting probability
//! into a risk tier, derives a personalized recommendation plan, and
//! assembles a renderer-agnostic report. Presentation (gauge drawing, PDF
//! byte rendering, page styling) lives outside this crate.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
