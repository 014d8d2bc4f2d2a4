//! Questionnaire session engine for the DEBQ.
//!
//! [`scoring`] turns a complete set of answers into scale means and verdicts, [`session`] walks a
//! single participant through the questions, [`registry`] keeps one session per participant and
//! [`flow`] wires the three together behind the [`flow::Presenter`] seam that transports implement.

pub mod answer;
pub mod error;
pub mod flow;
pub mod interpretation;
pub mod participant;
pub mod registry;
pub mod report;
pub mod scoring;
pub mod session;
