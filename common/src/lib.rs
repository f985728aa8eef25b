pub mod report;
pub mod subject_observer;
