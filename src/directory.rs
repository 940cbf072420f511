//! Directory Store — the immutable list of doctor records.
//!
//! Seeded once at startup from an embedded JSON asset and read-only
//! thereafter. Lookup misses are `None`, never an error.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Doctor, DoctorFilter};

const SEED_JSON: &str = include_str!("../data/doctors.json");

/// Errors while loading the doctor seed set.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Seed parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate doctor id in seed: {0}")]
    DuplicateId(String),
}

/// Ordered, immutable collection of doctors.
#[derive(Debug)]
pub struct Directory {
    doctors: Vec<Doctor>,
}

impl Directory {
    /// Load the embedded seed set.
    pub fn from_seed() -> Result<Self, SeedError> {
        let doctors: Vec<Doctor> = serde_json::from_str(SEED_JSON)?;
        Self::from_doctors(doctors)
    }

    /// Build a directory from an explicit doctor list (tests, alternate seeds).
    ///
    /// Normalizes every schedule so all seven weekday keys are present.
    pub fn from_doctors(mut doctors: Vec<Doctor>) -> Result<Self, SeedError> {
        let mut seen = HashSet::new();
        for doctor in &mut doctors {
            if !seen.insert(doctor.id.clone()) {
                return Err(SeedError::DuplicateId(doctor.id.clone()));
            }
            doctor.schedule.fill_missing_days();
        }
        Ok(Self { doctors })
    }

    /// All doctors in seed order.
    pub fn list(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Exact-match lookup by identifier.
    pub fn get(&self, id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|doctor| doctor.id == id)
    }

    /// Doctors matching the active search filters, in seed order.
    pub fn filtered(&self, filter: &DoctorFilter) -> Vec<&Doctor> {
        self.doctors
            .iter()
            .filter(|doctor| filter.matches(doctor))
            .collect()
    }

    /// Distinct specializations in first-seen order (for the filter dropdown).
    pub fn specializations(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.doctors
            .iter()
            .filter(|doctor| seen.insert(doctor.specialization.as_str()))
            .map(|doctor| doctor.specialization.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }
}
