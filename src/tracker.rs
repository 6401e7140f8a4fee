use std::fmt;
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("student id and name are required")]
    MissingField,
    #[error("no student with id {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportType {
    ReadingSupport,
    FocusStrategies,
    MathSupport,
    WritingSupport,
    SocialSkills,
}

impl fmt::Display for SupportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupportType::ReadingSupport => write!(f, "Reading Support"),
            SupportType::FocusStrategies => write!(f, "Focus Strategies"),
            SupportType::MathSupport => write!(f, "Math Support"),
            SupportType::WritingSupport => write!(f, "Writing Support"),
            SupportType::SocialSkills => write!(f, "Social Skills"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrackerStatus {
    NotStarted,
    InProgress,
    Completed,
    OnHold,
}

impl fmt::Display for TrackerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerStatus::NotStarted => write!(f, "Not Started"),
            TrackerStatus::InProgress => write!(f, "In Progress"),
            TrackerStatus::Completed => write!(f, "Completed"),
            TrackerStatus::OnHold => write!(f, "On Hold"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub student_id: String,
    pub name: String,
    pub support_type: SupportType,
    pub status: TrackerStatus,
    pub notes: String,
    pub last_updated: NaiveDate,
}

/// Trait for the student support tracker store.
pub trait SupportTracker {
    /// Replace the record with the same `student_id`, or append a new one.
    fn upsert(&mut self, record: StudentRecord) -> Result<(), TrackerError>;
    fn remove(&mut self, student_id: &str) -> Result<(), TrackerError>;
    fn get(&self, student_id: &str) -> Option<&StudentRecord>;
    fn all(&self) -> &[StudentRecord];
}

fn validate(record: &StudentRecord) -> Result<(), TrackerError> {
    if record.student_id.trim().is_empty() || record.name.trim().is_empty() {
        return Err(TrackerError::MissingField);
    }
    Ok(())
}

fn upsert_into(students: &mut Vec<StudentRecord>, record: StudentRecord) {
    if let Some(existing) = students
        .iter_mut()
        .find(|s| s.student_id == record.student_id)
    {
        *existing = record;
    } else {
        students.push(record);
    }
}

/// In-memory implementation of the tracker.
#[derive(Debug, Default)]
pub struct InMemoryTracker {
    students: Vec<StudentRecord>,
}

impl InMemoryTracker {
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
        }
    }

    /// The three demo students the tracker table starts with.
    pub fn seeded(today: NaiveDate) -> Self {
        Self {
            students: vec![
                StudentRecord {
                    student_id: "S001".to_string(),
                    name: "Alex Johnson".to_string(),
                    support_type: SupportType::ReadingSupport,
                    status: TrackerStatus::InProgress,
                    notes: "Working on phonics".to_string(),
                    last_updated: today,
                },
                StudentRecord {
                    student_id: "S002".to_string(),
                    name: "Sam Rivera".to_string(),
                    support_type: SupportType::FocusStrategies,
                    status: TrackerStatus::Completed,
                    notes: "Using timer techniques".to_string(),
                    last_updated: today,
                },
                StudentRecord {
                    student_id: "S003".to_string(),
                    name: "Jordan Lee".to_string(),
                    support_type: SupportType::MathSupport,
                    status: TrackerStatus::InProgress,
                    notes: "Visual aids helpful".to_string(),
                    last_updated: today,
                },
            ],
        }
    }
}

impl SupportTracker for InMemoryTracker {
    fn upsert(&mut self, record: StudentRecord) -> Result<(), TrackerError> {
        validate(&record)?;
        upsert_into(&mut self.students, record);
        Ok(())
    }

    fn remove(&mut self, student_id: &str) -> Result<(), TrackerError> {
        let before = self.students.len();
        self.students.retain(|s| s.student_id != student_id);
        if self.students.len() == before {
            return Err(TrackerError::NotFound(student_id.to_string()));
        }
        Ok(())
    }

    fn get(&self, student_id: &str) -> Option<&StudentRecord> {
        self.students.iter().find(|s| s.student_id == student_id)
    }

    fn all(&self) -> &[StudentRecord] {
        &self.students
    }
}

/// File-backed implementation. Saves the whole snapshot as JSON after
/// every mutation, in the same shape `InMemoryTracker` holds.
#[derive(Debug)]
pub struct FileTracker {
    path: PathBuf,
    students: Vec<StudentRecord>,
}

impl FileTracker {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            students: Vec::new(),
        }
    }

    pub fn save(&self) -> Result<(), TrackerError> {
        let json = serde_json::to_string_pretty(&self.students)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Missing file is not an error; the store just starts empty.
    pub fn load(&mut self) -> Result<(), TrackerError> {
        if !self.path.exists() {
            return Ok(());
        }
        let content = fs::read_to_string(&self.path)?;
        self.students = serde_json::from_str(&content)?;
        Ok(())
    }
}

impl SupportTracker for FileTracker {
    fn upsert(&mut self, record: StudentRecord) -> Result<(), TrackerError> {
        validate(&record)?;
        upsert_into(&mut self.students, record);
        self.save()
    }

    fn remove(&mut self, student_id: &str) -> Result<(), TrackerError> {
        let before = self.students.len();
        self.students.retain(|s| s.student_id != student_id);
        if self.students.len() == before {
            return Err(TrackerError::NotFound(student_id.to_string()));
        }
        self.save()
    }

    fn get(&self, student_id: &str) -> Option<&StudentRecord> {
        self.students.iter().find(|s| s.student_id == student_id)
    }

    fn all(&self) -> &[StudentRecord] {
        &self.students
    }
}
