use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("could not convert grade to float: '{token}' ({reason})")]
    InvalidGrade { token: String, reason: String },

    #[error("float division by zero: student '{full_name}' has an empty grade list")]
    EmptyGrades { full_name: String },

    #[error("no data file given; pass --filename or set STUDENTS_FILE")]
    MissingDataFile,
}

pub type Result<T> = std::result::Result<T, RosterError>;
