use probex_core_types::{RequestId, TraceId};
use thiserror::Error;

use crate::model::{Axis, Direction};

/// Result type alias using ProbeError
pub type Result<T> = std::result::Result<T, ProbeError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code and to the status a transport
/// reports for it. Input validation, not-found and boundary violations are
/// kept apart so callers can tell a bad request from a rejected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Caller-facing rejections
    InvalidInput,
    NotFound,
    BoundaryViolation,
    AlreadyExists,

    // Storage
    ConstraintViolation,
    Persistence,
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::BoundaryViolation => "ERR_BOUNDARY_VIOLATION",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// HTTP-style status reported for this kind
    pub fn status(&self) -> u16 {
        match self {
            ExErrorKind::InvalidInput => 400,
            ExErrorKind::NotFound => 404,
            ExErrorKind::AlreadyExists => 409,
            ExErrorKind::BoundaryViolation => 422,
            ExErrorKind::ConstraintViolation
            | ExErrorKind::Persistence
            | ExErrorKind::Io
            | ExErrorKind::Serialization
            | ExErrorKind::Internal => 500,
        }
    }

    /// True for rejections caused by the request rather than the system
    pub fn is_rejection(&self) -> bool {
        self.status() < 500
    }
}

/// Canonical structured error type
///
/// Carries the classification plus the context needed to debug a failed
/// operation: the operation name, the probe involved, and for boundary
/// violations the 1-based step of the command sequence that failed.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    step: Option<usize>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            step: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add failed-step context
    pub fn with_step(mut self, step: usize) -> Self {
        self.step = Some(step);
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add trace ID context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn status(&self) -> u16 {
        self.kind.status()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn step(&self) -> Option<usize> {
        self.step
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (probe_id: {})", entity_id)?;
        }
        if let Some(step) = self.step {
            write!(f, " (step: {})", step)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for probe operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProbeError {
    // ===== Input Validation =====
    /// Identifier is not a well-formed UUID
    #[error("Invalid probe ID format: {raw}")]
    InvalidProbeId { raw: String },

    /// Grid extent is negative or does not fit the grid's integer range
    #[error("{axis} must be a non-negative integer")]
    InvalidGridSize { axis: Axis, value: i64 },

    /// Heading is not one of the four compass names
    #[error("Direction must be one of ['NORTH', 'EAST', 'SOUTH', 'WEST']")]
    InvalidDirection { value: String },

    /// Command string is empty or whitespace-only
    #[error("Field 'commands' is required and must be a non-empty string.")]
    EmptyCommands,

    /// Command string contains a character outside {M, L, R}
    #[error("Invalid command sequence. Allowed commands: 'M', 'L', 'R'.")]
    InvalidCommand { found: char, index: usize },

    // ===== Business Rules =====
    /// An advance would leave the grid; carries the rejected target cell
    #[error("Invalid move: probe would exceed grid limits.")]
    OutOfBounds {
        step: usize,
        direction: Direction,
        x: i64,
        y: i64,
    },

    // ===== Lookup =====
    #[error("Probe not found: {probe_id}")]
    ProbeNotFound { probe_id: String },

    #[error("Probe already exists: {probe_id}")]
    AlreadyExists { probe_id: String },

    // ===== Storage / Generic =====
    /// Persistence collaborator failed
    #[error("Storage error in {op}: {message}")]
    Storage { op: String, message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<ProbeError> for ExError {
    fn from(err: ProbeError) -> Self {
        let message = err.to_string();
        match err {
            ProbeError::InvalidProbeId { raw } => ExError::new(ExErrorKind::InvalidInput)
                .with_entity_id(raw)
                .with_message("Invalid probe ID format"),

            ProbeError::InvalidGridSize { .. }
            | ProbeError::InvalidDirection { .. }
            | ProbeError::EmptyCommands
            | ProbeError::InvalidCommand { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }

            ProbeError::OutOfBounds { step, .. } => ExError::new(ExErrorKind::BoundaryViolation)
                .with_op("move_probe")
                .with_step(step)
                .with_message(message),

            ProbeError::ProbeNotFound { probe_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(probe_id)
                .with_message("Probe not found"),

            ProbeError::AlreadyExists { probe_id } => ExError::new(ExErrorKind::AlreadyExists)
                .with_entity_id(probe_id)
                .with_message("Probe already exists"),

            ProbeError::Storage { op, message } => ExError::new(ExErrorKind::Persistence)
                .with_op(op)
                .with_message(message),

            ProbeError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            ProbeError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to ProbeError
impl From<serde_json::Error> for ProbeError {
    fn from(err: serde_json::Error) -> Self {
        ProbeError::Serialization {
            message: err.to_string(),
        }
    }
}
