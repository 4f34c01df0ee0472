use std::fmt;

/// Non-fatal findings raised while composing records.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DiagnosticKind {
    /// No player or statistics row for a slot; the slot is left untouched.
    MissingLinkedStats,
    /// A field was null; a default was written or the sub-field was kept.
    MissingOptionalField,
    /// A position or handedness code we have no mapping for.
    UnrecognizedEnumValue,
    /// Roster position outside 1..=25; role markers were kept.
    RosterPositionOutOfRange,
    /// A scaled decimal that needs more than three hex digits.
    ValueOverflow,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub player_id: String,
    pub field: &'static str,
    pub reason: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        };
        write!(
            f,
            "{level}: {} ({}): {}",
            self.player_id, self.field, self.reason
        )
    }
}

/// Collects diagnostics for a run and forwards each one to the logger.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(
        &mut self,
        kind: DiagnosticKind,
        player_id: &str,
        field: &'static str,
        reason: impl Into<String>,
    ) {
        self.push(kind, Severity::Warning, player_id, field, reason.into());
    }

    pub fn error(
        &mut self,
        kind: DiagnosticKind,
        player_id: &str,
        field: &'static str,
        reason: impl Into<String>,
    ) {
        self.push(kind, Severity::Error, player_id, field, reason.into());
    }

    fn push(
        &mut self,
        kind: DiagnosticKind,
        severity: Severity,
        player_id: &str,
        field: &'static str,
        reason: String,
    ) {
        match severity {
            Severity::Warning => log::warn!("{player_id} ({field}): {reason}"),
            Severity::Error => log::error!("{player_id} ({field}): {reason}"),
        }
        self.entries.push(Diagnostic {
            kind,
            severity,
            player_id: player_id.to_string(),
            field,
            reason,
        });
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.entries.iter().filter(|d| d.kind == kind).count()
    }

    pub fn errors(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn warnings(&self) -> usize {
        self.entries.len() - self.errors()
    }

    /// Diagnostics raised for one player, in the order they were recorded.
    pub fn for_player<'a>(&'a self, player_id: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.entries.iter().filter(move |d| d.player_id == player_id)
    }
}
