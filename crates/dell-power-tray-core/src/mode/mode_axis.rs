use std::fmt;

/// One of the two independently controlled mode categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeAxis {
    /// Fan and power profile.
    Thermal,
    /// Battery charging policy.
    Battery,
}

impl ModeAxis {
    /// Both axes, in menu order.
    pub const ALL: [ModeAxis; 2] = [ModeAxis::Thermal, ModeAxis::Battery];

    /// Title-cased axis name as shown in menu headers.
    pub const fn title(self) -> &'static str {
        match self {
            ModeAxis::Thermal => "Thermal",
            ModeAxis::Battery => "Battery",
        }
    }
}

impl fmt::Display for ModeAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeAxis::Thermal => f.write_str("thermal"),
            ModeAxis::Battery => f.write_str("battery"),
        }
    }
}
