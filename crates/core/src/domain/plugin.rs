// Plugin registration metadata

/// Plugin priority (higher = consulted first)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Priority(pub f64);

impl Priority {
    pub const HIGH: Priority = Priority(100.0);
    pub const NORMAL: Priority = Priority(0.0);
    pub const LOW: Priority = Priority(-100.0);

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
