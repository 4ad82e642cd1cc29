/// The shared brand palette.
#[derive(uniffi::Enum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorName {
    Primary,
    Secondary,
    Success,
    Warning,
    Error,
    Background,
    Surface,
    Text,
    TextSecondary,
    Border,
}

impl ColorName {
    pub const ALL: [ColorName; 10] = [
        ColorName::Primary,
        ColorName::Secondary,
        ColorName::Success,
        ColorName::Warning,
        ColorName::Error,
        ColorName::Background,
        ColorName::Surface,
        ColorName::Text,
        ColorName::TextSecondary,
        ColorName::Border,
    ];

    pub const fn hex(&self) -> &'static str {
        match self {
            ColorName::Primary => "#6366f1",
            ColorName::Secondary => "#8b5cf6",
            ColorName::Success => "#22c55e",
            ColorName::Warning => "#f59e0b",
            ColorName::Error => "#ef4444",
            ColorName::Background => "#f8fafc",
            ColorName::Surface => "#ffffff",
            ColorName::Text => "#1e293b",
            ColorName::TextSecondary => "#64748b",
            ColorName::Border => "#e2e8f0",
        }
    }
}
