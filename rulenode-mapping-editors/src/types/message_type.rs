//! Well-known output message types.

/// Maximum accepted length of a message type, in characters.
pub const MAX_MESSAGE_TYPE_LEN: usize = 255;

/// Alias the message-type selector offers: two well-known request types
/// plus a custom free-text escape hatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTypeAlias {
    PostAttributesRequest,
    PostTelemetryRequest,
    Custom,
}

impl MessageTypeAlias {
    pub const ALL: [Self; 3] = [
        Self::PostAttributesRequest,
        Self::PostTelemetryRequest,
        Self::Custom,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::PostAttributesRequest => "Post attributes request",
            Self::PostTelemetryRequest => "Post telemetry request",
            Self::Custom => "Custom",
        }
    }

    /// Backend value; `None` for the custom alias (free text).
    #[must_use]
    pub const fn value(self) -> Option<&'static str> {
        match self {
            Self::PostAttributesRequest => Some("POST_ATTRIBUTES_REQUEST"),
            Self::PostTelemetryRequest => Some("POST_TELEMETRY_REQUEST"),
            Self::Custom => None,
        }
    }

    /// Resolves a raw message type to a known alias, falling back to
    /// [`Custom`](Self::Custom).
    #[must_use]
    pub fn resolve(value: &str) -> Self {
        match value {
            "POST_ATTRIBUTES_REQUEST" => Self::PostAttributesRequest,
            "POST_TELEMETRY_REQUEST" => Self::PostTelemetryRequest,
            _ => Self::Custom,
        }
    }
}
