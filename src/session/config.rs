//! Session configuration.

use std::time::Duration;

const MIN_FRAME_LENGTH: usize = 64;
const MAX_FRAME_LENGTH: usize = 16 * 1024 * 1024;
const DEFAULT_MAX_FRAME_LENGTH: usize = 1024 * 1024;

/// Tuning knobs for a reader session.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use llrp::session::SessionConfig;
///
/// let config = SessionConfig::default()
///     .transact_timeout(Duration::from_secs(2))
///     .max_frame_length(64 * 1024);
/// assert_eq!(config.max_frame_length_value(), 64 * 1024);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    connect_timeout: Duration,
    reader_event_timeout: Duration,
    transact_timeout: Duration,
    close_timeout: Duration,
    max_frame_length: usize,
    auto_keepalive_ack: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            reader_event_timeout: Duration::from_secs(5),
            transact_timeout: Duration::from_secs(5),
            close_timeout: Duration::from_secs(1),
            max_frame_length: DEFAULT_MAX_FRAME_LENGTH,
            auto_keepalive_ack: true,
        }
    }
}

impl SessionConfig {
    /// Deadline for establishing the TCP connection.
    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Deadline for the reader's `ConnectionAttemptEvent` after connecting.
    #[must_use]
    pub fn reader_event_timeout(mut self, timeout: Duration) -> Self {
        self.reader_event_timeout = timeout;
        self
    }

    /// Default deadline for `transact` when none is given per call.
    #[must_use]
    pub fn transact_timeout(mut self, timeout: Duration) -> Self {
        self.transact_timeout = timeout;
        self
    }

    /// How long `close` waits for the `CLOSE_CONNECTION_RESPONSE`.
    #[must_use]
    pub fn close_timeout(mut self, timeout: Duration) -> Self {
        self.close_timeout = timeout;
        self
    }

    /// Largest frame accepted from the reader.
    ///
    /// The value is clamped between 64 bytes and 16 MiB.
    #[must_use]
    pub fn max_frame_length(mut self, max_frame_length: usize) -> Self {
        self.max_frame_length = max_frame_length.clamp(MIN_FRAME_LENGTH, MAX_FRAME_LENGTH);
        self
    }

    /// Whether `KEEPALIVE` messages are acknowledged without involving the
    /// application. On by default.
    #[must_use]
    pub fn auto_keepalive_ack(mut self, enabled: bool) -> Self {
        self.auto_keepalive_ack = enabled;
        self
    }

    /// Return the configured connect deadline.
    #[must_use]
    pub const fn connect_timeout_value(&self) -> Duration { self.connect_timeout }

    /// Return the configured reader-event deadline.
    #[must_use]
    pub const fn reader_event_timeout_value(&self) -> Duration { self.reader_event_timeout }

    /// Return the configured default transact deadline.
    #[must_use]
    pub const fn transact_timeout_value(&self) -> Duration { self.transact_timeout }

    /// Return the configured close deadline.
    #[must_use]
    pub const fn close_timeout_value(&self) -> Duration { self.close_timeout }

    /// Return the configured maximum frame length.
    #[must_use]
    pub const fn max_frame_length_value(&self) -> usize { self.max_frame_length }

    /// Return whether keepalives are auto-acknowledged.
    #[must_use]
    pub const fn auto_keepalive_ack_value(&self) -> bool { self.auto_keepalive_ack }
}
