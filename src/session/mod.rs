//! Reader connection manager.
//!
//! [`ReaderSession`] owns one TCP connection to an LLRP reader. A dedicated
//! read-loop task decodes incoming frames and routes them: correlated
//! replies complete their outstanding [`transact`](ReaderSession::transact)
//! call, `KEEPALIVE` is acknowledged without application involvement, and
//! everything else goes to the installed [`ReaderHandler`] in arrival
//! order. Writes are serialised behind an async mutex, so `transact` may be
//! called concurrently from any number of tasks.
//!
//! The session never buffers asynchronous messages: a handler that blocks
//! blocks the read loop. Handlers that need decoupling should enqueue into
//! their own bounded channel.

use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc, RwLock,
};
use std::time::Duration;

use dashmap::DashMap;
use futures::{SinkExt, StreamExt};
use tokio::{
    net::{
        tcp::{OwnedReadHalf, OwnedWriteHalf},
        TcpStream,
    },
    sync::{oneshot, Mutex},
    task::JoinHandle,
    time::timeout,
};
use tokio_util::{
    codec::{FramedRead, FramedWrite},
    sync::CancellationToken,
};

use crate::{
    codec,
    message::Message,
    spec::{LlrpRegistry, MsgIdx},
};

mod config;
mod error;
mod frame;

pub use config::SessionConfig;
pub use error::SessionError;
pub use frame::LlrpFrameCodec;

/// The IANA-assigned TCP port for LLRP.
pub const LLRP_PORT: u16 = 5084;

/// Connection lifecycle states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// No connection.
    Disconnected,
    /// TCP connect in progress.
    Connecting,
    /// Connected, waiting for the reader's `ConnectionAttemptEvent`.
    AwaitingReaderEvent,
    /// Connection established; `transact` available.
    Ready,
    /// As `Ready`, with an application handler installed for unsolicited
    /// messages.
    Listening,
    /// `CLOSE_CONNECTION` sent; tearing down.
    Closing,
}

/// Receiver for unsolicited reader messages (tag reports, reader events,
/// unmatched replies).
///
/// Invoked from the read loop: a blocking implementation blocks the loop.
/// Any `Fn(Message) + Send + Sync` closure implements this trait.
pub trait ReaderHandler: Send + Sync + 'static {
    /// Called once per unsolicited message, in arrival order.
    fn on_message(&self, message: Message);
}

impl<F> ReaderHandler for F
where
    F: Fn(Message) + Send + Sync + 'static,
{
    fn on_message(&self, message: Message) { self(message); }
}

struct PendingEntry {
    request_spec: MsgIdx,
    reply: oneshot::Sender<Result<Message, SessionError>>,
}

struct Shared {
    registry: Arc<LlrpRegistry>,
    config: SessionConfig,
    sink: Mutex<FramedWrite<OwnedWriteHalf, LlrpFrameCodec>>,
    pending: DashMap<u32, PendingEntry>,
    handler: RwLock<Option<Arc<dyn ReaderHandler>>>,
    next_id: AtomicU32,
    state: RwLock<SessionState>,
    shutdown: CancellationToken,
}

/// A stateful client session with one LLRP reader.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use llrp::{
///     message::{Message, Value},
///     session::{ReaderSession, SessionConfig, LLRP_PORT},
///     spec::LlrpRegistry,
/// };
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), llrp::session::SessionError> {
/// let registry = Arc::new(LlrpRegistry::load().expect("load"));
/// let session = ReaderSession::connect(
///     "192.168.0.100",
///     LLRP_PORT,
///     Arc::clone(&registry),
///     SessionConfig::default(),
/// )
/// .await?;
///
/// let request = Message::new(
///     &registry,
///     "GET_READER_CAPABILITIES",
///     &[("RequestedData", Value::uint(0u8))],
///     vec![],
/// )?;
/// let reply = session.transact(request, None).await?;
/// assert!(reply.is_success(&registry));
/// session.close().await?;
/// # Ok(())
/// # }
/// ```
pub struct ReaderSession {
    shared: Arc<Shared>,
    read_task: Mutex<Option<JoinHandle<()>>>,
}

impl std::fmt::Debug for ReaderSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReaderSession").finish_non_exhaustive()
    }
}

impl ReaderSession {
    /// Connect to a reader and complete the LLRP connection handshake.
    ///
    /// The reader is expected to open the conversation with an unsolicited
    /// `READER_EVENT_NOTIFICATION` carrying a successful
    /// `ConnectionAttemptEvent`; anything else fails the connect.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::ConnectFailed`] when the socket, the
    /// handshake deadline, or the reader's attempt status fails.
    pub async fn connect(
        host: &str,
        port: u16,
        registry: Arc<LlrpRegistry>,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        log::debug!("connecting to reader at {host}:{port}");
        let stream = timeout(
            config.connect_timeout_value(),
            TcpStream::connect((host, port)),
        )
        .await
        .map_err(|_| SessionError::connect_failed("TCP connect timed out"))?
        .map_err(|e| SessionError::connect_failed(e.to_string()))?;
        stream.set_nodelay(true)?;

        let (read_half, write_half) = stream.into_split();
        let framing = LlrpFrameCodec::new(config.max_frame_length_value());
        let mut frames = FramedRead::new(read_half, framing.clone());
        let sink = FramedWrite::new(write_half, framing);

        await_connection_event(&registry, &config, &mut frames).await?;
        log::debug!("reader at {host}:{port} accepted the connection");

        let shared = Arc::new(Shared {
            registry,
            config,
            sink: Mutex::new(sink),
            pending: DashMap::new(),
            handler: RwLock::new(None),
            next_id: AtomicU32::new(1),
            state: RwLock::new(SessionState::Ready),
            shutdown: CancellationToken::new(),
        });
        let read_task = tokio::spawn(read_loop(Arc::clone(&shared), frames));
        Ok(Self {
            shared,
            read_task: Mutex::new(Some(read_task)),
        })
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.shared
            .state
            .read()
            .map_or(SessionState::Disconnected, |s| *s)
    }

    /// Send a request and await its correlated reply.
    ///
    /// The session stamps the next monotonic message ID onto `message`. The
    /// reply is the message whose ID matches and whose spec answers the
    /// request (`ERROR_MESSAGE` with a matching ID also completes it, as
    /// readers answer malformed requests that way). With no deadline given,
    /// the configured default applies.
    ///
    /// # Errors
    ///
    /// [`SessionError::Timeout`] when no matching reply arrives in time,
    /// [`SessionError::Cancelled`] when the session closes first, and
    /// transport or validation errors as they occur.
    pub async fn transact(
        &self,
        mut message: Message,
        deadline: Option<Duration>,
    ) -> Result<Message, SessionError> {
        if self.state() == SessionState::Disconnected {
            return Err(SessionError::Cancelled);
        }
        let id = self.shared.next_id.fetch_add(1, Ordering::Relaxed);
        message.set_message_id(id);
        let (tx, rx) = oneshot::channel();
        self.shared.pending.insert(
            id,
            PendingEntry {
                request_spec: message.spec(),
                reply: tx,
            },
        );
        if let Err(err) = self.shared.send(&message).await {
            self.shared.pending.remove(&id);
            return Err(err);
        }
        let deadline = deadline.unwrap_or(self.shared.config.transact_timeout_value());
        match timeout(deadline, rx).await {
            Err(_) => {
                self.shared.pending.remove(&id);
                Err(SessionError::Timeout)
            }
            Ok(Err(_)) => Err(SessionError::Cancelled),
            Ok(Ok(result)) => result,
        }
    }

    /// Install `handler` for unsolicited messages and enter `Listening`.
    ///
    /// Until a handler is installed, unsolicited messages are logged at
    /// debug level and dropped; the session never buffers them.
    pub fn start_listener(&self, handler: impl ReaderHandler) {
        if let Ok(mut slot) = self.shared.handler.write() {
            *slot = Some(Arc::new(handler));
        }
        self.shared.set_state(SessionState::Listening);
    }

    /// Remove the handler installed by [`start_listener`](Self::start_listener).
    pub fn stop_listener(&self) {
        if let Ok(mut slot) = self.shared.handler.write() {
            *slot = None;
        }
        self.shared.set_state(SessionState::Ready);
    }

    /// Close the connection: send `CLOSE_CONNECTION`, briefly await its
    /// response, then tear down the socket and wake every outstanding
    /// `transact` with [`SessionError::Cancelled`].
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] only for failures constructing the close
    /// message; transport errors during teardown are logged and swallowed.
    pub async fn close(&self) -> Result<(), SessionError> {
        self.shared.set_state(SessionState::Closing);
        let close = Message::new(&self.shared.registry, "CLOSE_CONNECTION", &[], vec![])?;
        let deadline = self.shared.config.close_timeout_value();
        match self.transact(close, Some(deadline)).await {
            Ok(reply) => {
                log::debug!(
                    "reader acknowledged close (success={})",
                    reply.is_success(&self.shared.registry)
                );
            }
            Err(err) => log::debug!("no close acknowledgement: {err}"),
        }
        self.shared.shutdown.cancel();
        if let Some(task) = self.read_task.lock().await.take() {
            let _ = task.await;
        }
        self.shared.fail_all(&SessionError::Cancelled);
        self.shared.set_state(SessionState::Disconnected);
        Ok(())
    }
}

impl Drop for ReaderSession {
    fn drop(&mut self) { self.shared.shutdown.cancel(); }
}

async fn await_connection_event(
    registry: &LlrpRegistry,
    config: &SessionConfig,
    frames: &mut FramedRead<OwnedReadHalf, LlrpFrameCodec>,
) -> Result<(), SessionError> {
    let frame = timeout(config.reader_event_timeout_value(), frames.next())
        .await
        .map_err(|_| SessionError::connect_failed("no reader event before the deadline"))?
        .ok_or_else(|| SessionError::connect_failed("reader closed during the handshake"))?
        .map_err(|e| SessionError::connect_failed(e.to_string()))?;
    let event = codec::decode_message(registry, &frame)
        .map_err(|e| SessionError::connect_failed(e.to_string()))?;
    if event.name(registry) != "READER_EVENT_NOTIFICATION" {
        return Err(SessionError::connect_failed(format!(
            "expected READER_EVENT_NOTIFICATION, got {}",
            event.name(registry)
        )));
    }
    let status = event
        .find_first(registry, "ConnectionAttemptEvent")
        .and_then(|attempt| attempt.field(registry, "Status"))
        .and_then(crate::message::Value::as_u64)
        .ok_or_else(|| SessionError::connect_failed("reader event carries no attempt status"))?;
    if status != 0 {
        let name = registry
            .enum_by_name("ConnectionAttemptStatusType")
            .and_then(|idx| registry.enumeration(idx).name_of(status))
            .unwrap_or("unknown status");
        return Err(SessionError::connect_failed(format!(
            "reader rejected the connection: {name}"
        )));
    }
    Ok(())
}

async fn read_loop(shared: Arc<Shared>, mut frames: FramedRead<OwnedReadHalf, LlrpFrameCodec>) {
    let reason = loop {
        tokio::select! {
            () = shared.shutdown.cancelled() => break SessionError::Cancelled,
            frame = frames.next() => match frame {
                None => {
                    log::debug!("reader closed the connection");
                    break SessionError::PeerClosed;
                }
                Some(Err(err)) => {
                    log::warn!("read loop terminating: {err}");
                    break SessionError::Io(err);
                }
                Some(Ok(frame)) => {
                    if let Err(err) = shared.handle_frame(&frame).await {
                        log::warn!("dropping connection: {err}");
                        break err;
                    }
                }
            },
        }
    };
    shared.fail_all(&reason);
    shared.set_state(SessionState::Disconnected);
}

impl Shared {
    fn set_state(&self, state: SessionState) {
        if let Ok(mut slot) = self.state.write() {
            *slot = state;
        }
    }

    async fn send(&self, message: &Message) -> Result<(), SessionError> {
        let frame = codec::encode_message(&self.registry, message).map_err(SessionError::from)?;
        let mut sink = self.sink.lock().await;
        sink.send(frame).await.map_err(SessionError::Io)
    }

    async fn handle_frame(&self, frame: &[u8]) -> Result<(), SessionError> {
        let message = codec::decode_message(&self.registry, frame).map_err(SessionError::from)?;
        let name = message.name(&self.registry);

        if name == "KEEPALIVE" && self.config.auto_keepalive_ack_value() {
            log::trace!("acknowledging keepalive {}", message.message_id());
            let ack = Message::with_id(
                &self.registry,
                "KEEPALIVE_ACK",
                message.message_id(),
                &[],
                vec![],
            )?;
            return self.send(&ack).await;
        }

        let id = message.message_id();
        let response_for = self.registry.message(message.spec()).response_for;
        let removed = self.pending.remove_if(&id, |_, entry| {
            response_for == Some(entry.request_spec) || name == "ERROR_MESSAGE"
        });
        if let Some((_, entry)) = removed {
            let _ = entry.reply.send(Ok(message));
            return Ok(());
        }

        self.dispatch(message);
        Ok(())
    }

    fn dispatch(&self, message: Message) {
        let handler = self
            .handler
            .read()
            .ok()
            .and_then(|slot| slot.as_ref().map(Arc::clone));
        match handler {
            Some(handler) => handler.on_message(message),
            None => log::debug!(
                "dropping unsolicited {} (no listener installed)",
                message.name(&self.registry)
            ),
        }
    }

    fn fail_all(&self, reason: &SessionError) {
        let ids: Vec<u32> = self.pending.iter().map(|entry| *entry.key()).collect();
        for id in ids {
            if let Some((_, entry)) = self.pending.remove(&id) {
                let _ = entry.reply.send(Err(reason.replicate()));
            }
        }
    }
}
