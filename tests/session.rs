//! Session behaviour against an in-process mock reader.

mod common;

use std::sync::Arc;
use std::time::Duration;

use futures::{SinkExt, StreamExt};
use llrp::{
    codec,
    message::{Message, Parameter, Value},
    session::{LlrpFrameCodec, ReaderSession, SessionConfig, SessionError, SessionState},
    spec::LlrpRegistry,
};
use tokio::{
    net::{TcpListener, TcpStream},
    sync::mpsc,
};
use tokio_util::codec::{FramedRead, FramedWrite};

use common::{connection_event, handshake_frame, registry, status_success, tag_report};

type MockFrames = (
    FramedRead<tokio::net::tcp::OwnedReadHalf, LlrpFrameCodec>,
    FramedWrite<tokio::net::tcp::OwnedWriteHalf, LlrpFrameCodec>,
);

async fn accept_and_greet(listener: TcpListener, registry: &LlrpRegistry) -> MockFrames {
    let (socket, _) = listener.accept().await.expect("accept");
    socket.set_nodelay(true).expect("nodelay");
    let (read_half, write_half) = socket.into_split();
    let framing = LlrpFrameCodec::new(1 << 20);
    let reader = FramedRead::new(read_half, framing.clone());
    let mut writer = FramedWrite::new(write_half, framing);
    writer
        .send(handshake_frame(registry))
        .await
        .expect("send handshake");
    (reader, writer)
}

async fn bind() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    (listener, port)
}

async fn recv_message(
    registry: &LlrpRegistry,
    frames: &mut FramedRead<tokio::net::tcp::OwnedReadHalf, LlrpFrameCodec>,
) -> Message {
    let frame = frames
        .next()
        .await
        .expect("a frame arrives")
        .expect("framing is clean");
    codec::decode_message(registry, &frame).expect("the frame decodes")
}

#[tokio::test]
async fn connect_completes_the_reader_handshake() {
    let registry = registry();
    let (listener, port) = bind().await;
    let mock_registry = Arc::clone(&registry);
    let mock = tokio::spawn(async move {
        let _frames = accept_and_greet(listener, &mock_registry).await;
        // Hold the socket open until the client is done.
        tokio::time::sleep(Duration::from_millis(200)).await;
    });

    let session = ReaderSession::connect("127.0.0.1", port, registry, SessionConfig::default())
        .await
        .expect("handshake succeeds");
    assert_eq!(session.state(), SessionState::Ready);
    drop(session);
    mock.await.expect("mock exits");
}

#[tokio::test]
async fn connect_rejects_a_failed_attempt_status() {
    let registry = registry();
    let (listener, port) = bind().await;
    let mock_registry = Arc::clone(&registry);
    tokio::spawn(async move {
        let (socket, _) = listener.accept().await.expect("accept");
        let (_read_half, write_half) = socket.into_split();
        let mut writer = FramedWrite::new(write_half, LlrpFrameCodec::new(1 << 20));
        // Status 1: a reader-initiated connection already exists.
        let event = connection_event(&mock_registry, 1);
        let frame = codec::encode_message(&mock_registry, &event).expect("encodes");
        writer.send(frame).await.expect("send rejection");
    });

    let err = ReaderSession::connect("127.0.0.1", port, registry, SessionConfig::default())
        .await
        .expect_err("the reader rejected us");
    assert!(matches!(err, SessionError::ConnectFailed { .. }));
}

#[tokio::test]
async fn transact_correlates_concurrent_requests_out_of_order() {
    let registry = registry();
    let (listener, port) = bind().await;
    let mock_registry = Arc::clone(&registry);
    let mock = tokio::spawn(async move {
        let (mut reader, mut writer) = accept_and_greet(listener, &mock_registry).await;
        // Collect both requests before answering, then reply in reverse
        // order, tagging each reply with its request's message ID.
        let first = recv_message(&mock_registry, &mut reader).await;
        let second = recv_message(&mock_registry, &mut reader).await;
        for request in [second, first] {
            let status = Parameter::new(
                &mock_registry,
                "LLRPStatus",
                &[
                    ("StatusCode", Value::uint(0u16)),
                    (
                        "ErrorDescription",
                        Value::string(format!("reply-to-{}", request.message_id())),
                    ),
                ],
                vec![],
            )
            .expect("valid status");
            let reply = Message::with_id(
                &mock_registry,
                "GET_ROSPECS_RESPONSE",
                request.message_id(),
                &[],
                vec![status],
            )
            .expect("valid reply");
            let frame = codec::encode_message(&mock_registry, &reply).expect("encodes");
            writer.send(frame).await.expect("send reply");
        }
    });

    let session = Arc::new(
        ReaderSession::connect(
            "127.0.0.1",
            port,
            Arc::clone(&registry),
            SessionConfig::default(),
        )
        .await
        .expect("connects"),
    );

    let mut calls = Vec::new();
    for _ in 0..2 {
        let session = Arc::clone(&session);
        let registry = Arc::clone(&registry);
        calls.push(tokio::spawn(async move {
            let request =
                Message::new(&registry, "GET_ROSPECS", &[], vec![]).expect("valid request");
            let reply = session
                .transact(request, Some(Duration::from_secs(2)))
                .await
                .expect("a correlated reply arrives");
            let description = reply
                .find_first(&registry, "LLRPStatus")
                .and_then(|status| status.field(&registry, "ErrorDescription"))
                .and_then(|v| v.as_str().map(ToOwned::to_owned))
                .expect("the reply carries its tag");
            assert_eq!(description, format!("reply-to-{}", reply.message_id()));
        }));
    }
    for call in calls {
        call.await.expect("caller got its own reply");
    }
    mock.await.expect("mock exits");
}

#[tokio::test]
async fn keepalive_is_acknowledged_without_waking_the_application() {
    let registry = registry();
    let (listener, port) = bind().await;
    let mock_registry = Arc::clone(&registry);
    let mock = tokio::spawn(async move {
        let (mut reader, mut writer) = accept_and_greet(listener, &mock_registry).await;
        let keepalive = Message::with_id(&mock_registry, "KEEPALIVE", 77, &[], vec![])
            .expect("valid keepalive");
        let frame = codec::encode_message(&mock_registry, &keepalive).expect("encodes");
        writer.send(frame).await.expect("send keepalive");

        let ack = recv_message(&mock_registry, &mut reader).await;
        assert_eq!(ack.name(&mock_registry), "KEEPALIVE_ACK");
        assert_eq!(ack.message_id(), 77);
    });

    let session = ReaderSession::connect(
        "127.0.0.1",
        port,
        Arc::clone(&registry),
        SessionConfig::default(),
    )
    .await
    .expect("connects");

    let (seen_tx, mut seen_rx) = mpsc::unbounded_channel();
    session.start_listener(move |message: Message| {
        let _ = seen_tx.send(message);
    });
    assert_eq!(session.state(), SessionState::Listening);

    mock.await.expect("the mock saw the acknowledgement");
    // The keepalive never reached the application handler.
    assert!(seen_rx.try_recv().is_err());
}

#[tokio::test]
async fn unsolicited_reports_reach_the_listener_in_order() {
    let registry = registry();
    let (listener, port) = bind().await;
    let mock_registry = Arc::clone(&registry);
    let mock = tokio::spawn(async move {
        let (mut reader, mut writer) = accept_and_greet(listener, &mock_registry).await;
        // Wait for the client's request so its listener is already
        // installed, then answer and stream the reports.
        let request = recv_message(&mock_registry, &mut reader).await;
        let reply = Message::with_id(
            &mock_registry,
            "GET_ROSPECS_RESPONSE",
            request.message_id(),
            &[],
            vec![status_success(&mock_registry)],
        )
        .expect("valid reply");
        let frame = codec::encode_message(&mock_registry, &reply).expect("encodes");
        writer.send(frame).await.expect("send reply");
        for i in 1u8..=3 {
            let tag = tag_report(&mock_registry, [i; 12], u16::from(i));
            let report =
                Message::with_id(&mock_registry, "RO_ACCESS_REPORT", u32::from(i), &[], vec![tag])
                    .expect("valid report");
            let frame = codec::encode_message(&mock_registry, &report).expect("encodes");
            writer.send(frame).await.expect("send report");
        }
        tokio::time::sleep(Duration::from_millis(200)).await;
    });

    let session = ReaderSession::connect(
        "127.0.0.1",
        port,
        Arc::clone(&registry),
        SessionConfig::default(),
    )
    .await
    .expect("connects");

    let (seen_tx, mut seen_rx) = mpsc::unbounded_channel();
    session.start_listener(move |message: Message| {
        let _ = seen_tx.send(message);
    });
    let request = Message::new(&registry, "GET_ROSPECS", &[], vec![]).expect("valid request");
    session
        .transact(request, Some(Duration::from_secs(2)))
        .await
        .expect("the reply arrives before the reports");

    for expected in 1u32..=3 {
        let report = tokio::time::timeout(Duration::from_secs(2), seen_rx.recv())
            .await
            .expect("a report arrives in time")
            .expect("channel open");
        assert_eq!(report.message_id(), expected);
        let tags = report.tag_reports(&registry);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].epc, vec![expected as u8; 12]);
    }
    mock.await.expect("mock exits");
}

#[tokio::test]
async fn transact_times_out_when_the_reader_stays_silent() {
    let registry = registry();
    let (listener, port) = bind().await;
    let mock_registry = Arc::clone(&registry);
    tokio::spawn(async move {
        let (_reader, _writer) = accept_and_greet(listener, &mock_registry).await;
        tokio::time::sleep(Duration::from_secs(5)).await;
    });

    let session = ReaderSession::connect(
        "127.0.0.1",
        port,
        Arc::clone(&registry),
        SessionConfig::default(),
    )
    .await
    .expect("connects");

    let request = Message::new(&registry, "GET_ROSPECS", &[], vec![]).expect("valid request");
    let err = session
        .transact(request, Some(Duration::from_millis(100)))
        .await
        .expect_err("no reply is coming");
    assert!(matches!(err, SessionError::Timeout));
}

#[tokio::test]
async fn close_sends_close_connection_and_cancels_waiters() {
    let registry = registry();
    let (listener, port) = bind().await;
    let mock_registry = Arc::clone(&registry);
    let mock = tokio::spawn(async move {
        let (mut reader, mut writer) = accept_and_greet(listener, &mock_registry).await;
        loop {
            let frame = reader.next().await;
            let Some(Ok(frame)) = frame else { break };
            let message = codec::decode_message(&mock_registry, &frame).expect("decodes");
            if message.name(&mock_registry) == "CLOSE_CONNECTION" {
                let reply = Message::with_id(
                    &mock_registry,
                    "CLOSE_CONNECTION_RESPONSE",
                    message.message_id(),
                    &[],
                    vec![status_success(&mock_registry)],
                )
                .expect("valid close response");
                let frame = codec::encode_message(&mock_registry, &reply).expect("encodes");
                writer.send(frame).await.expect("send close response");
            }
            // GET_ROSPECS is deliberately never answered.
        }
    });

    let session = Arc::new(
        ReaderSession::connect(
            "127.0.0.1",
            port,
            Arc::clone(&registry),
            SessionConfig::default(),
        )
        .await
        .expect("connects"),
    );

    let stranded = {
        let session = Arc::clone(&session);
        let registry = Arc::clone(&registry);
        tokio::spawn(async move {
            let request =
                Message::new(&registry, "GET_ROSPECS", &[], vec![]).expect("valid request");
            session.transact(request, Some(Duration::from_secs(30))).await
        })
    };
    // Give the stranded call time to register before closing.
    tokio::time::sleep(Duration::from_millis(50)).await;

    session.close().await.expect("close completes");
    assert_eq!(session.state(), SessionState::Disconnected);

    let err = stranded
        .await
        .expect("task joins")
        .expect_err("the stranded call is woken");
    assert!(matches!(err, SessionError::Cancelled));
    drop(session);
    mock.await.expect("mock exits");
}

#[tokio::test]
async fn peer_close_wakes_outstanding_transacts() {
    let registry = registry();
    let (listener, port) = bind().await;
    let mock_registry = Arc::clone(&registry);
    tokio::spawn(async move {
        let (mut reader, writer) = accept_and_greet(listener, &mock_registry).await;
        // Read one request, then drop the socket without answering.
        let _ = recv_message(&mock_registry, &mut reader).await;
        drop(writer);
        drop(reader);
    });

    let session = ReaderSession::connect(
        "127.0.0.1",
        port,
        Arc::clone(&registry),
        SessionConfig::default(),
    )
    .await
    .expect("connects");

    let request = Message::new(&registry, "GET_ROSPECS", &[], vec![]).expect("valid request");
    let err = session
        .transact(request, Some(Duration::from_secs(5)))
        .await
        .expect_err("the peer hung up");
    assert!(matches!(err, SessionError::PeerClosed));
}

#[tokio::test]
async fn connect_refused_reports_connect_failed() {
    let registry = registry();
    // Bind then drop to find a port with nothing listening.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        listener.local_addr().expect("local addr").port()
    };
    let err = ReaderSession::connect("127.0.0.1", port, registry, SessionConfig::default())
        .await
        .expect_err("nothing is listening");
    assert!(matches!(err, SessionError::ConnectFailed { .. }));
}

#[tokio::test]
async fn raw_socket_sees_framed_octets() {
    // The wire format is observable with no session machinery: the header
    // length field covers the whole frame.
    let registry = registry();
    let (listener, port) = bind().await;
    let mock_registry = Arc::clone(&registry);
    tokio::spawn(async move {
        let (socket, _) = listener.accept().await.expect("accept");
        let (_read_half, write_half) = socket.into_split();
        let mut writer = FramedWrite::new(write_half, LlrpFrameCodec::new(1 << 20));
        writer
            .send(handshake_frame(&mock_registry))
            .await
            .expect("send handshake");
        tokio::time::sleep(Duration::from_millis(200)).await;
    });

    let stream = TcpStream::connect(("127.0.0.1", port)).await.expect("connect");
    let mut frames = FramedRead::new(stream, LlrpFrameCodec::new(1 << 20));
    let frame = frames
        .next()
        .await
        .expect("one frame")
        .expect("clean framing");
    let declared = u32::from_be_bytes([frame[2], frame[3], frame[4], frame[5]]);
    assert_eq!(declared as usize, frame.len());
    let message = codec::decode_message(&registry, &frame).expect("decodes");
    assert_eq!(message.name(&registry), "READER_EVENT_NOTIFICATION");
}
