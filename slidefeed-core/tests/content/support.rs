// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared test doubles: an HTTP stub server, a gated content source, and an
//! event recorder.

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use slidefeed_core::{
    CallbackHandler, ContentEvent, ContentSource, EventDispatcher, FetchResult,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tokio::sync::Notify;
use tokio::task::JoinHandle;

pub const ONE_SLIDE: &str = r#"{"data":[{"type":"slide","title":"T","content":"C"}]}"#;

/// How the stub answers every request
#[derive(Debug, Clone)]
pub enum Reply {
    /// Respond with a status line and body
    Status(u16, String),
    /// Respond 200 with these exact body bytes
    RawBody(Vec<u8>),
    /// Accept, read the request, then say nothing for this long
    Stall(Duration),
}

impl Reply {
    pub fn ok(body: &str) -> Self {
        Reply::Status(200, body.to_string())
    }
}

/// Minimal HTTP/1.1 server on 127.0.0.1 for fetcher tests
pub struct StubServer {
    addr: SocketAddr,
    reply: Arc<Mutex<Reply>>,
    hits: Arc<AtomicUsize>,
    task: JoinHandle<()>,
}

impl StubServer {
    pub async fn start(reply: Reply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let reply = Arc::new(Mutex::new(reply));
        let hits = Arc::new(AtomicUsize::new(0));

        let task = {
            let reply = reply.clone();
            let hits = hits.clone();
            tokio::spawn(async move {
                while let Ok((stream, _)) = listener.accept().await {
                    hits.fetch_add(1, Ordering::SeqCst);
                    let reply = reply.lock().unwrap().clone();
                    tokio::spawn(serve(stream, reply));
                }
            })
        };

        Self {
            addr,
            reply,
            hits,
            task,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}/content.json", self.addr)
    }

    pub fn set_reply(&self, reply: Reply) {
        *self.reply.lock().unwrap() = reply;
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn serve(mut stream: TcpStream, reply: Reply) {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        match stream.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
        if head.windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }

    match reply {
        Reply::Status(code, body) => respond(&mut stream, code, body.as_bytes()).await,
        Reply::RawBody(body) => respond(&mut stream, 200, &body).await,
        Reply::Stall(duration) => {
            tokio::time::sleep(duration).await;
        }
    }
}

async fn respond(stream: &mut TcpStream, code: u16, body: &[u8]) {
    let reason = if code == 200 { "OK" } else { "Stub" };
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        code,
        reason,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes()).await;
    let _ = stream.write_all(body).await;
    let _ = stream.shutdown().await;
}

/// Address nothing listens on
pub async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/content.json", addr)
}

/// Listener that never accepts and whose accept queue is already full, so
/// new connection attempts hang in the handshake.
pub struct SaturatedListener {
    addr: SocketAddr,
    _listener: TcpListener,
    _held: Vec<TcpStream>,
}

impl SaturatedListener {
    /// Fill the queue. `None` when the host accepts past its backlog.
    pub async fn start() -> Option<Self> {
        let socket = TcpSocket::new_v4().unwrap();
        socket.bind("127.0.0.1:0".parse().unwrap()).unwrap();
        let listener = socket.listen(1).unwrap();
        let addr = listener.local_addr().unwrap();

        let mut held = Vec::new();
        for _ in 0..64 {
            match tokio::time::timeout(Duration::from_millis(200), TcpStream::connect(addr)).await {
                Ok(Ok(stream)) => held.push(stream),
                Ok(Err(_)) => return None,
                Err(_) => {
                    return Some(Self {
                        addr,
                        _listener: listener,
                        _held: held,
                    })
                }
            }
        }
        None
    }

    pub fn url(&self) -> String {
        format!("http://{}/content.json", self.addr)
    }
}

/// Content source whose calls each wait on a gate before answering.
///
/// Calls take queued replies front to back.
#[derive(Default)]
pub struct GatedSource {
    pending: Mutex<VecDeque<(Arc<Notify>, FetchResult)>>,
}

impl GatedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply; it is returned once the gate is opened
    pub fn push(&self, result: FetchResult) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.pending
            .lock()
            .unwrap()
            .push_back((gate.clone(), result));
        gate
    }
}

#[async_trait]
impl ContentSource for GatedSource {
    async fn fetch(&self) -> FetchResult {
        let next = self.pending.lock().unwrap().pop_front();
        let (gate, result) = next.expect("no reply queued");
        gate.notified().await;
        result
    }
}

/// Content source that answers every call with the same result
pub struct FixedSource {
    result: FetchResult,
    calls: AtomicUsize,
}

impl FixedSource {
    pub fn new(result: FetchResult) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentSource for FixedSource {
    async fn fetch(&self) -> FetchResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// Dispatcher plus the list of everything it dispatched
pub fn recording_dispatcher() -> (Arc<EventDispatcher>, Arc<Mutex<Vec<ContentEvent>>>) {
    let dispatcher = Arc::new(EventDispatcher::new());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    dispatcher.add_handler(Arc::new(CallbackHandler::new(move |event| {
        sink.lock().unwrap().push(event);
    })));
    (dispatcher, seen)
}
