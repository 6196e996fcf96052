//! TCP accept loop and per-connection line handling.
//!
//! Each connection runs in its own task against the shared `VecStore`. A
//! malformed line gets an error line back; the connection stays open.

use crate::config::{ServerConfig, GREETING, MAX_LINE_BYTES};
use crate::domain::error::DomainError;
use crate::infrastructure::transport::command::Command;
use crate::infrastructure::transport::response::Response;
use crate::VecStore;
use std::future::Future;
use std::io;
use std::sync::Arc;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader,
};
use tokio::net::TcpListener;

/// Binds `config.addr` and serves until `shutdown` resolves.
pub async fn run(
    config: &ServerConfig,
    store: Arc<VecStore>,
    shutdown: impl Future<Output = ()>,
) -> io::Result<()> {
    let listener = TcpListener::bind(&config.addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        "Server started. Waiting for connections"
    );
    serve(listener, store, config.search_limit, shutdown).await
}

/// Accepts connections on `listener` until `shutdown` resolves.
///
/// Accept errors are logged and the loop keeps going.
pub async fn serve(
    listener: TcpListener,
    store: Arc<VecStore>,
    search_limit: usize,
    shutdown: impl Future<Output = ()>,
) -> io::Result<()> {
    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            _ = &mut shutdown => {
                tracing::info!("Shutting down listener");
                return Ok(());
            }
            accepted = listener.accept() => {
                let (stream, peer) = match accepted {
                    Ok(conn) => conn,
                    Err(e) => {
                        tracing::warn!(error = %e, "Connection error");
                        continue;
                    }
                };
                tracing::info!(%peer, "New connection");
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    match handle_connection(stream, store, search_limit).await {
                        Ok(()) => tracing::info!(%peer, "Connection closed"),
                        Err(e) => tracing::warn!(%peer, error = %e, "Connection failed"),
                    }
                });
            }
        }
    }
}

/// Greets the client, then answers one response per non-blank line until the
/// input ends.
pub async fn handle_connection<S>(
    stream: S,
    store: Arc<VecStore>,
    search_limit: usize,
) -> io::Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let (reader, mut writer) = tokio::io::split(stream);
    let mut reader = BufReader::new(reader);

    writer.write_all(format!("{GREETING}\n").as_bytes()).await?;
    writer.flush().await?;

    let mut buf = Vec::new();
    loop {
        let response = match read_line(&mut reader, &mut buf).await? {
            LineRead::Eof => return Ok(()),
            LineRead::TooLong => Some(Response::Error(DomainError::LineTooLong(MAX_LINE_BYTES))),
            LineRead::Line => {
                let line = String::from_utf8_lossy(&buf);
                dispatch(&store, &line, search_limit).await
            }
        };
        if let Some(response) = response {
            writer.write_all(response.to_string().as_bytes()).await?;
            writer.flush().await?;
        }
    }
}

enum LineRead {
    Line,
    TooLong,
    Eof,
}

/// Reads one `\n`-terminated line of at most `MAX_LINE_BYTES` into `buf`.
///
/// An oversized line is discarded up to and including its newline.
async fn read_line<R>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<LineRead>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    let n = (&mut *reader)
        .take(MAX_LINE_BYTES as u64)
        .read_until(b'\n', buf)
        .await?;
    if n == 0 {
        return Ok(LineRead::Eof);
    }
    if buf.ends_with(b"\n") || buf.len() < MAX_LINE_BYTES {
        return Ok(LineRead::Line);
    }

    buf.clear();
    loop {
        let chunk = reader.fill_buf().await?;
        if chunk.is_empty() {
            break;
        }
        match chunk.iter().position(|&b| b == b'\n') {
            Some(i) => {
                reader.consume(i + 1);
                break;
            }
            None => {
                let len = chunk.len();
                reader.consume(len);
            }
        }
    }
    Ok(LineRead::TooLong)
}

async fn dispatch(store: &Arc<VecStore>, line: &str, search_limit: usize) -> Option<Response> {
    let command = match Command::parse(line) {
        Ok(Some(command)) => command,
        Ok(None) => return None,
        Err(e) => return Some(Response::Error(e)),
    };

    let response = match command {
        Command::Add { id, vector } => match store.add(id, vector) {
            Ok(()) => Response::Ok,
            Err(e) => Response::Error(e),
        },
        Command::Search { query } => match store.search(&query, search_limit) {
            Ok(hits) => Response::Hits(hits),
            Err(e) => Response::Error(e),
        },
        Command::Save => {
            // The file write holds the read lock; keep it off the reactor.
            let store = Arc::clone(store);
            match tokio::task::spawn_blocking(move || store.save()).await {
                Ok(Ok(_)) => Response::Saved,
                Ok(Err(e)) => Response::SaveFailed(e),
                Err(e) => Response::SaveFailed(DomainError::Io(io::Error::other(e.to_string()))),
            }
        }
    };
    Some(response)
}
