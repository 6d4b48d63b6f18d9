use color_eyre::eyre::Result;
use futures::future::join_all;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::raw_msg::RawMsg,
    domain::channel::{Channel, LiveChannel},
    infrastructure::config::ProbeConfig,
};

/// Work accepted by [`LiveProbeService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOperation {
    Probe {
        generation: u64,
        channels: Vec<Channel>,
    },
}

/// Best-effort liveness guess: a channel whose live embed answers with a
/// success status is assumed to be streaming
#[derive(Debug, Clone)]
pub struct LiveProber {
    http_client: reqwest::Client,
    endpoint: String,
}

impl LiveProber {
    pub fn new(config: &ProbeConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http_client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub async fn is_live(&self, channel: &Channel) -> bool {
        let url = channel.id.embed_url_at(&self.endpoint);
        match self.http_client.get(&url).send().await {
            Ok(response) => {
                let live = response.status().is_success();
                log::debug!("Probe {} -> {} (live: {live})", channel.id, response.status());
                live
            }
            Err(e) => {
                log::debug!("Probe {} failed: {e}", channel.id);
                false
            }
        }
    }

    /// Probe every channel concurrently; results keep the input order
    pub async fn probe_all(&self, channels: &[Channel]) -> Vec<LiveChannel> {
        let probes = channels.iter().map(|channel| async move {
            LiveChannel::new(channel.clone(), self.is_live(channel).await)
        });
        join_all(probes).await
    }
}

/// Background service running probe passes and reporting them as [`RawMsg::ProbeCompleted`]
pub struct LiveProbeService {
    prober: LiveProber,
    // Incoming channels
    op_rx: mpsc::UnboundedReceiver<ProbeOperation>,
    cancel_token: CancellationToken,
    // Outgoing channels
    raw_tx: mpsc::UnboundedSender<RawMsg>,
}

pub type NewLiveProbeService = (
    mpsc::UnboundedSender<ProbeOperation>, // op_tx - passes to run
    CancellationToken,                     // shutdown signal
    LiveProbeService,
);

impl LiveProbeService {
    pub fn new(
        config: &ProbeConfig,
        raw_tx: mpsc::UnboundedSender<RawMsg>,
    ) -> Result<NewLiveProbeService> {
        let prober = LiveProber::new(config)?;
        let (op_tx, op_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        Ok((
            op_tx,
            cancel_token.clone(),
            Self {
                prober,
                op_rx,
                cancel_token,
                raw_tx,
            },
        ))
    }

    /// Run the service in a background task
    pub fn run(mut self) {
        tokio::spawn(async move {
            self.run_service().await;
        });
    }

    async fn run_service(&mut self) {
        loop {
            tokio::select! {
                result = self.op_rx.recv() => match result {
                    Some(op) => self.handle_operation(op),
                    None => break,
                },

                _ = self.cancel_token.cancelled() => {
                    log::info!("LiveProbeService received cancellation signal");
                    break;
                }
            }
        }
    }

    /// Passes run concurrently so a refresh never waits behind a slow pass
    fn handle_operation(&self, op: ProbeOperation) {
        match op {
            ProbeOperation::Probe {
                generation,
                channels,
            } => {
                log::info!("Probe pass {generation}: {} channels", channels.len());
                let prober = self.prober.clone();
                let raw_tx = self.raw_tx.clone();
                let cancel_token = self.cancel_token.child_token();
                tokio::spawn(async move {
                    tokio::select! {
                        results = prober.probe_all(&channels) => {
                            let _ = raw_tx.send(RawMsg::ProbeCompleted { generation, results });
                        }
                        _ = cancel_token.cancelled() => {
                            log::debug!("Probe pass {generation} cancelled");
                        }
                    }
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;

    /// Minimal HTTP server: 200 for channels in `live`, 404 for the rest,
    /// and no answer at all for `hang`
    async fn spawn_stub(live: &'static [&'static str]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                tokio::spawn(async move {
                    let mut buf = vec![0u8; 4096];
                    let n = socket.read(&mut buf).await.unwrap_or(0);
                    let request = String::from_utf8_lossy(&buf[..n]).to_string();
                    let target = request.split_whitespace().nth(1).unwrap_or("").to_string();
                    if target.ends_with("channel=hang") {
                        tokio::time::sleep(Duration::from_secs(30)).await;
                        return;
                    }
                    let is_live = live
                        .iter()
                        .any(|id| target.ends_with(&format!("channel={id}")));
                    let status = if is_live { "200 OK" } else { "404 Not Found" };
                    let response = format!(
                        "HTTP/1.1 {status}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                });
            }
        });
        format!("http://{addr}/embed/live_stream")
    }

    fn config(endpoint: String, timeout_ms: u64) -> ProbeConfig {
        ProbeConfig {
            endpoint,
            timeout_ms,
        }
    }

    #[test]
    fn test_service_builds_from_default_config() -> Result<()> {
        let (raw_tx, _raw_rx) = mpsc::unbounded_channel();
        let (op_tx, cancel_token, _service) =
            LiveProbeService::new(&ProbeConfig::default(), raw_tx)?;

        assert!(!op_tx.is_closed());
        assert!(!cancel_token.is_cancelled());
        Ok(())
    }

    #[tokio::test]
    async fn test_success_status_means_live() {
        let endpoint = spawn_stub(&["on"]).await;
        let prober = LiveProber::new(&config(endpoint, 2000)).unwrap();

        assert!(prober.is_live(&Channel::new("on", "On")).await);
        assert!(!prober.is_live(&Channel::new("off", "Off")).await);
    }

    #[tokio::test]
    async fn test_timeout_means_not_live() {
        let endpoint = spawn_stub(&[]).await;
        let prober = LiveProber::new(&config(endpoint, 100)).unwrap();

        assert!(!prober.is_live(&Channel::new("hang", "Hang")).await);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_means_not_live() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let prober = LiveProber::new(&config(format!("http://{addr}/embed"), 500)).unwrap();

        assert!(!prober.is_live(&Channel::new("x", "X")).await);
    }

    #[tokio::test]
    async fn test_probe_all_keeps_order() {
        let endpoint = spawn_stub(&["a", "c"]).await;
        let prober = LiveProber::new(&config(endpoint, 2000)).unwrap();
        let channels = vec![
            Channel::new("a", "A"),
            Channel::new("b", "B"),
            Channel::new("c", "C"),
        ];

        let results = prober.probe_all(&channels).await;

        assert_eq!(
            results,
            vec![
                LiveChannel::new(Channel::new("a", "A"), true),
                LiveChannel::new(Channel::new("b", "B"), false),
                LiveChannel::new(Channel::new("c", "C"), true),
            ]
        );
    }

    #[tokio::test]
    async fn test_service_reports_completed_pass() {
        let endpoint = spawn_stub(&["b"]).await;
        let (raw_tx, mut raw_rx) = mpsc::unbounded_channel();
        let (op_tx, cancel_token, service) =
            LiveProbeService::new(&config(endpoint, 2000), raw_tx).unwrap();
        service.run();

        op_tx
            .send(ProbeOperation::Probe {
                generation: 7,
                channels: vec![Channel::new("a", "A"), Channel::new("b", "B")],
            })
            .unwrap();

        let msg = tokio::time::timeout(Duration::from_secs(5), raw_rx.recv())
            .await
            .unwrap();
        match msg {
            Some(RawMsg::ProbeCompleted {
                generation,
                results,
            }) => {
                assert_eq!(generation, 7);
                let live: Vec<_> = results
                    .iter()
                    .filter(|r| r.live)
                    .map(|r| r.channel.id.as_str())
                    .collect();
                assert_eq!(live, vec!["b"]);
            }
            other => panic!("Expected ProbeCompleted, got {other:?}"),
        }
        cancel_token.cancel();
    }

    #[tokio::test]
    async fn test_cancelled_service_drops_pass() {
        let endpoint = spawn_stub(&[]).await;
        let (raw_tx, mut raw_rx) = mpsc::unbounded_channel();
        let (op_tx, cancel_token, service) =
            LiveProbeService::new(&config(endpoint, 10_000), raw_tx).unwrap();
        service.run();

        op_tx
            .send(ProbeOperation::Probe {
                generation: 1,
                channels: vec![Channel::new("hang", "Hang")],
            })
            .unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        cancel_token.cancel();

        let msg = tokio::time::timeout(Duration::from_millis(500), raw_rx.recv()).await;
        assert!(matches!(msg, Ok(None) | Err(_)));
    }
}
