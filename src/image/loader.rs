// Background image loader.
// Fetches and decodes on the tokio runtime and hands each result back to
// the UI thread through a channel that is drained once per tick.

use std::sync::Arc;

use reqwest::{Client, header::USER_AGENT};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender, error::TryRecvError};

use crate::error::{BloomError, ImageLoadError, Result};

use super::decode::{DecodedImage, decode};
use super::reference::{ImageRef, RequestOptions};
use super::state::{ImageLoadState, ImageSlot, LoadCompletion, LoadRequest, Tickets};

const USER_AGENT_VALUE: &str = concat!("bloom/", env!("CARGO_PKG_VERSION"));

/// Issues loads for image slots and collects their completions.
pub struct ImageLoader {
    client: Client,
    runtime: Handle,
    tickets: Tickets,
    tx: UnboundedSender<LoadCompletion>,
    rx: UnboundedReceiver<LoadCompletion>,
    in_flight: usize,
}

impl ImageLoader {
    /// Create a loader that spawns its work on `runtime`.
    pub fn new(runtime: Handle) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| BloomError::Other(format!("HTTP client: {}", e)))?;
        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self {
            client,
            runtime,
            tickets: Tickets::new(),
            tx,
            rx,
            in_flight: 0,
        })
    }

    /// Observe `reference` through `slot`, starting a load if the slot asks
    /// for one, and return the slot's current state.
    pub fn observe<'s>(
        &mut self,
        slot: &'s mut ImageSlot,
        reference: Option<&ImageRef>,
        options: RequestOptions,
    ) -> &'s ImageLoadState {
        if let Some(request) = slot.observe(reference, options, &mut self.tickets) {
            self.enqueue(request);
        }
        slot.state()
    }

    /// Spawn the fetch and decode for `request`.
    pub fn enqueue(&mut self, request: LoadRequest) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        self.in_flight += 1;

        log::debug!("image load {:?}: {}", request.ticket, request.reference);
        self.runtime.spawn(async move {
            let result = fetch_and_decode(&client, &request.reference, request.options).await;
            if let Err(e) = &result {
                log::warn!("could not load image {}: {}", request.reference, e);
            }
            // A closed channel means the app is shutting down.
            let _ = tx.send(LoadCompletion {
                ticket: request.ticket,
                result,
            });
        });
    }

    /// Drain every completion that has arrived, without blocking.
    pub fn poll_completions(&mut self) -> Vec<LoadCompletion> {
        let mut done = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(completion) => done.push(completion),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        self.in_flight = self.in_flight.saturating_sub(done.len());
        done
    }

    /// Wait for the next completion.
    #[cfg(test)]
    pub async fn next_completion(&mut self) -> Option<LoadCompletion> {
        let completion = self.rx.recv().await;
        if completion.is_some() {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        completion
    }

    /// Number of loads issued but not yet collected.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

async fn fetch_and_decode(
    client: &Client,
    reference: &ImageRef,
    options: RequestOptions,
) -> std::result::Result<Arc<DecodedImage>, ImageLoadError> {
    let bytes = fetch(client, reference).await?;
    let image = tokio::task::spawn_blocking(move || decode(&bytes, &options))
        .await
        .map_err(|e| ImageLoadError::Task(e.to_string()))??;
    Ok(Arc::new(image))
}

async fn fetch(
    client: &Client,
    reference: &ImageRef,
) -> std::result::Result<Vec<u8>, ImageLoadError> {
    match reference {
        ImageRef::Remote(url) => {
            let response = client
                .get(url)
                .header(USER_AGENT, USER_AGENT_VALUE)
                .send()
                .await?;
            match response.status() {
                status if status.is_success() => Ok(response.bytes().await?.to_vec()),
                status => Err(ImageLoadError::Status {
                    status: status.as_u16(),
                    url: url.clone(),
                }),
            }
        }
        ImageRef::Local(path) => Ok(tokio::fs::read(path).await?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use image::{ImageFormat, Rgba, RgbaImage};
    use tempfile::TempDir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn write_png(dir: &TempDir, name: &str) -> ImageRef {
        let path = dir.path().join(name);
        RgbaImage::from_pixel(16, 16, Rgba([40, 120, 40, 255]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();
        ImageRef::Local(path)
    }

    fn png_bytes() -> Vec<u8> {
        let mut out = Vec::new();
        RgbaImage::from_pixel(4, 4, Rgba([200, 60, 90, 255]))
            .write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
            .unwrap();
        out
    }

    /// Answer a single HTTP request with `status` and `body`. The task
    /// yields the raw request head.
    async fn serve_once(status: &'static str, body: Vec<u8>) -> (ImageRef, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/monstera.png", listener.local_addr().unwrap());

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let head = format!(
                "HTTP/1.1 {}\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                body.len()
            );
            socket.write_all(head.as_bytes()).await.unwrap();
            socket.write_all(&body).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (ImageRef::Remote(url), server)
    }

    #[tokio::test]
    async fn test_remote_image_loads() {
        let (reference, server) = serve_once("200 OK", png_bytes()).await;

        let mut loader = ImageLoader::new(Handle::current()).unwrap();
        let mut slot = ImageSlot::new();
        loader.observe(&mut slot, Some(&reference), RequestOptions::sized(2, 2));

        let completion = loader.next_completion().await.unwrap();
        assert!(slot.resolve(&completion));
        let ImageLoadState::Loaded { image } = slot.state() else {
            panic!("expected a loaded image");
        };
        assert_eq!((image.width, image.height), (2, 2));
        assert_eq!(image.pixel(0, 0), Some([200, 60, 90, 255]));

        let request = server.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /monstera.png"));
        assert!(request.contains(&format!("user-agent: {}", USER_AGENT_VALUE)));
    }

    #[tokio::test]
    async fn test_any_success_status_loads() {
        let (reference, server) = serve_once("203 Non-Authoritative Information", png_bytes()).await;

        let mut loader = ImageLoader::new(Handle::current()).unwrap();
        let mut slot = ImageSlot::new();
        loader.observe(&mut slot, Some(&reference), RequestOptions::default());

        let completion = loader.next_completion().await.unwrap();
        assert!(completion.result.is_ok());
        assert!(slot.resolve(&completion));
        assert!(slot.state().is_loaded());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_remote_not_found_is_status_error() {
        let (reference, server) = serve_once("404 Not Found", b"missing".to_vec()).await;

        let mut loader = ImageLoader::new(Handle::current()).unwrap();
        let mut slot = ImageSlot::new();
        loader.observe(&mut slot, Some(&reference), RequestOptions::default());

        let completion = loader.next_completion().await.unwrap();
        match &completion.result {
            Err(ImageLoadError::Status { status, url }) => {
                assert_eq!(*status, 404);
                assert!(url.ends_with("/monstera.png"));
            }
            other => panic!("expected a status error, got {:?}", other),
        }
        assert!(slot.resolve(&completion));
        assert!(matches!(slot.state(), ImageLoadState::Error));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_remote_garbage_body_is_decode_error() {
        let (reference, server) = serve_once("200 OK", b"<html>not an image</html>".to_vec()).await;

        let mut loader = ImageLoader::new(Handle::current()).unwrap();
        let mut slot = ImageSlot::new();
        loader.observe(&mut slot, Some(&reference), RequestOptions::default());

        let completion = loader.next_completion().await.unwrap();
        assert!(matches!(completion.result, Err(ImageLoadError::Decode(_))));
        assert!(slot.resolve(&completion));
        assert!(matches!(slot.state(), ImageLoadState::Error));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_local_image_loads() {
        let temp_dir = TempDir::new().unwrap();
        let reference = write_png(&temp_dir, "monstera.png");

        let mut loader = ImageLoader::new(Handle::current()).unwrap();
        let mut slot = ImageSlot::new();

        let state = loader.observe(&mut slot, Some(&reference), RequestOptions::sized(4, 4));
        assert!(state.is_loading());
        assert_eq!(loader.in_flight(), 1);

        let completion = loader.next_completion().await.unwrap();
        assert!(slot.resolve(&completion));
        let ImageLoadState::Loaded { image } = slot.state() else {
            panic!("expected a loaded image");
        };
        assert_eq!((image.width, image.height), (4, 4));
        assert_eq!(loader.in_flight(), 0);

        // Observing again issues nothing
        loader.observe(&mut slot, Some(&reference), RequestOptions::sized(4, 4));
        assert_eq!(loader.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let reference = ImageRef::Local(temp_dir.path().join("nope.png"));

        let mut loader = ImageLoader::new(Handle::current()).unwrap();
        let mut slot = ImageSlot::new();
        loader.observe(&mut slot, Some(&reference), RequestOptions::default());

        let completion = loader.next_completion().await.unwrap();
        assert!(matches!(completion.result, Err(ImageLoadError::Fetch(_))));
        assert!(slot.resolve(&completion));
        assert!(matches!(slot.state(), ImageLoadState::Error));
    }

    #[tokio::test]
    async fn test_undecodable_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let mut loader = ImageLoader::new(Handle::current()).unwrap();
        let mut slot = ImageSlot::new();
        loader.observe(&mut slot, Some(&ImageRef::Local(path)), RequestOptions::default());

        let completion = loader.next_completion().await.unwrap();
        assert!(matches!(completion.result, Err(ImageLoadError::Decode(_))));
    }

    #[tokio::test]
    async fn test_none_reference_issues_nothing() {
        let mut loader = ImageLoader::new(Handle::current()).unwrap();
        let mut slot = ImageSlot::new();

        let state = loader.observe(&mut slot, None, RequestOptions::default());
        assert!(matches!(state, ImageLoadState::Error));
        assert_eq!(loader.in_flight(), 0);
        assert!(loader.poll_completions().is_empty());
    }

    #[tokio::test]
    async fn test_superseded_load_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let first = write_png(&temp_dir, "first.png");
        let second = write_png(&temp_dir, "second.png");

        let mut loader = ImageLoader::new(Handle::current()).unwrap();
        let mut slot = ImageSlot::new();
        loader.observe(&mut slot, Some(&first), RequestOptions::default());
        loader.observe(&mut slot, Some(&second), RequestOptions::default());
        assert_eq!(slot.reference(), Some(&second));

        let mut applied = 0;
        for _ in 0..2 {
            let completion = loader.next_completion().await.unwrap();
            if slot.resolve(&completion) {
                applied += 1;
            }
        }
        assert_eq!(applied, 1);
        assert!(slot.state().is_loaded());
    }
}
