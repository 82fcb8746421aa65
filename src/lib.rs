//! photo_probe library: find the largest photo a Mars rover shot on a sol
//!
//! This library asks the Mars rover photo API for every photo taken on a
//! given Martian day, probes each image over raw HTTP for its byte size,
//! and reports the largest one. The listing travels over TLS; the per-image
//! probes are plain-text HTTP against the image hosts.
//!
//! # Example
//!
//! ```no_run
//! use photo_probe::{run_probe, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     rover: "curiosity".to_string(),
//!     sol: 15,
//!     ..Default::default()
//! };
//!
//! let report = run_probe(config).await?;
//! println!("{}", report.largest.url);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod error;
pub mod initialization;
mod photos;
mod probe;
mod response;
mod transport;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error::{InitializationError, ProbeError, TransportError};
pub use probe::Picture;
pub use run::{run_probe, ProbeReport};

// Internal run module (contains the main probe pipeline)
mod run {
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use futures::stream::FuturesUnordered;
    use futures::StreamExt;
    use log::{info, warn};

    use crate::config::Config;
    use crate::initialization::init_semaphore;
    use crate::photos::parse_listing;
    use crate::probe::{largest, probe_image, Picture};
    use crate::response::Response;
    use crate::transport::{format_get_request, send};

    /// Results of a completed probe run.
    #[derive(Debug, Clone)]
    pub struct ProbeReport {
        /// The largest picture found, carrying its listing URL and byte size
        pub largest: Picture,
        /// Number of images the listing named (all of them were probed)
        pub total_images: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs a probe with the provided configuration.
    ///
    /// This is the main entry point for the library. It fetches the photo
    /// listing, probes every image concurrently for its byte size, and picks
    /// the largest.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the run (API endpoint, rover, sol,
    ///   concurrency, timeouts)
    ///
    /// # Returns
    ///
    /// Returns a `ProbeReport` naming the largest picture, or an error if
    /// the run failed to complete.
    ///
    /// # Errors
    ///
    /// The run is fail-fast: the first image whose probe chain breaks (in
    /// listing order) fails the whole run, as does a listing that cannot be
    /// fetched or parsed, or one that names no images at all.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use photo_probe::{run_probe, Config};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config::default();
    /// let report = run_probe(config).await?;
    /// println!("{} ({} bytes)", report.largest.url, report.largest.size);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_probe(config: Config) -> Result<ProbeReport> {
        let start_time = std::time::Instant::now();

        info!(
            "Fetching photo listing for rover {} sol {}",
            config.rover, config.sol
        );
        let images = fetch_image_urls(&config).await?;
        info!("Listing returned {} image URL(s)", images.len());

        let timeout = config.timeout();
        // A zero permit count would deadlock the first acquire
        let semaphore = init_semaphore(config.max_concurrency.max(1));

        let mut tasks = FuturesUnordered::new();
        for (index, image_url) in images.iter().enumerate() {
            let permit = Arc::clone(&semaphore)
                .acquire_owned()
                .await
                .context("Probe semaphore closed")?;
            let image_url = image_url.clone();
            tasks.push(tokio::spawn(async move {
                let _permit = permit;
                let result = probe_image(&image_url, timeout).await;
                (index, result)
            }));
        }

        let mut outcomes: Vec<(usize, Result<Picture, crate::error::ProbeError>)> =
            Vec::with_capacity(images.len());
        while let Some(task_result) = tasks.next().await {
            let (index, result) = task_result.context("Image probe task panicked")?;
            if let Err(ref error) = result {
                warn!("Probe failed for {}: {error}", images[index]);
            }
            outcomes.push((index, result));
        }

        // Results are reported in listing order; when probes failed, the
        // earliest image's error is the run's error
        outcomes.sort_by_key(|(index, _)| *index);

        let mut pictures = Vec::with_capacity(outcomes.len());
        for (index, result) in outcomes {
            let found =
                result.with_context(|| format!("Failed to probe image {}", images[index]))?;
            pictures.push(found);
        }

        let total_images = pictures.len();
        let winner = largest(pictures)?;
        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        info!(
            "Probed {} image(s) in {:.1}s; largest is {} bytes",
            total_images, elapsed_seconds, winner.size
        );

        Ok(ProbeReport {
            largest: winner,
            total_images,
            elapsed_seconds,
        })
    }

    /// Fetches the photo listing and returns its image URLs in
    /// document order.
    async fn fetch_image_urls(config: &Config) -> Result<Vec<String>> {
        let request = format_get_request(&config.listing_path(), &config.api_host);
        let lines = send(
            &config.api_host,
            config.api_port,
            &request,
            !config.api_plain,
            config.timeout(),
        )
        .await
        .context("Failed to fetch the photo listing")?;

        let response = Response::new(lines);
        let body = response
            .body()
            .context("Photo listing response had no body")?;
        parse_listing(body).context("Failed to parse the photo listing")
    }
}
