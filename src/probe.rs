//! Per-image probing and largest-picture selection.
//!
//! Each image URL from the listing is probed in two hops, both as raw
//! plain-text HTTP:
//!
//! 1. Ask the image host for the image's path and read the `Location`
//!    header, which names where the image actually lives.
//! 2. Ask for the redirect target's path and read `Content-Length`, which
//!    is the image's byte size. The body that follows is read off the
//!    socket and discarded.
//!
//! A probe that can't complete (no redirect, no usable size) fails the run;
//! there are no retries and no skipping.

use std::time::Duration;

use url::Url;

use crate::config::{HEADER_LOCATION, HTTP_PORT};
use crate::error::ProbeError;
use crate::response::Response;
use crate::transport::{format_get_request, send};

/// An image URL paired with its probed byte size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    /// The image URL exactly as the listing gave it.
    pub url: String,
    /// Byte size advertised by the host that serves the image.
    pub size: u64,
}

/// Probes one image: resolve its redirect, then fetch its byte size.
///
/// The returned [`Picture`] carries the original listing URL, not the
/// redirect target.
///
/// # Errors
///
/// Fails on transport errors, on a missing or malformed `Location` header,
/// and on a missing or non-numeric `Content-Length`.
pub async fn probe_image(image_url: &str, timeout: Duration) -> Result<Picture, ProbeError> {
    let image = Url::parse(image_url).map_err(|source| ProbeError::InvalidUrl {
        url: image_url.to_string(),
        source,
    })?;
    let image_host = host_of(&image)?;

    log::debug!("Resolving redirect for {image_url}");
    let request = format_get_request(image.path(), image_host);
    let lines = send(image_host, probe_port(&image), &request, false, timeout).await?;
    let redirect = Response::new(lines);
    let location = redirect.header(HEADER_LOCATION).ok_or(ProbeError::MissingHeader {
        name: HEADER_LOCATION,
    })?;
    let target = resolve_redirect(&image, location)?;
    let target_host = host_of(&target)?;

    // Deliberate mismatch: the request line takes the redirect target's
    // path while the Host header keeps the original image host. The image
    // mirrors answer for both names, and this exact pairing is the wire
    // contract the probe is built on.
    log::debug!("Sizing {image_url} via {target_host}");
    let request = format_get_request(target.path(), image_host);
    let lines = send(target_host, probe_port(&target), &request, false, timeout).await?;
    let size = Response::new(lines).content_length()?;

    log::debug!("{image_url} is {size} bytes");
    Ok(Picture {
        url: image_url.to_string(),
        size,
    })
}

/// Picks the largest picture. On equal sizes the later one wins.
///
/// # Errors
///
/// Returns `ProbeError::NoPictures` when there is nothing to compare.
pub fn largest(pictures: Vec<Picture>) -> Result<Picture, ProbeError> {
    pictures
        .into_iter()
        .max_by_key(|picture| picture.size)
        .ok_or(ProbeError::NoPictures)
}

/// Resolves a `Location` value against the URL that produced it.
///
/// Absolute targets stand alone; relative ones are joined onto the image
/// URL, matching how browsers treat a relative redirect.
fn resolve_redirect(image: &Url, location: &str) -> Result<Url, ProbeError> {
    Url::parse(location)
        .or_else(|_| image.join(location))
        .map_err(|source| ProbeError::InvalidUrl {
            url: location.to_string(),
            source,
        })
}

fn host_of(url: &Url) -> Result<&str, ProbeError> {
    url.host_str().ok_or_else(|| ProbeError::UrlWithoutHost {
        url: url.to_string(),
    })
}

/// Probe connections go to port 80 unless the URL pins another port.
fn probe_port(url: &Url) -> u16 {
    url.port().unwrap_or(HTTP_PORT)
}
