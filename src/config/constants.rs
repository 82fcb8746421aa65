//! Default values and protocol constants.

/// Host serving the rover photo listing.
pub const DEFAULT_API_HOST: &str = "api.nasa.gov";

/// Rover whose photos are listed when none is given.
pub const DEFAULT_ROVER: &str = "curiosity";

/// Martian day queried when none is given.
pub const DEFAULT_SOL: u32 = 15;

/// Listing endpoint prefix; the rover name and query string are appended.
pub const LISTING_PATH_PREFIX: &str = "/mars-photos/api/v1/rovers";

/// Environment variable consulted when no API key is passed on the CLI.
pub const API_KEY_ENV: &str = "NASA_API_KEY";

/// Rate-limited public key the API accepts when no real key is configured.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// Port for the TLS listing request.
pub const HTTPS_PORT: u16 = 443;

/// Port for plain-text image probes.
pub const HTTP_PORT: u16 = 80;

/// Default cap on image probes in flight at once.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Default per-phase I/O timeout in seconds (connect, handshake, and
/// request/response each get this long).
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Header that carries an image probe's redirect target.
pub const HEADER_LOCATION: &str = "Location";

/// Header that carries an image's byte size.
pub const HEADER_CONTENT_LENGTH: &str = "Content-Length";

/// Listing field whose string values are the image URLs.
pub const IMG_SRC_FIELD: &str = "img_src";
