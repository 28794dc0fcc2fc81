// SPDX-License-Identifier: MPL-2.0
//! Fetching the hosted clips into the local cache.
//!
//! Clips are opaque remote resources: nothing here parses or validates
//! their content. Each URL maps to a stable cache file named by the BLAKE3
//! hash of the URL itself, so a changed URL is a cache miss and a repeated
//! launch is a hit. A configured local directory short-circuits the network
//! entirely when it holds the expected files.

use crate::error::{Error, Result};
use futures_util::StreamExt;
use std::path::{Path, PathBuf};

/// File name expected in a local clip directory for the loader clip.
pub const LOCAL_LOADER_FILE: &str = "loader.webm";

/// File name expected in a local clip directory for the feature clip.
pub const LOCAL_FEATURE_FILE: &str = "feature.webm";

/// Where the two clips should come from.
#[derive(Debug, Clone)]
pub struct ClipSources {
    pub loader_url: String,
    pub feature_url: String,
    /// Directory holding `loader.webm` / `feature.webm`; bypasses download.
    pub local_dir: Option<PathBuf>,
}

/// On-disk locations of both clips, ready for playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedClips {
    pub loader: PathBuf,
    pub feature: PathBuf,
}

/// Resolves both clips to local paths, downloading whatever the cache is
/// missing. Local-directory files win over the cache and the network.
pub async fn resolve_clips(sources: ClipSources, cache_dir: PathBuf) -> Result<ResolvedClips> {
    if let Some(local) = local_clips(sources.local_dir.as_deref()) {
        return Ok(local);
    }

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("Overture/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let loader = fetch_into_cache(&client, &sources.loader_url, &cache_dir).await?;
    let feature = fetch_into_cache(&client, &sources.feature_url, &cache_dir).await?;

    Ok(ResolvedClips { loader, feature })
}

/// Returns both clips from the local directory, or `None` when the
/// directory is unset or incomplete.
fn local_clips(local_dir: Option<&Path>) -> Option<ResolvedClips> {
    let dir = local_dir?;
    let loader = dir.join(LOCAL_LOADER_FILE);
    let feature = dir.join(LOCAL_FEATURE_FILE);

    if loader.is_file() && feature.is_file() {
        Some(ResolvedClips { loader, feature })
    } else {
        None
    }
}

/// Cache file for a clip URL: BLAKE3 of the URL plus the URL's extension.
pub fn cached_clip_path(cache_dir: &Path, url: &str) -> PathBuf {
    let key = blake3::hash(url.as_bytes()).to_hex();
    let extension = url.rsplit('.').next().filter(|ext| {
        !ext.contains('/') && ext.len() <= 4 && ext.chars().all(|c| c.is_ascii_alphanumeric())
    });

    let file_name = match extension {
        Some(ext) => format!("{key}.{ext}"),
        None => key.to_string(),
    };
    cache_dir.join(file_name)
}

/// Downloads `url` into the cache unless it is already there.
///
/// The body is streamed to a `.part` file and renamed on completion, so an
/// interrupted download never leaves a truncated clip behind under the
/// final name.
async fn fetch_into_cache(
    client: &reqwest::Client,
    url: &str,
    cache_dir: &Path,
) -> Result<PathBuf> {
    let dest = cached_clip_path(cache_dir, url);
    if dest.is_file() {
        return Ok(dest);
    }

    std::fs::create_dir_all(cache_dir)?;

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Http(format!(
            "HTTP status {} fetching {url}",
            response.status()
        )));
    }

    let partial = dest.with_extension("part");
    let mut file = std::fs::File::create(&partial)?;

    let mut downloaded: u64 = 0;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        std::io::Write::write_all(&mut file, &chunk)?;
        downloaded += chunk.len() as u64;
    }
    drop(file);

    if downloaded == 0 {
        let _ = std::fs::remove_file(&partial);
        return Err(Error::Http(format!("Empty response fetching {url}")));
    }

    std::fs::rename(&partial, &dest)?;
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn cache_path_is_stable_for_same_url() {
        let dir = Path::new("/cache");
        let a = cached_clip_path(dir, "https://example.com/loader.webm");
        let b = cached_clip_path(dir, "https://example.com/loader.webm");
        assert_eq!(a, b);
    }

    #[test]
    fn cache_path_differs_per_url() {
        let dir = Path::new("/cache");
        let a = cached_clip_path(dir, "https://example.com/loader.webm");
        let b = cached_clip_path(dir, "https://example.com/feature.webm");
        assert_ne!(a, b);
    }

    #[test]
    fn cache_path_keeps_url_extension() {
        let dir = Path::new("/cache");
        let path = cached_clip_path(dir, "https://example.com/clip.webm");
        assert_eq!(
            path.extension().and_then(|e| e.to_str()),
            Some("webm"),
            "extension should survive into the cache file name"
        );
    }

    #[test]
    fn cache_path_tolerates_extensionless_urls() {
        let dir = Path::new("/cache");
        let path = cached_clip_path(dir, "https://example.com/clips/intro");
        assert!(path.starts_with(dir));
        assert!(path.extension().is_none());
    }

    #[test]
    fn local_dir_with_both_files_is_used() {
        let temp_dir = tempdir().expect("temp dir");
        std::fs::write(temp_dir.path().join(LOCAL_LOADER_FILE), b"clip").expect("write");
        std::fs::write(temp_dir.path().join(LOCAL_FEATURE_FILE), b"clip").expect("write");

        let resolved = local_clips(Some(temp_dir.path())).expect("should resolve");
        assert_eq!(resolved.loader, temp_dir.path().join(LOCAL_LOADER_FILE));
        assert_eq!(resolved.feature, temp_dir.path().join(LOCAL_FEATURE_FILE));
    }

    #[test]
    fn incomplete_local_dir_is_ignored() {
        let temp_dir = tempdir().expect("temp dir");
        std::fs::write(temp_dir.path().join(LOCAL_LOADER_FILE), b"clip").expect("write");

        assert!(local_clips(Some(temp_dir.path())).is_none());
    }

    #[tokio::test]
    async fn resolve_prefers_local_dir_over_network() {
        let temp_dir = tempdir().expect("temp dir");
        std::fs::write(temp_dir.path().join(LOCAL_LOADER_FILE), b"clip").expect("write");
        std::fs::write(temp_dir.path().join(LOCAL_FEATURE_FILE), b"clip").expect("write");

        // URLs are unreachable on purpose; the local dir must win before
        // any request is attempted.
        let sources = ClipSources {
            loader_url: "http://127.0.0.1:1/loader.webm".into(),
            feature_url: "http://127.0.0.1:1/feature.webm".into(),
            local_dir: Some(temp_dir.path().to_path_buf()),
        };

        let resolved = resolve_clips(sources, temp_dir.path().join("cache"))
            .await
            .expect("local resolution should not touch the network");
        assert_eq!(resolved.loader, temp_dir.path().join(LOCAL_LOADER_FILE));
    }

    #[tokio::test]
    async fn cached_clip_skips_download() {
        let temp_dir = tempdir().expect("temp dir");
        let url = "http://127.0.0.1:1/loader.webm";
        let cached = cached_clip_path(temp_dir.path(), url);
        std::fs::write(&cached, b"already here").expect("write");

        let client = reqwest::Client::new();
        let path = fetch_into_cache(&client, url, temp_dir.path())
            .await
            .expect("cache hit should not touch the network");
        assert_eq!(path, cached);
    }
}
