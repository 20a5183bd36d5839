//! Media player control.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::trace;
use widget_bridge_core::{Method, Rpc, RpcResult, SetOutcome};

use crate::number;

/// The item the player is on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaMetadata {
    pub track_id: String,
    pub title: String,
    pub album_name: String,
    pub album_artists: Vec<String>,
    pub artists: Vec<String>,
    pub art_url: Option<String>,
    /// Microseconds.
    pub track_length: Option<u64>,
}

impl MediaMetadata {
    pub fn track_length_duration(&self) -> Option<Duration> {
        self.track_length.map(Duration::from_micros)
    }
}

/// Snapshot of the active player.
///
/// `metadata` is `None` when nothing is loaded and `volume` is `None` when
/// the player has no volume control; neither is an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaState {
    /// Bus name on Linux (`:1.1337`), platform specific elsewhere.
    pub id: String,
    pub player_name: String,
    pub metadata: Option<MediaMetadata>,
    /// Between 0.0 and 1.0.
    pub volume: Option<f64>,
    /// Microseconds.
    pub track_progress: Option<u64>,
    pub shuffle: bool,
}

impl MediaState {
    pub fn track_progress_duration(&self) -> Option<Duration> {
        self.track_progress.map(Duration::from_micros)
    }
}

#[derive(Debug, Clone)]
pub struct MediaApi {
    rpc: Rpc,
}

impl MediaApi {
    pub fn new(rpc: Rpc) -> Self {
        Self { rpc }
    }

    /// `true` plays, `false` pauses.
    pub async fn play_pause(&self, play: bool) -> RpcResult<SetOutcome> {
        trace!("Set play/pause: {}", play);
        self.rpc.call_set(Method::MediaPlayPause, json!(play)).await
    }

    pub async fn next(&self) -> RpcResult<MediaState> {
        trace!("Skip to next track");
        self.rpc.call(Method::MediaNext, Value::Null).await
    }

    pub async fn prev(&self) -> RpcResult<MediaState> {
        trace!("Skip to previous track");
        self.rpc.call(Method::MediaPrev, Value::Null).await
    }

    pub async fn set_volume(&self, volume: f64) -> RpcResult<SetOutcome> {
        trace!("Set player volume: {}", volume);
        self.rpc.call_set(Method::MediaSetVolume, number(volume)).await
    }

    pub async fn state(&self) -> RpcResult<MediaState> {
        trace!("Request player state");
        self.rpc.call(Method::MediaState, Value::Null).await
    }

    pub async fn volume(&self) -> RpcResult<f64> {
        trace!("Request player volume");
        self.rpc.call(Method::MediaGetVolume, Value::Null).await
    }

    pub async fn is_active(&self) -> RpcResult<bool> {
        trace!("Request player activity");
        self.rpc.call(Method::MediaActive, Value::Null).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_state_without_track() {
        let wire = json!({
            "id": "1", "player_name": "x", "metadata": null,
            "volume": null, "track_progress": 0, "shuffle": false
        });
        let state: MediaState = serde_json::from_value(wire.clone()).unwrap();
        assert!(state.metadata.is_none());
        assert!(state.volume.is_none());
        assert_eq!(state.track_progress_duration(), Some(Duration::ZERO));
        assert_eq!(serde_json::to_value(&state).unwrap(), wire);
    }

    #[test]
    fn test_metadata_length() {
        let metadata: MediaMetadata = serde_json::from_value(json!({
            "track_id": "/org/mpris/MediaPlayer2/Track/7",
            "title": "Teardrop", "album_name": "Mezzanine",
            "album_artists": ["Massive Attack"], "artists": ["Massive Attack"],
            "art_url": null, "track_length": 330_000_000u64
        }))
        .unwrap();
        assert_eq!(
            metadata.track_length_duration(),
            Some(Duration::from_secs(330))
        );
    }
}
