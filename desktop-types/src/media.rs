use serde::{Deserialize, Serialize};

use crate::config::MusicConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
}

impl Track {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }
}

/// Now-playing state behind the music popover. No audio is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicPlayer {
    tracks: Vec<Track>,
    track_index: usize,
    playing: bool,
    volume: u8,
}

impl Default for MusicPlayer {
    fn default() -> Self {
        Self::from_config(&MusicConfig::default())
    }
}

impl MusicPlayer {
    pub fn from_config(config: &MusicConfig) -> Self {
        Self {
            tracks: config.tracks.clone(),
            track_index: 0,
            playing: false,
            volume: config.volume.min(100),
        }
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.track_index)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn toggle_playback(&mut self) {
        self.playing = !self.playing;
    }

    /// Advance to the next track, wrapping at the end of the list.
    pub fn skip(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        self.track_index = (self.track_index + 1) % self.tracks.len();
    }

    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
    }
}

/// Voice assistant popover. The draft is displayed, never interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceAssistant {
    draft: String,
    listening: bool,
}

impl VoiceAssistant {
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn set_draft(&mut self, draft: String) {
        self.draft = draft;
    }

    pub fn toggle_listening(&mut self) {
        self.listening = !self.listening;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_wraps_around() {
        let mut player = MusicPlayer::default();
        let first = player.current_track().cloned();
        player.skip();
        player.skip();
        player.skip();
        assert_eq!(player.current_track().cloned(), first);
    }

    #[test]
    fn skip_on_empty_playlist_is_noop() {
        let config = MusicConfig {
            tracks: Vec::new(),
            ..MusicConfig::default()
        };
        let mut player = MusicPlayer::from_config(&config);
        player.skip();
        assert!(player.current_track().is_none());
    }

    #[test]
    fn volume_is_capped() {
        let mut player = MusicPlayer::default();
        player.set_volume(250);
        assert_eq!(player.volume(), 100);
    }

    #[test]
    fn voice_draft_is_stored_verbatim() {
        let mut voice = VoiceAssistant::default();
        voice.set_draft("open the pod bay doors".to_string());
        voice.toggle_listening();
        assert_eq!(voice.draft(), "open the pod bay doors");
        assert!(voice.is_listening());
    }
}
