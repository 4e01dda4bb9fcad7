//! Built-in renderers and registry construction from configuration

use super::renderer::FfmpegRenderer;
use crate::adapters::host::RendererSet;
use crate::config::{RegionSplitConfig, RendererConfig};
use crate::domain::Preset;
use std::sync::Arc;

/// The FLAC, MP3, WAV and Ogg Vorbis renderers shipped with regionsplit
pub fn builtin_renderers(ffmpeg_path: &str) -> Vec<FfmpegRenderer> {
    vec![
        FfmpegRenderer::new(
            "FLAC Audio",
            ".flac",
            vec![
                Preset::new(
                    0,
                    "44,100 Hz, 16 Bit, Stereo Highest Compression",
                    &[
                        "-c:a",
                        "flac",
                        "-compression_level",
                        "12",
                        "-ar",
                        "44100",
                        "-sample_fmt",
                        "s16",
                        "-ac",
                        "2",
                    ],
                ),
                Preset::new(
                    1,
                    "48,000 Hz, 24 Bit, Stereo",
                    &[
                        "-c:a",
                        "flac",
                        "-ar",
                        "48000",
                        "-sample_fmt",
                        "s32",
                        "-bits_per_raw_sample",
                        "24",
                        "-ac",
                        "2",
                    ],
                ),
                Preset::new(2, "Default Template", &["-c:a", "flac"]),
            ],
            ffmpeg_path,
        ),
        FfmpegRenderer::new(
            "MP3 Audio",
            ".mp3",
            vec![
                mp3_cbr(0, "320 Kbps, CD Quality", "320k"),
                mp3_cbr(1, "192 Kbps, CD Quality", "192k"),
                mp3_cbr(2, "128 Kbps, CD Quality", "128k"),
                Preset::new(
                    3,
                    "VBR Highest Quality",
                    &["-c:a", "libmp3lame", "-q:a", "0", "-ar", "44100", "-ac", "2"],
                ),
            ],
            ffmpeg_path,
        ),
        FfmpegRenderer::new(
            "Wave (Microsoft)",
            ".wav",
            vec![
                Preset::new(
                    0,
                    "44,100 Hz, 16 Bit, Stereo",
                    &["-c:a", "pcm_s16le", "-ar", "44100", "-ac", "2"],
                ),
                Preset::new(
                    1,
                    "48,000 Hz, 24 Bit, Stereo",
                    &["-c:a", "pcm_s24le", "-ar", "48000", "-ac", "2"],
                ),
            ],
            ffmpeg_path,
        ),
        FfmpegRenderer::new(
            "Ogg Vorbis",
            ".ogg",
            vec![
                Preset::new(0, "Quality 6", &["-c:a", "libvorbis", "-q:a", "6"]),
                Preset::new(1, "Quality 9", &["-c:a", "libvorbis", "-q:a", "9"]),
            ],
            ffmpeg_path,
        ),
    ]
}

fn mp3_cbr(index: usize, name: &str, bitrate: &str) -> Preset {
    Preset::new(
        index,
        name,
        &["-c:a", "libmp3lame", "-b:a", bitrate, "-ar", "44100", "-ac", "2"],
    )
}

/// Renderer declared in a `[[renderers]]` table
pub fn configured_renderer(config: &RendererConfig, ffmpeg_path: &str) -> FfmpegRenderer {
    let templates = config
        .presets
        .iter()
        .enumerate()
        .map(|(index, preset)| Preset {
            index,
            name: preset.name.clone(),
            args: preset.args.clone(),
        })
        .collect();

    FfmpegRenderer::new(&config.name, &config.extension, templates, ffmpeg_path)
}

/// Build the renderer registry described by the configuration
///
/// Configured renderers are registered first so they shadow built-ins that share an
/// extension or name.
pub fn registry_from_config(config: &RegionSplitConfig) -> RendererSet {
    let ffmpeg_path = config.encoder.ffmpeg_path.as_str();
    let mut registry = RendererSet::new();

    for renderer in &config.renderers {
        registry.register(Arc::new(configured_renderer(renderer, ffmpeg_path)));
    }

    if config.encoder.builtin_renderers {
        for renderer in builtin_renderers(ffmpeg_path) {
            registry.register(Arc::new(renderer));
        }
    }

    tracing::debug!(
        renderers = registry.len(),
        ffmpeg = %ffmpeg_path,
        "Renderer registry ready"
    );

    registry
}
