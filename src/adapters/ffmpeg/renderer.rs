//! Renderer invoking the `ffmpeg` command-line encoder

use crate::adapters::host::{EncodeJob, Renderer};
use crate::domain::{Preset, RegionSplitError, Result};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// A renderer whose templates are ffmpeg argument lists
#[derive(Debug, Clone)]
pub struct FfmpegRenderer {
    name: String,
    id: String,
    extension: String,
    templates: Vec<Preset>,
    ffmpeg_path: PathBuf,
}

impl FfmpegRenderer {
    /// Create a renderer
    ///
    /// The extension is stored without a leading dot. Template indices are
    /// reassigned to match their position.
    pub fn new(
        name: impl Into<String>,
        extension: impl AsRef<str>,
        templates: Vec<Preset>,
        ffmpeg_path: impl Into<PathBuf>,
    ) -> Self {
        let extension = extension.as_ref().trim_start_matches('.').to_lowercase();
        let templates = templates
            .into_iter()
            .enumerate()
            .map(|(index, preset)| Preset { index, ..preset })
            .collect();

        Self {
            name: name.into(),
            id: format!("ffmpeg-{extension}"),
            extension,
            templates,
            ffmpeg_path: ffmpeg_path.into(),
        }
    }

    /// Arguments passed to ffmpeg for one job
    pub fn build_args(&self, job: &EncodeJob<'_>) -> Vec<OsString> {
        let mut args: Vec<OsString> = ["-hide_banner", "-nostdin", "-loglevel", "error", "-y", "-i"]
            .iter()
            .map(OsString::from)
            .collect();
        args.push(job.source.as_os_str().to_owned());

        // atrim counts samples, so the cut is sample-exact regardless of sample rate
        args.push("-af".into());
        args.push(
            format!(
                "atrim=start_sample={}:end_sample={},asetpts=PTS-STARTPTS",
                job.range.start,
                job.range.end()
            )
            .into(),
        );

        if let Some(metadata) = job.metadata {
            args.push("-metadata".into());
            args.push(format!("title={}", metadata.title).into());
            args.push("-metadata".into());
            args.push(format!("track={}", metadata.track_no()).into());
        }

        args.extend(job.preset.args.iter().map(OsString::from));
        args.push(job.output.as_os_str().to_owned());
        args
    }
}

impl Renderer for FfmpegRenderer {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn extension(&self) -> &str {
        &self.extension
    }

    fn templates(&self) -> &[Preset] {
        &self.templates
    }

    fn encode(&self, job: &EncodeJob<'_>) -> Result<()> {
        let args = self.build_args(job);
        tracing::debug!(
            ffmpeg = %self.ffmpeg_path.display(),
            args = ?args,
            "Running encoder"
        );

        let output = Command::new(&self.ffmpeg_path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| RegionSplitError::Render {
                path: job.output.to_path_buf(),
                reason: format!("failed to launch {}: {}", self.ffmpeg_path.display(), e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let reason = if stderr.is_empty() {
                format!("ffmpeg exited with {}", output.status)
            } else {
                stderr
            };
            return Err(RegionSplitError::Render {
                path: job.output.to_path_buf(),
                reason,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SampleRange, TrackMetadata};
    use std::path::Path;

    fn mp3() -> FfmpegRenderer {
        FfmpegRenderer::new(
            "MP3 Audio",
            ".MP3",
            vec![Preset::new(9, "320 Kbps, CD Quality", &["-c:a", "libmp3lame", "-b:a", "320k"])],
            "ffmpeg",
        )
    }

    fn strings(args: Vec<OsString>) -> Vec<String> {
        args.into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_new_normalizes_extension_and_indices() {
        let renderer = mp3();
        assert_eq!(renderer.extension(), "mp3");
        assert_eq!(renderer.id(), "ffmpeg-mp3");
        assert_eq!(renderer.templates()[0].index, 0);
    }

    #[test]
    fn test_build_args_without_metadata() {
        let renderer = mp3();
        let preset = renderer.templates()[0].clone();
        let job = EncodeJob {
            source: Path::new("/rips/album.wav"),
            range: SampleRange::new(100, 50),
            preset: &preset,
            metadata: None,
            output: Path::new("/out/a.mp3"),
        };

        let args = strings(renderer.build_args(&job));
        assert_eq!(
            args,
            vec![
                "-hide_banner",
                "-nostdin",
                "-loglevel",
                "error",
                "-y",
                "-i",
                "/rips/album.wav",
                "-af",
                "atrim=start_sample=100:end_sample=150,asetpts=PTS-STARTPTS",
                "-c:a",
                "libmp3lame",
                "-b:a",
                "320k",
                "/out/a.mp3",
            ]
        );
    }

    #[test]
    fn test_build_args_with_metadata() {
        let renderer = mp3();
        let preset = renderer.templates()[0].clone();
        let metadata = TrackMetadata::new("Song B", 2, 2);
        let job = EncodeJob {
            source: Path::new("in.wav"),
            range: SampleRange::new(0, 1),
            preset: &preset,
            metadata: Some(&metadata),
            output: Path::new("02-x-Song B.mp3"),
        };

        let args = strings(renderer.build_args(&job));
        let title = args.iter().position(|a| a == "title=Song B").unwrap();
        assert_eq!(args[title - 1], "-metadata");
        assert_eq!(args[title + 2], "track=2/2");
        assert_eq!(args.last().unwrap(), "02-x-Song B.mp3");
    }

    #[test]
    fn test_encode_with_missing_binary_is_render_error() {
        let renderer = FfmpegRenderer::new(
            "WAV",
            "wav",
            vec![Preset::new(0, "Default", &[])],
            "/nonexistent/bin/ffmpeg-missing",
        );
        let preset = renderer.templates()[0].clone();
        let job = EncodeJob {
            source: Path::new("in.wav"),
            range: SampleRange::new(0, 1),
            preset: &preset,
            metadata: None,
            output: Path::new("out.wav"),
        };

        let err = renderer.encode(&job).unwrap_err();
        assert!(matches!(err, RegionSplitError::Render { .. }));
        assert!(err.to_string().contains("failed to launch"));
    }
}
