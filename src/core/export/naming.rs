//! File naming policies
//!
//! A policy composes the raw file name of one track. The result still has to pass
//! through a [`FilenameSanitizer`](crate::adapters::host::FilenameSanitizer).

use crate::domain::{ExportMode, Region};

/// Composes the raw file name of one exported region
pub trait NamingPolicy: Send + Sync {
    /// Raw name for the region at 1-based `track`, with `extension` given without dot
    fn compose(&self, title: &str, region: &Region, track: usize, extension: &str) -> String;
}

/// Archive naming: `{title}d1t{NN}.{ext}`
///
/// The title is used as is, extension included.
///
/// ```
/// use regionsplit::core::export::naming::{NamingPolicy, PositionalNaming};
/// use regionsplit::domain::Region;
///
/// let name = PositionalNaming.compose("MyAlbum", &Region::new("A", 0, 10), 1, "flac");
/// assert_eq!(name, "MyAlbumd1t01.flac");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalNaming;

impl NamingPolicy for PositionalNaming {
    fn compose(&self, title: &str, _region: &Region, track: usize, extension: &str) -> String {
        format!("{title}d1t{track:02}.{extension}")
    }
}

/// Track naming: `{NN}-{title}-{region}.{ext}`
///
/// The title loses its extension first.
///
/// ```
/// use regionsplit::core::export::naming::{NamingPolicy, TitleAndRegionNaming};
/// use regionsplit::domain::Region;
///
/// let name = TitleAndRegionNaming.compose("MyAlbum.wav", &Region::new("A", 0, 10), 1, "mp3");
/// assert_eq!(name, "01-MyAlbum-A.mp3");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleAndRegionNaming;

impl NamingPolicy for TitleAndRegionNaming {
    fn compose(&self, title: &str, region: &Region, track: usize, extension: &str) -> String {
        format!(
            "{track:02}-{}-{}.{extension}",
            strip_extension(title),
            region.name
        )
    }
}

/// Title up to its last `.`, or the whole title when it has none
pub fn strip_extension(title: &str) -> &str {
    match title.rfind('.') {
        Some(dot) => &title[..dot],
        None => title,
    }
}

/// Naming policy of a mode
pub fn policy_for(mode: ExportMode) -> Box<dyn NamingPolicy> {
    match mode {
        ExportMode::Positional => Box::new(PositionalNaming),
        ExportMode::Titled => Box::new(TitleAndRegionNaming),
    }
}
