//! Region export pipeline
//!
//! This module provides the core export logic for regionsplit:
//! - Run configuration, directory and encoder resolution
//! - Region enumeration and file naming
//! - Export coordination and reporting

pub mod coordinator;
pub mod enumerator;
pub mod job;
pub mod naming;
pub mod resolver;
pub mod summary;

pub use coordinator::{ExportCoordinator, NOTIFY_TITLE, STATUS_DONE, STATUS_RUNNING};
pub use enumerator::ExportableRegions;
pub use job::{ExportJob, ExportPlan};
pub use naming::{policy_for, NamingPolicy, PositionalNaming, TitleAndRegionNaming};
pub use resolver::{EncoderBinding, OutputDirectory, RunConfiguration};
pub use summary::{outcome, ExportSummary, ExportedFile};
