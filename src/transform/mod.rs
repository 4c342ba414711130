//! Page transforms and the pipeline that chains them.
//!
//! # Module Structure
//!
//! - `Transform` - Core trait for page transformations
//! - `Pass` - One term map applied as links (`LinkPass`) or notes (`NotePass`)
//! - `Pipeline` - Synchronous page processing pipeline
//!
//! # Example
//!
//! ```ignore
//! use auto_annotate::transform::{LinkPass, NotePass, Pipeline};
//!
//! let page = Pipeline::new(body)
//!     .pipe(LinkPass::new(&links))
//!     .pipe(NotePass::new(&notes))
//!     .into_inner();
//! ```

mod core;
mod pass;
mod pipeline;

pub use self::core::{IdentityTransform, Transform};
pub use self::pass::{LinkPass, NotePass, Pass};
pub use self::pipeline::Pipeline;
