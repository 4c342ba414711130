//! Prelude for common imports.
//!
//! ```
//! use auto_annotate::prelude::*;
//!
//! let links: TermMap = [("AI", "x.com")].into_iter().collect();
//! let page = Pipeline::new("AI").pipe(LinkPass::new(&links)).into_inner();
//! assert_eq!(page, "<a href=\"x.com\">AI</a>");
//! ```

pub use crate::options::AnnotateOptions;
pub use crate::terms::{SiteTerms, TermMap};
pub use crate::transform::{LinkPass, NotePass, Pipeline, Transform};
pub use crate::wrap::{LinkKind, NoteKind, WrapKind, WrapTag};
pub use crate::{annotate_links, annotate_notes, annotate_page};
