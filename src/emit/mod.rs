//! Output renderers for a loaded [`Catalog`](crate::catalog::Catalog).
//!
//! All renderers are pure functions returning `String`s; writing files is
//! the pipeline's job.

pub mod native;
pub mod xml;

pub use native::{
    HEADER_FILE_NAME, SOURCE_FILE_NAME, check_locale_idents, escape_c, render_header,
    render_source,
};
pub use xml::{escape_xml_attr, render_xml};

/// File name of the generated XML catalog.
pub const XML_FILE_NAME: &str = "translations.xml";
