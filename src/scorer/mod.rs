pub mod html;
pub mod seo_scorer;

pub use html::{count_headings, strip_html, HeadingCounts};
pub use seo_scorer::{score_content, score_html};
