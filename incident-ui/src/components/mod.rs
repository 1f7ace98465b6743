mod header;
mod widgets;

pub use header::Header;
pub use widgets::{Badge, PageTitle, StatCardView};
