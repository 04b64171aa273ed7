//! One page per route:
//! - `input_page`: app links, text, YouTube and link generators
//! - `scanner_page`: camera/gallery scanning
//! - `edit_page`: logo and colour editing of the current QR code

mod edit_page;
mod input_page;
mod scanner_page;

pub use edit_page::edit_page;
pub use input_page::input_page;
pub use scanner_page::scanner_page;
