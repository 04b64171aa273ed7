mod notice;
mod qr_view;
mod scan_indicator;
mod share_sheet;

pub use notice::{Notice, NoticeLevel, Notices, notices_panel};
pub use qr_view::{QrTexture, qr_view, to_color_image};
pub use scan_indicator::scan_indicator;
pub use share_sheet::share_sheet;
