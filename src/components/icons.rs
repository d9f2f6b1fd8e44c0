//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBookOpen as FilePdf, LuCheck as Check, LuChevronLeft as ChevronLeft,
        LuChevronRight as ChevronRight, LuClipboard as Clipboard, LuDownload as Download,
        LuFile as File, LuFile as FileSlides, LuFileText as FileWord, LuImage as FileImage,
        LuShare2 as Share, LuTable as FileExcel, LuTrash2 as Trash, LuUpload as Upload,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCheckLg as Check, BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight,
        BsClipboard as Clipboard, BsDownload as Download, BsFileEarmark as File,
        BsFileEarmarkExcel as FileExcel, BsFileEarmarkImage as FileImage,
        BsFileEarmarkPdf as FilePdf, BsFileEarmarkSlides as FileSlides,
        BsFileEarmarkWord as FileWord, BsShare as Share, BsTrash as Trash, BsUpload as Upload,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(FILE, File);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_WORD, FileWord);
themed_icon!(FILE_EXCEL, FileExcel);
themed_icon!(FILE_SLIDES, FileSlides);
themed_icon!(DOWNLOAD, Download);
themed_icon!(SHARE, Share);
themed_icon!(TRASH, Trash);
themed_icon!(UPLOAD, Upload);
themed_icon!(CHECK, Check);
themed_icon!(CLIPBOARD, Clipboard);
themed_icon!(CLOSE, Close);
