/// Width assumed until the browser reports the real viewport.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1024;

const MOBILE_MAX: u32 = 768;
const TABLET_MAX: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub fn from_width(width: u32) -> Self {
        if width <= MOBILE_MAX {
            Breakpoint::Mobile
        } else if width <= TABLET_MAX {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    /// Most columns the tier will ever show.
    pub fn column_cap(&self) -> usize {
        match self {
            Breakpoint::Mobile => 1,
            Breakpoint::Tablet => 2,
            Breakpoint::Desktop => 4,
        }
    }
}

/// Effective grid column count for a viewport `width` and configured
/// `max_columns`. Always at least 1.
pub fn responsive_columns(width: u32, max_columns: usize) -> usize {
    match Breakpoint::from_width(width) {
        // mobile ignores the configured maximum
        Breakpoint::Mobile => 1,
        bp => max_columns.clamp(1, bp.column_cap()),
    }
}

pub fn responsive_text_class(width: u32) -> &'static str {
    match Breakpoint::from_width(width) {
        Breakpoint::Mobile => "text-sm p-2",
        _ => "text-base p-4",
    }
}

pub fn menu_item_class(active: bool, width: u32) -> String {
    let state = if active {
        "text-white bg-gradient-to-br from-cyan to-blue"
    } else {
        "text-foreground bg-transparent hover:bg-brightBlack/30"
    };
    format!(
        "{state} {} rounded-lg m-1 transition-all duration-300",
        responsive_text_class(width)
    )
}

/// Tailwind grid class for a column count produced by [`responsive_columns`].
pub fn grid_class(columns: usize) -> &'static str {
    match columns {
        0 | 1 => "grid grid-cols-1 gap-6",
        2 => "grid grid-cols-2 gap-6",
        3 => "grid grid-cols-3 gap-6",
        _ => "grid grid-cols-4 gap-6",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_responsive_columns() {
        assert_eq!(responsive_columns(500, 4), 1);
        assert_eq!(responsive_columns(900, 4), 2);
        assert_eq!(responsive_columns(900, 1), 1);
        assert_eq!(responsive_columns(1200, 4), 4);
        assert_eq!(responsive_columns(1200, 2), 2);
    }

    #[test]
    fn test_breakpoint_boundaries() {
        assert_eq!(responsive_columns(768, 4), 1);
        assert_eq!(responsive_columns(769, 4), 2);
        assert_eq!(responsive_columns(1024, 4), 2);
        assert_eq!(responsive_columns(1025, 4), 4);
        assert_eq!(responsive_columns(1025, 9), 4);
        assert_eq!(Breakpoint::from_width(0), Breakpoint::Mobile);
    }

    #[test]
    fn test_zero_max_still_positive() {
        assert_eq!(responsive_columns(1200, 0), 1);
        assert_eq!(responsive_columns(900, 0), 1);
    }

    #[test]
    fn test_menu_item_class() {
        let active = menu_item_class(true, 1200);
        assert!(active.contains("text-white"));
        assert!(active.contains("text-base"));
        let idle = menu_item_class(false, 400);
        assert!(idle.contains("bg-transparent"));
        assert!(idle.contains("text-sm"));
    }

    #[test]
    fn test_grid_class() {
        assert_eq!(grid_class(1), "grid grid-cols-1 gap-6");
        assert_eq!(grid_class(7), "grid grid-cols-4 gap-6");
    }
}
