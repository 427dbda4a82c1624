// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the portfolio page.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Motion**: Animation durations

## Examples

```
use starfolio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let dimmed_night = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::NIGHT_900
};
let gutter = spacing::MD;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Night sky (dark surfaces)
    pub const NIGHT_900: Color = Color::from_rgb(0.04, 0.05, 0.10);
    pub const NIGHT_700: Color = Color::from_rgb(0.13, 0.15, 0.24);
    pub const DUSK_400: Color = Color::from_rgb(0.42, 0.44, 0.55);

    // Mist (light surfaces)
    pub const MIST_200: Color = Color::from_rgb(0.80, 0.82, 0.88);
    pub const MIST_100: Color = Color::from_rgb(0.92, 0.93, 0.96);

    // Starlight accent
    pub const GOLD_400: Color = Color::from_rgb(0.98, 0.80, 0.40);
    pub const GOLD_500: Color = Color::from_rgb(0.90, 0.68, 0.25);

    // Notification accents
    pub const AMBER_500: Color = Color::from_rgb(0.96, 0.56, 0.12);
    pub const ROSE_500: Color = Color::from_rgb(0.88, 0.24, 0.32);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Edge length of a gallery thumbnail.
    pub const THUMBNAIL: f32 = 180.0;
    /// Thumbnails per gallery row.
    pub const GALLERY_COLUMNS: usize = 3;
    /// Width of the lightbox caption block.
    pub const CAPTION_WIDTH: f32 = 560.0;
    /// Square hit area of the lightbox arrows and close control.
    pub const CONTROL: f32 = 48.0;
    /// Height a collapsible section grows to when fully open.
    pub const SECTION_MAX_HEIGHT: f32 = 320.0;
    pub const TOAST_WIDTH: f32 = 340.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_LG: f32 = 16.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const TITLE_MD: f32 = 22.0;
    pub const TITLE_LG: f32 = 32.0;
}

// ============================================================================
// Border Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    use std::time::Duration;

    /// Open/close duration of collapsible sections.
    pub const SECTION_TOGGLE: Duration = Duration::from_millis(300);

    /// How long a warning toast stays up before dismissing itself.
    pub const WARNING_TOAST: Duration = Duration::from_secs(5);
}

// ============================================================================
// Validation
// ============================================================================

const _: () = {
    assert!(spacing::MD == spacing::XS * 2.0);
    assert!(sizing::GALLERY_COLUMNS > 0);
};
