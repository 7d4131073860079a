//! Shared numeric and string constants for the page controller.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class toggled on `<body>` while dark mode is active.
pub const DARK_CLASS: &str = "dark";

/// Media query for the platform's ambient color scheme.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Icons ───────────────────────────────────────────────────────

/// Attribute read by the icon library to pick a glyph.
pub const ICON_ATTR: &str = "data-lucide";

// ── Menu ────────────────────────────────────────────────────────

/// Viewport width (CSS px) at which the mobile menu no longer applies.
pub const MENU_BREAKPOINT_PX: f64 = 768.0;

/// Class marking the mobile menu panel as visible.
pub const MENU_ACTIVE_CLASS: &str = "active";

// ── Scroll ──────────────────────────────────────────────────────

/// Scroll offset past which the navbar switches to its solid variant.
pub const NAVBAR_SOLID_AFTER_PX: f64 = 100.0;

/// Parallax rate of the first hero background layer.
pub const PARALLAX_RATE_FRONT: f64 = -0.5;

/// Parallax rate of the second hero background layer.
pub const PARALLAX_RATE_BACK: f64 = -0.3;

/// Visible fraction that triggers an entrance reveal.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Intersection root margin; pulls the trigger line 50px above the bottom.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Vertical offset of hidden blocks before they are revealed.
pub const REVEAL_OFFSET_PX: f64 = 20.0;

/// CSS transition used for entrance reveals.
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

// ── Effects ─────────────────────────────────────────────────────

/// Divisor turning pointer offset (px) into tilt angle (deg).
pub const TILT_DIVISOR: f64 = 10.0;

/// Perspective distance for the card tilt transform.
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;

/// Scale applied to a tilted card.
pub const TILT_SCALE: f64 = 1.05;

/// Transform of a card at rest.
pub const TILT_NEUTRAL: &str = "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)";

/// Transform of a hovered tag.
pub const TAG_HOVER: &str = "scale(1.1) rotate(2deg)";

/// Transform of a tag at rest.
pub const TAG_REST: &str = "scale(1) rotate(0deg)";

/// Caption revealed by the typing animation.
pub const TYPING_TEXT: &str = "Aspiring AI/ML Engineer";

/// Delay before the first typed character.
pub const TYPING_START_DELAY_MS: u32 = 1000;

/// Delay between typed characters.
pub const TYPING_INTERVAL_MS: u32 = 100;

/// Delay between hiding the page on load and fading it in.
pub const FADE_IN_DELAY_MS: u32 = 100;

/// CSS transition used for the page fade-in.
pub const FADE_IN_TRANSITION: &str = "opacity 0.5s ease";

// ── Contact ─────────────────────────────────────────────────────

/// Simulated latency of a contact submission.
pub const SUBMIT_DELAY_MS: u32 = 2000;

/// Notice shown after a successful submission.
pub const SUBMIT_SUCCESS_NOTICE: &str = "Thank you for your message! I'll get back to you soon.";

/// Notice shown after a failed submission.
pub const SUBMIT_FAILURE_NOTICE: &str = "Sorry, there was an error sending your message. Please try again.";
