//! Starter variants per component type.
//!
//! `VARIANT_TABLE` is plain data: what a user sees right after creating a
//! component of a given type. Types without an entry get `FALLBACK`.

use tracing::warn;

use super::model::{ComponentState, ComponentType, ComponentVariant};
use crate::style::{Spacing, StyleOverrides, StyleProperty as P, StyleRecord, StyleValue, TextAlign};

/// A constant style value, so templates can live in `const` data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lit {
    Text(&'static str),
    Number(f64),
    Flag(bool),
    /// Horizontal, vertical.
    Spacing(&'static str, &'static str),
    Align(TextAlign),
}

impl Lit {
    pub fn to_value(self) -> StyleValue {
        match self {
            Self::Text(s) => StyleValue::text(s),
            Self::Number(n) => StyleValue::Number(n),
            Self::Flag(b) => StyleValue::Flag(b),
            Self::Spacing(x, y) => StyleValue::Spacing(Spacing::new(x, y)),
            Self::Align(a) => StyleValue::Align(a),
        }
    }
}

pub type StylePatch = &'static [(P, Lit)];

#[derive(Debug)]
pub struct StateTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub overrides: StylePatch,
}

#[derive(Debug)]
pub struct VariantTemplate {
    pub name: &'static str,
    pub description: &'static str,
    /// Applied on top of `StyleRecord::default()`.
    pub base: StylePatch,
    /// First entry is always the "default" state with no overrides.
    pub states: &'static [StateTemplate],
}

// -- shared states ----------------------------------------------------------

const DEFAULT: StateTemplate = StateTemplate {
    name: "default",
    description: "Resting appearance",
    overrides: &[],
};

const DISABLED: StateTemplate = StateTemplate {
    name: "disabled",
    description: "Not interactive",
    overrides: &[(P::Opacity, Lit::Number(0.5)), (P::Cursor, Lit::Text("not-allowed"))],
};

const FOCUS_RING: StateTemplate = StateTemplate {
    name: "focus",
    description: "Keyboard focus",
    overrides: &[(P::BoxShadow, Lit::Text("0 0 0 3px rgba(59,130,246,0.35)"))],
};

const HOVER_DIM: StateTemplate = StateTemplate {
    name: "hover",
    description: "Pointer over the element",
    overrides: &[(P::Opacity, Lit::Number(0.9))],
};

// -- button -----------------------------------------------------------------

const BUTTON: &[VariantTemplate] = &[
    VariantTemplate {
        name: "Primary",
        description: "Main call to action",
        base: &[
            (P::BackgroundColor, Lit::Text("#3b82f6")),
            (P::TextColor, Lit::Text("#ffffff")),
        ],
        states: &[
            DEFAULT,
            StateTemplate {
                name: "hover",
                description: "Pointer over the button",
                overrides: &[
                    (P::BackgroundColor, Lit::Text("#2563eb")),
                    (P::Transform, Lit::Text("translateY(-1px)")),
                ],
            },
            StateTemplate {
                name: "active",
                description: "Being pressed",
                overrides: &[
                    (P::BackgroundColor, Lit::Text("#1d4ed8")),
                    (P::Transform, Lit::Text("scale(0.98)")),
                ],
            },
            DISABLED,
            StateTemplate {
                name: "loading",
                description: "Action in progress",
                overrides: &[(P::Opacity, Lit::Number(0.8)), (P::Cursor, Lit::Text("wait"))],
            },
        ],
    },
    VariantTemplate {
        name: "Secondary",
        description: "Less prominent action",
        base: &[
            (P::BackgroundColor, Lit::Text("#e5e7eb")),
            (P::TextColor, Lit::Text("#111827")),
        ],
        states: &[
            DEFAULT,
            StateTemplate {
                name: "hover",
                description: "Pointer over the button",
                overrides: &[(P::BackgroundColor, Lit::Text("#d1d5db"))],
            },
            StateTemplate {
                name: "active",
                description: "Being pressed",
                overrides: &[(P::BackgroundColor, Lit::Text("#9ca3af"))],
            },
            DISABLED,
        ],
    },
    VariantTemplate {
        name: "Outline",
        description: "Bordered, transparent fill",
        base: &[
            (P::BackgroundColor, Lit::Text("transparent")),
            (P::TextColor, Lit::Text("#3b82f6")),
            (P::BorderColor, Lit::Text("#3b82f6")),
            (P::BorderWidth, Lit::Text("1px")),
        ],
        states: &[
            DEFAULT,
            StateTemplate {
                name: "hover",
                description: "Pointer over the button",
                overrides: &[(P::BackgroundColor, Lit::Text("#eff6ff"))],
            },
            StateTemplate {
                name: "active",
                description: "Being pressed",
                overrides: &[(P::BackgroundColor, Lit::Text("#dbeafe"))],
            },
            DISABLED,
        ],
    },
    VariantTemplate {
        name: "Ghost",
        description: "No fill until hovered",
        base: &[
            (P::BackgroundColor, Lit::Text("transparent")),
            (P::TextColor, Lit::Text("#374151")),
        ],
        states: &[
            DEFAULT,
            StateTemplate {
                name: "hover",
                description: "Pointer over the button",
                overrides: &[(P::BackgroundColor, Lit::Text("#f3f4f6"))],
            },
            StateTemplate {
                name: "active",
                description: "Being pressed",
                overrides: &[(P::BackgroundColor, Lit::Text("#e5e7eb"))],
            },
            DISABLED,
        ],
    },
    VariantTemplate {
        name: "Destructive",
        description: "Irreversible or dangerous action",
        base: &[
            (P::BackgroundColor, Lit::Text("#ef4444")),
            (P::TextColor, Lit::Text("#ffffff")),
        ],
        states: &[
            DEFAULT,
            StateTemplate {
                name: "hover",
                description: "Pointer over the button",
                overrides: &[(P::BackgroundColor, Lit::Text("#dc2626"))],
            },
            StateTemplate {
                name: "active",
                description: "Being pressed",
                overrides: &[(P::BackgroundColor, Lit::Text("#b91c1c"))],
            },
            DISABLED,
        ],
    },
];

// -- card -------------------------------------------------------------------

const CARD_BASE: StylePatch = &[
    (P::BackgroundColor, Lit::Text("#ffffff")),
    (P::TextColor, Lit::Text("#111827")),
    (P::BorderRadius, Lit::Text("12px")),
    (P::Padding, Lit::Spacing("24px", "24px")),
    (P::Width, Lit::Text("320px")),
    (P::FontWeight, Lit::Number(400.0)),
    (P::TextAlign, Lit::Align(TextAlign::Left)),
    (P::Cursor, Lit::Text("default")),
];

const CARD: &[VariantTemplate] = &[
    VariantTemplate {
        name: "Default",
        description: "Flat surface",
        base: CARD_BASE,
        states: &[
            DEFAULT,
            StateTemplate {
                name: "hover",
                description: "Pointer over the card",
                overrides: &[(P::BoxShadow, Lit::Text("0 4px 12px rgba(0,0,0,0.08)"))],
            },
        ],
    },
    VariantTemplate {
        name: "Elevated",
        description: "Raised with a shadow",
        base: &[
            (P::BackgroundColor, Lit::Text("#ffffff")),
            (P::TextColor, Lit::Text("#111827")),
            (P::BorderRadius, Lit::Text("12px")),
            (P::Padding, Lit::Spacing("24px", "24px")),
            (P::Width, Lit::Text("320px")),
            (P::FontWeight, Lit::Number(400.0)),
            (P::TextAlign, Lit::Align(TextAlign::Left)),
            (P::Cursor, Lit::Text("default")),
            (P::BoxShadow, Lit::Text("0 10px 25px rgba(0,0,0,0.12)")),
        ],
        states: &[
            DEFAULT,
            StateTemplate {
                name: "hover",
                description: "Pointer over the card",
                overrides: &[
                    (P::BoxShadow, Lit::Text("0 20px 40px rgba(0,0,0,0.16)")),
                    (P::Transform, Lit::Text("translateY(-2px)")),
                ],
            },
        ],
    },
    VariantTemplate {
        name: "Outlined",
        description: "Bordered surface",
        base: &[
            (P::BackgroundColor, Lit::Text("#ffffff")),
            (P::TextColor, Lit::Text("#111827")),
            (P::BorderRadius, Lit::Text("12px")),
            (P::Padding, Lit::Spacing("24px", "24px")),
            (P::Width, Lit::Text("320px")),
            (P::FontWeight, Lit::Number(400.0)),
            (P::TextAlign, Lit::Align(TextAlign::Left)),
            (P::Cursor, Lit::Text("default")),
            (P::BorderColor, Lit::Text("#e5e7eb")),
            (P::BorderWidth, Lit::Text("1px")),
        ],
        states: &[
            DEFAULT,
            StateTemplate {
                name: "hover",
                description: "Pointer over the card",
                overrides: &[(P::BorderColor, Lit::Text("#3b82f6"))],
            },
        ],
    },
    VariantTemplate {
        name: "Interactive",
        description: "Clickable surface",
        base: &[
            (P::BackgroundColor, Lit::Text("#ffffff")),
            (P::TextColor, Lit::Text("#111827")),
            (P::BorderRadius, Lit::Text("12px")),
            (P::Padding, Lit::Spacing("24px", "24px")),
            (P::Width, Lit::Text("320px")),
            (P::FontWeight, Lit::Number(400.0)),
            (P::TextAlign, Lit::Align(TextAlign::Left)),
            (P::BorderColor, Lit::Text("#e5e7eb")),
            (P::BorderWidth, Lit::Text("1px")),
        ],
        states: &[
            DEFAULT,
            StateTemplate {
                name: "hover",
                description: "Pointer over the card",
                overrides: &[
                    (P::Transform, Lit::Text("translateY(-2px)")),
                    (P::BoxShadow, Lit::Text("0 10px 25px rgba(0,0,0,0.12)")),
                ],
            },
            StateTemplate {
                name: "active",
                description: "Being pressed",
                overrides: &[(P::Transform, Lit::Text("scale(0.99)"))],
            },
            StateTemplate {
                name: "focus",
                description: "Keyboard focus",
                overrides: &[
                    (P::BorderColor, Lit::Text("#3b82f6")),
                    (P::BoxShadow, Lit::Text("0 0 0 3px rgba(59,130,246,0.3)")),
                ],
            },
        ],
    },
];

// -- form fields ------------------------------------------------------------

const INPUT_FOCUS: StateTemplate = StateTemplate {
    name: "focus",
    description: "Keyboard focus",
    overrides: &[
        (P::BorderColor, Lit::Text("#3b82f6")),
        (P::BoxShadow, Lit::Text("0 0 0 3px rgba(59,130,246,0.2)")),
    ],
};

const INPUT_ERROR: StateTemplate = StateTemplate {
    name: "error",
    description: "Failed validation",
    overrides: &[(P::BorderColor, Lit::Text("#ef4444"))],
};

const INPUT_SUCCESS: StateTemplate = StateTemplate {
    name: "success",
    description: "Passed validation",
    overrides: &[(P::BorderColor, Lit::Text("#10b981"))],
};

const INPUT_DISABLED: StateTemplate = StateTemplate {
    name: "disabled",
    description: "Not editable",
    overrides: &[
        (P::BackgroundColor, Lit::Text("#f3f4f6")),
        (P::Opacity, Lit::Number(0.6)),
        (P::Cursor, Lit::Text("not-allowed")),
    ],
};

const INPUT: &[VariantTemplate] = &[
    VariantTemplate {
        name: "Default",
        description: "Bordered field",
        base: &[
            (P::BackgroundColor, Lit::Text("#ffffff")),
            (P::TextColor, Lit::Text("#111827")),
            (P::BorderColor, Lit::Text("#d1d5db")),
            (P::BorderWidth, Lit::Text("1px")),
            (P::BorderRadius, Lit::Text("6px")),
            (P::Padding, Lit::Spacing("12px", "8px")),
            (P::Width, Lit::Text("100%")),
            (P::FontWeight, Lit::Number(400.0)),
            (P::TextAlign, Lit::Align(TextAlign::Left)),
            (P::Cursor, Lit::Text("text")),
        ],
        states: &[DEFAULT, INPUT_FOCUS, INPUT_ERROR, INPUT_SUCCESS, INPUT_DISABLED],
    },
    VariantTemplate {
        name: "Filled",
        description: "Tinted field without border",
        base: &[
            (P::BackgroundColor, Lit::Text("#f3f4f6")),
            (P::TextColor, Lit::Text("#111827")),
            (P::BorderColor, Lit::Text("transparent")),
            (P::BorderWidth, Lit::Text("1px")),
            (P::BorderRadius, Lit::Text("6px")),
            (P::Padding, Lit::Spacing("12px", "8px")),
            (P::Width, Lit::Text("100%")),
            (P::FontWeight, Lit::Number(400.0)),
            (P::TextAlign, Lit::Align(TextAlign::Left)),
            (P::Cursor, Lit::Text("text")),
        ],
        states: &[
            DEFAULT,
            StateTemplate {
                name: "focus",
                description: "Keyboard focus",
                overrides: &[
                    (P::BackgroundColor, Lit::Text("#ffffff")),
                    (P::BorderColor, Lit::Text("#3b82f6")),
                ],
            },
            INPUT_ERROR,
            INPUT_SUCCESS,
            StateTemplate {
                name: "disabled",
                description: "Not editable",
                overrides: &[(P::Opacity, Lit::Number(0.6)), (P::Cursor, Lit::Text("not-allowed"))],
            },
        ],
    },
    VariantTemplate {
        name: "Underlined",
        description: "Bottom border only",
        base: &[
            (P::BackgroundColor, Lit::Text("transparent")),
            (P::TextColor, Lit::Text("#111827")),
            (P::BorderColor, Lit::Text("#d1d5db")),
            (P::BorderWidth, Lit::Text("0px 0px 1px 0px")),
            (P::BorderRadius, Lit::Text("0px")),
            (P::Padding, Lit::Spacing("0px", "8px")),
            (P::Width, Lit::Text("100%")),
            (P::FontWeight, Lit::Number(400.0)),
            (P::TextAlign, Lit::Align(TextAlign::Left)),
            (P::Cursor, Lit::Text("text")),
        ],
        states: &[
            DEFAULT,
            StateTemplate {
                name: "focus",
                description: "Keyboard focus",
                overrides: &[(P::BorderColor, Lit::Text("#3b82f6"))],
            },
            INPUT_ERROR,
            StateTemplate {
                name: "disabled",
                description: "Not editable",
                overrides: &[(P::Opacity, Lit::Number(0.6)), (P::Cursor, Lit::Text("not-allowed"))],
            },
        ],
    },
];

const SELECT: &[VariantTemplate] = &[VariantTemplate {
    name: "Default",
    description: "Closed picker",
    base: &[
        (P::BackgroundColor, Lit::Text("#ffffff")),
        (P::TextColor, Lit::Text("#111827")),
        (P::BorderColor, Lit::Text("#d1d5db")),
        (P::BorderWidth, Lit::Text("1px")),
        (P::BorderRadius, Lit::Text("6px")),
        (P::Padding, Lit::Spacing("12px", "8px")),
        (P::Width, Lit::Text("240px")),
        (P::FontWeight, Lit::Number(400.0)),
        (P::TextAlign, Lit::Align(TextAlign::Left)),
    ],
    states: &[
        DEFAULT,
        StateTemplate {
            name: "open",
            description: "Options visible",
            overrides: &[(P::BorderColor, Lit::Text("#3b82f6"))],
        },
        INPUT_FOCUS,
        INPUT_ERROR,
        INPUT_DISABLED,
    ],
}];

const CHECKBOX: &[VariantTemplate] = &[VariantTemplate {
    name: "Default",
    description: "Square check box",
    base: &[
        (P::BackgroundColor, Lit::Text("#ffffff")),
        (P::BorderColor, Lit::Text("#d1d5db")),
        (P::BorderWidth, Lit::Text("1px")),
        (P::BorderRadius, Lit::Text("4px")),
        (P::Padding, Lit::Spacing("0px", "0px")),
        (P::Width, Lit::Text("16px")),
        (P::Height, Lit::Text("16px")),
    ],
    states: &[
        DEFAULT,
        StateTemplate {
            name: "checked",
            description: "Selected",
            overrides: &[
                (P::BackgroundColor, Lit::Text("#3b82f6")),
                (P::BorderColor, Lit::Text("#3b82f6")),
            ],
        },
        StateTemplate {
            name: "indeterminate",
            description: "Partially selected",
            overrides: &[
                (P::BackgroundColor, Lit::Text("#93c5fd")),
                (P::BorderColor, Lit::Text("#93c5fd")),
            ],
        },
        FOCUS_RING,
        INPUT_ERROR,
        DISABLED,
    ],
}];

const SWITCH_STATES: &[StateTemplate] = &[
    DEFAULT,
    StateTemplate {
        name: "checked",
        description: "On",
        overrides: &[(P::BackgroundColor, Lit::Text("#3b82f6"))],
    },
    FOCUS_RING,
    DISABLED,
];

const SWITCH: &[VariantTemplate] = &[
    VariantTemplate {
        name: "Default",
        description: "Standard track",
        base: &[
            (P::BackgroundColor, Lit::Text("#d1d5db")),
            (P::BorderRadius, Lit::Text("9999px")),
            (P::Padding, Lit::Spacing("2px", "2px")),
            (P::Width, Lit::Text("44px")),
            (P::Height, Lit::Text("24px")),
        ],
        states: SWITCH_STATES,
    },
    VariantTemplate {
        name: "Small",
        description: "Compact track",
        base: &[
            (P::BackgroundColor, Lit::Text("#d1d5db")),
            (P::BorderRadius, Lit::Text("9999px")),
            (P::Padding, Lit::Spacing("2px", "2px")),
            (P::Width, Lit::Text("36px")),
            (P::Height, Lit::Text("20px")),
        ],
        states: SWITCH_STATES,
    },
];

// -- display ----------------------------------------------------------------

const BADGE_STATES: &[StateTemplate] = &[DEFAULT, HOVER_DIM];

const BADGE: &[VariantTemplate] = &[
    VariantTemplate {
        name: "Default",
        description: "Brand tint",
        base: &[
            (P::BorderRadius, Lit::Text("9999px")),
            (P::Padding, Lit::Spacing("8px", "2px")),
            (P::FontSize, Lit::Text("12px")),
            (P::Cursor, Lit::Text("default")),
        ],
        states: BADGE_STATES,
    },
    VariantTemplate {
        name: "Secondary",
        description: "Neutral tint",
        base: &[
            (P::BackgroundColor, Lit::Text("#e5e7eb")),
            (P::TextColor, Lit::Text("#111827")),
            (P::BorderRadius, Lit::Text("9999px")),
            (P::Padding, Lit::Spacing("8px", "2px")),
            (P::FontSize, Lit::Text("12px")),
            (P::Cursor, Lit::Text("default")),
        ],
        states: BADGE_STATES,
    },
    VariantTemplate {
        name: "Success",
        description: "Positive status",
        base: &[
            (P::BackgroundColor, Lit::Text("#10b981")),
            (P::BorderRadius, Lit::Text("9999px")),
            (P::Padding, Lit::Spacing("8px", "2px")),
            (P::FontSize, Lit::Text("12px")),
            (P::Cursor, Lit::Text("default")),
        ],
        states: BADGE_STATES,
    },
    VariantTemplate {
        name: "Warning",
        description: "Needs attention",
        base: &[
            (P::BackgroundColor, Lit::Text("#f59e0b")),
            (P::BorderRadius, Lit::Text("9999px")),
            (P::Padding, Lit::Spacing("8px", "2px")),
            (P::FontSize, Lit::Text("12px")),
            (P::Cursor, Lit::Text("default")),
        ],
        states: BADGE_STATES,
    },
    VariantTemplate {
        name: "Error",
        description: "Negative status",
        base: &[
            (P::BackgroundColor, Lit::Text("#ef4444")),
            (P::BorderRadius, Lit::Text("9999px")),
            (P::Padding, Lit::Spacing("8px", "2px")),
            (P::FontSize, Lit::Text("12px")),
            (P::Cursor, Lit::Text("default")),
        ],
        states: BADGE_STATES,
    },
];

const AVATAR_STATES: &[StateTemplate] = &[
    DEFAULT,
    StateTemplate {
        name: "hover",
        description: "Pointer over the avatar",
        overrides: &[(P::BoxShadow, Lit::Text("0 0 0 2px #3b82f6"))],
    },
];

const AVATAR: &[VariantTemplate] = &[
    VariantTemplate {
        name: "Circle",
        description: "Round frame",
        base: &[
            (P::BackgroundColor, Lit::Text("#e5e7eb")),
            (P::TextColor, Lit::Text("#374151")),
            (P::BorderRadius, Lit::Text("9999px")),
            (P::Padding, Lit::Spacing("0px", "0px")),
            (P::Width, Lit::Text("40px")),
            (P::Height, Lit::Text("40px")),
        ],
        states: AVATAR_STATES,
    },
    VariantTemplate {
        name: "Rounded",
        description: "Soft square frame",
        base: &[
            (P::BackgroundColor, Lit::Text("#e5e7eb")),
            (P::TextColor, Lit::Text("#374151")),
            (P::BorderRadius, Lit::Text("8px")),
            (P::Padding, Lit::Spacing("0px", "0px")),
            (P::Width, Lit::Text("40px")),
            (P::Height, Lit::Text("40px")),
        ],
        states: AVATAR_STATES,
    },
    VariantTemplate {
        name: "Square",
        description: "Hard square frame",
        base: &[
            (P::BackgroundColor, Lit::Text("#e5e7eb")),
            (P::TextColor, Lit::Text("#374151")),
            (P::BorderRadius, Lit::Text("0px")),
            (P::Padding, Lit::Spacing("0px", "0px")),
            (P::Width, Lit::Text("40px")),
            (P::Height, Lit::Text("40px")),
        ],
        states: AVATAR_STATES,
    },
];

const TOOLTIP_STATES: &[StateTemplate] = &[
    DEFAULT,
    StateTemplate {
        name: "hidden",
        description: "Not shown",
        overrides: &[(P::Opacity, Lit::Number(0.0))],
    },
];

const TOOLTIP: &[VariantTemplate] = &[
    VariantTemplate {
        name: "Dark",
        description: "Dark bubble",
        base: &[
            (P::BackgroundColor, Lit::Text("#111827")),
            (P::BorderRadius, Lit::Text("4px")),
            (P::Padding, Lit::Spacing("8px", "4px")),
            (P::FontSize, Lit::Text("12px")),
            (P::Cursor, Lit::Text("default")),
        ],
        states: TOOLTIP_STATES,
    },
    VariantTemplate {
        name: "Light",
        description: "Light bubble with shadow",
        base: &[
            (P::BackgroundColor, Lit::Text("#ffffff")),
            (P::TextColor, Lit::Text("#111827")),
            (P::BorderRadius, Lit::Text("4px")),
            (P::Padding, Lit::Spacing("8px", "4px")),
            (P::FontSize, Lit::Text("12px")),
            (P::BoxShadow, Lit::Text("0 4px 12px rgba(0,0,0,0.12)")),
            (P::Cursor, Lit::Text("default")),
        ],
        states: TOOLTIP_STATES,
    },
];

// -- feedback ---------------------------------------------------------------

const ALERT_STATES: &[StateTemplate] = &[
    DEFAULT,
    StateTemplate {
        name: "dismissing",
        description: "Fading out",
        overrides: &[
            (P::Opacity, Lit::Number(0.0)),
            (P::Transform, Lit::Text("translateY(-4px)")),
        ],
    },
];

const ALERT: &[VariantTemplate] = &[
    VariantTemplate {
        name: "Info",
        description: "Neutral information",
        base: &[
            (P::BackgroundColor, Lit::Text("#eff6ff")),
            (P::TextColor, Lit::Text("#1e40af")),
            (P::BorderColor, Lit::Text("#bfdbfe")),
            (P::BorderWidth, Lit::Text("1px")),
            (P::Padding, Lit::Spacing("16px", "16px")),
            (P::Width, Lit::Text("100%")),
            (P::TextAlign, Lit::Align(TextAlign::Left)),
            (P::Cursor, Lit::Text("default")),
        ],
        states: ALERT_STATES,
    },
    VariantTemplate {
        name: "Success",
        description: "Operation succeeded",
        base: &[
            (P::BackgroundColor, Lit::Text("#ecfdf5")),
            (P::TextColor, Lit::Text("#065f46")),
            (P::BorderColor, Lit::Text("#a7f3d0")),
            (P::BorderWidth, Lit::Text("1px")),
            (P::Padding, Lit::Spacing("16px", "16px")),
            (P::Width, Lit::Text("100%")),
            (P::TextAlign, Lit::Align(TextAlign::Left)),
            (P::Cursor, Lit::Text("default")),
        ],
        states: ALERT_STATES,
    },
    VariantTemplate {
        name: "Warning",
        description: "Needs attention",
        base: &[
            (P::BackgroundColor, Lit::Text("#fffbeb")),
            (P::TextColor, Lit::Text("#92400e")),
            (P::BorderColor, Lit::Text("#fde68a")),
            (P::BorderWidth, Lit::Text("1px")),
            (P::Padding, Lit::Spacing("16px", "16px")),
            (P::Width, Lit::Text("100%")),
            (P::TextAlign, Lit::Align(TextAlign::Left)),
            (P::Cursor, Lit::Text("default")),
        ],
        states: ALERT_STATES,
    },
    VariantTemplate {
        name: "Error",
        description: "Operation failed",
        base: &[
            (P::BackgroundColor, Lit::Text("#fef2f2")),
            (P::TextColor, Lit::Text("#991b1b")),
            (P::BorderColor, Lit::Text("#fecaca")),
            (P::BorderWidth, Lit::Text("1px")),
            (P::Padding, Lit::Spacing("16px", "16px")),
            (P::Width, Lit::Text("100%")),
            (P::TextAlign, Lit::Align(TextAlign::Left)),
            (P::Cursor, Lit::Text("default")),
        ],
        states: ALERT_STATES,
    },
];

const PROGRESS_STATES: &[StateTemplate] = &[
    DEFAULT,
    StateTemplate {
        name: "complete",
        description: "Finished",
        overrides: &[(P::BackgroundColor, Lit::Text("#10b981"))],
    },
    StateTemplate {
        name: "error",
        description: "Failed",
        overrides: &[(P::BackgroundColor, Lit::Text("#ef4444"))],
    },
];

const PROGRESS: &[VariantTemplate] = &[
    VariantTemplate {
        name: "Default",
        description: "Solid bar",
        base: &[
            (P::BorderRadius, Lit::Text("9999px")),
            (P::Padding, Lit::Spacing("0px", "0px")),
            (P::Width, Lit::Text("100%")),
            (P::Height, Lit::Text("8px")),
            (P::Cursor, Lit::Text("default")),
        ],
        states: PROGRESS_STATES,
    },
    VariantTemplate {
        name: "Striped",
        description: "Gradient bar",
        base: &[
            (P::BorderRadius, Lit::Text("9999px")),
            (P::Padding, Lit::Spacing("0px", "0px")),
            (P::Width, Lit::Text("100%")),
            (P::Height, Lit::Text("8px")),
            (P::Cursor, Lit::Text("default")),
            (P::Gradient, Lit::Flag(true)),
        ],
        states: PROGRESS_STATES,
    },
];

// -- navigation -------------------------------------------------------------

const NAVBAR_STATES: &[StateTemplate] = &[
    DEFAULT,
    StateTemplate {
        name: "scrolled",
        description: "Page scrolled under the bar",
        overrides: &[(P::BoxShadow, Lit::Text("0 2px 8px rgba(0,0,0,0.08)"))],
    },
];

const NAVBAR: &[VariantTemplate] = &[
    VariantTemplate {
        name: "Default",
        description: "Solid bar",
        base: &[
            (P::BackgroundColor, Lit::Text("#ffffff")),
            (P::TextColor, Lit::Text("#111827")),
            (P::BorderColor, Lit::Text("#e5e7eb")),
            (P::BorderWidth, Lit::Text("0px 0px 1px 0px")),
            (P::BorderRadius, Lit::Text("0px")),
            (P::Padding, Lit::Spacing("24px", "16px")),
            (P::Width, Lit::Text("100%")),
            (P::TextAlign, Lit::Align(TextAlign::Left)),
            (P::Cursor, Lit::Text("default")),
        ],
        states: NAVBAR_STATES,
    },
    VariantTemplate {
        name: "Transparent",
        description: "Overlays the hero",
        base: &[
            (P::BackgroundColor, Lit::Text("transparent")),
            (P::TextColor, Lit::Text("#111827")),
            (P::BorderRadius, Lit::Text("0px")),
            (P::Padding, Lit::Spacing("24px", "16px")),
            (P::Width, Lit::Text("100%")),
            (P::TextAlign, Lit::Align(TextAlign::Left)),
            (P::Cursor, Lit::Text("default")),
        ],
        states: NAVBAR_STATES,
    },
    VariantTemplate {
        name: "Glass",
        description: "Frosted translucent bar",
        base: &[
            (P::BackgroundColor, Lit::Text("rgba(255,255,255,0.6)")),
            (P::TextColor, Lit::Text("#111827")),
            (P::BorderRadius, Lit::Text("0px")),
            (P::Padding, Lit::Spacing("24px", "16px")),
            (P::Width, Lit::Text("100%")),
            (P::TextAlign, Lit::Align(TextAlign::Left)),
            (P::Cursor, Lit::Text("default")),
            (P::Glassmorphism, Lit::Flag(true)),
        ],
        states: NAVBAR_STATES,
    },
];

const TAB_DISABLED: StateTemplate = StateTemplate {
    name: "disabled",
    description: "Not selectable",
    overrides: &[(P::Opacity, Lit::Number(0.4)), (P::Cursor, Lit::Text("not-allowed"))],
};

const TABS: &[VariantTemplate] = &[
    VariantTemplate {
        name: "Line",
        description: "Underlined active tab",
        base: &[
            (P::BackgroundColor, Lit::Text("transparent")),
            (P::TextColor, Lit::Text("#6b7280")),
            (P::BorderColor, Lit::Text("transparent")),
            (P::BorderWidth, Lit::Text("0px 0px 2px 0px")),
            (P::BorderRadius, Lit::Text("0px")),
        ],
        states: &[
            DEFAULT,
            StateTemplate {
                name: "hover",
                description: "Pointer over the tab",
                overrides: &[(P::TextColor, Lit::Text("#111827"))],
            },
            StateTemplate {
                name: "active",
                description: "Selected tab",
                overrides: &[
                    (P::TextColor, Lit::Text("#3b82f6")),
                    (P::BorderColor, Lit::Text("#3b82f6")),
                ],
            },
            TAB_DISABLED,
        ],
    },
    VariantTemplate {
        name: "Pills",
        description: "Filled active tab",
        base: &[
            (P::BackgroundColor, Lit::Text("transparent")),
            (P::TextColor, Lit::Text("#6b7280")),
            (P::BorderRadius, Lit::Text("9999px")),
        ],
        states: &[
            DEFAULT,
            StateTemplate {
                name: "hover",
                description: "Pointer over the tab",
                overrides: &[(P::BackgroundColor, Lit::Text("#f3f4f6"))],
            },
            StateTemplate {
                name: "active",
                description: "Selected tab",
                overrides: &[
                    (P::BackgroundColor, Lit::Text("#3b82f6")),
                    (P::TextColor, Lit::Text("#ffffff")),
                ],
            },
            TAB_DISABLED,
        ],
    },
    VariantTemplate {
        name: "Enclosed",
        description: "Folder-style tabs",
        base: &[
            (P::BackgroundColor, Lit::Text("transparent")),
            (P::TextColor, Lit::Text("#6b7280")),
            (P::BorderColor, Lit::Text("transparent")),
            (P::BorderWidth, Lit::Text("1px")),
            (P::BorderRadius, Lit::Text("6px 6px 0px 0px")),
        ],
        states: &[
            DEFAULT,
            StateTemplate {
                name: "active",
                description: "Selected tab",
                overrides: &[
                    (P::BackgroundColor, Lit::Text("#ffffff")),
                    (P::BorderColor, Lit::Text("#e5e7eb")),
                    (P::TextColor, Lit::Text("#111827")),
                ],
            },
            TAB_DISABLED,
        ],
    },
];

// -- overlay & layout -------------------------------------------------------

const MODAL_STATES: &[StateTemplate] = &[
    DEFAULT,
    StateTemplate {
        name: "entering",
        description: "Opening transition",
        overrides: &[
            (P::Opacity, Lit::Number(0.0)),
            (P::Transform, Lit::Text("scale(0.95)")),
        ],
    },
];

const MODAL: &[VariantTemplate] = &[
    VariantTemplate {
        name: "Default",
        description: "Centered dialog",
        base: &[
            (P::BackgroundColor, Lit::Text("#ffffff")),
            (P::TextColor, Lit::Text("#111827")),
            (P::BorderRadius, Lit::Text("16px")),
            (P::Padding, Lit::Spacing("24px", "24px")),
            (P::Width, Lit::Text("480px")),
            (P::BoxShadow, Lit::Text("0 25px 50px rgba(0,0,0,0.25)")),
            (P::TextAlign, Lit::Align(TextAlign::Left)),
            (P::Cursor, Lit::Text("default")),
        ],
        states: MODAL_STATES,
    },
    VariantTemplate {
        name: "Fullscreen",
        description: "Covers the viewport",
        base: &[
            (P::BackgroundColor, Lit::Text("#ffffff")),
            (P::TextColor, Lit::Text("#111827")),
            (P::BorderRadius, Lit::Text("0px")),
            (P::Padding, Lit::Spacing("32px", "32px")),
            (P::Width, Lit::Text("100%")),
            (P::Height, Lit::Text("100%")),
            (P::TextAlign, Lit::Align(TextAlign::Left)),
            (P::Cursor, Lit::Text("default")),
        ],
        states: MODAL_STATES,
    },
    VariantTemplate {
        name: "Glass",
        description: "Frosted translucent dialog",
        base: &[
            (P::BackgroundColor, Lit::Text("rgba(255,255,255,0.7)")),
            (P::TextColor, Lit::Text("#111827")),
            (P::BorderRadius, Lit::Text("16px")),
            (P::Padding, Lit::Spacing("24px", "24px")),
            (P::Width, Lit::Text("480px")),
            (P::TextAlign, Lit::Align(TextAlign::Left)),
            (P::Cursor, Lit::Text("default")),
            (P::Glassmorphism, Lit::Flag(true)),
        ],
        states: MODAL_STATES,
    },
];

const ACCORDION_STATES: &[StateTemplate] = &[
    DEFAULT,
    StateTemplate {
        name: "hover",
        description: "Pointer over the header",
        overrides: &[(P::BackgroundColor, Lit::Text("#f3f4f6"))],
    },
    StateTemplate {
        name: "expanded",
        description: "Panel open",
        overrides: &[(P::BackgroundColor, Lit::Text("#f9fafb"))],
    },
    DISABLED,
];

const ACCORDION: &[VariantTemplate] = &[
    VariantTemplate {
        name: "Default",
        description: "Stacked panels",
        base: &[
            (P::BackgroundColor, Lit::Text("#ffffff")),
            (P::TextColor, Lit::Text("#111827")),
            (P::BorderRadius, Lit::Text("0px")),
            (P::Padding, Lit::Spacing("16px", "12px")),
            (P::Width, Lit::Text("100%")),
            (P::TextAlign, Lit::Align(TextAlign::Left)),
        ],
        states: ACCORDION_STATES,
    },
    VariantTemplate {
        name: "Bordered",
        description: "Panels inside one border",
        base: &[
            (P::BackgroundColor, Lit::Text("#ffffff")),
            (P::TextColor, Lit::Text("#111827")),
            (P::BorderColor, Lit::Text("#e5e7eb")),
            (P::BorderWidth, Lit::Text("1px")),
            (P::BorderRadius, Lit::Text("8px")),
            (P::Padding, Lit::Spacing("16px", "12px")),
            (P::Width, Lit::Text("100%")),
            (P::TextAlign, Lit::Align(TextAlign::Left)),
        ],
        states: ACCORDION_STATES,
    },
    VariantTemplate {
        name: "Separated",
        description: "Spaced individual panels",
        base: &[
            (P::BackgroundColor, Lit::Text("#ffffff")),
            (P::TextColor, Lit::Text("#111827")),
            (P::BorderRadius, Lit::Text("8px")),
            (P::Padding, Lit::Spacing("16px", "12px")),
            (P::Margin, Lit::Spacing("0px", "8px")),
            (P::Width, Lit::Text("100%")),
            (P::BoxShadow, Lit::Text("0 1px 3px rgba(0,0,0,0.1)")),
            (P::TextAlign, Lit::Align(TextAlign::Left)),
        ],
        states: ACCORDION_STATES,
    },
];

/// Used for every type without a table entry.
pub const FALLBACK: &[VariantTemplate] = &[VariantTemplate {
    name: "Default",
    description: "Default appearance",
    base: &[],
    states: &[DEFAULT, HOVER_DIM, DISABLED],
}];

/// Component type -> starter variants.
pub const VARIANT_TABLE: &[(ComponentType, &[VariantTemplate])] = &[
    (ComponentType::Button, BUTTON),
    (ComponentType::Card, CARD),
    (ComponentType::Input, INPUT),
    (ComponentType::Textarea, INPUT),
    (ComponentType::SearchInput, INPUT),
    (ComponentType::Select, SELECT),
    (ComponentType::Checkbox, CHECKBOX),
    (ComponentType::Switch, SWITCH),
    (ComponentType::Badge, BADGE),
    (ComponentType::Avatar, AVATAR),
    (ComponentType::Tooltip, TOOLTIP),
    (ComponentType::Alert, ALERT),
    (ComponentType::Progress, PROGRESS),
    (ComponentType::Navbar, NAVBAR),
    (ComponentType::Tabs, TABS),
    (ComponentType::Modal, MODAL),
    (ComponentType::Dialog, MODAL),
    (ComponentType::Accordion, ACCORDION),
];

/// Look up the templates for a type, falling back to `FALLBACK`.
pub fn templates_for(component_type: ComponentType) -> &'static [VariantTemplate] {
    VARIANT_TABLE
        .iter()
        .find(|(ty, _)| *ty == component_type)
        .map(|(_, templates)| *templates)
        .unwrap_or(FALLBACK)
}

/// Build the starter variants for a component type.
///
/// Variant ids are slugs of the variant name; state ids are
/// `<variant-slug>-<state-slug>`, unique within the component.
pub fn create_default_variants(component_type: ComponentType) -> Vec<ComponentVariant> {
    templates_for(component_type).iter().map(build_variant).collect()
}

fn build_variant(template: &VariantTemplate) -> ComponentVariant {
    let variant_id = slug(template.name);

    let mut styles = StyleRecord::default();
    for (property, lit) in template.base {
        if let Err(e) = styles.set(*property, lit.to_value()) {
            warn!(variant = template.name, error = %e, "Skipping malformed base entry");
        }
    }

    let states = template
        .states
        .iter()
        .map(|st| {
            let mut state = ComponentState::new(
                format!("{}-{}", variant_id, slug(st.name)),
                st.name,
                st.description,
            );
            state.styles = build_overrides(st.overrides);
            state
        })
        .collect();

    ComponentVariant {
        id: variant_id,
        name: template.name.to_string(),
        description: template.description.to_string(),
        styles,
        states,
    }
}

fn build_overrides(patch: StylePatch) -> StyleOverrides {
    let mut overrides = StyleOverrides::new();
    for (property, lit) in patch {
        if let Err(e) = overrides.insert(*property, lit.to_value()) {
            warn!(error = %e, "Skipping malformed state override");
        }
    }
    overrides
}

/// Lowercase, dash-separated identifier.
pub(crate) fn slug(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::resolve_style;

    fn state_names(variant: &ComponentVariant) -> Vec<&str> {
        variant.states.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_button_variants() {
        let variants = create_default_variants(ComponentType::Button);
        let names: Vec<&str> = variants.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Primary", "Secondary", "Outline", "Ghost", "Destructive"]);
        assert_eq!(
            state_names(&variants[0]),
            vec!["default", "hover", "active", "disabled", "loading"]
        );
    }

    #[test]
    fn test_card_variants() {
        let variants = create_default_variants(ComponentType::Card);
        let names: Vec<&str> = variants.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Default", "Elevated", "Outlined", "Interactive"]);
    }

    #[test]
    fn test_input_has_validation_states() {
        let variants = create_default_variants(ComponentType::Input);
        let default = &variants[0];
        for name in ["focus", "error", "success", "disabled"] {
            assert!(default.state_by_name(name).is_some(), "missing {name}");
        }
    }

    #[test]
    fn test_unknown_type_falls_back() {
        let variants = create_default_variants(ComponentType::Kbd);
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].name, "Default");
        assert_eq!(state_names(&variants[0]), vec!["default", "hover", "disabled"]);
        assert_eq!(variants[0].styles, StyleRecord::default());
    }

    #[test]
    fn test_each_type_has_at_most_one_entry() {
        for ty in ComponentType::ALL {
            let entries = VARIANT_TABLE.iter().filter(|(t, _)| *t == ty).count();
            assert!(entries <= 1, "{} has {} table entries", ty.as_str(), entries);
        }
    }

    #[test]
    fn test_table_entries_are_well_formed() {
        let mut tables: Vec<&[VariantTemplate]> = VARIANT_TABLE.iter().map(|(_, t)| *t).collect();
        tables.push(FALLBACK);

        for templates in tables {
            assert!(!templates.is_empty());
            for template in templates {
                for (property, lit) in template.base {
                    assert!(lit.to_value().check(*property).is_ok(), "{}: {}", template.name, property);
                }
                assert_eq!(template.states[0].name, "default");
                assert!(template.states[0].overrides.is_empty());
                for st in template.states {
                    for (property, lit) in st.overrides {
                        assert!(lit.to_value().check(*property).is_ok());
                    }
                }
            }
        }
    }

    #[test]
    fn test_factory_overrides_are_minimal() {
        // Every stored override must actually differ from the variant base.
        for ty in ComponentType::ALL {
            for variant in create_default_variants(ty) {
                for state in &variant.states {
                    for (property, value) in state.styles.iter() {
                        assert_ne!(
                            &variant.styles.get(property),
                            value,
                            "{:?}/{}/{} overrides {} with the base value",
                            ty,
                            variant.name,
                            state.name,
                            property
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_ids_unique_within_component() {
        for ty in ComponentType::ALL {
            let variants = create_default_variants(ty);
            let mut variant_ids: Vec<&str> = variants.iter().map(|v| v.id.as_str()).collect();
            variant_ids.sort();
            variant_ids.dedup();
            assert_eq!(variant_ids.len(), variants.len());

            for variant in &variants {
                let mut state_ids: Vec<&str> = variant.states.iter().map(|s| s.id.as_str()).collect();
                state_ids.sort();
                state_ids.dedup();
                assert_eq!(state_ids.len(), variant.states.len());
            }
        }
    }

    #[test]
    fn test_default_state_resolves_to_base() {
        for variant in create_default_variants(ComponentType::Button) {
            let default = variant.default_state().unwrap();
            assert_eq!(resolve_style(&variant, default), variant.styles);
        }
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Primary"), "primary");
        assert_eq!(slug("  Big  Call to-Action! "), "big-call-to-action");
    }
}
